//! Gallery Tracks - command line front end
//!
//! Loads the GPX files and photo list of a gallery folder and prints the map
//! scene (markers, tracks, outlines, bounds) as JSON for a map renderer.

mod logging;
mod run;
mod settings;

pub use logging::setup_logging;
pub use run::{CliError, build_scene, run, write_scene};
pub use settings::Settings;
