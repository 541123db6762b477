use clap::Parser;
use gallery_track_lib::{LoaderConfig, MarkerConfig, TrackFile};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Gallery Tracks - Builds the map view of a gallery folder: photo markers, GPS tracks and their outlines
pub struct Settings {
    /// GPX files to load, drawn in the given order
    #[clap(short, long, value_name = "FILE")]
    pub gpx_files: Vec<PathBuf>,

    /// JSON file with the photo list (name, width, height, orientation, position)
    #[clap(short, long, value_name = "FILE")]
    pub photos: Option<PathBuf>,

    /// Minimum distance in kilometers between consecutive outline points
    #[clap(long, default_value = "0.5")]
    pub outline_threshold_km: f64,

    /// Longer side of the marker preview in pixels
    #[clap(long, default_value = "500")]
    pub preview_size: f64,

    /// Pretty-print the JSON output
    #[clap(long, default_value = "false")]
    pub pretty: bool,

    /// Log filter used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    pub log_level: String,
}

impl Settings {
    /// Parse from the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            outline_threshold_km: self.outline_threshold_km,
        }
    }

    pub fn marker_config(&self) -> MarkerConfig {
        MarkerConfig {
            preview_max_side: self.preview_size,
        }
    }

    pub fn track_files(&self) -> Vec<TrackFile> {
        self.gpx_files.iter().cloned().map(TrackFile::from).collect()
    }
}
