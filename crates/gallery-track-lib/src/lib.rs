//! Gallery Track Library - GPS track loading for the gallery map view
//!
//! This library turns the GPX files attached to a gallery folder into polylines for a map,
//! and the geotagged photos of that folder into map markers. Track loading is asynchronous
//! and guarded against stale results: when the host replaces the file list while a load is
//! in flight, the outdated load is abandoned instead of publishing a mix of old and new data.
//!
//! # Architecture
//!
//! - **[`GeoPoint`]**: A single WGS84 position parsed from a track file or photo metadata
//! - **[`outline()`]**: Distance-based down-sampling of a track for lightweight rendering
//! - **[`TrackConverter`]**: The asynchronous `convert(file)` collaborator, with a GPX
//!   implementation in [`GpxFileConverter`]
//! - **[`TrackLoader`]**: Sequential, generation-guarded loading of a file list into a
//!   published [`TrackSet`]
//! - **[`MapScene`]**: Markers, tracks, outlines and bounds assembled for a map renderer

mod convert;
mod loader;
mod markers;
mod outline;
mod point;
mod scene;
pub mod utils;

// Public API exports
pub use convert::{GpxFileConverter, TrackConverter, TrackFile, parse_gpx_points};
pub use loader::{Generation, LoadError, LoadOutcome, LoaderConfig, TrackLoader, TrackSet};
pub use markers::{MapMarker, MarkerConfig, PhotoInfo, PreviewSize, map_markers};
pub use outline::{OUTLINE_THRESHOLD_KM, outline};
pub use point::GeoPoint;
pub use scene::{GeoBounds, MapScene};

/// Error types for track data
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
