//! Track file conversion
//!
//! This module defines the `TrackConverter` collaborator used by the loader and
//! the GPX implementation that reads track files from disk.

use crate::{GeoPoint, Result};
use std::future::Future;
use std::path::{Path, PathBuf};

/// Handle to a track file supplied by the host gallery view
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackFile {
    path: PathBuf,
}

impl TrackFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for TrackFile {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// Converts a track file into its ordered sequence of points.
///
/// An empty result is valid and means the file has nothing to draw.
pub trait TrackConverter {
    fn convert(&self, file: &TrackFile) -> impl Future<Output = Result<Vec<GeoPoint>>> + Send;
}

/// Reads GPX files from the filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct GpxFileConverter;

impl TrackConverter for GpxFileConverter {
    async fn convert(&self, file: &TrackFile) -> Result<Vec<GeoPoint>> {
        let bytes = tokio::fs::read(file.path()).await?;
        let points = parse_gpx_points(&bytes)?;
        tracing::debug!(
            "Converted {} into {} points",
            file.path().display(),
            points.len()
        );
        Ok(points)
    }
}

/// Parse a GPX document and flatten every track segment into a single point list.
///
/// Route points and standalone waypoints are not part of a recorded track and
/// are ignored. Points with invalid coordinates are skipped.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn parse_gpx_points(bytes: &[u8]) -> Result<Vec<GeoPoint>> {
    let gpx_data = gpx::read(bytes)?;

    let capacity = gpx_data
        .tracks
        .iter()
        .flat_map(|track| &track.segments)
        .map(|segment| segment.points.len())
        .sum();
    let mut points = Vec::with_capacity(capacity);

    for track in &gpx_data.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                match GeoPoint::try_from_waypoint(waypoint) {
                    Ok(point) => points.push(point),
                    Err(e) => tracing::warn!("Skipping track point: {}", e),
                }
            }
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataError;

    const TWO_SEGMENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="1.0" lon="1.0"><name>Camp</name></wpt>
  <trk>
    <name>Morning walk</name>
    <trkseg>
      <trkpt lat="51.5074" lon="-0.1278"><ele>11.0</ele></trkpt>
      <trkpt lat="51.5080" lon="-0.1270"></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="51.5100" lon="-0.1250"></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    const NO_TRACKS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
</gpx>"#;

    #[test]
    fn test_parse_flattens_segments_in_order() {
        let points = parse_gpx_points(TWO_SEGMENTS.as_bytes()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], GeoPoint::new(51.5074, -0.1278).with_elevation(11.0));
        assert_eq!(points[1].latitude, 51.5080);
        assert_eq!(points[2].longitude, -0.1250);
    }

    #[test]
    fn test_parse_without_tracks_is_empty() {
        let points = parse_gpx_points(NO_TRACKS.as_bytes()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_parse_invalid_document() {
        let result = parse_gpx_points(b"this is not xml");
        assert!(matches!(result, Err(DataError::GpxParse(_))));
    }

    #[tokio::test]
    async fn test_gpx_file_converter_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "gallery-track-lib-convert-{}.gpx",
            std::process::id()
        ));
        std::fs::write(&path, TWO_SEGMENTS).unwrap();

        let points = GpxFileConverter
            .convert(&TrackFile::new(&path))
            .await
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(points.len(), 3);
    }

    #[tokio::test]
    async fn test_gpx_file_converter_missing_file() {
        let file = TrackFile::new("/definitely/not/here.gpx");
        let result = GpxFileConverter.convert(&file).await;
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
