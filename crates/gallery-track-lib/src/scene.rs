//! MapScene - everything a map renderer needs for one gallery view
//!
//! Combines the photo markers with the published tracks and outlines, and
//! computes the bounds and center the map should be fitted to.

use crate::{GeoPoint, MapMarker, TrackSet};
use geo::{BoundingRect, MultiPoint, Rect};

/// Geographic bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing all points, or `None` when there are none
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let multi_point: MultiPoint<f64> = points
            .into_iter()
            .map(|p| geo::Point::from(*p))
            .collect();
        multi_point.bounding_rect().map(Self::from)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.latitude)
            && (self.west..=self.east).contains(&point.longitude)
    }
}

impl From<Rect<f64>> for GeoBounds {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        }
    }
}

/// Markers, tracks and outlines for one gallery view
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapScene {
    pub markers: Vec<MapMarker>,
    pub tracks: Vec<Vec<GeoPoint>>,
    pub outlines: Vec<Vec<GeoPoint>>,
    /// Covers every marker and track point; `None` for an empty scene
    pub bounds: Option<GeoBounds>,
    /// Center of `bounds`, or (0, 0) for an empty scene
    pub center: GeoPoint,
}

impl MapScene {
    pub fn new(markers: Vec<MapMarker>, track_set: &TrackSet) -> Self {
        let bounds = GeoBounds::from_points(
            markers
                .iter()
                .map(|m| &m.position)
                .chain(track_set.tracks.iter().flatten()),
        );
        let center = bounds
            .map(|b| b.center())
            .unwrap_or(GeoPoint::new(0.0, 0.0));

        Self {
            markers,
            tracks: track_set.tracks.clone(),
            outlines: track_set.outlines.clone(),
            bounds,
            center,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.tracks.is_empty()
    }
}
