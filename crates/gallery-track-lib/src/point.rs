//! Geographic point type shared by tracks, outlines and markers

use crate::{DataError, Result};

/// A WGS84 position in degrees, with optional elevation in meters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub elevation: Option<f64>,
}

impl GeoPoint {
    /// Create a point without elevation
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
        }
    }

    /// Attach an elevation in meters
    #[inline]
    pub const fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Check that both coordinates are finite and inside the WGS84 ranges
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Build a point from a GPX waypoint, rejecting invalid coordinates
    pub fn try_from_waypoint(waypoint: &gpx::Waypoint) -> Result<Self> {
        let point = waypoint.point();
        let geo_point = Self {
            latitude: point.y(),
            longitude: point.x(),
            elevation: waypoint.elevation,
        };
        if !geo_point.is_valid() {
            return Err(DataError::InvalidGeometry(format!(
                "coordinates out of range: ({}, {})",
                geo_point.latitude, geo_point.longitude
            )));
        }
        Ok(geo_point)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    /// geo uses (x, y) = (longitude, latitude)
    #[inline]
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    #[inline]
    fn from(p: geo::Point<f64>) -> Self {
        GeoPoint::new(p.y(), p.x())
    }
}
