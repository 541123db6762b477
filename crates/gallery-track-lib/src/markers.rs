//! Photo markers
//!
//! Geotagged photos become markers on the map. Each marker carries the size of
//! its preview popup, fitted into a square box while keeping the photo's
//! aspect ratio as displayed (after EXIF rotation).

use crate::GeoPoint;

/// Configuration for marker previews
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerConfig {
    /// Length of the longer preview side in pixels. Default: 500
    pub preview_max_side: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            preview_max_side: 500.0,
        }
    }
}

/// Photo metadata needed to place a marker
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoInfo {
    pub name: String,
    /// Stored width in pixels, before applying the orientation
    pub width: u32,
    /// Stored height in pixels, before applying the orientation
    pub height: u32,
    /// EXIF orientation tag (1-8)
    #[cfg_attr(feature = "serde", serde(default = "default_orientation"))]
    pub orientation: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<GeoPoint>,
}

#[cfg(feature = "serde")]
fn default_orientation() -> u8 {
    1
}

impl PhotoInfo {
    /// Width and height as displayed. Orientations 5-8 are rotated by 90 degrees.
    pub fn rotated_size(&self) -> (u32, u32) {
        match self.orientation {
            5..=8 => (self.height, self.width),
            _ => (self.width, self.height),
        }
    }

    /// Position usable on the map. A zero latitude or longitude counts as missing.
    pub fn map_position(&self) -> Option<GeoPoint> {
        self.position
            .filter(|p| p.is_valid() && p.latitude != 0.0 && p.longitude != 0.0)
    }
}

/// Size of a marker's preview in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewSize {
    pub width: f64,
    pub height: f64,
}

impl PreviewSize {
    /// Fit a `width` x `height` image into a `max_side` square box
    pub fn fit(width: u32, height: u32, max_side: f64) -> Self {
        if width == 0 || height == 0 {
            return Self {
                width: max_side,
                height: max_side,
            };
        }
        let (w, h) = (f64::from(width), f64::from(height));
        if w > h {
            Self {
                width: max_side,
                height: max_side * (h / w),
            }
        } else {
            Self {
                width: max_side * (w / h),
                height: max_side,
            }
        }
    }
}

/// A photo placed on the map
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapMarker {
    pub name: String,
    pub position: GeoPoint,
    pub orientation: u8,
    pub preview: PreviewSize,
}

/// Build markers for every photo with a usable position, in input order
pub fn map_markers(photos: &[PhotoInfo], config: &MarkerConfig) -> Vec<MapMarker> {
    let markers: Vec<MapMarker> = photos
        .iter()
        .filter_map(|photo| {
            let position = photo.map_position()?;
            let (width, height) = photo.rotated_size();
            Some(MapMarker {
                name: photo.name.clone(),
                position,
                orientation: photo.orientation,
                preview: PreviewSize::fit(width, height, config.preview_max_side),
            })
        })
        .collect();

    tracing::debug!(
        "Placed {} markers for {} photos",
        markers.len(),
        photos.len()
    );
    markers
}
