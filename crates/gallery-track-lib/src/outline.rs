//! Outline simplification
//!
//! An outline is a coarse version of a track used where the full resolution
//! polyline is not needed. Points closer than a distance threshold to the last
//! kept point are dropped.

use crate::{GeoPoint, utils};

/// Default minimum distance between consecutive outline points, in kilometers
pub const OUTLINE_THRESHOLD_KM: f64 = 0.5;

/// Down-sample a track, keeping only points farther than `threshold_km` from the
/// previously kept point.
///
/// The first point is always kept. The last point of the track is always the
/// last point of the outline, so any track with two or more points yields a
/// drawable line segment. A single-point track yields a single-point outline.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn outline(track: &[GeoPoint], threshold_km: f64) -> Vec<GeoPoint> {
    let Some((first, rest)) = track.split_first() else {
        return Vec::new();
    };

    let mut out = vec![*first];
    let mut last = first;
    let mut last_is_tail = rest.is_empty();

    for (i, point) in rest.iter().enumerate() {
        if utils::haversine_km(point, last) > threshold_km {
            out.push(*point);
            last = point;
            last_is_tail = i + 1 == rest.len();
        }
    }

    if !last_is_tail && let Some(tail) = rest.last() {
        out.push(*tail);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Points along the equator, `step_km` apart
    fn equator_track(count: usize, step_km: f64) -> Vec<GeoPoint> {
        let step_deg = step_km / 111.194_926_644_558_73;
        (0..count)
            .map(|i| GeoPoint::new(0.0, i as f64 * step_deg))
            .collect()
    }

    #[test]
    fn test_empty_track() {
        assert!(outline(&[], OUTLINE_THRESHOLD_KM).is_empty());
    }

    #[test]
    fn test_single_point_track() {
        let track = [GeoPoint::new(47.0, 8.0)];
        assert_eq!(outline(&track, OUTLINE_THRESHOLD_KM), track.to_vec());
    }

    #[test]
    fn test_far_apart_points_are_all_kept() {
        let track = equator_track(5, 1.0);
        assert_eq!(outline(&track, OUTLINE_THRESHOLD_KM), track);
    }

    #[test]
    fn test_close_points_collapse_to_endpoints() {
        let track = equator_track(20, 0.01);
        let out = outline(&track, OUTLINE_THRESHOLD_KM);
        assert_eq!(out, vec![track[0], track[19]]);
    }

    #[test]
    fn test_two_identical_points() {
        let p = GeoPoint::new(10.0, 10.0);
        let out = outline(&[p, p], OUTLINE_THRESHOLD_KM);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_tail_appended_after_dense_end() {
        // Three widely spaced points, then a dense cluster near the last one
        let mut track = equator_track(3, 2.0);
        let anchor = track[2];
        for i in 1..=4 {
            track.push(GeoPoint::new(0.0, anchor.longitude + i as f64 * 0.0001));
        }
        let out = outline(&track, OUTLINE_THRESHOLD_KM);
        assert_eq!(out.len(), 4);
        assert_eq!(&out[..3], &track[..3]);
        assert_eq!(out.last(), track.last());
    }

    #[test]
    fn test_tail_not_duplicated_when_kept() {
        let track = equator_track(3, 1.0);
        let out = outline(&track, OUTLINE_THRESHOLD_KM);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_spacing_respects_threshold() {
        let track = equator_track(200, 0.13);
        let out = outline(&track, OUTLINE_THRESHOLD_KM);
        // Every kept interior point is more than the threshold away from its predecessor
        for pair in out[..out.len() - 1].windows(2) {
            assert!(utils::haversine_km(&pair[0], &pair[1]) > OUTLINE_THRESHOLD_KM);
        }
        assert_eq!(out.first(), track.first());
        assert_eq!(out.last(), track.last());
        assert!(out.len() < track.len());
    }

    #[test]
    fn test_custom_threshold() {
        let track = equator_track(10, 1.0);
        let out = outline(&track, 2.5);
        // Keeps every third point (3 km > 2.5 km), plus the tail
        assert_eq!(out, vec![track[0], track[3], track[6], track[9]]);
    }
}
