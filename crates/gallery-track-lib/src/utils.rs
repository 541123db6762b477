//! Utility functions for distances between geographic points

use crate::GeoPoint;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (Haversine formula)
///
/// Elevation is ignored. This is the distance metric the outline threshold
/// is expressed in.
#[inline]
pub fn haversine_km(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let delta_lat = (p2.latitude - p1.latitude).to_radians();
    let delta_lon = (p2.longitude - p1.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total length of a polyline in kilometers
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| haversine_km(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = GeoPoint::new(51.5074, -0.1278);
        assert!(haversine_km(&p, &p).abs() < f64::EPSILON);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // One degree of latitude is ~111.19 km on a 6371 km sphere
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = haversine_km(&a, &b);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_haversine_london_paris() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);
        let d = haversine_km(&london, &paris);
        assert!((d - 343.5).abs() < 1.0, "got {d}");
        // Symmetric
        assert!((d - haversine_km(&paris, &london)).abs() < 1e-9);
    }

    #[test]
    fn test_path_length() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 0.0),
        ];
        assert!((path_length_km(&points) - 222.39).abs() < 0.02);
        assert_eq!(path_length_km(&points[..1]), 0.0);
        assert_eq!(path_length_km(&[]), 0.0);
    }
}
