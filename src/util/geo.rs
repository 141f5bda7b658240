//! Great-circle distance between coordinates (haversine).

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Distance to `other` in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        calculate_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Whether both coordinates are finite and inside the geographic ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Inputs are not range checked. Out-of-range values give a defined but
/// meaningless result, and NaN or infinite inputs yield NaN.
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    // degree deltas overflow to infinity for huge finite inputs
    let d_lat = lat2.to_radians() - lat1.to_radians();
    let d_lng = lng2.to_radians() - lng1.to_radians();
    // rounding can push `a` just outside [0, 1] near coincident or antipodal points
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const LONDON: GeoPoint = GeoPoint { latitude: 51.5074, longitude: -0.1278 };
    const PARIS: GeoPoint = GeoPoint { latitude: 48.8566, longitude: 2.3522 };

    #[test]
    fn test_coincident_points_are_zero() {
        for &(lat, lng) in &[(0.0, 0.0), (51.5074, -0.1278), (-89.9, 179.9), (90.0, 0.0)] {
            assert_eq!(calculate_distance(lat, lng, lat, lng), 0.0);
        }
    }

    #[test]
    fn test_quarter_circumference() {
        let d = calculate_distance(0.0, 0.0, 0.0, 90.0);
        assert_abs_diff_eq!(d, 10007.5, epsilon = 1.0);
    }

    #[test]
    fn test_london_paris() {
        let d = LONDON.distance_km(&PARIS);
        println!("London -> Paris: {:.2} km", d);
        assert!(d > 339.0 && d < 349.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (LONDON, PARIS),
            (GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(40.7128, -74.0060)),
            (GeoPoint::new(69.6492, 18.9553), GeoPoint::new(-54.8019, -68.3030)),
        ];
        for (a, b) in pairs {
            assert_abs_diff_eq!(a.distance_km(&b), b.distance_km(&a), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = calculate_distance(0.0, 0.0, 0.0, 180.0);
        assert_abs_diff_eq!(d, EARTH_RADIUS_KM * std::f64::consts::PI, epsilon = 1e-6);
        let poles = calculate_distance(90.0, 0.0, -90.0, 0.0);
        assert!(poles.is_finite());
        assert_abs_diff_eq!(poles, EARTH_RADIUS_KM * std::f64::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_non_negative_over_grid() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lng = -180.0;
            while lng <= 180.0 {
                let d = calculate_distance(lat, lng, -lat * 0.5, lng + 37.0);
                assert!(d >= 0.0 && d.is_finite(), "bad distance {} at ({}, {})", d, lat, lng);
                lng += 15.0;
            }
            lat += 7.5;
        }
    }

    #[test]
    fn test_out_of_range_is_not_an_error() {
        let d = calculate_distance(120.0, 400.0, -200.0, -720.0);
        assert!(d.is_finite() && d >= 0.0);
    }

    #[test]
    fn test_extreme_finite_inputs_stay_finite() {
        for (lat1, lng1, lat2, lng2) in [(-1e308, 0.0, 1e308, 0.0), (0.0, -1e308, 0.0, 1e308)] {
            let d = calculate_distance(lat1, lng1, lat2, lng2);
            assert!(
                d.is_finite() && d >= 0.0,
                "got {} for ({}, {}, {}, {})",
                d, lat1, lng1, lat2, lng2
            );
        }
    }

    #[test]
    fn test_non_finite_propagates_nan() {
        assert!(calculate_distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
        assert!(calculate_distance(0.0, f64::INFINITY, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_is_valid() {
        assert!(LONDON.is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_serde_shape_and_aliases() {
        let json = serde_json::to_value(PARIS).unwrap();
        assert_eq!(json, serde_json::json!({ "latitude": 48.8566, "longitude": 2.3522 }));

        let short: GeoPoint = serde_json::from_str(r#"{"lat": 51.5074, "lng": -0.1278}"#).unwrap();
        assert_eq!(short, LONDON);
        let lon: GeoPoint = serde_json::from_str(r#"{"lat": 1.0, "lon": 2.0}"#).unwrap();
        assert_eq!(lon, GeoPoint::new(1.0, 2.0));
    }
}
