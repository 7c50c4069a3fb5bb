/// Mean Earth radius [m] used by the spherical approximation
pub const EARTH_RADIUS: f64 = 6371000.0;

/// Haversine distance [m] between two (latitude [rad], longitude [rad]) pairs.
/// This is a spherical approximation, independent of the reference ellipsoid.
pub fn great_circle_distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = lat_b - lat_a;
    let d_lon = lon_b - lon_a;

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * lat_a.cos() * lat_b.cos();

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

#[cfg(test)]
mod test {
    use super::{great_circle_distance, EARTH_RADIUS};
    use map_3d::deg2rad;
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(0.0, 0.0, 0.0, 90.0, EARTH_RADIUS * PI / 2.0)]
    #[case(0.0, 0.0, 0.0, 180.0, EARTH_RADIUS * PI)]
    #[case(0.0, 0.0, 90.0, 0.0, EARTH_RADIUS * PI / 2.0)]
    #[case(-90.0, 0.0, 90.0, 0.0, EARTH_RADIUS * PI)]
    #[case(45.0, 10.0, 45.0, 10.0, 0.0)]
    fn haversine(
        #[case] lat_a: f64,
        #[case] lon_a: f64,
        #[case] lat_b: f64,
        #[case] lon_b: f64,
        #[case] expected: f64,
    ) {
        let d = great_circle_distance(
            deg2rad(lat_a),
            deg2rad(lon_a),
            deg2rad(lat_b),
            deg2rad(lon_b),
        );
        let err = (d - expected).abs();
        assert!(err < 1.0E-6, "distance error too large {}", err);
    }

    #[test]
    fn quarter_circumference() {
        let d = great_circle_distance(0.0, 0.0, 0.0, deg2rad(90.0));
        assert_eq!(d.round(), 10007543.0);
    }

    #[test]
    fn symmetric_non_negative() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..256 {
            let (lat_a, lon_a) = (rng.random_range(-1.5..1.5), rng.random_range(-PI..PI));
            let (lat_b, lon_b) = (rng.random_range(-1.5..1.5), rng.random_range(-PI..PI));

            let ab = great_circle_distance(lat_a, lon_a, lat_b, lon_b);
            let ba = great_circle_distance(lat_b, lon_b, lat_a, lon_a);

            assert!(ab >= 0.0, "negative distance {}", ab);
            assert!((ab - ba).abs() < 1.0E-6, "asymmetric distance {} {}", ab, ba);
            assert_eq!(great_circle_distance(lat_a, lon_a, lat_a, lon_a), 0.0);
        }
    }
}
