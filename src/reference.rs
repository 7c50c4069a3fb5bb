use crate::prelude::SurfaceType;
use map_3d::{deg2rad, rad2deg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ReferencePoint] describes where the local frame is anchored
/// on the planet surface and how it is oriented.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReferencePoint {
    /// Surface the reference point lies on
    pub surface: SurfaceType,
    /// Latitude [rad]
    pub latitude: f64,
    /// Longitude [rad]
    pub longitude: f64,
    /// Elevation above the ellipsoid [m]
    pub elevation: f64,
    /// Heading offset [rad], from East to the local X axis,
    /// positive clockwise.
    pub heading: f64,
}

impl ReferencePoint {
    /// Builds Self from latitude [rad], longitude [rad], elevation [m] and heading [rad]
    pub fn from_rad(
        surface: SurfaceType,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        heading: f64,
    ) -> Self {
        Self {
            surface,
            latitude,
            longitude,
            elevation,
            heading,
        }
    }
    /// Builds Self from latitude [ddeg], longitude [ddeg], elevation [m] and heading [ddeg]
    pub fn from_ddeg(
        surface: SurfaceType,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        heading: f64,
    ) -> Self {
        Self::from_rad(
            surface,
            deg2rad(latitude),
            deg2rad(longitude),
            elevation,
            deg2rad(heading),
        )
    }
    /// Returns (latitude [ddeg], longitude [ddeg], heading [ddeg])
    pub fn angles_ddeg(&self) -> (f64, f64, f64) {
        (
            rad2deg(self.latitude),
            rad2deg(self.longitude),
            rad2deg(self.heading),
        )
    }
}

#[cfg(test)]
mod test {
    use super::ReferencePoint;
    use crate::prelude::SurfaceType;

    #[test]
    fn default() {
        let reference = ReferencePoint::default();
        assert_eq!(reference.surface, SurfaceType::EarthWgs84);
        assert_eq!(reference.latitude, 0.0);
        assert_eq!(reference.longitude, 0.0);
        assert_eq!(reference.elevation, 0.0);
        assert_eq!(reference.heading, 0.0);
    }

    #[test]
    fn ddeg() {
        let reference = ReferencePoint::from_ddeg(SurfaceType::EarthWgs84, 45.0, -90.0, 10.0, 180.0);
        let err = (reference.latitude - std::f64::consts::FRAC_PI_4).abs();
        assert!(err < 1.0E-12, "latitude error too large {}", err);
        let err = (reference.longitude + std::f64::consts::FRAC_PI_2).abs();
        assert!(err < 1.0E-12, "longitude error too large {}", err);
        let err = (reference.heading - std::f64::consts::PI).abs();
        assert!(err < 1.0E-12, "heading error too large {}", err);
        assert_eq!(reference.elevation, 10.0);

        let (lat, lon, hea) = reference.angles_ddeg();
        assert!((lat - 45.0).abs() < 1.0E-9);
        assert!((lon + 90.0).abs() < 1.0E-9);
        assert!((hea - 180.0).abs() < 1.0E-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize() {
        let reference: ReferencePoint =
            serde_json::from_str(r#"{"latitude": 0.5, "elevation": 12.5}"#).unwrap();
        assert_eq!(reference.surface, SurfaceType::EarthWgs84);
        assert_eq!(reference.latitude, 0.5);
        assert_eq!(reference.longitude, 0.0);
        assert_eq!(reference.elevation, 12.5);
        assert_eq!(reference.heading, 0.0);
    }
}
