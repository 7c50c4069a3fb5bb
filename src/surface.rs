use crate::Error;
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Planetary surface the reference frame is attached to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurfaceType {
    /// WGS84 reference ellipsoid, the only surface we have parameters for.
    #[default]
    EarthWgs84,
    /// Raw numeric tag that does not map to a supported surface.
    Other(u16),
}

impl SurfaceType {
    /// Name of the WGS84 surface, as used in external descriptions.
    pub const EARTH_WGS84: &'static str = "EARTH_WGS84";

    /// Lenient string conversion: unrecognized names fall back to
    /// [SurfaceType::EarthWgs84] after emitting a warning.
    pub fn convert(s: &str) -> Self {
        match s.parse::<Self>() {
            Ok(surface) => surface,
            Err(e) => {
                warn!("{}: using {} by default", e, Self::EARTH_WGS84);
                Self::EarthWgs84
            },
        }
    }
    /// Lenient name conversion: unsupported surfaces are reported
    /// as WGS84 after emitting a warning.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EarthWgs84 => Self::EARTH_WGS84,
            Self::Other(tag) => {
                warn!(
                    "surface type {} not recognized: using {} by default",
                    tag,
                    Self::EARTH_WGS84
                );
                Self::EARTH_WGS84
            },
        }
    }
    /// Legacy numeric tag
    pub fn tag(&self) -> u16 {
        match self {
            Self::EarthWgs84 => 1,
            Self::Other(tag) => *tag,
        }
    }
}

impl From<u16> for SurfaceType {
    fn from(tag: u16) -> Self {
        match tag {
            1 => Self::EarthWgs84,
            tag => Self::Other(tag),
        }
    }
}

impl std::fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EarthWgs84 => write!(f, "{}", Self::EARTH_WGS84),
            Self::Other(tag) => write!(f, "SURFACE({})", tag),
        }
    }
}

impl std::str::FromStr for SurfaceType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        let c = s.trim().to_uppercase();
        match c.as_str() {
            Self::EARTH_WGS84 => Ok(Self::EarthWgs84),
            _ => Err(Error::UnknownSurface(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SurfaceType;
    use crate::Error;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("EARTH_WGS84", SurfaceType::EarthWgs84)]
    #[case("EARTH_MOON", SurfaceType::EarthWgs84)]
    #[case("", SurfaceType::EarthWgs84)]
    #[case("earth_wgs84", SurfaceType::EarthWgs84)]
    fn lenient_convert(#[case] name: &str, #[case] expected: SurfaceType) {
        assert_eq!(SurfaceType::convert(name), expected);
    }

    #[test]
    fn lenient_name() {
        assert_eq!(SurfaceType::EarthWgs84.name(), "EARTH_WGS84");
        assert_eq!(SurfaceType::Other(7).name(), "EARTH_WGS84");
    }

    #[test]
    fn strict_parsing() {
        assert_eq!(
            SurfaceType::from_str(" EARTH_WGS84 "),
            Ok(SurfaceType::EarthWgs84)
        );
        assert_eq!(
            SurfaceType::from_str("earth_wgs84"),
            Ok(SurfaceType::EarthWgs84)
        );
        assert_eq!(
            SurfaceType::from_str("Mars"),
            Err(Error::UnknownSurface("Mars".to_string()))
        );
    }

    #[test]
    fn tags() {
        assert_eq!(SurfaceType::from(1_u16), SurfaceType::EarthWgs84);
        assert_eq!(SurfaceType::from(3_u16), SurfaceType::Other(3));
        assert_eq!(SurfaceType::EarthWgs84.tag(), 1);
        assert_eq!(SurfaceType::Other(3).tag(), 3);
        assert_eq!(SurfaceType::EarthWgs84.to_string(), "EARTH_WGS84");
    }
}
