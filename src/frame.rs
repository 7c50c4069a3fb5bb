use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate frames supported by the transforms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateType {
    /// Latitude [rad], longitude [rad], elevation [m]
    Spherical,
    /// Earth centered, Earth fixed [m]
    Ecef,
    /// East, North, Up at the reference point [m]
    Global,
    /// Local frame, rotated by the heading offset.
    /// The reverse transform is shared with [CoordinateType::Local2], so
    /// Local -> X -> Local rotates the horizontal components by 180° - 2 * heading.
    Local,
    /// Local frame, rotated by the heading offset
    Local2,
}

impl CoordinateType {
    /// Legacy numeric tag
    pub fn tag(&self) -> u8 {
        match self {
            Self::Spherical => 1,
            Self::Ecef => 2,
            Self::Global => 3,
            Self::Local => 4,
            Self::Local2 => 5,
        }
    }
}

impl TryFrom<u8> for CoordinateType {
    type Error = Error;
    fn try_from(tag: u8) -> Result<Self, Error> {
        match tag {
            1 => Ok(Self::Spherical),
            2 => Ok(Self::Ecef),
            3 => Ok(Self::Global),
            4 => Ok(Self::Local),
            5 => Ok(Self::Local2),
            tag => Err(Error::UnknownCoordinateTag(tag)),
        }
    }
}

impl std::fmt::Display for CoordinateType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Spherical => write!(f, "SPHERICAL"),
            Self::Ecef => write!(f, "ECEF"),
            Self::Global => write!(f, "GLOBAL"),
            Self::Local => write!(f, "LOCAL"),
            Self::Local2 => write!(f, "LOCAL2"),
        }
    }
}

impl std::str::FromStr for CoordinateType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        let c = s.trim().to_uppercase();
        match c.as_str() {
            "SPHERICAL" => Ok(Self::Spherical),
            "ECEF" => Ok(Self::Ecef),
            "GLOBAL" => Ok(Self::Global),
            "LOCAL" => Ok(Self::Local),
            "LOCAL2" => Ok(Self::Local2),
            _ => Err(Error::UnknownCoordinateType(s.trim().to_string())),
        }
    }
}
