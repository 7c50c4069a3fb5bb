#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cache;
mod coordinates;
mod distance;
mod ellipsoid;
mod error;
mod frame;
mod reference;
mod surface;

// pub export
pub use error::Error;


// prelude
pub mod prelude {
    pub use crate::coordinates::SphericalCoordinates;
    pub use crate::distance::{great_circle_distance, EARTH_RADIUS};
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::frame::CoordinateType;
    pub use crate::reference::ReferencePoint;
    pub use crate::surface::SurfaceType;
    // re-export
    pub use nalgebra::{Matrix3, Vector3};
}
