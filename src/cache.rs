use crate::{
    ellipsoid::Ellipsoid,
    prelude::{Matrix3, ReferencePoint, Vector3},
};
use log::trace;

/// Terms derived from the [ReferencePoint] and [Ellipsoid].
/// Never mutated directly: always rebuilt as a whole.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TransformCache {
    /// ECEF to GLOBAL (ENU) rotation
    pub rot_ecef_to_global: Matrix3<f64>,
    /// GLOBAL (ENU) to ECEF rotation
    pub rot_global_to_ecef: Matrix3<f64>,
    /// cos(-heading)
    pub cos_hea: f64,
    /// sin(-heading)
    pub sin_hea: f64,
    /// Reference point, in ECEF [m]
    pub origin: Vector3<f64>,
}

impl TransformCache {
    pub fn new(reference: &ReferencePoint, ellipsoid: &Ellipsoid) -> Self {
        let (sin_lat, cos_lat) = reference.latitude.sin_cos();
        let (sin_lon, cos_lon) = reference.longitude.sin_cos();

        let rot_ecef_to_global = Matrix3::<f64>::new(
            -sin_lon,
            cos_lon,
            0.0_f64,
            -cos_lon * sin_lat,
            -sin_lon * sin_lat,
            cos_lat,
            cos_lon * cos_lat,
            sin_lon * cos_lat,
            sin_lat,
        );

        let rot_global_to_ecef = rot_ecef_to_global.transpose();

        // heading is expressed clockwise (GLOBAL to LOCAL),
        // the rotations below are anti-clockwise.
        let (sin_hea, cos_hea) = (-reference.heading).sin_cos();

        let origin = ellipsoid.geodetic_to_ecef(&Vector3::new(
            reference.latitude,
            reference.longitude,
            reference.elevation,
        ));

        trace!("{:?} - origin(ecef): {}", reference, origin);

        Self {
            rot_ecef_to_global,
            rot_global_to_ecef,
            cos_hea,
            sin_hea,
            origin,
        }
    }
}
