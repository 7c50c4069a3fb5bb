//! Geodetic <=> local frame transforms
use log::{debug, error};
use map_3d::{deg2rad, rad2deg};

use crate::{
    cache::TransformCache,
    distance::great_circle_distance,
    ellipsoid::Ellipsoid,
    prelude::{CoordinateType, ReferencePoint, SurfaceType, Vector3},
};

/// [SphericalCoordinates] relates a local Cartesian frame, anchored at a
/// [ReferencePoint], to positions and velocities on the planet.
/// All transforms pivot through ECEF. Every setter rebuilds the
/// internal transform terms before returning.
#[derive(Debug)]
pub struct SphericalCoordinates {
    /// Reference point and heading
    reference: ReferencePoint,
    /// Ellipsoid of the current surface
    ellipsoid: Ellipsoid,
    /// Derived transform terms
    cache: TransformCache,
}

impl Default for SphericalCoordinates {
    fn default() -> Self {
        Self::from(ReferencePoint::default())
    }
}

impl From<ReferencePoint> for SphericalCoordinates {
    fn from(reference: ReferencePoint) -> Self {
        let ellipsoid = Ellipsoid::new(reference.surface);
        let cache = TransformCache::new(&reference, &ellipsoid);
        Self {
            reference,
            ellipsoid,
            cache,
        }
    }
}

impl Clone for SphericalCoordinates {
    /// Cloning replays the public state: transform terms are rebuilt.
    fn clone(&self) -> Self {
        Self::from(self.reference)
    }
}

impl PartialEq for SphericalCoordinates {
    fn eq(&self, other: &Self) -> bool {
        self.reference.surface == other.reference.surface
            && self.reference.latitude == other.reference.latitude
            && self.reference.longitude == other.reference.longitude
            && (self.reference.elevation - other.reference.elevation).abs()
                <= Self::ELEVATION_TOLERANCE
            && self.reference.heading == other.reference.heading
    }
}

impl SphericalCoordinates {
    /// Elevation tolerance [m] applied when comparing two reference frames
    pub const ELEVATION_TOLERANCE: f64 = 1.0E-6;

    /// Builds Self anchored at latitude, longitude and elevation 0
    /// on given surface, with no heading offset.
    pub fn new(surface: SurfaceType) -> Self {
        Self::from(ReferencePoint {
            surface,
            ..Default::default()
        })
    }
    /// Builds Self anchored at latitude [rad], longitude [rad], elevation [m],
    /// with given heading offset [rad].
    pub fn with_reference(
        surface: SurfaceType,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        heading: f64,
    ) -> Self {
        Self::from(ReferencePoint::from_rad(
            surface, latitude, longitude, elevation, heading,
        ))
    }
    /// Returns the surface type
    pub fn surface(&self) -> SurfaceType {
        self.reference.surface
    }
    /// Returns the reference latitude [rad]
    pub fn latitude_reference(&self) -> f64 {
        self.reference.latitude
    }
    /// Returns the reference longitude [rad]
    pub fn longitude_reference(&self) -> f64 {
        self.reference.longitude
    }
    /// Returns the reference elevation [m]
    pub fn elevation_reference(&self) -> f64 {
        self.reference.elevation
    }
    /// Returns the heading offset [rad]
    pub fn heading_offset(&self) -> f64 {
        self.reference.heading
    }
    /// Returns a snapshot of the reference point
    pub fn reference(&self) -> ReferencePoint {
        self.reference
    }
    /// Returns the ellipsoid currently in use
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
    /// Returns the reference point in ECEF [m]
    pub fn origin(&self) -> Vector3<f64> {
        self.cache.origin
    }
    /// Updates the surface type. Unsupported surfaces are recorded,
    /// but the ellipsoid parameters are left untouched.
    pub fn set_surface(&mut self, surface: SurfaceType) {
        debug!("surface: {}", surface);
        self.reference.surface = surface;
        self.ellipsoid.set_surface(surface);
        self.update_transformation_matrix();
    }
    /// Updates the reference latitude [rad]
    pub fn set_latitude_reference(&mut self, latitude: f64) {
        self.reference.latitude = latitude;
        self.update_transformation_matrix();
    }
    /// Updates the reference longitude [rad]
    pub fn set_longitude_reference(&mut self, longitude: f64) {
        self.reference.longitude = longitude;
        self.update_transformation_matrix();
    }
    /// Updates the reference elevation [m]
    pub fn set_elevation_reference(&mut self, elevation: f64) {
        self.reference.elevation = elevation;
        self.update_transformation_matrix();
    }
    /// Updates the heading offset [rad]
    pub fn set_heading_offset(&mut self, heading: f64) {
        self.reference.heading = heading;
        self.update_transformation_matrix();
    }
    fn update_transformation_matrix(&mut self) {
        self.cache = TransformCache::new(&self.reference, &self.ellipsoid);
    }
    /// LOCAL horizontal components to GLOBAL orientation
    fn local_to_global(&self, v: Vector3<f64>) -> Vector3<f64> {
        let (cos, sin) = (self.cache.cos_hea, self.cache.sin_hea);
        Vector3::new(-v[0] * cos + v[1] * sin, -v[0] * sin - v[1] * cos, v[2])
    }
    /// LOCAL2 horizontal components to GLOBAL orientation
    fn local2_to_global(&self, v: Vector3<f64>) -> Vector3<f64> {
        let (cos, sin) = (self.cache.cos_hea, self.cache.sin_hea);
        Vector3::new(v[0] * cos + v[1] * sin, -v[0] * sin + v[1] * cos, v[2])
    }
    /// GLOBAL orientation to LOCAL (or LOCAL2) horizontal components
    fn global_to_local(&self, v: Vector3<f64>) -> Vector3<f64> {
        let (cos, sin) = (self.cache.cos_hea, self.cache.sin_hea);
        Vector3::new(v[0] * cos - v[1] * sin, v[0] * sin + v[1] * cos, v[2])
    }
    /// Converts a position from one [CoordinateType] to another.
    /// [CoordinateType::Spherical] positions are (latitude [rad], longitude [rad], elevation [m]),
    /// all others are expressed in meters.
    pub fn position_transform(
        &self,
        pos: Vector3<f64>,
        input: CoordinateType,
        output: CoordinateType,
    ) -> Vector3<f64> {
        let origin = self.cache.origin;
        let rot_global_to_ecef = &self.cache.rot_global_to_ecef;

        let ecef = match input {
            CoordinateType::Local => origin + rot_global_to_ecef * self.local_to_global(pos),
            CoordinateType::Local2 => origin + rot_global_to_ecef * self.local2_to_global(pos),
            CoordinateType::Global => origin + rot_global_to_ecef * pos,
            CoordinateType::Spherical => self.ellipsoid.geodetic_to_ecef(&pos),
            CoordinateType::Ecef => pos,
        };

        match output {
            CoordinateType::Spherical => self.ellipsoid.ecef_to_geodetic(&ecef),
            CoordinateType::Global => self.cache.rot_ecef_to_global * (ecef - origin),
            CoordinateType::Local | CoordinateType::Local2 => {
                self.global_to_local(self.cache.rot_ecef_to_global * (ecef - origin))
            },
            CoordinateType::Ecef => ecef,
        }
    }
    /// Converts a velocity from one [CoordinateType] to another.
    /// Velocities have no [CoordinateType::Spherical] representation:
    /// when either side is spherical, `vel` is returned as is.
    pub fn velocity_transform(
        &self,
        vel: Vector3<f64>,
        input: CoordinateType,
        output: CoordinateType,
    ) -> Vector3<f64> {
        if input == CoordinateType::Spherical || output == CoordinateType::Spherical {
            return vel;
        }

        let rot_global_to_ecef = &self.cache.rot_global_to_ecef;

        let ecef = match input {
            CoordinateType::Local => rot_global_to_ecef * self.local_to_global(vel),
            CoordinateType::Local2 => rot_global_to_ecef * self.local2_to_global(vel),
            CoordinateType::Global => rot_global_to_ecef * vel,
            // Spherical returned early
            CoordinateType::Ecef | CoordinateType::Spherical => vel,
        };

        match output {
            CoordinateType::Global => self.cache.rot_ecef_to_global * ecef,
            CoordinateType::Local | CoordinateType::Local2 => {
                self.global_to_local(self.cache.rot_ecef_to_global * ecef)
            },
            // Spherical returned early
            CoordinateType::Ecef | CoordinateType::Spherical => ecef,
        }
    }
    /// [Self::position_transform] for raw (legacy) coordinate tags.
    /// Invalid tags are reported and `pos` is returned untransformed.
    pub fn position_transform_tagged(
        &self,
        pos: Vector3<f64>,
        input: u8,
        output: u8,
    ) -> Vector3<f64> {
        match (
            CoordinateType::try_from(input),
            CoordinateType::try_from(output),
        ) {
            (Ok(input), Ok(output)) => self.position_transform(pos, input, output),
            (Err(e), _) | (_, Err(e)) => {
                error!("{}: position left untransformed", e);
                pos
            },
        }
    }
    /// [Self::velocity_transform] for raw (legacy) coordinate tags.
    /// Invalid tags are reported and `vel` is returned untransformed.
    pub fn velocity_transform_tagged(
        &self,
        vel: Vector3<f64>,
        input: u8,
        output: u8,
    ) -> Vector3<f64> {
        let spherical = CoordinateType::Spherical.tag();
        if input == spherical || output == spherical {
            return vel;
        }
        match (
            CoordinateType::try_from(input),
            CoordinateType::try_from(output),
        ) {
            (Ok(input), Ok(output)) => self.velocity_transform(vel, input, output),
            (Err(e), _) | (_, Err(e)) => {
                error!("{}: velocity left untransformed", e);
                vel
            },
        }
    }
    /// Converts a LOCAL position [m] to (latitude [ddeg], longitude [ddeg], elevation [m])
    pub fn spherical_from_local_position(&self, xyz: Vector3<f64>) -> Vector3<f64> {
        let geo = self.position_transform(xyz, CoordinateType::Local, CoordinateType::Spherical);
        Vector3::new(rad2deg(geo[0]), rad2deg(geo[1]), geo[2])
    }
    /// Converts (latitude [ddeg], longitude [ddeg], elevation [m]) to a LOCAL position [m]
    pub fn local_from_spherical_position(&self, geo: Vector3<f64>) -> Vector3<f64> {
        let geo_rad = Vector3::new(deg2rad(geo[0]), deg2rad(geo[1]), geo[2]);
        self.position_transform(geo_rad, CoordinateType::Spherical, CoordinateType::Local)
    }
    /// Converts a LOCAL velocity to GLOBAL
    pub fn global_from_local_velocity(&self, vel: Vector3<f64>) -> Vector3<f64> {
        self.velocity_transform(vel, CoordinateType::Local, CoordinateType::Global)
    }
    /// Converts a GLOBAL velocity to LOCAL
    pub fn local_from_global_velocity(&self, vel: Vector3<f64>) -> Vector3<f64> {
        self.velocity_transform(vel, CoordinateType::Global, CoordinateType::Local)
    }
    /// Great circle distance [m] between two (latitude [rad], longitude [rad]) pairs,
    /// on a sphere of [crate::prelude::EARTH_RADIUS].
    pub fn distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
        great_circle_distance(lat_a, lon_a, lat_b, lon_b)
    }
}
