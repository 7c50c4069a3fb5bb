//! Reference ellipsoid parameters and geodetic <=> ECEF conversions
use crate::prelude::{SurfaceType, Vector3};
use log::error;

/// Reference ellipsoid. The five parameters are always
/// derived together from one [SurfaceType].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipsoid {
    /// Semi major axis [m]
    a: f64,
    /// Semi minor axis [m]
    b: f64,
    /// Flattening (n.a)
    f: f64,
    /// First eccentricity (n.a)
    e: f64,
    /// Second eccentricity (n.a)
    p: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl Ellipsoid {
    /// WGS84 equatorial radius [m]
    pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6378137.0;
    /// WGS84 polar radius [m]
    pub const WGS84_SEMI_MINOR_AXIS: f64 = 6356752.314245;
    /// WGS84 flattening
    pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

    fn wgs84() -> Self {
        let (a, b) = (Self::WGS84_SEMI_MAJOR_AXIS, Self::WGS84_SEMI_MINOR_AXIS);
        Self {
            a,
            b,
            f: Self::WGS84_FLATTENING,
            e: (1.0 - b.powi(2) / a.powi(2)).sqrt(),
            p: (a.powi(2) / b.powi(2) - 1.0).sqrt(),
        }
    }
    /// Builds the [Ellipsoid] describing given surface.
    /// Unsupported surfaces keep the WGS84 parameters.
    pub fn new(surface: SurfaceType) -> Self {
        let mut ellipsoid = Self::wgs84();
        ellipsoid.set_surface(surface);
        ellipsoid
    }
    /// Updates all parameters to describe given surface.
    /// On unsupported surface, parameters are left untouched.
    pub fn set_surface(&mut self, surface: SurfaceType) {
        match surface {
            SurfaceType::EarthWgs84 => *self = Self::wgs84(),
            SurfaceType::Other(tag) => {
                error!("unknown surface type [{}]: ellipsoid left unchanged", tag);
            },
        }
    }
    /// Semi major axis [m]
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }
    /// Semi minor axis [m]
    pub fn semi_minor_axis(&self) -> f64 {
        self.b
    }
    pub fn flattening(&self) -> f64 {
        self.f
    }
    pub fn first_eccentricity(&self) -> f64 {
        self.e
    }
    pub fn second_eccentricity(&self) -> f64 {
        self.p
    }
    /// Radius of curvature in the prime vertical [m] at given latitude [rad]
    pub fn curvature(&self, lat_rad: f64) -> f64 {
        self.a / (1.0 - self.e.powi(2) * lat_rad.sin().powi(2)).sqrt()
    }
    /// Converts (latitude [rad], longitude [rad], elevation [m]) to ECEF [m]
    pub fn geodetic_to_ecef(&self, geodetic: &Vector3<f64>) -> Vector3<f64> {
        let (lat, lon, h) = (geodetic[0], geodetic[1], geodetic[2]);
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        let n = self.curvature(lat);
        Vector3::new(
            (h + n) * cos_lat * cos_lon,
            (h + n) * cos_lat * sin_lon,
            (self.b.powi(2) / self.a.powi(2) * n + h) * sin_lat,
        )
    }
    /// Converts ECEF [m] to (latitude [rad], longitude [rad], elevation [m]),
    /// using Bowring's closed form. Nothing is guarded: degenerate
    /// points (Earth center) produce NaN.
    pub fn ecef_to_geodetic(&self, ecef: &Vector3<f64>) -> Vector3<f64> {
        let (x, y, z) = (ecef[0], ecef[1], ecef[2]);
        // distance to the polar axis
        let rho = (x.powi(2) + y.powi(2)).sqrt();
        let theta = (z * self.a / (rho * self.b)).atan();

        // p is the second eccentricity here, not the planar radius
        let lat = ((z + self.p.powi(2) * self.b * theta.sin().powi(3))
            / (rho - self.e.powi(2) * self.a * theta.cos().powi(3)))
        .atan();

        let lon = y.atan2(x);
        let h = rho / lat.cos() - self.curvature(lat);
        Vector3::new(lat, lon, h)
    }
}
