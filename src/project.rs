//! Map projections from geographic to planar coordinates.
//!
//! Input points are `(longitude, latitude)` in degrees. Projections are pure
//! coordinate transforms, so a single instance can be shared across render
//! workers.

use crate::primitives::Point2;

/// WGS84 semi-major axis in metres.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limit used by Web Mercator, in degrees.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A planar map projection.
pub trait Projection: Send + Sync {
    /// Projects a `(longitude, latitude)` point given in degrees.
    fn project(&self, lon_lat: Point2<f64>) -> Point2<f64>;

    /// Projects a buffer of points in place.
    fn project_in_place(&self, points: &mut [Point2<f64>]) {
        for p in points.iter_mut() {
            *p = self.project(*p);
        }
    }
}

/// Leaves coordinates untouched, for input that is already planar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Projection for Identity {
    #[inline]
    fn project(&self, lon_lat: Point2<f64>) -> Point2<f64> {
        lon_lat
    }
}

/// Plate carrée: longitude and latitude scaled linearly to metres.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equirectangular;

impl Projection for Equirectangular {
    #[inline]
    fn project(&self, lon_lat: Point2<f64>) -> Point2<f64> {
        Point2::new(
            EARTH_RADIUS * lon_lat.x.to_radians(),
            EARTH_RADIUS * lon_lat.y.to_radians(),
        )
    }
}

/// Spherical Mercator. Latitudes are clamped to [`MERCATOR_MAX_LATITUDE`]
/// so that the poles stay finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mercator;

impl Projection for Mercator {
    fn project(&self, lon_lat: Point2<f64>) -> Point2<f64> {
        let lat = lon_lat
            .y
            .clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE)
            .to_radians();
        let y = EARTH_RADIUS * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
        Point2::new(EARTH_RADIUS * lon_lat.x.to_radians(), y)
    }
}
