//! Distance models over the Earth's surface.
//!
//! Two interchangeable implementations of [`DistanceModel`] exist:
//! [`Haversine`] (spherical, one trigonometric pass) and
//! [`Vincenty`](crate::vincenty::Vincenty) (ellipsoidal, iterative, more
//! accurate over long and near-antipodal separations).  Consumers such as
//! the range classifier are written once against the trait and work with
//! either.

use crate::geo::GeoPoint;

/// Mean Earth radius in kilometres, the default sphere for [`Haversine`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// How a [`Distance`] value was obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// The model produced the value its formula specifies.
    Nominal,
    /// An iterative solver failed to converge and the value came from the
    /// spherical fallback instead.  Not an error: the value is still a
    /// usable approximation, but precision-sensitive callers should check.
    Degraded,
}

/// A computed distance in kilometres plus its precision tag.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    pub km: f64,
    pub precision: Precision,
}

impl Distance {
    #[inline]
    pub fn nominal(km: f64) -> Self {
        Self { km, precision: Precision::Nominal }
    }

    #[inline]
    pub fn degraded(km: f64) -> Self {
        Self { km, precision: Precision::Degraded }
    }

    #[inline]
    pub fn is_degraded(self) -> bool {
        self.precision == Precision::Degraded
    }
}

/// Pluggable distance strategy.
///
/// Implementations must be pure (no side effects, no interior mutability)
/// and cheap to call per point pair: the classifier evaluates one call per
/// (anchor, target) combination and may fan those calls out across a rayon
/// pool, hence the `Send + Sync` bound.
pub trait DistanceModel: Send + Sync {
    /// Distance between `a` and `b` in kilometres.
    ///
    /// Must return 0 for coincident points.  The value is never negative
    /// and is symmetric in its arguments within floating-point tolerance.
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> Distance;
}

/// Spherical-Earth great-circle model (haversine formula).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Haversine {
    /// Sphere radius in kilometres.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self { radius_km: EARTH_RADIUS_KM }
    }
}

impl DistanceModel for Haversine {
    #[inline]
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> Distance {
        Distance::nominal(haversine_km(a, b, self.radius_km))
    }
}

/// Haversine great-circle distance in kilometres on a sphere of the given
/// radius.
///
/// Accepts unrestricted real inputs; out-of-domain coordinates give a
/// non-failing but physically meaningless result.
pub fn haversine_km(a: GeoPoint, b: GeoPoint, radius_km: f64) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    // 2·asin(√h), written with atan2; rounding can push h one ulp past 1
    // for antipodal pairs, so the complement is floored at 0.
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    c * radius_km
}
