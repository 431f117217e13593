//! Geographic coordinate type.
//!
//! `GeoPoint` stores degrees as `f64`.  Range verdicts compare
//! kilometre-scale distances against user-supplied radii and the Vincenty
//! solver iterates to a 1e-12 radian tolerance, so single precision is not
//! an option here.

/// A WGS-84 geographic coordinate in degrees.
///
/// Physically meaningful values have latitude in [-90, 90] and longitude in
/// [-180, 180]; see [`in_domain`](GeoPoint::in_domain).  The type itself
/// accepts any reals; validation happens at the range-engine entry points,
/// not here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both coordinates lie in the valid domain
    /// (latitude [-90, 90], longitude [-180, 180], bounds inclusive).
    #[inline]
    pub fn in_domain(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
