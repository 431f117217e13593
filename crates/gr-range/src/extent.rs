//! Display-extent derivation: a padded, clamped bounding rectangle.
//!
//! The rectangle is an equirectangular approximation (fixed km-per-degree
//! conversion) of the area a range query covers.  It is a display envelope
//! for framing a map, **not** a geodesic buffer; containment questions go
//! through [`classify`](crate::classify::classify).

use gr_core::GeoPoint;

use crate::anchors::AnchorSet;
use crate::error::{RangeError, RangeResult};

/// Latitude clamp bound in degrees, inset from ±90 to keep downstream
/// projections away from the pole singularity.
pub const LAT_CLAMP_DEG: f64 = 85.0;

/// A padded bounding rectangle in degrees.  Invariant: min ≤ max per axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingExtent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingExtent {
    /// Whether `p` falls inside the rectangle, edges inclusive.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.lon)
            && (self.min_lat..=self.max_lat).contains(&p.lat)
    }

    #[inline]
    pub fn width_deg(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    #[inline]
    pub fn height_deg(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Tuning knobs for [`compute_extent_with`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtentParams {
    /// Kilometres per degree for the radius→degrees conversion.  111 km
    /// matches one degree of latitude on the mean-radius sphere.
    pub km_per_degree: f64,
    /// Lower bound on the extra display margin, in degrees.
    pub min_margin_deg: f64,
}

impl Default for ExtentParams {
    fn default() -> Self {
        Self { km_per_degree: 111.0, min_margin_deg: 20.0 }
    }
}

/// [`compute_extent_with`] under [`ExtentParams::default`].
pub fn compute_extent(anchors: &AnchorSet, radius_km: f64) -> RangeResult<BoundingExtent> {
    compute_extent_with(anchors, radius_km, ExtentParams::default())
}

/// Derive the display envelope for a range query.
///
/// Takes the raw bounding box of the anchors, pads every side by the radius
/// converted to degrees plus a margin of
/// `max(min_margin_deg, radius_deg * 0.3)`, then clamps longitude to
/// [-180, 180] and latitude to ±[`LAT_CLAMP_DEG`].  Padding is symmetric
/// and clamping monotone, so min ≤ max holds on both axes; growing the
/// radius never shrinks any side.
///
/// # Errors
///
/// [`RangeError::EmptyAnchorSet`], [`RangeError::NegativeRadius`], or
/// [`RangeError::OutOfDomain`], as for
/// [`classify`](crate::classify::classify).
pub fn compute_extent_with(
    anchors: &AnchorSet,
    radius_km: f64,
    params: ExtentParams,
) -> RangeResult<BoundingExtent> {
    anchors.validate()?;
    if radius_km < 0.0 {
        return Err(RangeError::NegativeRadius(radius_km));
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    for p in anchors.iter() {
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
        min_lon = min_lon.min(p.lon);
        max_lon = max_lon.max(p.lon);
    }

    let radius_deg = radius_km / params.km_per_degree;
    let margin_deg = params.min_margin_deg.max(radius_deg * 0.3);
    let pad = radius_deg + margin_deg;

    Ok(BoundingExtent {
        min_lon: (min_lon - pad).clamp(-180.0, 180.0),
        max_lon: (max_lon + pad).clamp(-180.0, 180.0),
        min_lat: (min_lat - pad).clamp(-LAT_CLAMP_DEG, LAT_CLAMP_DEG),
        max_lat: (max_lat + pad).clamp(-LAT_CLAMP_DEG, LAT_CLAMP_DEG),
    })
}
