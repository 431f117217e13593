//! Range classification: minimum distance to an anchor set versus a radius.

use gr_core::{Distance, DistanceModel, GeoPoint};

use crate::anchors::{AnchorSet, NamedTarget};
use crate::error::{RangeError, RangeResult};

/// Verdict for one target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassificationResult {
    /// Label copied from the input target.
    pub name: String,
    /// Position copied from the input target.
    pub point: GeoPoint,
    /// Minimum distance to any anchor, in kilometres.
    pub distance_km: f64,
    /// `distance_km <= radius`; the boundary counts as within.
    pub within: bool,
    /// Some contributing distance was a degraded fallback value; the
    /// minimum itself may be off by the fallback's error.
    pub degraded: bool,
}

/// Classify each target as within/beyond `radius_km` of the anchor set.
///
/// Distances are minimum-over-anchors under the supplied model.  Output
/// preserves target order; same-named targets are kept, not deduplicated.
/// With the `parallel` feature targets are classified on Rayon's pool.
///
/// # Errors
///
/// [`RangeError::EmptyAnchorSet`] if `anchors` is empty,
/// [`RangeError::NegativeRadius`] if `radius_km < 0`, and
/// [`RangeError::OutOfDomain`] if any anchor or target coordinate falls
/// outside the documented latitude/longitude domain.
pub fn classify<M: DistanceModel + ?Sized>(
    anchors: &AnchorSet,
    targets: &[NamedTarget],
    radius_km: f64,
    model: &M,
) -> RangeResult<Vec<ClassificationResult>> {
    anchors.validate()?;
    if radius_km < 0.0 {
        return Err(RangeError::NegativeRadius(radius_km));
    }
    for t in targets {
        if !t.point.in_domain() {
            return Err(RangeError::OutOfDomain(t.point));
        }
    }

    let classify_one = |t: &NamedTarget| {
        let d = min_over_anchors(anchors, t.point, model);
        ClassificationResult {
            name: t.name.clone(),
            point: t.point,
            distance_km: d.km,
            within: d.km <= radius_km,
            degraded: d.is_degraded(),
        }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(targets.par_iter().map(classify_one).collect())
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok(targets.iter().map(classify_one).collect())
    }
}

/// Minimum distance from `point` to any anchor.
///
/// Degraded if *any* evaluated pair fell back to the approximate formula:
/// a degraded value can perturb which anchor wins, so the minimum itself
/// is suspect.
///
/// # Errors
///
/// Same validation as [`classify`].
pub fn min_distance<M: DistanceModel + ?Sized>(
    anchors: &AnchorSet,
    point: GeoPoint,
    model: &M,
) -> RangeResult<Distance> {
    anchors.validate()?;
    if !point.in_domain() {
        return Err(RangeError::OutOfDomain(point));
    }
    Ok(min_over_anchors(anchors, point, model))
}

fn min_over_anchors<M: DistanceModel + ?Sized>(
    anchors: &AnchorSet,
    point: GeoPoint,
    model: &M,
) -> Distance {
    let mut min_km = f64::INFINITY;
    let mut degraded = false;
    for anchor in anchors.iter() {
        let d = model.distance(anchor, point);
        degraded |= d.is_degraded();
        min_km = min_km.min(d.km);
    }
    // callers validate non-emptiness, so min_km is finite here
    if degraded {
        Distance::degraded(min_km)
    } else {
        Distance::nominal(min_km)
    }
}
