//! Reference-region anchors and named classification targets.

use gr_core::GeoPoint;

/// Ordered set of points standing in for a reference region (e.g. a
/// country's key cities).
///
/// Distance to the region is taken as the minimum over the set, so order
/// never affects results; it is preserved anyway for display purposes.
/// The non-empty invariant is checked at the engine entry points
/// ([`classify`](crate::classify::classify),
/// [`compute_extent`](crate::extent::compute_extent)),
/// not at construction, so the error surfaces where the minimum would be
/// taken.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorSet {
    points: Vec<GeoPoint>,
}

impl AnchorSet {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.points.iter().copied()
    }

    /// Non-empty and every point in the coordinate domain.
    pub(crate) fn validate(&self) -> crate::error::RangeResult<()> {
        if self.is_empty() {
            return Err(crate::error::RangeError::EmptyAnchorSet);
        }
        for p in self.iter() {
            if !p.in_domain() {
                return Err(crate::error::RangeError::OutOfDomain(p));
            }
        }
        Ok(())
    }
}

impl FromIterator<GeoPoint> for AnchorSet {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A classification target: a position plus a display label.
///
/// Labels need not be unique; classification operates per instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedTarget {
    pub name: String,
    pub point: GeoPoint,
}

impl NamedTarget {
    pub fn new(name: impl Into<String>, point: GeoPoint) -> Self {
        Self { name: name.into(), point }
    }
}
