//! Range-engine error type.

use thiserror::Error;

use gr_core::GeoPoint;

/// Invalid inputs to classification or extent computation.
///
/// The distance models themselves never fail; everything here is the
/// caller's to fix before invoking the engine.  Nothing is retried and
/// nothing is fatal: callers decide whether to abort or substitute.
#[derive(Debug, Error)]
pub enum RangeError {
    #[error("anchor set is empty; minimum distance is undefined")]
    EmptyAnchorSet,

    #[error("radius must be non-negative, got {0} km")]
    NegativeRadius(f64),

    #[error("coordinate out of domain: {0}")]
    OutOfDomain(GeoPoint),
}

pub type RangeResult<T> = Result<T, RangeError>;
