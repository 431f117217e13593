//! `gr-range` — range classification and display-extent derivation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`anchors`] | `AnchorSet` (reference region), `NamedTarget`             |
//! | [`classify`]| `classify`, `min_distance`, `ClassificationResult`        |
//! | [`extent`]  | `compute_extent`, `ExtentParams`, `BoundingExtent`        |
//! | [`error`]   | `RangeError`, `RangeResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Classifies targets on Rayon's thread pool.                 |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.         |
//!
//! # Quick-start
//!
//! ```rust
//! use gr_core::{GeoPoint, Haversine};
//! use gr_range::{classify, compute_extent, AnchorSet, NamedTarget};
//!
//! let anchors = AnchorSet::new(vec![
//!     GeoPoint::new(39.9, 116.4), // Beijing
//!     GeoPoint::new(31.2, 121.4), // Shanghai
//! ]);
//! let targets = vec![
//!     NamedTarget::new("Tokyo", GeoPoint::new(35.6, 139.8)),
//!     NamedTarget::new("New York", GeoPoint::new(40.7, -74.0)),
//! ];
//!
//! let results = classify(&anchors, &targets, 8_000.0, &Haversine::default())?;
//! assert!(results[0].within);
//! assert!(!results[1].within);
//!
//! let extent = compute_extent(&anchors, 8_000.0)?;
//! assert!(extent.contains(targets[0].point));
//! # Ok::<(), gr_range::RangeError>(())
//! ```

pub mod anchors;
pub mod classify;
pub mod error;
pub mod extent;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use anchors::{AnchorSet, NamedTarget};
pub use classify::{classify, min_distance, ClassificationResult};
pub use error::{RangeError, RangeResult};
pub use extent::{
    compute_extent, compute_extent_with, BoundingExtent, ExtentParams, LAT_CLAMP_DEG,
};
