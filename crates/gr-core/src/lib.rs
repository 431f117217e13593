//! `gr-core` — coordinate type and distance models for the georange engine.
//!
//! This crate is the foundation of the workspace.  It has no internal
//! dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`geo`]      | `GeoPoint` (f64 degrees), coordinate domain predicate  |
//! | [`distance`] | `DistanceModel` trait, `Haversine`, `Distance` tag     |
//! | [`vincenty`] | `Vincenty` iterative WGS-84 solver with fallback       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |
//!
//! Nothing in this crate can fail: the distance models accept unrestricted
//! real inputs (domain validation lives in `gr-range`), and the iterative
//! solver reports non-convergence as a tagged fallback value rather than
//! an error.

pub mod distance;
pub mod geo;
pub mod vincenty;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::{haversine_km, Distance, DistanceModel, Haversine, Precision, EARTH_RADIUS_KM};
pub use geo::GeoPoint;
pub use vincenty::{Vincenty, WGS84_A_KM, WGS84_B_KM};
