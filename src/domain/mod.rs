//! Domain layer - the scoring and trade-off engine.
//!
//! Everything here is a pure, deterministic function of the six-integer
//! constraint profile, apart from the per-session memoization cache in
//! `analysis` and the sequential state in `session`.

pub mod analysis;
pub mod conflicts;
pub mod foundation;
pub mod profile;
pub mod scoring;
pub mod session;
