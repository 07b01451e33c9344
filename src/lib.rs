//! ZT Compass - Decision support for zero-trust architecture selection.
//!
//! Scores three predefined security-architecture patterns (identity-centric,
//! behavior-centric, hybrid) against an organization's six-dimensional
//! constraint profile, detects conflicting priorities, and surfaces
//! near-ties with qualitative decision guidance.

pub mod cli;
pub mod domain;
pub mod report;
