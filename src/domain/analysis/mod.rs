//! Analysis module - Top-level analysis orchestration.

mod engine;

pub use engine::{AnalysisEngine, AnalysisResult, ENGINE_VERSION};
