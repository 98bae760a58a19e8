//! Utility helpers: trace logging spans and step profiling.

pub mod logging;
pub mod profiling;

pub use logging::warn_if_frame_budget_exceeded;
pub use profiling::StepProfiler;
