//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. All default to `false`.

/// Emit a per-stage summary (lengths, warm-up counts) each time a pipeline is built.
pub const PRINT_PIPELINE_STAGES: bool = false;

/// Emit the whole-sample normalization statistics used by the stress index.
pub const PRINT_STRESS_NORMALIZATION: bool = false;

/// Emit the bucket counts after binning a return series.
pub const PRINT_HISTOGRAM: bool = false;

/// Emit detailed series file load/save logs.
pub const PRINT_SERDE: bool = false;
