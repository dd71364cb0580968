//! # tensorsum
//!
//! **Per-tensor summary statistics for training-loop monitoring.**
//!
//! tensorsum reduces a tensor to four numbers (min, max, mean, and population
//! standard deviation) and writes them, once per pass, either to stdout or
//! to a per-tensor `.summary` file.
//!
//! ## Features
//!
//! - **Numerically careful**: two-pass variance with f64 accumulation for
//!   every element type, so large offsets do not cancel
//! - **Any element type**: f64, f32, signed and unsigned integers, and
//!   f16/bf16 behind the `f16` feature
//! - **Scoped names**: `scope/layer/weight` is written to
//!   `scope#layer#weight.summary`, one flat file per tensor
//! - **Owned output**: each monitoring site owns its file exclusively and
//!   releases it on close or drop
//!
//! ## Quick Start
//!
//! ```rust
//! use tensorsum::prelude::*;
//!
//! let data = [1.0f64, 2.0, 3.0, 4.0];
//! let stats = StatisticsSummarizer::new().compute(TensorView::from_slice(&data))?;
//! assert_eq!((stats.min, stats.max, stats.mean), (1.0, 4.0, 2.5));
//!
//! let mut site = MonitoringSite::new(SummarizeConfig::new("loss"))?;
//! site.run(TensorView::from_slice(&data))?; // prints to stdout
//! # Ok::<(), tensorsum::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision element types (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod dtype;
pub mod error;
pub mod monitor;
pub mod ops;
pub mod sink;
pub mod tensor;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::monitor::{MonitoringSite, SummarizeConfig};
    pub use crate::ops::{StatisticsSummarizer, SummaryStats, summarize};
    pub use crate::sink::{OutputRecord, OutputSink, RecordFormat, SinkConfig};
    pub use crate::tensor::TensorView;
}
