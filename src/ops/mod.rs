//! Tensor summary operations
//!
//! A summary reduces a whole tensor to four scalars, [`SummaryStats`]:
//! minimum, maximum, arithmetic mean and population standard deviation.

mod summarize;

pub use summarize::{StatisticsSummarizer, SummaryStats, summarize};
