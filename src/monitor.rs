//! Per-tensor monitoring sites
//!
//! A [`MonitoringSite`] is what a training loop holds for one watched tensor:
//! a [`StatisticsSummarizer`], the [`OutputSink`] its records go to, and a
//! counter of completed passes. Build it once from a [`SummarizeConfig`], call
//! [`run`](MonitoringSite::run) once per iteration, and drop (or
//! [`close`](MonitoringSite::close)) it when the tensor is no longer watched.
//!
//! # Example
//!
//! ```
//! use tensorsum::monitor::{MonitoringSite, SummarizeConfig};
//! use tensorsum::tensor::TensorView;
//!
//! let dir = std::env::temp_dir();
//! let config = SummarizeConfig::new("fc1/weight").to_file(true).root_folder(&dir);
//! let mut site = MonitoringSite::new(config)?;
//!
//! let weights = [0.5f32, -0.25, 1.0, 0.0];
//! let stats = site.run(TensorView::from_slice(&weights))?;
//! assert_eq!(stats.max, 1.0);
//! assert_eq!(site.iteration(), 1);
//! site.close()?;
//! # Ok::<(), tensorsum::Error>(())
//! ```

use std::path::PathBuf;

use crate::dtype::Element;
use crate::error::Result;
use crate::ops::{StatisticsSummarizer, SummaryStats};
use crate::sink::{OutputRecord, OutputSink, SinkConfig};
use crate::tensor::TensorView;

/// Construction settings for a [`MonitoringSite`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummarizeConfig {
    /// Logical tensor name; `/` separates scopes
    pub name: String,
    /// Write to `<root_folder>/<name>.summary` instead of stdout
    pub to_file: bool,
    /// Directory that receives summary files
    pub root_folder: PathBuf,
}

impl SummarizeConfig {
    /// Console summaries for tensor `name`, with `.` as the root folder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            to_file: false,
            root_folder: PathBuf::from("."),
        }
    }

    /// Choose file output (`true`) or console output (`false`)
    #[must_use]
    pub fn to_file(mut self, to_file: bool) -> Self {
        self.to_file = to_file;
        self
    }

    /// Directory that receives summary files
    #[must_use]
    pub fn root_folder(mut self, root_folder: impl Into<PathBuf>) -> Self {
        self.root_folder = root_folder.into();
        self
    }

    /// Sink destination implied by these settings
    pub fn sink_config(&self) -> SinkConfig {
        if self.to_file {
            SinkConfig::for_tensor(&self.root_folder, &self.name)
        } else {
            SinkConfig::ToConsole
        }
    }
}

/// Summarizer, sink, and pass counter for one tensor
#[derive(Debug)]
pub struct MonitoringSite {
    name: String,
    summarizer: StatisticsSummarizer,
    sink: OutputSink,
    iteration: u64,
}

impl MonitoringSite {
    /// Build a site, opening its sink
    ///
    /// # Errors
    ///
    /// Returns `Error::SinkOpen` if file output was requested and the summary
    /// file cannot be opened.
    pub fn new(config: SummarizeConfig) -> Result<Self> {
        let sink = OutputSink::new(config.sink_config())?;
        Ok(Self::with_sink(config.name, sink))
    }

    /// Build a site around an already opened sink
    pub fn with_sink(name: impl Into<String>, sink: OutputSink) -> Self {
        let name = name.into();
        log::debug!("monitoring {name} -> {}", sink.target());
        Self {
            name,
            summarizer: StatisticsSummarizer::new(),
            sink,
            iteration: 0,
        }
    }

    /// Summarize `view`, write the record, and advance the counter
    ///
    /// The record is tagged with the counter value before the increment, so
    /// the first pass is iteration 0. A failed pass leaves the counter alone.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if `view` has no elements (nothing is written)
    /// - `Error::SinkWrite` if the record cannot be written
    pub fn run<T: Element>(&mut self, view: TensorView<'_, T>) -> Result<SummaryStats> {
        let stats = self.summarizer.compute(view)?;
        self.sink
            .write(&OutputRecord::new(&self.name, self.iteration, stats))?;
        self.iteration += 1;
        Ok(stats)
    }

    /// Tensor name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of completed passes
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// The sink records are written to
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Release the sink, reporting a failed final flush
    ///
    /// # Errors
    ///
    /// Returns `Error::SinkWrite` if the final flush fails.
    pub fn close(self) -> Result<()> {
        log::debug!(
            "closing monitoring site {} after {} passes",
            self.name,
            self.iteration
        );
        self.sink.close()
    }
}
