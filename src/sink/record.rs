//! Text encoding of one summary pass

use crate::ops::SummaryStats;

/// Line layout used when rendering an [`OutputRecord`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// `<name> [iter <n>] min: <min> max: <max> mean: <mean> std: <std>`
    #[default]
    Console,
    /// `<n> <min> <max> <mean> <std>`
    ///
    /// The tensor name is implied by the file the line lives in.
    File,
}

/// One summary line: the stats of one tensor at one iteration
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OutputRecord<'a> {
    /// Logical tensor name (may contain `/` scope separators)
    pub name: &'a str,
    /// Zero-based pass counter of the owning monitoring site
    pub iteration: u64,
    /// The summary itself
    pub stats: SummaryStats,
}

impl<'a> OutputRecord<'a> {
    /// Create a record
    pub fn new(name: &'a str, iteration: u64, stats: SummaryStats) -> Self {
        Self {
            name,
            iteration,
            stats,
        }
    }

    /// Render as a single newline-terminated line
    ///
    /// Floats use Rust's shortest round-trip formatting, so a file line
    /// parses back to the exact same values.
    pub fn render(&self, format: RecordFormat) -> String {
        let SummaryStats {
            min,
            max,
            mean,
            std,
        } = self.stats;
        match format {
            RecordFormat::Console => format!(
                "{} [iter {}] min: {min} max: {max} mean: {mean} std: {std}\n",
                self.name, self.iteration
            ),
            RecordFormat::File => format!("{} {min} {max} {mean} {std}\n", self.iteration),
        }
    }

    /// Parse a line written in [`RecordFormat::File`]
    ///
    /// Returns `None` unless the line holds exactly an iteration followed by
    /// four floats. Trailing whitespace (including the newline) is ignored.
    pub fn parse_line(line: &str) -> Option<(u64, SummaryStats)> {
        let mut fields = line.split_whitespace();
        let iteration = fields.next()?.parse().ok()?;
        let mut values = [0.0f64; SummaryStats::NUM_STATS];
        for slot in &mut values {
            *slot = fields.next()?.parse().ok()?;
        }
        if fields.next().is_some() {
            return None;
        }
        Some((
            iteration,
            SummaryStats {
                min: values[SummaryStats::MIN_IDX],
                max: values[SummaryStats::MAX_IDX],
                mean: values[SummaryStats::MEAN_IDX],
                std: values[SummaryStats::STD_IDX],
            },
        ))
    }
}
