//! Output sinks for summary records
//!
//! A sink is chosen once, at construction, from a [`SinkConfig`]:
//!
//! - [`SinkConfig::ToConsole`] writes human-readable lines to stdout.
//! - [`SinkConfig::ToFile`] truncates (or creates) one file and appends a
//!   line to it on every write, until the sink is closed or dropped.
//!
//! The sink is the sole owner of its file handle. It is never cloned, and the
//! handle is released exactly once, on [`OutputSink::close`] or on drop.

mod path;
mod record;

pub use path::{SUMMARY_EXTENSION, summary_file_path};
pub use record::{OutputRecord, RecordFormat};

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Destination of an [`OutputSink`], fixed for the sink's lifetime
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkConfig {
    /// Print each record to standard output
    ToConsole,
    /// Truncate this file at construction and append one line per record
    ToFile(PathBuf),
}

impl SinkConfig {
    /// File sink for tensor `name` under `root`, at [`summary_file_path`]
    pub fn for_tensor(root: impl AsRef<Path>, name: &str) -> Self {
        Self::ToFile(summary_file_path(root, name))
    }
}

/// Writes [`OutputRecord`]s to the destination chosen at construction
pub struct OutputSink {
    dest: Destination,
}

enum Destination {
    Console(io::Stdout),
    File(SummaryFile),
    Writer {
        label: String,
        format: RecordFormat,
        writer: Box<dyn Write + Send>,
    },
}

impl OutputSink {
    /// Open a sink
    ///
    /// # Errors
    ///
    /// Returns `Error::SinkOpen` if the summary file cannot be created or
    /// truncated (missing directory, permissions, ...), or if its file name
    /// is empty. No sink exists after a failure.
    pub fn new(config: SinkConfig) -> Result<Self> {
        let dest = match config {
            SinkConfig::ToConsole => Destination::Console(io::stdout()),
            SinkConfig::ToFile(path) => Destination::File(SummaryFile::create(path)?),
        };
        Ok(Self { dest })
    }

    /// Sink that renders records in `format` into an arbitrary writer
    ///
    /// `label` identifies the destination in errors and logs.
    pub fn from_writer(
        label: impl Into<String>,
        format: RecordFormat,
        writer: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            dest: Destination::Writer {
                label: label.into(),
                format,
                writer,
            },
        }
    }

    /// Path of the summary file, for file sinks
    pub fn path(&self) -> Option<&Path> {
        match &self.dest {
            Destination::File(file) => Some(&file.path),
            _ => None,
        }
    }

    /// Line layout this sink writes
    pub fn format(&self) -> RecordFormat {
        match &self.dest {
            Destination::Console(_) => RecordFormat::Console,
            Destination::File(_) => RecordFormat::File,
            Destination::Writer { format, .. } => *format,
        }
    }

    /// Human-readable destination: `stdout`, the file path, or the writer label
    pub fn target(&self) -> String {
        match &self.dest {
            Destination::Console(_) => "stdout".to_string(),
            Destination::File(file) => file.path.display().to_string(),
            Destination::Writer { label, .. } => label.clone(),
        }
    }

    /// Write one record and flush it
    ///
    /// Each call emits exactly one line. Lines already written are left
    /// untouched if this call fails; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns `Error::SinkWrite` if the line cannot be written or flushed.
    pub fn write(&mut self, record: &OutputRecord<'_>) -> Result<()> {
        let line = record.render(self.format());
        log::trace!(
            "summary {} iter {} -> {}",
            record.name,
            record.iteration,
            self.target()
        );
        let result = match &mut self.dest {
            Destination::Console(stdout) => {
                let mut lock = stdout.lock();
                lock.write_all(line.as_bytes()).and_then(|()| lock.flush())
            }
            Destination::File(file) => file.append(line.as_bytes()),
            Destination::Writer { writer, .. } => writer
                .write_all(line.as_bytes())
                .and_then(|()| writer.flush()),
        };
        result.map_err(|source| Error::sink_write(self.target(), source))
    }

    /// Flush any buffered output
    ///
    /// # Errors
    ///
    /// Returns `Error::SinkWrite` if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        let result = match &mut self.dest {
            Destination::Console(stdout) => stdout.flush(),
            Destination::File(file) => file.flush(),
            Destination::Writer { writer, .. } => writer.flush(),
        };
        result.map_err(|source| Error::sink_write(self.target(), source))
    }

    /// Flush and release the destination, reporting a final flush failure
    ///
    /// Dropping the sink also releases it, but can only log such a failure.
    ///
    /// # Errors
    ///
    /// Returns `Error::SinkWrite` if the final flush fails. The file handle is
    /// released either way.
    pub fn close(mut self) -> Result<()> {
        let target = self.target();
        let result = match &mut self.dest {
            Destination::File(file) => file.close(),
            Destination::Console(stdout) => stdout.flush(),
            Destination::Writer { writer, .. } => writer.flush(),
        };
        result.map_err(|source| Error::sink_write(target, source))
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("target", &self.target())
            .field("format", &self.format())
            .finish()
    }
}

/// An open summary file; the writer is `None` once closed
struct SummaryFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl SummaryFile {
    fn create(path: PathBuf) -> Result<Self> {
        let empty_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| name.is_empty() || name == SUMMARY_EXTENSION);
        if empty_name {
            return Err(Error::sink_open(
                &path,
                io::Error::new(io::ErrorKind::InvalidInput, "summary file name is empty"),
            ));
        }

        let file = File::create(&path).map_err(|source| Error::sink_open(&path, source))?;
        log::debug!("opened summary file {}", path.display());
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        let writer = self.writer.as_mut().ok_or_else(closed)?;
        writer.write_all(bytes)?;
        writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        log::debug!("closing summary file {}", self.path.display());
        // into_inner flushes; the File is dropped (closed) on both arms
        writer.into_inner().map(drop).map_err(|err| err.into_error())
    }
}

impl Drop for SummaryFile {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            log::warn!(
                "failed to flush summary file {} on drop: {err}",
                self.path.display()
            );
        }
    }
}

fn closed() -> io::Error {
    io::Error::other("summary file already closed")
}
