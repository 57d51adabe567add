//! Log output that does not tear the progress bars.
//!
//! [`ProgressMakeWriter`] plugs into `tracing_subscriber::fmt` and writes each
//! log line to stderr while the bars of a shared [`MultiProgress`] are
//! suspended, so the bars are redrawn below the line instead of through it.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::progress::{ProgressMakeWriter, StyleOptions};
//!
//! let style_options = StyleOptions::hidden();
//! let multi = style_options.multi_progress();
//! let subscriber = tracing_subscriber::fmt()
//!     .with_writer(ProgressMakeWriter::new(multi.clone()))
//!     .finish();
//! # drop(subscriber);
//! ```

use indicatif::MultiProgress;
use std::io::{self, Write};
use tracing_subscriber::fmt::writer::MakeWriter;

/// Writer factory for tracing subscriber integration.
#[derive(Clone, Debug)]
pub struct ProgressMakeWriter {
    multi: MultiProgress,
}

impl ProgressMakeWriter {
    /// Create a writer factory printing around the bars of `multi`.
    pub fn new(multi: MultiProgress) -> Self {
        Self { multi }
    }
}

impl<'a> MakeWriter<'a> for ProgressMakeWriter {
    type Writer = ProgressWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ProgressWriter {
            multi: self.multi.clone(),
        }
    }
}

/// Writer that prints to stderr with the bars suspended.
#[derive(Debug)]
pub struct ProgressWriter {
    multi: MultiProgress,
}

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi.suspend(|| io::stderr().lock().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
