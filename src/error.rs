//! Error taxonomy.
//!
//! Deliberately minimal: a bring-up target may not have any error-reporting
//! infrastructure yet. Failure is binary — either the report is written in
//! full and the process exits 0, or a fatal condition exits nonzero.

use std::io;

use thiserror::Error;

/// A fatal diagnostic failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured log file could not be created. There is no fallback
    /// to the console.
    #[error("unable to open output file: {path}")]
    OpenLogFile {
        /// The path that failed to open.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A write or flush on the active output sink failed.
    #[error("output sink write failed")]
    Sink(#[from] io::Error),
}
