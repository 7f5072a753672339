//! The output sink: the one place program text actually goes.
//!
//! Every other component writes through this abstraction, which is what lets
//! the destination be swapped by configuration alone. Exactly one backend is
//! active for the whole process lifetime.

use std::{
    fs::File,
    io::{self, BufWriter, Stdout, Write},
};

use crate::{config::Config, error::Error};

/// Where report text is written. Chosen once at startup, never switched.
#[derive(Debug)]
pub enum Sink {
    /// Standard output (the `use_printf` feature).
    Console(Stdout),
    /// The configured log file, opened once with prior contents truncated
    /// (`LOG_FILE`). The handle is flushed and closed on drop, before normal
    /// process exit.
    File(BufWriter<File>),
    /// No output at all: the baseline purely-computational configuration.
    Null,
}

impl Sink {
    /// Open the sink the configuration selects.
    ///
    /// Failure to create the log file is fatal; there is no fallback to the
    /// console. (The console/file conflict never reaches this point — the
    /// build script rejects that combination.)
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        if let Some(path) = config.log_file {
            let file = File::create(path).map_err(|source| Error::OpenLogFile {
                path: path.to_string(),
                source,
            })?;
            return Ok(Self::File(BufWriter::new(file)));
        }
        if config.use_printf {
            return Ok(Self::Console(io::stdout()));
        }
        Ok(Self::Null)
    }

    /// Whether this sink discards everything written to it.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Console(stdout) => stdout.write(buf),
            Self::File(file) => file.write(buf),
            Self::Null => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Console(stdout) => stdout.flush(),
            Self::File(file) => file.flush(),
            Self::Null => Ok(()),
        }
    }
}
