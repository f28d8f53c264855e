//! Output Sinks
//!
//! The stream rendered lines are written to. The sink is chosen once, in the
//! [`Config`](crate::Config); every line is written with a single `write_all`
//! while the stream is locked, so concurrent callers never interleave
//! partial lines. Write errors are ignored: logging never fails the caller.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Which standard stream receives log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Stdout => write!(f, "stdout"),
            SinkKind::Stderr => write!(f, "stderr"),
        }
    }
}

impl std::str::FromStr for SinkKind {
    type Err = String;

    /// Accepts `stdout`/`1` and `stderr`/`2`, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" | "out" | "1" => Ok(SinkKind::Stdout),
            "stderr" | "err" | "2" => Ok(SinkKind::Stderr),
            _ => Err(format!(
                "Invalid output stream: '{s}'. Valid values are 'stdout' or 'stderr'"
            )),
        }
    }
}

/// Destination of rendered lines
#[derive(Clone)]
pub enum Sink {
    Stdout,
    Stderr,
    /// Any writer, shared behind a lock
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
}

impl Sink {
    /// Wrap a custom writer
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// An in-memory sink, returned with a handle to read what was written
    pub fn capture() -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        (Sink::writer(captured.clone()), captured)
    }

    /// Write one complete line
    pub fn write_line(&self, line: &str) {
        let bytes = line.as_bytes();
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                let _ = out.write_all(bytes);
                let _ = out.flush();
            }
            Sink::Stderr => {
                let _ = io::stderr().lock().write_all(bytes);
            }
            Sink::Writer(writer) => {
                let mut writer = writer.lock();
                let _ = writer.write_all(bytes);
                let _ = writer.flush();
            }
        }
    }

    /// Whether the sink is an interactive terminal
    pub fn is_terminal(&self) -> bool {
        match self {
            Sink::Stdout => io::stdout().is_terminal(),
            Sink::Stderr => io::stderr().is_terminal(),
            Sink::Writer(_) => false,
        }
    }
}

impl From<SinkKind> for Sink {
    fn from(kind: SinkKind) -> Self {
        match kind {
            SinkKind::Stdout => Sink::Stdout,
            SinkKind::Stderr => Sink::Stderr,
        }
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Stdout => write!(f, "Sink::Stdout"),
            Sink::Stderr => write!(f, "Sink::Stderr"),
            Sink::Writer(_) => write!(f, "Sink::Writer(..)"),
        }
    }
}

/// Shared in-memory buffer filled by a [`Sink::capture`] sink
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
