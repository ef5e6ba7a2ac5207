//! JSON-lines feed adapter.
//!
//! Writes simulation output as one JSON document per line on any
//! [`Write`]r. Events stream through the [`EventSink`] impl as they
//! happen; full [`StatusSnapshot`]s go out on demand via
//! [`JsonFeed::write_snapshot`]. The demo binary points this at stdout
//! so a dashboard (or `jq`) can follow along.

use std::io::{self, Write};

use log::warn;
use serde::Serialize;

use crate::app::events::{SimEvent, StatusSnapshot};
use crate::app::ports::EventSink;

// ── Errors ──────────────────────────────────────────────────────

/// Failures while writing the feed.
#[derive(Debug)]
pub enum FeedError {
    /// The value could not be serialized.
    Serialize(serde_json::Error),
    /// The underlying writer failed.
    Io(io::Error),
}

impl core::fmt::Display for FeedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Serialize(e) => write!(f, "feed serialization failed: {e}"),
            Self::Io(e) => write!(f, "feed write failed: {e}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<io::Error> for FeedError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ── Feed ────────────────────────────────────────────────────────

/// Feed writer over any byte sink.
///
/// Each line is flushed as soon as it is complete, so a pipe reader
/// sees it without waiting for the block buffer to fill.
pub struct JsonFeed<W: Write> {
    out: W,
    lines_written: u64,
    lines_dropped: u64,
}

impl<W: Write> JsonFeed<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines_written: 0,
            lines_dropped: 0,
        }
    }

    /// Write one full snapshot as a single JSON line.
    pub fn write_snapshot(&mut self, snapshot: &StatusSnapshot) -> Result<(), FeedError> {
        self.write_line(snapshot)
    }

    fn write_line(&mut self, value: &impl Serialize) -> Result<(), FeedError> {
        let mut line = serde_json::to_vec(value)?;
        line.push(b'\n');
        self.out.write_all(&line)?;
        self.out.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    /// Lines successfully written since construction.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Streamed event lines lost to writer or serializer failures.
    pub fn lines_dropped(&self) -> u64 {
        self.lines_dropped
    }
}

impl<W: Write> EventSink for JsonFeed<W> {
    fn emit(&mut self, event: &SimEvent) {
        if let Err(e) = self.write_line(event) {
            self.lines_dropped += 1;
            warn!("feed line dropped: {e}");
        }
    }
}
