//! The run loop.
//!
//! A run draws `count` addresses from the injected random source and writes
//! each, newline terminated, to the output writer in generation order. It has
//! two states, running and done, and no cancellation hook.

use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use ipv4gen_payload::{Ipv4, Serialize};
use rand::Rng;
use tracing::info;

use crate::config::Config;

/// Errors produced by [`Run`]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// See [`ipv4gen_payload::Error`]
    #[error("Payload serialization failed: {0}")]
    Payload(#[from] ipv4gen_payload::Error),
}

impl Error {
    /// Whether the reader closed the output before the run finished.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Payload(ipv4gen_payload::Error::Io(e)) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines written to the output.
    pub lines: u64,
    /// Wall time spent generating and writing.
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy)]
/// A single generation run
pub struct Run {
    config: Config,
    payload: Ipv4,
}

impl Run {
    /// Create a new [`Run`] from its configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            payload: Ipv4::new(),
        }
    }

    /// Run to completion, writing `config.count` addresses into `writer`.
    ///
    /// The writer is not flushed; that is the caller's business.
    ///
    /// # Errors
    ///
    /// Returns an error if a write to `writer` fails. Lines written before the
    /// failure stay written.
    pub fn spin<R, W>(mut self, rng: R, writer: &mut W) -> Result<Summary, Error>
    where
        R: Rng,
        W: Write,
    {
        let count = self.config.count;
        info!("Generating {count} addresses.");

        let start = Instant::now();
        self.payload.to_bytes(rng, count, writer)?;
        let summary = Summary {
            lines: self.payload.data_points_generated().unwrap_or(count),
            elapsed: start.elapsed(),
        };

        info!(
            "Wrote {lines} addresses in {elapsed:?}.",
            lines = summary.lines,
            elapsed = summary.elapsed
        );
        Ok(summary)
    }
}
