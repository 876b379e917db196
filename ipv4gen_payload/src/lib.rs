//! The ipv4gen payloads
//!
//! This library supports random IPv4 address generation for the ipv4gen
//! project.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
#![deny(clippy::dbg_macro)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(missing_debug_implementations)]
#![allow(clippy::cast_precision_loss)]

use std::io::{self, Write};

use rand::Rng;

pub use address::Address;
pub use ipv4::Ipv4;

pub mod address;
pub mod ipv4;

/// Errors related to serialization
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// IO operation failed
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
}

/// To serialize into bytes
pub trait Serialize {
    /// Write exactly `lines` records into writer, one per line.
    ///
    /// # Errors
    ///
    /// Generation itself cannot fail. Errors come from the writer.
    fn to_bytes<W, R>(&mut self, rng: R, lines: u64, writer: &mut W) -> Result<(), Error>
    where
        R: Rng + Sized,
        W: Write;

    /// Reports data points count for the most recently generated content.
    ///
    /// IMPORTANT: This method should be called immediately after `to_bytes` to
    /// get accurate counts. The information WILL be overwritten by subsequent
    /// calls to `to_bytes`, and is partial if `to_bytes` returned an error.
    ///
    /// If this function returns None the serialize does not support tracking
    /// data points.
    fn data_points_generated(&self) -> Option<u64> {
        None
    }
}

/// Generate instances of `Self::Output` from source of randomness.
pub trait Generator {
    /// The type produced by each call to `generate`.
    type Output;

    /// Draw a new instance of `Self::Output`, advancing `rng`.
    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng + ?Sized;
}
