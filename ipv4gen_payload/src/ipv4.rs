//! Random IPv4 address payload.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::{Address, Error, Generator};

#[derive(Debug, Clone, Copy, Default)]
/// Payload of random IPv4 addresses in dotted-decimal form, one per line
pub struct Ipv4 {
    lines_generated: u64,
}

impl Ipv4 {
    /// Construct a new instance of `Ipv4`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Generator for Ipv4 {
    type Output = Address;

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng + ?Sized,
    {
        rng.random()
    }
}

impl crate::Serialize for Ipv4 {
    fn to_bytes<W, R>(&mut self, mut rng: R, lines: u64, writer: &mut W) -> Result<(), Error>
    where
        R: Rng + Sized,
        W: Write,
    {
        self.lines_generated = 0;
        for _ in 0..lines {
            let addr = self.generate(&mut rng);
            writeln!(writer, "{addr}")?;
            self.lines_generated += 1;
        }
        debug!(lines = self.lines_generated, "ipv4 payload serialized");
        Ok(())
    }

    fn data_points_generated(&self) -> Option<u64> {
        Some(self.lines_generated)
    }
}
