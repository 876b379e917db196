//! IPv4 address values and their dotted-decimal rendering.

use core::fmt;
use std::net::Ipv4Addr;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

/// A 32-bit IPv4 address. Octet 0 is the most significant byte.
///
/// Every bit pattern is a valid `Address`, reserved ranges included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(u32);

impl Address {
    /// Construct an `Address` from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The four octets of this address, most significant first.
    #[must_use]
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The numeric value of this address.
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        self.0
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl Distribution<Address> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> Address
    where
        R: Rng + ?Sized,
    {
        Address(rng.random())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [zero, one, two, three] = self.octets();
        write!(f, "{zero}.{one}.{two}.{three}")
    }
}
