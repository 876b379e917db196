//! The ipv4gen tool
//!
//! ipv4gen writes a requested number of random IPv4 addresses to a writer,
//! one per line. The address generation itself lives in `ipv4gen_payload`;
//! this crate holds the run configuration and the loop that drives it.

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

pub mod config;
pub mod run;
