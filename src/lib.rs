//! Core library for the `bringup` board bring-up diagnostic.
//!
//! `bringup` is a smoke test for a freshly bootstrapped toolchain/target
//! combination. In its baseline configuration it is purely computational and
//! emits nothing; console output, file output, cycle count, prime bound, and
//! timing are all selected at compile time (see `build.rs` and the Cargo
//! features).
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod primes;
pub mod report;
pub mod sink;

pub use error::Error;
