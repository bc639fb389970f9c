//! Random number generation
//!
//! Uses xorshift64* algorithm for fast random number generation.
//! The picker draws through `rand::Rng`, so any generator can be injected;
//! [`RngManager`] is the one the crate builds by default.

mod xorshift;

pub use xorshift::{RngError, RngManager};
