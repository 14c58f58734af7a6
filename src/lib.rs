//! Advent of Code 2022 runner.
//!
//! Fetches each day's puzzle input from adventofcode.com using a session
//! cookie, caches every fetched input on local disk so repeat runs stay
//! offline, and runs the selected day's solution against the input.

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod origin;
pub mod solutions;

pub use error::{AocError, Result};
pub use fetcher::{FetchConfig, Fetcher};
