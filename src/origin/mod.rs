// Origin access module.
// Authenticated HTTP client for the adventofcode.com input endpoint.

pub mod client;

pub use client::{DEFAULT_COOKIE_MAX_AGE, DEFAULT_ORIGIN, OriginClient};
