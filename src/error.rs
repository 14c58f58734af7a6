// Error types for the aoc2022 runner.
// Covers origin HTTP errors, input store filesystem errors, and solution failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AocError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("origin returned status {status}, wanted 200. body: {body}")]
    OriginStatus { status: u16, body: String },

    #[error("invalid origin url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to fetch input from origin: {0}")]
    Fetch(Box<AocError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no solution implemented for day {day}, available days: {available:?}")]
    UnknownDay { day: u8, available: Vec<u8> },

    #[error("failed to parse input: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AocError>;
