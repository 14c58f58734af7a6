// Cache-first input fetching.
// Consults the local store before going to the origin; store failures
// degrade to a network fetch and are never surfaced to the caller.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::cache::InputStore;
use crate::error::{AocError, Result};
use crate::origin::{DEFAULT_COOKIE_MAX_AGE, DEFAULT_ORIGIN, OriginClient};

/// Configuration for building a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    session: String,
    cache_dir: PathBuf,
    origin: String,
    cookie_max_age: Duration,
}

impl FetchConfig {
    /// Config carrying the given session credential with the default origin,
    /// cookie lifetime, and cache directory.
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            cache_dir: default_cache_dir(),
            origin: DEFAULT_ORIGIN.to_string(),
            cookie_max_age: DEFAULT_COOKIE_MAX_AGE,
        }
    }

    /// Override the directory inputs are cached in.
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Override the origin base URL.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Override the lifetime granted to the session cookie.
    pub fn with_cookie_max_age(mut self, cookie_max_age: Duration) -> Self {
        self.cookie_max_age = cookie_max_age;
        self
    }
}

/// Platform cache directory for inputs (`~/.cache/aoc2022/inputs` on Linux),
/// or a relative `inputs` folder when no home directory can be determined.
pub fn default_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "aoc2022")
        .map(|dirs| dirs.cache_dir().join("inputs"))
        .unwrap_or_else(|| PathBuf::from("inputs"))
}

/// Fetches puzzle inputs, serving from the local store when possible and
/// writing freshly fetched inputs back through to it.
pub struct Fetcher {
    store: InputStore,
    client: OriginClient,
}

impl Fetcher {
    /// Build a fetcher: opens (creating if needed) the input store and the
    /// cookie-bearing origin client. Either failing fails construction.
    pub fn new(config: FetchConfig) -> Result<Self> {
        Ok(Self {
            store: InputStore::open(&config.cache_dir)?,
            client: OriginClient::with_origin(
                &config.origin,
                &config.session,
                config.cookie_max_age,
            )?,
        })
    }

    /// Fetch the input for `day`. Only an origin failure is an error: a
    /// store failure on any path falls back to the network, and a failure
    /// to write back still returns the fetched input.
    pub async fn fetch_input(&self, day: &str) -> Result<String> {
        match self.store.exists(day) {
            Err(err) => {
                warn!(day, error = %err, "failed to check input store, fetching from origin");
            }
            Ok(true) => {
                info!(day, "input found in store, will load from there");
                match self.store.read(day) {
                    Ok(input) => return Ok(input),
                    Err(err) => {
                        warn!(day, error = %err, "failed to read stored input, fetching from origin");
                    }
                }
            }
            Ok(false) => {
                info!(day, "input not in store, fetching from origin");
            }
        }

        let input = self
            .client
            .fetch_input(day)
            .await
            .map_err(|err| AocError::Fetch(Box::new(err)))?;
        info!(day, "fetched input from origin");

        match self.store.write(day, &input) {
            Ok(()) => info!(day, "stored input, future runs will use the local copy"),
            Err(err) => warn!(day, error = %err, "failed to store input"),
        }

        Ok(input)
    }
}
