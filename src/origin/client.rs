// Origin HTTP client.
// Authenticates with the adventofcode.com session cookie and fetches one
// day's puzzle input per call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url, cookie::Jar};
use tracing::debug;

use crate::error::{AocError, Result};

/// Origin serving the puzzle inputs.
pub const DEFAULT_ORIGIN: &str = "https://adventofcode.com/";

/// Lifetime granted to the session cookie. The origin's real sessions live
/// much longer; expiry here surfaces as a non-200 on the next fetch.
pub const DEFAULT_COOKIE_MAX_AGE: Duration = Duration::from_secs(300);

/// Event year whose inputs this client fetches.
const EVENT_YEAR: &str = "2022";

/// HTTP client holding the session cookie for the input origin.
pub struct OriginClient {
    client: Client,
    base: Url,
}

impl OriginClient {
    /// Create a client against the default origin with the default cookie
    /// lifetime.
    pub fn new(session: &str) -> Result<Self> {
        Self::with_origin(DEFAULT_ORIGIN, session, DEFAULT_COOKIE_MAX_AGE)
    }

    /// Create a client against a specific origin. The session cookie is
    /// scoped to that origin's domain and carries the given lifetime.
    pub fn with_origin(origin: &str, session: &str, cookie_max_age: Duration) -> Result<Self> {
        let base = Url::parse(origin).map_err(|err| AocError::InvalidUrl {
            url: origin.to_string(),
            reason: err.to_string(),
        })?;

        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(
            &format!("session={session}; Max-Age={}", cookie_max_age.as_secs()),
            &base,
        );

        let client = Client::builder()
            .cookie_provider(jar)
            .user_agent(concat!("aoc2022/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base })
    }

    /// Fetch the input document for `day` from the origin. Exactly one HTTP
    /// attempt is made; dropping the returned future aborts the request.
    pub async fn fetch_input(&self, day: &str) -> Result<String> {
        let url = self.input_url(day)?;
        debug!(url = %url, "fetching input from origin");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<failed to read response body: {err}>"));
            return Err(AocError::OriginStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }

    // URL for a day's input. Built through the parser so a key holding
    // reserved characters is percent-encoded instead of spliced into the
    // path.
    fn input_url(&self, day: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| AocError::InvalidUrl {
                url: self.base.to_string(),
                reason: "origin cannot be a base url".to_string(),
            })?
            .pop_if_empty()
            .extend([EVENT_YEAR, "day", day, "input"]);
        Ok(url)
    }
}
