//! Integration tests for the cache-first fetch path.
//!
//! wiremock stands in for the origin and tempfile provides the cache root.
//! Expectations on the mock assert when the network is (and is not) hit.

use std::fs;
use std::path::Path;
use std::time::Duration;

use aoc2022::AocError;
use aoc2022::fetcher::{FetchConfig, Fetcher};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_fetcher(server: &MockServer, cache_dir: &Path) -> Fetcher {
    Fetcher::new(
        FetchConfig::new("test-session")
            .with_origin(server.uri())
            .with_cache_dir(cache_dir)
            .with_cookie_max_age(Duration::from_secs(300)),
    )
    .expect("failed to create fetcher")
}

#[tokio::test]
async fn cache_hit_skips_the_network() {
    let server = MockServer::start().await;
    let cache = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("from origin"))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = test_fetcher(&server, cache.path());
    fs::write(cache.path().join("05"), "from cache\n").unwrap();

    let input = fetcher.fetch_input("5").await.expect("fetch failed");
    assert_eq!(input, "from cache\n");
}

#[tokio::test]
async fn cache_miss_fetches_and_populates() {
    let server = MockServer::start().await;
    let cache = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/2022/day/9/input"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fresh input\n"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher(&server, cache.path());

    let first = fetcher.fetch_input("9").await.expect("first fetch failed");
    assert_eq!(first, "fresh input\n");
    assert_eq!(
        fs::read_to_string(cache.path().join("09")).unwrap(),
        "fresh input\n"
    );

    // Second call must be served purely from the cache; the expect(1) above
    // fails the test if the origin is hit again.
    let second = fetcher.fetch_input("9").await.expect("second fetch failed");
    assert_eq!(second, first);
}

#[tokio::test]
async fn unreadable_cache_entry_falls_back_to_origin() {
    let server = MockServer::start().await;
    let cache = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/2022/day/7/input"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered\n"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher(&server, cache.path());

    // A directory at the entry path: exists() reports true, read() fails,
    // and the write-back fails too. None of that may surface to the caller.
    fs::create_dir(cache.path().join("07")).unwrap();

    let input = fetcher.fetch_input("7").await.expect("fetch failed");
    assert_eq!(input, "recovered\n");
}

#[tokio::test]
async fn clobbered_cache_root_still_fetches() {
    let server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("inputs");

    Mock::given(method("GET"))
        .and(path("/2022/day/3/input"))
        .respond_with(ResponseTemplate::new(200).set_body_string("net\n"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher(&server, &root);

    // Replace the cache root with a plain file after construction so the
    // existence check itself errors, as does the write-back.
    fs::remove_dir_all(&root).unwrap();
    fs::write(&root, "not a directory").unwrap();

    let input = fetcher.fetch_input("3").await.expect("fetch failed");
    assert_eq!(input, "net\n");
}

#[tokio::test]
async fn origin_failure_surfaces_and_caches_nothing() {
    let server = MockServer::start().await;
    let cache = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/2022/day/2/input"))
        .respond_with(ResponseTemplate::new(404).set_body_string("day not found"))
        .mount(&server)
        .await;

    let fetcher = test_fetcher(&server, cache.path());

    match fetcher.fetch_input("2").await {
        Err(AocError::Fetch(inner)) => match *inner {
            AocError::OriginStatus { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "day not found");
            }
            other => panic!("unexpected inner error: {other}"),
        },
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected an error when the origin fails"),
    }

    assert_eq!(fs::read_dir(cache.path()).unwrap().count(), 0);
}
