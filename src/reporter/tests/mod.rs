use super::*;
use crate::config::ApiConfig;
use crate::error::Error;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A listing body with five children, in ranked order
const FIVE_ITEM_LISTING: &str = r#"{
    "kind": "Listing",
    "data": {
        "modhash": "",
        "children": [
            {"kind": "t3", "data": {"score": 512, "title": "First post", "url": "http://example.com/1", "author": "a"}},
            {"kind": "t3", "data": {"score": 256, "title": "Second post", "url": "http://example.com/2", "author": "b"}},
            {"kind": "t3", "data": {"score": 128, "title": "Third post", "url": "http://example.com/3", "author": "c"}},
            {"kind": "t3", "data": {"score": 64, "title": "Fourth post", "url": "http://example.com/4", "author": "d"}},
            {"kind": "t3", "data": {"score": 32, "title": "Fifth post", "url": "http://example.com/5", "author": "e"}}
        ],
        "after": null
    }
}"#;

fn test_reporter(base_url: &str) -> FeedReporter {
    let config = Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        },
        ..Config::default()
    };
    let fetcher = Fetcher::new(&config.http).unwrap();
    FeedReporter::new(Arc::new(fetcher), Arc::new(config))
}

#[test]
fn parse_listing_extracts_items_in_children_order() {
    let items = parse_listing(FIVE_ITEM_LISTING).unwrap();

    assert_eq!(items.len(), 5, "should parse all 5 children");
    assert_eq!(items[0].score, 512);
    assert_eq!(items[0].title, "First post");
    assert_eq!(items[0].link, "http://example.com/1");
    assert_eq!(items[4].score, 32);
    assert_eq!(items[4].title, "Fifth post");

    let scores: Vec<i64> = items.iter().map(|i| i.score).collect();
    assert_eq!(
        scores,
        vec![512, 256, 128, 64, 32],
        "children order must be preserved"
    );
}

#[test]
fn parse_listing_rejects_invalid_json() {
    let result = parse_listing("this is not JSON at all");
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn parse_listing_rejects_missing_field() {
    // `title` is absent from the child data
    let body = r#"{"data": {"children": [{"data": {"score": 1, "url": "http://x"}}]}}"#;
    let result = parse_listing(body);
    assert!(
        matches!(result, Err(Error::Parse(_))),
        "missing field should be a parse error, got: {result:?}"
    );
}

#[test]
fn parse_listing_rejects_wrong_shape() {
    // Valid JSON, but no `data.children` path
    let body = r#"{"error": 429, "message": "Too Many Requests"}"#;
    let result = parse_listing(body);
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn parse_listing_accepts_empty_children() {
    let body = r#"{"data": {"children": []}}"#;
    let items = parse_listing(body).unwrap();
    assert!(items.is_empty());
}

#[test]
fn write_report_renders_item_line_exactly() {
    let items = vec![FeedItem {
        score: 42,
        title: "Hello".to_string(),
        link: "http://x".to_string(),
    }];

    let mut out = Vec::new();
    write_report(&mut out, "python", &items).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "42: Hello (http://x)");
}

#[test]
fn write_report_prints_items_then_one_completion_line() {
    let items = parse_listing(FIVE_ITEM_LISTING).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, "python", &items).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6, "5 item lines plus 1 completion line");
    assert_eq!(lines[0], "512: First post (http://example.com/1)");
    assert_eq!(lines[4], "32: Fifth post (http://example.com/5)");
    assert_eq!(lines[5], "DONE: , python");
}

#[test]
fn write_report_with_no_items_still_prints_completion_line() {
    let mut out = Vec::new();
    write_report(&mut out, "compsci", &[]).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "DONE: , compsci\n");
}

#[test]
fn feed_url_substitutes_topic_into_endpoint_pattern() {
    let reporter = test_reporter("https://www.reddit.com");
    let url = reporter.feed_url("compsci").unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.reddit.com/r/compsci/top.json?sort=top&t=day&limit=5"
    );
}

#[test]
fn feed_url_rejects_invalid_base() {
    let reporter = test_reporter("not a url");
    let result = reporter.feed_url("python");
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn fetch_items_parses_listing_from_server() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/python/top.json"))
        .and(query_param("sort", "top"))
        .and(query_param("t", "day"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIVE_ITEM_LISTING))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reporter = test_reporter(&mock_server.uri());
    let items = reporter.fetch_items("python").await.unwrap();

    assert_eq!(items.len(), 5);
    assert_eq!(items[0].title, "First post");
}

#[tokio::test]
async fn fetch_items_fails_on_404_without_retry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/missing/top.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reporter = test_reporter(&mock_server.uri());
    let result = reporter.fetch_items("missing").await;

    assert!(matches!(
        result,
        Err(Error::UnexpectedStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn fetch_items_fails_on_non_utf8_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/python/top.json"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
        .mount(&mock_server)
        .await;

    let reporter = test_reporter(&mock_server.uri());
    let result = reporter.fetch_items("python").await;

    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn fetch_items_fails_on_html_error_page() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/python/top.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&mock_server)
        .await;

    let reporter = test_reporter(&mock_server.uri());
    let result = reporter.fetch_items("python").await;

    assert!(matches!(result, Err(Error::Parse(_))));
}
