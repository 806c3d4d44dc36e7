//! tests/middleware.rs
//! Exercises the cross-cutting middleware chain: timing header, CORS
//! policy and pretty-JSON reformatting.

mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn every_response_carries_a_timing_header() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    // A matched feature route and the fallback both go through the chain.
    for path in ["/api/v1/exercises", "/definitely-not-a-route"] {
        let resp: reqwest::Response = client
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .expect("Failed to execute request.");

        let header: &str = resp
            .headers()
            .get("x-response-time")
            .expect("X-Response-Time header missing")
            .to_str()
            .unwrap();

        let millis: &str = header.strip_suffix("ms").expect("header should end in 'ms'");
        millis.parse::<u64>().expect("elapsed time should be a non-negative integer");
    }
}

#[tokio::test]
async fn cors_allows_any_origin_for_get() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/v1/exercises", base_url))
        .header("Origin", "https://example.com")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .expect("allow-origin header missing"),
        "*"
    );
}

#[tokio::test]
async fn cors_preflight_only_advertises_read_verbs() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/v1/exercises", base_url),
        )
        .header("Origin", "https://example.com")
        .header("Access-Control-Request-Method", "DELETE")
        .send()
        .await
        .expect("Failed to execute request.");

    let allow_methods: &str = resp
        .headers()
        .get("access-control-allow-methods")
        .expect("allow-methods header missing")
        .to_str()
        .unwrap();

    assert!(allow_methods.contains("GET"));
    assert!(allow_methods.contains("OPTIONS"));
    assert!(!allow_methods.contains("DELETE"));
    assert!(!allow_methods.contains("POST"));
    assert!(!allow_methods.contains("PUT"));
}

#[tokio::test]
async fn pretty_query_reindents_without_changing_content() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let compact: String = client
        .get(format!("{}/api/v1/exercises", base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let pretty: String = client
        .get(format!("{}/api/v1/exercises?pretty", base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\n  "));

    let compact_json: Value = serde_json::from_str(&compact).unwrap();
    let pretty_json: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(compact_json, pretty_json);
}
