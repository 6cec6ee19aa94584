use lumina::fetch::{
    BibleApiSource, LabsBibleSource, Translation, VerseFetcher,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A fetcher wired to two mock servers: one standing in for bible-api.com,
/// one for labs.bible.org.
fn test_fetcher(primary: &MockServer, fallback: &MockServer) -> VerseFetcher {
    VerseFetcher::new(
        Box::new(BibleApiSource::new(Some(primary.uri()))),
        Box::new(LabsBibleSource::new(Some(fallback.uri()))),
    )
}

const PRIMARY_BODY: &str = r#"{
    "reference": "John 3:16",
    "text": "  For God so loved the world...\n",
    "translation_id": "kjv",
    "verses": []
}"#;

const FALLBACK_BODY: &str = r#"[
    {"bookname": "Psalms", "chapter": "23", "verse": "1", "text": "The LORD is my shepherd; I shall not want."}
]"#;

// ============================================================================
// Primary Source Tests
// ============================================================================

#[tokio::test]
async fn test_primary_success_skips_fallback() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("random", "verse"))
        .and(query_param("translation", "kjv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRIMARY_BODY))
        .expect(1)
        .mount(&primary)
        .await;

    // The fallback must never be contacted
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FALLBACK_BODY))
        .expect(0)
        .mount(&fallback)
        .await;

    let fetcher = test_fetcher(&primary, &fallback);
    let verse = fetcher.fetch_verse(Translation::Kjv).await.unwrap();

    // Leading/trailing whitespace is trimmed
    assert_eq!(verse.text, "For God so loved the world...");
    assert_eq!(verse.reference, "John 3:16");
}

#[tokio::test]
async fn test_primary_carries_requested_translation() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("translation", "bbe"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRIMARY_BODY))
        .expect(1)
        .mount(&primary)
        .await;

    let fetcher = test_fetcher(&primary, &fallback);
    fetcher.fetch_verse(Translation::Bbe).await.unwrap();
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[tokio::test]
async fn test_primary_http_error_falls_back_once() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&primary)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("passage", "random"))
        .and(query_param("type", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FALLBACK_BODY))
        .expect(1)
        .mount(&fallback)
        .await;

    let fetcher = test_fetcher(&primary, &fallback);
    let verse = fetcher.fetch_verse(Translation::Kjv).await.unwrap();

    // Reference is composed from the array fields
    assert_eq!(verse.reference, "Psalms 23:1");
    assert_eq!(verse.text, "The LORD is my shepherd; I shall not want.");
}

#[tokio::test]
async fn test_primary_malformed_json_falls_back() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&primary)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FALLBACK_BODY))
        .expect(1)
        .mount(&fallback)
        .await;

    let fetcher = test_fetcher(&primary, &fallback);
    let verse = fetcher.fetch_verse(Translation::Web).await.unwrap();
    assert_eq!(verse.reference, "Psalms 23:1");
}

#[tokio::test]
async fn test_both_sources_failing_reports_both_causes() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&primary)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&fallback)
        .await;

    let fetcher = test_fetcher(&primary, &fallback);
    let err = fetcher.fetch_verse(Translation::Kjv).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("both verse sources failed"));
    assert!(message.contains("503"));
    assert!(message.contains("empty passage array"));
}

#[tokio::test]
async fn test_empty_verse_text_is_not_a_failure() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;

    let empty_body = r#"{"reference": "Empty 0:0", "text": ""}"#;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(empty_body))
        .expect(1)
        .mount(&primary)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FALLBACK_BODY))
        .expect(0)
        .mount(&fallback)
        .await;

    let fetcher = test_fetcher(&primary, &fallback);
    let verse = fetcher.fetch_verse(Translation::Kjv).await.unwrap();
    assert_eq!(verse.text, "");
    assert_eq!(verse.reference, "Empty 0:0");
}
