use axum::http::{header, StatusCode};
use tower::ServiceExt;

use super::common::*;

#[tokio::test]
async fn home_renders_without_results_before_search() {
    let response = router().oneshot(get("/")).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let html = read_body(response).await;
    assert!(html.contains("Find verified help fast"));
    assert!(!html.contains("Results"));
    assert!(!html.contains("Rapid Dry"));
}

#[tokio::test]
async fn submitted_blank_search_lists_every_provider_in_order() {
    let response = router()
        .oneshot(get("/?disaster_type=Wildfire&location=&submitted=true"))
        .await
        .expect("route executes");

    let html = read_body(response).await;
    assert!(html.contains("Results (3)"));
    let rapid = html.find("Rapid Dry &amp; Restore").expect("first provider");
    let blueline = html.find("BlueLine Debris &amp; Haul").expect("second provider");
    let evergreen = html
        .find("Evergreen Mitigation Services")
        .expect("third provider");
    assert!(rapid < blueline && blueline < evergreen);
    assert!(html.contains(r#"<option value="Wildfire" selected>"#));
}

#[tokio::test]
async fn location_without_submission_shows_nothing() {
    let response = router()
        .oneshot(get("/?location=VA"))
        .await
        .expect("route executes");

    let html = read_body(response).await;
    assert!(!html.contains("Results"));
    assert!(html.contains(r#"name="location" value="VA""#));
}

#[tokio::test]
async fn unmatched_search_renders_no_matches_card() {
    let response = router()
        .oneshot(get("/?location=antarctica&submitted=true"))
        .await
        .expect("route executes");

    let html = read_body(response).await;
    assert!(html.contains("No matches yet"));
    assert!(!html.contains("Results ("));
}

#[tokio::test]
async fn unknown_disaster_type_falls_back_to_default() {
    let response = router()
        .oneshot(get("/?disaster_type=Volcano&submitted=true"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let html = read_body(response).await;
    assert!(html.contains(r#"<option value="Flood / Storm Surge" selected>"#));
    assert!(html.contains("Results (3)"));
}

#[tokio::test]
async fn provider_api_filters_by_region() {
    let response = router()
        .oneshot(get("/api/v1/providers?location=%20MID-atlantic%20"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["disaster_type"], "Flood / Storm Surge");
    assert_eq!(payload["results"][0]["name"], "BlueLine Debris & Haul");
    assert_eq!(payload["results"][0]["mobilization_window"], "24–48 hours");
}

#[tokio::test]
async fn about_page_marks_active_nav_item() {
    let response = router()
        .oneshot(get("/about"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let html = read_body(response).await;
    assert!(html.contains(r#"<a href="/about" class="active" aria-current="page">About</a>"#));
    assert!(html.contains("Our verification process"));
}

#[tokio::test]
async fn unknown_paths_render_not_found() {
    let response = router()
        .oneshot(get("/pricing"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = read_body(response).await;
    assert!(html.contains("We couldn&#39;t find that page"));
}

#[tokio::test]
async fn stylesheet_is_served_with_css_content_type() {
    let response = router()
        .oneshot(get("/assets/site.css"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/css"
    );

    let missing = router()
        .oneshot(get("/assets/app.js"))
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
