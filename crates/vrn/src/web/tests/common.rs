use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::registry::ProviderCatalog;
use crate::web::site_router;

pub(super) fn router() -> Router {
    site_router(Arc::new(ProviderCatalog::seed()))
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

pub(super) fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn complete_provider_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("role", "provider"),
        ("company", "Tidewater Restoration LLC"),
        ("hq_location", "Suffolk, VA"),
        ("contact_name", "Jordan Alvarez"),
        ("phone", "(555) 123-4567"),
        ("email", "jordan@tidewater.example"),
        ("mobilization_window", "<12 hours"),
        ("crew_size_band", "16–25"),
        ("disaster_type", "Flood / Storm Surge"),
        ("disaster_type", "Hurricane / Tropical Storm"),
        ("regions_served", "VA, NC; Mid-Atlantic"),
        ("insurance_acknowledged", "on"),
        ("attestation_accepted", "on"),
        ("family_email", ""),
        ("family_location", ""),
    ]
}
