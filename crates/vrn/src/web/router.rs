use std::sync::Arc;

use axum::{routing::get, Router};

use super::handlers;
use crate::registry::{ProviderCatalog, Route};

/// Read-only state shared by the site handlers.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub catalog: Arc<ProviderCatalog>,
}

/// Router builder exposing the three pages, the provider search API and the
/// embedded stylesheet. Unknown paths render the not-found page.
pub fn site_router(catalog: Arc<ProviderCatalog>) -> Router {
    Router::new()
        .route(Route::Home.path(), get(handlers::home))
        .route(
            Route::Signup.path(),
            get(handlers::signup_page).post(handlers::signup_submit),
        )
        .route(Route::About.path(), get(handlers::about))
        .route("/api/v1/providers", get(handlers::provider_search))
        .route("/assets/:file", get(handlers::asset))
        .fallback(handlers::not_found)
        .with_state(SiteState { catalog })
}
