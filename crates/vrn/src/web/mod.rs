//! HTTP surface: each request rebuilds one view's state, applies the visitor's
//! action and renders the result.

pub mod form;
mod handlers;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use form::{SignupFormInput, SignupIntent};
pub use handlers::{ProviderSearchResponse, SearchParams};
pub use router::{site_router, SiteState};
