use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::form::{SignupFormInput, SignupIntent};
use super::router::SiteState;
use super::views::{self, RenderContext};
use crate::error::AppError;
use crate::registry::{
    DisasterType, ProviderRecord, Route, SearchQuery, SignupSubmission, Site, View,
};

const REJECTED_NOTICE: &str =
    "Please complete every required field and confirm both acknowledgements before submitting.";

const SITE_STYLESHEET: &str = include_str!("../../assets/site.css");

/// Search form parameters. `submitted` is present once the visitor pressed
/// Search; the other fields are the raw selections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub disaster_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub submitted: Option<String>,
}

impl SearchParams {
    /// Replay the selections onto a freshly mounted search panel.
    pub fn apply(&self, query: &mut SearchQuery) {
        if let Some(raw) = self.disaster_type.as_deref() {
            match DisasterType::from_label(raw) {
                Some(kind) => query.set_disaster_type(kind),
                None => debug!(value = %raw, "ignoring unknown disaster type on search"),
            }
        }
        if let Some(location) = &self.location {
            query.set_location_text(location.clone());
        }
        if self
            .submitted
            .as_deref()
            .is_some_and(|flag| !flag.eq_ignore_ascii_case("false"))
        {
            query.submit_search();
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProviderSearchResponse {
    pub disaster_type: DisasterType,
    pub location: String,
    pub count: usize,
    pub results: Vec<ProviderRecord>,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn render_view(
    state: &SiteState,
    view: &View,
    notice: Option<&str>,
) -> Result<Html<String>, AppError> {
    let ctx = RenderContext {
        catalog: &state.catalog,
        year: current_year(),
        notice,
    };
    Ok(Html(views::render(view, &ctx)?))
}

pub(crate) async fn home(
    State(state): State<SiteState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let mut site = Site::at(Route::Home);
    if let Some(query) = site.search_mut() {
        params.apply(query);
        if query.has_been_submitted() {
            debug!(
                disaster_type = %query.disaster_type(),
                matches = query.results(&state.catalog).len(),
                "provider search submitted"
            );
        }
    }
    render_view(&state, site.view(), None)
}

pub(crate) async fn signup_page(
    State(state): State<SiteState>,
) -> Result<Html<String>, AppError> {
    let site = Site::at(Route::Signup);
    render_view(&state, site.view(), None)
}

pub(crate) async fn signup_submit(
    State(state): State<SiteState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let SignupFormInput { intent, form } = SignupFormInput::from_pairs(&pairs);
    let mut site = Site::from(View::Signup(form));

    if intent == SignupIntent::ReturnToSearch {
        site.return_to_search();
        return Ok(Redirect::to(site.route().path()).into_response());
    }

    let mut status = StatusCode::OK;
    let mut notice = None;
    if let Some(form) = site.signup_mut() {
        match intent {
            SignupIntent::Submit => match form.submit() {
                Ok(submission) => log_submission(&submission),
                Err(violation) => {
                    info!(
                        role = violation.role.as_str(),
                        missing = violation.missing.len(),
                        "signup submission rejected"
                    );
                    status = StatusCode::UNPROCESSABLE_ENTITY;
                    notice = Some(REJECTED_NOTICE);
                }
            },
            SignupIntent::SwitchRole(role) => {
                if form.switch_role(role) {
                    debug!(role = role.as_str(), "signup role switched");
                }
            }
            SignupIntent::SubmitAnother => form.submit_another(),
            SignupIntent::ReturnToSearch => {}
        }
    }

    let page = render_view(&state, site.view(), notice)?;
    Ok((status, page).into_response())
}

// Accepted submissions have no side effect beyond this log line. Personal
// details stay out of it.
fn log_submission(submission: &SignupSubmission) {
    match submission {
        SignupSubmission::Provider(provider) => info!(
            role = submission.role().as_str(),
            disaster_types = provider.disaster_types.len(),
            mobilization_window = %provider.mobilization_window,
            crew_size_band = %provider.crew_size_band,
            "signup submission received"
        ),
        SignupSubmission::Family(_) => {
            info!(role = submission.role().as_str(), "signup submission received")
        }
    }
}

pub(crate) async fn about(State(state): State<SiteState>) -> Result<Html<String>, AppError> {
    let site = Site::at(Route::About);
    render_view(&state, site.view(), None)
}

/// JSON projection of a submitted search.
pub(crate) async fn provider_search(
    State(state): State<SiteState>,
    Query(params): Query<SearchParams>,
) -> Json<ProviderSearchResponse> {
    let mut query = SearchQuery::new();
    params.apply(&mut query);
    query.submit_search();

    let results: Vec<ProviderRecord> = query
        .results(&state.catalog)
        .into_iter()
        .cloned()
        .collect();

    Json(ProviderSearchResponse {
        disaster_type: query.disaster_type(),
        location: query.location_text().to_string(),
        count: results.len(),
        results,
    })
}

pub(crate) async fn asset(Path(file): Path<String>) -> Response {
    let body = match file.as_str() {
        "site.css" => SITE_STYLESHEET,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let mime = mime_guess::from_path(&file).first_or_octet_stream();
    (
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        body,
    )
        .into_response()
}

pub(crate) async fn not_found(uri: Uri) -> Result<Response, AppError> {
    debug!(path = %uri.path(), "no page for path");
    let page = views::render_not_found(uri.path(), current_year())?;
    Ok((StatusCode::NOT_FOUND, Html(page)).into_response())
}
