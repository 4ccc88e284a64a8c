use std::convert::Infallible;
use std::sync::Arc;

use warp::{self, http::Response, Filter};

use crate::config::AppState;
use crate::controller::search::{dispatch_search, SearchDomain, SearchMode};
use crate::models::RequestContext;

/// The six code-search endpoints plus the health check. All six are stamped
/// out of one filter constructor, so every endpoint shares one handler and
/// one response envelope.
pub fn search_routes(
    app_state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    code_search_endpoint(
        "search",
        "repo",
        SearchDomain::Repository,
        SearchMode::Search,
        app_state.clone(),
    )
    .or(code_search_endpoint(
        "suggestions",
        "repo",
        SearchDomain::Repository,
        SearchMode::Suggest,
        app_state.clone(),
    ))
    .or(code_search_endpoint(
        "search",
        "doc",
        SearchDomain::Document,
        SearchMode::Search,
        app_state.clone(),
    ))
    .or(code_search_endpoint(
        "suggestions",
        "doc",
        SearchDomain::Document,
        SearchMode::Suggest,
        app_state.clone(),
    ))
    .or(code_search_endpoint(
        "search",
        "symbol",
        SearchDomain::Symbol,
        SearchMode::Search,
        app_state.clone(),
    ))
    .or(code_search_endpoint(
        "suggestions",
        "symbol",
        SearchDomain::Symbol,
        SearchMode::Suggest,
        app_state,
    ))
    .or(health_check())
}

fn health_check() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path::end() // Matches the root path "/"
        .and(warp::get()) // Only responds to GET requests
        .map(|| {
            Response::builder()
                .status(warp::http::StatusCode::OK)
                .body("Hello from code search api")
                .expect("Failed to construct response")
        })
}

/// GET /api/code/{search|suggestions}/{repo|doc|symbol}
fn code_search_endpoint(
    section: &'static str,
    resource: &'static str,
    domain: SearchDomain,
    mode: SearchMode,
    app_state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("api")
        .and(warp::path("code"))
        .and(warp::path(section))
        .and(warp::path(resource))
        .and(warp::path::end())
        .and(warp::get())
        .and(raw_query())
        .and(request_context())
        .and(warp::any().map(move || app_state.clone()))
        .and_then(move |raw_query, context, state| {
            dispatch_search(domain, mode, raw_query, context, state)
        })
}

/// The raw, still-encoded query string; requests without one get an empty
/// string instead of a rejection.
fn raw_query() -> impl Filter<Extract = (String,), Error = warp::Rejection> + Clone {
    warp::query::raw().or_else(|_| async { Ok::<(String,), warp::Rejection>((String::new(),)) })
}

/// Caller execution context, carried through to the backend clients.
fn request_context() -> impl Filter<Extract = (RequestContext,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .map(|authorization| RequestContext { authorization })
}
