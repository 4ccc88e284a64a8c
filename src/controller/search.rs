use std::convert::Infallible;
use std::sync::Arc;

use log::{debug, error};
use serde_json::Value;
use warp::http::StatusCode;

use crate::config::AppState;
use crate::controller::error::SearchApiError;
use crate::models::{
    DocumentSearchRequest, ErrorResponse, RepositorySearchRequest, RequestContext,
    SymbolSearchRequest,
};
use crate::parser::QueryParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDomain {
    Repository,
    Document,
    Symbol,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Search,
    Suggest,
}

/// The one handler behind all six search endpoints.
///
/// A request either passes validation and makes exactly one backend call, or
/// fails out early. A malformed scope never reaches the client factory; a
/// backend failure is reported with a fixed message and logged server-side.
pub async fn dispatch_search(
    domain: SearchDomain,
    mode: SearchMode,
    raw_query: String,
    context: RequestContext,
    app_state: Arc<AppState>,
) -> Result<impl warp::Reply, Infallible> {
    match run_search(domain, mode, &raw_query, &context, app_state).await {
        Ok(result) => Ok(warp::reply::with_status(
            warp::reply::json(&result),
            StatusCode::OK,
        )),
        Err(err) => {
            let status = match &err {
                SearchApiError::InvalidRepoScope => {
                    debug!("rejected {:?} {:?} request: {}", domain, mode, err);
                    StatusCode::BAD_REQUEST
                }
                SearchApiError::Backend(cause) => {
                    error!("search backend call failed: {:#}", cause);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(err.to_string())),
                status,
            ))
        }
    }
}

async fn run_search(
    domain: SearchDomain,
    mode: SearchMode,
    raw_query: &str,
    context: &RequestContext,
    app_state: Arc<AppState>,
) -> Result<Value, SearchApiError> {
    let params = QueryParams::parse(raw_query);
    let clients = app_state.clients.as_ref();

    let outcome = match domain {
        SearchDomain::Repository => {
            let request = RepositorySearchRequest::from_params(&params)?;
            debug!("repository {:?} request: {:?}", mode, request);
            let client = clients.repository_client(context);
            match mode {
                SearchMode::Search => client.search(request).await,
                SearchMode::Suggest => client.suggest(request).await,
            }
        }
        SearchDomain::Document => {
            let request = DocumentSearchRequest::from_params(&params)?;
            debug!("document {:?} request: {:?}", mode, request);
            let client = clients.document_client(context);
            match mode {
                SearchMode::Search => client.search(request).await,
                SearchMode::Suggest => client.suggest(request).await,
            }
        }
        SearchDomain::Symbol => {
            // Symbol search and symbol suggestions are currently the same
            // backend call, whichever endpoint the request came in on.
            let request = SymbolSearchRequest::from_params(&params)?;
            debug!("symbol {:?} request: {:?}", mode, request);
            let client = clients.symbol_client(context);
            client.suggest(request).await
        }
    };

    outcome.map_err(SearchApiError::Backend)
}
