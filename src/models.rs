use serde::{Deserialize, Serialize};

use crate::controller::error::SearchApiError;
use crate::parser::QueryParams;

/// The caller's execution context, forwarded untouched to the search
/// backend so downstream calls run with the caller's identity.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub authorization: Option<String>,
}

/// Uniform JSON error body returned by every search endpoint.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        ErrorResponse { message }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RepositorySearchRequest {
    pub query: String,
    pub page: u32,
    pub repo_scope: Vec<String>,
}

impl RepositorySearchRequest {
    pub fn from_params(params: &QueryParams) -> Result<Self, SearchApiError> {
        Ok(RepositorySearchRequest {
            query: params.query(),
            page: params.page(),
            repo_scope: params.repo_scope()?,
        })
    }
}

/// Document search carries the two optional filter lists on top of the
/// common fields; both degrade to empty when the parameters are absent.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DocumentSearchRequest {
    pub query: String,
    pub page: u32,
    pub lang_filters: Vec<String>,
    pub repo_filters: Vec<String>,
    pub repo_scope: Vec<String>,
}

impl DocumentSearchRequest {
    pub fn from_params(params: &QueryParams) -> Result<Self, SearchApiError> {
        Ok(DocumentSearchRequest {
            query: params.query(),
            page: params.page(),
            lang_filters: params.lang_filters(),
            repo_filters: params.repo_filters(),
            repo_scope: params.repo_scope()?,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SymbolSearchRequest {
    pub query: String,
    pub page: u32,
    pub repo_scope: Vec<String>,
}

impl SymbolSearchRequest {
    pub fn from_params(params: &QueryParams) -> Result<Self, SearchApiError> {
        Ok(SymbolSearchRequest {
            query: params.query(),
            page: params.page(),
            repo_scope: params.repo_scope()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_request_normalizes_every_field() {
        let params =
            QueryParams::parse("q=foo&p=2&repoScope=repo1,repo2&langs=go,ts&repos=repo1");

        let request = DocumentSearchRequest::from_params(&params).unwrap();

        assert_eq!(
            request,
            DocumentSearchRequest {
                query: "foo".to_string(),
                page: 2,
                lang_filters: vec!["go".to_string(), "ts".to_string()],
                repo_filters: vec!["repo1".to_string()],
                repo_scope: vec!["repo1".to_string(), "repo2".to_string()],
            }
        );
    }

    #[test]
    fn test_document_request_filters_default_to_empty() {
        let params = QueryParams::parse("q=foo&repoScope=repo1");

        let request = DocumentSearchRequest::from_params(&params).unwrap();

        assert_eq!(request.lang_filters, Vec::<String>::new());
        assert_eq!(request.repo_filters, Vec::<String>::new());
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_repository_request_requires_repo_scope() {
        let params = QueryParams::parse("q=foo");
        assert!(matches!(
            RepositorySearchRequest::from_params(&params),
            Err(SearchApiError::InvalidRepoScope)
        ));
    }

    #[test]
    fn test_symbol_request_shares_the_scope_rule() {
        let params = QueryParams::parse("q=foo&repoScope=a,b");

        let request = SymbolSearchRequest::from_params(&params).unwrap();
        assert_eq!(request.repo_scope, vec!["a", "b"]);

        let params = QueryParams::parse("q=foo");
        assert!(matches!(
            SymbolSearchRequest::from_params(&params),
            Err(SearchApiError::InvalidRepoScope)
        ));
    }
}
