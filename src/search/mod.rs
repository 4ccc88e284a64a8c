pub mod backend;
pub mod document;
pub mod repository;
pub mod symbol;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::models::{
    DocumentSearchRequest, RepositorySearchRequest, RequestContext, SymbolSearchRequest,
};
use crate::search::backend::BackendConnection;
use crate::search::document::DocumentSearchClient;
use crate::search::repository::RepositorySearchClient;
use crate::search::symbol::SymbolSearchClient;

/// Repository-domain backend client. The result payload is opaque to this
/// layer and passed through to the caller unmodified.
#[async_trait]
pub trait RepositorySearch: Send + Sync {
    async fn search(&self, request: RepositorySearchRequest) -> Result<Value>;
    async fn suggest(&self, request: RepositorySearchRequest) -> Result<Value>;
}

/// Document-domain backend client.
#[async_trait]
pub trait DocumentSearch: Send + Sync {
    async fn search(&self, request: DocumentSearchRequest) -> Result<Value>;
    async fn suggest(&self, request: DocumentSearchRequest) -> Result<Value>;
}

/// Symbol-domain backend client.
#[async_trait]
pub trait SymbolSearch: Send + Sync {
    async fn search(&self, request: SymbolSearchRequest) -> Result<Value>;
    async fn suggest(&self, request: SymbolSearchRequest) -> Result<Value>;
}

/// Builds the per-request search clients. Every client is bound to the
/// caller's execution context so the backend sees the caller's credentials,
/// never a shared service identity.
pub trait SearchClientFactory: Send + Sync {
    fn repository_client(&self, context: &RequestContext) -> Box<dyn RepositorySearch>;
    fn document_client(&self, context: &RequestContext) -> Box<dyn DocumentSearch>;
    fn symbol_client(&self, context: &RequestContext) -> Box<dyn SymbolSearch>;
}

/// Production factory. The clients share one connection pool, but each one
/// gets its own context-bound connection.
pub struct HttpSearchClientFactory {
    connection: BackendConnection,
}

impl HttpSearchClientFactory {
    pub fn new(connection: BackendConnection) -> Self {
        HttpSearchClientFactory { connection }
    }
}

impl SearchClientFactory for HttpSearchClientFactory {
    fn repository_client(&self, context: &RequestContext) -> Box<dyn RepositorySearch> {
        Box::new(RepositorySearchClient::new(
            self.connection.for_request(context),
        ))
    }

    fn document_client(&self, context: &RequestContext) -> Box<dyn DocumentSearch> {
        Box::new(DocumentSearchClient::new(
            self.connection.for_request(context),
        ))
    }

    fn symbol_client(&self, context: &RequestContext) -> Box<dyn SymbolSearch> {
        Box::new(SymbolSearchClient::new(
            self.connection.for_request(context),
        ))
    }
}
