use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::models::SymbolSearchRequest;
use crate::search::backend::BackendConnection;
use crate::search::SymbolSearch;

/// Searches the backend's symbol collection.
pub struct SymbolSearchClient {
    connection: BackendConnection,
}

impl SymbolSearchClient {
    pub fn new(connection: BackendConnection) -> Self {
        SymbolSearchClient { connection }
    }
}

#[async_trait]
impl SymbolSearch for SymbolSearchClient {
    async fn search(&self, request: SymbolSearchRequest) -> Result<Value> {
        self.connection
            .query("/api/v1/symbol/search", &request)
            .await
    }

    async fn suggest(&self, request: SymbolSearchRequest) -> Result<Value> {
        self.connection
            .query("/api/v1/symbol/suggest", &request)
            .await
    }
}
