use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::models::DocumentSearchRequest;
use crate::search::backend::BackendConnection;
use crate::search::DocumentSearch;

/// Searches the backend's document collection, filters included.
pub struct DocumentSearchClient {
    connection: BackendConnection,
}

impl DocumentSearchClient {
    pub fn new(connection: BackendConnection) -> Self {
        DocumentSearchClient { connection }
    }
}

#[async_trait]
impl DocumentSearch for DocumentSearchClient {
    async fn search(&self, request: DocumentSearchRequest) -> Result<Value> {
        self.connection
            .query("/api/v1/document/search", &request)
            .await
    }

    async fn suggest(&self, request: DocumentSearchRequest) -> Result<Value> {
        self.connection
            .query("/api/v1/document/suggest", &request)
            .await
    }
}
