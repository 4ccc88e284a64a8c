use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::models::RepositorySearchRequest;
use crate::search::backend::BackendConnection;
use crate::search::RepositorySearch;

/// Searches the backend's repository collection.
pub struct RepositorySearchClient {
    connection: BackendConnection,
}

impl RepositorySearchClient {
    pub fn new(connection: BackendConnection) -> Self {
        RepositorySearchClient { connection }
    }
}

#[async_trait]
impl RepositorySearch for RepositorySearchClient {
    async fn search(&self, request: RepositorySearchRequest) -> Result<Value> {
        self.connection
            .query("/api/v1/repository/search", &request)
            .await
    }

    async fn suggest(&self, request: RepositorySearchRequest) -> Result<Value> {
        self.connection
            .query("/api/v1/repository/suggest", &request)
            .await
    }
}
