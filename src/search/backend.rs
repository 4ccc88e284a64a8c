use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::models::RequestContext;

/// Connection to the search backend.
///
/// One instance is built at startup from the configuration; each request
/// then derives its own copy carrying the caller's authorization, so no
/// credentials ever outlive the request that brought them in.
#[derive(Clone)]
pub struct BackendConnection {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
    authorization: Option<String>,
}

impl BackendConnection {
    pub fn new(base_url: String, api_key: Option<String>, http_client: Client) -> Self {
        BackendConnection {
            http_client,
            base_url,
            api_key,
            authorization: None,
        }
    }

    /// Binds the connection to one request's execution context.
    pub fn for_request(&self, context: &RequestContext) -> Self {
        BackendConnection {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            authorization: context.authorization.clone(),
        }
    }

    /// POSTs a serialized search request and returns the backend's JSON
    /// response without interpreting it.
    pub async fn query(&self, path: &str, body: &impl Serialize) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Search backend call: {}", url);

        let mut request = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body);
        if let Some(key) = &self.api_key {
            request = request.header("Api-Key", key);
        }
        if let Some(authorization) = &self.authorization {
            request = request.header("Authorization", authorization);
        }

        let response = request
            .send()
            .await
            .context("search backend is unreachable")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("search backend returned {} for {}", status, url));
        }

        response
            .json::<Value>()
            .await
            .context("search backend returned a non-JSON body")
    }
}
