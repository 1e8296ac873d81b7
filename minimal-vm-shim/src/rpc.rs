use crate::{
    error::ProviderError,
    models::jsonrpc::{JsonRpcRequest, ProtocolRequest},
    provider::{Provider, ProviderResponse},
};
use async_trait::async_trait;
use eyre::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Provider that forwards requests to a JSON-RPC 2.0 node over HTTP
///
/// Serialized requests from the state manager carry only `method` and
/// `params`; this provider adds the `jsonrpc` version and a request id before
/// posting them, and returns the node's response body untouched.
pub struct HttpProvider {
    client: reqwest::Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl HttpProvider {
    /// Create a provider for the given endpoint without contacting it
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - URL of the JSON-RPC endpoint
    /// * `timeout` - Per-request timeout applied by the HTTP client
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::RpcConnection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            rpc_url: rpc_url.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Create a provider and verify the endpoint answers
    ///
    /// The check fetches the latest block number.
    pub async fn connect(rpc_url: &str, timeout: Duration) -> Result<Self> {
        let provider = Self::new(rpc_url, timeout)?;

        let request = serde_json::to_string(&ProtocolRequest::new("eth_blockNumber", Vec::new()))?;
        let response = provider.handle_request(request).await?;
        let body: serde_json::Value = serde_json::from_str(&response.json)?;
        let block_number = body
            .get("result")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ProviderError::RpcConnection(format!("Unexpected eth_blockNumber response: {}", response.json)))?;
        info!("Connected to {}! Latest block number: {}", rpc_url, block_number);

        Ok(provider)
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn handle_request(&self, request: String) -> Result<ProviderResponse> {
        let request: ProtocolRequest = serde_json::from_str(&request)
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope = JsonRpcRequest::new(id.into(), request.method, request.params);
        debug!("Posting JSON-RPC request {} ({}) to {}", id, envelope.method, self.rpc_url);

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&envelope)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ProviderError::RpcConnection(e.to_string()))?;

        let json = response
            .text()
            .await
            .map_err(|e| ProviderError::RpcConnection(e.to_string()))?;
        debug!("JSON-RPC response {}: {}", id, json);

        Ok(ProviderResponse { json })
    }
}
