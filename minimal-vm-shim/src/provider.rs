use async_trait::async_trait;
use eyre::Result;

/// Serialized response returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    /// Response text, a JSON object carrying `result` or `error`
    pub json: String,
}

impl ProviderResponse {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

/// Request/response provider that owns the actual chain state
///
/// The adapter treats implementations as black boxes: it hands over one
/// serialized request and awaits one serialized response. Implementations
/// must tolerate concurrent outstanding requests.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Handle a serialized request of the form `{"method": ..., "params": [...]}`
    async fn handle_request(&self, request: String) -> Result<ProviderResponse>;
}
