use alloy_primitives::hex::FromHexError;
use thiserror::Error;

/// Errors raised while decoding a provider response into binary data
///
/// Provider failures are never wrapped in this type; they reach the caller
/// as the provider produced them.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The response text is not a JSON object
    #[error("Malformed provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The response has no usable `result` field
    #[error("Provider response to {method} has no result{}", .error.as_ref().map(|e| format!(" (error: {e})")).unwrap_or_default())]
    MissingResult {
        method: &'static str,
        error: Option<serde_json::Value>,
    },

    /// The `result` string does not start with 0x
    #[error("Result is not 0x-prefixed: {0}")]
    MissingPrefix(String),

    /// The digits after the prefix are not valid hex
    #[error("Invalid hex in result: {0}")]
    InvalidHex(#[from] FromHexError),
}

/// Errors produced by the HTTP JSON-RPC provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The serialized request handed to the provider is not a JSON object
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Error talking to the JSON-RPC node
    #[error("RPC connection error: {0}")]
    RpcConnection(String),
}
