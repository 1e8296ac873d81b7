use std::str::FromStr;
use alloy_primitives::{hex, Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// Serialized request handed to the provider
///
/// Serializes as `{"method": ..., "params": [...]}` in that field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRequest {
    /// Method name to call
    pub method: String,

    /// Positional parameters, each already hex-encoded
    pub params: Vec<String>,
}

impl ProtocolRequest {
    pub fn new(method: &str, params: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            params,
        }
    }
}

/// Response shape parsed from the provider's returned text
///
/// Only `result` is used; `error` is kept so a failing read can report it.
#[derive(Debug, Deserialize)]
pub struct ProtocolResponse {
    /// Method result, a 0x-prefixed hex string for the methods used here
    #[serde(default)]
    pub result: Option<String>,

    /// Error object of an error-shaped response
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 request envelope
///
/// This structure wraps a `ProtocolRequest` for transports that speak
/// plain JSON-RPC 2.0 (e.g. a Hardhat or Anvil node over HTTP).
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<T> {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: String,

    /// Method name to call
    pub method: String,

    /// Method parameters
    pub params: T,

    /// Request identifier
    pub id: serde_json::Value,
}

impl<T> JsonRpcRequest<T> {
    /// Create a new JSON-RPC 2.0 request
    ///
    /// # Arguments
    ///
    /// * `id` - Request identifier
    /// * `method` - Method name
    /// * `params` - Method parameters
    pub fn new(id: serde_json::Value, method: String, params: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method,
            params,
            id,
        }
    }
}

/// Helper functions to move binary values in and out of the hex wire format.

/// Format a byte slice as a lowercase hexadecimal string prefixed with "0x".
///
/// Empty input formats as "0x". Fixed-width values (addresses, hashes) keep
/// their full width including leading zeros.
pub fn format_hex_bytes(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_prefixed(bytes)
}

/// Parse a hexadecimal string into a `Bytes` value.
///
/// Expects a string starting with "0x". If the hex string contains no data (i.e. "0x"),
/// an empty `Bytes` value is returned.
///
/// # Arguments
///
/// * `hex` - The hexadecimal string
///
/// # Returns
///
/// * `Result<Bytes, String>` - Parsed bytes or error message
pub fn parse_hex_bytes(hex: &str) -> Result<Bytes, String> {
    let hex = hex
        .strip_prefix("0x")
        .ok_or_else(|| "Hex data must start with 0x".to_string())?;
    if hex.is_empty() {
        return Ok(Bytes::new());
    }
    let data = hex::decode(hex).map_err(|e| format!("Invalid hex data: {}", e))?;
    Ok(Bytes::from(data))
}

/// Parse a hexadecimal address string into an `Address`.
///
/// Expects a string starting with "0x" and 40 hex digits (20 bytes).
pub fn parse_hex_address(hex: &str) -> Result<Address, String> {
    if !hex.starts_with("0x") {
        return Err("Address must start with 0x".to_string());
    }
    Address::from_str(hex)
        .map_err(|e| format!("Invalid address: {}", e))
}

/// Parse a hexadecimal storage slot key into a `B256`.
///
/// Expects a string starting with "0x" and 64 hex digits (32 bytes).
pub fn parse_hex_b256(hex: &str) -> Result<B256, String> {
    if !hex.starts_with("0x") {
        return Err("Slot key must start with 0x".to_string());
    }
    B256::from_str(hex)
        .map_err(|e| format!("Invalid slot key: {}", e))
}
