use crate::{
    error::DecodeError,
    models::jsonrpc::{format_hex_bytes, ProtocolRequest, ProtocolResponse},
    provider::Provider,
};
use alloy_primitives::{hex, Address, Bytes, B256};
use eyre::Result;
use std::sync::Arc;
use tracing::{debug, instrument};

pub const SET_CODE_METHOD: &str = "hardhat_setCode";
pub const GET_STORAGE_AT_METHOD: &str = "eth_getStorageAt";
pub const SET_STORAGE_AT_METHOD: &str = "hardhat_setStorageAt";

/// State access surface of the legacy VM shape
///
/// Each operation is a single round trip to the provider: the arguments are
/// hex-encoded into a `ProtocolRequest`, the provider answers, and reads
/// decode the `result` field back into bytes. Nothing is cached between
/// calls, and calls issued concurrently are ordered only by the provider.
#[derive(Clone)]
pub struct StateManager {
    provider: Arc<dyn Provider>,
}

impl StateManager {
    /// Creates a state manager forwarding to the given provider
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Replace the code stored at `address`
    ///
    /// Sends `hardhat_setCode` and resolves once the provider has answered.
    /// The response body is not inspected.
    #[instrument(skip(self, code), fields(code_len = code.len()), err)]
    pub async fn put_contract_code(&self, address: Address, code: &[u8]) -> Result<()> {
        let request = ProtocolRequest::new(
            SET_CODE_METHOD,
            vec![format_hex_bytes(address.as_slice()), format_hex_bytes(code)],
        );
        self.send(&request).await?;
        Ok(())
    }

    /// Read one storage slot of `address`
    ///
    /// Sends `eth_getStorageAt` and decodes the `result` hex string. A
    /// response without `result` fails with `DecodeError::MissingResult`
    /// instead of yielding empty bytes.
    #[instrument(skip(self), err)]
    pub async fn get_contract_storage(&self, address: Address, slot: B256) -> Result<Bytes> {
        let request = ProtocolRequest::new(
            GET_STORAGE_AT_METHOD,
            vec![
                format_hex_bytes(address.as_slice()),
                format_hex_bytes(slot.as_slice()),
            ],
        );
        let json = self.send(&request).await?;

        let value = decode_result(GET_STORAGE_AT_METHOD, &json)?;
        debug!("Storage slot value: {}", value);
        Ok(value)
    }

    /// Overwrite one storage slot of `address` with `value`
    ///
    /// Sends `hardhat_setStorageAt` and resolves once the provider has answered.
    #[instrument(skip(self, value), fields(value_len = value.len()), err)]
    pub async fn put_contract_storage(
        &self,
        address: Address,
        slot: B256,
        value: &[u8],
    ) -> Result<()> {
        let request = ProtocolRequest::new(
            SET_STORAGE_AT_METHOD,
            vec![
                format_hex_bytes(address.as_slice()),
                format_hex_bytes(slot.as_slice()),
                format_hex_bytes(value),
            ],
        );
        self.send(&request).await?;
        Ok(())
    }

    /// Serialize the request, hand it to the provider, return the response text.
    /// Provider errors are returned as-is.
    async fn send(&self, request: &ProtocolRequest) -> Result<String> {
        let text = serde_json::to_string(request)?;
        debug!("Sending provider request: {}", text);

        let response = self.provider.handle_request(text).await?;
        debug!("Provider response: {}", response.json);
        Ok(response.json)
    }
}

/// Decode the `result` field of a provider response into bytes
///
/// The result must be a 0x-prefixed hex string with an even number of
/// digits; "0x" alone decodes to empty bytes.
pub fn decode_result(method: &'static str, json: &str) -> Result<Bytes, DecodeError> {
    let response: ProtocolResponse = serde_json::from_str(json)?;
    let result = response.result.ok_or(DecodeError::MissingResult {
        method,
        error: response.error,
    })?;

    let digits = result
        .strip_prefix("0x")
        .ok_or_else(|| DecodeError::MissingPrefix(result.clone()))?;
    Ok(Bytes::from(hex::decode(digits)?))
}
