//! Provider failures and undecodable responses

use crate::{helpers::MockNode, init_logger};
use alloy_primitives::{Address, B256};
use minimal_vm_shim::{error::DecodeError, provider::ProviderResponse, state::StateManager};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("node went away")]
struct NodeGone;

fn state_answering(json: &'static str) -> StateManager {
    let mut node = MockNode::new();
    node.expect_handle_request()
        .times(1)
        .returning(move |_| Ok(ProviderResponse::new(json)));
    StateManager::new(Arc::new(node))
}

#[tokio::test]
async fn test_provider_error_is_passed_through() {
    init_logger();

    let mut node = MockNode::new();
    node.expect_handle_request()
        .times(3)
        .returning(|_| Err(NodeGone.into()));
    let state = StateManager::new(Arc::new(node));

    let err = state
        .get_contract_storage(Address::ZERO, B256::ZERO)
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<NodeGone>().is_some());

    let err = state
        .put_contract_code(Address::ZERO, &[0x00])
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<NodeGone>().is_some());

    let err = state
        .put_contract_storage(Address::ZERO, B256::ZERO, &[0x00])
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<NodeGone>().is_some());
}

#[tokio::test]
async fn test_missing_result_fails_read() {
    init_logger();

    let state = state_answering(r#"{"jsonrpc":"2.0","id":1}"#);
    let err = state
        .get_contract_storage(Address::ZERO, B256::ZERO)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::MissingResult { error: None, .. })
    ));
}

#[tokio::test]
async fn test_error_response_fails_read_with_error_attached() {
    init_logger();

    let state = state_answering(
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid params"}}"#,
    );
    let err = state
        .get_contract_storage(Address::ZERO, B256::ZERO)
        .await
        .unwrap_err();

    match err.downcast_ref::<DecodeError>() {
        Some(DecodeError::MissingResult { method, error: Some(error) }) => {
            assert_eq!(*method, "eth_getStorageAt");
            assert_eq!(error["message"], "invalid params");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("invalid params"));
}

#[tokio::test]
async fn test_unparseable_response_fails_read() {
    init_logger();

    let state = state_answering("<html>502 Bad Gateway</html>");
    let err = state
        .get_contract_storage(Address::ZERO, B256::ZERO)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_invalid_hex_result_fails_read() {
    init_logger();

    let state = state_answering(r#"{"result":"0xnothex"}"#);
    let err = state
        .get_contract_storage(Address::ZERO, B256::ZERO)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::InvalidHex(_))
    ));
}

#[tokio::test]
async fn test_writes_ignore_response_body() {
    init_logger();

    let state = state_answering(r#"{"error":{"code":-32601,"message":"method not found"}}"#);
    state
        .put_contract_storage(Address::ZERO, B256::ZERO, &[0x01])
        .await
        .unwrap();
}
