use async_trait::async_trait;
use minimal_vm_shim::{
    models::jsonrpc::ProtocolRequest,
    provider::{Provider, ProviderResponse},
};
use mockall::mock;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

mock! {
    pub Node {}

    #[async_trait]
    impl Provider for Node {
        async fn handle_request(&self, request: String) -> eyre::Result<ProviderResponse>;
    }
}

/// In-memory provider that answers the three state methods and records every
/// request it receives.
#[derive(Default)]
pub struct InMemoryNode {
    requests: Mutex<Vec<ProtocolRequest>>,
    code: Mutex<HashMap<String, String>>,
    storage: Mutex<HashMap<(String, String), String>>,
}

impl InMemoryNode {
    pub fn requests(&self) -> Vec<ProtocolRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn code_of(&self, address: &str) -> Option<String> {
        self.code.lock().unwrap().get(address).cloned()
    }
}

#[async_trait]
impl Provider for InMemoryNode {
    async fn handle_request(&self, request: String) -> eyre::Result<ProviderResponse> {
        let request: ProtocolRequest = serde_json::from_str(&request)?;
        self.requests.lock().unwrap().push(request.clone());

        let params = &request.params;
        let result = match request.method.as_str() {
            "hardhat_setCode" => {
                self.code
                    .lock()
                    .unwrap()
                    .insert(params[0].clone(), params[1].clone());
                json!(true)
            }
            "hardhat_setStorageAt" => {
                self.storage
                    .lock()
                    .unwrap()
                    .insert((params[0].clone(), params[1].clone()), params[2].clone());
                json!(true)
            }
            "eth_getStorageAt" => {
                let value = self
                    .storage
                    .lock()
                    .unwrap()
                    .get(&(params[0].clone(), params[1].clone()))
                    .cloned()
                    .unwrap_or_else(|| format!("0x{}", "00".repeat(32)));
                json!(value)
            }
            other => eyre::bail!("unsupported method {other}"),
        };

        Ok(ProviderResponse::new(
            json!({ "jsonrpc": "2.0", "id": 1, "result": result }).to_string(),
        ))
    }
}
