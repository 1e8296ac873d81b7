use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Message about to be executed, delivered to `beforeMessage` listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalMessage {
    /// Recipient (None for contract creation)
    pub to: Option<Address>,

    /// Address whose code runs (differs from `to` for delegate calls)
    pub code_address: Option<Address>,

    /// Value transferred in wei
    pub value: U256,

    /// Calldata or init code
    pub data: Bytes,

    /// Message sender
    pub caller: Address,

    /// Gas limit for this message
    pub gas_limit: u64,
}

/// Execution outcome of a finished message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalExecResult {
    pub execution_gas_used: u64,
}

/// Result delivered to `afterMessage` listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalEvmResult {
    pub exec_result: MinimalExecResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalOpcode {
    pub name: String,
}

/// Interpreter state delivered to `step` listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalInterpreterStep {
    /// Program counter
    pub pc: u64,

    /// Call depth
    pub depth: u64,

    pub opcode: MinimalOpcode,

    /// Stack, bottom first
    pub stack: Vec<U256>,

    /// Memory snapshot, if the producer captured one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Bytes>,
}
