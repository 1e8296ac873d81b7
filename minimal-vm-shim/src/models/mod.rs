//! Data models used throughout the application
//!
//! This module contains the protocol request/response shapes exchanged with
//! the provider and the payloads delivered to VM hook listeners.

// Protocol request/response structures and hex helpers
pub mod jsonrpc;

// Hook payloads
pub mod vm;
