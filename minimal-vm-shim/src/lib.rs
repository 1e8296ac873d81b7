// Export modules for the binary and integration tests
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod provider;
pub mod rpc;
pub mod state;
pub mod vm;
