use eyre::Result;
use serde::Deserialize;
use std::time::Duration;

/// Default JSON-RPC endpoint (a local Hardhat or Anvil node)
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Default per-request timeout for the HTTP provider, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shim configuration structure
///
/// Values come from environment variables with appropriate defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// JSON-RPC endpoint URL the HTTP provider talks to
    pub ethereum_rpc_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// # Environment Variables
    ///
    /// * `ETHEREUM_RPC_URL` - JSON-RPC URL (default: "http://localhost:8545")
    /// * `REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 30)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();
        Self::build(::config::Environment::default())
    }

    fn build(env: ::config::Environment) -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("ethereum_rpc_url", DEFAULT_RPC_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .add_source(env.try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
