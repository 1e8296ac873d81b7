use alloy_primitives::{Address, Bytes, B256};
use clap::{Parser, Subcommand};
use minimal_vm_shim::{
    config::Config,
    models::jsonrpc::{parse_hex_address, parse_hex_b256, parse_hex_bytes},
    rpc::HttpProvider,
    vm::MinimalVm,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Drive the minimal VM state manager against a JSON-RPC node
#[derive(Parser)]
#[command(name = "minimal-vm-shim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replace the code of an account (hardhat_setCode)
    SetCode {
        #[arg(value_parser = parse_hex_address)]
        address: Address,
        #[arg(value_parser = parse_hex_bytes)]
        code: Bytes,
    },
    /// Read a storage slot (eth_getStorageAt)
    GetStorage {
        #[arg(value_parser = parse_hex_address)]
        address: Address,
        #[arg(value_parser = parse_hex_b256)]
        slot: B256,
    },
    /// Write a storage slot (hardhat_setStorageAt)
    SetStorage {
        #[arg(value_parser = parse_hex_address)]
        address: Address,
        #[arg(value_parser = parse_hex_b256)]
        slot: B256,
        #[arg(value_parser = parse_hex_bytes)]
        value: Bytes,
    },
}

/// Application entry point
///
/// 1. Sets up logging
/// 2. Loads configuration
/// 3. Connects to the JSON-RPC node
/// 4. Runs the requested state operation through the VM facade
#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Debug level for our crate comes from RUST_LOG; keep dependencies quiet
    let filter = EnvFilter::from_default_env()
        .add_directive("minimal_vm_shim=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    let config = Config::from_env()?;

    let provider = HttpProvider::connect(&config.ethereum_rpc_url, config.request_timeout()).await?;
    let vm = MinimalVm::new(Arc::new(provider));

    match cli.command {
        Command::SetCode { address, code } => {
            vm.state_manager.put_contract_code(address, &code).await?;
            info!("Code set for {} ({} bytes)", address, code.len());
        }
        Command::GetStorage { address, slot } => {
            let value = vm.state_manager.get_contract_storage(address, slot).await?;
            println!("{value}");
        }
        Command::SetStorage { address, slot, value } => {
            vm.state_manager.put_contract_storage(address, slot, &value).await?;
            info!("Storage slot {} of {} set", slot, address);
        }
    }

    Ok(())
}
