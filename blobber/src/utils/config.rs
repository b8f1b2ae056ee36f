use std::time::Duration;
use tracing::{info, warn};

pub struct Config {
    pub execution_rpc_url: String,
    pub recipient_address: String,
    pub calldata: String,
    pub gas_limit: u64,
    pub max_fee_per_gas: u64,
    pub max_priority_fee_per_gas: u64,
    pub rpc_timeout: Duration,
}

impl Config {
    pub fn read_env_variables() -> Self {
        // Load environment variables from .env file
        dotenvy::dotenv().ok();

        const EXECUTION_RPC_URL: &str = "EXECUTION_RPC_URL";
        let execution_rpc_url = std::env::var(EXECUTION_RPC_URL).unwrap_or_else(|_| {
            warn!(
                "No execution node RPC URL found in {} env var, using default",
                EXECUTION_RPC_URL
            );
            "http://localhost:8545".to_string()
        });

        const RECIPIENT_ADDRESS: &str = "RECIPIENT_ADDRESS";
        let recipient_address = std::env::var(RECIPIENT_ADDRESS).unwrap_or_else(|_| {
            warn!(
                "No recipient address found in {} env var, using default",
                RECIPIENT_ADDRESS
            );
            "0xae64071b92ae1573ac9b5f6a0dc3bb1cfd5121ef".to_string()
        });

        let calldata = std::env::var("CALLDATA").unwrap_or("0xdeadbeef".to_string());

        // The default covers a transaction carrying two blobs
        let gas_limit = std::env::var("GAS_LIMIT")
            .unwrap_or("261064".to_string())
            .parse::<u64>()
            .expect("GAS_LIMIT must be a number");

        let max_fee_per_gas = std::env::var("MAX_FEE_PER_GAS_WEI")
            .unwrap_or("22000".to_string())
            .parse::<u64>()
            .expect("MAX_FEE_PER_GAS_WEI must be a number");

        let max_priority_fee_per_gas = std::env::var("MAX_PRIORITY_FEE_PER_GAS_WEI")
            .unwrap_or("22000".to_string())
            .parse::<u64>()
            .expect("MAX_PRIORITY_FEE_PER_GAS_WEI must be a number");

        let rpc_timeout = std::env::var("RPC_TIMEOUT_MS")
            .unwrap_or("10000".to_string())
            .parse::<u64>()
            .expect("RPC_TIMEOUT_MS must be a number");
        let rpc_timeout = Duration::from_millis(rpc_timeout);

        let config = Self {
            execution_rpc_url,
            recipient_address,
            calldata,
            gas_limit,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            rpc_timeout,
        };

        info!(
            r#"
Configuration:
execution node RPC URL: {},
recipient address: {},
calldata: {},
gas limit: {},
max fee per gas: {} wei,
max priority fee per gas: {} wei,
rpc timeout: {}ms
"#,
            config.execution_rpc_url,
            config.recipient_address,
            config.calldata,
            config.gas_limit,
            config.max_fee_per_gas,
            config.max_priority_fee_per_gas,
            config.rpc_timeout.as_millis(),
        );

        config
    }
}
