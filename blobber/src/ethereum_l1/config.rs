use std::time::Duration;

pub struct EthereumL1Config {
    pub execution_rpc_url: String,
    pub recipient_address: String,
    pub calldata: String,
    pub gas_limit: u64,
    pub max_fee_per_gas: u64,
    pub max_priority_fee_per_gas: u64,
    pub rpc_timeout: Duration,
}
