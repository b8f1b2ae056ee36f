mod ethereum_l1;
mod utils;

use std::io::Read;

use anyhow::Error;
use tracing::info;

use ethereum_l1::{config::EthereumL1Config, execution_layer::ExecutionLayer};
use utils::blob::{pack_data_into_blobs, verify_blobs_roundtrip};

#[tokio::main]
async fn main() -> Result<(), Error> {
    utils::logging::init_logging();

    info!("🚀 Starting Blobber v{}", env!("CARGO_PKG_VERSION"));

    let config = utils::config::Config::read_env_variables();

    info!("Waiting for data on stdin, end the input with Ctrl-D");
    let data = read_stdin()?;

    let blobs = pack_data_into_blobs(&data)?;
    verify_blobs_roundtrip(&blobs, &data)?;
    info!(
        "Packed {} bytes of data into {} blob(s)",
        data.len(),
        blobs.len()
    );

    let execution_layer = ExecutionLayer::new(EthereumL1Config {
        execution_rpc_url: config.execution_rpc_url,
        recipient_address: config.recipient_address,
        calldata: config.calldata,
        gas_limit: config.gas_limit,
        max_fee_per_gas: config.max_fee_per_gas,
        max_priority_fee_per_gas: config.max_priority_fee_per_gas,
        rpc_timeout: config.rpc_timeout,
    })
    .map_err(|e| anyhow::anyhow!("Failed to create ExecutionLayer: {}", e))?;

    let tx_hash = execution_layer.submit_blobs(blobs).await?;
    info!("Submitted tx with tx hash: {}", tx_hash);

    Ok(())
}

fn read_stdin() -> Result<Vec<u8>, Error> {
    let mut data = Vec::new();
    std::io::stdin().read_to_end(&mut data)?;
    Ok(data)
}
