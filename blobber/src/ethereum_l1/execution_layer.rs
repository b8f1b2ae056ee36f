use std::str::FromStr;

use alloy::primitives::{Address, B256};
use anyhow::{Error, anyhow};
use serde_json::Value;
use tracing::{debug, info};

use super::{config::EthereumL1Config, transaction::BlobTransaction};
use crate::utils::rpc_client::JSONRPCClient;

pub struct ExecutionLayer {
    client: JSONRPCClient,
    recipient: Address,
    calldata: String,
    gas_limit: u64,
    max_fee_per_gas: u64,
    max_priority_fee_per_gas: u64,
}

impl ExecutionLayer {
    pub fn new(config: EthereumL1Config) -> Result<Self, Error> {
        let client =
            JSONRPCClient::new_with_timeout(&config.execution_rpc_url, config.rpc_timeout)?;
        let recipient = Address::from_str(&config.recipient_address).map_err(|e| {
            anyhow!(
                "Invalid recipient address '{}': {e}",
                config.recipient_address
            )
        })?;

        Ok(Self {
            client,
            recipient,
            calldata: config.calldata,
            gas_limit: config.gas_limit,
            max_fee_per_gas: config.max_fee_per_gas,
            max_priority_fee_per_gas: config.max_priority_fee_per_gas,
        })
    }

    /// Submits the blobs as one signed transaction. Every step is a single
    /// JSON-RPC exchange and each result feeds the next step explicitly.
    pub async fn submit_blobs(&self, blobs: Vec<String>) -> Result<B256, Error> {
        let sender = self.get_default_account().await?;
        info!("Going with address: {}", sender);

        self.unlock_account(sender).await?;

        let nonce = self.get_nonce(sender).await?;
        info!("Going with nonce: {}", nonce);

        let tx = BlobTransaction {
            from: sender,
            to: self.recipient,
            nonce,
            calldata: self.calldata.clone(),
            blobs,
            gas_limit: self.gas_limit,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
        };
        let raw_tx = self.sign_transaction(tx).await?;
        debug!("Got {} hex chars of signed transaction", raw_tx.len());

        self.send_raw_transaction(&raw_tx).await
    }

    /// The first account managed by the node is the sender.
    async fn get_default_account(&self) -> Result<Address, Error> {
        let response = self.client.call_method("eth_accounts", vec![]).await?;
        let account = response
            .as_array()
            .and_then(|accounts| accounts.first())
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Node manages no accounts, cannot pick a sender"))?;
        Address::from_str(account)
            .map_err(|e| anyhow!("Node returned an invalid account address '{account}': {e}"))
    }

    /// The node must run with --allow-insecure-unlock for this to succeed.
    async fn unlock_account(&self, account: Address) -> Result<(), Error> {
        let response = self
            .client
            .call_method(
                "personal_unlockAccount",
                vec![
                    Value::String(account.to_string()),
                    Value::String(String::new()),
                ],
            )
            .await?;
        if response.as_bool() != Some(true) {
            return Err(anyhow!(
                "Failed to unlock account {}: {}",
                account,
                response
            ));
        }
        Ok(())
    }

    async fn get_nonce(&self, account: Address) -> Result<u64, Error> {
        let response = self
            .client
            .call_method(
                "eth_getTransactionCount",
                vec![
                    Value::String(account.to_string()),
                    Value::String("latest".to_string()),
                ],
            )
            .await?;
        let nonce = response
            .as_str()
            .ok_or_else(|| anyhow!("Unexpected nonce response: {}", response))?;
        u64::from_str_radix(nonce.strip_prefix("0x").unwrap_or(nonce), 16)
            .map_err(|e| anyhow!("Failed to parse nonce '{nonce}': {e}"))
    }

    /// The node signs, the raw RLP payload comes back in the `raw` field.
    async fn sign_transaction(&self, tx: BlobTransaction) -> Result<String, Error> {
        let response = self
            .client
            .call_method("eth_signTransaction", vec![tx.into_rpc_params()])
            .await?;
        let raw_tx = response
            .get("raw")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Signing response carries no raw transaction field"))?;
        Ok(raw_tx.to_string())
    }

    async fn send_raw_transaction(&self, raw_tx: &str) -> Result<B256, Error> {
        let response = self
            .client
            .call_method(
                "eth_sendRawTransaction",
                vec![Value::String(raw_tx.to_string())],
            )
            .await?;
        let hash = response
            .as_str()
            .ok_or_else(|| anyhow!("Unexpected broadcast response: {}", response))?;
        B256::from_str(hash)
            .map_err(|e| anyhow!("Failed to parse transaction hash '{hash}': {e}"))
    }
}
