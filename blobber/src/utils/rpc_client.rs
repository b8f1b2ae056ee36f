use anyhow::Error;
use jsonrpsee::{
    core::client::{ClientT, Error as JsonRpcError},
    http_client::{HttpClient, HttpClientBuilder},
};
use serde_json::Value;
use std::time::Duration;

pub struct JSONRPCClient {
    client: HttpClient,
}

impl JSONRPCClient {
    pub fn new_with_timeout(url: &str, timeout: Duration) -> Result<Self, Error> {
        if url.is_empty() {
            return Err(anyhow::anyhow!("URL is empty"));
        }

        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {e}"))?;

        Ok(Self { client })
    }

    pub async fn call_method(&self, method: &str, params: Vec<Value>) -> Result<Value, Error> {
        match self.client.request(method, params).await {
            Ok(result) => Ok(result),
            Err(JsonRpcError::Call(err)) => Err(anyhow::anyhow!(
                "RPC method '{}' returned error {}: {}",
                method,
                err.code(),
                err.message()
            )),
            Err(JsonRpcError::Transport(err)) => {
                Err(anyhow::anyhow!("Http transport error: {err}."))
            }
            Err(err) => Err(Error::from(err)),
        }
    }
}
