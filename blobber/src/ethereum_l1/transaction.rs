use alloy::primitives::Address;
use serde_json::{Map, Value};

/// A blob carrying transaction in the object form `eth_signTransaction`
/// expects: quantities as 0x prefixed hex, blobs as 0x prefixed hex strings.
pub struct BlobTransaction {
    pub from: Address,
    pub to: Address,
    pub nonce: u64,
    pub calldata: String,
    pub blobs: Vec<String>,
    pub gas_limit: u64,
    pub max_fee_per_gas: u64,
    pub max_priority_fee_per_gas: u64,
}

impl BlobTransaction {
    pub fn into_rpc_params(self) -> Value {
        let mut tx_obj = Map::new();
        tx_obj.insert("from".to_string(), Value::String(self.from.to_string()));
        tx_obj.insert("to".to_string(), Value::String(self.to.to_string()));
        tx_obj.insert(
            "nonce".to_string(),
            Value::String(format!("{:#x}", self.nonce)),
        );
        tx_obj.insert("data".to_string(), Value::String(self.calldata));
        tx_obj.insert(
            "blobs".to_string(),
            Value::Array(self.blobs.into_iter().map(Value::String).collect()),
        );
        tx_obj.insert(
            "gas".to_string(),
            Value::String(format!("{:#x}", self.gas_limit)),
        );
        tx_obj.insert(
            "maxFeePerGas".to_string(),
            Value::String(format!("{:#x}", self.max_fee_per_gas)),
        );
        tx_obj.insert(
            "maxPriorityFeePerGas".to_string(),
            Value::String(format!("{:#x}", self.max_priority_fee_per_gas)),
        );
        Value::Object(tx_obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_quantities_are_hex_encoded() {
        let from = Address::from_str("0x9965507d1a55bcc2695c58ba16fb37d819b0a4dc").unwrap();
        let to = Address::from_str("0xae64071b92ae1573ac9b5f6a0dc3bb1cfd5121ef").unwrap();
        let tx = BlobTransaction {
            from,
            to,
            nonce: 26,
            calldata: "0xdeadbeef".to_string(),
            blobs: vec!["0xaa".to_string(), "0xbb".to_string()],
            gas_limit: 261064,
            max_fee_per_gas: 22000,
            max_priority_fee_per_gas: 22000,
        };

        let params = tx.into_rpc_params();
        assert_eq!(params["from"], from.to_string());
        assert_eq!(params["to"], to.to_string());
        assert_eq!(params["nonce"], "0x1a");
        assert_eq!(params["data"], "0xdeadbeef");
        assert_eq!(params["blobs"], serde_json::json!(["0xaa", "0xbb"]));
        assert_eq!(params["gas"], "0x3fbc8");
        assert_eq!(params["maxFeePerGas"], "0x55f0");
        assert_eq!(params["maxPriorityFeePerGas"], "0x55f0");
    }

    #[test]
    fn test_zero_nonce_stays_a_valid_quantity() {
        let address = Address::from_str("0x9965507d1a55bcc2695c58ba16fb37d819b0a4dc").unwrap();
        let tx = BlobTransaction {
            from: address,
            to: address,
            nonce: 0,
            calldata: "0x".to_string(),
            blobs: vec![],
            gas_limit: 21000,
            max_fee_per_gas: 1,
            max_priority_fee_per_gas: 1,
        };

        let params = tx.into_rpc_params();
        assert_eq!(params["nonce"], "0x0");
    }
}
