use alloy::eips::eip4844::{BYTES_PER_BLOB, Blob};
use anyhow::{Error, anyhow};

use super::constants::{
    BYTES_PER_FIELD_ELEMENT, BYTES_PER_FIELD_ELEMENT_PAYLOAD, DATA_PER_BLOB, PADDING_DELIMITER,
};

/// Parses one 0x prefixed hex blob, as carried over JSON-RPC.
pub fn parse_hex_blob(blob: &str) -> Result<Blob, Error> {
    let bytes = hex::decode(blob.strip_prefix("0x").unwrap_or(blob))?;
    if bytes.len() != BYTES_PER_BLOB {
        return Err(anyhow!(
            "Invalid blob size: expected {} bytes, got {}",
            BYTES_PER_BLOB,
            bytes.len()
        ));
    }
    Ok(Blob::from_slice(&bytes))
}

/// Collects the payload bytes of every field element. An element with data
/// in its reserved byte was not produced by this packing scheme.
fn decode_blob_payload(blob: &Blob) -> Result<Vec<u8>, Error> {
    let mut payload = Vec::with_capacity(DATA_PER_BLOB);
    for (position, element) in blob.chunks_exact(BYTES_PER_FIELD_ELEMENT).enumerate() {
        if element[BYTES_PER_FIELD_ELEMENT_PAYLOAD] != 0 {
            return Err(anyhow!(
                "Non-zero reserved byte in field element {}",
                position
            ));
        }
        payload.extend_from_slice(&element[..BYTES_PER_FIELD_ELEMENT_PAYLOAD]);
    }
    Ok(payload)
}

/// Reassembles the original data: strips the reserved byte of every field
/// element, then removes the padding from the tail.
pub fn unpack_blobs(blobs: &[Blob]) -> Result<Vec<u8>, Error> {
    if blobs.is_empty() {
        return Err(anyhow!("Got no blobs to unpack"));
    }

    let mut padded = Vec::with_capacity(blobs.len() * DATA_PER_BLOB);
    for blob in blobs {
        padded.extend(decode_blob_payload(blob)?);
    }

    // Everything after the delimiter is zero, so the last non-zero byte must
    // be the delimiter itself.
    let delimiter = padded
        .iter()
        .rposition(|&byte| byte != 0)
        .ok_or_else(|| anyhow!("No padding delimiter found"))?;
    if padded[delimiter] != PADDING_DELIMITER {
        return Err(anyhow!(
            "Invalid padding: expected the {:#04x} delimiter, got {:#04x}",
            PADDING_DELIMITER,
            padded[delimiter]
        ));
    }

    padded.truncate(delimiter);
    Ok(padded)
}

/// Checks that `blobs` decode back to exactly `data`. Runs before the
/// transaction is signed, a blob that does not round-trip would burn gas
/// carrying garbage.
pub fn verify_blobs_roundtrip(blobs: &[String], data: &[u8]) -> Result<(), Error> {
    let blobs = blobs
        .iter()
        .map(|blob| parse_hex_blob(blob))
        .collect::<Result<Vec<_>, _>>()?;
    let unpacked = unpack_blobs(&blobs)?;
    if unpacked != data {
        return Err(anyhow!("Blobs do not round-trip back to the input data"));
    }
    Ok(())
}
