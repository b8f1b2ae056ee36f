use alloy::eips::eip4844::{BYTES_PER_BLOB, Blob};
use anyhow::{Error, anyhow};
use tracing::debug;

use super::constants::{
    BYTES_PER_FIELD_ELEMENT, BYTES_PER_FIELD_ELEMENT_PAYLOAD, DATA_PER_BLOB, MAX_DATA_PER_TX,
    PADDING_DELIMITER,
};

/// Pads `data` to the next multiple of `length` with ISO/IEC 7816-4 padding:
/// one delimiter byte followed by zeros. Already aligned input grows by a
/// full block, so the delimiter is present in every padded buffer.
fn pad_to_multiple(data: &[u8], length: usize) -> Vec<u8> {
    let data_len = data.len();
    let padded_len = (data_len + 1).div_ceil(length) * length;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(data);
    padded.push(PADDING_DELIMITER);
    padded.resize(padded_len, 0);
    padded
}

/// Packs exactly `DATA_PER_BLOB` bytes into a blob, 31 bytes per field
/// element. The last byte of every element stays zero so its value never
/// reaches the BLS12-381 modulus.
fn encode_blob(data: &[u8]) -> Blob {
    assert_eq!(
        data.len(),
        DATA_PER_BLOB,
        "blob payload must be exactly {DATA_PER_BLOB} bytes"
    );

    let mut blob = [0u8; BYTES_PER_BLOB];
    for (element, payload) in blob
        .chunks_exact_mut(BYTES_PER_FIELD_ELEMENT)
        .zip(data.chunks_exact(BYTES_PER_FIELD_ELEMENT_PAYLOAD))
    {
        element[..BYTES_PER_FIELD_ELEMENT_PAYLOAD].copy_from_slice(payload);
    }

    Blob::new(blob)
}

/// Packs arbitrary bytes into hex encoded blobs, ready to be sent to the
/// node in the `blobs` field of a blob transaction.
pub fn pack_data_into_blobs(data: &[u8]) -> Result<Vec<String>, Error> {
    if data.is_empty() {
        return Err(anyhow!("Cannot pack empty data"));
    }
    if data.len() > MAX_DATA_PER_TX {
        return Err(anyhow!(
            "Got {} bytes of data, but at most {} bytes fit into a single transaction",
            data.len(),
            MAX_DATA_PER_TX
        ));
    }

    let padded = pad_to_multiple(data, DATA_PER_BLOB);
    debug!(
        "Packing {} bytes of padded data into {} blob(s)",
        padded.len(),
        padded.len() / DATA_PER_BLOB
    );

    Ok(padded
        .chunks_exact(DATA_PER_BLOB)
        .map(|region| format!("0x{}", hex::encode(encode_blob(region))))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_hex_blob(blob: &str) -> Vec<u8> {
        assert!(blob.starts_with("0x"));
        hex::decode(&blob[2..]).unwrap()
    }

    #[test]
    fn test_pad_fills_up_to_the_next_multiple() {
        assert_eq!(pad_to_multiple(&[1, 2, 3], 4), vec![1, 2, 3, 0x80]);
        assert_eq!(pad_to_multiple(&[1, 2], 4), vec![1, 2, 0x80, 0]);
    }

    #[test]
    fn test_pad_aligned_input_grows_by_a_full_block() {
        assert_eq!(
            pad_to_multiple(&[1, 2, 3, 4], 4),
            vec![1, 2, 3, 4, 0x80, 0, 0, 0]
        );
    }

    #[test]
    fn test_pad_empty_input_is_delimiter_and_zeros() {
        assert_eq!(pad_to_multiple(&[], 4), vec![0x80, 0, 0, 0]);
    }

    #[test]
    fn test_pack_single_byte() {
        let blobs = pack_data_into_blobs(&[0x2e]).unwrap();
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].len(), 2 + BYTES_PER_BLOB * 2);

        let blob = decode_hex_blob(&blobs[0]);
        assert_eq!(blob.len(), BYTES_PER_BLOB);
        assert_eq!(blob[0], 0x2e);
        assert_eq!(blob[1], PADDING_DELIMITER);
        assert!(blob[2..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_pack_empty_data() {
        let err = pack_data_into_blobs(&[]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_pack_too_much_data() {
        let data = vec![0u8; MAX_DATA_PER_TX + 1];
        let err = pack_data_into_blobs(&data).unwrap_err();
        assert!(err.to_string().contains("255488"));
        assert!(err.to_string().contains("255487"));
    }

    #[test]
    fn test_pack_maximum_data_fills_two_blobs_exactly() {
        let data = vec![0x42u8; MAX_DATA_PER_TX];
        let blobs = pack_data_into_blobs(&data).unwrap();
        assert_eq!(blobs.len(), 2);

        // The closing field element carries the last 30 payload bytes, the
        // delimiter and the reserved zero byte.
        let blob = decode_hex_blob(&blobs[1]);
        let last_element = &blob[BYTES_PER_BLOB - BYTES_PER_FIELD_ELEMENT..];
        assert!(last_element[..30].iter().all(|&byte| byte == 0x42));
        assert_eq!(last_element[30], PADDING_DELIMITER);
        assert_eq!(last_element[31], 0);
    }

    #[test]
    fn test_pack_aligned_data_adds_a_padding_blob() {
        let data = vec![0x11u8; DATA_PER_BLOB];
        let blobs = pack_data_into_blobs(&data).unwrap();
        assert_eq!(blobs.len(), 2);

        let second = decode_hex_blob(&blobs[1]);
        assert_eq!(second[0], PADDING_DELIMITER);
        assert!(second[1..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_pack_one_byte_below_the_blob_boundary_stays_single_blob() {
        let data = vec![0x11u8; DATA_PER_BLOB - 1];
        let blobs = pack_data_into_blobs(&data).unwrap();
        assert_eq!(blobs.len(), 1);
    }

    #[test]
    fn test_packed_field_elements_keep_the_reserved_byte_zero() {
        let data = vec![0xffu8; DATA_PER_BLOB + 5];
        let blobs = pack_data_into_blobs(&data).unwrap();
        assert_eq!(blobs.len(), 2);

        for blob in &blobs {
            let blob = decode_hex_blob(blob);
            for element in blob.chunks_exact(BYTES_PER_FIELD_ELEMENT) {
                assert_eq!(element[BYTES_PER_FIELD_ELEMENT_PAYLOAD], 0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "blob payload must be exactly")]
    fn test_encode_blob_rejects_a_wrong_payload_size() {
        encode_blob(&[0u8; BYTES_PER_FIELD_ELEMENT_PAYLOAD]);
    }
}
