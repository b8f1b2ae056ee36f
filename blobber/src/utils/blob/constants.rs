pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096; // EIP-4844 blob parameter
pub const BYTES_PER_FIELD_ELEMENT: usize = 32; // size of one field element
pub const BYTES_PER_FIELD_ELEMENT_PAYLOAD: usize = 31; // usable bytes, the top byte stays zero to fit the BLS modulus
pub const DATA_PER_BLOB: usize = BYTES_PER_FIELD_ELEMENT_PAYLOAD * FIELD_ELEMENTS_PER_BLOB; // 127744 payload bytes per blob
pub const MAX_BLOBS_PER_TX: usize = 2; // blobs carried by a single transaction
pub const MAX_DATA_PER_TX: usize = DATA_PER_BLOB * MAX_BLOBS_PER_TX - 1; // one byte is reserved for the padding delimiter
pub const PADDING_DELIMITER: u8 = 0x80; // ISO/IEC 7816-4 padding marker
