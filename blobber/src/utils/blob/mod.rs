pub mod constants;
mod packer;
mod unpacker;

pub use packer::pack_data_into_blobs;
pub use unpacker::{parse_hex_blob, unpack_blobs, verify_blobs_roundtrip};
