pub mod crypto;
pub mod encoding;

pub use encoding::{decode_signature, encode_signature};
