use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use crate::models::VerificationError;

/// Encodes raw signature bytes for transport.
pub fn encode_signature(signature: &[u8]) -> String {
    BASE64.encode(signature)
}

/// Decodes a transported signature. Surrounding whitespace is tolerated since
/// signatures are often pasted from files.
pub fn decode_signature(encoded: &str) -> Result<Vec<u8>, VerificationError> {
    BASE64
        .decode(encoded.trim())
        .map_err(|e| VerificationError::Encoding(e.to_string()))
}
