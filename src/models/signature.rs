use serde::{Deserialize, Serialize};
use crate::models::SignatureAlgorithm;

/// Body of `POST /api/verify`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVerificationRequest {
    pub document_content: String,
    pub signature: String,
}

/// Result of checking a document against a signature. A mismatch is a
/// normal answer; only `MalformedInput` means the request itself was bad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Valid,
    Invalid,
    MalformedInput(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyInfo {
    pub algorithm: SignatureAlgorithm,
    pub public_key: String,
    pub fingerprint: String,
}
