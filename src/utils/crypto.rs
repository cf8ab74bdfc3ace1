use ed25519_dalek::{Signer as _, Verifier as _};
use p256::ecdsa::signature::{Signer as _, Verifier as _};
use crate::models::{PrivateKey, PublicKey, SigningError, VerificationError};

/// Signs `message` with the scheme the key belongs to and returns the raw
/// signature bytes.
pub fn sign(message: &[u8], private_key: &PrivateKey) -> Result<Vec<u8>, SigningError> {
    match private_key {
        PrivateKey::Ed25519(key) => {
            let signature: ed25519_dalek::Signature = key
                .try_sign(message)
                .map_err(|e| SigningError::Primitive(e.to_string()))?;
            Ok(signature.to_bytes().to_vec())
        }
        PrivateKey::EcdsaP256(key) => {
            let signature: p256::ecdsa::Signature = key
                .try_sign(message)
                .map_err(|e| SigningError::Primitive(e.to_string()))?;
            Ok(signature.to_bytes().to_vec())
        }
    }
}

/// Checks `signature` over `message`.
///
/// Returns `Ok(false)` for any well-formed signature that does not match,
/// and `Err` only when the signature bytes cannot be a signature of this
/// scheme at all.
pub fn verify(message: &[u8], signature: &[u8], public_key: &PublicKey) -> Result<bool, VerificationError> {
    let algorithm = public_key.algorithm();
    if signature.len() != algorithm.signature_len() {
        return Err(VerificationError::MalformedSignature {
            algorithm: algorithm.as_str(),
            reason: format!(
                "expected {} bytes, got {}",
                algorithm.signature_len(),
                signature.len()
            ),
        });
    }

    match public_key {
        PublicKey::Ed25519(key) => {
            let signature = ed25519_dalek::Signature::from_slice(signature).map_err(|e| {
                VerificationError::MalformedSignature {
                    algorithm: algorithm.as_str(),
                    reason: e.to_string(),
                }
            })?;
            Ok(key.verify(message, &signature).is_ok())
        }
        PublicKey::EcdsaP256(key) => {
            // r or s outside the scalar field is an encoding problem, not a mismatch
            let signature = p256::ecdsa::Signature::from_slice(signature).map_err(|e| {
                VerificationError::MalformedSignature {
                    algorithm: algorithm.as_str(),
                    reason: e.to_string(),
                }
            })?;
            Ok(key.verify(message, &signature).is_ok())
        }
    }
}
