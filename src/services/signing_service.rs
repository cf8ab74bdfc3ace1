use log::{debug, warn};
use sha2::{Digest, Sha256};
use crate::models::{DocumentVerificationRequest, KeyPair, PublicKeyInfo, SigningError, VerificationOutcome};
use crate::utils::{crypto, decode_signature, encode_signature};

/// Signs and verifies documents with the process key pair.
///
/// Handlers share one instance through `web::Data`, so the key pair is read
/// concurrently and never mutated.
pub struct SigningService {
    key_pair: KeyPair,
}

impl SigningService {
    pub fn new(key_pair: KeyPair) -> Self {
        Self { key_pair }
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Signs the UTF-8 bytes of `content` and returns the base64 signature.
    pub fn sign_document(&self, content: &str) -> Result<String, SigningError> {
        let signature = crypto::sign(content.as_bytes(), self.key_pair.private_key())?;
        debug!("Signed {} byte document", content.len());
        Ok(encode_signature(&signature))
    }

    pub fn verify_document(&self, request: &DocumentVerificationRequest) -> VerificationOutcome {
        let signature = match decode_signature(&request.signature) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Rejecting verification request: {}", e);
                return VerificationOutcome::MalformedInput(e.to_string());
            }
        };

        match crypto::verify(
            request.document_content.as_bytes(),
            &signature,
            self.key_pair.public_key(),
        ) {
            Ok(true) => VerificationOutcome::Valid,
            Ok(false) => VerificationOutcome::Invalid,
            Err(e) => {
                warn!("Rejecting verification request: {}", e);
                VerificationOutcome::MalformedInput(e.to_string())
            }
        }
    }

    pub fn public_key_info(&self) -> PublicKeyInfo {
        let public_key = self.key_pair.public_key();
        let bytes = public_key.to_bytes();
        PublicKeyInfo {
            algorithm: public_key.algorithm(),
            public_key: encode_signature(&bytes),
            fingerprint: fingerprint(&bytes),
        }
    }
}

/// Hex SHA-256 of the raw public key bytes.
pub fn fingerprint(public_key: &[u8]) -> String {
    hex::encode(Sha256::digest(public_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SigningConfig;
    use crate::services::KeyProvider;

    fn service(algorithm: &str) -> SigningService {
        let provider = KeyProvider::new(SigningConfig {
            algorithm: algorithm.to_string(),
            key_bits: None,
        });
        SigningService::new(provider.generate().unwrap())
    }

    fn request(content: &str, signature: &str) -> DocumentVerificationRequest {
        DocumentVerificationRequest {
            document_content: content.to_string(),
            signature: signature.to_string(),
        }
    }

    /// Replaces the last base64 data character with a different one.
    fn alter_last_char(signature: &str) -> String {
        let trimmed = signature.trim_end_matches('=');
        let padding = &signature[trimmed.len()..];
        let mut chars: Vec<char> = trimmed.chars().collect();
        let last = chars.pop().unwrap();
        chars.push(if last == 'A' { 'B' } else { 'A' });
        chars.into_iter().collect::<String>() + padding
    }

    #[test]
    fn test_hello_world_scenario() {
        for algorithm in ["ed25519", "ecdsa-p256-sha256"] {
            let service = service(algorithm);
            let signature = service.sign_document("hello world").unwrap();

            assert_eq!(service.verify_document(&request("hello world", &signature)), VerificationOutcome::Valid);
            assert_eq!(service.verify_document(&request("hello world!", &signature)), VerificationOutcome::Invalid);

            let altered = alter_last_char(&signature);
            assert_ne!(altered, signature);
            assert_ne!(service.verify_document(&request("hello world", &altered)), VerificationOutcome::Valid);
        }
    }

    #[test]
    fn test_undecodable_signature_is_malformed() {
        let service = service("ed25519");
        let outcome = service.verify_document(&request("hello world", "%%%not-base64%%%"));
        assert!(matches!(outcome, VerificationOutcome::MalformedInput(_)));
    }

    #[test]
    fn test_truncated_signature_is_malformed() {
        let service = service("ed25519");
        let outcome = service.verify_document(&request("hello world", "AAAA"));
        assert!(matches!(outcome, VerificationOutcome::MalformedInput(ref reason) if reason.contains("expected 64 bytes")));
    }

    #[test]
    fn test_signature_from_another_process_is_invalid() {
        let first = service("ed25519");
        let second = service("ed25519");
        let signature = first.sign_document("report.pdf contents").unwrap();
        assert_eq!(
            second.verify_document(&request("report.pdf contents", &signature)),
            VerificationOutcome::Invalid
        );
    }

    #[test]
    fn test_unicode_content_round_trips() {
        let service = service("ed25519");
        let content = "Grüße, 世界 ✅";
        let signature = service.sign_document(content).unwrap();
        assert_eq!(service.verify_document(&request(content, &signature)), VerificationOutcome::Valid);
    }

    #[test]
    fn test_public_key_info() {
        let service = service("ed25519");
        let info = service.public_key_info();
        assert_eq!(info.algorithm.as_str(), "ed25519");
        assert_eq!(decode_signature(&info.public_key).unwrap(), service.key_pair().public_key().to_bytes());
        assert_eq!(info.fingerprint.len(), 64);
        assert_eq!(info.fingerprint, fingerprint(&service.key_pair().public_key().to_bytes()));
    }
}
