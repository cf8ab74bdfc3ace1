use std::fmt;
use std::str::FromStr;
use p256::ecdsa as p256_ecdsa;
use serde::Serialize;
use crate::models::KeyGenerationError;

/// Signature schemes the service can be configured with. The names are part
/// of the public contract and must not change once signatures are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignatureAlgorithm {
    #[serde(rename = "ed25519")]
    Ed25519,
    #[serde(rename = "ecdsa-p256-sha256")]
    EcdsaP256Sha256,
}

impl SignatureAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Ed25519 => "ed25519",
            SignatureAlgorithm::EcdsaP256Sha256 => "ecdsa-p256-sha256",
        }
    }

    pub fn key_bits(&self) -> u32 {
        match self {
            SignatureAlgorithm::Ed25519 => 256,
            SignatureAlgorithm::EcdsaP256Sha256 => 256,
        }
    }

    /// Length of a raw signature in bytes.
    pub fn signature_len(&self) -> usize {
        64
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = KeyGenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ed25519" => Ok(SignatureAlgorithm::Ed25519),
            "ecdsa-p256-sha256" | "es256" => Ok(SignatureAlgorithm::EcdsaP256Sha256),
            _ => Err(KeyGenerationError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

#[derive(Clone)]
pub enum PublicKey {
    Ed25519(ed25519_dalek::VerifyingKey),
    EcdsaP256(p256_ecdsa::VerifyingKey),
}

impl PublicKey {
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            PublicKey::Ed25519(_) => SignatureAlgorithm::Ed25519,
            PublicKey::EcdsaP256(_) => SignatureAlgorithm::EcdsaP256Sha256,
        }
    }

    /// Raw key bytes: 32 bytes for Ed25519, a compressed SEC1 point for P-256.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(key) => key.to_bytes().to_vec(),
            PublicKey::EcdsaP256(key) => key.to_encoded_point(true).as_bytes().to_vec(),
        }
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, {})", self.algorithm(), hex::encode(self.to_bytes()))
    }
}

pub enum PrivateKey {
    Ed25519(ed25519_dalek::SigningKey),
    EcdsaP256(p256_ecdsa::SigningKey),
}

impl PrivateKey {
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            PrivateKey::Ed25519(_) => SignatureAlgorithm::Ed25519,
            PrivateKey::EcdsaP256(_) => SignatureAlgorithm::EcdsaP256Sha256,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Ed25519(key) => PublicKey::Ed25519(key.verifying_key()),
            PrivateKey::EcdsaP256(key) => PublicKey::EcdsaP256(p256_ecdsa::VerifyingKey::from(key)),
        }
    }
}

// Never print secret material.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, <redacted>)", self.algorithm())
    }
}

/// Public and private halves produced by a single generation call.
#[derive(Debug)]
pub struct KeyPair {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl KeyPair {
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        Self {
            public_key: private_key.public_key(),
            private_key,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.private_key.algorithm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("ed25519".parse::<SignatureAlgorithm>().unwrap(), SignatureAlgorithm::Ed25519);
        assert_eq!(" Ed25519 ".parse::<SignatureAlgorithm>().unwrap(), SignatureAlgorithm::Ed25519);
        assert_eq!(
            "ECDSA-P256-SHA256".parse::<SignatureAlgorithm>().unwrap(),
            SignatureAlgorithm::EcdsaP256Sha256
        );
        assert_eq!("es256".parse::<SignatureAlgorithm>().unwrap(), SignatureAlgorithm::EcdsaP256Sha256);
    }

    #[test]
    fn test_parse_unknown_algorithm() {
        let err = "SHA256withRSA".parse::<SignatureAlgorithm>().unwrap_err();
        assert!(matches!(err, KeyGenerationError::UnsupportedAlgorithm(ref name) if name == "SHA256withRSA"));
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for algorithm in [SignatureAlgorithm::Ed25519, SignatureAlgorithm::EcdsaP256Sha256] {
            let json = serde_json::to_value(algorithm).unwrap();
            assert_eq!(json, algorithm.to_string());
        }
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let key = PrivateKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&[7u8; 32]));
        let printed = format!("{:?}", key);
        assert_eq!(printed, "PrivateKey(ed25519, <redacted>)");
    }
}
