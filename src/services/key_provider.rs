use log::{info, debug};
use rand::{rngs::OsRng, RngCore};
use crate::config::SigningConfig;
use crate::models::{KeyGenerationError, KeyPair, PrivateKey, SignatureAlgorithm};

/// Produces the single key pair the process signs with.
pub struct KeyProvider {
    config: SigningConfig,
}

impl KeyProvider {
    pub fn new(config: SigningConfig) -> Self {
        Self { config }
    }

    /// Resolves the configured algorithm and checks the requested key size
    /// against it.
    pub fn algorithm(&self) -> Result<SignatureAlgorithm, KeyGenerationError> {
        let algorithm: SignatureAlgorithm = self.config.algorithm.parse()?;
        if let Some(bits) = self.config.key_bits {
            if bits != algorithm.key_bits() {
                return Err(KeyGenerationError::UnsupportedKeySize {
                    algorithm: algorithm.to_string(),
                    bits,
                    expected: algorithm.key_bits(),
                });
            }
        }
        Ok(algorithm)
    }

    pub fn generate(&self) -> Result<KeyPair, KeyGenerationError> {
        let algorithm = self.algorithm()?;
        debug!("Generating {} key pair", algorithm);

        let mut seed = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| KeyGenerationError::Entropy(e.to_string()))?;

        let private_key = match algorithm {
            SignatureAlgorithm::Ed25519 => {
                PrivateKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&seed))
            }
            SignatureAlgorithm::EcdsaP256Sha256 => {
                let key = p256::ecdsa::SigningKey::from_slice(&seed)
                    .map_err(|e| KeyGenerationError::InvalidKeyMaterial(e.to_string()))?;
                PrivateKey::EcdsaP256(key)
            }
        };
        seed.fill(0);

        let key_pair = KeyPair::from_private_key(private_key);
        info!("Generated {} key pair", key_pair.algorithm());
        Ok(key_pair)
    }
}
