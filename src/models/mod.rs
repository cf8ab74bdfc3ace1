pub mod error;
pub mod key;
pub mod signature;

pub use error::{ApiError, KeyGenerationError, SigningError, VerificationError};
pub use key::{KeyPair, PrivateKey, PublicKey, SignatureAlgorithm};
pub use signature::{DocumentVerificationRequest, PublicKeyInfo, VerificationOutcome};
