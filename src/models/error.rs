use serde::Serialize;
use actix_web::{HttpResponse, ResponseError};
use actix_web::http::header::ContentType;
use std::fmt;

/// Raised while producing the process key pair. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum KeyGenerationError {
    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("unsupported key size {bits} for {algorithm} (expected {expected})")]
    UnsupportedKeySize {
        algorithm: String,
        bits: u32,
        expected: u32,
    },
    #[error("secure random source failed: {0}")]
    Entropy(String),
    #[error("generated key material was rejected: {0}")]
    InvalidKeyMaterial(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("signature primitive rejected the input: {0}")]
    Primitive(String),
}

/// Structural verification failures. A signature that simply does not match
/// is not an error.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("signature is not valid base64: {0}")]
    Encoding(String),
    #[error("malformed {algorithm} signature: {reason}")]
    MalformedSignature {
        algorithm: &'static str,
        reason: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    MalformedInput(String),
    SigningError(SigningError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            ApiError::SigningError(e) => write!(f, "Error signing document: {}", e),
        }
    }
}

impl From<SigningError> for ApiError {
    fn from(err: SigningError) -> Self {
        ApiError::SigningError(err)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ValidationError(_) => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: self.to_string(),
                    details: None,
                })
            }
            ApiError::MalformedInput(reason) => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    code: "MALFORMED_INPUT".to_string(),
                    message: "Request could not be verified".to_string(),
                    details: Some(reason.clone()),
                })
            }
            // The sign endpoint speaks plain text in both directions.
            ApiError::SigningError(_) => {
                HttpResponse::InternalServerError()
                    .content_type(ContentType::plaintext())
                    .body(self.to_string())
            }
        }
    }
}
