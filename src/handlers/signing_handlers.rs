use actix_web::{web, HttpResponse, Responder};
use actix_web::http::header::ContentType;
use log::{info, warn, error};
use crate::models::{ApiError, DocumentVerificationRequest, VerificationOutcome};
use crate::services::SigningService;

/// Signs the raw request body and answers with the base64 signature as text.
pub async fn sign_document(
    signing_service: web::Data<SigningService>,
    document_content: String,
) -> Result<HttpResponse, ApiError> {
    info!("Signing document ({} bytes)", document_content.len());

    match signing_service.sign_document(&document_content) {
        Ok(signature) => Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(signature)),
        Err(e) => {
            error!("Failed to sign document: {}", e);
            Err(e.into())
        }
    }
}

/// Answers `true`/`false` for well-formed requests; malformed signatures are
/// reported as a 400 instead of being folded into `false`.
pub async fn verify_document(
    signing_service: web::Data<SigningService>,
    request: web::Json<DocumentVerificationRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Verifying document ({} bytes)", request.document_content.len());

    match signing_service.verify_document(&request) {
        VerificationOutcome::Valid => {
            info!("Signature is valid");
            Ok(HttpResponse::Ok().json(true))
        }
        VerificationOutcome::Invalid => {
            info!("Signature does not match document");
            Ok(HttpResponse::Ok().json(false))
        }
        VerificationOutcome::MalformedInput(reason) => {
            warn!("Malformed verification request: {}", reason);
            Err(ApiError::MalformedInput(reason))
        }
    }
}

pub async fn get_public_key(signing_service: web::Data<SigningService>) -> impl Responder {
    HttpResponse::Ok().json(signing_service.public_key_info())
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
