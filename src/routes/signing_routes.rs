use actix_web::{web, HttpRequest};
use actix_web::error::JsonPayloadError;
use actix_web::middleware::Logger;
use log::warn;
use crate::handlers;
use crate::models::ApiError;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejecting verification body: {}", err);
    ApiError::ValidationError(err.to_string()).into()
}

pub fn configure(cfg: &mut web::ServiceConfig, max_document_bytes: usize) {
    cfg.service(
        web::scope("/api")
            .wrap(Logger::default())
            .app_data(web::PayloadConfig::new(max_document_bytes))
            .app_data(
                web::JsonConfig::default()
                    .limit(max_document_bytes)
                    .error_handler(json_error_handler),
            )
            .route("/sign", web::post().to(handlers::sign_document))
            .route("/verify", web::post().to(handlers::verify_document))
            .route("/public-key", web::get().to(handlers::get_public_key))
    );
}
