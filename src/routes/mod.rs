mod signing_routes;

pub use signing_routes::configure as configure_signing_routes;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig, max_document_bytes: usize) {
    configure_signing_routes(cfg, max_document_bytes);
    cfg.route("/health", actix_web::web::get().to(crate::handlers::health_check));
}
