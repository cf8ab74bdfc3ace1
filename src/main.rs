use actix_web::{App, HttpServer, web};
use actix_cors::Cors;
use log::{info, error};
use dotenv::dotenv;
mod models;
mod handlers;
mod routes;
mod services;
mod utils;
mod config;
use config::AppConfig;
use services::{KeyProvider, SigningService};

/// Browsers call the API from any origin.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec!["content-type", "content-length", "accept"])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    let config = AppConfig::load()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log_level.clone()));
    config.log_summary();

    // The key pair lives for the whole process; without it nothing can be served.
    let key_pair = match KeyProvider::new(config.signing.clone()).generate() {
        Ok(key_pair) => key_pair,
        Err(e) => {
            error!("Failed to generate signing key pair: {}", e);
            return Err(e.into());
        }
    };

    let signing_service = web::Data::new(SigningService::new(key_pair));
    let key_info = signing_service.public_key_info();
    info!(
        "Signing with {} key, fingerprint {}",
        signing_service.key_pair().algorithm(),
        key_info.fingerprint
    );

    let host = config.host.clone();
    let port = config.port;
    let max_document_bytes = config.max_document_bytes;

    info!("Starting server at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(signing_service.clone())
            .configure(|cfg| routes::configure(cfg, max_document_bytes))
    })
    .bind(format!("{host}:{port}"))?
    .run()
    .await?;

    info!("Server shutting down");
    Ok(())
}
