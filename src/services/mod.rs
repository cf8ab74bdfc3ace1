mod key_provider;
pub mod signing_service;

pub use key_provider::KeyProvider;
pub use signing_service::SigningService;
