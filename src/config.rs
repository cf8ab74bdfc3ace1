use std::env;
use log::{info, debug};

const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Which key pair the process generates at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    pub algorithm: String,
    pub key_bits: Option<u32>,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            algorithm: "ed25519".to_string(),
            key_bits: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub max_document_bytes: usize,
    pub signing: SigningConfig,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv()` first to pick up `.env`.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| format!("SERVER_PORT must be a number: {}", e))?;
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let max_document_bytes = match lookup("MAX_DOCUMENT_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|e| format!("MAX_DOCUMENT_BYTES must be a number: {}", e))?,
            None => DEFAULT_MAX_DOCUMENT_BYTES,
        };

        let algorithm = lookup("SIGNING_ALGORITHM").unwrap_or_else(|| SigningConfig::default().algorithm);
        let key_bits = match lookup("SIGNING_KEY_BITS") {
            Some(value) => {
                debug!("Using SIGNING_KEY_BITS={} from environment", value);
                Some(
                    value
                        .parse::<u32>()
                        .map_err(|e| format!("SIGNING_KEY_BITS must be a number: {}", e))?,
                )
            }
            None => None,
        };

        Ok(AppConfig {
            host,
            port,
            log_level,
            max_document_bytes,
            signing: SigningConfig { algorithm, key_bits },
        })
    }

    pub fn log_summary(&self) {
        info!(
            "Configuration: bind={}:{}, algorithm={}, key_bits={}, max_document_bytes={}",
            self.host,
            self.port,
            self.signing.algorithm,
            self.signing.key_bits.map(|b| b.to_string()).unwrap_or_else(|| "default".to_string()),
            self.max_document_bytes
        );
    }
}
