use crate::core::{AppError, Result};
use std::env;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker count; actix picks one per physical core when unset
    pub workers: Option<usize>,
    /// Upper bound for JSON request bodies
    pub max_payload_bytes: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: None,
            max_payload_bytes: 16 * 1024,
        }
    }

    pub fn from_env() -> Result<Self> {
        let mut config = ServerConfig::new(
            env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_PORT"))?,
        );

        if let Ok(workers) = env::var("SERVER_WORKERS") {
            config.workers = Some(
                workers
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))?,
            );
        }

        if let Ok(limit) = env::var("MAX_PAYLOAD_BYTES") {
            config.max_payload_bytes = limit
                .parse()
                .map_err(|_| AppError::configuration("Invalid MAX_PAYLOAD_BYTES"))?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
