//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default host address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port number (the original service's Flask default).
pub const DEFAULT_PORT: u16 = 5000;

/// Default directory holding the classifier artifacts.
pub const DEFAULT_MODEL_DIR: &str = "models";

const IRRIGATION_MODEL_FILE: &str = "irrigation.json";
const FERTILISER_MODEL_FILE: &str = "fertiliser.json";

/// Server configuration, built from CLI arguments.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory containing `irrigation.json` and `fertiliser.json`.
    pub model_dir: PathBuf,
    /// Custom ruleset file; `None` uses the built-in NPK bands.
    pub rules_path: Option<PathBuf>,
    /// Include nutrient statuses and recommendations in fertiliser responses.
    pub recommendations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            rules_path: None,
            recommendations: true,
        }
    }
}

impl ServerConfig {
    pub fn irrigation_model_path(&self) -> PathBuf {
        self.model_dir.join(IRRIGATION_MODEL_FILE)
    }

    pub fn fertiliser_model_path(&self) -> PathBuf {
        self.model_dir.join(FERTILISER_MODEL_FILE)
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be zero".to_string());
        }
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }
        Ok(())
    }
}
