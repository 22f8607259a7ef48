//! Gateway configuration

use std::env;

/// Server and model-backend settings
///
/// Everything comes from the environment with defaults; there is no
/// configuration file.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,

    /// Listen port
    pub port: u16,

    /// Ollama endpoint for the model backend
    pub ollama_url: String,

    /// Model name
    pub model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0".to_string(),
            port: 5000,
            ollama_url: "http://localhost:11434".to_string(),
            model: "mistral".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Recognized variables: `MEDTASK_ADDR`, `MEDTASK_PORT`,
    /// `MEDTASK_OLLAMA_URL`, `MEDTASK_MODEL`. Unset or unparseable values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: env::var("MEDTASK_ADDR").unwrap_or(defaults.addr),
            port: env::var("MEDTASK_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            ollama_url: env::var("MEDTASK_OLLAMA_URL").unwrap_or(defaults.ollama_url),
            model: env::var("MEDTASK_MODEL").unwrap_or(defaults.model),
        }
    }

    /// Get the full bind address
    pub fn full_address(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.model, "mistral");
    }

    #[test]
    fn test_full_address() {
        let config = ServerConfig {
            addr: "127.0.0.1".to_string(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(config.full_address(), "127.0.0.1:8080");
    }
}
