/// VeriFact runtime configuration.
///
/// Sourced from environment variables only; there is no config file. The
/// Gemini key is injected into the adapter at construction and never written
/// into code or logs.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Gemini API key
    pub gemini_api_key: Option<String>,
    /// Gemini model identifier override
    pub gemini_model: Option<String>,
    /// Directory for rolling log files; file logging is off when unset
    pub log_dir: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            gemini_api_key: None,
            gemini_model: None,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("VERIFACT_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("VERIFACT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL").ok(),
            log_dir: std::env::var("VERIFACT_LOG_DIR").ok(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
