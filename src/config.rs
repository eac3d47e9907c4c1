use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Main configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the indicators API; also the "all indicators" endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_base_url() -> String {
    "https://mindicador.cl/api".to_string()
}
fn default_user_agent() -> String {
    crate::net::client::USER_AGENT.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

// ---------------------------------------------------------------------------
// Config loading and env overrides
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a TOML file, then apply environment variable
    /// overrides. Any setting prefixed with `INDICATORS_` takes precedence
    /// over the file value.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Read the TOML file only; a missing file yields defaults.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::warn!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Endpoints derived from `api.base_url`.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api.base_url)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply `INDICATORS_*` overrides read through `lookup`.
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        macro_rules! env_str {
            ($env:expr, $field:expr) => {
                if let Some(val) = lookup($env) {
                    $field = val;
                }
            };
        }
        macro_rules! env_bool {
            ($env:expr, $field:expr) => {
                if let Some(val) = lookup($env) {
                    $field = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
                }
            };
        }

        // -- Api --
        env_str!("INDICATORS_API_BASE_URL", self.api.base_url);
        env_str!("INDICATORS_API_USER_AGENT", self.api.user_agent);

        // -- Logging --
        env_str!("INDICATORS_LOG_LEVEL", self.logging.level);
        env_bool!("INDICATORS_LOG_JSON", self.logging.json);
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// Indicator code of the Unidad de Fomento sub-resource.
pub const UF_CODE: &str = "uf";

/// The two fixed URLs the startup calls hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// All indicators.
    pub all: String,
    /// The UF series.
    pub uf: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            all: base.to_string(),
            uf: format!("{base}/{UF_CODE}"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(&default_base_url())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
