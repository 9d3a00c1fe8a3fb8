//! Server settings.
//!
//! Layered from built-in defaults, an optional `atelier.toml` next to the
//! binary, and `ATELIER__*` environment variables (`.env` is loaded first).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tokio::sync::OnceCell;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogSettings {
    /// JSON file the in-memory catalog is seeded from.
    pub seed_path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed_path: "catalog.json".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SessionSettings {
    /// User id assumed when the session carries none. Development only.
    #[serde(default)]
    pub default_user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Settings {
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("catalog.seed_path", "catalog.json")?
            .add_source(
                File::with_name("atelier.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("ATELIER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

static SETTINGS: OnceCell<Settings> = OnceCell::const_new();

/// Get or load the process-wide settings.
pub async fn get_settings() -> Result<&'static Settings, ConfigError> {
    SETTINGS.get_or_try_init(|| async { Settings::new() }).await
}
