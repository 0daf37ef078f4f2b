//! Runtime configuration.
//!
//! Defaults are compiled in from [`DEFAULT_CONFIG`]. At start-up [`init`]
//! looks for `/config.toml` next to `index.html` and, when it parses,
//! uses it instead. Sections missing from that file keep their defaults.

use contracts::shared::team_routing::TeamCatalog;
use gloo_net::http::Request;
use once_cell::sync::OnceCell;
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5000/api"

[dashboard]
trend_days = 30

[team_routing]
default_team = "Maintenance Team"

[team_routing.equipment]
"Laptop 01" = "IT Support"
"Laptop 02" = "IT Support"
"Desktop PC" = "IT Support"
"Printer A" = "IT Support"
"Server Rack" = "Network Team"
"Generator A" = "Maintenance Team"
"Air Conditioner Unit" = "Facilities"
"CCTV Camera" = "Security Team"
"#;

const REMOTE_CONFIG_PATH: &str = "/config.toml";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub team_routing: TeamCatalog,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Window of the request trend chart
    pub trend_days: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { trend_days: 30 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            team_routing: TeamCatalog::builtin(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(text)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// The compiled-in document.
    pub fn embedded() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_default()
    }
}

/// Active configuration. Falls back to the embedded one if [`init`] never ran.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::embedded)
}

/// Load `/config.toml` if it is served, otherwise keep the defaults.
pub async fn init() {
    let loaded = match fetch_remote().await {
        Ok(Some(config)) => {
            log::info!("configuration loaded from {}", REMOTE_CONFIG_PATH);
            config
        }
        Ok(None) => AppConfig::embedded(),
        Err(e) => {
            log::warn!("{}; using built-in defaults", e);
            AppConfig::embedded()
        }
    };
    if CONFIG.set(loaded).is_err() {
        log::debug!("configuration already initialised");
    }
}

async fn fetch_remote() -> Result<Option<AppConfig>, ConfigError> {
    let response = match Request::get(REMOTE_CONFIG_PATH).send().await {
        Ok(r) if r.ok() => r,
        _ => return Ok(None),
    };
    match response.text().await {
        Ok(text) => AppConfig::parse(&text).map(Some),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::team_routing::EquipmentChoice;

    #[test]
    fn test_embedded_matches_defaults() {
        assert_eq!(AppConfig::parse(DEFAULT_CONFIG).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::parse(
            r#"
            [api]
            base_url = "https://gear.example.com/api/"

            [team_routing]
            default_team = "Plant Crew"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://gear.example.com/api");
        assert_eq!(config.dashboard.trend_days, 30);
        assert!(config.team_routing.equipment.is_empty());
        assert_eq!(
            config
                .team_routing
                .resolve(&EquipmentChoice::Known("Server Rack".into())),
            "Plant Crew"
        );
    }

    #[test]
    fn test_invalid_document() {
        assert!(AppConfig::parse("[api\nbase_url = 1").is_err());
    }
}
