use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "https://www.kogenie.com",
    "https://kogenie.com",
];

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub scraper: ScraperConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub csv_path: String,
}

/// Loads `Settings.toml` from the working directory, overlaid with `APP_*`
/// variables and finally the bare `PORT` variable.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from("Settings.toml")
}

pub fn load_config_from(settings_path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let settings_path = settings_path.as_ref().to_string_lossy().into_owned();

    let settings = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .set_default(
            "cors.allowed_origins",
            DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect::<Vec<_>>(),
        )?
        .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
        .set_default("storage.csv_path", "product_details.csv")?
        .add_source(File::new(&settings_path, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        )
        .set_override_option("server.port", std::env::var("PORT").ok())?
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    #[test]
    #[serial]
    fn defaults_apply_without_settings_file() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("Settings.toml");

        let config = temp_env::with_var_unset("PORT", || load_config_from(&missing)).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.cors.allowed_origins.len(), 3);
        assert!(config
            .cors
            .allowed_origins
            .contains(&"https://kogenie.com".to_string()));
        assert_eq!(config.scraper.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.storage.csv_path, "product_details.csv");
    }

    #[test]
    #[serial]
    fn settings_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Settings.toml");
        fs::write(
            &path,
            r#"
[server]
port = 8080

[storage]
csv_path = "/tmp/products.csv"
"#,
        )
        .unwrap();

        let config = temp_env::with_var_unset("PORT", || load_config_from(&path)).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage.csv_path, "/tmp/products.csv");
    }

    #[test]
    #[serial]
    fn port_variable_wins_over_settings_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Settings.toml");
        fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let config = temp_env::with_var("PORT", Some("9000"), || load_config_from(&path)).unwrap();

        assert_eq!(config.server.port, 9000);
    }
}
