use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;

use crate::models::UnitSystem;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub calculator: CalculatorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorSettings {
    /// Unit system preselected on the form and assumed when a request omits it
    #[serde(default)]
    pub default_system: UnitSystem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BMI__)
    /// 5. `HOST` / `PORT`, as set by most container platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BMI__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        platform_overrides_from_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Same layering as [`Settings::load`], with `path` (required) in place
    /// of the two files under `config/`.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        platform_overrides_from_env(settings)?.try_deserialize()
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("calculator.default_system", "metric")?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn env_source() -> Environment {
    Environment::with_prefix("BMI")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honour bare `HOST` and `PORT` variables on top of everything else
fn platform_overrides_from_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    apply_platform_overrides(settings, env::var("HOST").ok(), env::var("PORT").ok())
}

fn apply_platform_overrides(
    settings: Config,
    host: Option<String>,
    port: Option<String>,
) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(host) = host {
        builder = builder.set_override("server.host", host)?;
    }
    if let Some(port) = port {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_builtin_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 5000);
        assert!(settings.server.workers.is_none());
        assert_eq!(settings.calculator.default_system, UnitSystem::Metric);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings = from_toml(
            r#"
            [server]
            port = 8080
            workers = 2

            [calculator]
            default_system = "imperial"
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.workers, Some(2));
        assert_eq!(settings.calculator.default_system, UnitSystem::Imperial);
    }

    #[test]
    fn test_unknown_default_system_is_rejected() {
        let result = from_toml(
            r#"
            [calculator]
            default_system = "bogus"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bmi-web-settings-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            [server]
            workers = 3

            [calculator]
            default_system = "Imperial"

            [logging]
            format = "pretty"
            "#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        let settings = settings.unwrap();
        assert_eq!(settings.server.workers, Some(3));
        assert_eq!(settings.calculator.default_system, UnitSystem::Imperial);
        assert_eq!(settings.logging.format, "pretty");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("bmi-web-settings-does-not-exist.toml");
        assert!(Settings::load_from(path).is_err());
    }

    #[test]
    fn test_platform_overrides_win() {
        let base = with_defaults()
            .unwrap()
            .add_source(File::from_str("[server]\nport = 8080", FileFormat::Toml))
            .build()
            .unwrap();

        let settings: Settings =
            apply_platform_overrides(base, Some("0.0.0.0".to_string()), Some("9090".to_string()))
                .unwrap()
                .try_deserialize()
                .unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
    }

    #[test]
    fn test_platform_overrides_absent() {
        let base = with_defaults()
            .unwrap()
            .add_source(File::from_str("[server]\nport = 8080", FileFormat::Toml))
            .build()
            .unwrap();

        let settings: Settings = apply_platform_overrides(base, None, None)
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
