use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub pacing: PacingSettings,
    #[serde(default)]
    pub vitals: VitalsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PacingSettings {
    #[serde(default = "default_status_delay_ms")]
    pub status_delay_ms: u64,
    #[serde(default = "default_telemetry_delay_ms")]
    pub telemetry_delay_ms: u64,
}

impl PacingSettings {
    pub fn status_delay(&self) -> Duration {
        Duration::from_millis(self.status_delay_ms)
    }

    pub fn telemetry_delay(&self) -> Duration {
        Duration::from_millis(self.telemetry_delay_ms)
    }
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            status_delay_ms: default_status_delay_ms(),
            telemetry_delay_ms: default_telemetry_delay_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VitalsSettings {
    /// Fixed seed for vitals noise; fresh entropy per render when unset
    pub noise_seed: Option<u64>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_status_delay_ms() -> u64 {
    500
}

fn default_telemetry_delay_ms() -> u64 {
    300
}

/// Reads `config/dashboard.{toml,yaml,json}` if present, then `MEDIDRONE__*` env overrides
pub fn load_config() -> anyhow::Result<AppConfig> {
    build_config(config::File::with_name("config/dashboard").required(false))
}

fn build_config<S>(file: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("MEDIDRONE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_config_from_str(contents: &str) -> anyhow::Result<AppConfig> {
        build_config(config::File::from_str(contents, config::FileFormat::Toml))
    }

    #[test]
    fn test_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.pacing.status_delay(), Duration::from_millis(500));
        assert_eq!(config.pacing.telemetry_delay(), Duration::from_millis(300));
        assert_eq!(config.vitals.noise_seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = load_config_from_str(
            r#"
            [server]
            bind_addr = "127.0.0.1:9000"

            [pacing]
            status_delay_ms = 0

            [vitals]
            noise_seed = 1234
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.pacing.status_delay_ms, 0);
        assert_eq!(config.pacing.telemetry_delay_ms, 300);
        assert_eq!(config.vitals.noise_seed, Some(1234));
    }

    #[test]
    fn test_rejects_malformed_config() {
        assert!(load_config_from_str("[pacing]\nstatus_delay_ms = \"slow\"").is_err());
    }
}
