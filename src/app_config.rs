use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    server: Server,
    dataset: Dataset,
    geofence: Geofence,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn geofence(&self) -> &Geofence {
        &self.geofence
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_level: String,
}

impl Core {
    /// Falls back to `INFO` for unknown level names.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    host: String,
    port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Dataset {
    path: String,
}

impl Dataset {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Shape of the safe zone synthesized around the last known location.
#[derive(Clone, Debug, Deserialize)]
pub struct Geofence {
    name: String,
    radius: u32,
}

impl Geofence {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "debug".to_string(),
                },
                server: Server {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                },
                dataset: Dataset {
                    path: "data/safety_locations.csv".to_string(),
                },
                geofence: Geofence {
                    name: "My Safe Zone".to_string(),
                    radius: 500,
                },
            },
        }
    }

    pub fn geofence(mut self, name: &str, radius: u32) -> Self {
        self.config.geofence = Geofence {
            name: name.to_string(),
            radius,
        };
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", Level::TRACE)]
    #[case("DEBUG", Level::DEBUG)]
    #[case("warn", Level::WARN)]
    #[case("verbose", Level::INFO)]
    fn log_level(#[case] input: &str, #[case] expected: Level) {
        let core = Core {
            log_level: input.to_string(),
        };
        assert_eq!(core.log_level(), expected);
    }

    #[test]
    fn deserializes_all_sections() -> Result<(), ConfigError> {
        let toml = r#"
            [core]
            log_level = "info"

            [server]
            host = "0.0.0.0"
            port = 5000

            [dataset]
            path = "data/safety_locations.csv"

            [geofence]
            name = "My Safe Zone"
            radius = 500
        "#;

        let config = Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<AppConfig>()?;

        assert_eq!(config.core().log_level(), Level::INFO);
        assert_eq!(config.server().address(), "0.0.0.0:5000");
        assert_eq!(config.dataset().path(), "data/safety_locations.csv");
        assert_eq!(config.geofence().name(), "My Safe Zone");
        assert_eq!(config.geofence().radius(), 500);
        Ok(())
    }

    #[test]
    fn builder_overrides_the_geofence() {
        let config = AppConfigBuilder::new().geofence("Hotel", 250).build();

        assert_eq!(config.geofence().name(), "Hotel");
        assert_eq!(config.geofence().radius(), 250);
    }
}
