use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where error logs go when nothing else is configured, or when the configuration itself cannot be read.
pub const DEFAULT_LOG_DIRECTORY: &str = ".";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    paths: Paths,
    logging: Logging,
    probe: Probe,
    devices: Devices,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config_local").required(false))
            .add_source(Environment::with_prefix("PHONE_FLIPPER").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("paths.inventory", "phones.csv")?
            .set_default("paths.credentials", "phone_creds.cfg")?
            .set_default("logging.directory", DEFAULT_LOG_DIRECTORY)?
            .set_default("probe.program", "ping")?
            .set_default("probe.timeout", "2s")?
            .set_default("devices.scheme", "https")?
            .set_default("devices.request_timeout", "30s")
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }

    pub fn probe(&self) -> &Probe {
        &self.probe
    }

    pub fn devices(&self) -> &Devices {
        &self.devices
    }
}

#[derive(Debug, Deserialize)]
pub struct Paths {
    inventory: PathBuf,
    credentials: PathBuf,
}

impl Paths {
    pub fn inventory(&self) -> &Path {
        &self.inventory
    }

    pub fn credentials(&self) -> &Path {
        &self.credentials
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    directory: PathBuf,
}

impl Logging {
    /// Directory holding the `{family}_errors.log` and `main_errors.log` files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[derive(Debug, Deserialize)]
pub struct Probe {
    program: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Probe {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Devices {
    scheme: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl Devices {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
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
                paths: Paths {
                    inventory: PathBuf::from("phones.csv"),
                    credentials: PathBuf::from("phone_creds.cfg"),
                },
                logging: Logging {
                    directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
                },
                probe: Probe {
                    program: "ping".to_string(),
                    timeout: Duration::from_secs(1),
                },
                devices: Devices {
                    scheme: "http".to_string(),
                    request_timeout: Duration::from_secs(5),
                },
            },
        }
    }

    pub fn probe_program(mut self, program: &str) -> Self {
        self.config.probe.program = program.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
