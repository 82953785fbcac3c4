use crate::domain::CredentialStore;
use crate::loader::LoadError;
use config::{Config, ConfigError, File, FileFormat, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, instrument, warn};

const CREDENTIALS_SECTION: &str = "DEFAULT";

/// Reads the `[DEFAULT]` section of an INI credential file. A file without that section yields an empty store.
#[instrument]
pub fn load_credentials(path: &Path) -> Result<CredentialStore, LoadError> {
    info!("🔑 Loading credentials...");
    let to_load_error = |e: ConfigError| LoadError::Credentials {
        source: e,
        path: path.to_path_buf(),
    };

    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini).required(true))
        .build()
        .map_err(to_load_error)?;

    let entries = read_section(config).map_err(to_load_error)?;
    info!("🔑 Loading credentials... OK, {} entries", entries.len());
    Ok(CredentialStore::new(entries))
}

fn read_section(config: Config) -> Result<HashMap<String, String>, ConfigError> {
    let mut sections = config.try_deserialize::<HashMap<String, Value>>()?;
    let section_name = sections.keys().find(|name| name.eq_ignore_ascii_case(CREDENTIALS_SECTION)).cloned();

    let Some(section) = section_name.and_then(|name| sections.remove(&name)) else {
        warn!("⚠️ No [{}] section found, every phone gets empty credentials", CREDENTIALS_SECTION);
        return Ok(HashMap::new());
    };

    section
        .into_table()?
        .into_iter()
        .map(|(key, value)| Ok((key.to_lowercase(), value.into_string()?)))
        .collect()
}
