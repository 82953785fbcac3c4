mod credentials;
mod inventory;

pub use credentials::load_credentials;
pub use inventory::{load_inventory, select_address};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unable to read configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("unable to read inventory '{}': {source}", path.display())]
    Inventory { source: csv::Error, path: PathBuf },
    #[error("unable to read credentials '{}': {source}", path.display())]
    Credentials { source: config::ConfigError, path: PathBuf },
    #[error("no phone with IP address '{0}' in the inventory")]
    UnknownAddress(String),
}
