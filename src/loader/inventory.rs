use crate::domain::DeviceRecord;
use crate::loader::LoadError;
use csv::{ReaderBuilder, Trim};
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Reads every row of the inventory. A single malformed row fails the whole load.
#[instrument]
pub fn load_inventory(path: &Path) -> Result<Vec<DeviceRecord>, LoadError> {
    info!("📁 Loading inventory...");
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::Inventory {
            source: e,
            path: path.to_path_buf(),
        })?;

    let devices = read_devices(reader).map_err(|e| LoadError::Inventory {
        source: e,
        path: path.to_path_buf(),
    })?;

    info!("📁 Loading inventory... OK, {} device(s)", devices.len());
    Ok(devices)
}

fn read_devices<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<DeviceRecord>, csv::Error> {
    reader.deserialize::<DeviceRecord>().collect()
}

/// Keeps only the rows for `address`, failing if the inventory has none.
pub fn select_address(inventory: Vec<DeviceRecord>, address: &str) -> Result<Vec<DeviceRecord>, LoadError> {
    let selected = inventory.into_iter().filter(|device| device.address() == address).collect::<Vec<_>>();

    if selected.is_empty() {
        return Err(LoadError::UnknownAddress(address.to_string()));
    }
    Ok(selected)
}
