use crate::domain::{Destination, Family};
use serde::Deserialize;

/// A single phone from the inventory. Legacy inventories use `ip_address`, `phone_model` and `phone_type` as column names.
#[derive(PartialEq, Debug, Clone, Deserialize)]
pub struct DeviceRecord {
    #[serde(alias = "ip_address")]
    address: String,
    #[serde(alias = "phone_model")]
    model: String,
    #[serde(alias = "phone_type")]
    family: Family,
    destination: Destination,
}

#[cfg(test)]
impl DeviceRecord {
    pub fn new(address: impl Into<String>, model: impl Into<String>, family: Family, destination: Destination) -> Self {
        DeviceRecord {
            address: address.into(),
            model: model.into(),
            family,
            destination,
        }
    }
}

impl DeviceRecord {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn family(&self) -> &Family {
        &self.family
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }
}
