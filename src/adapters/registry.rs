use crate::adapters::{CiscoAdapter, DeviceAdapter, PolycomAdapter, SessionSettings, YealinkAdapter};
use crate::domain::Family;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Closed lookup table from a phone family to the adapter that drives it.
#[derive(Debug)]
pub struct AdapterRegistry {
    adapters: HashMap<Family, Arc<dyn DeviceAdapter>>,
}

impl AdapterRegistry {
    pub fn new(settings: &SessionSettings) -> Self {
        let adapters: Vec<Arc<dyn DeviceAdapter>> = vec![
            Arc::new(PolycomAdapter::new(settings.clone())),
            Arc::new(YealinkAdapter::new(settings.clone())),
            Arc::new(CiscoAdapter::new(settings.clone())),
        ];
        AdapterRegistry::from_adapters(adapters)
    }

    pub fn from_adapters(adapters: Vec<Arc<dyn DeviceAdapter>>) -> Self {
        let adapters = adapters.into_iter().map(|adapter| (adapter.family(), adapter)).collect();
        AdapterRegistry { adapters }
    }

    pub fn resolve_adapter(&self, family: &Family) -> Result<Arc<dyn DeviceAdapter>, UnsupportedFamily> {
        self.adapters.get(family).cloned().ok_or_else(|| UnsupportedFamily(family.name().to_string()))
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unsupported phone type: {0}")]
pub struct UnsupportedFamily(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::time::Duration;

    fn registry() -> AdapterRegistry {
        AdapterRegistry::new(&SessionSettings::new("https", Duration::from_secs(5)))
    }

    #[rstest]
    #[case("Polycom", Family::Polycom)]
    #[case("yealink", Family::Yealink)]
    #[case("CISCO", Family::Cisco)]
    fn resolves_every_known_family(#[case] name: &str, #[case] expected: Family) {
        let adapter = registry().resolve_adapter(&Family::parse(name)).unwrap();

        assert_eq!(adapter.family(), expected);
    }

    #[test]
    fn an_unknown_family_is_unsupported() {
        let result = registry().resolve_adapter(&Family::parse("Grandstream"));

        assert_eq!(result.unwrap_err(), UnsupportedFamily("Grandstream".to_string()));
    }
}
