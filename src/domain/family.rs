use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Vendor family of a phone, used to pick the adapter and the credentials.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Deserialize)]
#[serde(from = "String")]
pub enum Family {
    Polycom,
    Yealink,
    Cisco,
    Unknown(String),
}

impl Family {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "polycom" => Family::Polycom,
            "yealink" => Family::Yealink,
            "cisco" => Family::Cisco,
            _ => Family::Unknown(value.trim().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Family::Polycom => "Polycom",
            Family::Yealink => "Yealink",
            Family::Cisco => "Cisco",
            Family::Unknown(name) => name,
        }
    }

    /// Lower-cased name, used for credential keys and log file names.
    pub fn key(&self) -> String {
        self.name().to_lowercase()
    }
}

impl From<String> for Family {
    fn from(value: String) -> Self {
        Family::parse(&value)
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
