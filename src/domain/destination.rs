use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Hosted telephony platform a phone gets provisioned toward. Matching is case-sensitive, anything unknown is `Other`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Deserialize)]
#[serde(from = "String")]
pub enum Destination {
    Zoom,
    Ringcentral,
    Other,
}

impl Destination {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Zoom" => Destination::Zoom,
            "Ringcentral" => Destination::Ringcentral,
            _ => Destination::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Zoom => "Zoom",
            Destination::Ringcentral => "Ringcentral",
            Destination::Other => "Other",
        }
    }
}

impl From<String> for Destination {
    fn from(value: String) -> Self {
        Destination::parse(&value)
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
