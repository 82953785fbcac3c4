use crate::domain::DeviceRecord;

/// Placeholder the phone replaces with its own identifier when fetching its configuration.
pub const PHONE_NUMBER_PLACEHOLDER: &str = "$PN";

pub const DEFAULT_PROVISIONING_URL: &str = "https://default-provisioning-url.com/";

/// Models that need the Yealink style provisioning URL, whatever family the inventory lists them under.
const YEALINK_MODELS: [&str; 18] = [
    "T21P", "T33G", "T42S", "T46S", "T48S", "T57W", "W52P", "W56P", "W56H", "W60P", "T31P", "T43U", "T46U", "T48U", "T53", "T53W", "T54W", "CP930W",
];

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ProvisioningTarget {
    url_template: String,
}

impl ProvisioningTarget {
    pub fn new(url_template: impl Into<String>) -> Self {
        ProvisioningTarget {
            url_template: url_template.into(),
        }
    }

    pub fn for_device(device: &DeviceRecord) -> Self {
        ProvisioningTarget::new(resolve(device.destination().as_str(), device.model(), device.family().name()))
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn has_placeholder(&self) -> bool {
        self.url_template.contains(PHONE_NUMBER_PLACEHOLDER)
    }
}

/// Maps a destination, model and family to the URL the phone should provision from. Never fails: unknown destinations use
/// the `Other` partner, unknown families the default URL.
pub fn resolve(destination: &str, model: &str, family: &str) -> &'static str {
    let family = capitalize(family);
    let model = model.to_uppercase();
    let family = if YEALINK_MODELS.contains(&model.as_str()) { "Yealink" } else { family.as_str() };

    let partner = match destination {
        "Zoom" | "Ringcentral" | "Other" => destination,
        _ => "Other",
    };

    partner_url(partner, family).unwrap_or(DEFAULT_PROVISIONING_URL)
}

fn partner_url(partner: &str, family: &str) -> Option<&'static str> {
    match (partner, family) {
        ("Zoom", "Polycom") => Some("https://provpp.zoom.us/api/v2/pbx/provisioning/"),
        ("Zoom", "Yealink") => Some("https://yp.zoom.us/provisioning/yealink/$PN"),
        ("Ringcentral", "Polycom") => Some("https://pp.ringcentral.com/pp"),
        ("Ringcentral", "Yealink") => Some("https://yp.ringcentral.com/provisioning/yealink/$PN"),
        ("Other", "Polycom") => Some("https://other-provisioning-url.com/"),
        ("Other", "Yealink") => Some("https://other-provisioning-url.com/yealink/$PN"),
        _ => None,
    }
}

fn capitalize(value: &str) -> String {
    let lower = value.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Destination, Family};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Zoom", "vvx350", "Polycom", "https://provpp.zoom.us/api/v2/pbx/provisioning/")]
    #[case("Ringcentral", "T54W", "Yealink", "https://yp.ringcentral.com/provisioning/yealink/$PN")]
    #[case("Ringcentral", "vvx250", "Polycom", "https://pp.ringcentral.com/pp")]
    #[case("Other", "T46U", "Yealink", "https://other-provisioning-url.com/yealink/$PN")]
    #[case("Zoom", "vvx350", "POLYCOM", "https://provpp.zoom.us/api/v2/pbx/provisioning/")]
    fn resolves_the_partner_url(#[case] destination: &str, #[case] model: &str, #[case] family: &str, #[case] expected: &str) {
        assert_eq!(resolve(destination, model, family), expected);
    }

    #[rstest]
    #[case("T54W")]
    #[case("t54w")]
    #[case("cp930w")]
    fn a_yealink_model_overrides_the_family(#[case] model: &str) {
        assert_eq!(resolve("Ringcentral", model, "Polycom"), "https://yp.ringcentral.com/provisioning/yealink/$PN");
    }

    #[test]
    fn an_unknown_destination_uses_the_other_partner() {
        assert_eq!(resolve("Acme", "vvx350", "Polycom"), resolve("Other", "vvx350", "Polycom"));
    }

    #[test]
    fn destination_matching_is_case_sensitive() {
        assert_eq!(resolve("zoom", "vvx350", "Polycom"), "https://other-provisioning-url.com/");
    }

    #[test]
    fn an_unknown_family_gets_the_default_url() {
        assert_eq!(resolve("Zoom", "unknownmodel", "Cisco"), DEFAULT_PROVISIONING_URL);
    }

    #[test]
    fn resolution_is_total() {
        let destinations = ["Zoom", "Ringcentral", "Other", "Acme", ""];
        let models = ["T54W", "vvx350", "", "ünïcödé"];
        let families = ["Polycom", "yealink", "Cisco", "", "ßpecial"];

        for destination in destinations {
            for model in models {
                for family in families {
                    let url = resolve(destination, model, family);
                    assert!(!url.is_empty(), "empty url for ({destination}, {model}, {family})");
                    assert_eq!(url, resolve(destination, model, family));
                }
            }
        }
    }

    #[test]
    fn for_device_uses_the_device_fields() {
        let device = DeviceRecord::new("192.168.1.11", "T54W", Family::Yealink, Destination::Zoom);
        let target = ProvisioningTarget::for_device(&device);

        assert_eq!(target.url_template(), "https://yp.zoom.us/provisioning/yealink/$PN");
        assert!(target.has_placeholder());
    }
}
