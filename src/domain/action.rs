use std::fmt::{Display, Formatter};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Action {
    FactoryReset,
    Provision,
}

impl Action {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "factory_reset" => Some(Action::FactoryReset),
            "provision" => Some(Action::Provision),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::FactoryReset => "factory_reset",
            Action::Provision => "provision",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_only_accepts_the_known_action_names() {
        assert_eq!(Action::parse("factory_reset"), Some(Action::FactoryReset));
        assert_eq!(Action::parse("provision"), Some(Action::Provision));
        assert_eq!(Action::parse("reboot"), None);
        assert_eq!(Action::parse("Provision"), None);
    }
}
