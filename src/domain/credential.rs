use crate::domain::Family;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// Login for the web UI of a phone. Some vendors only ask for a password.
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Credential {
    username: Option<String>,
    password: String,
}

impl Credential {
    pub fn new(username: Option<String>, password: impl Into<String>) -> Self {
        Credential {
            username,
            password: password.into(),
        }
    }

    /// The username, or an empty string if the store has none for this family.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn has_username(&self) -> bool {
        self.username.is_some()
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read-only view of the credential file, holding `{family}_username` and `{family}_password` entries.
#[derive(Debug, Default, Clone)]
pub struct CredentialStore {
    entries: HashMap<String, String>,
    username_override: Option<String>,
    password_override: Option<String>,
}

impl CredentialStore {
    pub fn new(entries: HashMap<String, String>) -> Self {
        CredentialStore {
            entries: entries.into_iter().map(|(key, value)| (key.to_lowercase(), value)).collect(),
            username_override: None,
            password_override: None,
        }
    }

    /// Values passed here win over whatever the store holds, for every family.
    pub fn with_overrides(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username_override = username;
        self.password_override = password;
        self
    }

    pub fn for_family(&self, family: &Family) -> Credential {
        let key = family.key();
        let username = self
            .username_override
            .clone()
            .or_else(|| self.entries.get(&format!("{}_username", key)).cloned());
        let password = self
            .password_override
            .clone()
            .or_else(|| self.entries.get(&format!("{}_password", key)).cloned())
            .unwrap_or_default();

        Credential::new(username, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> CredentialStore {
        CredentialStore::new(HashMap::from([
            ("polycom_password".to_string(), "456".to_string()),
            ("yealink_username".to_string(), "admin".to_string()),
            ("yealink_password".to_string(), "789789".to_string()),
        ]))
    }

    #[test]
    fn for_family_returns_the_entries_of_that_family() {
        let credential = store().for_family(&Family::Yealink);

        assert_eq!(credential, Credential::new(Some("admin".to_string()), "789789"));
    }

    #[test]
    fn for_family_allows_a_password_only_family() {
        let credential = store().for_family(&Family::Polycom);

        assert!(!credential.has_username());
        assert_eq!(credential.username(), "");
        assert_eq!(credential.password(), "456");
    }

    #[test]
    fn for_family_falls_back_to_empty_strings() {
        let credential = store().for_family(&Family::Cisco);

        assert_eq!(credential.username(), "");
        assert_eq!(credential.password(), "");
    }

    #[test]
    fn overrides_win_over_the_store() {
        let credential = store()
            .with_overrides(Some("operator".to_string()), Some("hunter2".to_string()))
            .for_family(&Family::Yealink);

        assert_eq!(credential, Credential::new(Some("operator".to_string()), "hunter2"));
    }

    #[test]
    fn debug_output_hides_the_password() {
        let output = format!("{:?}", Credential::new(None, "secret"));

        assert!(!output.contains("secret"));
    }
}
