use crate::adapters::adapter::report;
use crate::adapters::{AdapterError, DeviceAdapter, SessionSettings, WebSession};
use crate::domain::{Credential, Family};
use crate::log_sink::LogSink;
use crate::provisioning::ProvisioningTarget;
use async_trait::async_trait;
use tracing::instrument;

const LOGIN_PATH: &str = "/login.htm";
const FACTORY_RESET_PATH: &str = "/form-submit/Utilities/restorePhoneToFactory";
const PROVISIONING_SERVER_PATH: &str = "/form-submit/Settings/provisioningServer";

#[derive(Debug)]
pub struct PolycomAdapter {
    settings: SessionSettings,
}

impl PolycomAdapter {
    pub fn new(settings: SessionSettings) -> Self {
        PolycomAdapter { settings }
    }

    async fn login(&self, address: &str, credential: &Credential) -> Result<WebSession, AdapterError> {
        let session = WebSession::open(&self.settings, address)?;
        // The reset screen only asks for the admin password
        if credential.has_username() {
            session
                .submit(LOGIN_PATH, &[("username", credential.username()), ("password", credential.password())])
                .await?;
        } else {
            session.submit(LOGIN_PATH, &[("password", credential.password())]).await?;
        }
        Ok(session)
    }
}

#[async_trait]
impl DeviceAdapter for PolycomAdapter {
    fn family(&self) -> Family {
        Family::Polycom
    }

    #[instrument(skip(self, credential, log_sink))]
    async fn factory_reset(&self, address: &str, credential: &Credential, log_sink: &dyn LogSink) -> Result<(), AdapterError> {
        let result: Result<(), AdapterError> = async {
            let session = self.login(address, credential).await?;
            session.submit(FACTORY_RESET_PATH, &[("RestoreToFactory", "true")]).await
        }
        .await;

        report(
            result,
            log_sink,
            format!("Factory reset initiated for Poly phone at {}", address),
            format!("Error resetting Poly phone at {}", address),
        )
    }

    #[instrument(skip(self, credential, target, log_sink), fields(url = target.url_template()))]
    async fn provision(&self, address: &str, credential: &Credential, target: &ProvisioningTarget, log_sink: &dyn LogSink) -> Result<(), AdapterError> {
        let result: Result<(), AdapterError> = async {
            let session = self.login(address, credential).await?;
            session
                .submit(
                    PROVISIONING_SERVER_PATH,
                    &[
                        ("ServerType", "HTTPS"),
                        ("ServerAddress", target.url_template()),
                        ("ServerUser", ""),
                        ("ServerPassword", ""),
                        ("BootServer", "Static"),
                    ],
                )
                .await
        }
        .await;

        report(
            result,
            log_sink,
            format!("Provisioning server set for Poly phone at {}", address),
            format!("Error provisioning Poly phone at {}", address),
        )
    }
}
