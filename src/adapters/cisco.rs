use crate::adapters::adapter::report;
use crate::adapters::{AdapterError, DeviceAdapter, SessionSettings, WebSession};
use crate::domain::{Credential, Family};
use crate::log_sink::LogSink;
use crate::provisioning::ProvisioningTarget;
use async_trait::async_trait;
use tracing::instrument;

const LOGIN_PATH: &str = "/admin/login";
const FACTORY_RESET_PATH: &str = "/admin/factory-reset";
const PROVISIONING_PATH: &str = "/admin/provisioning";

#[derive(Debug)]
pub struct CiscoAdapter {
    settings: SessionSettings,
}

impl CiscoAdapter {
    pub fn new(settings: SessionSettings) -> Self {
        CiscoAdapter { settings }
    }

    async fn login(&self, address: &str, credential: &Credential) -> Result<WebSession, AdapterError> {
        let session = WebSession::open(&self.settings, address)?;
        session
            .submit(LOGIN_PATH, &[("username", credential.username()), ("password", credential.password())])
            .await?;
        Ok(session)
    }
}

#[async_trait]
impl DeviceAdapter for CiscoAdapter {
    fn family(&self) -> Family {
        Family::Cisco
    }

    #[instrument(skip(self, credential, log_sink))]
    async fn factory_reset(&self, address: &str, credential: &Credential, log_sink: &dyn LogSink) -> Result<(), AdapterError> {
        let result: Result<(), AdapterError> = async {
            let session = self.login(address, credential).await?;
            session.submit(FACTORY_RESET_PATH, &[]).await
        }
        .await;

        report(
            result,
            log_sink,
            format!("Factory reset initiated for Cisco phone at {}", address),
            format!("Error resetting Cisco phone at {}", address),
        )
    }

    #[instrument(skip(self, credential, target, log_sink), fields(url = target.url_template()))]
    async fn provision(&self, address: &str, credential: &Credential, target: &ProvisioningTarget, log_sink: &dyn LogSink) -> Result<(), AdapterError> {
        let result: Result<(), AdapterError> = async {
            let session = self.login(address, credential).await?;
            session.submit(PROVISIONING_PATH, &[("Profile_Rule", target.url_template())]).await
        }
        .await;

        report(
            result,
            log_sink,
            format!("Provisioning server set for Cisco phone at {}", address),
            format!("Error provisioning Cisco phone at {}", address),
        )
    }
}
