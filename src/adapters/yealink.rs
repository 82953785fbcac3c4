use crate::adapters::adapter::report;
use crate::adapters::{AdapterError, DeviceAdapter, SessionSettings, WebSession};
use crate::domain::{Credential, Family};
use crate::log_sink::LogSink;
use crate::provisioning::ProvisioningTarget;
use async_trait::async_trait;
use tracing::instrument;

const LOGIN_PATH: &str = "/servlet/login";
const FACTORY_RESET_PATH: &str = "/servlet/settings/upgrade/reset-factory";
const AUTO_PROVISION_PATH: &str = "/servlet/settings/auto-provision";

#[derive(Debug)]
pub struct YealinkAdapter {
    settings: SessionSettings,
}

impl YealinkAdapter {
    pub fn new(settings: SessionSettings) -> Self {
        YealinkAdapter { settings }
    }

    async fn login(&self, address: &str, credential: &Credential) -> Result<WebSession, AdapterError> {
        let session = WebSession::open(&self.settings, address)?;
        session
            .submit(LOGIN_PATH, &[("username", credential.username()), ("pwd", credential.password())])
            .await?;
        Ok(session)
    }
}

#[async_trait]
impl DeviceAdapter for YealinkAdapter {
    fn family(&self) -> Family {
        Family::Yealink
    }

    #[instrument(skip(self, credential, log_sink))]
    async fn factory_reset(&self, address: &str, credential: &Credential, log_sink: &dyn LogSink) -> Result<(), AdapterError> {
        let result: Result<(), AdapterError> = async {
            let session = self.login(address, credential).await?;
            session.submit(FACTORY_RESET_PATH, &[("confirm", "OK")]).await
        }
        .await;

        report(
            result,
            log_sink,
            format!("Factory reset initiated for Yealink phone at {}", address),
            format!("Error resetting Yealink phone at {}", address),
        )
    }

    #[instrument(skip(self, credential, target, log_sink), fields(url = target.url_template()))]
    async fn provision(&self, address: &str, credential: &Credential, target: &ProvisioningTarget, log_sink: &dyn LogSink) -> Result<(), AdapterError> {
        let result: Result<(), AdapterError> = async {
            let session = self.login(address, credential).await?;
            session
                .submit(
                    AUTO_PROVISION_PATH,
                    &[
                        ("ServerType", "HTTPS"),
                        ("ServerURL", target.url_template()),
                        ("ServerUserName", ""),
                        ("ServerPassword", ""),
                    ],
                )
                .await
        }
        .await;

        report(
            result,
            log_sink,
            format!("Provisioning server set for Yealink phone at {}", address),
            format!("Error provisioning Yealink phone at {}", address),
        )
    }
}
