use crate::domain::{Credential, Family};
use crate::log_sink::LogSink;
use crate::provisioning::ProvisioningTarget;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;
use tracing::info;

/// Drives the web administration UI of one phone family.
///
/// Every call opens its own session and drops it before returning, so nothing carries over from one phone to the next.
#[async_trait]
pub trait DeviceAdapter: Debug + Send + Sync {
    fn family(&self) -> Family;

    async fn factory_reset(&self, address: &str, credential: &Credential, log_sink: &dyn LogSink) -> Result<(), AdapterError>;

    async fn provision(&self, address: &str, credential: &Credential, target: &ProvisioningTarget, log_sink: &dyn LogSink) -> Result<(), AdapterError>;
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("login rejected by {url}")]
    AuthenticationRejected { url: String },
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: StatusCode, url: String },
    #[error("adapter panicked: {0}")]
    Panicked(String),
}

/// Reports the result of a UI session the way every vendor adapter does: a line on success, an entry in the family log on failure.
pub(super) fn report(result: Result<(), AdapterError>, log_sink: &dyn LogSink, success: String, failure: String) -> Result<(), AdapterError> {
    match &result {
        Ok(()) => info!("✅ {}", success),
        Err(e) => log_sink.error(&format!("{}: {}", failure, e)),
    }
    result
}
