use crate::app_config::AppConfig;
use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, error, instrument};

// Time allowed on top of the probe timeout for the probe program to start and exit.
const GRACE_PERIOD: Duration = Duration::from_millis(500);

#[async_trait]
pub trait ReachabilityProber: Debug + Send + Sync {
    /// Advisory check, never fails: anything but an explicit success counts as unreachable.
    async fn is_reachable(&self, address: &str) -> bool;
}

/// Sends a single echo request through the system `ping`.
#[derive(Debug)]
pub struct PingProber {
    program: String,
    timeout: Duration,
}

impl PingProber {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        PingProber {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        PingProber::new(config.probe().program(), config.probe().timeout())
    }

    async fn ping(&self, address: &str) -> Result<ExitStatus, ProbeError> {
        if address.is_empty() || address.starts_with('-') {
            return Err(ProbeError::InvalidAddress(address.to_string()));
        }

        let wait_seconds = self.timeout.as_secs().max(1).to_string();
        let mut child = Command::new(&self.program)
            .args(["-c", "1", "-W", wait_seconds.as_str(), address])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let status = timeout(self.timeout + GRACE_PERIOD, child.wait())
            .await
            .map_err(|_| ProbeError::TimedOut(self.timeout))??;
        Ok(status)
    }
}

#[async_trait]
impl ReachabilityProber for PingProber {
    #[instrument(skip(self))]
    async fn is_reachable(&self, address: &str) -> bool {
        match self.ping(address).await {
            Ok(status) => {
                debug!(%status, "Probe finished");
                status.success()
            }
            Err(e) => {
                error!("❌ Error pinging IP address {}: {}", address, e);
                false
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("unable to run the probe: {0}")]
    Io(#[from] io::Error),
    #[error("no reply within {0:?}")]
    TimedOut(Duration),
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use std::time::Instant;
    use test_log::test;

    #[test(tokio::test)]
    async fn a_successful_probe_means_reachable() {
        let prober = PingProber::new("true", Duration::from_secs(1));

        assert!(prober.is_reachable("192.168.1.10").await);
    }

    #[test(tokio::test)]
    async fn a_failed_probe_means_unreachable() {
        let prober = PingProber::new("false", Duration::from_secs(1));

        assert!(!prober.is_reachable("192.168.1.10").await);
    }

    #[test(tokio::test)]
    async fn a_missing_probe_program_means_unreachable() {
        let config = AppConfigBuilder::new().probe_program("definitely-not-a-ping-program").build();
        let prober = PingProber::from_config(&config);

        assert!(!prober.is_reachable("192.168.1.10").await);
    }

    #[test(tokio::test)]
    async fn a_hanging_ping_is_cut_off_by_the_timeout() {
        let program = format!("{}/tests/resources/hang.sh", env!("CARGO_MANIFEST_DIR"));
        let prober = PingProber::new(program, Duration::from_secs(1));

        let started = Instant::now();
        let reachable = prober.is_reachable("192.168.1.10").await;

        assert!(!reachable);
        assert!(started.elapsed() < Duration::from_secs(3), "took {:?}", started.elapsed());
    }

    #[test(tokio::test)]
    async fn an_address_that_looks_like_an_option_is_rejected() {
        let prober = PingProber::new("true", Duration::from_secs(1));

        assert!(!prober.is_reachable("-f").await);
        assert!(!prober.is_reachable("").await);
    }
}
