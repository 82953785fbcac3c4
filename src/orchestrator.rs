use crate::adapters::{AdapterError, AdapterRegistry};
use crate::domain::{Action, CredentialStore, DeviceRecord};
use crate::log_sink::LogSinks;
use crate::provisioning::ProvisioningTarget;
use crate::reachability::ReachabilityProber;
use crate::run_report::{ActionOutcome, RunReport};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

/// Runs one action over a whole inventory, one phone at a time. Whatever happens to a single phone ends up in the report,
/// the run itself never fails.
#[derive(Debug)]
pub struct Orchestrator {
    prober: Arc<dyn ReachabilityProber>,
    registry: AdapterRegistry,
    sinks: Arc<dyn LogSinks>,
}

impl Orchestrator {
    pub fn new(prober: Arc<dyn ReachabilityProber>, registry: AdapterRegistry, sinks: Arc<dyn LogSinks>) -> Self {
        Orchestrator { prober, registry, sinks }
    }

    #[instrument(skip_all, fields(action = action))]
    pub async fn run(&self, action: &str, inventory: &[DeviceRecord], credentials: &CredentialStore) -> RunReport {
        info!("▶️ Running '{}' on {} phone(s)...", action, inventory.len());
        let start = Instant::now();

        let mut report = RunReport::with_capacity(inventory.len());
        for device in inventory {
            let outcome = self.process(action, device, credentials).await;
            debug!(address = device.address(), %outcome, "Processed phone");
            report.record(device.clone(), outcome);
        }

        let duration = Instant::now() - start;
        info!(duration = ?duration, "▶️ Running '{}'... OK, {}", action, report.summary());
        report
    }

    #[instrument(skip_all, fields(address = device.address(), family = %device.family()))]
    async fn process(&self, action: &str, device: &DeviceRecord, credentials: &CredentialStore) -> ActionOutcome {
        let credential = credentials.for_family(device.family());
        let family_sink = self.sinks.family(device.family());

        if !self.prober.is_reachable(device.address()).await {
            family_sink.error(&format!("Cannot reach IP address {}, skipping...", device.address()));
            return ActionOutcome::Unreachable;
        }

        let adapter = match self.registry.resolve_adapter(device.family()) {
            Ok(adapter) => adapter,
            Err(e) => {
                self.sinks.general().error(&format!("{} ({})", e, device.address()));
                return ActionOutcome::UnsupportedFamily;
            }
        };

        let Some(action) = Action::parse(action) else {
            self.sinks.general().error(&format!("Unsupported action: {} ({})", action, device.address()));
            return ActionOutcome::UnsupportedAction;
        };

        let invocation = async {
            match action {
                Action::FactoryReset => adapter.factory_reset(device.address(), &credential, family_sink.as_ref()).await,
                Action::Provision => {
                    let target = ProvisioningTarget::for_device(device);
                    debug!(url = target.url_template(), placeholder = target.has_placeholder(), "Resolved provisioning target");
                    adapter.provision(device.address(), &credential, &target, family_sink.as_ref()).await
                }
            }
        };

        // A panicking adapter must not take the rest of the batch down with it
        let result = match AssertUnwindSafe(invocation).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(AdapterError::Panicked(panic_message(panic))),
        };

        match result {
            Ok(()) => ActionOutcome::Success,
            Err(e) => {
                self.sinks.general().error(&format!(
                    "Unexpected error for phone at {} ({}): {}",
                    device.address(),
                    device.family(),
                    e
                ));
                ActionOutcome::AdapterFailure(e)
            }
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
