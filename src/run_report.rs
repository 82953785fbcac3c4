use crate::adapters::AdapterError;
use crate::domain::{DeviceRecord, Family};
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ActionOutcome {
    Success,
    Unreachable,
    AdapterFailure(AdapterError),
    UnsupportedFamily,
    UnsupportedAction,
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success)
    }
}

impl Display for ActionOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionOutcome::Success => f.write_str("success"),
            ActionOutcome::Unreachable => f.write_str("unreachable"),
            ActionOutcome::AdapterFailure(cause) => write!(f, "failed: {}", cause),
            ActionOutcome::UnsupportedFamily => f.write_str("unsupported phone type"),
            ActionOutcome::UnsupportedAction => f.write_str("unsupported action"),
        }
    }
}

/// Outcome of every phone in a run, in inventory order.
#[derive(Debug, Default)]
pub struct RunReport {
    entries: Vec<(DeviceRecord, ActionOutcome)>,
}

impl RunReport {
    pub fn with_capacity(capacity: usize) -> Self {
        RunReport {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, device: DeviceRecord, outcome: ActionOutcome) {
        self.entries.push((device, outcome));
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[(DeviceRecord, ActionOutcome)] {
        &self.entries
    }

    pub fn failures(&self) -> impl Iterator<Item = &(DeviceRecord, ActionOutcome)> {
        self.entries.iter().filter(|(_, outcome)| !outcome.is_success())
    }

    pub fn failures_for<'a>(&'a self, family: &'a Family) -> impl Iterator<Item = &'a (DeviceRecord, ActionOutcome)> + 'a {
        self.failures().filter(move |(device, _)| device.family() == family)
    }

    pub fn summary(&self) -> RunSummary {
        self.entries.iter().fold(RunSummary::default(), |mut summary, (_, outcome)| {
            summary.total += 1;
            match outcome {
                ActionOutcome::Success => summary.succeeded += 1,
                ActionOutcome::Unreachable => summary.unreachable += 1,
                ActionOutcome::AdapterFailure(_) => summary.failed += 1,
                ActionOutcome::UnsupportedFamily | ActionOutcome::UnsupportedAction => summary.unsupported += 1,
            }
            summary
        })
    }
}

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub unreachable: usize,
    pub failed: usize,
    pub unsupported: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} phone(s): {} succeeded, {} unreachable, {} failed, {} unsupported",
            self.total, self.succeeded, self.unreachable, self.failed, self.unsupported
        )
    }
}
