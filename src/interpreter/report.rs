use super::{RunObserver, RunOutcome};
use crate::step::ConfigMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the interpreter reported about one executed step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub index: usize,
    pub name: String,
    pub config: ConfigMap,
    pub elapsed_ns: u64,
}

/// An observer that keeps every notification of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub steps: Vec<StepRecord>,
    pub outcome: Option<RunOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the result of the run.
    pub fn finish(&mut self, outcome: RunOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn total_elapsed(&self) -> Duration {
        Duration::from_nanos(self.steps.iter().map(|step| step.elapsed_ns).sum())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl RunObserver for RunReport {
    fn on_step(&mut self, index: usize, name: &str) {
        self.steps.push(StepRecord {
            index,
            name: name.to_string(),
            config: ConfigMap::new(),
            elapsed_ns: 0,
        });
    }

    fn on_config(&mut self, key: &str, value: f32) {
        if let Some(step) = self.steps.last_mut() {
            step.config.set(key, value);
        }
    }

    fn on_elapsed(&mut self, elapsed: Duration) {
        if let Some(step) = self.steps.last_mut() {
            step.elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        }
    }
}
