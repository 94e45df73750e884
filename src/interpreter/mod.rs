use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

mod clock;
mod report;

pub use clock::{Clock, SystemClock};
pub use report::{RunReport, StepRecord};

/// How a run ended. Stopping early is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Every step ran and asked to continue.
    Completed { steps: usize },
    /// The step at `index` asked the recipe to stop.
    Stopped { index: usize, name: String },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    /// Number of steps whose executor was invoked.
    pub fn executed_steps(&self) -> usize {
        match self {
            RunOutcome::Completed { steps } => *steps,
            RunOutcome::Stopped { index, .. } => index + 1,
        }
    }
}

/// Receives progress notifications while a recipe runs.
///
/// For every step, `on_step` fires first, then `on_config` once per
/// configuration entry in key order, then `on_elapsed` after the executor
/// returned.
pub trait RunObserver {
    fn on_step(&mut self, _index: usize, _name: &str) {}
    fn on_config(&mut self, _key: &str, _value: f32) {}
    fn on_elapsed(&mut self, _elapsed: Duration) {}
}

/// Ignores every notification.
impl RunObserver for () {}

impl<A: RunObserver, B: RunObserver> RunObserver for (A, B) {
    fn on_step(&mut self, index: usize, name: &str) {
        self.0.on_step(index, name);
        self.1.on_step(index, name);
    }

    fn on_config(&mut self, key: &str, value: f32) {
        self.0.on_config(key, value);
        self.1.on_config(key, value);
    }

    fn on_elapsed(&mut self, elapsed: Duration) {
        self.0.on_elapsed(elapsed);
        self.1.on_elapsed(elapsed);
    }
}

/// Adapts three callbacks into a [`RunObserver`].
pub struct ObserverFns<P, K, T> {
    pub progress: P,
    pub key: K,
    pub time: T,
}

impl<P, K, T> RunObserver for ObserverFns<P, K, T>
where
    P: FnMut(usize, &str),
    K: FnMut(&str, f32),
    T: FnMut(Duration),
{
    fn on_step(&mut self, index: usize, name: &str) {
        (self.progress)(index, name)
    }

    fn on_config(&mut self, key: &str, value: f32) {
        (self.key)(key, value)
    }

    fn on_elapsed(&mut self, elapsed: Duration) {
        (self.time)(elapsed)
    }
}

/// Executes recipes step by step against a domain state.
#[derive(Debug, Clone, Default)]
pub struct Interpreter<C = SystemClock> {
    clock: C,
}

impl Interpreter<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Interpreter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Runs `recipe` against `state`, stopping at the first step whose executor returns `false`.
    ///
    /// The interpreter never cleans up the state; callers do that once `run` returns,
    /// whatever the outcome.
    pub fn run<S, O>(&self, recipe: &Recipe<'_, S>, state: &mut S, observer: &mut O) -> RunOutcome
    where
        O: RunObserver + ?Sized,
    {
        for (index, step) in recipe.steps().iter().enumerate() {
            observer.on_step(index, step.name());
            for (key, value) in step.config().iter() {
                observer.on_config(key, value);
            }

            let start = self.clock.now();
            let keep_going = step.execute(state);
            let elapsed = (self.clock.now() - start).to_std().unwrap_or_default();
            observer.on_elapsed(elapsed);

            debug!(index, step = step.name(), ?elapsed, keep_going, "step executed");

            if !keep_going {
                info!(index, step = step.name(), "recipe stopped early");
                return RunOutcome::Stopped {
                    index,
                    name: step.name().to_string(),
                };
            }
        }

        info!(steps = recipe.len(), "recipe completed");
        RunOutcome::Completed {
            steps: recipe.len(),
        }
    }
}

/// Runs `recipe` with the system clock.
pub fn run<S, O>(recipe: &Recipe<'_, S>, state: &mut S, observer: &mut O) -> RunOutcome
where
    O: RunObserver + ?Sized,
{
    Interpreter::new().run(recipe, state, observer)
}
