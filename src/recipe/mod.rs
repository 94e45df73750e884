use crate::error::RecipeError;
use crate::step::StepSchema;
use itertools::Itertools;
use std::fmt;

mod builder;
mod instance;
mod persist;

pub use builder::RecipeBuilder;
pub use instance::StepInstance;

/// An ordered list of configured steps. Order is execution order.
///
/// A recipe borrows its schemas from a [`Registry`](crate::registry::Registry)
/// and is consumed read-only by the interpreter and both code generators.
pub struct Recipe<'r, S> {
    steps: Vec<StepInstance<'r, S>>,
}

impl<S> Default for Recipe<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, S> Recipe<'r, S> {
    pub fn new() -> Self {
        Self {
            steps: Vec::with_capacity(64),
        }
    }

    /// Appends an unconfigured instance of `schema` and returns its index.
    pub fn add(&mut self, schema: &'r StepSchema<S>) -> usize {
        self.steps.push(StepInstance::new(schema));
        self.steps.len() - 1
    }

    /// Sets one configuration entry on the instance at `index`.
    pub fn configure(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: f32,
    ) -> Result<(), RecipeError> {
        let len = self.steps.len();
        let step = self
            .steps
            .get_mut(index)
            .ok_or(RecipeError::IndexOutOfRange { index, len })?;
        step.set_config(key, value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&StepInstance<'r, S>> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[StepInstance<'r, S>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<S> fmt::Display for Recipe<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().map(StepInstance::name).join(" -> "))
    }
}

impl<S> fmt::Debug for Recipe<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steps.iter()).finish()
    }
}
