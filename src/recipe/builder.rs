use super::Recipe;
use crate::error::RecipeError;
use crate::registry::Registry;

/// Assembles a [`Recipe`] by step name.
///
/// The registry is validated up front, so every schema the builder hands out
/// has all of its behaviors.
pub struct RecipeBuilder<'r, S> {
    registry: &'r Registry<S>,
    recipe: Recipe<'r, S>,
}

impl<'r, S> RecipeBuilder<'r, S> {
    pub fn new(registry: &'r Registry<S>) -> Result<Self, RecipeError> {
        registry.ensure_valid()?;
        Ok(Self {
            registry,
            recipe: Recipe::new(),
        })
    }

    /// Appends an unconfigured instance of the step registered as `name`.
    pub fn step(mut self, name: &str) -> Result<Self, RecipeError> {
        self.push(name)?;
        Ok(self)
    }

    /// Appends an instance of `name` with a single configuration entry.
    pub fn step_with(mut self, name: &str, key: &str, value: f32) -> Result<Self, RecipeError> {
        let index = self.push(name)?;
        self.recipe.configure(index, key, value)?;
        Ok(self)
    }

    /// Sets `key` on the most recently added step.
    pub fn with(mut self, key: &str, value: f32) -> Result<Self, RecipeError> {
        let index = self.recipe.len().checked_sub(1).ok_or(RecipeError::IndexOutOfRange {
            index: 0,
            len: 0,
        })?;
        self.recipe.configure(index, key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Recipe<'r, S> {
        self.recipe
    }

    fn push(&mut self, name: &str) -> Result<usize, RecipeError> {
        let schema = self
            .registry
            .find(name)
            .ok_or_else(|| RecipeError::UnknownStep(name.to_string()))?;
        Ok(self.recipe.add(schema))
    }
}
