use crate::step::{ConfigMap, EmittedCode, StepInfo, StepSchema};
use std::fmt;

/// A step schema bound to the configuration of one use in a recipe.
pub struct StepInstance<'r, S> {
    schema: &'r StepSchema<S>,
    config: ConfigMap,
}

impl<'r, S> StepInstance<'r, S> {
    pub(crate) fn new(schema: &'r StepSchema<S>) -> Self {
        Self {
            schema,
            config: ConfigMap::new(),
        }
    }

    pub fn schema(&self) -> &'r StepSchema<S> {
        self.schema
    }

    pub fn name(&self) -> &'r str {
        self.schema.name()
    }

    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    pub fn info(&self) -> StepInfo {
        self.schema.info()
    }

    pub fn execute(&self, state: &mut S) -> bool {
        self.schema.execute(&self.config, state)
    }

    pub fn emit(&self) -> EmittedCode {
        self.schema.emit(&self.config)
    }

    pub(crate) fn set_config(&mut self, key: impl Into<String>, value: f32) {
        self.config.set(key, value);
    }
}

impl<S> fmt::Debug for StepInstance<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepInstance")
            .field("name", &self.name())
            .field("config", &self.config)
            .finish()
    }
}
