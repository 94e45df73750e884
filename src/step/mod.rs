//! Step schemas: the named building blocks a recipe is made of.
//!
//! A schema bundles three behaviors that must describe the same operation:
//! the describer reports static facts about the step, the executor performs it
//! against the domain state, and the emitter produces the source lines that do
//! the same thing once compiled.

use serde::{Deserialize, Serialize};
use std::fmt;

mod config;

pub use config::ConfigMap;

/// Source lines produced by an emitter, without indentation.
pub type CodeLines = Vec<String>;

/// Facts about a block of emitted code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInfo {
    /// The lines declare locals and must be wrapped in their own block.
    pub needs_scope: bool,
}

/// Static metadata about a step schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// The emitted code does not depend on the instance's configuration.
    pub always_same_code: bool,
    /// Name of the boolean the emitted code declares to signal "keep going".
    /// A step with a stop variable can abort the recipe.
    pub stop_variable: Option<String>,
}

impl StepInfo {
    /// Metadata for a step whose code changes with its configuration.
    pub fn varying() -> Self {
        Self::default()
    }

    /// Metadata for a step whose code is identical for every configuration.
    pub fn always_same_code() -> Self {
        Self {
            always_same_code: true,
            stop_variable: None,
        }
    }

    /// Marks the step as able to abort the recipe through `variable`.
    pub fn stops_on(mut self, variable: impl Into<String>) -> Self {
        self.stop_variable = Some(variable.into());
        self
    }

    pub fn returns_stop(&self) -> bool {
        self.stop_variable.is_some()
    }
}

/// Output of a code emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmittedCode {
    pub lines: CodeLines,
    pub info: CodeInfo,
}

impl EmittedCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Requests a dedicated block around the lines.
    pub fn scoped(mut self) -> Self {
        self.info.needs_scope = true;
        self
    }
}

pub type Describer = Box<dyn Fn() -> StepInfo + Send + Sync>;
pub type Executor<S> = Box<dyn Fn(&ConfigMap, &mut S) -> bool + Send + Sync>;
pub type Emitter = Box<dyn Fn(&ConfigMap) -> EmittedCode + Send + Sync>;

/// A named, reusable operation over the domain state `S`.
///
/// Behaviors are optional only so that an incomplete schema can be detected
/// by [`Registry::validate`](crate::registry::Registry::validate); a recipe is
/// never assembled from a registry that fails validation.
pub struct StepSchema<S> {
    name: String,
    describer: Option<Describer>,
    executor: Option<Executor<S>>,
    emitter: Option<Emitter>,
}

impl<S> StepSchema<S> {
    pub fn builder(name: impl Into<String>) -> StepSchemaBuilder<S> {
        StepSchemaBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the schema has a name and all three behaviors.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && self.describer.is_some()
            && self.executor.is_some()
            && self.emitter.is_some()
    }

    pub fn info(&self) -> StepInfo {
        self.describer.as_ref().map(|describe| describe()).unwrap_or_default()
    }

    /// Runs the step. Returns `false` when the recipe must stop here.
    ///
    /// A schema without an executor stops the recipe.
    pub fn execute(&self, config: &ConfigMap, state: &mut S) -> bool {
        match &self.executor {
            Some(execute) => execute(config, state),
            None => {
                tracing::error!(step = %self.name, "step has no executor, stopping");
                false
            }
        }
    }

    pub fn emit(&self, config: &ConfigMap) -> EmittedCode {
        self.emitter
            .as_ref()
            .map(|emit| emit(config))
            .unwrap_or_default()
    }
}

impl<S> fmt::Debug for StepSchema<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSchema")
            .field("name", &self.name)
            .field("describer", &self.describer.is_some())
            .field("executor", &self.executor.is_some())
            .field("emitter", &self.emitter.is_some())
            .finish()
    }
}

pub struct StepSchemaBuilder<S> {
    schema: StepSchema<S>,
}

impl<S> StepSchemaBuilder<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: StepSchema {
                name: name.into(),
                describer: None,
                executor: None,
                emitter: None,
            },
        }
    }

    pub fn describe(mut self, describer: impl Fn() -> StepInfo + Send + Sync + 'static) -> Self {
        self.schema.describer = Some(Box::new(describer));
        self
    }

    /// Shorthand for a describer that always reports `info`.
    pub fn info(self, info: StepInfo) -> Self {
        self.describe(move || info.clone())
    }

    pub fn execute(
        mut self,
        executor: impl Fn(&ConfigMap, &mut S) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.schema.executor = Some(Box::new(executor));
        self
    }

    pub fn emit(mut self, emitter: impl Fn(&ConfigMap) -> EmittedCode + Send + Sync + 'static) -> Self {
        self.schema.emitter = Some(Box::new(emitter));
        self
    }

    pub fn build(self) -> StepSchema<S> {
        self.schema
    }
}
