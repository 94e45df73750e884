use crate::error::RegistryError;
use crate::step::StepSchema;

/// Append-only catalog of step schemas over the domain state `S`.
///
/// Names are not checked for uniqueness. [`Registry::find`] returns the first
/// schema registered under a name, so a later schema reusing that name can
/// only be reached through [`Registry::get`].
pub struct Registry<S> {
    steps: Vec<StepSchema<S>>,
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Registry<S> {
    pub fn new() -> Self {
        Self {
            steps: Vec::with_capacity(64),
        }
    }

    /// Appends a schema and returns its index.
    pub fn register(&mut self, schema: StepSchema<S>) -> usize {
        self.steps.push(schema);
        self.steps.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&StepSchema<S>> {
        self.steps.get(index)
    }

    /// First schema registered under `name`.
    pub fn find(&self, name: &str) -> Option<&StepSchema<S>> {
        self.steps.iter().find(|step| step.name() == name)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepSchema<S>> {
        self.steps.iter()
    }

    /// Returns `true` if every registered schema is complete.
    pub fn validate(&self) -> bool {
        self.steps.iter().all(StepSchema::is_complete)
    }

    /// Like [`Registry::validate`], but names the first incomplete schema.
    pub fn ensure_valid(&self) -> Result<(), RegistryError> {
        match self.steps.iter().position(|step| !step.is_complete()) {
            Some(index) => Err(RegistryError::InvalidStep {
                index,
                name: self.steps[index].name().to_string(),
            }),
            None => Ok(()),
        }
    }
}
