use thiserror::Error;

/// Errors reported when a registry holds an incomplete step schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Step #{index} ('{name}') is missing its name, describer, executor or emitter")]
    InvalidStep { index: usize, name: String },
}

/// Errors that can occur while assembling, loading or storing a recipe.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Refusing to assemble a recipe from an invalid registry: {0}")]
    InvalidRegistry(#[from] RegistryError),

    #[error("Step '{0}' is not registered")]
    UnknownStep(String),

    #[error("Step index {index} is out of range for a recipe of {len} steps")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed recipe at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Recipe I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while rendering or writing generated source.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to format generated code: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Could not write generated code to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
