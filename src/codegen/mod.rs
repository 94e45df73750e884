//! Source generation from a recipe.
//!
//! Both generators reproduce what the [interpreter](crate::interpreter) does:
//! steps appear in recipe order, and a step that can stop the recipe is
//! followed by a guard that cleans up and leaves `main` early.

use crate::error::CodegenError;
use crate::step::{CodeLines, StepInfo};
use std::fs;
use std::path::Path;

mod functions;
mod inline;

pub use functions::{FunctionArtifacts, FunctionGenerator};
pub use inline::InlineGenerator;

/// The textual side of a domain state: how generated code declares, passes
/// and tears down the values that executors mutate at runtime.
pub trait EmitState {
    /// Headers pulled in by generated code, without the angle brackets.
    const INCLUDES: &'static [&'static str];
    /// Parameter list of every generated step function.
    const PARAMETERS: &'static str;
    /// Argument list used to call a generated step function.
    const ARGUMENTS: &'static str;

    /// Declarations placed at the top of `main`.
    fn setup_code(code: &mut CodeLines);

    /// Statements releasing the state before `main` returns.
    fn cleanup_code(code: &mut CodeLines);
}

/// Name of the generated function for the step at `index`.
///
/// Steps whose code never varies share one function named after the step;
/// every other instance gets its own, suffixed with its position.
pub fn function_name(name: &str, info: &StepInfo, index: usize) -> String {
    if info.always_same_code {
        name.to_string()
    } else {
        format!("{}_{}", name, index)
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CodegenError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| CodegenError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote generated code");
    Ok(())
}
