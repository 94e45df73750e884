//! Prelude module for convenient imports
//!
//! Re-exports the types needed to register steps, assemble a recipe and
//! consume it.
//!
//! # Example
//!
//! ```rust,no_run
//! use recipe_lab::prelude::*;
//! use recipe_lab::lab::{self, Model};
//!
//! # fn run_example() -> Result<()> {
//! let mut registry = Registry::new();
//! lab::register_default_steps(&mut registry);
//! let recipe = Recipe::load(&registry, "path/to/test.recipe")?;
//!
//! let mut model = Model::new();
//! let outcome = Interpreter::new().run(&recipe, &mut model, &mut ());
//! println!("{:?}: {:?}", outcome, model.transcript);
//! # Ok(())
//! # }
//! ```

// Step model
pub use crate::step::{CodeInfo, CodeLines, ConfigMap, EmittedCode, StepInfo, StepSchema};

// Assembly
pub use crate::recipe::{Recipe, RecipeBuilder, StepInstance};
pub use crate::registry::Registry;

// Consumers
pub use crate::codegen::{EmitState, FunctionArtifacts, FunctionGenerator, InlineGenerator};
pub use crate::interpreter::{
    Clock, Interpreter, ObserverFns, RunObserver, RunOutcome, RunReport, SystemClock,
};

// Error types
pub use crate::error::{CodegenError, RecipeError, RegistryError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
