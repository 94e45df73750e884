//! # recipe-lab - One Recipe, Three Projections
//!
//! **recipe-lab** models a recipe as an ordered list of configured steps over a
//! mutable domain state. The same recipe can be interpreted directly, or turned
//! into source code in one of two shapes, and all three agree on what happens,
//! including when a step stops the recipe early.
//!
//! ## Core Workflow
//!
//! 1.  **Register Steps**: Each [`StepSchema`](step::StepSchema) carries a describer,
//!     an executor and a code emitter. Register them once in a [`Registry`](registry::Registry).
//! 2.  **Assemble a Recipe**: Use [`RecipeBuilder`](recipe::RecipeBuilder) to resolve
//!     step names against a validated registry and attach per-step configuration.
//! 3.  **Consume It**: Hand the recipe to the [`Interpreter`](interpreter::Interpreter),
//!     the [`InlineGenerator`](codegen::InlineGenerator) or the
//!     [`FunctionGenerator`](codegen::FunctionGenerator).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recipe_lab::prelude::*;
//! use recipe_lab::lab::{self, Model};
//!
//! fn main() -> Result<()> {
//!     let mut registry = Registry::new();
//!     lab::register_default_steps(&mut registry);
//!
//!     let recipe = RecipeBuilder::new(&registry)?
//!         .step_with("set_values", "cnt", 10.0)?
//!         .step("sum")?
//!         .step_with("check", "ref", 45.0)?
//!         .step("print")?
//!         .build();
//!
//!     let mut model = Model::echoing();
//!     let mut report = RunReport::new();
//!     let outcome = Interpreter::new().run(&recipe, &mut model, &mut report);
//!     model.cleanup();
//!     println!("{:?} in {:?}", outcome, report.total_elapsed());
//!
//!     InlineGenerator::new().write(&recipe, "tmp/my_app.cpp")?;
//!     FunctionGenerator::new("my_header.h").write(&recipe, "tmp/my_app_2.cpp", "tmp/my_header.h")?;
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod error;
pub mod interpreter;
pub mod lab;
pub mod prelude;
pub mod recipe;
pub mod registry;
pub mod step;

pub use codegen::{FunctionGenerator, InlineGenerator};
pub use interpreter::{Interpreter, run};
pub use recipe::{Recipe, RecipeBuilder};
pub use registry::Registry;
