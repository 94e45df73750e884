//! Plain-text recipe format.
//!
//! ```text
//! set_values
//! -->cnt:10.000000
//! sum
//! ```
//!
//! Each step is a line holding its name, followed by one `-->KEY:VALUE` line
//! per configuration entry in key order.

use super::Recipe;
use crate::error::RecipeError;
use crate::registry::Registry;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const CONFIG_PREFIX: &str = "-->";

impl<'r, S> Recipe<'r, S> {
    /// Writes the text rendering of the recipe to `writer`.
    ///
    /// Values keep six fractional digits, so the rendering is lossy: `1/3`
    /// reads back as `0.333333` and `1e-7` as `0`.
    pub fn persist<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for step in self.steps() {
            writeln!(writer, "{}", step.name())?;
            for (key, value) in step.config().iter() {
                writeln!(writer, "{CONFIG_PREFIX}{key}:{value:.6}")?;
            }
        }
        writer.flush()
    }

    /// Stores the recipe as a text file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RecipeError> {
        let path = path.as_ref();
        let file = fs::File::create(path)?;
        self.persist(BufWriter::new(file))?;
        tracing::debug!(path = %path.display(), steps = self.len(), "recipe stored");
        Ok(())
    }

    /// Rebuilds a recipe from its text rendering, resolving step names in `registry`.
    ///
    /// Values are taken as written. A recipe that went through [`Recipe::persist`]
    /// carries the six-digit rounding of its original values.
    pub fn parse(registry: &'r Registry<S>, text: &str) -> Result<Self, RecipeError> {
        registry.ensure_valid()?;

        let mut recipe = Recipe::new();
        for (number, raw_line) in text.lines().enumerate() {
            let line_number = number + 1;
            let line = raw_line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            if let Some(entry) = line.strip_prefix(CONFIG_PREFIX) {
                let (key, value) = entry.split_once(':').ok_or_else(|| RecipeError::Parse {
                    line: line_number,
                    message: format!("expected KEY:VALUE after '{CONFIG_PREFIX}', found '{entry}'"),
                })?;
                let value = value.trim().parse::<f32>().map_err(|e| RecipeError::Parse {
                    line: line_number,
                    message: format!("invalid value '{}' for key '{}': {}", value, key, e),
                })?;
                let index = recipe.len().checked_sub(1).ok_or_else(|| RecipeError::Parse {
                    line: line_number,
                    message: format!("configuration '{key}' appears before any step"),
                })?;
                recipe.configure(index, key, value)?;
            } else {
                let name = line.trim();
                let schema = registry.find(name).ok_or_else(|| RecipeError::Parse {
                    line: line_number,
                    message: format!("step '{name}' is not registered"),
                })?;
                recipe.add(schema);
            }
        }
        Ok(recipe)
    }

    /// Reads a recipe text file from `path`.
    pub fn load(registry: &'r Registry<S>, path: impl AsRef<Path>) -> Result<Self, RecipeError> {
        let text = fs::read_to_string(path)?;
        Self::parse(registry, &text)
    }
}
