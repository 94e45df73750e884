use super::{EmitState, write_artifact};
use crate::error::CodegenError;
use crate::interpreter::{Clock, SystemClock};
use crate::recipe::Recipe;
use crate::step::{CodeLines, EmittedCode};
use std::fmt::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Emits the whole recipe as a single `main` with every step inlined.
#[derive(Debug, Clone, Default)]
pub struct InlineGenerator<C = SystemClock> {
    clock: C,
}

impl InlineGenerator<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> InlineGenerator<C> {
    /// Uses `clock` for the timestamp comment heading the file.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn generate<S: EmitState>(&self, recipe: &Recipe<'_, S>) -> Result<String, CodegenError> {
        let mut out = String::new();

        writeln!(out, "// {}", self.clock.now().format(TIMESTAMP_FORMAT))?;
        writeln!(out)?;
        for include in S::INCLUDES {
            writeln!(out, "#include<{}>", include)?;
        }
        writeln!(out)?;
        writeln!(out, "int main() {{")?;
        writeln!(out)?;

        let mut setup = CodeLines::new();
        S::setup_code(&mut setup);
        for line in &setup {
            writeln!(out, "\t{}", line)?;
        }

        let mut cleanup = vec!["// cleanup".to_string()];
        S::cleanup_code(&mut cleanup);

        for step in recipe.steps() {
            let EmittedCode { lines, info } = step.emit();

            writeln!(out)?;
            if info.needs_scope {
                writeln!(out, "\t{{")?;
            }
            let tabs = if info.needs_scope { "\t\t" } else { "\t" };

            writeln!(out, "{}// {}", tabs, step.name())?;
            for (key, value) in step.config().iter() {
                writeln!(out, "{}// {} : {}", tabs, key, value)?;
            }
            for line in &lines {
                writeln!(out, "{}{}", tabs, line)?;
            }

            // Mirrors the interpreter stopping after this step.
            if let Some(variable) = step.info().stop_variable {
                writeln!(out, "{}if (!{}) {{", tabs, variable)?;
                for line in &cleanup {
                    writeln!(out, "{}\t{}", tabs, line)?;
                }
                writeln!(out, "{}\treturn 0;", tabs)?;
                writeln!(out, "{}}}", tabs)?;
            }

            if info.needs_scope {
                writeln!(out, "\t}}")?;
            }
        }

        writeln!(out)?;
        for line in &cleanup {
            writeln!(out, "\t{}", line)?;
        }
        writeln!(out)?;
        writeln!(out, "\treturn 0;")?;
        writeln!(out, "}}")?;

        Ok(out)
    }

    /// Generates the script and writes it to `path`.
    pub fn write<S: EmitState>(
        &self,
        recipe: &Recipe<'_, S>,
        path: impl AsRef<Path>,
    ) -> Result<(), CodegenError> {
        let source = self.generate(recipe)?;
        write_artifact(path.as_ref(), &source)
    }
}
