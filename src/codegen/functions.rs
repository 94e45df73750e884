use super::{EmitState, function_name, write_artifact};
use crate::error::CodegenError;
use crate::recipe::Recipe;
use crate::step::CodeLines;
use ahash::AHashSet;
use std::fmt::Write;
use std::path::Path;
use tracing::debug;

const CLEANUP_FUNCTION: &str = "_cleanup";

/// The two files produced by [`FunctionGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArtifacts {
    /// Header declaring one function per distinct step body plus `_cleanup`.
    pub library: String,
    /// `main` calling the library functions in recipe order.
    pub driver: String,
}

/// Emits each step as a function in a header and a driver that calls them.
///
/// Instances of a step flagged `always_same_code` share a single function.
#[derive(Debug, Clone)]
pub struct FunctionGenerator {
    header_name: String,
}

impl Default for FunctionGenerator {
    fn default() -> Self {
        Self::new("my_header.h")
    }
}

impl FunctionGenerator {
    /// `header_name` is the path the driver uses to include the library.
    pub fn new(header_name: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
        }
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn generate<S: EmitState>(
        &self,
        recipe: &Recipe<'_, S>,
    ) -> Result<FunctionArtifacts, CodegenError> {
        Ok(FunctionArtifacts {
            library: self.library(recipe)?,
            driver: self.driver(recipe)?,
        })
    }

    fn library<S: EmitState>(&self, recipe: &Recipe<'_, S>) -> Result<String, CodegenError> {
        let mut out = String::new();

        writeln!(out, "#pragma once")?;
        for include in S::INCLUDES {
            writeln!(out, "#include<{}>", include)?;
        }
        writeln!(out)?;

        let mut emitted: AHashSet<String> = AHashSet::new();
        for (index, step) in recipe.steps().iter().enumerate() {
            let info = step.info();
            let name = function_name(step.name(), &info, index);
            if emitted.contains(&name) {
                debug!(index, function = %name, "reusing generated function");
                continue;
            }

            let return_type = if info.returns_stop() { "auto" } else { "void" };
            writeln!(out, "inline {} {}({})", return_type, name, S::PARAMETERS)?;
            writeln!(out, "{{")?;
            for (key, value) in step.config().iter() {
                writeln!(out, "\t// {} : {}", key, value)?;
            }
            for line in &step.emit().lines {
                writeln!(out, "\t{}", line)?;
            }
            if let Some(variable) = &info.stop_variable {
                writeln!(out, "\treturn {};", variable)?;
            }
            writeln!(out, "}}")?;
            writeln!(out)?;

            emitted.insert(name);
        }

        let mut cleanup = CodeLines::new();
        S::cleanup_code(&mut cleanup);
        writeln!(out, "inline void {}({})", CLEANUP_FUNCTION, S::PARAMETERS)?;
        writeln!(out, "{{")?;
        for line in &cleanup {
            writeln!(out, "\t{}", line)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        Ok(out)
    }

    fn driver<S: EmitState>(&self, recipe: &Recipe<'_, S>) -> Result<String, CodegenError> {
        let mut out = String::new();

        writeln!(out, "#include \"{}\"", self.header_name)?;
        writeln!(out)?;
        writeln!(out, "int main() {{")?;
        writeln!(out)?;

        let mut setup = CodeLines::new();
        S::setup_code(&mut setup);
        for line in &setup {
            writeln!(out, "\t{}", line)?;
        }

        for (index, step) in recipe.steps().iter().enumerate() {
            let info = step.info();
            let call = format!(
                "{}({})",
                function_name(step.name(), &info, index),
                S::ARGUMENTS
            );

            writeln!(out)?;
            if info.returns_stop() {
                writeln!(out, "\tif (!{}) {{", call)?;
                writeln!(out, "\t\t{}({});", CLEANUP_FUNCTION, S::ARGUMENTS)?;
                writeln!(out, "\t\treturn 0;")?;
                writeln!(out, "\t}}")?;
            } else {
                writeln!(out, "\t{};", call)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "\t{}({});", CLEANUP_FUNCTION, S::ARGUMENTS)?;
        writeln!(out)?;
        writeln!(out, "\treturn 0;")?;
        writeln!(out, "}}")?;

        Ok(out)
    }

    /// Generates both artifacts and writes them to `driver_path` and `library_path`.
    pub fn write<S: EmitState>(
        &self,
        recipe: &Recipe<'_, S>,
        driver_path: impl AsRef<Path>,
        library_path: impl AsRef<Path>,
    ) -> Result<FunctionArtifacts, CodegenError> {
        let artifacts = self.generate(recipe)?;
        write_artifact(library_path.as_ref(), &artifacts.library)?;
        write_artifact(driver_path.as_ref(), &artifacts.driver)?;
        Ok(artifacts)
    }
}
