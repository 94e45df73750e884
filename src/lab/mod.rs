//! Example domain: a buffer of numbers and an accumulator.
//!
//! Used to exercise the registry, the interpreter and both generators end to end.

use crate::codegen::EmitState;
use crate::step::CodeLines;

mod number;
mod steps;

pub use number::{float_literal, stream_text};
pub use steps::{MAX_VALUES, example_recipe, keys, names, register_default_steps};

/// State shared by the example steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub data: Vec<f32>,
    pub res: f32,
    /// Every line the steps printed, in order, formatted as the generated
    /// programs print it.
    pub transcript: Vec<String>,
    /// Also print transcript lines to stdout.
    pub echo: bool,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model that prints to stdout as the generated programs would.
    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    /// Runtime counterpart of [`EmitState::cleanup_code`].
    pub fn cleanup(&mut self) {
        self.data.clear();
        self.data.shrink_to_fit();
    }

    pub(crate) fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{}", line);
        }
        self.transcript.push(line);
    }
}

impl EmitState for Model {
    const INCLUDES: &'static [&'static str] = &["vector", "iostream", "limits"];
    const PARAMETERS: &'static str = "std::vector<float>&data, float&res";
    const ARGUMENTS: &'static str = "data, res";

    fn setup_code(code: &mut CodeLines) {
        code.push("std::vector<float> data;".to_string());
        code.push("auto res = .0f;".to_string());
    }

    fn cleanup_code(code: &mut CodeLines) {
        code.push("data.clear();".to_string());
        code.push("data.shrink_to_fit();".to_string());
    }
}
