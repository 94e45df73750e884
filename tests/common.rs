//! Common test utilities: registries, clocks and a small test domain.
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use recipe_lab::lab::{self, Model};
use recipe_lab::prelude::*;
use std::cell::Cell;

/// Registry holding every example step.
#[allow(dead_code)]
pub fn lab_registry() -> Registry<Model> {
    let mut registry = Registry::new();
    lab::register_default_steps(&mut registry);
    registry
}

/// A clock frozen at Sunday, 2026-10-18 12:00:00 UTC.
#[allow(dead_code)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }
}

/// A clock that advances by one millisecond every time it is read.
#[allow(dead_code)]
#[derive(Default)]
pub struct TickClock {
    reads: Cell<i64>,
}

impl Clock for TickClock {
    fn now(&self) -> DateTime<Utc> {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        FixedClock.now() + TimeDelta::milliseconds(reads)
    }
}

/// Minimal domain: a list of marks left by executed steps.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct Tally {
    pub marks: Vec<f32>,
}

impl EmitState for Tally {
    const INCLUDES: &'static [&'static str] = &["vector"];
    const PARAMETERS: &'static str = "std::vector<float>&marks";
    const ARGUMENTS: &'static str = "marks";

    fn setup_code(code: &mut CodeLines) {
        code.push("std::vector<float> marks;".to_string());
    }

    fn cleanup_code(code: &mut CodeLines) {
        code.push("marks.clear();".to_string());
    }
}

/// Steps over [`Tally`]:
/// - `mark` appends its `id`,
/// - `twice` doubles every mark,
/// - `halt` stops the recipe unless its `go` entry is non-zero.
#[allow(dead_code)]
pub fn tally_registry() -> Registry<Tally> {
    let mut registry = Registry::new();
    registry.register(
        StepSchema::builder("mark")
            .info(StepInfo::varying())
            .execute(|conf: &ConfigMap, t: &mut Tally| {
                t.marks.push(conf.get_or("id", 0.0));
                true
            })
            .emit(|conf: &ConfigMap| {
                EmittedCode::new().line(format!("marks.push_back({});", conf.get_or("id", 0.0)))
            })
            .build(),
    );
    registry.register(
        StepSchema::builder("twice")
            .info(StepInfo::always_same_code())
            .execute(|_: &ConfigMap, t: &mut Tally| {
                t.marks.iter_mut().for_each(|m| *m *= 2.0);
                true
            })
            .emit(|_: &ConfigMap| EmittedCode::new().line("for (auto& m : marks) {m *= 2;}"))
            .build(),
    );
    registry.register(
        StepSchema::builder("halt")
            .info(StepInfo::varying().stops_on("go"))
            .execute(|conf: &ConfigMap, _: &mut Tally| conf.get_or("go", 0.0) != 0.0)
            .emit(|conf: &ConfigMap| {
                EmittedCode::new()
                    .line(format!("const auto go = {} != 0;", conf.get_or("go", 0.0)))
                    .scoped()
            })
            .build(),
    );
    registry
}

/// A recipe over [`Tally`] marking `ids` in order.
#[allow(dead_code)]
pub fn marks<'r>(registry: &'r Registry<Tally>, ids: &[f32]) -> Recipe<'r, Tally> {
    let mut builder = RecipeBuilder::new(registry).unwrap();
    for id in ids {
        builder = builder.step_with("mark", "id", *id).unwrap();
    }
    builder.build()
}
