use super::Model;
use super::number::{float_literal, stream_text};
use crate::error::RecipeError;
use crate::recipe::{Recipe, RecipeBuilder};
use crate::registry::Registry;
use crate::step::{ConfigMap, EmittedCode, StepInfo, StepSchema};

/// Registered step names.
pub mod names {
    pub const PRINT_NUMBER: &str = "print_number";
    pub const HELLO_WORLD: &str = "hello_world";
    pub const SET_VALUES: &str = "set_values";
    pub const SUM: &str = "sum";
    pub const PRODUCT: &str = "product";
    pub const PRINT: &str = "print";
    pub const PRINT_DATA: &str = "print_data";
    pub const RESET: &str = "reset";
    pub const CHECK: &str = "check";
    pub const CHECK_DATA: &str = "check_data";
}

/// Configuration keys read by the steps.
pub mod keys {
    /// `print_number`: the number to print.
    pub const NUM: &str = "num";
    /// `set_values`: how many values to fill the buffer with, clamped to
    /// [`MAX_VALUES`](super::MAX_VALUES).
    pub const CNT: &str = "cnt";
    /// `check`: the value the accumulator must equal.
    pub const REF: &str = "ref";
}

fn hello_world(_: &ConfigMap, m: &mut Model) -> bool {
    m.say("Hello World!");
    true
}

fn hello_world_code(_: &ConfigMap) -> EmittedCode {
    EmittedCode::new().line(r#"std::cout << "Hello World!\n";"#)
}

fn print_number(conf: &ConfigMap, m: &mut Model) -> bool {
    let value = conf.get_or(keys::NUM, 0.0);
    m.say(format!("Number: {}", stream_text(value)));
    true
}

fn print_number_code(conf: &ConfigMap) -> EmittedCode {
    let value = conf.get_or(keys::NUM, 0.0);
    EmittedCode::new().line(format!(
        r#"std::cout << "Number: " << {} << "\n";"#,
        float_literal(value)
    ))
}

/// Largest buffer `set_values` fills. Keeps the generated `int` loop in range.
pub const MAX_VALUES: usize = 1 << 20;

// Shared by executor and emitter so both agree on the clamped count.
fn value_count(conf: &ConfigMap) -> usize {
    let requested = conf.get_or(keys::CNT, 0.0);
    let cnt = (requested as usize).min(MAX_VALUES);
    if requested > MAX_VALUES as f32 {
        tracing::warn!(requested, cnt, "set_values count clamped");
    }
    cnt
}

fn set_values(conf: &ConfigMap, m: &mut Model) -> bool {
    let cnt = value_count(conf);
    m.data = (0..cnt).map(|i| i as f32).collect();
    true
}

fn set_values_code(conf: &ConfigMap) -> EmittedCode {
    let cnt = value_count(conf);
    if cnt == 0 {
        return EmittedCode::new().line("data.clear();");
    }
    EmittedCode::new()
        .line(format!("const auto cnt = {};", cnt))
        .line("data.resize(cnt);")
        .line("for (auto i = 0; i < cnt; ++i) {data[i] = static_cast<float>(i);}")
        .scoped()
}

fn sum(_: &ConfigMap, m: &mut Model) -> bool {
    m.res = m.data.iter().sum();
    true
}

fn sum_code(_: &ConfigMap) -> EmittedCode {
    EmittedCode::new()
        .line("res = 0.0f;")
        .line("for (const auto&v:data) {res += v;}")
}

fn product(_: &ConfigMap, m: &mut Model) -> bool {
    m.res = m.data.iter().product();
    true
}

fn product_code(_: &ConfigMap) -> EmittedCode {
    EmittedCode::new()
        .line("res = 1.0f;")
        .line("for (const auto&v:data) {res *= v;}")
}

fn print(_: &ConfigMap, m: &mut Model) -> bool {
    let res = m.res;
    m.say(format!("Result: {}", stream_text(res)));
    true
}

fn print_code(_: &ConfigMap) -> EmittedCode {
    EmittedCode::new().line(r#"std::cout << "Result: " << res << "\n";"#)
}

fn print_data(_: &ConfigMap, m: &mut Model) -> bool {
    let lines: Vec<String> = m.data.iter().copied().map(stream_text).collect();
    m.say("Data:");
    for line in lines {
        m.say(line);
    }
    true
}

fn print_data_code(_: &ConfigMap) -> EmittedCode {
    EmittedCode::new()
        .line(r#"std::cout << "Data:\n";"#)
        .line("for (const auto& v : data)")
        .line("\tstd::cout << v << \"\\n\";")
}

fn reset(_: &ConfigMap, m: &mut Model) -> bool {
    m.data.clear();
    m.res = 0.0;
    true
}

fn reset_code(_: &ConfigMap) -> EmittedCode {
    EmittedCode::new().line("data.clear();").line("res = 0.0f;")
}

// Exact comparison: reference values are chosen to be representable.
fn check(conf: &ConfigMap, m: &mut Model) -> bool {
    conf.get_or(keys::REF, 0.0) == m.res
}

fn check_code(conf: &ConfigMap) -> EmittedCode {
    let reference = conf.get_or(keys::REF, 0.0);
    EmittedCode::new()
        .line(format!("const auto expected_value = {};", float_literal(reference)))
        .line("const auto res_ok = expected_value == res;")
        .scoped()
}

fn check_data(_: &ConfigMap, m: &mut Model) -> bool {
    !m.data.is_empty()
}

fn check_data_code(_: &ConfigMap) -> EmittedCode {
    EmittedCode::new()
        .line("const auto populated = !data.empty();")
        .scoped()
}

macro_rules! register_steps {
    ($registry:expr; $( ($name:expr, $info:expr, $execute:path, $emit:path) ),* $(,)?) => {
        $(
            $registry.register(
                StepSchema::builder($name)
                    .info($info)
                    .execute($execute)
                    .emit($emit)
                    .build(),
            );
        )*
    };
}

/// Registers every example step.
pub fn register_default_steps(registry: &mut Registry<Model>) {
    register_steps! { registry;
        (names::PRINT_NUMBER, StepInfo::varying(), print_number, print_number_code),
        (names::HELLO_WORLD, StepInfo::always_same_code(), hello_world, hello_world_code),
        (names::SET_VALUES, StepInfo::varying(), set_values, set_values_code),
        (names::SUM, StepInfo::always_same_code(), sum, sum_code),
        (names::PRODUCT, StepInfo::always_same_code(), product, product_code),
        (names::PRINT, StepInfo::always_same_code(), print, print_code),
        (names::PRINT_DATA, StepInfo::always_same_code(), print_data, print_data_code),
        (names::RESET, StepInfo::always_same_code(), reset, reset_code),
        (names::CHECK, StepInfo::varying().stops_on("res_ok"), check, check_code),
        (names::CHECK_DATA, StepInfo::always_same_code().stops_on("populated"), check_data, check_data_code),
    }
}

/// The demonstration recipe: fill, sum and check ten values, then take the
/// product of twenty.
pub fn example_recipe(registry: &Registry<Model>) -> Result<Recipe<'_, Model>, RecipeError> {
    Ok(RecipeBuilder::new(registry)?
        .step(names::HELLO_WORLD)?
        .step_with(names::PRINT_NUMBER, keys::NUM, 42.0)?
        .step_with(names::SET_VALUES, keys::CNT, 0.0)?
        .step_with(names::SET_VALUES, keys::CNT, 10.0)?
        .step(names::CHECK_DATA)?
        .step(names::SUM)?
        .step(names::PRINT)?
        .step_with(names::CHECK, keys::REF, 45.0)?
        .step(names::RESET)?
        .step_with(names::SET_VALUES, keys::CNT, 20.0)?
        .step(names::CHECK_DATA)?
        .step(names::PRINT_DATA)?
        .step(names::PRODUCT)?
        .step(names::PRINT)?
        .build())
}
