//! Tests for the example domain: number rendering and step bounds.
mod common;
use common::*;
use pretty_assertions::assert_eq;
use recipe_lab::lab::{self, MAX_VALUES, Model, float_literal, keys, names, stream_text};
use recipe_lab::prelude::*;

#[test]
fn test_stream_text_matches_default_iostream_formatting() {
    let cases: [(f32, &str); 16] = [
        (0.0, "0"),
        (-0.0, "-0"),
        (42.0, "42"),
        (45.0, "45"),
        (-3.5, "-3.5"),
        (1.0 / 3.0, "0.333333"),
        (2.0 / 3.0, "0.666667"),
        (0.0001, "0.0001"),
        (0.00001, "1e-05"),
        (1e-7, "1e-07"),
        (123456.0, "123456"),
        (999999.0, "999999"),
        (1234567.0, "1.23457e+06"),
        (1e20, "1e+20"),
        (f32::INFINITY, "inf"),
        (f32::NEG_INFINITY, "-inf"),
    ];

    for (value, expected) in cases {
        assert_eq!(stream_text(value), expected, "rendering {:?}", value);
    }
    assert_eq!(stream_text(f32::NAN), "nan");
}

#[test]
fn test_float_literals_round_trip() {
    let values = [0.0f32, 45.0, 1e-7, 1.0 / 3.0, -2.5, 1234567.0, 1e20, f32::MIN_POSITIVE];

    for value in values {
        let literal = float_literal(value);
        let digits = literal
            .strip_suffix('f')
            .unwrap_or_else(|| panic!("'{}' should be a float literal", literal));
        assert_eq!(digits.parse::<f32>().unwrap(), value, "literal '{}'", literal);
    }

    assert_eq!(float_literal(45.0), "45.0f");
    assert_eq!(float_literal(1e-7), "1e-7f");
    assert_eq!(
        float_literal(f32::NEG_INFINITY),
        "-std::numeric_limits<float>::infinity()"
    );
    assert_eq!(float_literal(f32::NAN), "std::numeric_limits<float>::quiet_NaN()");
}

#[test]
fn test_check_compares_against_exact_reference() {
    let registry = lab_registry();
    let recipe = RecipeBuilder::new(&registry)
        .unwrap()
        .step(names::RESET)
        .unwrap()
        .step_with(names::CHECK, keys::REF, 1e-7)
        .unwrap()
        .step(names::HELLO_WORLD)
        .unwrap()
        .build();

    let mut model = Model::new();
    let outcome = Interpreter::new().run(&recipe, &mut model, &mut ());
    assert_eq!(outcome.executed_steps(), 2);
    assert!(model.transcript.is_empty());

    // The generated guard must see the same non-zero reference.
    let code = recipe.get(1).unwrap().emit();
    assert!(code.lines.contains(&"const auto expected_value = 1e-7f;".to_string()));
}

#[test]
fn test_printed_numbers_use_stream_formatting() {
    let registry = lab_registry();
    let recipe = RecipeBuilder::new(&registry)
        .unwrap()
        .step_with(names::PRINT_NUMBER, keys::NUM, 1.0 / 3.0)
        .unwrap()
        .step_with(names::PRINT_NUMBER, keys::NUM, 1234567.0)
        .unwrap()
        .step_with(names::SET_VALUES, keys::CNT, 4.0)
        .unwrap()
        .step(names::PRODUCT)
        .unwrap()
        .step(names::PRINT)
        .unwrap()
        .build();

    let mut model = Model::new();
    Interpreter::new().run(&recipe, &mut model, &mut ());
    assert_eq!(
        model.transcript,
        vec!["Number: 0.333333", "Number: 1.23457e+06", "Result: 0"]
    );

    let code = recipe.get(0).unwrap().emit();
    assert_eq!(
        code.lines,
        vec![r#"std::cout << "Number: " << 0.33333334f << "\n";"#.to_string()]
    );
}

#[test]
fn test_set_values_count_is_clamped() {
    let registry = lab_registry();
    let recipe = RecipeBuilder::new(&registry)
        .unwrap()
        .step_with(names::SET_VALUES, keys::CNT, 1e12)
        .unwrap()
        .build();

    let mut model = Model::new();
    Interpreter::new().run(&recipe, &mut model, &mut ());
    assert_eq!(model.data.len(), MAX_VALUES);

    let code = recipe.get(0).unwrap().emit();
    assert_eq!(code.lines[0], format!("const auto cnt = {};", MAX_VALUES));
}

#[test]
fn test_set_values_negative_count_clears() {
    let registry = lab_registry();
    let recipe = RecipeBuilder::new(&registry)
        .unwrap()
        .step_with(names::SET_VALUES, keys::CNT, 3.0)
        .unwrap()
        .step_with(names::SET_VALUES, keys::CNT, -5.0)
        .unwrap()
        .build();

    let mut model = Model::new();
    Interpreter::new().run(&recipe, &mut model, &mut ());
    assert!(model.data.is_empty());
    assert_eq!(recipe.get(1).unwrap().emit().lines, vec!["data.clear();".to_string()]);
}

#[test]
fn test_print_data_lists_every_value() {
    let registry = lab_registry();
    let recipe = RecipeBuilder::new(&registry)
        .unwrap()
        .step_with(names::SET_VALUES, keys::CNT, 3.0)
        .unwrap()
        .step(names::PRINT_DATA)
        .unwrap()
        .build();

    let mut model = Model::new();
    Interpreter::new().run(&recipe, &mut model, &mut ());
    assert_eq!(model.transcript, vec!["Data:", "0", "1", "2"]);
    assert_eq!(model.data, vec![0.0, 1.0, 2.0]);
}

#[test]
fn test_example_recipe_uses_default_steps() {
    let registry = lab_registry();
    let recipe = lab::example_recipe(&registry).unwrap();
    assert!(recipe.steps().iter().all(|step| registry.find(step.name()).is_some()));
}
