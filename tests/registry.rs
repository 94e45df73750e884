//! Tests for step registration, lookup and validation.
mod common;
use common::*;
use recipe_lab::lab::Model;
use recipe_lab::prelude::*;

fn complete(name: &str) -> StepSchema<Tally> {
    StepSchema::builder(name)
        .info(StepInfo::varying())
        .execute(|_: &ConfigMap, _: &mut Tally| true)
        .emit(|_: &ConfigMap| EmittedCode::new())
        .build()
}

#[test]
fn test_complete_registry_validates() {
    let registry = lab_registry();
    assert_eq!(registry.len(), 10);
    assert!(registry.validate());
    assert!(registry.ensure_valid().is_ok());
}

#[test]
fn test_empty_registry_validates() {
    let registry: Registry<Model> = Registry::new();
    assert!(registry.is_empty());
    assert!(registry.validate());
}

#[test]
fn test_registry_rejects_incomplete_schemas() {
    let incomplete: Vec<StepSchema<Tally>> = vec![
        StepSchema::builder("")
            .info(StepInfo::varying())
            .execute(|_: &ConfigMap, _: &mut Tally| true)
            .emit(|_: &ConfigMap| EmittedCode::new())
            .build(),
        StepSchema::builder("no_describer")
            .execute(|_: &ConfigMap, _: &mut Tally| true)
            .emit(|_: &ConfigMap| EmittedCode::new())
            .build(),
        StepSchema::builder("no_executor")
            .info(StepInfo::varying())
            .emit(|_: &ConfigMap| EmittedCode::new())
            .build(),
        StepSchema::builder("no_emitter")
            .info(StepInfo::varying())
            .execute(|_: &ConfigMap, _: &mut Tally| true)
            .build(),
    ];

    for schema in incomplete {
        let name = schema.name().to_string();
        let mut registry = Registry::new();
        registry.register(complete("fine"));
        registry.register(schema);

        assert!(!registry.validate(), "'{}' should invalidate the registry", name);
        assert_eq!(
            registry.ensure_valid(),
            Err(RegistryError::InvalidStep { index: 1, name })
        );
    }
}

#[test]
fn test_lookup_by_index_and_name() {
    let mut registry = Registry::new();
    assert_eq!(registry.register(complete("first")), 0);
    assert_eq!(registry.register(complete("second")), 1);

    assert_eq!(registry.get(1).map(StepSchema::name), Some("second"));
    assert!(registry.get(2).is_none());
    assert_eq!(registry.find("first").map(StepSchema::name), Some("first"));
    assert!(registry.find("third").is_none());
}

#[test]
fn test_duplicate_names_resolve_to_first_registration() {
    let mut registry = Registry::new();
    registry.register(
        StepSchema::builder("dup")
            .info(StepInfo::varying())
            .execute(|_: &ConfigMap, t: &mut Tally| {
                t.marks.push(1.0);
                true
            })
            .emit(|_: &ConfigMap| EmittedCode::new())
            .build(),
    );
    registry.register(
        StepSchema::builder("dup")
            .info(StepInfo::varying())
            .execute(|_: &ConfigMap, t: &mut Tally| {
                t.marks.push(2.0);
                true
            })
            .emit(|_: &ConfigMap| EmittedCode::new())
            .build(),
    );

    let mut tally = Tally::default();
    let by_name = registry.find("dup").unwrap();
    assert!(by_name.execute(&ConfigMap::new(), &mut tally));
    assert!(registry.get(1).unwrap().execute(&ConfigMap::new(), &mut tally));
    assert_eq!(tally.marks, vec![1.0, 2.0]);
}

#[test]
fn test_schema_reports_its_info() {
    let registry = lab_registry();

    let check = registry.find("check").unwrap().info();
    assert!(!check.always_same_code);
    assert!(check.returns_stop());
    assert_eq!(check.stop_variable.as_deref(), Some("res_ok"));

    let check_data = registry.find("check_data").unwrap().info();
    assert!(check_data.always_same_code);
    assert_eq!(check_data.stop_variable.as_deref(), Some("populated"));

    let sum = registry.find("sum").unwrap().info();
    assert_eq!(sum, StepInfo::always_same_code());
}

#[test]
fn test_recipe_builder_refuses_invalid_registry() {
    let mut registry = Registry::new();
    registry.register(StepSchema::<Tally>::builder("half").build());

    match RecipeBuilder::new(&registry) {
        Err(RecipeError::InvalidRegistry(RegistryError::InvalidStep { index, name })) => {
            assert_eq!(index, 0);
            assert_eq!(name, "half");
        }
        other => panic!("Expected InvalidRegistry error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_executor_stops() {
    let schema = StepSchema::<Tally>::builder("inert").build();
    assert!(!schema.execute(&ConfigMap::new(), &mut Tally::default()));
    assert_eq!(schema.emit(&ConfigMap::new()), EmittedCode::default());
}
