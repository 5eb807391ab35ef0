use crate::ir::Modifier;
use crate::ir::TypeIR;
use crate::loc;
use crate::transform;
use crate::transform::tests::build_schema;
use crate::transform::tests::document;
use crate::transform::tests::todo_schema;
use crate::transform::InputTypeRegistry;
use crate::transform::TransformError;
use crate::transform::TypeRefPosition;
use crate::types::GraphQLTypeKind;
use crate::GeneratorConfig;

fn ref_location() -> loc::FilePosition {
    loc::FilePosition {
        col: 1,
        file: None,
        line: 1,
    }
}

fn decl_names(decls: &[TypeIR]) -> Vec<&str> {
    decls.iter().map(|decl| decl.name()).collect()
}

fn field<'a>(decl: &'a TypeIR, name: &str) -> &'a TypeIR {
    decl.fields()
        .unwrap()
        .iter()
        .find(|f| f.name() == name)
        .unwrap_or_else(|| panic!("no field named `{name}`"))
}

#[test]
fn same_input_type_from_two_operations_is_declared_once() -> Result<(), TransformError> {
    let schema = todo_schema();
    let doc = document("ops.graphql", concat!(
        "mutation A($input: CreateTodoInput!) { createTodo(input: $input) { id } }\n",
        "mutation B($input: CreateTodoInput) { createTodo(input: $input) { id } }",
    ));
    let ir = transform(&schema, &[doc], &GeneratorConfig::default())?;

    let create_decls = ir.input_types().iter()
        .filter(|decl| decl.name() == "CreateTodoInput")
        .count();
    assert_eq!(create_decls, 1);

    Ok(())
}

#[test]
fn transitive_input_types_are_discovered_breadth_first() -> Result<(), TransformError> {
    let schema = todo_schema();
    let mut registry = InputTypeRegistry::new();
    registry.request("CreateTodoInput", &ref_location());
    let decls = registry.finalize(&schema, &GeneratorConfig::default())?;

    assert_eq!(decl_names(&decls), vec!["CreateTodoInput", "TodoRef", "TodoFilter"]);
    for decl in &decls {
        assert!(decl.namespace().is_empty());
        assert!(decl.modifiers().is_empty());
    }

    Ok(())
}

#[test]
fn input_fields_resolve_leaves_and_references() -> Result<(), TransformError> {
    let schema = todo_schema();
    let mut registry = InputTypeRegistry::new();
    registry.request("CreateTodoInput", &ref_location());
    let decls = registry.finalize(&schema, &GeneratorConfig::default())?;
    let create = &decls[0];

    assert_eq!(field(create, "title").scalar(), Some("string"));
    assert!(field(create, "title").modifiers().is_empty());
    assert_eq!(field(create, "status").scalar(), Some("'OPEN' | 'IN_PROGRESS' | 'DONE'"));
    assert_eq!(field(create, "tags").modifiers().as_slice(), &[
        Modifier::Nullable,
        Modifier::ArrayOf,
    ]);
    assert_eq!(field(create, "parent").scalar(), Some("TodoRef"));
    assert_eq!(field(create, "parent").declaration_name(), "CreateTodoInput_parent");

    Ok(())
}

#[test]
fn self_referential_input_type_terminates() -> Result<(), TransformError> {
    let schema = todo_schema();
    let mut registry = InputTypeRegistry::new();
    registry.request("TodoFilter", &ref_location());
    let decls = registry.finalize(&schema, &GeneratorConfig::default())?;

    assert_eq!(decl_names(&decls), vec!["TodoFilter"]);
    let and = field(&decls[0], "and");
    assert_eq!(and.scalar(), Some("TodoFilter"));
    assert_eq!(and.modifiers().as_slice(), &[Modifier::Nullable, Modifier::ArrayOf]);

    Ok(())
}

#[test]
fn mutually_referential_input_types_terminate() -> Result<(), TransformError> {
    let schema = build_schema(concat!(
        "type Query { a: Int }\n",
        "input A { b: B! }\n",
        "input B { a: [A] }",
    ));
    let mut registry = InputTypeRegistry::new();
    registry.request("A", &ref_location());
    registry.request("B", &ref_location());
    registry.request("A", &ref_location());
    let decls = registry.finalize(&schema, &GeneratorConfig::default())?;

    assert_eq!(decl_names(&decls), vec!["A", "B"]);
    assert_eq!(field(&decls[0], "b").scalar(), Some("B"));
    assert_eq!(field(&decls[1], "a").scalar(), Some("A"));

    Ok(())
}

#[test]
fn custom_scalar_input_fields_fall_back_to_any() -> Result<(), TransformError> {
    let schema = build_schema(concat!(
        "type Query { a: Int }\n",
        "scalar Upload\n",
        "input FileInput { file: Upload! }",
    ));
    let mut registry = InputTypeRegistry::new();
    registry.request("FileInput", &ref_location());
    let decls = registry.finalize(&schema, &GeneratorConfig::default())?;

    assert_eq!(field(&decls[0], "file").scalar(), Some("any"));

    Ok(())
}

#[test]
fn output_type_in_an_input_field_is_unsupported() {
    let schema = build_schema(concat!(
        "type Query { a: Int }\n",
        "input Bad { query: Query }",
    ));
    let mut registry = InputTypeRegistry::new();
    registry.request("Bad", &ref_location());
    let result = registry.finalize(&schema, &GeneratorConfig::default());

    assert!(matches!(
        result,
        Err(TransformError::UnsupportedTypeReference {
            type_kind: GraphQLTypeKind::Object,
            position: TypeRefPosition::InputField,
            ..
        }),
    ));
}

#[test]
fn requesting_an_undefined_type_is_an_error() {
    let schema = todo_schema();
    let mut registry = InputTypeRegistry::new();
    registry.request("Missing", &ref_location());
    let result = registry.finalize(&schema, &GeneratorConfig::default());

    assert!(matches!(
        result,
        Err(TransformError::UnresolvedSchemaType { ref type_name, .. })
            if type_name == "Missing",
    ));
}

#[test]
fn registry_with_no_requests_is_empty() -> Result<(), TransformError> {
    let decls = InputTypeRegistry::new()
        .finalize(&todo_schema(), &GeneratorConfig::default())?;

    assert!(decls.is_empty());

    Ok(())
}
