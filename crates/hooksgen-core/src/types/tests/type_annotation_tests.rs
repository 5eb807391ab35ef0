use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;

fn parse_var_type(type_src: &str) -> ast::operation::Type {
    let doc = ast::operation::parse(
        format!("query Q($v: {type_src}) {{ x }}").as_str(),
    ).expect("parse error");
    match doc.definitions.into_iter().next() {
        Some(graphql_parser::query::Definition::Operation(
            graphql_parser::query::OperationDefinition::Query(query),
        )) => query.variable_definitions.into_iter().next()
            .expect("no variable definition")
            .var_type,
        other => panic!("unexpected definition: {other:?}"),
    }
}

fn ref_location() -> loc::FilePosition {
    loc::FilePosition {
        col: 9,
        file: None,
        line: 1,
    }
}

#[test]
fn named_type_is_nullable_by_default() {
    let annot = TypeAnnotation::from_ast_type(&ref_location(), &parse_var_type("String"));
    let named = annot.as_named_annotation().expect("not a named annotation");

    assert!(named.nullable());
    assert_eq!(named.graphql_type_name(), "String");
    assert_eq!(named.ref_location(), &ref_location());
}

#[test]
fn non_null_folds_into_the_wrapped_layer() {
    let annot = TypeAnnotation::from_ast_type(&ref_location(), &parse_var_type("[Int!]!"));
    let list = annot.as_list_annotation().expect("not a list annotation");
    assert!(!list.nullable());

    let inner = list.inner_type_annotation()
        .as_named_annotation()
        .expect("inner is not a named annotation");
    assert!(!inner.nullable());
    assert_eq!(inner.graphql_type_name(), "Int");
}

#[test]
fn list_elements_reset_to_nullable() {
    let annot = TypeAnnotation::from_ast_type(&ref_location(), &parse_var_type("[[ID]!]!"));
    assert!(!annot.nullable());

    let middle = annot.as_list_annotation().unwrap().inner_type_annotation();
    assert!(!middle.nullable());
    assert!(middle.as_list_annotation().is_some());

    let innermost = middle.as_list_annotation().unwrap()
        .inner_type_annotation()
        .as_named_annotation()
        .expect("innermost layer is not named");
    assert!(innermost.nullable());
    assert_eq!(innermost.graphql_type_name(), "ID");
}

#[test]
fn display_round_trips_graphql_syntax() {
    for type_src in ["String", "String!", "[String]", "[String!]!", "[[Int]!]"] {
        let annot = TypeAnnotation::from_ast_type(&ref_location(), &parse_var_type(type_src));
        assert_eq!(annot.to_string(), type_src);
    }
}
