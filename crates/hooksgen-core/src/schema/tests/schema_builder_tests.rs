use crate::loc;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::OperationKind;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod build_operations {
    use super::*;

    #[test]
    fn default_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Mutation { ping: Int }\n",
            "type Query { ping: Int }\n",
            "type Subscription { ping: Int }",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(schema.subscription_type().map(|t| t.name()), Some("Subscription"));

        Ok(())
    }

    #[test]
    fn schema_block_overrides_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "schema { query: RootQuery, mutation: RootMutation }\n",
            "type RootQuery { ping: Int }\n",
            "type RootMutation { ping: Int }\n",
            "type Mutation { unused: Int }",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "RootQuery");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("RootMutation"));
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn missing_query_type_is_an_error() -> Result<()> {
        let result = SchemaBuilder::from_str(None, "type Mutation { ping: Int }")?.build();

        assert!(matches!(result, Err(SchemaBuildError::NoQueryTypeDefined)));

        Ok(())
    }

    #[test]
    fn schema_block_naming_an_undefined_type_is_an_error() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query, mutation: Missing }\n",
            "type Query { ping: Int }",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::UndefinedRootOperationType {
                operation: OperationKind::Mutation,
                ref type_name,
                ..
            }) if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn schema_block_naming_a_non_object_is_an_error() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query }\n",
            "scalar Query",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::RootOperationTypeNotAnObject {
                operation: OperationKind::Query,
                type_kind: GraphQLTypeKind::Scalar,
                ..
            }),
        ));

        Ok(())
    }

    #[test]
    fn duplicate_schema_block_root_is_an_error() -> Result<()> {
        let mut builder = SchemaBuilder::new();
        builder.load_str(None, "schema { query: Query }\ntype Query { a: Int }")?;
        let result = builder.load_str(None, "schema { query: Query }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));

        Ok(())
    }
}

mod build_types {
    use super::*;

    #[test]
    fn builtin_scalars_are_defined() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;

        assert_eq!(schema.lookup_type("Boolean"), Some(&GraphQLType::Bool));
        assert_eq!(schema.lookup_type("Float"), Some(&GraphQLType::Float));
        assert_eq!(schema.lookup_type("ID"), Some(&GraphQLType::ID));
        assert_eq!(schema.lookup_type("Int"), Some(&GraphQLType::Int));
        assert_eq!(schema.lookup_type("String"), Some(&GraphQLType::String));
        assert_eq!(schema.all_types().len(), 6);

        Ok(())
    }

    #[test]
    fn object_fields_keep_declaration_order_after_typename() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { b: Int, a: String! }")?
            .build()?;

        let field_names: Vec<&str> = schema.query_type().fields()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(field_names, vec!["__typename", "b", "a"]);

        let typename_field = schema.query_type().field("__typename").unwrap();
        assert_eq!(typename_field.def_location(), &loc::SchemaDefLocation::GraphQLBuiltIn);
        assert_eq!(typename_field.type_annotation().to_string(), "String!");

        Ok(())
    }

    #[test]
    fn def_locations_include_file_path() -> Result<()> {
        let schema_path = PathBuf::from("schema.graphql");
        let schema = SchemaBuilder::from_str(
            Some(schema_path.as_path()),
            "type Query { a: Int }\n\nenum Color { RED GREEN }",
        )?.build()?;

        let color = schema.lookup_type("Color").and_then(GraphQLType::as_enum).unwrap();
        assert_eq!(color.def_location(), &loc::FilePosition {
            col: 1,
            file: Some(schema_path),
            line: 3,
        });

        Ok(())
    }

    #[test]
    fn enum_union_and_input_members_keep_declaration_order() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Cat { meow: Int }\n",
            "type Dog { woof: Int }\n",
            "enum Size { SMALL MEDIUM LARGE }\n",
            "union Pet = Dog | Cat\n",
            "input Filter { z: Int, a: [String!] }",
        ))?.build()?;

        let size = schema.lookup_type("Size").and_then(GraphQLType::as_enum).unwrap();
        let value_names: Vec<&str> = size.values().map(|v| v.name()).collect();
        assert_eq!(value_names, vec!["SMALL", "MEDIUM", "LARGE"]);

        let pet = schema.lookup_type("Pet").and_then(GraphQLType::as_union).unwrap();
        assert_eq!(pet.member_type_names(), vec!["Dog", "Cat"]);
        assert!(pet.has_member("Cat"));
        assert!(!pet.has_member("Query"));

        let filter = schema.lookup_type("Filter")
            .and_then(GraphQLType::as_input_object)
            .unwrap();
        let field_names: Vec<&str> = filter.fields().keys().map(|k| k.as_str()).collect();
        assert_eq!(field_names, vec!["z", "a"]);
        assert_eq!(filter.fields()["a"].type_annotation().to_string(), "[String!]");

        Ok(())
    }

    #[test]
    fn duplicate_type_definition_is_an_error() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Thing { a: Int }\n",
            "input Thing { a: Int }",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. })
                if type_name == "Thing",
        ));

        Ok(())
    }

    #[test]
    fn redefining_a_builtin_scalar_is_an_error() {
        let result = SchemaBuilder::from_str(None, "scalar String");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: loc::SchemaDefLocation::GraphQLBuiltIn,
                ..
            }),
        ));
    }

    #[test]
    fn duplicate_field_is_an_error() {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int, a: String }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { ref field_name, .. })
                if field_name == "a",
        ));
    }

    #[test]
    fn duplicate_enum_value_is_an_error() {
        let result = SchemaBuilder::from_str(None, "enum Color { RED RED }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEnumValueDefinition { ref value_name, .. })
                if value_name == "RED",
        ));
    }

    #[test]
    fn duplicate_union_member_is_an_error() {
        let result = SchemaBuilder::from_str(None, "type A { a: Int }\nunion U = A | A");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicatedUnionMember { ref member_name, .. })
                if member_name == "A",
        ));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let result = SchemaBuilder::from_str(Some(Path::new("bad.graphql")), "type Query {");

        let err = result.expect_err("expected a parse error");
        assert!(matches!(err, SchemaBuildError::SchemaParseError { .. }));
        assert!(err.to_string().contains("bad.graphql"));
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn extensions_merge_regardless_of_order() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "extend type Query { b: Int }\n",
            "type Query { a: Int }\n",
            "extend enum Color { BLUE }\n",
            "enum Color { RED }\n",
            "type A { a: Int }\n",
            "type B { b: Int }\n",
            "union U = A\n",
            "extend union U = B\n",
            "input In { a: Int }\n",
            "extend input In { b: Int }\n",
            "scalar Date\n",
            "extend scalar Date @deprecated",
        ))?.build()?;

        assert!(schema.query_type().field("a").is_some());
        assert!(schema.query_type().field("b").is_some());

        let color = schema.lookup_type("Color").and_then(GraphQLType::as_enum).unwrap();
        let value_names: Vec<&str> = color.values().map(|v| v.name()).collect();
        assert_eq!(value_names, vec!["RED", "BLUE"]);

        let union_type = schema.lookup_type("U").and_then(GraphQLType::as_union).unwrap();
        assert_eq!(union_type.member_type_names(), vec!["A", "B"]);

        let input = schema.lookup_type("In").and_then(GraphQLType::as_input_object).unwrap();
        assert_eq!(input.fields().len(), 2);

        Ok(())
    }

    #[test]
    fn interface_extensions_add_fields_after_typename() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { node: Node }\n",
            "extend interface Node { createdAt: String }\n",
            "interface Node { id: ID! }",
        ))?.build()?;

        let node = schema.lookup_type("Node").and_then(GraphQLType::as_interface).unwrap();
        let field_names: Vec<&str> = node.fields().keys().map(|k| k.as_str()).collect();
        assert_eq!(field_names, vec!["__typename", "id", "createdAt"]);
        assert_eq!(node.fields()["id"].type_annotation().to_string(), "ID!");

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_is_an_error() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "extend type Missing { a: Int }",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. })
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_a_different_kind_is_an_error() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "enum Color { RED }\n",
            "extend type Color { a: Int }",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                type_kind: GraphQLTypeKind::Enum,
                ..
            }),
        ));

        Ok(())
    }

    #[test]
    fn extension_adding_an_existing_field_is_an_error() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "extend type Query { a: String }",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { .. }),
        ));

        Ok(())
    }
}
