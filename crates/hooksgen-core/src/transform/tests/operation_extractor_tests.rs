use crate::ir::Modifier;
use crate::ir::PluginIR;
use crate::transform;
use crate::transform::tests::build_schema;
use crate::transform::tests::document;
use crate::transform::tests::todo_schema;
use crate::transform::TransformError;
use crate::transform::TypeRefPosition;
use crate::types::GraphQLTypeKind;
use crate::DocumentFile;
use crate::GeneratorConfig;
use crate::OperationKind;

fn transform_docs(docs: &[DocumentFile]) -> Result<PluginIR, TransformError> {
    transform(&todo_schema(), docs, &GeneratorConfig::default())
}

fn transform_doc(doc_src: &str) -> Result<PluginIR, TransformError> {
    transform_docs(&[document("ops.graphql", doc_src)])
}

mod operations {
    use super::*;

    #[test]
    fn variables_become_fields_of_the_variables_shape() -> Result<(), TransformError> {
        let ir = transform_doc(
            "query Q($id: ID!, $ids: [ID!], $status: Status) { todos { id } }",
        )?;
        let op = &ir.files()[0].operations()[0];
        let variables = op.variables();

        assert_eq!(variables.declaration_name(), "Q_variables");
        assert!(variables.modifiers().is_empty());

        let fields = variables.fields().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].declaration_name(), "Q_variables_id");
        assert_eq!(fields[0].scalar(), Some("string"));
        assert!(fields[0].modifiers().is_empty());
        assert_eq!(fields[1].modifiers().as_slice(), &[Modifier::Nullable, Modifier::ArrayOf]);
        assert_eq!(fields[2].scalar(), Some("'OPEN' | 'IN_PROGRESS' | 'DONE'"));
        assert_eq!(fields[2].modifiers().as_slice(), &[Modifier::Nullable]);

        Ok(())
    }

    #[test]
    fn operation_without_variables_has_an_empty_variables_shape() -> Result<(), TransformError> {
        let ir = transform_doc("query Q { now }")?;
        let op = &ir.files()[0].operations()[0];

        assert_eq!(op.variables().fields(), Some(&[][..]));
        assert_eq!(op.data().declaration_name(), "Q_data");
        assert_eq!(op.data().fields().unwrap()[0].scalar(), Some("any"));
        assert!(op.fragments().is_empty());

        Ok(())
    }

    #[test]
    fn input_object_variables_are_registered() -> Result<(), TransformError> {
        let ir = transform_doc(
            "mutation Create($input: CreateTodoInput!) { createTodo(input: $input) { id } }",
        )?;
        let op = &ir.files()[0].operations()[0];

        assert_eq!(op.kind(), OperationKind::Mutation);
        assert_eq!(op.variables().fields().unwrap()[0].scalar(), Some("CreateTodoInput"));
        let input_names: Vec<&str> = ir.input_types().iter().map(|t| t.name()).collect();
        assert_eq!(input_names, vec!["CreateTodoInput", "TodoRef", "TodoFilter"]);

        Ok(())
    }

    #[test]
    fn operation_source_is_the_raw_definition_text() -> Result<(), TransformError> {
        let ir = transform_doc(concat!(
            "# Loads everything\n",
            "query A { now }\n",
            "\n",
            "# Then this one\n",
            "query B {\n",
            "  todos { id }\n",
            "}\n",
        ))?;
        let ops = ir.files()[0].operations();

        assert_eq!(ops[0].source(), "query A { now }");
        assert_eq!(ops[1].source(), "query B {\n  todos { id }\n}");
        assert_eq!(ops[1].def_location().line, 5);

        Ok(())
    }

    #[test]
    fn object_typed_variable_is_unsupported() {
        let result = transform_doc("query Q($todo: Todo) { now }");

        assert!(matches!(
            result,
            Err(TransformError::UnsupportedTypeReference {
                type_kind: GraphQLTypeKind::Object,
                position: TypeRefPosition::Variable,
                ..
            }),
        ));
    }

    #[test]
    fn undefined_variable_type_is_unresolved() {
        let result = transform_doc("query Q($x: Missing) { now }");

        assert!(matches!(
            result,
            Err(TransformError::UnresolvedSchemaType { ref type_name, .. })
                if type_name == "Missing",
        ));
    }

    #[test]
    fn mutation_without_a_mutation_root_is_an_error() {
        let schema = build_schema("type Query { a: Int }");
        let doc = document("ops.graphql", "mutation M { a }");
        let result = transform(&schema, &[doc], &GeneratorConfig::default());

        assert!(matches!(
            result,
            Err(TransformError::NoRootOperationType {
                kind: OperationKind::Mutation,
                ..
            }),
        ));
    }

    #[test]
    fn subscriptions_are_rejected_unless_enabled() -> Result<(), TransformError> {
        let schema = build_schema(concat!(
            "type Query { a: Int }\n",
            "type Subscription { ticks: Int! }",
        ));
        let doc = document("ops.graphql", "subscription Ticks { ticks }");

        let result = transform(&schema, &[doc.to_owned()], &GeneratorConfig::default());
        assert!(matches!(
            result,
            Err(TransformError::UnresolvedOperationCapability {
                kind: OperationKind::Subscription,
                ref operation_name,
                ..
            }) if operation_name == "Ticks",
        ));

        let config = GeneratorConfig {
            subscriptions: true,
            ..Default::default()
        };
        let ir = transform(&schema, &[doc], &config)?;
        let op = &ir.files()[0].operations()[0];
        assert_eq!(op.kind(), OperationKind::Subscription);
        assert_eq!(op.data().fields().unwrap()[0].scalar(), Some("number"));

        Ok(())
    }

    #[test]
    fn anonymous_operations_are_unsupported() {
        for doc_src in ["{ now }", "query { now }"] {
            let result = transform_doc(doc_src);
            assert!(
                matches!(result, Err(TransformError::UnsupportedDefinitionKind { .. })),
                "`{doc_src}` was accepted",
            );
        }
    }

    #[test]
    fn duplicate_operation_names_are_an_error() {
        let result = transform_docs(&[
            document("a.graphql", "query Q { now }"),
            document("b.graphql", "query Q { todos { id } }"),
        ]);

        match result {
            Err(TransformError::DuplicateDefinitionName { name, location1, location2 }) => {
                assert_eq!(name, "Q");
                assert_eq!(location1.file.as_deref(), Some(std::path::Path::new("a.graphql")));
                assert_eq!(location2.file.as_deref(), Some(std::path::Path::new("b.graphql")));
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

mod fragments {
    use super::*;

    #[test]
    fn fragment_fields_resolve_against_the_type_condition() -> Result<(), TransformError> {
        let ir = transform_doc("fragment TodoParts on Todo { title owner { name } }")?;
        let frag = &ir.files()[0].fragments()[0];

        assert_eq!(frag.name(), "TodoParts");
        assert_eq!(frag.type_condition(), "Todo");
        assert_eq!(frag.source(), "fragment TodoParts on Todo { title owner { name } }");
        assert_eq!(frag.fields()[0].declaration_name(), "TodoParts_title");
        assert_eq!(frag.fields()[1].fields().unwrap()[0].declaration_name(), "TodoParts_owner_name");

        Ok(())
    }

    #[test]
    fn fragment_records_its_own_spreads() -> Result<(), TransformError> {
        let ir = transform_doc(concat!(
            "fragment TodoParts on Todo { ...TodoIds title }\n",
            "fragment TodoIds on Todo { id }",
        ))?;

        assert_eq!(ir.files()[0].fragments()[0].fragments(), &["TodoIds".to_string()]);
        assert!(ir.files()[0].fragments()[1].fragments().is_empty());

        Ok(())
    }

    #[test]
    fn fragment_on_a_union_is_unsupported() {
        let result = transform_doc("fragment F on SearchResult { ... on Todo { id } }");

        assert!(matches!(
            result,
            Err(TransformError::UnsupportedTypeReference {
                type_kind: GraphQLTypeKind::Union,
                position: TypeRefPosition::FragmentTypeCondition,
                ..
            }),
        ));
    }

    #[test]
    fn fragment_on_an_undefined_type_is_unresolved() {
        let result = transform_doc("fragment F on Missing { id }");

        assert!(matches!(result, Err(TransformError::UnresolvedSchemaType { .. })));
    }

    #[test]
    fn operation_fragments_close_over_nested_spreads_across_files() -> Result<(), TransformError> {
        let ir = transform_docs(&[
            document("ops.graphql", concat!(
                "query Q {\n",
                "  todos { ...TodoParts }\n",
                "  search(term: \"x\") { ... on User { ...UserParts } }\n",
                "}",
            )),
            document("fragments.graphql", concat!(
                "fragment TodoParts on Todo { id owner { ...UserParts } ...TodoStatus }\n",
                "fragment TodoStatus on Todo { status }\n",
                "fragment UserParts on User { name }",
            )),
        ])?;
        let op = &ir.files()[0].operations()[0];

        assert_eq!(op.fragments(), &[
            "TodoParts".to_string(),
            "UserParts".to_string(),
            "TodoStatus".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn spread_of_an_undefined_fragment_is_an_error() {
        let result = transform_doc("query Q { todos { ...Missing } }");

        assert!(matches!(
            result,
            Err(TransformError::UndefinedFragment {
                ref fragment_name,
                ref referenced_by,
            }) if fragment_name == "Missing" && referenced_by == "Q",
        ));
    }

    #[test]
    fn fragment_spreading_an_undefined_fragment_is_an_error() {
        let result = transform_doc("fragment F on Todo { ...Missing }");

        assert!(matches!(
            result,
            Err(TransformError::UndefinedFragment { ref referenced_by, .. })
                if referenced_by == "F",
        ));
    }
}
