use crate::ast;
use crate::ir::FileIR;
use crate::ir::FragmentIR;
use crate::ir::OperationIR;
use crate::ir::TypeIR;
use crate::ir::TypePayload;
use crate::loc;
use crate::transform::modifiers::unwrap_modifiers;
use crate::transform::scalar_resolver::resolve_leaf;
use crate::transform::selection_resolver::resolve_object_selection;
use crate::transform::TransformContext;
use crate::transform::TransformError;
use crate::transform::TypeRefPosition;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::DocumentFile;
use crate::OperationKind;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;

type Result<T> = std::result::Result<T, TransformError>;

/// Builds the [`FileIR`] for every operation and fragment in `doc`.
///
/// Input-object types referenced by variables are requested from the
/// context's registry as a side effect. Operation fragment sets only hold
/// direct spreads until [`link_fragments()`] runs.
pub(crate) fn extract_file(
    ctx: &mut TransformContext<'_>,
    doc: &DocumentFile,
) -> Result<FileIR> {
    use graphql_parser::query::Definition;

    log::debug!("Transforming document `{}`.", doc.file_path().display());

    let file_path = doc.file_path();
    let sources = doc.definition_sources();
    let mut operations = vec![];
    let mut fragments = vec![];

    for (def, source) in doc.ast().definitions.iter().zip(sources) {
        match def {
            Definition::Operation(op_def) =>
                operations.push(extract_operation(ctx, file_path, op_def, source)?),
            Definition::Fragment(frag_def) =>
                fragments.push(extract_fragment(ctx, file_path, frag_def, source)?),
        }
    }

    Ok(FileIR {
        file_path: file_path.to_path_buf(),
        fragments,
        operations,
    })
}

fn extract_operation(
    ctx: &mut TransformContext<'_>,
    file_path: &Path,
    op_def: &ast::operation::OperationDefinition,
    source: String,
) -> Result<OperationIR> {
    use graphql_parser::query::OperationDefinition;

    let (kind, name, position, variable_defs, selection_set) = match op_def {
        OperationDefinition::Mutation(op) => (
            OperationKind::Mutation,
            &op.name,
            op.position,
            &op.variable_definitions,
            &op.selection_set,
        ),
        OperationDefinition::Query(op) => (
            OperationKind::Query,
            &op.name,
            op.position,
            &op.variable_definitions,
            &op.selection_set,
        ),
        OperationDefinition::Subscription(op) => (
            OperationKind::Subscription,
            &op.name,
            op.position,
            &op.variable_definitions,
            &op.selection_set,
        ),
        OperationDefinition::SelectionSet(selection_set) =>
            return Err(TransformError::UnsupportedDefinitionKind {
                description: "shorthand query operations have no name to generate \
                    declarations under".to_string(),
                location: loc::FilePosition::from_pos(
                    Some(file_path),
                    selection_set.span.0,
                ),
            }),
    };

    let op_loc = loc::FilePosition::from_pos(Some(file_path), position);
    let Some(name) = name else {
        return Err(TransformError::UnsupportedDefinitionKind {
            description: format!("anonymous {kind} operation"),
            location: op_loc,
        });
    };
    log::debug!("Transforming {kind} operation `{name}`.");

    let root_type = root_operation_type(ctx, kind, name, &op_loc)?;
    let variables = extract_variables(ctx, file_path, name, variable_defs)?;

    let namespace = vec![name.to_owned()];
    let mut data_namespace = namespace.to_owned();
    data_namespace.push("data".to_string());
    let resolved = resolve_object_selection(
        ctx,
        file_path,
        data_namespace.as_slice(),
        selection_set,
        root_type,
    )?;
    let data = TypeIR::new(
        namespace,
        "data",
        Default::default(),
        TypePayload::Fields(resolved.fields),
    ).with_fragments(resolved.fragments);

    let mut fragments = vec![];
    collect_fragment_names(&data, &mut fragments);

    Ok(OperationIR {
        data,
        def_location: op_loc,
        fragments,
        kind,
        name: name.to_owned(),
        source,
        variables,
    })
}

fn root_operation_type<'schema>(
    ctx: &TransformContext<'schema>,
    kind: OperationKind,
    operation_name: &str,
    op_loc: &loc::FilePosition,
) -> Result<&'schema ObjectType> {
    let root_type = match kind {
        OperationKind::Mutation => ctx.schema.mutation_type(),
        OperationKind::Query => Some(ctx.schema.query_type()),
        OperationKind::Subscription => {
            if !ctx.config.subscriptions {
                return Err(TransformError::UnresolvedOperationCapability {
                    kind,
                    operation_name: operation_name.to_string(),
                    location: op_loc.to_owned(),
                });
            }
            ctx.schema.subscription_type()
        },
    };

    root_type.ok_or_else(|| TransformError::NoRootOperationType {
        kind,
        operation_name: operation_name.to_string(),
        location: op_loc.to_owned(),
    })
}

fn extract_variables(
    ctx: &mut TransformContext<'_>,
    file_path: &Path,
    operation_name: &str,
    variable_defs: &[ast::operation::VariableDefinition],
) -> Result<TypeIR> {
    let namespace = vec![operation_name.to_string()];
    let mut field_namespace = namespace.to_owned();
    field_namespace.push("variables".to_string());

    let mut fields = vec![];
    for var_def in variable_defs {
        let var_loc = loc::FilePosition::from_pos(Some(file_path), var_def.position);
        let annot = TypeAnnotation::from_ast_type(&var_loc, &var_def.var_type);
        let (modifiers, named_annot) = unwrap_modifiers(&annot);
        let base_type = named_annot.graphql_type(ctx.schema).ok_or_else(|| {
            TransformError::UnresolvedSchemaType {
                type_name: named_annot.graphql_type_name().to_string(),
                location: var_loc.to_owned(),
            }
        })?;

        let scalar = match base_type {
            GraphQLType::InputObject(inputobj_type) => {
                ctx.input_types.request(inputobj_type.name(), &var_loc);
                inputobj_type.name().to_string()
            },
            _ => resolve_leaf(ctx.config, base_type).ok_or_else(|| {
                TransformError::UnsupportedTypeReference {
                    type_name: base_type.name().to_string(),
                    type_kind: base_type.kind(),
                    position: TypeRefPosition::Variable,
                    location: var_loc.to_owned(),
                }
            })?,
        };

        fields.push(TypeIR::new(
            field_namespace.to_owned(),
            var_def.name.as_str(),
            modifiers,
            TypePayload::Scalar(scalar),
        ));
    }

    Ok(TypeIR::new(
        namespace,
        "variables",
        Default::default(),
        TypePayload::Fields(fields),
    ))
}

fn extract_fragment(
    ctx: &TransformContext<'_>,
    file_path: &Path,
    frag_def: &ast::operation::FragmentDefinition,
    source: String,
) -> Result<FragmentIR> {
    use graphql_parser::query::TypeCondition;

    let frag_loc = loc::FilePosition::from_pos(Some(file_path), frag_def.position);
    let TypeCondition::On(type_condition) = &frag_def.type_condition;
    log::debug!("Transforming fragment `{}` on `{type_condition}`.", frag_def.name);

    let obj_type = match ctx.schema.lookup_type(type_condition.as_str()) {
        Some(GraphQLType::Object(obj_type)) => obj_type,
        Some(other_type) => return Err(TransformError::UnsupportedTypeReference {
            type_name: type_condition.to_owned(),
            type_kind: other_type.kind(),
            position: TypeRefPosition::FragmentTypeCondition,
            location: frag_loc,
        }),
        None => return Err(TransformError::UnresolvedSchemaType {
            type_name: type_condition.to_owned(),
            location: frag_loc,
        }),
    };

    let resolved = resolve_object_selection(
        ctx,
        file_path,
        &[frag_def.name.to_owned()],
        &frag_def.selection_set,
        obj_type,
    )?;

    Ok(FragmentIR {
        def_location: frag_loc,
        fields: resolved.fields,
        fragments: resolved.fragments,
        name: frag_def.name.to_owned(),
        source,
        type_condition: type_condition.to_owned(),
    })
}

/// Appends each fragment name recorded anywhere in `root`'s shape tree to
/// `fragments`, skipping names already present.
pub(crate) fn collect_fragment_names(root: &TypeIR, fragments: &mut Vec<String>) {
    root.visit_fragment_names(&mut |fragment_name| {
        if !fragments.iter().any(|f| f == fragment_name) {
            fragments.push(fragment_name.to_string());
        }
    });
}

/// Replaces each operation's fragment set with its transitive closure over
/// fragment-to-fragment spreads, across every file of the run.
pub(crate) fn link_fragments(files: &mut [FileIR]) -> Result<()> {
    let mut fragment_deps: IndexMap<String, Vec<String>> = IndexMap::new();
    for fragment in files.iter().flat_map(|file| file.fragments.iter()) {
        let mut deps = fragment.fragments.to_owned();
        for field in &fragment.fields {
            collect_fragment_names(field, &mut deps);
        }
        fragment_deps.insert(fragment.name.to_owned(), deps);
    }

    for (fragment_name, deps) in &fragment_deps {
        for dep in deps {
            if !fragment_deps.contains_key(dep.as_str()) {
                return Err(TransformError::UndefinedFragment {
                    fragment_name: dep.to_owned(),
                    referenced_by: fragment_name.to_owned(),
                });
            }
        }
    }

    for operation in files.iter_mut().flat_map(|file| file.operations.iter_mut()) {
        let mut closure: IndexSet<String> = IndexSet::new();
        let mut worklist = std::mem::take(&mut operation.fragments);
        while !worklist.is_empty() {
            let mut next_level = vec![];
            for fragment_name in worklist {
                let Some(deps) = fragment_deps.get(fragment_name.as_str()) else {
                    return Err(TransformError::UndefinedFragment {
                        fragment_name,
                        referenced_by: operation.name.to_owned(),
                    });
                };
                if closure.insert(fragment_name) {
                    next_level.extend(deps.iter().cloned());
                }
            }
            worklist = next_level;
        }
        operation.fragments = closure.into_iter().collect();
    }

    Ok(())
}
