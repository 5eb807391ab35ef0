use crate::ast;
use crate::ir::TypeIR;
use crate::ir::TypePayload;
use crate::loc;
use crate::transform::modifiers::unwrap_modifiers;
use crate::transform::scalar_resolver::resolve_leaf;
use crate::transform::SelectionKind;
use crate::transform::TransformContext;
use crate::transform::TransformError;
use crate::transform::TypeRefPosition;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::UnionType;
use std::path::Path;

type Result<T> = std::result::Result<T, TransformError>;

const TYPENAME_FIELD: &str = "__typename";

/// The fields selected on an object type, plus the names of fragments spread
/// directly into the same selection set.
#[derive(Debug, Default)]
pub(crate) struct ResolvedSelectionSet {
    pub fields: Vec<TypeIR>,
    pub fragments: Vec<String>,
}

/// Builds one [`TypeIR`] per field selected on `parent_type`, each namespaced
/// under `namespace`.
///
/// Fragment spreads are recorded by name only; their fields are never
/// inlined.
pub(crate) fn resolve_object_selection(
    ctx: &TransformContext<'_>,
    file_path: &Path,
    namespace: &[String],
    selection_set: &ast::operation::SelectionSet,
    parent_type: &ObjectType,
) -> Result<ResolvedSelectionSet> {
    use graphql_parser::query::Selection;

    let mut resolved = ResolvedSelectionSet::default();
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => merge_field(
                &mut resolved.fields,
                resolve_field(ctx, file_path, namespace, field, parent_type)?,
            ),

            Selection::FragmentSpread(spread) => merge_fragment_names(
                &mut resolved.fragments,
                [spread.fragment_name.to_owned()],
            ),

            Selection::InlineFragment(inline_frag) =>
                return Err(TransformError::UnsupportedSelectionKind {
                    selection_kind: SelectionKind::InlineFragment,
                    parent_type_name: parent_type.name().to_string(),
                    location: loc::FilePosition::from_pos(
                        Some(file_path),
                        inline_frag.position,
                    ),
                }),
        }
    }

    Ok(resolved)
}

fn resolve_field(
    ctx: &TransformContext<'_>,
    file_path: &Path,
    namespace: &[String],
    field: &ast::operation::Field,
    parent_type: &ObjectType,
) -> Result<TypeIR> {
    let field_loc = loc::FilePosition::from_pos(Some(file_path), field.position);
    let name = field.alias.as_ref().unwrap_or(&field.name).to_owned();

    if field.name == TYPENAME_FIELD {
        return Ok(TypeIR::new(
            namespace.to_vec(),
            name,
            Default::default(),
            TypePayload::Scalar(format!("'{}'", parent_type.name())),
        ));
    }

    let schema_field = parent_type.field(field.name.as_str()).ok_or_else(|| {
        TransformError::UndefinedField {
            type_name: parent_type.name().to_string(),
            field_name: field.name.to_owned(),
            location: field_loc.to_owned(),
        }
    })?;
    let (modifiers, named_annot) = unwrap_modifiers(schema_field.type_annotation());
    let base_type = named_annot.graphql_type(ctx.schema).ok_or_else(|| {
        TransformError::UnresolvedSchemaType {
            type_name: named_annot.graphql_type_name().to_string(),
            location: field_loc.to_owned(),
        }
    })?;

    let mut child_namespace = namespace.to_vec();
    child_namespace.push(name.to_owned());

    let type_ir = match base_type {
        GraphQLType::Object(obj_type) => {
            let resolved = resolve_object_selection(
                ctx,
                file_path,
                child_namespace.as_slice(),
                &field.selection_set,
                obj_type,
            )?;
            TypeIR::new(
                namespace.to_vec(),
                name,
                modifiers,
                TypePayload::Fields(resolved.fields),
            ).with_fragments(resolved.fragments)
        },

        GraphQLType::Union(union_type) => {
            let resolved = resolve_union_selection(
                ctx,
                file_path,
                child_namespace.as_slice(),
                &field.selection_set,
                union_type,
            )?;
            TypeIR::new(
                namespace.to_vec(),
                name,
                modifiers,
                TypePayload::Union(resolved.variants),
            ).with_fragments(resolved.fragments)
        },

        _ => {
            let scalar = resolve_leaf(ctx.config, base_type).ok_or_else(|| {
                TransformError::UnsupportedTypeReference {
                    type_name: base_type.name().to_string(),
                    type_kind: base_type.kind(),
                    position: TypeRefPosition::ResponseField,
                    location: field_loc.to_owned(),
                }
            })?;
            TypeIR::new(
                namespace.to_vec(),
                name,
                modifiers,
                TypePayload::Scalar(scalar),
            )
        },
    };

    Ok(type_ir)
}

/// The variants selected on a union type, plus every fragment spread directly
/// into the union's selection set.
#[derive(Debug, Default)]
pub(crate) struct ResolvedUnionSelection {
    pub fragments: Vec<String>,
    pub variants: Vec<TypeIR>,
}

/// Builds one variant per union member selected by an inline fragment or a
/// fragment spread.
///
/// `namespace` is the path of the union-typed field itself; each variant is
/// named after its member type beneath it. Inline fragments without a type
/// condition, or whose condition isn't a member of the union, are skipped.
///
/// A spread is attached to the variant of its fragment's type condition. Every
/// spread is also recorded on the union node itself so that it lands in the
/// operation's fragment closure, even when it selects no variant.
pub(crate) fn resolve_union_selection(
    ctx: &TransformContext<'_>,
    file_path: &Path,
    namespace: &[String],
    selection_set: &ast::operation::SelectionSet,
    union_type: &UnionType,
) -> Result<ResolvedUnionSelection> {
    use graphql_parser::query::Selection;
    use graphql_parser::query::TypeCondition;

    let mut resolved = ResolvedUnionSelection::default();
    for selection in &selection_set.items {
        match selection {
            Selection::InlineFragment(inline_frag) => {
                let Some(TypeCondition::On(member_name)) = &inline_frag.type_condition else {
                    log::trace!(
                        "Skipping inline fragment without a type condition on union `{}`.",
                        union_type.name(),
                    );
                    continue
                };
                if !union_type.has_member(member_name.as_str()) {
                    log::trace!(
                        "Skipping inline fragment on `{member_name}`, which is not a \
                        member of union `{}`.",
                        union_type.name(),
                    );
                    continue;
                }

                let frag_loc = loc::FilePosition::from_pos(
                    Some(file_path),
                    inline_frag.position,
                );
                let member_type = lookup_member_object(ctx, member_name, &frag_loc)?;
                let mut variant_namespace = namespace.to_vec();
                variant_namespace.push(member_name.to_owned());
                let member_selection = resolve_object_selection(
                    ctx,
                    file_path,
                    variant_namespace.as_slice(),
                    &inline_frag.selection_set,
                    member_type,
                )?;

                // A second branch on the same member adds to the first.
                let variant = variant_for(&mut resolved.variants, namespace, member_name);
                merge_fragment_names(&mut variant.fragments, member_selection.fragments);
                if let TypePayload::Fields(fields) = &mut variant.payload {
                    for field in member_selection.fields {
                        merge_field(fields, field);
                    }
                }
            },

            Selection::FragmentSpread(spread) => {
                let fragment_name = spread.fragment_name.to_owned();
                match ctx.fragment_type_condition(fragment_name.as_str()) {
                    Some(member_name) if union_type.has_member(member_name) => {
                        let spread_loc = loc::FilePosition::from_pos(
                            Some(file_path),
                            spread.position,
                        );
                        lookup_member_object(ctx, member_name, &spread_loc)?;
                        let variant = variant_for(&mut resolved.variants, namespace, member_name);
                        merge_fragment_names(&mut variant.fragments, [fragment_name.to_owned()]);
                    },
                    Some(type_condition) => log::trace!(
                        "Fragment `{fragment_name}` on `{type_condition}` selects no \
                        member of union `{}`.",
                        union_type.name(),
                    ),
                    // Left for fragment linking to report.
                    None => (),
                }
                merge_fragment_names(&mut resolved.fragments, [fragment_name]);
            },

            // Each variant declares its own discriminant.
            Selection::Field(field) if field.name == TYPENAME_FIELD => (),

            Selection::Field(field) =>
                return Err(TransformError::UnsupportedSelectionKind {
                    selection_kind: SelectionKind::Field,
                    parent_type_name: union_type.name().to_string(),
                    location: loc::FilePosition::from_pos(Some(file_path), field.position),
                }),
        }
    }

    Ok(resolved)
}

/// Returns the variant for `member_name`, adding an empty one if the member
/// hasn't been selected yet.
fn variant_for<'v>(
    variants: &'v mut Vec<TypeIR>,
    namespace: &[String],
    member_name: &str,
) -> &'v mut TypeIR {
    let idx = match variants.iter().position(|v| v.name == member_name) {
        Some(idx) => idx,
        None => {
            variants.push(
                TypeIR::new(
                    namespace.to_vec(),
                    member_name,
                    Default::default(),
                    TypePayload::Fields(vec![]),
                ).with_typename(member_name)
            );
            variants.len() - 1
        },
    };
    &mut variants[idx]
}

fn lookup_member_object<'schema>(
    ctx: &TransformContext<'schema>,
    member_name: &str,
    ref_location: &loc::FilePosition,
) -> Result<&'schema ObjectType> {
    match ctx.schema.lookup_type(member_name) {
        Some(GraphQLType::Object(obj_type)) => Ok(obj_type),
        Some(other_type) => Err(TransformError::UnsupportedTypeReference {
            type_name: member_name.to_string(),
            type_kind: other_type.kind(),
            position: TypeRefPosition::ResponseField,
            location: ref_location.to_owned(),
        }),
        None => Err(TransformError::UnresolvedSchemaType {
            type_name: member_name.to_string(),
            location: ref_location.to_owned(),
        }),
    }
}

/// Adds `field` to `fields`. A field whose response name is already present
/// is merged into the existing node so that each name is declared once.
fn merge_field(fields: &mut Vec<TypeIR>, field: TypeIR) {
    match fields.iter_mut().find(|existing| existing.name == field.name) {
        Some(existing) => merge_type_ir(existing, field),
        None => fields.push(field),
    }
}

fn merge_type_ir(existing: &mut TypeIR, incoming: TypeIR) {
    merge_fragment_names(&mut existing.fragments, incoming.fragments);
    match (&mut existing.payload, incoming.payload) {
        (TypePayload::Fields(fields), TypePayload::Fields(incoming_fields)) => {
            for field in incoming_fields {
                merge_field(fields, field);
            }
        },
        (TypePayload::Union(variants), TypePayload::Union(incoming_variants)) => {
            for variant in incoming_variants {
                merge_field(variants, variant);
            }
        },
        // Leaves sharing a response name resolve to the same type.
        _ => (),
    }
}

fn merge_fragment_names(
    fragments: &mut Vec<String>,
    incoming: impl IntoIterator<Item = String>,
) {
    for fragment_name in incoming {
        if !fragments.contains(&fragment_name) {
            fragments.push(fragment_name);
        }
    }
}
