use crate::ir::TypeIR;
use crate::ir::TypePayload;
use crate::loc;
use crate::schema::Schema;
use crate::transform::modifiers::unwrap_modifiers;
use crate::transform::scalar_resolver::resolve_leaf;
use crate::transform::TransformError;
use crate::transform::TypeRefPosition;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::GeneratorConfig;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, TransformError>;

/// Collects every input-object type referenced (directly or transitively) by
/// the operations of one generation run.
///
/// Names are requested while operation variables are resolved. The fixed
/// point is computed by [`InputTypeRegistry::finalize()`] once every document
/// has been seen.
#[derive(Debug, Default)]
pub struct InputTypeRegistry {
    declarations: IndexMap<String, TypeIR>,
    requested: IndexMap<String, loc::FilePosition>,
}
impl InputTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves every requested input type and everything reachable from
    /// them, returning one declaration per type in discovery order.
    pub fn finalize(
        mut self,
        schema: &Schema,
        config: &GeneratorConfig,
    ) -> Result<Vec<TypeIR>> {
        let mut worklist: Vec<(String, loc::FilePosition)> =
            std::mem::take(&mut self.requested)
                .into_iter()
                .collect();
        let mut level = 0;

        while !worklist.is_empty() {
            log::trace!(
                "Input type worklist level {level}: {}",
                worklist.iter()
                    .map(|(type_name, _)| type_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            let mut next_level = vec![];
            for (type_name, ref_location) in worklist {
                if self.declarations.contains_key(type_name.as_str()) {
                    continue;
                }
                let inputobj_type = lookup_input_object(
                    schema,
                    type_name.as_str(),
                    &ref_location,
                )?;

                // Reserve the slot first so that references back to this type
                // from its own fields (or from anything it reaches) are
                // recognized as already registered.
                self.declarations.insert(type_name.to_owned(), TypeIR::new(
                    vec![],
                    type_name.as_str(),
                    Default::default(),
                    TypePayload::Fields(vec![]),
                ));

                let fields = self.resolve_fields(
                    schema,
                    config,
                    inputobj_type,
                    &mut next_level,
                )?;
                if let Some(decl) = self.declarations.get_mut(type_name.as_str()) {
                    decl.payload = TypePayload::Fields(fields);
                }
            }
            worklist = next_level;
            level += 1;
        }

        Ok(self.declarations.into_values().collect())
    }

    /// Queues an input-object type for resolution. `ref_location` is where
    /// the type was first referenced and is only used for error reporting.
    pub fn request(&mut self, type_name: &str, ref_location: &loc::FilePosition) {
        if !self.declarations.contains_key(type_name)
            && !self.requested.contains_key(type_name) {
            self.requested.insert(type_name.to_string(), ref_location.to_owned());
        }
    }

    fn resolve_fields(
        &self,
        schema: &Schema,
        config: &GeneratorConfig,
        inputobj_type: &InputObjectType,
        next_level: &mut Vec<(String, loc::FilePosition)>,
    ) -> Result<Vec<TypeIR>> {
        let namespace = vec![inputobj_type.name().to_string()];
        let mut fields = vec![];

        for input_field in inputobj_type.fields().values() {
            let (modifiers, named_annot) =
                unwrap_modifiers(input_field.type_annotation());
            let field_type = named_annot.graphql_type(schema).ok_or_else(|| {
                TransformError::UnresolvedSchemaType {
                    type_name: named_annot.graphql_type_name().to_string(),
                    location: input_field.def_location().to_owned(),
                }
            })?;

            let scalar = match field_type {
                GraphQLType::InputObject(nested_type) => {
                    if !self.declarations.contains_key(nested_type.name()) {
                        next_level.push((
                            nested_type.name().to_string(),
                            input_field.def_location().to_owned(),
                        ));
                    }
                    nested_type.name().to_string()
                },
                _ => resolve_leaf(config, field_type).ok_or_else(|| {
                    TransformError::UnsupportedTypeReference {
                        type_name: field_type.name().to_string(),
                        type_kind: field_type.kind(),
                        position: TypeRefPosition::InputField,
                        location: input_field.def_location().to_owned(),
                    }
                })?,
            };

            fields.push(TypeIR::new(
                namespace.to_owned(),
                input_field.name(),
                modifiers,
                TypePayload::Scalar(scalar),
            ));
        }

        Ok(fields)
    }
}

fn lookup_input_object<'schema>(
    schema: &'schema Schema,
    type_name: &str,
    ref_location: &loc::FilePosition,
) -> Result<&'schema InputObjectType> {
    match schema.lookup_type(type_name) {
        Some(GraphQLType::InputObject(inputobj_type)) => Ok(inputobj_type),
        Some(other_type) => Err(TransformError::UnsupportedTypeReference {
            type_name: type_name.to_string(),
            type_kind: other_type.kind(),
            position: TypeRefPosition::Variable,
            location: ref_location.to_owned(),
        }),
        None => Err(TransformError::UnresolvedSchemaType {
            type_name: type_name.to_string(),
            location: ref_location.to_owned(),
        }),
    }
}
