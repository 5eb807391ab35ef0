//! Resolves documents against a [`Schema`] into the [IR](crate::ir).

mod input_type_registry;
mod modifiers;
mod operation_extractor;
mod scalar_resolver;
mod selection_resolver;
mod transform_error;

pub use input_type_registry::InputTypeRegistry;
pub use modifiers::unwrap_modifiers;
pub use transform_error::SelectionKind;
pub use transform_error::TransformError;
pub use transform_error::TypeRefPosition;

use crate::ir::FileIR;
use crate::ir::PluginIR;
use crate::ir::TypeIR;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::DocumentFile;
use crate::GeneratorConfig;
use std::collections::HashMap;

/// Everything a single generation run threads through the resolvers.
///
/// Each run owns its own [`InputTypeRegistry`], so independent runs never
/// observe each other's input types.
#[derive(Debug)]
pub struct TransformContext<'a> {
    pub(crate) config: &'a GeneratorConfig,
    fragment_type_conditions: HashMap<String, String>,
    pub(crate) input_types: InputTypeRegistry,
    pub(crate) schema: &'a Schema,
}
impl<'a> TransformContext<'a> {
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            fragment_type_conditions: HashMap::new(),
            input_types: InputTypeRegistry::new(),
            schema,
        }
    }

    /// Records the type condition of every fragment defined in `documents`, so
    /// that spreads can be resolved before the fragment itself is transformed.
    pub fn index_fragments(&mut self, documents: &[DocumentFile]) {
        use graphql_parser::query::Definition;
        use graphql_parser::query::TypeCondition;

        for doc in documents {
            for def in &doc.ast().definitions {
                if let Definition::Fragment(frag_def) = def {
                    let TypeCondition::On(type_condition) = &frag_def.type_condition;
                    self.fragment_type_conditions
                        .entry(frag_def.name.to_owned())
                        .or_insert_with(|| type_condition.to_owned());
                }
            }
        }
    }

    pub(crate) fn fragment_type_condition(&self, fragment_name: &str) -> Option<&str> {
        self.fragment_type_conditions.get(fragment_name).map(|s| s.as_str())
    }
}

/// Builds the [`PluginIR`] for `documents`.
///
/// Fails on the first unsupported or unresolvable construct.
pub fn transform(
    schema: &Schema,
    documents: &[DocumentFile],
    config: &GeneratorConfig,
) -> Result<PluginIR, TransformError> {
    let mut ctx = TransformContext::new(schema, config);
    ctx.index_fragments(documents);

    let mut files = Vec::with_capacity(documents.len());
    for doc in documents {
        files.push(operation_extractor::extract_file(&mut ctx, doc)?);
    }

    check_unique_names(
        files.iter()
            .flat_map(|file| file.operations.iter())
            .map(|op| (op.name.as_str(), &op.def_location)),
    )?;
    check_unique_names(
        files.iter()
            .flat_map(|file| file.fragments.iter())
            .map(|frag| (frag.name.as_str(), &frag.def_location)),
    )?;

    operation_extractor::link_fragments(&mut files)?;
    let input_types = ctx.input_types.finalize(schema, config)?;
    check_unique_declarations(schema, &files, &input_types)?;

    Ok(PluginIR {
        files,
        input_types,
    })
}

/// Every declaration is named after its operation or fragment, so those
/// names must be unique across the run.
fn check_unique_names<'a>(
    defs: impl Iterator<Item = (&'a str, &'a loc::FilePosition)>,
) -> Result<(), TransformError> {
    let mut seen: HashMap<&str, &loc::FilePosition> = HashMap::new();
    for (name, def_location) in defs {
        if let Some(first_location) = seen.insert(name, def_location) {
            return Err(TransformError::DuplicateDefinitionName {
                name: name.to_string(),
                location1: first_location.to_owned(),
                location2: def_location.to_owned(),
            });
        }
    }
    Ok(())
}

/// Every flattened declaration lands in one TypeScript module, so names built
/// from different paths (an alias containing `_`, or a fragment named like an
/// operation) must not collide.
fn check_unique_declarations(
    schema: &Schema,
    files: &[FileIR],
    input_types: &[TypeIR],
) -> Result<(), TransformError> {
    let mut decls: Vec<(String, loc::FilePosition)> = vec![];

    for input_type in input_types {
        let Some(def_location) = schema.lookup_type(input_type.name())
            .and_then(GraphQLType::as_input_object)
            .map(|inputobj_type| inputobj_type.def_location().to_owned()) else {
            continue
        };
        input_type.visit_declaration_names(&mut |decl_name| {
            decls.push((decl_name, def_location.to_owned()));
        });
    }

    for file in files {
        for frag in &file.fragments {
            decls.push((frag.name.to_owned(), frag.def_location.to_owned()));
            for field in &frag.fields {
                field.visit_declaration_names(&mut |decl_name| {
                    decls.push((decl_name, frag.def_location.to_owned()));
                });
            }
        }
        for op in &file.operations {
            for root in [&op.variables, &op.data] {
                root.visit_declaration_names(&mut |decl_name| {
                    decls.push((decl_name, op.def_location.to_owned()));
                });
            }
        }
    }

    check_unique_names(decls.iter().map(|(decl_name, location)| (decl_name.as_str(), location)))
}

#[cfg(test)]
mod tests;
