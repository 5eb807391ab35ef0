use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::GeneratorConfig;

const ANY_LEAF: &str = "any";

/// Resolves a leaf schema type (a scalar or an enum) to the TypeScript type
/// it is declared as.
///
/// Returns `None` for types that aren't leaves.
pub(crate) fn resolve_leaf(
    config: &GeneratorConfig,
    type_: &GraphQLType,
) -> Option<String> {
    Some(match type_ {
        GraphQLType::Bool => "boolean".to_string(),
        GraphQLType::Float | GraphQLType::Int => "number".to_string(),
        GraphQLType::ID => config.id_type().to_string(),
        GraphQLType::String => "string".to_string(),
        GraphQLType::Scalar(scalar_type) =>
            resolve_custom_scalar(config, scalar_type.name()),
        GraphQLType::Enum(enum_type) => enum_literal_union(enum_type),

        GraphQLType::InputObject(_)
            | GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => return None,
    })
}

fn resolve_custom_scalar(config: &GeneratorConfig, scalar_name: &str) -> String {
    match config.custom_scalar(scalar_name) {
        Some(ts_type) => ts_type.to_string(),
        None => {
            log::debug!(
                "No TypeScript type configured for custom scalar `{scalar_name}`; \
                using `{ANY_LEAF}`.",
            );
            ANY_LEAF.to_string()
        },
    }
}

fn enum_literal_union(enum_type: &EnumType) -> String {
    let literals: Vec<String> = enum_type.values()
        .map(|value| format!("'{}'", value.name()))
        .collect();

    if literals.is_empty() {
        "never".to_string()
    } else {
        literals.join(" | ")
    }
}
