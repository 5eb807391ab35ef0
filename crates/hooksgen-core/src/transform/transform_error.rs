use crate::loc;
use crate::types::GraphQLTypeKind;
use crate::OperationKind;
use thiserror::Error;

/// The kinds of selection that can appear in a selection set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionKind {
    Field,
    InlineFragment,
}
impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Field => "field",
            Self::InlineFragment => "inline fragment",
        })
    }
}

/// Where in a document a type was referenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeRefPosition {
    FragmentTypeCondition,
    InputField,
    ResponseField,
    Variable,
}
impl std::fmt::Display for TypeRefPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FragmentTypeCondition => "fragment type condition",
            Self::InputField => "input field",
            Self::ResponseField => "response field",
            Self::Variable => "variable",
        })
    }
}

/// A fatal error raised while building the IR. Generation stops at the first
/// one; there is no partial output.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("`{name}` is defined more than once ({location1} and {location2})")]
    DuplicateDefinitionName {
        name: String,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("The schema defines no {kind} root type for operation `{operation_name}` ({location})")]
    NoRootOperationType {
        kind: OperationKind,
        operation_name: String,
        location: loc::FilePosition,
    },

    #[error("Type `{type_name}` has no field named `{field_name}` ({location})")]
    UndefinedField {
        type_name: String,
        field_name: String,
        location: loc::FilePosition,
    },

    #[error("`{referenced_by}` spreads fragment `{fragment_name}`, which is not defined in any document")]
    UndefinedFragment {
        fragment_name: String,
        referenced_by: String,
    },

    #[error("{kind} operations are not supported by this generator configuration (`{operation_name}` at {location})")]
    UnresolvedOperationCapability {
        kind: OperationKind,
        operation_name: String,
        location: loc::FilePosition,
    },

    #[error("Type `{type_name}` is not defined in the schema ({location})")]
    UnresolvedSchemaType {
        type_name: String,
        location: loc::FilePosition,
    },

    #[error("Unsupported definition: {description} ({location})")]
    UnsupportedDefinitionKind {
        description: String,
        location: loc::FilePosition,
    },

    #[error("Unsupported {selection_kind} in a selection set on `{parent_type_name}` ({location})")]
    UnsupportedSelectionKind {
        selection_kind: SelectionKind,
        parent_type_name: String,
        location: loc::FilePosition,
    },

    #[error("Type `{type_name}` ({type_kind}) can't be used as a {position} ({location})")]
    UnsupportedTypeReference {
        type_name: String,
        type_kind: GraphQLTypeKind,
        position: TypeRefPosition,
        location: loc::FilePosition,
    },
}
