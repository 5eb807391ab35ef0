use crate::ir::TypeIR;
use crate::loc;
use crate::OperationKind;

#[derive(Clone, Debug, PartialEq)]
pub struct OperationIR {
    pub(crate) data: TypeIR,
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fragments: Vec<String>,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) source: String,
    pub(crate) variables: TypeIR,
}
impl OperationIR {
    /// The response shape, resolved against the schema's root type for this
    /// operation's kind.
    pub fn data(&self) -> &TypeIR {
        &self.data
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// Names of every fragment this operation depends on, including fragments
    /// that are only reachable through other fragments.
    pub fn fragments(&self) -> &[String] {
        self.fragments.as_slice()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The operation's raw GraphQL source text.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn variables(&self) -> &TypeIR {
        &self.variables
    }
}
