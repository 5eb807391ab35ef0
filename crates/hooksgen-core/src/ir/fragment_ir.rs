use crate::ir::TypeIR;
use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentIR {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: Vec<TypeIR>,
    pub(crate) fragments: Vec<String>,
    pub(crate) name: String,
    pub(crate) source: String,
    pub(crate) type_condition: String,
}
impl FragmentIR {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fields(&self) -> &[TypeIR] {
        self.fields.as_slice()
    }

    /// Fragments spread directly into this fragment's top-level selection set.
    pub fn fragments(&self) -> &[String] {
        self.fragments.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
