use crate::ir::FileIR;
use crate::ir::TypeIR;

/// The root of the IR for one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct PluginIR {
    pub(crate) files: Vec<FileIR>,
    pub(crate) input_types: Vec<TypeIR>,
}
impl PluginIR {
    pub fn files(&self) -> &[FileIR] {
        self.files.as_slice()
    }

    pub fn fragment_count(&self) -> usize {
        self.files.iter().map(|file| file.fragments.len()).sum()
    }

    /// Every input-object type reachable from any operation's variables, one
    /// declaration per schema type, in discovery order.
    pub fn input_types(&self) -> &[TypeIR] {
        self.input_types.as_slice()
    }

    pub fn operation_count(&self) -> usize {
        self.files.iter().map(|file| file.operations.len()).sum()
    }
}
