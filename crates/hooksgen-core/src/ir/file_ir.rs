use crate::ir::FragmentIR;
use crate::ir::OperationIR;
use std::path::Path;
use std::path::PathBuf;

/// Everything extracted from a single document file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileIR {
    pub(crate) file_path: PathBuf,
    pub(crate) fragments: Vec<FragmentIR>,
    pub(crate) operations: Vec<OperationIR>,
}
impl FileIR {
    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }

    pub fn fragments(&self) -> &[FragmentIR] {
        self.fragments.as_slice()
    }

    pub fn operations(&self) -> &[OperationIR] {
        self.operations.as_slice()
    }
}
