//! The intermediate representation built by [`transform`](crate::transform)
//! and consumed by [`format`](crate::format).

mod file_ir;
mod fragment_ir;
mod modifier;
mod operation_ir;
mod plugin_ir;
mod type_ir;

pub use file_ir::FileIR;
pub use fragment_ir::FragmentIR;
pub use modifier::Modifier;
pub use modifier::Modifiers;
pub use operation_ir::OperationIR;
pub use plugin_ir::PluginIR;
pub use type_ir::TypeIR;
pub use type_ir::TypePayload;
