pub mod ast;
mod config;
mod document_file;
pub mod file_reader;
pub mod format;
pub mod ir;
pub mod loc;
mod operation_kind;
pub mod schema;
pub mod transform;
pub mod types;

pub use config::GeneratorConfig;
pub use document_file::DocumentFile;
pub use document_file::DocumentParseError;
pub use format::format;
pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use transform::transform;
pub use transform::TransformError;

/// Transforms `documents` against `schema` and renders the result.
///
/// This is [`transform()`] followed by [`format()`].
pub fn generate(
    schema: &Schema,
    documents: &[DocumentFile],
    config: &GeneratorConfig,
) -> Result<String, TransformError> {
    let ir = transform(schema, documents, config)?;
    Ok(format(&ir, config))
}
