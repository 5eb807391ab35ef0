use crate::ast;
use crate::file_reader;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// A parsed executable document along with the file it came from and its
/// original source text.
#[derive(Clone, Debug)]
pub struct DocumentFile {
    pub(crate) ast: ast::operation::Document,
    pub(crate) file_path: PathBuf,
    pub(crate) source: String,
}
impl DocumentFile {
    pub fn ast(&self) -> &ast::operation::Document {
        &self.ast
    }

    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }

    /// Wraps an already-parsed document.
    ///
    /// `source` should be the text `ast` was parsed from. When it isn't (for
    /// example a hand-built AST paired with an empty string), definition
    /// source text falls back to graphql_parser's canonical rendering.
    pub fn from_ast(
        file_path: impl Into<PathBuf>,
        source: impl Into<String>,
        ast: ast::operation::Document,
    ) -> Self {
        Self {
            ast,
            file_path: file_path.into(),
            source: source.into(),
        }
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, DocumentParseError> {
        let file_path = file_path.as_ref();
        let source = file_reader::read_content(file_path)?;
        Self::parse(file_path, source)
    }

    pub fn parse(
        file_path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Result<Self, DocumentParseError> {
        let file_path = file_path.into();
        let source = source.into();
        let ast = ast::operation::parse(source.as_str())
            .map_err(|err| DocumentParseError::ParseError {
                file: file_path.to_owned(),
                err,
            })?;
        Ok(Self { ast, file_path, source })
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Returns the raw source text of each top-level definition, indexed the
    /// same as `self.ast().definitions`.
    pub(crate) fn definition_sources(&self) -> Vec<String> {
        let defs = &self.ast.definitions;
        let offsets: Option<Vec<usize>> = defs.iter()
            .map(|def| byte_offset(self.source.as_str(), definition_pos(def)))
            .collect();

        let offsets = match offsets {
            Some(offsets) if offsets.windows(2).all(|w| w[0] < w[1]) => offsets,
            _ => return defs.iter().map(|def| def.to_string().trim().to_string()).collect(),
        };

        defs.iter().enumerate().map(|(idx, def)| {
            let start = offsets[idx];
            let end = offsets.get(idx + 1).copied().unwrap_or(self.source.len());
            let text = strip_trailing_comments(&self.source[start..end]);
            if text.is_empty() {
                def.to_string().trim().to_string()
            } else {
                text.to_string()
            }
        }).collect()
    }
}

fn definition_pos(def: &ast::operation::Definition) -> ast::AstPos {
    use graphql_parser::query::Definition;
    use graphql_parser::query::OperationDefinition;
    match def {
        Definition::Fragment(frag) => frag.position,
        Definition::Operation(OperationDefinition::Mutation(op)) => op.position,
        Definition::Operation(OperationDefinition::Query(op)) => op.position,
        Definition::Operation(OperationDefinition::SelectionSet(set)) => set.span.0,
        Definition::Operation(OperationDefinition::Subscription(op)) => op.position,
    }
}

/// Maps a 1-based line/column position to a byte offset into `source`.
fn byte_offset(source: &str, pos: ast::AstPos) -> Option<usize> {
    if pos.line == 0 || pos.column == 0 {
        return None;
    }

    let mut line_start = 0;
    for _ in 1..pos.line {
        line_start += source[line_start..].find('\n')? + 1;
    }

    let line = source[line_start..].split('\n').next().unwrap_or("");
    let col_idx = pos.column - 1;
    let col_offset = line.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()))
        .nth(col_idx)?;
    Some(line_start + col_offset)
}

/// Comment lines between two definitions belong to the one that follows.
fn strip_trailing_comments(text: &str) -> &str {
    let mut text = text.trim();
    while let Some((head, last_line)) = text.rsplit_once('\n') {
        if !last_line.trim_start().starts_with('#') {
            break;
        }
        text = head.trim_end();
    }
    text
}

#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("Failure while trying to read a document file from disk: {0}")]
    FileReadError(#[from] file_reader::ReadContentError),

    #[error("Error parsing document `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: ast::operation::ParseError,
    },
}
