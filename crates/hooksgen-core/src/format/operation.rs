use crate::format::type_decl::FieldPosition;
use crate::format::type_decl::ObjectShape;
use crate::format::type_decl::TypeDeclarations;
use crate::ir::FragmentIR;
use crate::ir::OperationIR;
use crate::OperationKind;
use std::fmt;

/// Escapes `source` for embedding in a JavaScript template literal.
pub fn escape_template_literal(source: &str) -> String {
    source
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

fn define_fn_name(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Mutation => "defineMutation",
        OperationKind::Query => "defineQuery",
        OperationKind::Subscription => "defineSubscription",
    }
}

pub(crate) fn fragment_binding_name(fragment_name: &str) -> String {
    format!("_gql_{fragment_name}")
}

/// The runtime binding for an operation followed by its variables and data
/// declarations.
pub struct OperationDeclarations<'a>(pub &'a OperationIR);
impl fmt::Display for OperationDeclarations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.0;
        let variables_name = op.variables().declaration_name();
        let data_name = op.data().declaration_name();

        write!(
            f,
            "export const {} = {}<{variables_name}, {data_name}>(gql`{}",
            op.name(),
            define_fn_name(op.kind()),
            escape_template_literal(op.source()),
        )?;
        for fragment_name in op.fragments() {
            write!(f, "\n${{{}}}", fragment_binding_name(fragment_name))?;
        }
        writeln!(f, "`)")?;

        write!(f, "{}", TypeDeclarations {
            position: FieldPosition::Input,
            type_ir: op.variables(),
        })?;
        write!(f, "{}", TypeDeclarations {
            position: FieldPosition::Output,
            type_ir: op.data(),
        })
    }
}

/// A fragment's shape declaration, one declaration per nested field, and the
/// `gql` binding that operations interpolate.
pub struct FragmentDeclarations<'a>(pub &'a FragmentIR);
impl fmt::Display for FragmentDeclarations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frag = self.0;

        write!(f, "export type {} = ", frag.name())?;
        for fragment_name in frag.fragments() {
            write!(f, "{fragment_name} & ")?;
        }
        writeln!(f, "{}", ObjectShape {
            fields: frag.fields(),
            position: FieldPosition::Output,
            typename: None,
        })?;

        for field in frag.fields() {
            write!(f, "{}", TypeDeclarations {
                position: FieldPosition::Output,
                type_ir: field,
            })?;
        }

        writeln!(
            f,
            "const {} = gql`{}`",
            fragment_binding_name(frag.name()),
            escape_template_literal(frag.source()),
        )
    }
}
