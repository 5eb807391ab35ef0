use crate::ir::Modifier;
use crate::ir::TypeIR;
use crate::ir::TypePayload;
use std::fmt;

/// Whether a shape tree describes values sent to the server or received from
/// it. Nullable input properties may be omitted entirely, so they are
/// rendered optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPosition {
    Input,
    Output,
}

/// Wraps `base` in `modifiers`, applying the innermost modifier first.
///
/// ```
/// use hooksgen_core::format::apply_modifiers;
/// use hooksgen_core::ir::Modifier;
///
/// assert_eq!(
///     apply_modifiers(&[Modifier::ArrayOf, Modifier::Nullable], "string"),
///     "Array<string | null>",
/// );
/// ```
pub fn apply_modifiers(modifiers: &[Modifier], base: &str) -> String {
    modifiers.iter().rev().fold(base.to_string(), |inner, modifier| match modifier {
        Modifier::ArrayOf => format!("Array<{inner}>"),
        Modifier::Nullable => format!("{inner} | null"),
    })
}

/// Renders `type_ir` and every node beneath it as flat, sibling
/// `export type` declarations.
pub struct TypeDeclarations<'a> {
    pub position: FieldPosition,
    pub type_ir: &'a TypeIR,
}
impl fmt::Display for TypeDeclarations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_ir = self.type_ir;
        write!(f, "export type {} = ", type_ir.declaration_name())?;

        match type_ir.payload() {
            TypePayload::Scalar(scalar) => writeln!(f, "{scalar}")?,

            TypePayload::Fields(fields) => {
                for fragment_name in type_ir.fragments() {
                    write!(f, "{fragment_name} & ")?;
                }
                writeln!(f, "{}", ObjectShape {
                    fields,
                    position: self.position,
                    typename: type_ir.typename(),
                })?;
                for field in fields {
                    write!(f, "{}", TypeDeclarations {
                        position: self.position,
                        type_ir: field,
                    })?;
                }
            },

            TypePayload::Union(variants) => {
                if variants.is_empty() {
                    writeln!(f, "never")?;
                } else {
                    let variant_names: Vec<String> = variants.iter()
                        .map(TypeIR::declaration_name)
                        .collect();
                    writeln!(f, "{}", variant_names.join(" | "))?;
                }
                for variant in variants {
                    write!(f, "{}", TypeDeclarations {
                        position: self.position,
                        type_ir: variant,
                    })?;
                }
            },
        }

        Ok(())
    }
}

/// The `{ ... }` body of an object-shaped declaration. Each property refers to
/// the child's own declaration by name.
pub(crate) struct ObjectShape<'a> {
    pub fields: &'a [TypeIR],
    pub position: FieldPosition,
    pub typename: Option<&'a str>,
}
impl fmt::Display for ObjectShape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() && self.typename.is_none() {
            return f.write_str("{}");
        }

        f.write_str("{\n")?;
        if let Some(typename) = self.typename {
            writeln!(f, "  __typename: '{typename}'")?;
        }
        for field in self.fields {
            let optional = self.position == FieldPosition::Input
                && field.modifiers().first() == Some(&Modifier::Nullable);
            writeln!(
                f,
                "  {}{}: {}",
                field.name(),
                if optional { "?" } else { "" },
                apply_modifiers(field.modifiers(), field.declaration_name().as_str()),
            )?;
        }
        f.write_str("}")
    }
}
