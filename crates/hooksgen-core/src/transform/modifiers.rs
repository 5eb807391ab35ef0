use crate::ir::Modifier;
use crate::ir::Modifiers;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;

/// Peels every list and nullability layer off of `annot`.
///
/// Returns the modifiers in outer-to-inner order along with the named type
/// left at the core. A bare named type yields `[Nullable]`.
pub fn unwrap_modifiers(annot: &TypeAnnotation) -> (Modifiers, &NamedTypeAnnotation) {
    unwrap_layer(annot, Modifiers::new())
}

fn unwrap_layer(
    annot: &TypeAnnotation,
    mut modifiers: Modifiers,
) -> (Modifiers, &NamedTypeAnnotation) {
    if annot.nullable() {
        modifiers.push(Modifier::Nullable);
    }

    match annot {
        TypeAnnotation::List(list_annot) => {
            modifiers.push(Modifier::ArrayOf);
            unwrap_layer(list_annot.inner_type_annotation(), modifiers)
        },
        TypeAnnotation::Named(named_annot) => (modifiers, named_annot),
    }
}
