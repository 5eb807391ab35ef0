use crate::ir::Modifiers;

/// What a [`TypeIR`] node resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum TypePayload {
    /// An object shape made of the selected (or declared) fields.
    Fields(Vec<TypeIR>),

    /// A leaf, already rendered to its declaration-level type (e.g. `string`,
    /// `'A' | 'B'`, or the name of an input-object declaration).
    Scalar(String),

    /// One object shape per matched union member. Every variant carries its
    /// member name in [`TypeIR::typename()`].
    Union(Vec<TypeIR>),
}

/// A node in an output shape tree.
///
/// Each node becomes one flattened declaration named by joining its
/// namespace path and its own name with `_`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeIR {
    pub(crate) fragments: Vec<String>,
    pub(crate) modifiers: Modifiers,
    pub(crate) name: String,
    pub(crate) namespace: Vec<String>,
    pub(crate) payload: TypePayload,
    pub(crate) typename: Option<String>,
}
impl TypeIR {
    pub(crate) fn new(
        namespace: Vec<String>,
        name: impl Into<String>,
        modifiers: Modifiers,
        payload: TypePayload,
    ) -> Self {
        Self {
            fragments: vec![],
            modifiers,
            name: name.into(),
            namespace,
            payload,
            typename: None,
        }
    }

    pub fn declaration_name(&self) -> String {
        let mut decl_name = self.namespace.join("_");
        if !decl_name.is_empty() {
            decl_name.push('_');
        }
        decl_name.push_str(self.name.as_str());
        decl_name
    }

    /// Returns the child fields if this node is an object shape.
    pub fn fields(&self) -> Option<&[TypeIR]> {
        match &self.payload {
            TypePayload::Fields(fields) => Some(fields.as_slice()),
            TypePayload::Scalar(_) | TypePayload::Union(_) => None,
        }
    }

    /// Names of the fragments this node's object shape is intersected with.
    pub fn fragments(&self) -> &[String] {
        self.fragments.as_slice()
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> &[String] {
        self.namespace.as_slice()
    }

    pub fn payload(&self) -> &TypePayload {
        &self.payload
    }

    pub fn scalar(&self) -> Option<&str> {
        match &self.payload {
            TypePayload::Scalar(scalar) => Some(scalar.as_str()),
            TypePayload::Fields(_) | TypePayload::Union(_) => None,
        }
    }

    /// The union member name this node was matched against, if it is a union
    /// variant.
    pub fn typename(&self) -> Option<&str> {
        self.typename.as_deref()
    }

    pub fn union_variants(&self) -> Option<&[TypeIR]> {
        match &self.payload {
            TypePayload::Union(variants) => Some(variants.as_slice()),
            TypePayload::Fields(_) | TypePayload::Scalar(_) => None,
        }
    }

    /// Calls `visit` with the declaration name of this node and of every node
    /// beneath it, in the order they are rendered.
    pub(crate) fn visit_declaration_names(&self, visit: &mut impl FnMut(String)) {
        visit(self.declaration_name());
        match &self.payload {
            TypePayload::Fields(children) | TypePayload::Union(children) => {
                for child in children {
                    child.visit_declaration_names(visit);
                }
            },
            TypePayload::Scalar(_) => (),
        }
    }

    /// Calls `visit` for every fragment name recorded on this node or any
    /// node beneath it, in depth-first order.
    pub(crate) fn visit_fragment_names<'a>(&'a self, visit: &mut impl FnMut(&'a str)) {
        for fragment_name in &self.fragments {
            visit(fragment_name.as_str());
        }
        match &self.payload {
            TypePayload::Fields(children) | TypePayload::Union(children) => {
                for child in children {
                    child.visit_fragment_names(visit);
                }
            },
            TypePayload::Scalar(_) => (),
        }
    }

    pub(crate) fn with_fragments(mut self, fragments: Vec<String>) -> Self {
        self.fragments = fragments;
        self
    }

    pub(crate) fn with_typename(mut self, typename: impl Into<String>) -> Self {
        self.typename = Some(typename.into());
        self
    }
}
