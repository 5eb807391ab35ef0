use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) ref_location: loc::FilePosition,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    /// Looks up the referenced type. Returns `None` for a dangling reference.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.lookup_type(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::FilePosition {
        &self.ref_location
    }
}
