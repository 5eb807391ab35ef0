use crate::loc;
use indexmap::IndexMap;

/// Represents an [enum type](https://spec.graphql.org/October2021/#sec-Enums)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in schema-declaration order.
    pub fn values(&self) -> impl Iterator<Item = &EnumValue> {
        self.values.values()
    }
}

/// Represents a defined value for some [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
