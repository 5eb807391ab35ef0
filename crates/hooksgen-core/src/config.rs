use indexmap::IndexMap;

const DEFAULT_ID_TYPE: &str = "string";

/// Options recognized by the generator.
///
/// Deserializes from the camelCase keys used in codegen config files, e.g.:
///
/// ```json
/// {
///   "idType": "number",
///   "scalarTypes": { "DateTime": "string", "JSON": "unknown" },
///   "subscriptions": true
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// TypeScript type used for GraphQL's `ID` scalar. Defaults to `string`.
    pub id_type: Option<String>,

    /// Mapping of custom GraphQL scalar names to TypeScript types. Scalars
    /// missing from this map are rendered as `any`.
    pub scalar_types: IndexMap<String, String>,

    /// Whether `subscription` operations may be generated. When disabled, any
    /// subscription aborts generation.
    pub subscriptions: bool,
}
impl GeneratorConfig {
    pub fn id_type(&self) -> &str {
        self.id_type.as_deref().unwrap_or(DEFAULT_ID_TYPE)
    }

    pub fn custom_scalar(&self, scalar_name: &str) -> Option<&str> {
        self.scalar_types.get(scalar_name).map(|s| s.as_str())
    }
}
