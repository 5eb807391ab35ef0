use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::OperationKind;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The name and definition site of a root operation type declared in a
/// `schema { ... }` block.
#[derive(Clone, Debug)]
struct RootTypeDef {
    def_location: loc::FilePosition,
    type_name: String,
}

/// Utility for building a [`Schema`].
///
/// Schema sources may be split across any number of files; type extensions
/// are collected while loading and merged when [`SchemaBuilder::build()`] is
/// called, so an `extend type` may appear before the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    query_type: Option<RootTypeDef>,
    mutation_type: Option<RootTypeDef>,
    subscription_type: Option<RootTypeDef>,
    types: HashMap<String, GraphQLType>,
    type_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.merge_type_extensions()?;

        let query_type = self.resolve_root_type(OperationKind::Query)?
            .ok_or(SchemaBuildError::NoQueryTypeDefined)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type =
            self.resolve_root_type(OperationKind::Subscription)?;

        log::debug!(
            "Built schema with {} types (query root: `{query_type}`).",
            self.types.len(),
        );

        Ok(Schema {
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_files(&[file_path])
    }

    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        let mut builder = Self::new();
        for file_path in file_paths {
            builder.load_file(file_path)?;
        }
        Ok(builder)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_str(file_path, content)?;
        Ok(builder)
    }

    pub fn load_file(&mut self, file_path: impl AsRef<Path>) -> Result<()> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_content(file_path)?;
        self.load_str(Some(file_path), file_content)
    }

    pub fn load_str(
        &mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<()> {
        let doc = ast::schema::parse(content.as_ref())
            .map_err(|err| SchemaBuildError::SchemaParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err,
            })?;
        self.load_ast(file_path, doc)
    }

    pub fn load_ast(
        &mut self,
        file_path: Option<&Path>,
        doc: ast::schema::Document,
    ) -> Result<()> {
        for def in doc.definitions {
            self.visit_definition(file_path, def)?;
        }
        Ok(())
    }

    pub fn new() -> Self {
        Self {
            query_type: None,
            mutation_type: None,
            subscription_type: None,
            type_extensions: vec![],
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    fn add_new_type(
        &mut self,
        def_location: &loc::FilePosition,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location(),
                def2: loc::SchemaDefLocation::Schema(def_location.to_owned()),
            });
        }
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, ext_pos) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_string(), ext.position),
        };
        let extension_type_loc = loc::FilePosition::from_pos(file_path, ext_pos);

        let Some(target_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_type_loc,
            });
        };

        match (target_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                add_enum_values_from_ast(
                    &mut enum_type.values,
                    file_path,
                    type_name.as_str(),
                    &ext.values,
                ),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
                add_input_fields_from_ast(
                    &mut inputobj_type.fields,
                    file_path,
                    type_name.as_str(),
                    &ext.fields,
                ),

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
                add_fields_from_ast(
                    &mut iface_type.fields,
                    file_path,
                    type_name.as_str(),
                    &ext.fields,
                ),

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) =>
                add_fields_from_ast(
                    &mut obj_type.fields,
                    file_path,
                    type_name.as_str(),
                    &ext.fields,
                ),

            // Scalar extensions only carry directives, which codegen ignores.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                add_union_members_from_ast(
                    &mut union_type.members,
                    &extension_type_loc,
                    type_name.as_str(),
                    &ext.types,
                ),

            (schema_type, _) => Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: schema_type.kind(),
                extension_type_loc,
            }),
        }
    }

    fn merge_type_extensions(&mut self) -> Result<()> {
        for (file_path, type_ext) in std::mem::take(&mut self.type_extensions) {
            self.merge_type_extension(file_path.as_deref(), type_ext)?;
        }
        Ok(())
    }

    /// Picks the root type for `kind`: the type named in a `schema { ... }`
    /// block if there was one, else the object type with the default name
    /// (`Query`, `Mutation`, or `Subscription`) if it exists.
    fn resolve_root_type(&self, kind: OperationKind) -> Result<Option<String>> {
        let explicit_def = match kind {
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Query => &self.query_type,
            OperationKind::Subscription => &self.subscription_type,
        };

        let Some(RootTypeDef { def_location, type_name }) = explicit_def else {
            let default_name = match kind {
                OperationKind::Mutation => "Mutation",
                OperationKind::Query => "Query",
                OperationKind::Subscription => "Subscription",
            };
            return Ok(match self.types.get(default_name) {
                Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                _ => None,
            });
        };

        match self.types.get(type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(type_name.to_string())),
            Some(other_type) => Err(SchemaBuildError::RootOperationTypeNotAnObject {
                operation: kind,
                type_kind: other_type.kind(),
                type_name: type_name.to_string(),
                location: def_location.to_owned(),
            }),
            None => Err(SchemaBuildError::UndefinedRootOperationType {
                operation: kind,
                type_name: type_name.to_string(),
                location: def_location.to_owned(),
            }),
        }
    }

    fn visit_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_definition(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.map(|p| p.to_path_buf()), type_ext));
                Ok(())
            },
            // Directive definitions have no bearing on generated types.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_enum_type_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::EnumType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);
        let mut values = IndexMap::new();
        add_enum_values_from_ast(
            &mut values,
            file_path,
            def.name.as_str(),
            &def.values,
        )?;

        self.add_new_type(&def_location, def.name.as_str(), GraphQLType::Enum(EnumType {
            def_location: def_location.to_owned(),
            name: def.name.to_string(),
            values,
        }))
    }

    fn visit_inputobj_type_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::InputObjectType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);
        let mut fields = IndexMap::new();
        add_input_fields_from_ast(
            &mut fields,
            file_path,
            def.name.as_str(),
            &def.fields,
        )?;

        self.add_new_type(&def_location, def.name.as_str(), GraphQLType::InputObject(InputObjectType {
            def_location: def_location.to_owned(),
            fields,
            name: def.name.to_string(),
        }))
    }

    fn visit_interface_type_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::InterfaceType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);
        let mut fields = typename_field_map(&def_location);
        add_fields_from_ast(&mut fields, file_path, def.name.as_str(), &def.fields)?;

        self.add_new_type(&def_location, def.name.as_str(), GraphQLType::Interface(InterfaceType {
            def_location: def_location.to_owned(),
            fields,
            name: def.name.to_string(),
        }))
    }

    fn visit_object_type_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::ObjectType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);
        let mut fields = typename_field_map(&def_location);
        add_fields_from_ast(&mut fields, file_path, def.name.as_str(), &def.fields)?;

        self.add_new_type(&def_location, def.name.as_str(), GraphQLType::Object(ObjectType {
            def_location: def_location.to_owned(),
            fields,
            name: def.name.to_string(),
        }))
    }

    fn visit_scalar_type_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::ScalarType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);
        self.add_new_type(&def_location, def.name.as_str(), GraphQLType::Scalar(ScalarType {
            def_location: def_location.to_owned(),
            name: def.name.to_string(),
        }))
    }

    fn visit_schemablock_definition(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location =
            loc::FilePosition::from_pos(file_path, schema_def.position);

        let root_defs = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];
        for (kind, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue
            };
            let slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_def) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing_def.def_location.to_owned(),
                    location2: def_location,
                });
            }
            *slot = Some(RootTypeDef {
                def_location: def_location.to_owned(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.visit_enum_type_definition(file_path, enum_def),
            TypeDefinition::InputObject(inputobj_def) =>
                self.visit_inputobj_type_definition(file_path, inputobj_def),
            TypeDefinition::Interface(iface_def) =>
                self.visit_interface_type_definition(file_path, iface_def),
            TypeDefinition::Scalar(scalar_def) =>
                self.visit_scalar_type_definition(file_path, scalar_def),
            TypeDefinition::Object(obj_def) =>
                self.visit_object_type_definition(file_path, obj_def),
            TypeDefinition::Union(union_def) =>
                self.visit_union_type_definition(file_path, union_def),
        }
    }

    fn visit_union_type_definition(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::UnionType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);
        let mut members = IndexMap::new();
        add_union_members_from_ast(
            &mut members,
            &def_location,
            def.name.as_str(),
            &def.types,
        )?;

        self.add_new_type(&def_location, def.name.as_str(), GraphQLType::Union(UnionType {
            def_location: def_location.to_owned(),
            members,
            name: def.name.to_string(),
        }))
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_enum_values_from_ast(
    values: &mut IndexMap<String, EnumValue>,
    file_path: Option<&Path>,
    enum_name: &str,
    ast_values: &[ast::schema::EnumValue],
) -> Result<()> {
    for ast_value in ast_values {
        let value_loc = loc::FilePosition::from_pos(file_path, ast_value.position);
        if values.contains_key(ast_value.name.as_str()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_name.to_string(),
                value_name: ast_value.name.to_string(),
                location: value_loc,
            });
        }
        values.insert(ast_value.name.to_string(), EnumValue {
            def_location: value_loc,
            name: ast_value.name.to_string(),
        });
    }
    Ok(())
}

fn add_fields_from_ast(
    fields: &mut IndexMap<String, Field>,
    file_path: Option<&Path>,
    type_name: &str,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    for ast_field in ast_fields {
        // graphql_parser doesn't give us a location for the field's type
        // annotation itself, so the field's position stands in for it.
        let field_loc = loc::FilePosition::from_pos(file_path, ast_field.position);
        if fields.contains_key(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: ast_field.name.to_string(),
                location: field_loc,
            });
        }
        fields.insert(ast_field.name.to_string(), Field {
            type_annotation: TypeAnnotation::from_ast_type(
                &field_loc,
                &ast_field.field_type,
            ),
            def_location: loc::SchemaDefLocation::Schema(field_loc),
            name: ast_field.name.to_string(),
        });
    }
    Ok(())
}

fn add_input_fields_from_ast(
    fields: &mut IndexMap<String, InputField>,
    file_path: Option<&Path>,
    type_name: &str,
    ast_fields: &[ast::schema::InputValue],
) -> Result<()> {
    for ast_field in ast_fields {
        let field_loc = loc::FilePosition::from_pos(file_path, ast_field.position);
        if fields.contains_key(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: ast_field.name.to_string(),
                location: field_loc,
            });
        }
        fields.insert(ast_field.name.to_string(), InputField {
            type_annotation: TypeAnnotation::from_ast_type(
                &field_loc,
                &ast_field.value_type,
            ),
            def_location: field_loc,
            name: ast_field.name.to_string(),
        });
    }
    Ok(())
}

fn add_union_members_from_ast(
    members: &mut IndexMap<String, loc::FilePosition>,
    ref_location: &loc::FilePosition,
    union_name: &str,
    ast_members: &[String],
) -> Result<()> {
    for member_name in ast_members {
        if members.contains_key(member_name.as_str()) {
            return Err(SchemaBuildError::DuplicatedUnionMember {
                type_name: union_name.to_string(),
                member_name: member_name.to_string(),
                location: ref_location.to_owned(),
            });
        }
        members.insert(member_name.to_string(), ref_location.to_owned());
    }
    Ok(())
}

/// Every object and interface type implicitly defines `__typename: String!`.
fn typename_field_map(type_def_location: &loc::FilePosition) -> IndexMap<String, Field> {
    IndexMap::from([
        ("__typename".to_string(), Field {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: "__typename".to_string(),
            type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                nullable: false,
                ref_location: type_def_location.to_owned(),
                type_name: "String".to_string(),
            }),
        }),
    ])
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Enum value `{enum_name}.{value_name}` is defined more than once ({location})")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        location: loc::FilePosition,
    },

    #[error("Field `{type_name}.{field_name}` is defined more than once ({location})")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        location: loc::FilePosition,
    },

    #[error("The {operation} root type is declared twice ({location1} and {location2})")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("Type `{type_name}` is defined more than once ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Union `{type_name}` lists member `{member_name}` more than once ({location})")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::FilePosition,
    },

    #[error("Extension of undefined type `{type_name}` ({extension_type_loc})")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::FilePosition,
    },

    #[error("Type `{type_name}` is a {type_kind} type and can't be extended this way ({extension_type_loc})")]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_type_loc: loc::FilePosition,
    },

    #[error("No query root type is defined in the schema")]
    NoQueryTypeDefined,

    #[error("The {operation} root type `{type_name}` is a {type_kind} type, not an object type ({location})")]
    RootOperationTypeNotAnObject {
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
        location: loc::FilePosition,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(#[from] file_reader::ReadContentError),

    #[error("Error parsing schema{}: {err}", file.as_ref().map(|f| format!(" `{}`", f.display())).unwrap_or_default())]
    SchemaParseError {
        file: Option<PathBuf>,
        err: ast::schema::ParseError,
    },

    #[error("The {operation} root type `{type_name}` is not defined ({location})")]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
        location: loc::FilePosition,
    },
}
