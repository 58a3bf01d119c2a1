//! Resolution of named SDK types into structured definitions.
//!
//! The schema namespace of the SDK is the flat set of structs, enums, and
//! type aliases across every parsed source file. `TypeResolver` looks names
//! up in that namespace and turns the matching item into a `ResolvedType`
//! that the schema converter can walk without touching `syn` again.

use crate::source::ParsedFile;
use crate::symbols::doc_text;
use log::debug;
use std::collections::HashMap;

/// Type resolver over the parsed SDK source.
pub struct TypeResolver<'a> {
    /// All parsed files of the SDK checkout
    parsed_files: &'a [ParsedFile],
    /// Cache of resolved types to avoid redundant parsing
    type_cache: HashMap<String, ResolvedType>,
}

/// Resolved type information
#[derive(Debug, Clone)]
pub struct ResolvedType {
    /// The type name
    pub name: String,
    /// The kind of type (struct, enum, alias, primitive)
    pub kind: TypeKind,
}

/// Type kind - represents different categories of types
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// A struct type with fields
    Struct(StructDef),
    /// An enum type with variants
    Enum(EnumDef),
    /// A type alias; the target is carried as a `TypeInfo`
    Alias(TypeInfo),
    /// A primitive type (String, i32, etc.)
    Primitive(PrimitiveType),
}

/// Struct definition with fields
#[derive(Debug, Clone)]
pub struct StructDef {
    /// Doc comment on the struct itself
    pub docs: String,
    /// Container-level `#[serde(rename_all = "...")]`, if present
    pub rename_all: Option<String>,
    /// The fields of the struct
    pub fields: Vec<FieldDef>,
}

/// Field definition in a struct
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name
    pub name: String,
    /// Doc comment on the field
    pub docs: String,
    /// Type information for the field
    pub type_info: TypeInfo,
    /// Whether the field is optional (wrapped in `Option<T>`)
    pub optional: bool,
    /// Serde attributes applied to this field
    pub serde_attrs: SerdeAttributes,
}

/// Enum definition with variants
#[derive(Debug, Clone)]
pub struct EnumDef {
    /// Doc comment on the enum itself
    pub docs: String,
    /// The variants of the enum; payloads are not represented
    pub variants: Vec<String>,
}

/// Primitive types supported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    Bool,
    Char,
}

/// Serde attributes for a field
#[derive(Debug, Clone, Default)]
pub struct SerdeAttributes {
    /// Renamed field name
    pub rename: Option<String>,
    /// `#[serde(skip)]` or `#[serde(skip_serializing)]` - field never appears in output
    pub skip: bool,
    /// `#[serde(skip_serializing_if = "...")]` - field may be absent from output
    pub skip_serializing_if: bool,
    /// `#[serde(flatten)]` - field's own properties are merged into the parent
    pub flatten: bool,
    /// `#[serde(default)]` - a default is applied before serialization
    pub default: bool,
}

/// Type information extracted from Rust code for schema generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// The base type name (e.g., "String", "OrderRequest", "HashMap")
    pub name: String,
    /// Generic type arguments, in declaration order
    pub generic_args: Vec<TypeInfo>,
    /// Whether this type is wrapped in `Option<T>`
    pub is_option: bool,
    /// Whether this type is a `Vec<T>` (array type)
    pub is_vec: bool,
}

impl TypeInfo {
    /// Create a new TypeInfo for a simple type
    pub fn new(name: String) -> Self {
        Self {
            name,
            generic_args: Vec::new(),
            is_option: false,
            is_vec: false,
        }
    }

    /// Create a TypeInfo for an `Option<T>` type
    pub fn option(inner: TypeInfo) -> Self {
        Self {
            name: inner.name.clone(),
            generic_args: vec![inner],
            is_option: true,
            is_vec: false,
        }
    }

    /// Create a TypeInfo for a `Vec<T>` type
    pub fn vec(inner: TypeInfo) -> Self {
        Self {
            name: inner.name.clone(),
            generic_args: vec![inner],
            is_option: false,
            is_vec: true,
        }
    }

    /// Whether this is a `HashMap`/`BTreeMap` with key and value arguments.
    pub fn is_map(&self) -> bool {
        (self.name == "HashMap" || self.name == "BTreeMap") && self.generic_args.len() == 2
    }
}

impl<'a> TypeResolver<'a> {
    /// Create a new TypeResolver over parsed SDK files
    pub fn new(parsed_files: &'a [ParsedFile]) -> Self {
        debug!("Initializing TypeResolver with {} files", parsed_files.len());
        Self {
            parsed_files,
            type_cache: HashMap::new(),
        }
    }

    /// Whether a struct, enum, or type alias with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find_struct_definition(name).is_some()
            || self.find_enum_definition(name).is_some()
            || self.find_alias_definition(name).is_some()
    }

    /// Find a struct definition by name across all parsed files
    pub fn find_struct_definition(&self, name: &str) -> Option<&syn::ItemStruct> {
        for parsed_file in self.parsed_files {
            for item in &parsed_file.syntax_tree.items {
                if let syn::Item::Struct(item_struct) = item {
                    if item_struct.ident == name {
                        return Some(item_struct);
                    }
                }
            }
        }
        None
    }

    /// Find an enum definition by name across all parsed files
    pub fn find_enum_definition(&self, name: &str) -> Option<&syn::ItemEnum> {
        for parsed_file in self.parsed_files {
            for item in &parsed_file.syntax_tree.items {
                if let syn::Item::Enum(item_enum) = item {
                    if item_enum.ident == name {
                        return Some(item_enum);
                    }
                }
            }
        }
        None
    }

    /// Find a type alias by name across all parsed files
    pub fn find_alias_definition(&self, name: &str) -> Option<&syn::ItemType> {
        for parsed_file in self.parsed_files {
            for item in &parsed_file.syntax_tree.items {
                if let syn::Item::Type(item_type) = item {
                    if item_type.ident == name {
                        return Some(item_type);
                    }
                }
            }
        }
        None
    }

    /// Resolve a type by name
    pub fn resolve_type(&mut self, type_name: &str) -> Option<ResolvedType> {
        if let Some(cached) = self.type_cache.get(type_name) {
            return Some(cached.clone());
        }

        let result = if let Some(primitive) = Self::parse_primitive_type(type_name) {
            Some(ResolvedType {
                name: type_name.to_string(),
                kind: TypeKind::Primitive(primitive),
            })
        } else if let Some(struct_def) = self.find_struct_definition(type_name) {
            Some(Self::parse_struct_definition(struct_def))
        } else if let Some(enum_def) = self.find_enum_definition(type_name) {
            Some(Self::parse_enum_definition(enum_def))
        } else if let Some(alias_def) = self.find_alias_definition(type_name) {
            Some(ResolvedType {
                name: type_name.to_string(),
                kind: TypeKind::Alias(extract_type_info(&alias_def.ty)),
            })
        } else {
            debug!("Could not resolve type: {}", type_name);
            None
        };

        if let Some(resolved) = &result {
            self.type_cache
                .insert(type_name.to_string(), resolved.clone());
        }

        result
    }

    /// Parse a struct definition into a ResolvedType
    fn parse_struct_definition(item_struct: &syn::ItemStruct) -> ResolvedType {
        let struct_name = item_struct.ident.to_string();
        debug!("Parsing struct definition: {}", struct_name);

        let mut fields = Vec::new();
        if let syn::Fields::Named(named_fields) = &item_struct.fields {
            for field in &named_fields.named {
                if let Some(field_def) = Self::parse_field(field) {
                    fields.push(field_def);
                }
            }
        }

        ResolvedType {
            name: struct_name,
            kind: TypeKind::Struct(StructDef {
                docs: doc_text(&item_struct.attrs),
                rename_all: extract_serde_value(&item_struct.attrs, "rename_all"),
                fields,
            }),
        }
    }

    /// Parse an enum definition into a ResolvedType
    fn parse_enum_definition(item_enum: &syn::ItemEnum) -> ResolvedType {
        let enum_name = item_enum.ident.to_string();
        debug!("Parsing enum definition: {}", enum_name);

        let variants: Vec<String> = item_enum
            .variants
            .iter()
            .map(|v| v.ident.to_string())
            .collect();

        ResolvedType {
            name: enum_name,
            kind: TypeKind::Enum(EnumDef {
                docs: doc_text(&item_enum.attrs),
                variants,
            }),
        }
    }

    /// Parse a single field
    fn parse_field(field: &syn::Field) -> Option<FieldDef> {
        let field_name = field.ident.as_ref()?.to_string();
        let type_info = extract_type_info(&field.ty);
        let optional = type_info.is_option;

        Some(FieldDef {
            name: field_name,
            docs: doc_text(&field.attrs),
            type_info,
            optional,
            serde_attrs: parse_serde_attributes(&field.attrs),
        })
    }

    /// Parse a primitive type name
    fn parse_primitive_type(type_name: &str) -> Option<PrimitiveType> {
        match type_name {
            "String" | "str" => Some(PrimitiveType::String),
            "i8" => Some(PrimitiveType::I8),
            "i16" => Some(PrimitiveType::I16),
            "i32" => Some(PrimitiveType::I32),
            "i64" | "isize" => Some(PrimitiveType::I64),
            "i128" => Some(PrimitiveType::I128),
            "u8" => Some(PrimitiveType::U8),
            "u16" => Some(PrimitiveType::U16),
            "u32" => Some(PrimitiveType::U32),
            "u64" | "usize" => Some(PrimitiveType::U64),
            "u128" => Some(PrimitiveType::U128),
            "f32" => Some(PrimitiveType::F32),
            "f64" => Some(PrimitiveType::F64),
            "bool" => Some(PrimitiveType::Bool),
            "char" => Some(PrimitiveType::Char),
            _ => None,
        }
    }
}

/// Parse Serde attributes from field attributes
fn parse_serde_attributes(attrs: &[syn::Attribute]) -> SerdeAttributes {
    let mut serde_attrs = SerdeAttributes::default();

    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        if let Ok(meta_list) = attr.meta.require_list() {
            let tokens_str = meta_list.tokens.to_string();

            if let Some(value) = extract_quoted_value(&tokens_str, "rename") {
                serde_attrs.rename = Some(value);
            }
            if tokens_str.contains("skip_serializing_if") {
                serde_attrs.skip_serializing_if = true;
            } else if tokens_str.contains("skip") {
                serde_attrs.skip = true;
            }
            if tokens_str.contains("flatten") {
                serde_attrs.flatten = true;
            }
            if tokens_str.split(',').any(|part| {
                let part = part.trim();
                part == "default" || part.starts_with("default ")
            }) {
                serde_attrs.default = true;
            }
        }
    }

    serde_attrs
}

/// Extract one quoted serde value (e.g. `rename_all = "camelCase"`) from
/// container attributes.
fn extract_serde_value(attrs: &[syn::Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        if let Ok(meta_list) = attr.meta.require_list() {
            if let Some(value) = extract_quoted_value(&meta_list.tokens.to_string(), key) {
                return Some(value);
            }
        }
    }
    None
}

/// Extract the value of `{key} = "value"` from an attribute token string
fn extract_quoted_value(tokens_str: &str, key: &str) -> Option<String> {
    let key_pos = tokens_str.find(key)?;
    // `rename` must not match inside `rename_all`.
    let after_key = &tokens_str[key_pos + key.len()..];
    if after_key.starts_with('_') {
        return None;
    }
    let eq_pos = after_key.find('=')?;
    let after_eq = &after_key[eq_pos + 1..];
    let start_quote = after_eq.find('"')?;
    let after_start = &after_eq[start_quote + 1..];
    let end_quote = after_start.find('"')?;
    Some(after_start[..end_quote].to_string())
}

/// Extract TypeInfo from a syn::Type
pub fn extract_type_info(ty: &syn::Type) -> TypeInfo {
    match ty {
        syn::Type::Path(type_path) => extract_type_info_from_path(&type_path.path),
        syn::Type::Reference(reference) => extract_type_info(&reference.elem),
        _ => TypeInfo::new("Unknown".to_string()),
    }
}

/// Extract TypeInfo from a syn::Path
fn extract_type_info_from_path(path: &syn::Path) -> TypeInfo {
    let Some(segment) = path.segments.last() else {
        return TypeInfo::new("Unknown".to_string());
    };
    let type_name = segment.ident.to_string();

    let inner_types = |args: &syn::PathArguments| -> Vec<TypeInfo> {
        if let syn::PathArguments::AngleBracketed(args) = args {
            args.args
                .iter()
                .filter_map(|arg| {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        Some(extract_type_info(inner_ty))
                    } else {
                        None
                    }
                })
                .collect()
        } else {
            Vec::new()
        }
    };

    match type_name.as_str() {
        "Option" => {
            if let Some(inner) = inner_types(&segment.arguments).into_iter().next() {
                return TypeInfo::option(inner);
            }
        }
        "Vec" => {
            if let Some(inner) = inner_types(&segment.arguments).into_iter().next() {
                return TypeInfo::vec(inner);
            }
        }
        // Box is transparent for schema purposes.
        "Box" => {
            if let Some(inner) = inner_types(&segment.arguments).into_iter().next() {
                return inner;
            }
        }
        _ => {}
    }

    let generic_args = inner_types(&segment.arguments);
    TypeInfo {
        name: type_name,
        generic_args,
        is_option: false,
        is_vec: false,
    }
}
