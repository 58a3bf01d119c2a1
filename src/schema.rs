//! Conversion of SDK type definitions into standard JSON Schema.
//!
//! Every generated OpenAPI document must stand on its own, so schemas are
//! inlined rather than shared through a components section. The converter
//! walks a resolved type recursively; unknown or unsupported constructs
//! degrade to a permissive `object` instead of failing, and circular
//! references are cut the same way.
//!
//! Schemas describe the serialized value after serde has applied its
//! defaults ("output mode"): a `#[serde(default)]` field is always present
//! in the output and therefore required, a `#[serde(skip_serializing_if)]`
//! field may be absent, and skipped fields do not appear at all. Any
//! `default` keyword produced along the way is stripped from the final
//! schema.

use crate::error::{Error, Result};
use crate::types::{FieldDef, PrimitiveType, StructDef, TypeInfo, TypeKind, TypeResolver};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A JSON Schema fragment.
///
/// Maps are ordered so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// The type of the schema (string, integer, object, array, etc.)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Human-readable description, taken from doc comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties for object types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, JsonSchema>>,
    /// Required property names for object types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Items schema for array types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchema>>,
    /// Value schema for map-like objects
    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<JsonSchema>>,
    /// Enum values for enum types
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Format for primitive types (e.g., "int32", "int64", "float", "double")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Default-value annotation; always stripped before a schema leaves the
    /// converter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl JsonSchema {
    /// A schema accepting any object; the fallback for unknown constructs.
    fn permissive_object() -> JsonSchema {
        JsonSchema {
            schema_type: Some("object".to_string()),
            ..Default::default()
        }
    }
}

/// The converted request/response schemas of one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaPair {
    pub request: JsonSchema,
    pub response: JsonSchema,
}

/// Schema converter over the SDK's type namespace.
pub struct SchemaConverter<'a> {
    types: TypeResolver<'a>,
    /// Names currently being inlined, to cut circular references
    converting: HashSet<String>,
}

impl<'a> SchemaConverter<'a> {
    /// Create a new SchemaConverter with a TypeResolver
    pub fn new(types: TypeResolver<'a>) -> Self {
        Self {
            types,
            converting: HashSet::new(),
        }
    }

    /// The underlying type namespace, for existence checks.
    pub fn types(&self) -> &TypeResolver<'a> {
        &self.types
    }

    /// Converts the named type into a self-contained JSON Schema.
    ///
    /// The root name must exist in the schema namespace; nested names that
    /// cannot be resolved degrade to permissive objects.
    pub fn convert(&mut self, name: &str) -> Result<JsonSchema> {
        debug!("Converting schema: {}", name);

        if !self.types.contains(name) {
            return Err(Error::NotFound(format!(
                "schema `{}` not found in SDK type namespace",
                name
            )));
        }

        let mut schema = self.schema_for_named(name);
        strip_defaults(&mut schema);
        Ok(schema)
    }

    /// Converts both halves of a resolved operation.
    pub fn convert_pair(&mut self, request: &str, response: &str) -> Result<SchemaPair> {
        Ok(SchemaPair {
            request: self.convert(request)?,
            response: self.convert(response)?,
        })
    }

    fn schema_for_named(&mut self, name: &str) -> JsonSchema {
        if self.converting.contains(name) {
            debug!("Cutting circular reference at {}", name);
            return JsonSchema::permissive_object();
        }

        let Some(resolved) = self.types.resolve_type(name) else {
            debug!("Unknown type {}, using object placeholder", name);
            return JsonSchema::permissive_object();
        };

        match resolved.kind {
            TypeKind::Primitive(prim) => primitive_schema(&prim),
            TypeKind::Struct(struct_def) => {
                self.converting.insert(name.to_string());
                let schema = self.struct_schema(&struct_def);
                self.converting.remove(name);
                schema
            }
            TypeKind::Enum(enum_def) => JsonSchema {
                schema_type: Some("string".to_string()),
                description: non_empty(enum_def.docs),
                enum_values: Some(enum_def.variants),
                ..Default::default()
            },
            TypeKind::Alias(target) => {
                self.converting.insert(name.to_string());
                let schema = self.schema_for_type_info(&target);
                self.converting.remove(name);
                schema
            }
        }
    }

    fn schema_for_type_info(&mut self, type_info: &TypeInfo) -> JsonSchema {
        // Option<T> carries T's schema; presence is a property of the field.
        if type_info.is_option {
            if let Some(inner) = type_info.generic_args.first() {
                return self.schema_for_type_info(inner);
            }
        }

        if type_info.is_vec {
            if let Some(inner) = type_info.generic_args.first() {
                return JsonSchema {
                    schema_type: Some("array".to_string()),
                    items: Some(Box::new(self.schema_for_type_info(inner))),
                    ..Default::default()
                };
            }
        }

        if type_info.is_map() {
            let value_schema = self.schema_for_type_info(&type_info.generic_args[1]);
            return JsonSchema {
                schema_type: Some("object".to_string()),
                additional_properties: Some(Box::new(value_schema)),
                ..Default::default()
            };
        }

        self.schema_for_named(&type_info.name)
    }

    fn struct_schema(&mut self, struct_def: &StructDef) -> JsonSchema {
        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for field in &struct_def.fields {
            // Skipped fields never reach the serialized output.
            if field.serde_attrs.skip {
                continue;
            }

            if field.serde_attrs.flatten {
                self.flatten_field(field, &mut properties, &mut required);
                continue;
            }

            let field_name = output_field_name(field, struct_def.rename_all.as_deref());
            let mut property = self.schema_for_type_info(&field.type_info);

            if let Some(docs) = non_empty(field.docs.clone()) {
                property.description = Some(docs);
            }
            if field.serde_attrs.default {
                property.default = default_value(&field.type_info, &mut self.types);
            }

            if is_required_in_output(field) {
                required.push(field_name.clone());
            }
            properties.insert(field_name, property);
        }

        JsonSchema {
            schema_type: Some("object".to_string()),
            description: non_empty(struct_def.docs.clone()),
            properties: Some(properties),
            required: if required.is_empty() {
                None
            } else {
                Some(required)
            },
            ..Default::default()
        }
    }

    /// Merges a `#[serde(flatten)]` field's properties into the parent.
    fn flatten_field(
        &mut self,
        field: &FieldDef,
        properties: &mut BTreeMap<String, JsonSchema>,
        required: &mut Vec<String>,
    ) {
        let inlined = self.schema_for_type_info(&field.type_info);

        if let Some(inner_props) = inlined.properties {
            for (name, prop) in inner_props {
                properties.entry(name).or_insert(prop);
            }
            if let Some(inner_required) = inlined.required {
                // An optional flattened field may be absent entirely.
                if is_required_in_output(field) {
                    for name in inner_required {
                        if !required.contains(&name) {
                            required.push(name);
                        }
                    }
                }
            }
        } else {
            debug!(
                "Field `{}` is flattened but its type is not an object; ignoring",
                field.name
            );
        }
    }
}

/// Whether a field is guaranteed present in the serialized output.
fn is_required_in_output(field: &FieldDef) -> bool {
    if field.serde_attrs.default {
        return true;
    }
    !field.optional && !field.serde_attrs.skip_serializing_if
}

/// The serialized name of a field, after rename attributes.
fn output_field_name(field: &FieldDef, rename_all: Option<&str>) -> String {
    if let Some(rename) = &field.serde_attrs.rename {
        return rename.clone();
    }
    match rename_all {
        Some("camelCase") => camel_case(&field.name),
        Some("lowercase") => field.name.to_lowercase(),
        Some("UPPERCASE") => field.name.to_uppercase(),
        _ => field.name.clone(),
    }
}

/// snake_case to camelCase
fn camel_case(name: &str) -> String {
    let mut parts = name.split('_').filter(|p| !p.is_empty());
    let mut out = String::new();
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Convert a primitive type to a JSON Schema with an OpenAPI format
fn primitive_schema(primitive: &PrimitiveType) -> JsonSchema {
    let (schema_type, format) = match primitive {
        PrimitiveType::String => ("string", None),
        PrimitiveType::I8 | PrimitiveType::I16 | PrimitiveType::I32 => ("integer", Some("int32")),
        PrimitiveType::I64 | PrimitiveType::I128 => ("integer", Some("int64")),
        PrimitiveType::U8 | PrimitiveType::U16 | PrimitiveType::U32 => ("integer", Some("int32")),
        PrimitiveType::U64 | PrimitiveType::U128 => ("integer", Some("int64")),
        PrimitiveType::F32 => ("number", Some("float")),
        PrimitiveType::F64 => ("number", Some("double")),
        PrimitiveType::Bool => ("boolean", None),
        PrimitiveType::Char => ("string", None),
    };

    JsonSchema {
        schema_type: Some(schema_type.to_string()),
        format: format.map(|s| s.to_string()),
        ..Default::default()
    }
}

/// The serde default for a field type, when it is knowable statically.
fn default_value(type_info: &TypeInfo, types: &mut TypeResolver) -> Option<serde_json::Value> {
    if type_info.is_option {
        return Some(serde_json::Value::Null);
    }
    if type_info.is_vec {
        return Some(serde_json::json!([]));
    }
    if type_info.is_map() {
        return Some(serde_json::json!({}));
    }

    let resolved = types.resolve_type(&type_info.name)?;
    if let TypeKind::Primitive(prim) = resolved.kind {
        let value = match prim {
            PrimitiveType::String | PrimitiveType::Char => serde_json::json!(""),
            PrimitiveType::Bool => serde_json::json!(false),
            PrimitiveType::F32 | PrimitiveType::F64 => serde_json::json!(0.0),
            _ => serde_json::json!(0),
        };
        return Some(value);
    }
    None
}

/// Removes every `default` annotation from the schema tree.
pub fn strip_defaults(schema: &mut JsonSchema) {
    schema.default = None;

    if let Some(properties) = &mut schema.properties {
        for property in properties.values_mut() {
            strip_defaults(property);
        }
    }
    if let Some(items) = &mut schema.items {
        strip_defaults(items);
    }
    if let Some(additional) = &mut schema.additional_properties {
        strip_defaults(additional);
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
