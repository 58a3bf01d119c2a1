//! Serialization of OpenAPI documents to JSON or YAML.
//!
//! JSON is the wire format for publishing; YAML is offered for local dumps
//! because it reads better in review.

use crate::error::Result;
use crate::openapi::OpenApiDocument;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes an OpenAPI document to pretty-printed JSON.
///
/// This is also the exact text uploaded to the documentation host, so the
/// output is deterministic for a given document.
pub fn serialize_json(doc: &OpenApiDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Serializes an OpenAPI document to YAML.
pub fn serialize_yaml(doc: &OpenApiDocument) -> Result<String> {
    Ok(serde_yaml::to_string(doc)?)
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Parent directories are created as needed.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::build_document;
    use crate::registry::Endpoint;
    use crate::schema::SchemaPair;
    use tempfile::TempDir;

    fn sample_document() -> OpenApiDocument {
        build_document(Endpoint::Info, "allMids", &SchemaPair {
            request: Default::default(),
            response: Default::default(),
        })
    }

    #[test]
    fn test_serialize_json() {
        let json = serialize_json(&sample_document()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["openapi"], "3.1.1");
        assert_eq!(parsed["info"]["title"], "Hyperliquid API - info/allMids");
        assert!(parsed["paths"]["/info"]["post"].is_object());

        // Pretty printing for review and stable diffs.
        assert!(json.contains('\n'));
        assert!(json.contains("  "));
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&sample_document()).unwrap();

        assert!(yaml.contains("openapi: 3.1.1"));
        assert!(yaml.contains("title: Hyperliquid API - info/allMids"));
        assert!(yaml.contains("/info:"));
    }

    #[test]
    fn test_json_yaml_agree() {
        let doc = sample_document();
        let from_json: OpenApiDocument =
            serde_json::from_str(&serialize_json(&doc).unwrap()).unwrap();
        let from_yaml: OpenApiDocument =
            serde_yaml::from_str(&serialize_yaml(&doc).unwrap()).unwrap();

        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spec.json");

        write_to_file("content", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("specs").join("spec.json");

        write_to_file("content", &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spec.json");

        write_to_file("old", &path).unwrap();
        write_to_file("new", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
