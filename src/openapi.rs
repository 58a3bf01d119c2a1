//! Assembly of per-operation OpenAPI documents.
//!
//! Every operation becomes one self-contained OpenAPI 3.1.1 document with a
//! single POST path. The Hyperliquid API multiplexes operations over two
//! paths (`/info`, `/exchange`), so the path carries the endpoint category
//! and the operation is identified by its tag and request schema.
//!
//! Assembly is deterministic: ordered maps only, no generated timestamps or
//! identifiers. Two runs over the same schemas produce byte-identical
//! documents.

use crate::registry::Endpoint;
use crate::schema::{JsonSchema, SchemaPair};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OpenAPI version stamped on every document.
pub const SPEC_VERSION: &str = "3.1.1";

/// Provider name used in document titles.
pub const PROVIDER: &str = "Hyperliquid";

/// Production API server.
pub const MAINNET_API_URL: &str = "https://api.hyperliquid.xyz";

/// Testnet API server.
pub const TESTNET_API_URL: &str = "https://api.hyperliquid-testnet.xyz";

/// Description of the fixed 422 response.
const DESERIALIZATION_FAILURE: &str = "Failed to deserialize the JSON body into the target type";

/// All assembled documents, keyed by endpoint category and operation name.
pub type SpecMap = BTreeMap<Endpoint, BTreeMap<String, OpenApiDocument>>;

/// Complete OpenAPI document for one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version
    pub openapi: String,
    /// API info
    pub info: Info,
    /// Server list (mainnet, testnet)
    pub servers: Vec<Server>,
    /// The single path of this document
    pub paths: BTreeMap<String, PathItem>,
}

/// OpenAPI Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Document title
    pub title: String,
    /// Document version
    pub version: String,
}

/// OpenAPI Server object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Server base URL
    pub url: String,
    /// Server description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// OpenAPI PathItem object; operations here are always POST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// POST operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
}

/// OpenAPI Operation object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation tags; carries the operation name
    pub tags: Vec<String>,
    /// Request body
    #[serde(rename = "requestBody")]
    pub request_body: RequestBody,
    /// Responses keyed by status code
    pub responses: BTreeMap<String, Response>,
}

/// OpenAPI RequestBody object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Request body description
    pub description: String,
    /// Whether the request body is required
    pub required: bool,
    /// Content types and their schemas
    pub content: BTreeMap<String, MediaType>,
}

/// OpenAPI MediaType object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema for this media type
    pub schema: JsonSchema,
}

/// OpenAPI Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
    /// Response content; absent for bodyless responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaType>>,
}

/// Builds the OpenAPI document for one operation.
pub fn build_document(endpoint: Endpoint, method: &str, pair: &SchemaPair) -> OpenApiDocument {
    let request_description = pair.request.description.clone().unwrap_or_default();
    let response_description = pair.response.description.clone().unwrap_or_default();

    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        Response {
            description: response_description,
            content: Some(json_content(pair.response.clone())),
        },
    );
    responses.insert(
        "422".to_string(),
        Response {
            description: DESERIALIZATION_FAILURE.to_string(),
            content: Some(text_content()),
        },
    );
    // The info endpoint reports internal failures with a bodyless 500; the
    // exchange endpoint folds failures into its response statuses.
    if endpoint == Endpoint::Info {
        responses.insert(
            "500".to_string(),
            Response {
                description: "Internal Server Error".to_string(),
                content: None,
            },
        );
    }

    let operation = Operation {
        tags: vec![method.to_string()],
        request_body: RequestBody {
            description: request_description,
            required: true,
            content: json_content(pair.request.clone()),
        },
        responses,
    };

    let mut paths = BTreeMap::new();
    paths.insert(
        format!("/{}", endpoint.as_str()),
        PathItem {
            post: Some(operation),
        },
    );

    OpenApiDocument {
        openapi: SPEC_VERSION.to_string(),
        info: Info {
            title: format!("{} API - {}/{}", PROVIDER, endpoint.as_str(), method),
            version: "1.0.0".to_string(),
        },
        servers: vec![
            Server {
                url: MAINNET_API_URL.to_string(),
                description: Some("Mainnet".to_string()),
            },
            Server {
                url: TESTNET_API_URL.to_string(),
                description: Some("Testnet".to_string()),
            },
        ],
        paths,
    }
}

fn json_content(schema: JsonSchema) -> BTreeMap<String, MediaType> {
    let mut content = BTreeMap::new();
    content.insert("application/json".to_string(), MediaType { schema });
    content
}

fn text_content() -> BTreeMap<String, MediaType> {
    let mut content = BTreeMap::new();
    content.insert(
        "text/plain".to_string(),
        MediaType {
            schema: JsonSchema {
                schema_type: Some("string".to_string()),
                ..Default::default()
            },
        },
    );
    content
}
