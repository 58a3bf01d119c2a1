//! Hyperliquid docs pipeline - OpenAPI documentation from the SDK source.
//!
//! This library generates one OpenAPI 3.1.1 document per Hyperliquid API
//! operation by analyzing the SDK's source code, then synchronizes the
//! results with a GitBook organization and a local table-of-contents
//! document. It uses static analysis only; the SDK is never compiled or
//! executed.
//!
//! # Architecture
//!
//! The pipeline is a sequence of modules that each hand their output to the
//! next:
//!
//! 1. [`registry`] - Static registry of operations per endpoint category
//! 2. [`source`] - Scans the SDK checkout and parses Rust files into ASTs
//! 3. [`symbols`] - Symbol tables of the client source files
//! 4. [`resolver`] - Resolves operation names to schema type names
//! 5. [`types`] - Resolves schema type names to their definitions
//! 6. [`schema`] - Converts type definitions to JSON Schema
//! 7. [`openapi`] - Assembles per-operation OpenAPI documents
//! 8. [`toc`] - Regenerates the API section of the table of contents
//! 9. [`publisher`] - Reconciles the GitBook spec collection
//!
//! # Example Usage
//!
//! ```no_run
//! use hl_docs::cli::generate_specs;
//! use hl_docs::registry::DEFAULT_SKIP;
//! use hl_docs::source::SdkSource;
//! use std::path::Path;
//!
//! let source = SdkSource::load(Path::new("./hyperliquid-sdk")).unwrap();
//! let skip: Vec<String> = DEFAULT_SKIP.iter().map(|s| s.to_string()).collect();
//! let specs = generate_specs(&source, &skip).unwrap();
//! for (endpoint, methods) in &specs {
//!     for method in methods.keys() {
//!         println!("{}", endpoint.slug(method));
//!     }
//! }
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides the
//! complete batch job, including publishing.

pub mod cli;
pub mod config;
pub mod error;
pub mod openapi;
pub mod publisher;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod serializer;
pub mod source;
pub mod symbols;
pub mod toc;
pub mod types;
