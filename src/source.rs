//! Loading a Hyperliquid SDK checkout into parsed syntax trees.
//!
//! The pipeline never compiles or executes the SDK; it reads the source
//! directly. `SdkSource::load` walks the checkout with `walkdir`, parses
//! every `.rs` file with `syn`, and keeps the results in memory for the
//! symbol table and the schema converter to query.

use crate::error::{Error, Result};
use crate::registry::Endpoint;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A successfully parsed Rust file with its abstract syntax tree.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// The parsed abstract syntax tree
    pub syntax_tree: syn::File,
}

/// All parsed source files of one SDK checkout.
#[derive(Debug)]
pub struct SdkSource {
    files: Vec<ParsedFile>,
}

impl SdkSource {
    /// Walks `root` and parses every Rust file found.
    ///
    /// Hidden directories and `target` are skipped. Files that fail to parse
    /// are logged as warnings and left out; the SDK checkout may contain
    /// fixtures or generated code that is not valid on its own. An
    /// unreadable root directory is an error.
    pub fn load(root: &Path) -> Result<SdkSource> {
        debug!("Loading SDK source from {}", root.display());

        if !root.is_dir() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("SDK path is not a directory: {}", root.display()),
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).into_iter().filter_entry(|e| {
            if e.path() == root {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && name != "target"
        }) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to access path: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("rs") {
                continue;
            }

            match Self::parse_file(path) {
                Ok(parsed) => files.push(parsed),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        debug!("Parsed {} SDK source files", files.len());
        Ok(SdkSource { files })
    }

    /// Parses a single Rust source file into an AST.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        let content = fs::read_to_string(path)?;
        let syntax_tree = syn::parse_file(&content).map_err(|e| Error::ParseError {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(ParsedFile {
            path: path.to_path_buf(),
            syntax_tree,
        })
    }

    /// All parsed files, in walk order.
    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    /// Finds the file containing the inherent impl of the category's client
    /// type (`InfoClient`, `ExchangeClient`).
    ///
    /// The first file with a matching `impl` block wins; the SDK defines one
    /// client type per category.
    pub fn client_file(&self, endpoint: Endpoint) -> Result<&ParsedFile> {
        let client_type = endpoint.client_type();
        debug!("Locating `impl {}`", client_type);

        for file in &self.files {
            for item in &file.syntax_tree.items {
                let syn::Item::Impl(item_impl) = item else {
                    continue;
                };
                // Trait impls (Clone, Debug, ...) are not the client surface.
                if item_impl.trait_.is_some() {
                    continue;
                }
                if impl_target_name(item_impl).as_deref() == Some(client_type.as_str()) {
                    debug!("Found `impl {}` in {}", client_type, file.path.display());
                    return Ok(file);
                }
            }
        }

        Err(Error::NotFound(format!(
            "no `impl {}` found in SDK source",
            client_type
        )))
    }
}

/// The base type name an inherent impl block is attached to.
fn impl_target_name(item_impl: &syn::ItemImpl) -> Option<String> {
    if let syn::Type::Path(type_path) = item_impl.self_ty.as_ref() {
        type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident.to_string())
    } else {
        None
    }
}
