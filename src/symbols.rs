//! Symbol tables for SDK client source files.
//!
//! A `SymbolTable` is built from one parsed file and indexes every
//! function-like item (inherent methods and free functions) by name,
//! together with its doc comment text and signature. The schema resolver
//! queries it to find the method behind each registered operation.

use crate::source::ParsedFile;
use log::debug;
use std::collections::BTreeMap;

/// A function-like symbol extracted from a source file.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// The function name as written in the source (snake_case)
    pub name: String,
    /// Accumulated `#[doc]` text, one line per doc attribute
    pub docs: String,
    /// The function signature
    pub sig: syn::Signature,
}

/// All function-like symbols of one source file, indexed by name.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    /// Collects every inherent method and free function from the file.
    ///
    /// Trait impl methods are excluded; the client's operation surface is
    /// its inherent impl blocks. When a name appears more than once the
    /// first occurrence wins.
    pub fn from_file(file: &ParsedFile) -> SymbolTable {
        let mut symbols = BTreeMap::new();

        for item in &file.syntax_tree.items {
            match item {
                syn::Item::Fn(item_fn) => {
                    insert_symbol(&mut symbols, &item_fn.sig, &item_fn.attrs);
                }
                syn::Item::Impl(item_impl) if item_impl.trait_.is_none() => {
                    for impl_item in &item_impl.items {
                        if let syn::ImplItem::Fn(method) = impl_item {
                            insert_symbol(&mut symbols, &method.sig, &method.attrs);
                        }
                    }
                }
                _ => {}
            }
        }

        debug!(
            "Collected {} symbols from {}",
            symbols.len(),
            file.path.display()
        );
        SymbolTable { symbols }
    }

    /// Looks up a symbol by its source-level name.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Number of collected symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Symbol {
    /// The first fenced code block of the doc comment, if any.
    ///
    /// The SDK tags usage snippets as ```` ```rust ```` blocks under an
    /// `# Example` heading; the fence language and the heading text are both
    /// ignored here, only the block body is returned.
    pub fn example(&self) -> Option<String> {
        let mut lines = self.docs.lines();

        // Find the opening fence.
        lines.by_ref().find(|line| line.trim_start().starts_with("```"))?;

        let mut body = Vec::new();
        for line in lines {
            if line.trim_start().starts_with("```") {
                let snippet = body.join("\n");
                return if snippet.trim().is_empty() {
                    None
                } else {
                    Some(snippet)
                };
            }
            body.push(line);
        }

        // Unterminated fence: treat as no example.
        None
    }
}

fn insert_symbol(
    symbols: &mut BTreeMap<String, Symbol>,
    sig: &syn::Signature,
    attrs: &[syn::Attribute],
) {
    let name = sig.ident.to_string();
    symbols.entry(name.clone()).or_insert_with(|| Symbol {
        name,
        docs: doc_text(attrs),
        sig: sig.clone(),
    });
}

/// Joins the string literals of all `#[doc]` attributes, one per line.
pub fn doc_text(attrs: &[syn::Attribute]) -> String {
    let mut lines = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(name_value) = &attr.meta {
            if let syn::Expr::Lit(expr_lit) = &name_value.value {
                if let syn::Lit::Str(lit) = &expr_lit.lit {
                    // Doc comment lines keep a leading space from `/// `.
                    let line = lit.value();
                    lines.push(line.strip_prefix(' ').unwrap_or(&line).to_string());
                }
            }
        }
    }

    lines.join("\n")
}
