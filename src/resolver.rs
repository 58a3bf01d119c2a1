//! Resolution of operation names to request/response schema names.
//!
//! The SDK follows a naming convention: operation `order` takes an
//! `OrderRequest` and returns an `OrderResponse`. Resolution walks an
//! ordered list of candidate names; when no response candidate exists, the
//! method's declared return type is inspected as a last resort and the
//! payload of its asynchronous-result wrapper is used. A trailing
//! `SuccessResponse` suffix is normalized to `Response` afterwards, for SDK
//! versions that distinguish the success variant from the general result.

use crate::error::{Error, Result};
use crate::registry::Endpoint;
use crate::symbols::{Symbol, SymbolTable};
use crate::types::TypeResolver;
use log::debug;

/// The schema names resolved for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchemas {
    /// Request schema name
    pub request: String,
    /// Response schema name, already normalized
    pub response: String,
    /// Usage snippet from the method's doc comment, when present
    pub example: Option<String>,
}

/// Resolves the request and response schema names for `operation`.
///
/// Either both names resolve or the whole run fails; there is no partial
/// result for a single operation.
pub fn resolve(
    symbols: &SymbolTable,
    types: &TypeResolver,
    endpoint: Endpoint,
    operation: &str,
) -> Result<ResolvedSchemas> {
    let method_name = snake_case(operation);
    let symbol = symbols.get(&method_name).ok_or_else(|| {
        Error::NotFound(format!(
            "operation `{}` (fn `{}`) not found on {}",
            operation,
            method_name,
            endpoint.client_type()
        ))
    })?;

    let example = symbol.example();
    if example.is_some() {
        debug!("Found doc example for `{}`", operation);
    }

    let base = pascal_case(operation);

    let request_candidates = [
        format!("{}Request", base),
        format!("{}{}Request", base, endpoint.capitalized()),
    ];
    let request = first_existing(&request_candidates, types).ok_or_else(|| {
        Error::NotFound(format!(
            "no request schema for `{}` (tried {})",
            operation,
            request_candidates.join(", ")
        ))
    })?;

    let response_candidates = [
        format!("{}Response", base),
        format!("{}{}Response", base, endpoint.capitalized()),
    ];
    let response = match first_existing(&response_candidates, types) {
        Some(name) => name,
        // Last resort: the payload of the method's asynchronous result.
        None => async_payload(symbol)?,
    };
    let response = normalize_response_name(&response);

    debug!(
        "Resolved `{}/{}` to request `{}`, response `{}`",
        endpoint, operation, request, response
    );

    Ok(ResolvedSchemas {
        request,
        response,
        example,
    })
}

/// The first candidate that names an existing type, in order.
fn first_existing(candidates: &[String], types: &TypeResolver) -> Option<String> {
    candidates.iter().find(|name| types.contains(name.as_str())).cloned()
}

/// Collapses a trailing `SuccessResponse` suffix to `Response`. Idempotent.
pub fn normalize_response_name(name: &str) -> String {
    match name.strip_suffix("SuccessResponse") {
        Some(prefix) => format!("{}Response", prefix),
        None => name.to_string(),
    }
}

/// camelCase operation name to the snake_case method name the SDK declares.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// camelCase operation name to the PascalCase schema-name base.
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extracts the payload type name of a method's asynchronous result.
///
/// Recognized shapes:
/// - `async fn` returning a plain named type, or `Result<T, _>` around one;
/// - `fn` returning `BoxFuture<'_, T>` or `LocalBoxFuture<'_, T>`;
/// - `fn` returning `Pin<Box<dyn Future<Output = T> + ...>>`.
fn async_payload(symbol: &Symbol) -> Result<String> {
    let invalid = |detail: &str| Error::InvalidReturnType {
        method: symbol.name.clone(),
        detail: detail.to_string(),
    };

    let syn::ReturnType::Type(_, ty) = &symbol.sig.output else {
        return Err(invalid("method has no declared return type"));
    };

    if symbol.sig.asyncness.is_some() {
        return direct_payload(ty)
            .ok_or_else(|| invalid("async return type is not a single named type"));
    }

    wrapper_payload(ty).ok_or_else(|| {
        invalid("expected `BoxFuture<'_, T>` or `Pin<Box<dyn Future<Output = T>>>`")
    })
}

/// Payload of an async fn's declared return type: `T` or `Result<T, _>`.
fn direct_payload(ty: &syn::Type) -> Option<String> {
    let segment = last_path_segment(ty)?;
    if segment.ident == "Result" {
        return plain_ident(first_type_argument(segment)?);
    }
    if segment.arguments.is_none() {
        return Some(segment.ident.to_string());
    }
    None
}

/// Payload of an explicit future wrapper type.
fn wrapper_payload(ty: &syn::Type) -> Option<String> {
    let segment = last_path_segment(ty)?;

    if segment.ident == "BoxFuture" || segment.ident == "LocalBoxFuture" {
        return plain_ident(first_type_argument(segment)?);
    }

    if segment.ident == "Pin" {
        // Pin<Box<dyn Future<Output = T> + Send + '_>>
        let boxed = first_type_argument(segment)?;
        let box_segment = last_path_segment(boxed)?;
        if box_segment.ident != "Box" {
            return None;
        }
        let inner = first_type_argument(box_segment)?;
        let syn::Type::TraitObject(trait_object) = inner else {
            return None;
        };
        for bound in &trait_object.bounds {
            let syn::TypeParamBound::Trait(trait_bound) = bound else {
                continue;
            };
            let segment = trait_bound.path.segments.last()?;
            if segment.ident != "Future" {
                continue;
            }
            let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
                continue;
            };
            for arg in &args.args {
                if let syn::GenericArgument::AssocType(assoc) = arg {
                    if assoc.ident == "Output" {
                        return plain_ident(&assoc.ty);
                    }
                }
            }
        }
    }

    None
}

fn last_path_segment(ty: &syn::Type) -> Option<&syn::PathSegment> {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.segments.last()
    } else {
        None
    }
}

/// The first type (not lifetime) argument of a path segment.
fn first_type_argument(segment: &syn::PathSegment) -> Option<&syn::Type> {
    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        for arg in &args.args {
            if let syn::GenericArgument::Type(ty) = arg {
                return Some(ty);
            }
        }
    }
    None
}

/// A bare named type with no generic arguments.
fn plain_ident(ty: &syn::Type) -> Option<String> {
    let segment = last_path_segment(ty)?;
    if segment.arguments.is_none() {
        Some(segment.ident.to_string())
    } else {
        None
    }
}
