//! Static registry of API operations per endpoint category.
//!
//! The Hyperliquid API exposes two endpoint categories: `info` (read-only
//! queries) and `exchange` (state-changing actions). Each category maps to
//! one POST path and one client type in the SDK. The operation lists below
//! are declared statically rather than discovered at runtime, so the set of
//! generated documents is visible in one place.

use std::fmt;

/// An endpoint category of the Hyperliquid API.
///
/// Variants are declared in lexicographic order of their wire names so that
/// ordered maps keyed by `Endpoint` iterate the same way the documentation
/// is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    /// State-changing actions (`POST /exchange`)
    Exchange,
    /// Read-only queries (`POST /info`)
    Info,
}

/// Operations registered for the `exchange` category.
const EXCHANGE_OPERATIONS: &[&str] = &[
    "batchModify",
    "cancel",
    "modify",
    "noop",
    "order",
    "scheduleCancel",
    "updateLeverage",
    "usdSend",
    "withdraw3",
];

/// Operations registered for the `info` category.
const INFO_OPERATIONS: &[&str] = &[
    "allMids",
    "candleSnapshot",
    "clearinghouseState",
    "l2Book",
    "meta",
    "metaAndAssetCtxs",
    "openOrders",
    "userFills",
];

/// Operations excluded from documentation by default.
///
/// `noop` is the nonce-release action; it carries no documentable payload.
pub const DEFAULT_SKIP: &[&str] = &["noop"];

impl Endpoint {
    /// All endpoint categories, in wire-name order.
    pub const ALL: [Endpoint; 2] = [Endpoint::Exchange, Endpoint::Info];

    /// The wire name of the category, as used in paths and slugs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Exchange => "exchange",
            Endpoint::Info => "info",
        }
    }

    /// The wire name with its first letter capitalized, as used in the
    /// endpoint-suffixed schema naming fallback.
    pub fn capitalized(&self) -> &'static str {
        match self {
            Endpoint::Exchange => "Exchange",
            Endpoint::Info => "Info",
        }
    }

    /// The name of the SDK client type for this category.
    pub fn client_type(&self) -> String {
        format!("{}Client", self.capitalized())
    }

    /// The remote spec slug for one operation of this category.
    pub fn slug(&self, method: &str) -> String {
        format!("hl-{}-{}", self.as_str(), method)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full registered operation list for a category.
pub fn operations(endpoint: Endpoint) -> &'static [&'static str] {
    match endpoint {
        Endpoint::Exchange => EXCHANGE_OPERATIONS,
        Endpoint::Info => INFO_OPERATIONS,
    }
}

/// The registered operations minus the skip list.
///
/// An empty result is not an error; a category with no remaining methods
/// simply produces no documents.
pub fn methods(endpoint: Endpoint, skip: &[String]) -> Vec<&'static str> {
    operations(endpoint)
        .iter()
        .copied()
        .filter(|op| !skip.iter().any(|s| s == op))
        .collect()
}
