//! Types for the info endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request for mids across all coins.
#[derive(Debug, Default, Serialize)]
pub struct AllMidsRequest {}

/// Mid price per coin symbol.
pub type AllMidsResponse = HashMap<String, String>;

/// Candle snapshot request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleSnapshotRequest {
    /// Coin symbol.
    pub coin: String,
    /// Candle interval, e.g. "1m" or "1h".
    pub interval: String,
    /// Inclusive start time, epoch milliseconds.
    pub start_time: u64,
    /// Inclusive end time, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
}

/// One OHLC candle.
#[derive(Debug, Deserialize)]
pub struct Candle {
    /// Open time, epoch milliseconds.
    pub t: u64,
    /// Open price.
    pub o: String,
    /// High price.
    pub h: String,
    /// Low price.
    pub l: String,
    /// Close price.
    pub c: String,
    /// Volume in base units.
    pub v: String,
}

pub type CandleSnapshotResponse = Vec<Candle>;

/// Request for a user's perpetuals account summary.
#[derive(Debug, Serialize)]
pub struct ClearinghouseStateRequest {
    /// User address in 42-character hexadecimal format.
    pub user: String,
}

/// A user's perpetuals account summary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearinghouseStateResponse {
    pub margin_summary: MarginSummary,
    pub cross_margin_summary: MarginSummary,
    /// Amount available for withdrawal.
    pub withdrawable: String,
    pub asset_positions: Vec<AssetPosition>,
}

/// Aggregated margin figures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginSummary {
    pub account_value: String,
    pub total_margin_used: String,
    pub total_ntl_pos: String,
    pub total_raw_usd: String,
}

/// One open position.
#[derive(Debug, Deserialize)]
pub struct AssetPosition {
    pub coin: String,
    pub szi: String,
    pub entry_px: Option<String>,
}

/// L2 order book request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct L2BookRequest {
    /// Coin symbol.
    pub coin: String,
    /// Price aggregation in significant figures (2-5).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_sig_figs: Option<u32>,
}

/// L2 order book snapshot.
#[derive(Debug, Deserialize)]
pub struct L2BookResponse {
    pub coin: String,
    /// Snapshot time, epoch milliseconds.
    pub time: u64,
    /// Bid levels then ask levels.
    pub levels: Vec<Vec<BookLevel>>,
}

/// One price level of the book.
#[derive(Debug, Deserialize)]
pub struct BookLevel {
    /// Price.
    pub px: String,
    /// Total size resting at this price.
    pub sz: String,
    /// Number of orders at this price.
    pub n: u32,
}

/// Request for the perpetuals metadata.
#[derive(Debug, Default, Serialize)]
pub struct MetaRequest {}

/// Perpetuals metadata.
#[derive(Debug, Deserialize)]
pub struct MetaResponse {
    /// Tradable assets, in asset-index order.
    pub universe: Vec<AssetMeta>,
}

/// Static metadata for one asset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMeta {
    pub name: String,
    pub sz_decimals: u32,
    pub max_leverage: u32,
    #[serde(default)]
    pub only_isolated: bool,
}

/// Request for metadata with asset contexts.
#[derive(Debug, Default, Serialize)]
pub struct MetaAndAssetCtxsRequest {}

/// Live context for one asset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCtx {
    pub funding: String,
    pub open_interest: String,
    pub mark_px: String,
    pub mid_px: Option<String>,
}

pub type MetaAndAssetCtxsResponse = Vec<AssetCtx>;

/// Request for a user's open orders.
#[derive(Debug, Serialize)]
pub struct OpenOrdersRequest {
    /// User address in 42-character hexadecimal format.
    pub user: String,
}

/// One open order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrder {
    pub coin: String,
    pub oid: u64,
    pub side: String,
    pub limit_px: String,
    pub sz: String,
    pub timestamp: u64,
}

pub type OpenOrdersResponse = Vec<OpenOrder>;

/// Request for a user's fills.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFillsRequest {
    /// User address in 42-character hexadecimal format.
    pub user: String,
    /// Group partial fills of one crossing order together.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_by_time: Option<bool>,
}

/// One fill.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub coin: String,
    pub px: String,
    pub sz: String,
    pub side: String,
    pub time: u64,
    pub closed_pnl: String,
    pub oid: u64,
    pub crossed: bool,
}

pub type UserFillsResponse = Vec<Fill>;
