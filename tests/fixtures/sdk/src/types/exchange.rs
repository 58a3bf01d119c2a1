//! Types for the exchange endpoint.

use serde::{Deserialize, Serialize};

/// Time-in-force of a limit order.
#[derive(Debug, Serialize, Deserialize)]
pub enum Tif {
    /// Add liquidity only.
    Alo,
    /// Immediate or cancel.
    Ioc,
    /// Good until canceled.
    Gtc,
}

/// Limit order options.
#[derive(Debug, Serialize)]
pub struct LimitOptions {
    pub tif: Tif,
}

/// Order type selector.
#[derive(Debug, Serialize)]
pub struct OrderType {
    pub limit: LimitOptions,
}

/// Parameters for one order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    /// Asset index into the metadata universe.
    #[serde(rename = "a")]
    pub asset: u32,
    /// Buy side when true.
    #[serde(rename = "b")]
    pub is_buy: bool,
    /// Limit price.
    #[serde(rename = "p")]
    pub limit_px: String,
    /// Order size in base units.
    #[serde(rename = "s")]
    pub sz: String,
    /// Reduce-only order.
    #[serde(rename = "r", default)]
    pub reduce_only: bool,
    /// Order type.
    #[serde(rename = "t")]
    pub order_type: OrderType,
    /// Client order id.
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    pub cloid: Option<String>,
}

/// Order placement action.
#[derive(Debug, Serialize)]
pub struct OrderExchangeRequest {
    /// Orders to place, in priority order.
    pub orders: Vec<OrderParams>,
    /// Grouping policy, "na" unless orders form a TP/SL group.
    pub grouping: String,
}

/// Per-order placement status.
#[derive(Debug, Deserialize)]
pub enum OrderStatus {
    Resting,
    Filled,
    Error,
}

/// Result of an order placement action.
#[derive(Debug, Deserialize)]
pub struct OrderExchangeResponse {
    pub statuses: Vec<OrderStatus>,
}

/// Parameters for one cancel.
#[derive(Debug, Serialize)]
pub struct CancelParams {
    /// Asset index.
    #[serde(rename = "a")]
    pub asset: u32,
    /// Order id to cancel.
    #[serde(rename = "o")]
    pub oid: u64,
}

/// Cancel action.
#[derive(Debug, Serialize)]
pub struct CancelRequest {
    pub cancels: Vec<CancelParams>,
}

/// Result of a cancel action.
#[derive(Debug, Deserialize)]
pub struct CancelResponse {
    pub statuses: Vec<String>,
}

/// Modify action for one resting order.
#[derive(Debug, Serialize)]
pub struct ModifyRequest {
    /// Order id being modified.
    pub oid: u64,
    /// Replacement order.
    pub order: OrderParams,
}

/// Result of a modify action.
#[derive(Debug, Deserialize)]
pub struct ModifyResponse {
    pub status: String,
}

/// One modify inside a batch.
#[derive(Debug, Serialize)]
pub struct ModifySpec {
    pub oid: u64,
    pub order: OrderParams,
}

/// Batched modify action.
#[derive(Debug, Serialize)]
pub struct BatchModifyRequest {
    pub modifies: Vec<ModifySpec>,
}

/// Result of a batched modify action.
#[derive(Debug, Deserialize)]
pub struct BatchModifyResponse {
    pub statuses: Vec<OrderStatus>,
}

/// Dead man's switch configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCancelRequest {
    /// Trigger time, epoch milliseconds; absent disarms the switch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
}

/// Result of arming the dead man's switch.
#[derive(Debug, Deserialize)]
pub struct ScheduleCancelResponse {
    pub status: String,
}

/// Leverage update action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeverageRequest {
    /// Asset index.
    pub asset: u32,
    /// Cross margin when true, isolated otherwise.
    pub is_cross: bool,
    /// New leverage.
    pub leverage: u32,
}

/// Result of a leverage update.
#[derive(Debug, Deserialize)]
pub struct UpdateLeverageResponse {
    pub status: String,
}

/// USDC transfer action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdSendRequest {
    /// Recipient address in 42-character hexadecimal format.
    pub destination: String,
    /// Amount of USDC to send.
    pub amount: String,
    /// Action time, epoch milliseconds.
    pub time: u64,
    /// Signature over the action; never serialized.
    #[serde(skip)]
    pub signature: String,
}

/// Result of a USDC transfer.
#[derive(Debug, Deserialize)]
pub struct UsdTransferResponse {
    pub status: String,
}

/// Withdrawal action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdraw3Request {
    /// Destination address on the origin chain.
    pub destination: String,
    /// Amount of USDC to withdraw.
    pub amount: String,
    /// Action time, epoch milliseconds.
    pub time: u64,
}

/// Result of a withdrawal action.
#[derive(Debug, Deserialize)]
pub struct WithdrawActionResponse {
    pub status: String,
}
