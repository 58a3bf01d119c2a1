//! State-changing actions against `POST /exchange`.

use crate::transport::{HttpTransport, TransportError};
use crate::types::exchange::*;
use futures::future::BoxFuture;
use std::future::Future;
use std::pin::Pin;

/// Client for the exchange endpoint.
pub struct ExchangeClient {
    transport: HttpTransport,
}

impl ExchangeClient {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Modifies multiple resting orders in one action.
    pub async fn batch_modify(
        &self,
        req: BatchModifyRequest,
    ) -> Result<BatchModifyResponse, TransportError> {
        todo!()
    }

    /// Cancels resting orders by order id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// client.cancel(CancelRequest { cancels: vec![CancelParams { asset: 0, oid: 77 }] }).await?;
    /// ```
    pub async fn cancel(&self, req: CancelRequest) -> Result<CancelResponse, TransportError> {
        todo!()
    }

    /// Modifies a single resting order.
    pub async fn modify(&self, req: ModifyRequest) -> Result<ModifyResponse, TransportError> {
        todo!()
    }

    /// Places one or more orders.
    ///
    /// # Example
    ///
    /// ```no_run
    /// let result = client.order(OrderExchangeRequest { orders: vec![params], grouping: "na".into() }).await?;
    /// ```
    pub async fn order(
        &self,
        req: OrderExchangeRequest,
    ) -> Result<OrderExchangeResponse, TransportError> {
        todo!()
    }

    /// Arms or disarms the dead man's switch.
    pub async fn schedule_cancel(
        &self,
        req: ScheduleCancelRequest,
    ) -> Result<ScheduleCancelResponse, TransportError> {
        todo!()
    }

    /// Updates leverage for one asset.
    pub async fn update_leverage(
        &self,
        req: UpdateLeverageRequest,
    ) -> Result<UpdateLeverageResponse, TransportError> {
        todo!()
    }

    /// Sends USDC to another address.
    pub fn usd_send(&self, req: UsdSendRequest) -> BoxFuture<'_, UsdTransferSuccessResponse> {
        todo!()
    }

    /// Initiates a withdrawal to the origin chain.
    pub fn withdraw3(
        &self,
        req: Withdraw3Request,
    ) -> Pin<Box<dyn Future<Output = WithdrawActionSuccessResponse> + Send + '_>> {
        todo!()
    }
}
