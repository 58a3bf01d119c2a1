//! Read-only queries against `POST /info`.

use crate::transport::{HttpTransport, TransportError};
use crate::types::info::*;

/// Client for the info endpoint.
pub struct InfoClient {
    transport: HttpTransport,
}

impl InfoClient {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Retrieves mids for all actively traded coins.
    ///
    /// # Example
    ///
    /// ```no_run
    /// let mids = client.all_mids(AllMidsRequest::default()).await?;
    /// println!("BTC mid: {}", mids["BTC"]);
    /// ```
    pub async fn all_mids(&self, req: AllMidsRequest) -> Result<AllMidsResponse, TransportError> {
        todo!()
    }

    /// Retrieves a candle snapshot for one coin and interval.
    pub async fn candle_snapshot(
        &self,
        req: CandleSnapshotRequest,
    ) -> Result<CandleSnapshotResponse, TransportError> {
        todo!()
    }

    /// Retrieves a user's perpetuals account summary.
    pub async fn clearinghouse_state(
        &self,
        req: ClearinghouseStateRequest,
    ) -> Result<ClearinghouseStateResponse, TransportError> {
        todo!()
    }

    /// Retrieves the L2 order book for one coin.
    ///
    /// # Example
    ///
    /// ```no_run
    /// let book = client.l2_book(L2BookRequest { coin: "ETH".into(), n_sig_figs: None }).await?;
    /// ```
    pub async fn l2_book(&self, req: L2BookRequest) -> Result<L2BookResponse, TransportError> {
        todo!()
    }

    /// Retrieves the perpetuals metadata (universe and margin tables).
    pub async fn meta(&self, req: MetaRequest) -> Result<MetaResponse, TransportError> {
        todo!()
    }

    /// Retrieves metadata together with per-asset contexts.
    pub async fn meta_and_asset_ctxs(
        &self,
        req: MetaAndAssetCtxsRequest,
    ) -> Result<MetaAndAssetCtxsResponse, TransportError> {
        todo!()
    }

    /// Retrieves a user's open orders.
    pub async fn open_orders(
        &self,
        req: OpenOrdersRequest,
    ) -> Result<OpenOrdersResponse, TransportError> {
        todo!()
    }

    /// Retrieves a user's fills, most recent first.
    pub async fn user_fills(
        &self,
        req: UserFillsRequest,
    ) -> Result<UserFillsResponse, TransportError> {
        todo!()
    }
}
