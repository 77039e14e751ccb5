use super::{encode_body, ApiResult, WalletApi};
use crate::transport::TransportCall;
use crate::tx_builder::{SignedDraft, TransactionDraft};
use crate::types::{Fee, SortOrder, TransactionInformation};
use crate::units::to_iso8601;
use chrono::{DateTime, Utc};

/// Filters for `GET wallets/{id}/transactions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub order: Option<SortOrder>,
    /// Only transactions with at least this many lovelace withdrawn; ignored below 1
    pub min_withdrawal: Option<u64>,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn min_withdrawal(mut self, lovelace: u64) -> Self {
        self.min_withdrawal = Some(lovelace);
        self
    }

    /// Query pairs in wire order: start, end, order, minWithdrawal
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(start) = &self.start {
            pairs.push(("start", to_iso8601(start)));
        }
        if let Some(end) = &self.end {
            pairs.push(("end", to_iso8601(end)));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_string()));
        }
        if let Some(min) = self.min_withdrawal.filter(|min| *min >= 1) {
            pairs.push(("minWithdrawal", min.to_string()));
        }
        pairs
    }
}

impl WalletApi {
    /// `GET wallets/{id}/transactions/{tx}`
    pub async fn get_transaction(
        &self,
        wallet_id: &str,
        transaction_id: &str,
    ) -> ApiResult<TransactionInformation> {
        let url = self.endpoint(&["wallets", wallet_id, "transactions", transaction_id])?;
        self.call("get_transaction", TransportCall::get(url)).await
    }

    /// `GET wallets/{id}/transactions?start&end&order&minWithdrawal`
    pub async fn list_transactions(
        &self,
        wallet_id: &str,
        query: &TransactionQuery,
    ) -> ApiResult<Vec<TransactionInformation>> {
        let url = self.endpoint(&["wallets", wallet_id, "transactions"])?;
        let call = query
            .pairs()
            .into_iter()
            .fold(TransportCall::get(url), |call, (key, value)| {
                call.with_query(key, value)
            });
        self.call("list_transactions", call).await
    }

    /// `POST wallets/{id}/transactions`
    pub async fn send_transaction(
        &self,
        wallet_id: &str,
        signed: &SignedDraft,
    ) -> ApiResult<TransactionInformation> {
        let url = self.endpoint(&["wallets", wallet_id, "transactions"])?;
        let body = encode_body(signed)?;
        self.call("send_transaction", TransportCall::post(url, body))
            .await
    }

    /// `DELETE wallets/{id}/transactions/{tx}`
    pub async fn cancel_transaction(&self, wallet_id: &str, transaction_id: &str) -> ApiResult<()> {
        let url = self.endpoint(&["wallets", wallet_id, "transactions", transaction_id])?;
        self.call_ack("cancel_transaction", TransportCall::delete(url))
            .await
    }

    /// `POST wallets/{id}/payment-fees`
    pub async fn estimate_fee(&self, wallet_id: &str, draft: &TransactionDraft) -> ApiResult<Fee> {
        let url = self.endpoint(&["wallets", wallet_id, "payment-fees"])?;
        let body = encode_body(draft)?;
        self.call("estimate_fee", TransportCall::post(url, body))
            .await
    }
}
