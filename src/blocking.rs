//! Blocking facade over [`WalletApi`]
//!
//! Owns a current-thread tokio runtime and blocks on each call. Must not be
//! used from inside another async runtime; use [`WalletApi`] there.

use crate::api::{ApiResult, TransactionQuery, WalletApi};
use crate::config::{ClientConfig, ConfigError};
use crate::transport::Transport;
use crate::tx_builder::{SignedDraft, TransactionDraft};
use crate::types::{
    Address, AddressState, BalanceKind, Fee, NetworkInformation, TransactionInformation, Wallet,
    WalletOptions,
};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Synchronous wallet API client
#[derive(Debug)]
pub struct BlockingWalletApi {
    inner: WalletApi,
    runtime: Runtime,
}

impl BlockingWalletApi {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: WalletApi::new(config)?,
            runtime: build_runtime()?,
        })
    }

    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: WalletApi::with_transport(config, transport),
            runtime: build_runtime()?,
        })
    }

    /// Async client sharing this client's configuration and transport
    pub fn inner(&self) -> &WalletApi {
        &self.inner
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    pub fn list_wallets(&self) -> ApiResult<Vec<Wallet>> {
        self.runtime.block_on(self.inner.list_wallets())
    }

    pub fn get_wallet(&self, wallet_id: &str) -> ApiResult<Wallet> {
        self.runtime.block_on(self.inner.get_wallet(wallet_id))
    }

    pub fn create_wallet(&self, options: &WalletOptions) -> ApiResult<Wallet> {
        self.runtime.block_on(self.inner.create_wallet(options))
    }

    pub fn delete_wallet(&self, wallet_id: &str) -> ApiResult<()> {
        self.runtime.block_on(self.inner.delete_wallet(wallet_id))
    }

    pub fn wallet_balance(&self, wallet_id: &str, kind: BalanceKind) -> ApiResult<f64> {
        self.runtime
            .block_on(self.inner.wallet_balance(wallet_id, kind))
    }

    pub fn list_addresses(
        &self,
        wallet_id: &str,
        state: Option<AddressState>,
    ) -> ApiResult<Vec<Address>> {
        self.runtime
            .block_on(self.inner.list_addresses(wallet_id, state))
    }

    pub fn network_information(&self) -> ApiResult<NetworkInformation> {
        self.runtime.block_on(self.inner.network_information())
    }

    pub fn get_transaction(
        &self,
        wallet_id: &str,
        transaction_id: &str,
    ) -> ApiResult<TransactionInformation> {
        self.runtime
            .block_on(self.inner.get_transaction(wallet_id, transaction_id))
    }

    pub fn list_transactions(
        &self,
        wallet_id: &str,
        query: &TransactionQuery,
    ) -> ApiResult<Vec<TransactionInformation>> {
        self.runtime
            .block_on(self.inner.list_transactions(wallet_id, query))
    }

    pub fn send_transaction(
        &self,
        wallet_id: &str,
        signed: &SignedDraft,
    ) -> ApiResult<TransactionInformation> {
        self.runtime
            .block_on(self.inner.send_transaction(wallet_id, signed))
    }

    pub fn cancel_transaction(&self, wallet_id: &str, transaction_id: &str) -> ApiResult<()> {
        self.runtime
            .block_on(self.inner.cancel_transaction(wallet_id, transaction_id))
    }

    pub fn estimate_fee(&self, wallet_id: &str, draft: &TransactionDraft) -> ApiResult<Fee> {
        self.runtime
            .block_on(self.inner.estimate_fee(wallet_id, draft))
    }
}

fn build_runtime() -> Result<Runtime, ConfigError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ConfigError::Client(format!("Failed to start blocking runtime: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::CannedTransport;
    use crate::outcome::Outcome;

    #[test]
    fn test_blocking_delete_and_failure() {
        let config = ClientConfig::new("http://wallet.test:8090").unwrap();
        let api = BlockingWalletApi::with_transport(config, CannedTransport::body("")).unwrap();
        assert_eq!(api.delete_wallet("w1").unwrap(), Outcome::Success(()));
        assert_eq!(api.config().base_url().as_str(), "http://wallet.test:8090/v2/");
    }

    #[test]
    fn test_blocking_transport_failure_is_an_outcome() {
        // Nothing listens on port 1
        let config = ClientConfig::new("http://127.0.0.1:1")
            .unwrap()
            .with_timeout(std::time::Duration::from_secs(2));
        let api = BlockingWalletApi::new(config).unwrap();

        let outcome = api.network_information().unwrap();
        assert!(outcome.error().is_transport());
    }
}
