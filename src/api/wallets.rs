use super::{encode_body, ApiResult, WalletApi};
use crate::transport::TransportCall;
use crate::types::{BalanceKind, Wallet, WalletOptions};

impl WalletApi {
    /// `GET wallets`
    pub async fn list_wallets(&self) -> ApiResult<Vec<Wallet>> {
        let url = self.endpoint(&["wallets"])?;
        self.call("list_wallets", TransportCall::get(url)).await
    }

    /// `GET wallets/{id}`
    pub async fn get_wallet(&self, wallet_id: &str) -> ApiResult<Wallet> {
        let url = self.endpoint(&["wallets", wallet_id])?;
        self.call("get_wallet", TransportCall::get(url)).await
    }

    /// `POST wallets`
    pub async fn create_wallet(&self, options: &WalletOptions) -> ApiResult<Wallet> {
        let url = self.endpoint(&["wallets"])?;
        let body = encode_body(options)?;
        self.call("create_wallet", TransportCall::post(url, body))
            .await
    }

    /// `DELETE wallets/{id}`
    pub async fn delete_wallet(&self, wallet_id: &str) -> ApiResult<()> {
        let url = self.endpoint(&["wallets", wallet_id])?;
        self.call_ack("delete_wallet", TransportCall::delete(url))
            .await
    }

    /// Balance of one kind, in ADA
    pub async fn wallet_balance(&self, wallet_id: &str, kind: BalanceKind) -> ApiResult<f64> {
        let wallet = self.get_wallet(wallet_id).await?;
        Ok(wallet.map(|w| w.balance.get(kind).to_ada()))
    }
}
