use super::{ApiResult, WalletApi};
use crate::transport::TransportCall;
use crate::types::{Address, AddressState};

impl WalletApi {
    /// `GET wallets/{id}/addresses[?state=used|unused]`
    pub async fn list_addresses(
        &self,
        wallet_id: &str,
        state: Option<AddressState>,
    ) -> ApiResult<Vec<Address>> {
        let url = self.endpoint(&["wallets", wallet_id, "addresses"])?;
        let mut call = TransportCall::get(url);
        if let Some(state) = state {
            call = call.with_query("state", state.as_str());
        }
        self.call("list_addresses", call).await
    }
}
