use super::{ApiResult, WalletApi};
use crate::transport::TransportCall;
use crate::types::NetworkInformation;

impl WalletApi {
    /// `GET network/information`
    pub async fn network_information(&self) -> ApiResult<NetworkInformation> {
        let url = self.endpoint(&["network", "information"])?;
        self.call("network_information", TransportCall::get(url))
            .await
    }
}
