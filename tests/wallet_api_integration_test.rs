//! Integration tests for the async wallet API client
//!
//! Each test stands up a mockito server playing the wallet service and checks:
//! - URL, verb, query and body of the request
//! - Success decoding into typed values
//! - Remote failures surfacing as `Outcome::Failure`
//! - Transport failures surfacing as `transport_error`
//! - Undecodable responses surfacing as `ApiError::Decode`

use cardano_wallet_client::outcome::{SUCCESS_CODE, TRANSPORT_ERROR_CODE};
use cardano_wallet_client::types::{AddressState, BalanceKind, SortOrder, TxStatus, WalletOptions};
use cardano_wallet_client::{
    ApiError, ClientConfig, DecodeError, HttpMethod, HttpTransport, Outcome, PaymentBuilder,
    TransactionQuery, Transport, TransportCall, TransportResult, WalletApi,
};
use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::time::Duration;

const WALLET_ID: &str = "2512a00e9653fe49a44a5886202e24d77eeb998f";

fn wallet_json(name: &str) -> serde_json::Value {
    json!({
        "id": WALLET_ID,
        "address_pool_gap": 20,
        "balance": {
            "available": {"quantity": 42000000, "unit": "lovelace"},
            "reward": {"quantity": 250000, "unit": "lovelace"},
            "total": {"quantity": 42250000, "unit": "lovelace"}
        },
        "assets": {"available": [], "total": []},
        "delegation": {"active": {"status": "not_delegating"}, "next": []},
        "name": name,
        "passphrase": {"last_updated_at": "2019-02-27T14:46:45Z"},
        "state": {"status": "ready"},
        "tip": {
            "absolute_slot_number": 8086,
            "slot_number": 1337,
            "epoch_number": 14,
            "time": "2019-02-27T14:46:45Z",
            "height": {"quantity": 1337, "unit": "block"}
        }
    })
}

fn transaction_json() -> serde_json::Value {
    json!({
        "id": "1423856bc91c49e928f6f30f4e8d665d53eb4ab6028bd0ac971809d514c92db1",
        "amount": {"quantity": 1500000, "unit": "lovelace"},
        "fee": {"quantity": 168273, "unit": "lovelace"},
        "inserted_at": {
            "absolute_slot_number": 8086,
            "slot_number": 1337,
            "epoch_number": 14,
            "time": "2019-02-27T14:46:45Z",
            "height": {"quantity": 1337, "unit": "block"}
        },
        "depth": {"quantity": 1337, "unit": "block"},
        "direction": "incoming",
        "inputs": [],
        "outputs": [{"address": "addr_test1qa", "amount": {"quantity": 1500000, "unit": "lovelace"}}],
        "withdrawals": [],
        "status": "in_ledger"
    })
}

fn error_json(code: &str, message: &str) -> String {
    json!({"code": code, "message": message}).to_string()
}

async fn setup() -> (ServerGuard, WalletApi) {
    let server = Server::new_async().await;
    let config = ClientConfig::new(&server.url())
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    let api = WalletApi::new(config).unwrap();
    (server, api)
}

#[tokio::test]
async fn test_list_wallets_success() {
    let (mut server, api) = setup().await;
    let mock = server
        .mock("GET", "/v2/wallets")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([wallet_json("Savings"), wallet_json("Spending")]).to_string())
        .create_async()
        .await;

    let outcome = api.list_wallets().await.unwrap();
    assert_eq!(outcome.error().code, SUCCESS_CODE);
    let wallets = outcome.ok().unwrap();
    assert_eq!(wallets.len(), 2);
    assert_eq!(wallets[1].name, "Spending");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_wallet_not_found() {
    let (mut server, api) = setup().await;
    let mock = server
        .mock("GET", format!("/v2/wallets/{}", WALLET_ID).as_str())
        .with_status(404)
        .with_body(error_json("no_such_wallet", "I couldn't find a wallet with the given id"))
        .create_async()
        .await;

    let outcome = api.get_wallet(WALLET_ID).await.unwrap();
    assert!(outcome.is_failure());
    let error = outcome.error();
    assert_eq!(error.code, "no_such_wallet");
    assert!(error.message.contains("couldn't find"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_wallet_posts_json() {
    let (mut server, api) = setup().await;
    let mock = server
        .mock("POST", "/v2/wallets")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "name": "Savings",
            "passphrase": "Secure Passphrase",
            "address_pool_gap": 20
        })))
        .with_status(201)
        .with_body(wallet_json("Savings").to_string())
        .create_async()
        .await;

    let options = WalletOptions::new("Savings", vec!["abandon".to_string(); 15], "Secure Passphrase");
    let wallet = api.create_wallet(&options).await.unwrap().ok().unwrap();
    assert_eq!(wallet.id, WALLET_ID);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_wallet_no_content() {
    let (mut server, api) = setup().await;
    let mock = server
        .mock("DELETE", format!("/v2/wallets/{}", WALLET_ID).as_str())
        .with_status(204)
        .create_async()
        .await;

    assert_eq!(api.delete_wallet(WALLET_ID).await.unwrap(), Outcome::Success(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_wallet_balance_in_ada() {
    let (mut server, api) = setup().await;
    server
        .mock("GET", format!("/v2/wallets/{}", WALLET_ID).as_str())
        .with_status(200)
        .with_body(wallet_json("Savings").to_string())
        .expect(2)
        .create_async()
        .await;

    let available = api.wallet_balance(WALLET_ID, BalanceKind::Available).await.unwrap();
    let reward = api.wallet_balance(WALLET_ID, BalanceKind::Reward).await.unwrap();
    assert_eq!(available, Outcome::Success(42.0));
    assert_eq!(reward, Outcome::Success(0.25));
}

#[tokio::test]
async fn test_list_addresses_with_state() {
    let (mut server, api) = setup().await;
    let mock = server
        .mock("GET", format!("/v2/wallets/{}/addresses", WALLET_ID).as_str())
        .match_query(Matcher::UrlEncoded("state".into(), "used".into()))
        .with_status(200)
        .with_body(json!([{"id": "addr_test1qa", "state": "used"}]).to_string())
        .create_async()
        .await;

    let addresses = api
        .list_addresses(WALLET_ID, Some(AddressState::Used))
        .await
        .unwrap()
        .ok()
        .unwrap();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].state, AddressState::Used);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_network_information() {
    let (mut server, api) = setup().await;
    server
        .mock("GET", "/v2/network/information")
        .with_status(200)
        .with_body(
            json!({
                "sync_progress": {"status": "ready"},
                "node_era": "babbage",
                "node_tip": {
                    "absolute_slot_number": 8086,
                    "slot_number": 1337,
                    "epoch_number": 14,
                    "time": "2019-02-27T14:46:45Z",
                    "height": {"quantity": 1337, "unit": "block"}
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let info = api.network_information().await.unwrap().ok().unwrap();
    assert!(info.sync_progress.is_ready());
    assert!(info.network_tip.is_none());
}

#[tokio::test]
async fn test_list_transactions_query() {
    let (mut server, api) = setup().await;
    let mock = server
        .mock("GET", format!("/v2/wallets/{}/transactions", WALLET_ID).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "2024-01-01T00:00:00Z".into()),
            Matcher::UrlEncoded("end".into(), "2024-01-31T18:30:00Z".into()),
            Matcher::UrlEncoded("order".into(), "descending".into()),
            Matcher::UrlEncoded("minWithdrawal".into(), "1000000".into()),
        ]))
        .with_status(200)
        .with_body(json!([transaction_json()]).to_string())
        .create_async()
        .await;

    let query = TransactionQuery::new()
        .start(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .end(Utc.with_ymd_and_hms(2024, 1, 31, 18, 30, 0).unwrap())
        .order(SortOrder::Descending)
        .min_withdrawal(1_000_000);
    let transactions = api
        .list_transactions(WALLET_ID, &query)
        .await
        .unwrap()
        .ok()
        .unwrap();
    assert_eq!(transactions[0].status, TxStatus::InLedger);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_transaction() {
    let (mut server, api) = setup().await;
    server
        .mock("GET", format!("/v2/wallets/{}/transactions/abc123", WALLET_ID).as_str())
        .with_status(200)
        .with_body(transaction_json().to_string())
        .create_async()
        .await;

    let tx = api.get_transaction(WALLET_ID, "abc123").await.unwrap().ok().unwrap();
    assert_eq!(tx.amount.to_ada(), 1.5);
    assert_eq!(tx.depth.unwrap().quantity, 1337);
}

#[tokio::test]
async fn test_estimate_fee_then_send() {
    let (mut server, api) = setup().await;
    let fee_mock = server
        .mock("POST", format!("/v2/wallets/{}/payment-fees", WALLET_ID).as_str())
        .match_body(Matcher::Json(json!({
            "payments": [
                {"address": "addr_test1qa", "amount": {"quantity": 1500000, "unit": "lovelace"}},
                {"address": "addr_test1qb", "amount": {"quantity": 2000000, "unit": "lovelace"}}
            ],
            "withdrawal": "self",
            "time_to_live": {"quantity": 500, "unit": "second"}
        })))
        .with_status(202)
        .with_body(
            json!({
                "estimated_min": {"quantity": 168273, "unit": "lovelace"},
                "estimated_max": {"quantity": 171000, "unit": "lovelace"},
                "minimum_coins": [],
                "deposit": {"quantity": 0, "unit": "lovelace"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let send_mock = server
        .mock("POST", format!("/v2/wallets/{}/transactions", WALLET_ID).as_str())
        .match_body(Matcher::PartialJson(json!({
            "passphrase": "Secure Passphrase",
            "withdrawal": "self"
        })))
        .with_status(202)
        .with_body(transaction_json().to_string())
        .create_async()
        .await;

    let mut builder = PaymentBuilder::new();
    builder
        .add("addr_test1qa", 1.0)
        .unwrap()
        .add("addr_test1qb", 2.0)
        .unwrap()
        .add("addr_test1qa", 0.5)
        .unwrap();

    let fee = api
        .estimate_fee(WALLET_ID, &builder.finalize())
        .await
        .unwrap()
        .ok()
        .unwrap();
    assert_eq!(fee.estimated_min.quantity, 168_273);

    let outcome = api
        .send_transaction(WALLET_ID, &builder.sign("Secure Passphrase"))
        .await
        .unwrap();
    assert!(outcome.is_success());

    fee_mock.assert_async().await;
    send_mock.assert_async().await;
}

#[tokio::test]
async fn test_cancel_transaction_forbidden() {
    let (mut server, api) = setup().await;
    server
        .mock("DELETE", format!("/v2/wallets/{}/transactions/abc123", WALLET_ID).as_str())
        .with_status(403)
        .with_body(error_json("transaction_already_in_ledger", "Occurs when attempting to delete a transaction which is neither pending nor expired."))
        .create_async()
        .await;

    let outcome = api.cancel_transaction(WALLET_ID, "abc123").await.unwrap();
    assert_eq!(outcome.error().code, "transaction_already_in_ledger");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let (mut server, api) = setup().await;
    server
        .mock("GET", "/v2/wallets")
        .with_status(200)
        .with_body(r#"{"not": "a list"}"#)
        .create_async()
        .await;

    let err = api.list_wallets().await.unwrap_err();
    match err {
        ApiError::Decode(DecodeError::Body { body, .. }) => assert!(body.contains("not")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_decode_error() {
    let (mut server, api) = setup().await;
    server
        .mock("GET", "/v2/network/information")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = api.network_information().await.unwrap_err();
    match err {
        ApiError::Decode(DecodeError::ErrorBody { status, .. }) => assert_eq!(status, "502"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_transport_failure() {
    let config = ClientConfig::new("http://127.0.0.1:1")
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    let api = WalletApi::new(config).unwrap();

    let outcome = api.list_wallets().await.unwrap();
    let error = outcome.error();
    assert_eq!(error.code, TRANSPORT_ERROR_CODE);
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let (mut server, api) = setup().await;
    server
        .mock("GET", "/v2/wallets")
        .with_status(200)
        .with_body("[]")
        .expect(8)
        .create_async()
        .await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let api = api.clone();
            tokio::spawn(async move { api.list_wallets().await })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert_eq!(outcome, Outcome::Success(Vec::new()));
    }
}

#[tokio::test]
async fn test_put_sends_json_body_and_echoes_it_on_failure() {
    let mut server = Server::new_async().await;
    let body = json!({"name": "Renamed"}).to_string();
    let mock = server
        .mock("PUT", "/v2/wallets/w1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(body.clone()))
        .with_status(400)
        .with_body(error_json("bad_request", "rename rejected"))
        .create_async()
        .await;

    let config = ClientConfig::new(&server.url()).unwrap();
    let transport = HttpTransport::new(&config).unwrap();
    let call = TransportCall::put(config.endpoint(&["wallets", "w1"]).unwrap(), body.clone());
    assert_eq!(call.method, HttpMethod::Put);

    match transport.execute(call).await {
        TransportResult::Failure(envelope) => {
            assert_eq!(envelope.status, "400");
            assert_eq!(envelope.request_echo, body);
            assert_eq!(envelope.error_info().unwrap().code, "bad_request");
        }
        other => panic!("Expected failure envelope, got {other:?}"),
    }
    mock.assert_async().await;
}
