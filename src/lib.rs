//! Cardano Wallet HTTP Client Library
//!
//! Typed access to the wallet service's `/v2/` JSON API (wallets, addresses,
//! network status, transactions) plus a payment builder for outgoing
//! transactions.
//!
//! Every resource operation returns `Result<Outcome<T>, ApiError>`:
//! remote-reported and transport failures are `Outcome::Failure`, while
//! `ApiError` is reserved for responses that cannot be decoded.
//!
//! ```rust,no_run
//! use cardano_wallet_client::{ClientConfig, Outcome, PaymentBuilder, WalletApi};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = WalletApi::new(ClientConfig::new("http://127.0.0.1:8090")?)?;
//!
//! let mut payments = PaymentBuilder::new();
//! payments.add("addr_test1qz...", 10.0)?;
//!
//! match api.estimate_fee("2512a00e", &payments.finalize()).await? {
//!     Outcome::Success(fee) => println!("min fee: {} lovelace", fee.estimated_min.quantity),
//!     Outcome::Failure(error) => eprintln!("{}", error),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod metrics;
pub mod mnemonic;
pub mod observability;
pub mod outcome;
pub mod structured_logging;
pub mod transport;
pub mod tx_builder;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use api::{ApiResult, TransactionQuery, WalletApi};
#[cfg(feature = "blocking")]
pub use blocking::BlockingWalletApi;
pub use config::{ClientConfig, Config, ConfigError};
pub use envelope::{FailureEnvelope, TransportResult};
pub use errors::{ApiError, DecodeError};
pub use mnemonic::{Bip39Mnemonic, MnemonicError, MnemonicSource, RecoveryPhrase};
pub use outcome::{ErrorInfo, Outcome};
pub use transport::{HttpMethod, HttpTransport, Transport, TransportCall};
pub use tx_builder::{BuilderError, PaymentBuilder, SignedDraft, TransactionDraft};
