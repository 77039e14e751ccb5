//! Payment Builder
//!
//! Accumulates payment lines for a single outgoing transaction and turns them
//! into the request bodies the wallet backend expects.
//!
//! ## Architecture
//!
//! - **errors**: Builder error taxonomy (malformed amounts, empty addresses)
//! - **builder**: [`PaymentBuilder`], the mutable accumulator
//! - **draft**: [`TransactionDraft`] and [`SignedDraft`], immutable request values
//!
//! ## Semantics
//!
//! - Lines are unique by address; adding to a known address sums the amounts
//! - Amounts are entered in ADA and stored in lovelace (1 ADA = 1_000_000)
//! - Removing an unknown address is a no-op
//! - `finalize()` snapshots the lines; later edits never alter a taken draft
//! - `sign(passphrase)` finalizes and attaches the spending passphrase
//!
//! ## Usage Example
//!
//! ```rust
//! use cardano_wallet_client::tx_builder::{PaymentBuilder, BuilderError};
//!
//! # fn example() -> Result<(), BuilderError> {
//! let mut builder = PaymentBuilder::new();
//! builder.add("addr_test1qa", 1.0)?.add("addr_test1qb", 2.5)?;
//! builder.add("addr_test1qa", 0.5)?;
//!
//! assert_eq!(builder.len(), 2);
//! assert_eq!(builder.total(), 4.0);
//!
//! // Fee estimation takes the unsigned draft
//! let draft = builder.finalize();
//! assert_eq!(draft.payments()[0].lovelace(), 1_500_000);
//!
//! // Submission takes the signed one
//! let signed = builder.sign("correct horse battery staple");
//! assert_eq!(signed.draft(), &draft);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub use errors::BuilderError;

mod builder;
mod draft;

pub use builder::{BuilderState, PaymentBuilder};
pub use draft::{
    PaymentLine, SignedDraft, TransactionDraft, DEFAULT_TIME_TO_LIVE_SECS, DEFAULT_WITHDRAWAL,
};
