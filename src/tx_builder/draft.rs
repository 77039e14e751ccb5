//! Finalized transaction drafts
//!
//! A [`TransactionDraft`] is an immutable snapshot of a builder's payment lines,
//! ready for fee estimation. [`SignedDraft`] adds the spending passphrase and is
//! what `send_transaction` accepts. Both are plain values: editing the builder
//! afterwards never changes a draft that was already taken.

use crate::types::{Denomination, Height};
use crate::units;
use serde::{Deserialize, Serialize};

/// Withdrawal policy sent with every draft unless disabled
pub const DEFAULT_WITHDRAWAL: &str = "self";

/// Draft time-to-live in seconds
pub const DEFAULT_TIME_TO_LIVE_SECS: u64 = 500;

/// One recipient and amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLine {
    pub address: String,
    pub amount: Denomination,
}

impl PaymentLine {
    pub fn new(address: impl Into<String>, lovelace: u64) -> Self {
        Self {
            address: address.into(),
            amount: Denomination::lovelace(lovelace),
        }
    }

    pub fn lovelace(&self) -> u64 {
        self.amount.quantity
    }
}

/// Payment list plus metadata, as accepted by `payment-fees`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub payments: Vec<PaymentLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal: Option<String>,
    pub time_to_live: Height,
}

impl TransactionDraft {
    pub fn payments(&self) -> &[PaymentLine] {
        &self.payments
    }

    /// Sum of all payment quantities in lovelace (saturating)
    pub fn total_lovelace(&self) -> u64 {
        sum_lovelace(&self.payments)
    }

    /// Sum of all payment quantities in ADA
    pub fn total(&self) -> f64 {
        units::to_ada(self.total_lovelace())
    }

    /// Attach the spending passphrase
    pub fn sign(self, passphrase: impl Into<String>) -> SignedDraft {
        SignedDraft {
            passphrase: passphrase.into(),
            draft: self,
        }
    }
}

/// Draft with passphrase, as accepted by `POST transactions`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignedDraft {
    passphrase: String,
    #[serde(flatten)]
    draft: TransactionDraft,
}

impl SignedDraft {
    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Drop the passphrase and recover the unsigned draft
    pub fn into_draft(self) -> TransactionDraft {
        self.draft
    }
}

impl std::fmt::Debug for SignedDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedDraft")
            .field("passphrase", &"<redacted>")
            .field("draft", &self.draft)
            .finish()
    }
}

pub(crate) fn sum_lovelace(lines: &[PaymentLine]) -> u64 {
    lines
        .iter()
        .fold(0u64, |acc, line| acc.saturating_add(line.lovelace()))
}
