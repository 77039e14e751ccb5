//! Payment builder: accumulates recipients before a transaction is submitted
//!
//! Lines are unique by address and kept in insertion order. Adding to an
//! existing address merges (sums) the amounts instead of replacing them.
//! [`PaymentBuilder::finalize`] and [`PaymentBuilder::sign`] return new draft
//! values, so the builder can keep being edited for the next submission.
//!
//! The builder is a single-owner accumulator; share drafts, not builders.

use crate::tx_builder::draft::{
    sum_lovelace, PaymentLine, SignedDraft, TransactionDraft, DEFAULT_TIME_TO_LIVE_SECS,
    DEFAULT_WITHDRAWAL,
};
use crate::tx_builder::errors::BuilderError;
use crate::types::Height;
use crate::units;

/// Observable builder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No payment lines
    Empty,
    /// At least one payment line
    Building,
}

/// Stateful accumulator of payment lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentBuilder {
    lines: Vec<PaymentLine>,
    withdrawal: Option<String>,
    time_to_live: Height,
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            withdrawal: Some(DEFAULT_WITHDRAWAL.to_string()),
            time_to_live: Height::seconds(DEFAULT_TIME_TO_LIVE_SECS),
        }
    }

    pub fn with_time_to_live(mut self, seconds: u64) -> Self {
        self.time_to_live = Height::seconds(seconds);
        self
    }

    pub fn with_withdrawal(mut self, withdrawal: Option<String>) -> Self {
        self.withdrawal = withdrawal;
        self
    }

    /// Add `ada` to `address`, merging with an existing line
    pub fn add(&mut self, address: impl Into<String>, ada: f64) -> Result<&mut Self, BuilderError> {
        let address = address.into();
        let lovelace = units::to_lovelace(ada).map_err(|source| BuilderError::InvalidAmount {
            address: address.clone(),
            source,
        })?;
        self.add_lovelace(address, lovelace)
    }

    /// Add an exact decimal ADA string (`"1.5"`) to `address`
    pub fn add_str(&mut self, address: impl Into<String>, ada: &str) -> Result<&mut Self, BuilderError> {
        let address = address.into();
        let lovelace = units::parse_ada(ada).map_err(|source| BuilderError::InvalidAmount {
            address: address.clone(),
            source,
        })?;
        self.add_lovelace(address, lovelace)
    }

    /// Add `lovelace` to `address`, merging with an existing line
    pub fn add_lovelace(
        &mut self,
        address: impl Into<String>,
        lovelace: u64,
    ) -> Result<&mut Self, BuilderError> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(BuilderError::EmptyAddress);
        }

        match self.lines.iter_mut().find(|line| line.address == address) {
            Some(line) => {
                line.amount.quantity = line
                    .amount
                    .quantity
                    .checked_add(lovelace)
                    .ok_or(BuilderError::QuantityOverflow { address })?;
            }
            None => self.lines.push(PaymentLine::new(address, lovelace)),
        }
        Ok(self)
    }

    /// Remove the line for `address`; absent addresses are a no-op
    pub fn remove(&mut self, address: &str) -> Option<PaymentLine> {
        let index = self.lines.iter().position(|line| line.address == address)?;
        Some(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Snapshot of the current lines as a submittable draft
    pub fn finalize(&self) -> TransactionDraft {
        TransactionDraft {
            payments: self.lines.clone(),
            withdrawal: self.withdrawal.clone(),
            time_to_live: self.time_to_live.clone(),
        }
    }

    /// Finalize and attach the spending passphrase
    pub fn sign(&self, passphrase: impl Into<String>) -> SignedDraft {
        self.finalize().sign(passphrase)
    }

    /// Sum of all lines in ADA; `0.0` when empty
    pub fn total(&self) -> f64 {
        units::to_ada(self.total_lovelace())
    }

    /// Sum of all lines in lovelace (saturating)
    pub fn total_lovelace(&self) -> u64 {
        sum_lovelace(&self.lines)
    }

    pub fn lines(&self) -> &[PaymentLine] {
        &self.lines
    }

    pub fn get(&self, address: &str) -> Option<&PaymentLine> {
        self.lines.iter().find(|line| line.address == address)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn state(&self) -> BuilderState {
        if self.lines.is_empty() {
            BuilderState::Empty
        } else {
            BuilderState::Building
        }
    }
}
