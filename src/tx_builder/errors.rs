//! Error types for the payment builder
//!
//! Builder operations are in-memory and total; the only failures are caller
//! contract violations such as a malformed amount.

use crate::units::AmountError;
use thiserror::Error;

/// Error type for payment builder operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// Recipient address is empty
    #[error("Recipient address must not be empty")]
    EmptyAddress,

    /// Amount could not be converted to lovelace
    #[error("Invalid amount for {address}: {source}")]
    InvalidAmount {
        address: String,
        #[source]
        source: AmountError,
    },

    /// Merging into an existing line would overflow the lovelace quantity
    #[error("Lovelace quantity overflow for {address}")]
    QuantityOverflow { address: String },
}

impl BuilderError {
    /// Address the error refers to, if any
    pub fn address(&self) -> Option<&str> {
        match self {
            BuilderError::EmptyAddress => None,
            BuilderError::InvalidAmount { address, .. } => Some(address),
            BuilderError::QuantityOverflow { address } => Some(address),
        }
    }
}
