//! Unit helpers: lovelace/ADA conversion, ISO-8601 timestamps, word counts

use chrono::{DateTime, Utc};
use thiserror::Error;

/// 1 ADA = 1_000_000 lovelace
pub const LOVELACE_PER_ADA: u64 = 1_000_000;

/// Number of decimal places an ADA amount can carry
pub const ADA_DECIMALS: usize = 6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("Amount is not a finite number: {0}")]
    NotFinite(f64),
    #[error("Amount must not be negative: {0}")]
    Negative(f64),
    #[error("Amount exceeds the representable lovelace range")]
    Overflow,
    #[error("Malformed ADA amount: {0:?}")]
    Malformed(String),
    #[error("ADA amount has more than 6 decimal places: {0:?}")]
    TooPrecise(String),
}

/// Lovelace → ADA
pub fn to_ada(lovelace: u64) -> f64 {
    lovelace as f64 / LOVELACE_PER_ADA as f64
}

/// ADA → lovelace, rounded to the nearest lovelace
pub fn to_lovelace(ada: f64) -> Result<u64, AmountError> {
    if !ada.is_finite() {
        return Err(AmountError::NotFinite(ada));
    }
    if ada < 0.0 {
        return Err(AmountError::Negative(ada));
    }

    let scaled = (ada * LOVELACE_PER_ADA as f64).round();
    if scaled >= u64::MAX as f64 {
        return Err(AmountError::Overflow);
    }
    Ok(scaled as u64)
}

/// Exact decimal ADA string (e.g. `"1.5"`, `"0.000001"`) → lovelace
pub fn parse_ada(raw: &str) -> Result<u64, AmountError> {
    let trimmed = raw.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(AmountError::Malformed(raw.to_string()));
    }
    if fraction.len() > ADA_DECIMALS {
        return Err(AmountError::TooPrecise(raw.to_string()));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| AmountError::Overflow)?
    };
    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", fraction, width = ADA_DECIMALS);
        padded.parse().map_err(|_| AmountError::Malformed(raw.to_string()))?
    };

    whole
        .checked_mul(LOVELACE_PER_ADA)
        .and_then(|l| l.checked_add(fraction))
        .ok_or(AmountError::Overflow)
}

/// `yyyy-MM-ddTHH:mm:ssZ`
pub fn to_iso8601(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Number of whitespace-separated words
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}
