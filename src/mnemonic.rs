//! Recovery phrase generation
//!
//! Wallet creation needs a BIP-39 mnemonic sentence. Generation sits behind
//! [`MnemonicSource`] so tests can supply a fixed phrase; [`Bip39Mnemonic`] is
//! the production source (OS randomness + English wordlist).

use bip39::{Language, Mnemonic};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Word counts accepted by the wallet backend
pub const SUPPORTED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Word count outside 12/15/18/21/24
    #[error("Unsupported mnemonic length {0}, expected one of 12, 15, 18, 21, 24")]
    UnsupportedWordCount(usize),

    /// Source returned a phrase of the wrong length
    #[error("Mnemonic source returned {actual} words, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Underlying generator failed
    #[error("Mnemonic generation failed: {0}")]
    Generation(String),
}

/// Anything that can produce a space-separated mnemonic sentence
pub trait MnemonicSource {
    fn generate(&self, word_count: usize) -> Result<String, MnemonicError>;
}

/// BIP-39 English mnemonics from `rand::thread_rng`
#[derive(Debug, Clone, Copy, Default)]
pub struct Bip39Mnemonic;

impl Bip39Mnemonic {
    /// 4 bytes of entropy per 3 words
    fn entropy_len(word_count: usize) -> Result<usize, MnemonicError> {
        if !SUPPORTED_WORD_COUNTS.contains(&word_count) {
            return Err(MnemonicError::UnsupportedWordCount(word_count));
        }
        Ok(word_count / 3 * 4)
    }
}

impl MnemonicSource for Bip39Mnemonic {
    fn generate(&self, word_count: usize) -> Result<String, MnemonicError> {
        let mut entropy = vec![0u8; Self::entropy_len(word_count)?];
        rand::thread_rng().fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .map_err(|e| MnemonicError::Generation(e.to_string()))?;
        Ok(mnemonic.to_string())
    }
}

/// Ordered mnemonic words, as sent in `mnemonic_sentence`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryPhrase {
    pub mnemonic_sentence: Vec<String>,
}

impl RecoveryPhrase {
    /// Ask `source` for a phrase and split it into words
    pub fn generate<S: MnemonicSource + ?Sized>(
        source: &S,
        word_count: usize,
    ) -> Result<Self, MnemonicError> {
        if !SUPPORTED_WORD_COUNTS.contains(&word_count) {
            return Err(MnemonicError::UnsupportedWordCount(word_count));
        }

        let sentence = source.generate(word_count)?;
        let words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if words.len() != word_count {
            return Err(MnemonicError::LengthMismatch {
                expected: word_count,
                actual: words.len(),
            });
        }

        Ok(Self {
            mnemonic_sentence: words,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.mnemonic_sentence
    }

    pub fn len(&self) -> usize {
        self.mnemonic_sentence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mnemonic_sentence.is_empty()
    }

    pub fn sentence(&self) -> String {
        self.mnemonic_sentence.join(" ")
    }

    pub fn into_words(self) -> Vec<String> {
        self.mnemonic_sentence
    }
}

impl std::fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoveryPhrase")
            .field("words", &self.mnemonic_sentence.len())
            .finish_non_exhaustive()
    }
}
