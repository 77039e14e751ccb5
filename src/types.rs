//! Wire types of the wallet API
//!
//! Field names follow the remote JSON contract. Optional and collection fields
//! default when absent so that older or newer service versions still decode.

use crate::units;
use serde::{Deserialize, Serialize};

/// Unit reported for ADA amounts
pub const LOVELACE_UNIT: &str = "lovelace";

fn lovelace_unit() -> String {
    LOVELACE_UNIT.to_string()
}

fn default_address_pool_gap() -> u32 {
    20
}

/// Quantity with unit (`{"quantity": 42, "unit": "lovelace"}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    pub quantity: u64,
    #[serde(default = "lovelace_unit")]
    pub unit: String,
}

impl Denomination {
    pub fn lovelace(quantity: u64) -> Self {
        Self {
            quantity,
            unit: lovelace_unit(),
        }
    }

    /// Quantity in ADA (meaningful for lovelace amounts only)
    pub fn to_ada(&self) -> f64 {
        units::to_ada(self.quantity)
    }
}

impl Default for Denomination {
    fn default() -> Self {
        Self::lovelace(0)
    }
}

/// Block height / duration quantity (`{"quantity": 500, "unit": "second"}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub quantity: u64,
    pub unit: String,
}

impl Height {
    pub fn new(quantity: u64, unit: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
        }
    }

    pub fn seconds(quantity: u64) -> Self {
        Self::new(quantity, "second")
    }
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Which balance of a wallet to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceKind {
    /// Spendable unconditionally
    Available,
    /// Staking rewards
    Reward,
    /// Available + rewards + pending
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressState {
    Used,
    Unused,
}

impl AddressState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressState::Used => "used",
            AddressState::Unused => "unused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Pending,
    Submitted,
    InLedger,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptValidity {
    Valid,
    Invalid,
}

// ---------------------------------------------------------------------------
// Chain state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTip {
    pub height: Height,
    pub epoch_number: u64,
    pub time: String,
    pub absolute_slot_number: u64,
    pub slot_number: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkTip {
    pub epoch_number: u64,
    pub time: String,
    pub absolute_slot_number: u64,
    pub slot_number: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochInfo {
    pub epoch_number: u64,
    pub epoch_start_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub quantity: f64,
    pub unit: String,
}

/// Sync state of a wallet or node (`ready`, `syncing`, `not_responding`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncState {
    pub status: String,
    #[serde(default)]
    pub progress: Option<Progress>,
}

impl SyncState {
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

/// Response of `GET network/information`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInformation {
    #[serde(default)]
    pub network_tip: Option<NetworkTip>,
    pub sync_progress: SyncState,
    #[serde(default)]
    pub next_epoch: Option<EpochInfo>,
    pub node_era: String,
    pub node_tip: NodeTip,
}

// ---------------------------------------------------------------------------
// Wallets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInformation {
    pub policy_id: String,
    pub asset_name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMint {
    pub policy_id: String,
    pub asset_name: String,
    #[serde(default)]
    pub fingerprint: Option<String>,
    pub quantity: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAssets {
    #[serde(default)]
    pub available: Vec<AssetInformation>,
    #[serde(default)]
    pub total: Vec<AssetInformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub available: Denomination,
    pub reward: Denomination,
    pub total: Denomination,
}

impl WalletBalance {
    pub fn get(&self, kind: BalanceKind) -> &Denomination {
        match kind {
            BalanceKind::Available => &self.available,
            BalanceKind::Reward => &self.reward,
            BalanceKind::Total => &self.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationActive {
    pub status: String,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegationNext {
    pub status: String,
    #[serde(default)]
    pub changes_at: Option<EpochInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delegation {
    pub active: DelegationActive,
    #[serde(default)]
    pub next: Vec<DelegationNext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassphraseInfo {
    pub last_updated_at: String,
}

/// Wallet details as returned by create/get/list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    #[serde(default = "default_address_pool_gap")]
    pub address_pool_gap: u32,
    #[serde(default)]
    pub balance: WalletBalance,
    #[serde(default)]
    pub assets: WalletAssets,
    #[serde(default)]
    pub delegation: Option<Delegation>,
    pub name: String,
    #[serde(default)]
    pub passphrase: Option<PassphraseInfo>,
    pub state: SyncState,
    #[serde(default)]
    pub tip: Option<NodeTip>,
}

/// Parameters of `POST wallets`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletOptions {
    pub name: String,
    pub mnemonic_sentence: Vec<String>,
    pub passphrase: String,
    #[serde(default = "default_address_pool_gap")]
    pub address_pool_gap: u32,
}

impl WalletOptions {
    pub fn new(
        name: impl Into<String>,
        mnemonic_sentence: Vec<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mnemonic_sentence,
            passphrase: passphrase.into(),
            address_pool_gap: default_address_pool_gap(),
        }
    }

    pub fn with_address_pool_gap(mut self, gap: u32) -> Self {
        self.address_pool_gap = gap;
        self
    }
}

impl std::fmt::Debug for WalletOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Secrets stay out of logs
        f.debug_struct("WalletOptions")
            .field("name", &self.name)
            .field("mnemonic_words", &self.mnemonic_sentence.len())
            .field("address_pool_gap", &self.address_pool_gap)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub state: AddressState,
    #[serde(default)]
    pub derivation_path: Vec<String>,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Response of `POST wallets/{id}/payment-fees`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub estimated_min: Denomination,
    pub estimated_max: Denomination,
    #[serde(default)]
    pub minimum_coins: Vec<Denomination>,
    #[serde(default)]
    pub deposit: Denomination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub amount: Option<Denomination>,
    #[serde(default)]
    pub assets: Vec<AssetInformation>,
    pub id: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub address: String,
    pub amount: Denomination,
    #[serde(default)]
    pub assets: Vec<AssetInformation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxCollateral {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub amount: Option<Denomination>,
    pub id: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub stake_address: String,
    pub amount: Denomination,
}

/// Transaction details as returned by get/list/send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInformation {
    pub id: String,
    pub amount: Denomination,
    #[serde(default)]
    pub fee: Option<Denomination>,
    #[serde(default)]
    pub deposit_taken: Option<Denomination>,
    #[serde(default)]
    pub deposit_returned: Option<Denomination>,
    /// Present when `status == in_ledger`
    #[serde(default)]
    pub inserted_at: Option<NodeTip>,
    /// Present when `status` is `pending` or `expired`
    #[serde(default)]
    pub expires_at: Option<NetworkTip>,
    #[serde(default)]
    pub pending_since: Option<NodeTip>,
    #[serde(default)]
    pub depth: Option<Height>,
    pub direction: Direction,
    #[serde(default)]
    pub inputs: Vec<TxInput>,
    #[serde(default)]
    pub outputs: Vec<TxOutput>,
    #[serde(default)]
    pub collateral: Vec<TxCollateral>,
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,
    #[serde(default)]
    pub mint: Vec<AssetMint>,
    pub status: TxStatus,
    #[serde(default)]
    pub script_validity: Option<ScriptValidity>,
}
