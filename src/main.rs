//! wallet-cli: command line front end for the wallet HTTP API
//!
//! ## Commands
//!
//! - **network**: node tip and sync progress
//! - **wallets**: list, get, create, delete, balance
//! - **addresses**: addresses of a wallet, optionally filtered by state
//! - **transactions**: list, get, cancel
//! - **fee**: estimate the fee of a set of payments
//! - **send**: sign and submit a set of payments
//! - **phrase**: generate a recovery phrase
//!
//! Results are printed as pretty JSON on stdout; logs go to stderr. A failure
//! reported by the wallet service prints its code and message and exits with 1.

// Compiler warning configuration
#![deny(unused_imports)]
#![deny(unused_mut)]
#![deny(unused_variables)]
#![warn(unused_must_use)]

use anyhow::{Context, Result};
use cardano_wallet_client::config::Config;
use cardano_wallet_client::metrics::metrics;
use cardano_wallet_client::types::{AddressState, BalanceKind, SortOrder, WalletOptions};
use cardano_wallet_client::{
    Bip39Mnemonic, Outcome, PaymentBuilder, RecoveryPhrase, TransactionQuery, WalletApi,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wallet-cli", author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "wallet.toml")]
    config: String,

    /// Wallet service URL (overrides config and WALLET_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Print Prometheus metrics to stderr before exiting
    #[arg(long)]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Network information
    Network,

    /// Wallet management
    #[command(subcommand)]
    Wallets(WalletCommand),

    /// List addresses of a wallet
    Addresses {
        wallet_id: String,
        #[arg(long, value_enum)]
        state: Option<StateArg>,
    },

    /// Transaction history
    #[command(subcommand)]
    Transactions(TransactionCommand),

    /// Estimate the fee for a set of payments
    Fee {
        wallet_id: String,
        /// Payment as ADDRESS=ADA, repeatable
        #[arg(long = "pay", required = true, value_parser = parse_payment)]
        payments: Vec<(String, String)>,
    },

    /// Sign and submit a set of payments
    Send {
        wallet_id: String,
        /// Payment as ADDRESS=ADA, repeatable
        #[arg(long = "pay", required = true, value_parser = parse_payment)]
        payments: Vec<(String, String)>,
        /// Spending passphrase
        #[arg(long, env = "WALLET_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },

    /// Generate a recovery phrase
    Phrase {
        #[arg(long, default_value_t = 24)]
        words: usize,
    },
}

#[derive(Subcommand, Debug)]
enum WalletCommand {
    List,
    Get {
        wallet_id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, env = "WALLET_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
        /// Existing mnemonic; a new one is generated when omitted
        #[arg(long)]
        mnemonic: Option<String>,
        /// Length of a generated mnemonic
        #[arg(long, default_value_t = 15)]
        words: usize,
        #[arg(long)]
        address_pool_gap: Option<u32>,
    },
    Delete {
        wallet_id: String,
    },
    Balance {
        wallet_id: String,
        #[arg(long, value_enum, default_value = "available")]
        kind: KindArg,
    },
}

#[derive(Subcommand, Debug)]
enum TransactionCommand {
    List {
        wallet_id: String,
        /// RFC 3339 lower bound
        #[arg(long)]
        start: Option<DateTime<Utc>>,
        /// RFC 3339 upper bound
        #[arg(long)]
        end: Option<DateTime<Utc>>,
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
        /// Minimum withdrawal in lovelace
        #[arg(long)]
        min_withdrawal: Option<u64>,
    },
    Get {
        wallet_id: String,
        transaction_id: String,
    },
    Cancel {
        wallet_id: String,
        transaction_id: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StateArg {
    Used,
    Unused,
}

impl From<StateArg> for AddressState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Used => AddressState::Used,
            StateArg::Unused => AddressState::Unused,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Available,
    Reward,
    Total,
}

impl From<KindArg> for BalanceKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Available => BalanceKind::Available,
            KindArg::Reward => BalanceKind::Reward,
            KindArg::Total => BalanceKind::Total,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    Ascending,
    Descending,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Ascending => SortOrder::Ascending,
            OrderArg::Descending => SortOrder::Descending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(url) = &args.url {
        config.api.base_url = url.clone();
    }
    config.validate().context("Invalid configuration")?;

    init_logging(args.verbose, args.json_logs || config.logging.json, &config.logging.level)?;
    if !std::path::Path::new(&args.config).exists() {
        warn!("Config file '{}' not found, using defaults", args.config);
    }
    debug!(base_url = %config.api.base_url, "Configuration loaded");

    let api = WalletApi::new(config.client_config()?).context("Failed to build HTTP client")?;
    let code = run(&api, &config, args.command).await?;

    if args.metrics {
        eprintln!("{}", metrics().gather_text()?);
    }
    Ok(code)
}

async fn run(api: &WalletApi, config: &Config, command: Command) -> Result<ExitCode> {
    match command {
        Command::Network => emit(api.network_information().await?),

        Command::Wallets(WalletCommand::List) => emit(api.list_wallets().await?),
        Command::Wallets(WalletCommand::Get { wallet_id }) => {
            emit(api.get_wallet(&wallet_id).await?)
        }
        Command::Wallets(WalletCommand::Create {
            name,
            passphrase,
            mnemonic,
            words,
            address_pool_gap,
        }) => {
            let sentence = match mnemonic {
                Some(sentence) => sentence.split_whitespace().map(str::to_string).collect(),
                None => RecoveryPhrase::generate(&Bip39Mnemonic, words)?.into_words(),
            };
            let mut options = WalletOptions::new(name, sentence, passphrase);
            if let Some(gap) = address_pool_gap {
                options = options.with_address_pool_gap(gap);
            }
            emit(api.create_wallet(&options).await?)
        }
        Command::Wallets(WalletCommand::Delete { wallet_id }) => {
            emit(api.delete_wallet(&wallet_id).await?)
        }
        Command::Wallets(WalletCommand::Balance { wallet_id, kind }) => {
            emit(api.wallet_balance(&wallet_id, kind.into()).await?)
        }

        Command::Addresses { wallet_id, state } => {
            emit(api.list_addresses(&wallet_id, state.map(Into::into)).await?)
        }

        Command::Transactions(TransactionCommand::List {
            wallet_id,
            start,
            end,
            order,
            min_withdrawal,
        }) => {
            let query = TransactionQuery {
                start,
                end,
                order: order.map(Into::into),
                min_withdrawal,
            };
            emit(api.list_transactions(&wallet_id, &query).await?)
        }
        Command::Transactions(TransactionCommand::Get {
            wallet_id,
            transaction_id,
        }) => emit(api.get_transaction(&wallet_id, &transaction_id).await?),
        Command::Transactions(TransactionCommand::Cancel {
            wallet_id,
            transaction_id,
        }) => emit(api.cancel_transaction(&wallet_id, &transaction_id).await?),

        Command::Fee {
            wallet_id,
            payments,
        } => {
            let builder = build_payments(config, &payments)?;
            emit(api.estimate_fee(&wallet_id, &builder.finalize()).await?)
        }
        Command::Send {
            wallet_id,
            payments,
            passphrase,
        } => {
            let builder = build_payments(config, &payments)?;
            debug!(lines = builder.len(), total_ada = builder.total(), "Submitting payments");
            emit(api.send_transaction(&wallet_id, &builder.sign(passphrase)).await?)
        }

        Command::Phrase { words } => {
            let phrase = RecoveryPhrase::generate(&Bip39Mnemonic, words)?;
            emit(Outcome::Success(phrase))
        }
    }
}

fn build_payments(config: &Config, payments: &[(String, String)]) -> Result<PaymentBuilder> {
    let mut builder =
        PaymentBuilder::new().with_time_to_live(config.transaction.time_to_live_secs);
    for (address, ada) in payments {
        builder.add_str(address.as_str(), ada)?;
    }
    Ok(builder)
}

/// Print a success as pretty JSON, or a failure to stderr with exit code 1
fn emit<T: Serialize>(outcome: Outcome<T>) -> Result<ExitCode> {
    match outcome {
        Outcome::Success(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Failure(error) => {
            eprintln!("error: {}", error);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn parse_payment(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((address, ada)) if !address.is_empty() && !ada.is_empty() => {
            Ok((address.to_string(), ada.to_string()))
        }
        _ => Err(format!("expected ADDRESS=ADA, got {:?}", raw)),
    }
}

/// Initialize logging with tracing
fn init_logging(verbose: bool, json: bool, level: &str) -> Result<()> {
    let default_filter = if verbose {
        "cardano_wallet_client=debug,wallet_cli=debug,info".to_string()
    } else {
        level.to_string()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

/// Load configuration from file with fallback to defaults
fn load_config(path: &str) -> Result<Config> {
    if std::path::Path::new(path).exists() {
        Config::from_file_with_env(path)
            .with_context(|| format!("Failed to load config from {}", path))
    } else {
        Config::from_env().context("Failed to read configuration from environment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payment() {
        assert_eq!(
            parse_payment("addr_test1qa=1.5").unwrap(),
            ("addr_test1qa".to_string(), "1.5".to_string())
        );
        assert!(parse_payment("addr_test1qa").is_err());
        assert!(parse_payment("=1").is_err());
    }

    #[test]
    fn test_cli_parses_send() {
        let args = Args::try_parse_from([
            "wallet-cli",
            "send",
            "w1",
            "--pay",
            "a=1",
            "--pay",
            "b=2.5",
            "--passphrase",
            "secret",
        ])
        .unwrap();
        match args.command {
            Command::Send { payments, .. } => assert_eq!(payments.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_build_payments_merges_duplicates() {
        let config = Config::default();
        let payments = vec![
            ("a".to_string(), "1".to_string()),
            ("a".to_string(), "0.5".to_string()),
        ];
        let builder = build_payments(&config, &payments).unwrap();
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.total_lovelace(), 1_500_000);
    }
}
