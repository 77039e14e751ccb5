//! Payment builder behavior through the public API

use cardano_wallet_client::tx_builder::{BuilderState, PaymentBuilder, DEFAULT_TIME_TO_LIVE_SECS};
use cardano_wallet_client::units::LOVELACE_PER_ADA;

#[test]
fn test_merge_by_address() {
    let mut builder = PaymentBuilder::new();
    builder.add("A", 1.0).unwrap();
    builder.add("A", 2.0).unwrap();

    assert_eq!(builder.lines().len(), 1);
    assert_eq!(builder.lines()[0].lovelace(), 3 * LOVELACE_PER_ADA);
    assert_eq!(builder.total(), 3.0);
}

#[test]
fn test_add_remove_total_zero() {
    let mut builder = PaymentBuilder::new();
    builder.add("A", 5.0).unwrap();
    builder.remove("A");

    assert_eq!(builder.total(), 0.0);
    assert!(builder.lines().is_empty());
}

#[test]
fn test_finalize_order_and_scaling() {
    let mut builder = PaymentBuilder::new();
    builder.add("A", 1.0).unwrap();
    builder.add("B", 2.0).unwrap();

    let draft = builder.finalize();
    assert_eq!(draft.payments().len(), 2);
    assert_eq!(draft.payments()[0].address, "A");
    assert_eq!(draft.payments()[0].lovelace(), LOVELACE_PER_ADA);
    assert_eq!(draft.payments()[1].address, "B");
    assert_eq!(draft.payments()[1].lovelace(), 2 * LOVELACE_PER_ADA);
    assert_eq!(draft.time_to_live.quantity, DEFAULT_TIME_TO_LIVE_SECS);
}

#[test]
fn test_remove_on_empty_builder() {
    let mut builder = PaymentBuilder::new();
    assert!(builder.remove("Z").is_none());
    assert_eq!(builder.state(), BuilderState::Empty);
    assert_eq!(builder.total(), 0.0);
}

#[test]
fn test_sign_then_edit_for_next_submission() {
    let mut builder = PaymentBuilder::new();
    builder.add("A", 1.0).unwrap();
    let first = builder.sign("pass");

    builder.remove("A");
    builder.add("B", 3.0).unwrap();
    let second = builder.sign("pass");

    assert_eq!(first.draft().payments()[0].address, "A");
    assert_eq!(second.draft().payments()[0].address, "B");
    assert_eq!(second.draft().total(), 3.0);
}

#[test]
fn test_fractional_amounts_round_to_lovelace() {
    let mut builder = PaymentBuilder::new();
    builder.add("A", 0.1).unwrap();
    builder.add("A", 0.2).unwrap();
    assert_eq!(builder.total_lovelace(), 300_000);
    assert_eq!(builder.total(), 0.3);
}
