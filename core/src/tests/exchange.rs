use crate::error::GameError;
use crate::exchange::{exchange, Currency};
use crate::tests::*;

#[test]
fn test_btc_rate_exact() {
    let mut state = state_with_coins(2_000_000);

    let receipt = exchange(&mut state, 1_000_000, Currency::Btc).expect("funded");

    assert_eq!(receipt.coins_spent, 1_000_000);
    assert_eq!(receipt.currency, Currency::Btc);
    assert!((receipt.crypto_amount - 0.1).abs() < 1e-9);
    assert_eq!(receipt.remaining_coins, 1_000_000);
    assert_eq!(state.coins, 1_000_000, "the balance is debited");
}

#[test]
fn test_eth_rate_exact() {
    let mut state = state_with_coins(1_000_000);

    let receipt = exchange(&mut state, 1_000_000, Currency::Eth).expect("funded");

    assert!((receipt.crypto_amount - 1.0).abs() < 1e-9);
    assert_eq!(state.coins, 0);
}

#[test]
fn test_amount_above_balance_rejected() {
    let mut state = state_with_coins(100);

    let err = exchange(&mut state, 101, Currency::Btc).unwrap_err();
    assert_eq!(err, GameError::NotEnoughCoins { have: 100, need: 101 });
    assert_eq!(state.coins, 100, "rejected exchange mutates nothing");
}

#[test]
fn test_zero_amount_rejected() {
    let mut state = state_with_coins(100);

    let err = exchange(&mut state, 0, Currency::Eth).unwrap_err();
    assert_eq!(err, GameError::InvalidAmount);
    assert_eq!(state.coins, 100);
}

#[test]
fn test_full_balance_is_allowed() {
    let mut state = state_with_coins(100);

    let receipt = exchange(&mut state, 100, Currency::Eth).expect("amount == balance is fine");
    assert_eq!(receipt.remaining_coins, 0);
    assert_eq!(state.coins, 0);
}

#[test]
fn test_currency_from_key() {
    assert_eq!(Currency::from_key("btc"), Some(Currency::Btc));
    assert_eq!(Currency::from_key("eth"), Some(Currency::Eth));
    assert_eq!(Currency::from_key("doge"), None);
}

#[test]
fn test_rates_table() {
    assert!((Currency::Btc.rate() - 0.000_000_1).abs() < f64::EPSILON);
    assert!((Currency::Eth.rate() - 0.000_001).abs() < f64::EPSILON);
}
