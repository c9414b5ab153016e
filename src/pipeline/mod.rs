//! The pure display pipeline: classify, filter, sort, project.
//!
//! Every function here is a pure function of its arguments. No I/O, no
//! shared state, no mutation of inputs; identical inputs always produce
//! identical output, so the pipeline can be re-run on every data refresh
//! and called concurrently over shared read-only inputs.

use std::cmp::Ordering;

use crate::chain::{priority_of, UNKNOWN_CHAIN_PRIORITY};
use crate::models::{DisplayRow, PriceTable, WalletBalance};

/// Filter balances down to displayable ones and order them by chain
/// priority, highest first.
///
/// A balance survives only when its chain priority is strictly above the
/// unknown-chain sentinel AND its amount is strictly positive. Ties in
/// priority compare as equal; the sort is stable, so tied records keep
/// their input order, but callers must not rely on that.
pub fn select_and_order(balances: &[WalletBalance]) -> Vec<WalletBalance> {
    let mut kept: Vec<WalletBalance> = balances
        .iter()
        .filter(|balance| {
            priority_of(&balance.chain) > UNKNOWN_CHAIN_PRIORITY && balance.is_positive()
        })
        .cloned()
        .collect();

    kept.sort_by(|lhs, rhs| {
        let left = priority_of(&lhs.chain);
        let right = priority_of(&rhs.chain);
        if left > right {
            Ordering::Less
        } else if right > left {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    kept
}

/// Project already filtered and ordered balances into display rows,
/// preserving their order. Currencies missing from the price table are
/// valued at zero, never rejected.
pub fn project(balances: &[WalletBalance], prices: &PriceTable) -> Vec<DisplayRow> {
    balances
        .iter()
        .map(|balance| DisplayRow::from_balance(balance, prices.price_of(&balance.currency)))
        .collect()
}

/// Run the full pipeline: filter, sort, then project.
///
/// An empty result is a normal outcome (nothing eligible to show), not an
/// error; this function cannot fail.
pub fn build_rows(balances: &[WalletBalance], prices: &PriceTable) -> Vec<DisplayRow> {
    project(&select_and_order(balances), prices)
}
