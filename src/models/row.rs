use serde::{Deserialize, Serialize};

use super::balance::WalletBalance;

/// A balance projected for display: the original record plus a
/// two-decimal amount string and its value in the reference unit.
///
/// Rows are built once and never mutated; identity fields (`currency`,
/// `amount`, `chain`) are carried over from the source balance verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub currency: String,
    pub amount: f64,
    pub formatted_amount: String,
    pub chain: String,
    pub reference_value: f64,
}

impl DisplayRow {
    /// Project a balance into a display row at the given unit price.
    ///
    /// An unknown price must be passed as `0.0` by the caller (see
    /// `PriceTable::price_of`); this constructor does not second-guess it.
    pub fn from_balance(balance: &WalletBalance, price: f64) -> Self {
        Self {
            currency: balance.currency.clone(),
            amount: balance.amount,
            formatted_amount: format!("{:.2}", balance.amount),
            chain: balance.chain.clone(),
            reference_value: price * balance.amount,
        }
    }
}
