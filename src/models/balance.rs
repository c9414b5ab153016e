use serde::{Deserialize, Serialize};

/// A single holding on a single chain, as delivered by a balance source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    pub chain: String,
}

impl WalletBalance {
    /// Create a new wallet balance
    pub fn new(currency: impl Into<String>, amount: f64, chain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            chain: chain.into(),
        }
    }

    /// Whether the balance is worth showing at all (strictly positive amount)
    pub fn is_positive(&self) -> bool {
        self.amount > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_creation() {
        let balance = WalletBalance::new("OSMO", 100.0, "Osmosis");
        assert_eq!(balance.currency, "OSMO");
        assert_eq!(balance.amount, 100.0);
        assert_eq!(balance.chain, "Osmosis");
    }

    #[test]
    fn test_is_positive() {
        assert!(WalletBalance::new("ETH", 2.5, "Ethereum").is_positive());
        assert!(!WalletBalance::new("NEO", 0.0, "Neo").is_positive());
        assert!(!WalletBalance::new("ETH", -5.0, "Ethereum").is_positive());
    }
}
