//! Fee calculation over the fiat notional of a checkout.

use crate::Amount;
use crate::model::Mode;

/// Processing fee rate, charged on every transaction.
const PROCESSING_FEE_RATE: f64 = 0.005;

/// Network fee rate, charged on buys only.
const NETWORK_FEE_RATE: f64 = 0.001;

/// Itemized fees for one checkout, each rounded to 2 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub processing: Amount,
    pub network: Amount,
    pub total: Amount,
}

/// Compute fees from the fiat notional. The notional is always the
/// fiat-equivalent of the transaction in the selected currency; when the
/// asset field is primary the caller converts at the current rate first.
/// A zero notional (including normalized invalid input) yields zero fees.
pub fn fees(notional: Amount, mode: Mode) -> FeeBreakdown {
    let base = notional.to_float();
    let processing = Amount::from_float(base * PROCESSING_FEE_RATE).round2();
    let network = match mode {
        Mode::Buy => Amount::from_float(base * NETWORK_FEE_RATE).round2(),
        Mode::Sell => Amount::default(),
    };
    FeeBreakdown {
        processing,
        network,
        total: processing + network,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fiat(value: f64) -> Amount {
        Amount::from_float(value)
    }

    #[test]
    fn buy_charges_processing_and_network() {
        let breakdown = fees(fiat(500.0), Mode::Buy);
        assert_eq!(breakdown.processing, fiat(2.50));
        assert_eq!(breakdown.network, fiat(0.50));
        assert_eq!(breakdown.total, fiat(3.00));
    }

    #[test]
    fn sell_never_charges_network() {
        let breakdown = fees(fiat(500.0), Mode::Sell);
        assert_eq!(breakdown.processing, fiat(2.50));
        assert_eq!(breakdown.network, Amount::default());
        assert_eq!(breakdown.total, fiat(2.50));
    }

    #[test]
    fn fees_round_to_cents() {
        // 123.45 * 0.005 = 0.61725 -> 0.62, * 0.001 = 0.12345 -> 0.12
        let breakdown = fees(fiat(123.45), Mode::Buy);
        assert_eq!(breakdown.processing, fiat(0.62));
        assert_eq!(breakdown.network, fiat(0.12));
        assert_eq!(breakdown.total, fiat(0.74));
    }

    #[test]
    fn zero_notional_yields_zero_fees() {
        let breakdown = fees(Amount::default(), Mode::Buy);
        assert_eq!(breakdown.processing, Amount::default());
        assert_eq!(breakdown.network, Amount::default());
        assert_eq!(breakdown.total, Amount::default());
    }

    #[test]
    fn buy_total_dominates_sell_total() {
        for value in [0.01, 1.0, 499.99, 500.0, 1_000_000.0] {
            let buy = fees(fiat(value), Mode::Buy);
            let sell = fees(fiat(value), Mode::Sell);
            assert!(buy.total >= sell.total, "notional {value}");
        }
        // Equality holds only at zero.
        let buy = fees(Amount::default(), Mode::Buy);
        let sell = fees(Amount::default(), Mode::Sell);
        assert_eq!(buy.total, sell.total);
    }
}
