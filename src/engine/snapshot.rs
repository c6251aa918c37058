use crate::Amount;
use crate::model::{Asset, Currency, Field, Mode};
use crate::rates;

/// The complete state of the conversion engine at one instant.
///
/// Exactly one field is primary; the other is always derived from it via
/// [`Snapshot::recompute_secondary`] and never edited directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub(crate) asset: Asset,
    pub(crate) currency: Currency,
    pub(crate) mode: Mode,
    pub(crate) primary: Field,
    pub(crate) fiat_amount: Amount,
    pub(crate) asset_amount: Amount,
    /// Fiat display precision, 0..=2. Follows the typed text on fiat
    /// edits and is pinned to 2 whenever the fiat side is derived.
    pub(crate) fiat_decimals: u8,
}

impl Snapshot {
    pub fn asset(&self) -> Asset {
        self.asset
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn primary(&self) -> Field {
        self.primary
    }

    pub fn fiat_amount(&self) -> Amount {
        self.fiat_amount
    }

    pub fn asset_amount(&self) -> Amount {
        self.asset_amount
    }

    pub fn fiat_decimals(&self) -> u8 {
        self.fiat_decimals
    }

    /// Fiat-equivalent value of the transaction, the fee base. The fiat
    /// field is either primary or freshly derived from the primary, so it
    /// is the notional in both directions.
    pub fn notional(&self) -> Amount {
        self.fiat_amount
    }

    /// Derive the non-primary field from the primary's raw numeric value
    /// at the current effective rate. Runs on raw numbers, never on
    /// formatted text, so repeated transitions do not compound rounding.
    pub(crate) fn recompute_secondary(&mut self) {
        match self.primary {
            Field::Fiat => {
                let fiat = self.fiat_amount.to_float();
                let base_native = match self.currency {
                    Currency::Usd => fiat / rates::USD_PER_EUR,
                    Currency::Eur => fiat,
                };
                self.asset_amount =
                    Amount::from_float(base_native / rates::native_rate(self.asset));
            }
            Field::Asset => {
                let fiat_native = self.asset_amount.to_float() * rates::native_rate(self.asset);
                let fiat = match self.currency {
                    Currency::Usd => fiat_native * rates::USD_PER_EUR,
                    Currency::Eur => fiat_native,
                };
                self.fiat_amount = Amount::from_float(fiat).round2();
                self.fiat_decimals = 2;
            }
        }
    }
}

impl Default for Snapshot {
    /// First-mount state: 500 units of the default currency driving the
    /// asset quantity.
    fn default() -> Self {
        let mut snapshot = Snapshot {
            asset: Asset::default(),
            currency: Currency::default(),
            mode: Mode::default(),
            primary: Field::Fiat,
            fiat_amount: Amount::from_float(500.0),
            asset_amount: Amount::default(),
            fiat_decimals: 0,
        };
        snapshot.recompute_secondary();
        snapshot
    }
}
