//! Static rate table. Prices are snapshot constants supplied by an
//! external rate source; there is no live feed and no error path.

use crate::model::{Asset, Currency};

/// EUR to USD conversion factor.
pub const USD_PER_EUR: f64 = 1.088;

/// Unit price of `asset` in EUR, the rate table's native quote currency.
pub fn native_rate(asset: Asset) -> f64 {
    match asset {
        Asset::Btc => 84_426.20,
        Asset::Eth => 1_940.21,
        Asset::Sol => 148.32,
    }
}

/// Unit price of `asset` in `currency`. USD is the native rate adjusted
/// by [`USD_PER_EUR`]; EUR is the native rate itself.
pub fn rate(asset: Asset, currency: Currency) -> f64 {
    match currency {
        Currency::Eur => native_rate(asset),
        Currency::Usd => native_rate(asset) * USD_PER_EUR,
    }
}
