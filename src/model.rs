//! Core domain types for the conversion engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error from the `FromStr` impls below: the token matched no variant.
#[derive(Debug, Error)]
#[error("unrecognized token '{0}'")]
pub struct ParseTokenError(pub String);

/// Asset being bought or sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    #[default]
    Btc,
    Eth,
    Sol,
}

/// Settlement currency. EUR is the rate table's native quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    #[default]
    Usd,
}

impl Currency {
    pub fn symbol(self) -> char {
        match self {
            Currency::Eur => '€',
            Currency::Usd => '$',
        }
    }
}

/// Checkout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Buy,
    Sell,
}

/// Which of the two linked fields the user is driving. The other field is
/// always derived from it, never edited while this one holds primacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[default]
    Fiat,
    Asset,
}

/// A user event representing the possible inputs of the engine.
#[derive(Debug, Clone)]
pub enum Event {
    /// The fiat field was edited; `raw` is the text as typed.
    EditFiat { raw: String },
    /// The asset-quantity field was edited; `raw` is the text as typed.
    EditAsset { raw: String },
    /// Buy/sell toggle. Swaps which slot renders on top, nothing more.
    SwitchMode(Mode),
    /// Asset picker selection.
    SwitchAsset(Asset),
    /// Settlement currency picker selection.
    SwitchCurrency(Currency),
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Asset::Btc => "BTC",
            Asset::Eth => "ETH",
            Asset::Sol => "SOL",
        };
        f.write_str(token)
    }
}

impl FromStr for Asset {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BTC" => Ok(Asset::Btc),
            "ETH" => Ok(Asset::Eth),
            "SOL" => Ok(Asset::Sol),
            other => Err(ParseTokenError(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        };
        f.write_str(token)
    }
}

impl FromStr for Currency {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(ParseTokenError(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Mode::Buy => "buy",
            Mode::Sell => "sell",
        };
        f.write_str(token)
    }
}

impl FromStr for Mode {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Mode::Buy),
            "sell" => Ok(Mode::Sell),
            other => Err(ParseTokenError(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Field::Fiat => "fiat",
            Field::Asset => "asset",
        };
        f.write_str(token)
    }
}
