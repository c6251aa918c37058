//! Session state codec.
//!
//! Screens never share an engine; the snapshot crosses a navigation
//! boundary as a JSON payload. Encoding happens when a screen is left,
//! decoding when the next screen mounts. Decoding is total: a payload
//! with missing fields, or no payload at all, yields the documented
//! defaults instead of failing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Amount;
use crate::amount::{input_decimals, parse_or_zero};
use crate::engine::Snapshot;
use crate::model::{Asset, Currency, Field, Mode};

/// Fiat amount carried by a fresh snapshot when the payload has none.
const DEFAULT_FIAT: f64 = 500.0;

/// Error serializing a payload to JSON. Cannot occur for this payload
/// shape; surfaced anyway so callers keep an explicit failure path.
#[derive(Debug, Error)]
#[error("failed to serialize navigation payload: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// The navigation payload, the only structure that crosses screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub selected_asset: Asset,
    /// Asset quantity, 4 fractional digits.
    pub asset_value: String,
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_currency: Option<Currency>,
    /// Fiat amount formatted with currency symbol and thousands separators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiat_value: Option<String>,
    /// Field that should regain focus, and with it primacy, on mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_field: Option<Field>,
}

impl Payload {
    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Serialize a snapshot into the transferable payload.
pub fn encode(snapshot: &Snapshot) -> Payload {
    Payload {
        selected_asset: snapshot.asset(),
        asset_value: snapshot.asset_amount().to_string(),
        mode: snapshot.mode(),
        selected_currency: Some(snapshot.currency()),
        fiat_value: Some(format_fiat(
            snapshot.fiat_amount(),
            snapshot.currency(),
            snapshot.fiat_decimals(),
        )),
        focus_field: Some(snapshot.primary()),
    }
}

/// Rebuild a snapshot from an inbound payload, substituting defaults for
/// anything missing. An absent payload yields the first-mount snapshot.
/// When only one amount travels, the other is derived from it at the
/// current rate rather than left stale.
pub fn decode(payload: Option<&Payload>) -> Snapshot {
    let Some(payload) = payload else {
        return Snapshot::default();
    };

    let currency = payload.selected_currency.unwrap_or_default();
    let primary = payload.focus_field.unwrap_or_default();

    let fiat = payload.fiat_value.as_deref().map(parse_or_zero);
    let fiat_decimals = payload
        .fiat_value
        .as_deref()
        .map(input_decimals)
        .unwrap_or(0);
    let asset_amount = if payload.asset_value.is_empty() {
        None
    } else {
        Some(parse_or_zero(&payload.asset_value))
    };

    let mut snapshot = Snapshot {
        asset: payload.selected_asset,
        currency,
        mode: payload.mode,
        primary,
        fiat_amount: fiat.unwrap_or_else(|| Amount::from_float(DEFAULT_FIAT)),
        asset_amount: asset_amount.unwrap_or_default(),
        fiat_decimals,
    };

    // Fill whichever side the payload did not carry.
    match (fiat, asset_amount) {
        (Some(_), Some(_)) => {}
        (None, Some(_)) => {
            snapshot.primary = Field::Asset;
            snapshot.recompute_secondary();
            snapshot.primary = primary;
        }
        _ => {
            snapshot.primary = Field::Fiat;
            snapshot.recompute_secondary();
            snapshot.primary = primary;
        }
    }

    snapshot
}

/// Format a fiat amount for display: currency symbol, en-US style
/// thousands grouping, `decimals` fractional digits (0..=2).
pub fn format_fiat(amount: Amount, currency: Currency, decimals: u8) -> String {
    let text = amount.format(decimals.min(2));
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (text.as_str(), None),
    };
    let grouped = group_thousands(whole);
    match frac {
        Some(frac) => format!("{}{grouped}.{frac}", currency.symbol()),
        None => format!("{}{grouped}", currency.symbol()),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
