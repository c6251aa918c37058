//! Dual-field conversion engine.
//!
//! The engine owns the linked fiat-amount and asset-quantity fields and
//! keeps them mutually consistent across edits, buy/sell switches, asset
//! and currency switches, and rehydration from a navigation payload.
//! Also supports an async stream of events.

use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info};

use crate::Amount;
use crate::amount::input_decimals;
use crate::fees::{self, FeeBreakdown};
use crate::model::{Asset, Currency, Event, Field, Mode};

mod snapshot;
pub use snapshot::Snapshot;

/// The conversion engine.
///
/// One instance per screen; cross-screen state travels only through the
/// session codec, never through a shared engine.
pub struct Engine {
    snapshot: Snapshot,
}

/// Public API
impl Engine {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::default(),
        }
    }

    /// Re-initialize from a decoded navigation payload. This is the only
    /// path that can change the primary field without a user edit.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Run the engine over a stream of events. Each event runs to
    /// completion before the next is taken, in arrival order.
    pub async fn run(&mut self, mut stream: impl Stream<Item = Event> + Unpin) {
        while let Some(event) = stream.next().await {
            self.apply(event);
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Fee breakdown for the current state, over the fiat notional.
    pub fn quote(&self) -> FeeBreakdown {
        fees::fees(self.snapshot.notional(), self.snapshot.mode)
    }

    /// Apply a single event on top of the current state.
    ///
    /// Infallible: malformed numeric input is normalized to zero rather
    /// than rejected, so every event leaves the snapshot consistent.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::EditFiat { raw } => self.apply_edit(Field::Fiat, &raw),
            Event::EditAsset { raw } => self.apply_edit(Field::Asset, &raw),
            Event::SwitchMode(mode) => self.apply_switch_mode(mode),
            Event::SwitchAsset(asset) => self.apply_switch_asset(asset),
            Event::SwitchCurrency(currency) => self.apply_switch_currency(currency),
        }
    }
}

/// Private API
impl Engine {
    /// Small helper to log the state an event left behind
    fn log_applied(&self, kind: &str) {
        let s = &self.snapshot;
        info!(
            asset = %s.asset,
            currency = %s.currency,
            mode = %s.mode,
            primary = %s.primary,
            fiat = %s.fiat_amount,
            quantity = %s.asset_amount,
            "{kind} applied"
        );
    }

    /// Apply an edit of either field:
    /// - Normalize the raw text (malformed input becomes zero)
    /// - The edited field becomes primary and takes the typed value
    /// - The other field is re-derived at the current effective rate
    fn apply_edit(&mut self, field: Field, raw: &str) {
        let value = match Amount::parse(raw) {
            Ok(value) => value,
            Err(err) => {
                debug!(field = %field, %err, "input normalized to zero");
                Amount::default()
            }
        };

        self.snapshot.primary = field;
        match field {
            Field::Fiat => {
                self.snapshot.fiat_amount = value;
                self.snapshot.fiat_decimals = input_decimals(raw);
            }
            Field::Asset => self.snapshot.asset_amount = value,
        }
        self.snapshot.recompute_secondary();
        self.log_applied("edit");
    }

    /// Apply a buy/sell switch. Which slot renders on top is presentation;
    /// the primary field stays primary and the secondary is re-derived
    /// from its raw numeric value.
    fn apply_switch_mode(&mut self, mode: Mode) {
        self.snapshot.mode = mode;
        self.snapshot.recompute_secondary();
        self.log_applied("mode switch");
    }

    /// Apply an asset switch: the primary field keeps its value, the
    /// secondary is re-derived at the new rate.
    fn apply_switch_asset(&mut self, asset: Asset) {
        self.snapshot.asset = asset;
        self.snapshot.recompute_secondary();
        self.log_applied("asset switch");
    }

    /// Apply a currency switch: the primary field keeps its value, the
    /// secondary is re-derived at the new rate. Symbol reformatting is
    /// the codec's concern.
    fn apply_switch_currency(&mut self, currency: Currency) {
        self.snapshot.currency = currency;
        self.snapshot.recompute_secondary();
        self.log_applied("currency switch");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
