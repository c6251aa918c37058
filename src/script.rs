use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::Snapshot;
use crate::fees::FeeBreakdown;
use crate::model::Event;
use crate::session::format_fiat;

/// Errors that can occur when parsing event script rows
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized event '{event}'")]
    UnrecognizedEvent { line: usize, event: String },

    #[error("line {line}: {event} missing value")]
    MissingValue { line: usize, event: String },

    #[error("line {line}: {event} has invalid value '{value}'")]
    InvalidValue {
        line: usize,
        event: String,
        value: String,
    },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    event: String,
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    asset: String,
    currency: String,
    mode: String,
    fiat: String,
    asset_amount: String,
    processing_fee: String,
    network_fee: String,
    total_fee: String,
}

/// Read user events from a csv script file
pub fn read_events(path: impl AsRef<Path>) -> impl Iterator<Item = Result<Event, ScriptError>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .expect("failed to open csv file");

    reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| ScriptError::Parse { line, source })?;
            let event = row.event;
            match event.as_str() {
                // Edits take the raw text as typed; an empty cell is a
                // legitimate cleared field, not an error.
                "edit_fiat" => Ok(Event::EditFiat {
                    raw: row.value.unwrap_or_default(),
                }),
                "edit_asset" => Ok(Event::EditAsset {
                    raw: row.value.unwrap_or_default(),
                }),
                "switch_mode" => {
                    let value = row.value.ok_or_else(|| ScriptError::MissingValue {
                        line,
                        event: event.clone(),
                    })?;
                    value.parse().map(Event::SwitchMode).map_err(|_| {
                        ScriptError::InvalidValue {
                            line,
                            event: event.clone(),
                            value,
                        }
                    })
                }
                "switch_asset" => {
                    let value = row.value.ok_or_else(|| ScriptError::MissingValue {
                        line,
                        event: event.clone(),
                    })?;
                    value.parse().map(Event::SwitchAsset).map_err(|_| {
                        ScriptError::InvalidValue {
                            line,
                            event: event.clone(),
                            value,
                        }
                    })
                }
                "switch_currency" => {
                    let value = row.value.ok_or_else(|| ScriptError::MissingValue {
                        line,
                        event: event.clone(),
                    })?;
                    value.parse().map(Event::SwitchCurrency).map_err(|_| {
                        ScriptError::InvalidValue {
                            line,
                            event: event.clone(),
                            value,
                        }
                    })
                }
                _ => Err(ScriptError::UnrecognizedEvent {
                    line,
                    event: event.clone(),
                }),
            }
        })
}

/// Write the final snapshot and fee breakdown to stdout in csv format
pub fn write_quote(snapshot: &Snapshot, fees: &FeeBreakdown) {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    let row = OutputRow {
        asset: snapshot.asset().to_string(),
        currency: snapshot.currency().to_string(),
        mode: snapshot.mode().to_string(),
        fiat: format_fiat(
            snapshot.fiat_amount(),
            snapshot.currency(),
            snapshot.fiat_decimals(),
        ),
        asset_amount: snapshot.asset_amount().to_string(),
        processing_fee: fees.processing.format(2),
        network_fee: fees.network.format(2),
        total_fee: fees.total.format(2),
    };
    writer.serialize(&row).expect("failed to write csv row");

    writer.flush().expect("failed to flush csv writer");
}
