//! CSV export of the prediction history

use crate::history::PredictionRecord;
use crate::{Error, Result};

/// Column order: record fields in declaration order, then the raw-input
/// snapshot's fields in declaration order. Stable across releases because
/// downstream spreadsheets key on it.
pub const CSV_HEADER: [&str; 15] = [
    "timestamp",
    "prediction",
    "country",
    "season",
    "input_season",
    "input_country",
    "previous_flights",
    "average_tariff",
    "selling_price",
    "purchase_price",
    "commission_pct",
    "amount_paid",
    "passengers",
    "round_trip_rate",
    "grid_stock",
];

/// Serialize the full history to CSV.
///
/// Numeric predictions are written with Rust's shortest-round-trip float
/// formatting, so re-parsing the file reproduces the in-memory values
/// exactly.
pub fn history_to_csv(records: &[PredictionRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for record in records {
        let inputs = &record.inputs;
        let row = [
            record.timestamp.clone(),
            record.prediction.to_string(),
            record.country.clone(),
            record.season.label().to_string(),
            inputs.season.label().to_string(),
            inputs.country.clone(),
            inputs.previous_flights.to_string(),
            inputs.average_tariff.to_string(),
            inputs.selling_price.to_string(),
            inputs.purchase_price.to_string(),
            inputs.commission_pct.to_string(),
            inputs.amount_paid.to_string(),
            inputs.passengers.to_string(),
            inputs.round_trip_rate.to_string(),
            inputs.grid_stock.to_string(),
        ];
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
