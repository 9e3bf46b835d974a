//! Form metadata endpoint
//!
//! The page builds its controls from this payload so the browser form and
//! the server-side validation always agree on field domains.

use axum::{extract::State, Json};
use flightcast_common::forecast::inputs::{AMOUNT_MAX, COMMISSION_MAX, COUNT_MAX};
use flightcast_common::forecast::Season;
use serde::Serialize;

use crate::AppState;

/// Bounded numeric field description
#[derive(Debug, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Form metadata response
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub seasons: Vec<&'static str>,
    pub countries: Vec<String>,
    pub fields: Vec<FieldSpec>,
}

/// GET /api/meta
///
/// Seasons, sorted destination countries, and numeric field domains.
pub async fn get_meta(State(state): State<AppState>) -> Json<MetaResponse> {
    let countries = state
        .artifacts
        .encoding
        .countries()
        .map(str::to_string)
        .collect();

    Json(MetaResponse {
        seasons: Season::ALL.iter().map(|s| s.label()).collect(),
        countries,
        fields: field_specs(),
    })
}

fn field_specs() -> Vec<FieldSpec> {
    let amount_max = f64::from(AMOUNT_MAX);
    let count_max = f64::from(COUNT_MAX);
    vec![
        FieldSpec {
            name: "previous_flights",
            label: "Previous season flights",
            min: 0.0,
            max: count_max,
            step: 1.0,
            default: 100.0,
        },
        FieldSpec {
            name: "average_tariff",
            label: "Average price per person (€)",
            min: 0.0,
            max: amount_max,
            step: 1.0,
            default: 2500.0,
        },
        FieldSpec {
            name: "selling_price",
            label: "Average selling price (€)",
            min: 0.0,
            max: amount_max,
            step: 1.0,
            default: 3000.0,
        },
        FieldSpec {
            name: "purchase_price",
            label: "Average purchase price (€)",
            min: 0.0,
            max: amount_max,
            step: 1.0,
            default: 2500.0,
        },
        FieldSpec {
            name: "commission_pct",
            label: "Average commission (%)",
            min: 0.0,
            max: COMMISSION_MAX,
            step: 0.5,
            default: 10.0,
        },
        FieldSpec {
            name: "amount_paid",
            label: "Average amount paid (€)",
            min: 0.0,
            max: amount_max,
            step: 1.0,
            default: 2700.0,
        },
        FieldSpec {
            name: "passengers",
            label: "Number of passengers",
            min: 0.0,
            max: count_max,
            step: 1.0,
            default: 150.0,
        },
        FieldSpec {
            name: "round_trip_rate",
            label: "Round-trip rate",
            min: 0.0,
            max: 1.0,
            step: 0.05,
            default: 0.5,
        },
        FieldSpec {
            name: "grid_stock",
            label: "Average available stock",
            min: 0.0,
            max: amount_max,
            step: 1.0,
            default: 200.0,
        },
    ]
}
