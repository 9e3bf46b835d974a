//! Feature vector assembly
//!
//! Maps a raw form snapshot into the exact ordered numeric vector the
//! predictor expects. The named values use the training pipeline's feature
//! names (the encoding step ran on French column names); the final order
//! comes solely from the feature schema artifact.

use crate::artifacts::{CountryEncoding, FeatureSchema};
use crate::forecast::ForecastInputs;
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Number of features the trained model consumes
pub const FEATURE_COUNT: usize = 11;

/// Build the named feature values for one submission.
///
/// Applies the fixed season encoding and the country-frequency lookup
/// (unknown country encodes to 0.0, silently).
pub fn named_values(
    inputs: &ForecastInputs,
    encoding: &CountryEncoding,
) -> BTreeMap<&'static str, f64> {
    let mut values = BTreeMap::new();
    values.insert("saison_enc", f64::from(inputs.season.code()));
    values.insert("pays_freq", encoding.frequency(&inputs.country));
    values.insert("vols_saison_dernière", f64::from(inputs.previous_flights));
    values.insert("tarif_moyen_grille", f64::from(inputs.average_tariff));
    values.insert("prix_vente_moyen", f64::from(inputs.selling_price));
    values.insert("prix_achat_moyen", f64::from(inputs.purchase_price));
    values.insert("commission_moyenne", inputs.commission_pct);
    values.insert("montant_moyen", f64::from(inputs.amount_paid));
    values.insert("nb_passagers", f64::from(inputs.passengers));
    values.insert("aller_retour_rate", inputs.round_trip_rate);
    values.insert("stock_moyen_grille", f64::from(inputs.grid_stock));
    values
}

/// Assemble the predictor's input vector in schema order.
///
/// The reordering is explicit and total: a schema name the assembler did
/// not produce fails loudly instead of defaulting to zero, so drift
/// between the model artifact and this code surfaces immediately.
pub fn assemble(
    inputs: &ForecastInputs,
    encoding: &CountryEncoding,
    schema: &FeatureSchema,
) -> Result<Vec<f64>> {
    let values = named_values(inputs, encoding);
    schema
        .names()
        .iter()
        .map(|name| {
            values.get(name.as_str()).copied().ok_or_else(|| {
                Error::SchemaMismatch(format!(
                    "Feature '{}' is not produced by the assembler",
                    name
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Season;

    /// The schema order shipped with the trained model
    const MODEL_ORDER: [&str; FEATURE_COUNT] = [
        "saison_enc",
        "pays_freq",
        "vols_saison_dernière",
        "tarif_moyen_grille",
        "prix_vente_moyen",
        "prix_achat_moyen",
        "commission_moyenne",
        "montant_moyen",
        "nb_passagers",
        "aller_retour_rate",
        "stock_moyen_grille",
    ];

    fn spain_inputs() -> ForecastInputs {
        ForecastInputs {
            season: Season::Summer,
            country: "Spain".to_string(),
            previous_flights: 200,
            average_tariff: 2500,
            selling_price: 3000,
            purchase_price: 2500,
            commission_pct: 10.0,
            amount_paid: 2700,
            passengers: 150,
            round_trip_rate: 0.5,
            grid_stock: 200,
        }
    }

    fn encoding() -> CountryEncoding {
        serde_json::from_str(r#"{"Spain": 0.12, "France": 0.2}"#).unwrap()
    }

    #[test]
    fn test_assemble_model_order_scenario() {
        let schema = FeatureSchema::from_names(MODEL_ORDER);
        let vector = assemble(&spain_inputs(), &encoding(), &schema).unwrap();
        assert_eq!(
            vector,
            vec![2.0, 0.12, 200.0, 2500.0, 3000.0, 2500.0, 10.0, 2700.0, 150.0, 0.5, 200.0]
        );
    }

    #[test]
    fn test_assemble_follows_schema_order_not_map_order() {
        // Reversed schema must reverse the vector; the BTreeMap's own
        // iteration order must never leak through.
        let mut reversed = MODEL_ORDER;
        reversed.reverse();
        let schema = FeatureSchema::from_names(reversed);

        let vector = assemble(&spain_inputs(), &encoding(), &schema).unwrap();
        assert_eq!(
            vector,
            vec![200.0, 0.5, 150.0, 2700.0, 10.0, 2500.0, 3000.0, 2500.0, 200.0, 0.12, 2.0]
        );
    }

    #[test]
    fn test_unknown_country_encodes_to_zero() {
        let mut inputs = spain_inputs();
        inputs.country = "Atlantis".to_string();
        let schema = FeatureSchema::from_names(MODEL_ORDER);

        let vector = assemble(&inputs, &encoding(), &schema).unwrap();
        assert_eq!(vector[1], 0.0);
    }

    #[test]
    fn test_season_codes_flow_through() {
        let schema = FeatureSchema::from_names(MODEL_ORDER);
        for (season, expected) in [
            (Season::Winter, 0.0),
            (Season::Spring, 1.0),
            (Season::Summer, 2.0),
            (Season::Autumn, 3.0),
        ] {
            let mut inputs = spain_inputs();
            inputs.season = season;
            let vector = assemble(&inputs, &encoding(), &schema).unwrap();
            assert_eq!(vector[0], expected);
        }
    }

    #[test]
    fn test_schema_drift_fails_loudly() {
        let schema = FeatureSchema::from_names(["saison_enc", "pays_freq", "not_a_feature"]);
        let result = assemble(&spain_inputs(), &encoding(), &schema);
        assert!(matches!(result, Err(Error::SchemaMismatch(_))));
    }

    #[test]
    fn test_named_values_covers_all_model_features() {
        let values = named_values(&spain_inputs(), &encoding());
        assert_eq!(values.len(), FEATURE_COUNT);
        for name in MODEL_ORDER {
            assert!(values.contains_key(name), "missing {}", name);
        }
    }
}
