//! Raw form inputs for one forecast submission

use crate::forecast::Season;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound for the euro-amount and stock fields
pub const AMOUNT_MAX: u32 = 10_000;
/// Upper bound for the flight and passenger count fields
pub const COUNT_MAX: u32 = 1_000;
/// Upper bound for the commission percentage
pub const COMMISSION_MAX: f64 = 100.0;

/// One complete snapshot of the dashboard form.
///
/// Field declaration order is the stable CSV column order for the
/// raw-input portion of an exported history row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInputs {
    /// Travel season
    pub season: Season,
    /// Destination country (free string; unknown names encode to 0.0)
    pub country: String,
    /// Flights operated on this route last season
    pub previous_flights: u32,
    /// Average grid tariff per person (EUR)
    pub average_tariff: u32,
    /// Average selling price (EUR)
    pub selling_price: u32,
    /// Average purchase price (EUR)
    pub purchase_price: u32,
    /// Average commission (percent)
    pub commission_pct: f64,
    /// Average amount paid (EUR)
    pub amount_paid: u32,
    /// Passenger count
    pub passengers: u32,
    /// Share of round-trip bookings, 0.0 to 1.0
    pub round_trip_rate: f64,
    /// Average available stock on the grid
    pub grid_stock: u32,
}

impl ForecastInputs {
    /// Validate every field against its form bound.
    ///
    /// The whole submission is rejected on the first violation; there is
    /// no partial acceptance. The country is deliberately NOT checked
    /// against the encoding table (unknown names fall back to 0.0).
    pub fn validate(&self) -> Result<()> {
        if self.country.trim().is_empty() {
            return Err(Error::InvalidInput("Destination country is empty".to_string()));
        }
        check_count("previous_flights", self.previous_flights)?;
        check_amount("average_tariff", self.average_tariff)?;
        check_amount("selling_price", self.selling_price)?;
        check_amount("purchase_price", self.purchase_price)?;
        if !self.commission_pct.is_finite()
            || !(0.0..=COMMISSION_MAX).contains(&self.commission_pct)
        {
            return Err(Error::InvalidInput(format!(
                "commission_pct must be within [0, {}], got {}",
                COMMISSION_MAX, self.commission_pct
            )));
        }
        check_amount("amount_paid", self.amount_paid)?;
        check_count("passengers", self.passengers)?;
        if !self.round_trip_rate.is_finite() || !(0.0..=1.0).contains(&self.round_trip_rate) {
            return Err(Error::InvalidInput(format!(
                "round_trip_rate must be within [0, 1], got {}",
                self.round_trip_rate
            )));
        }
        check_amount("grid_stock", self.grid_stock)?;
        Ok(())
    }
}

fn check_amount(field: &str, value: u32) -> Result<()> {
    if value > AMOUNT_MAX {
        return Err(Error::InvalidInput(format!(
            "{} must be within [0, {}], got {}",
            field, AMOUNT_MAX, value
        )));
    }
    Ok(())
}

fn check_count(field: &str, value: u32) -> Result<()> {
    if value > COUNT_MAX {
        return Err(Error::InvalidInput(format!(
            "{} must be within [0, {}], got {}",
            field, COUNT_MAX, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn valid_inputs() -> ForecastInputs {
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

    #[test]
    fn test_valid_inputs_pass() {
        assert!(valid_inputs().validate().is_ok());
    }

    #[test]
    fn test_bound_extremes_pass() {
        let mut inputs = valid_inputs();
        inputs.previous_flights = COUNT_MAX;
        inputs.average_tariff = AMOUNT_MAX;
        inputs.commission_pct = COMMISSION_MAX;
        inputs.round_trip_rate = 1.0;
        inputs.passengers = 0;
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_empty_country_rejected() {
        let mut inputs = valid_inputs();
        inputs.country = "  ".to_string();
        assert!(matches!(inputs.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_count_above_bound_rejected() {
        let mut inputs = valid_inputs();
        inputs.passengers = COUNT_MAX + 1;
        assert!(matches!(inputs.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_amount_above_bound_rejected() {
        let mut inputs = valid_inputs();
        inputs.grid_stock = AMOUNT_MAX + 1;
        assert!(matches!(inputs.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_commission_above_bound_rejected() {
        let mut inputs = valid_inputs();
        inputs.commission_pct = 100.5;
        assert!(matches!(inputs.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let mut inputs = valid_inputs();
        inputs.round_trip_rate = 1.05;
        assert!(matches!(inputs.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_nan_rate_rejected() {
        let mut inputs = valid_inputs();
        inputs.round_trip_rate = f64::NAN;
        assert!(matches!(inputs.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_country_is_not_an_input_error() {
        let mut inputs = valid_inputs();
        inputs.country = "Atlantis".to_string();
        assert!(inputs.validate().is_ok());
    }
}
