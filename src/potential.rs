//! Harvest Potential
//!
//! Derives annual, daily-average, and peak-month harvest volumes from
//! roof area, rainfall, and the runoff coefficient, plus how many days of
//! stored supply the harvest represents against household demand.

use serde::{Deserialize, Serialize};

use crate::region::RainfallStats;

/// Fraction of gross runoff that survives first-flush diversion and
/// conveyance losses.
const COLLECTION_EFFICIENCY: f64 = 0.8;

/// The single wettest month carries roughly this share of the annual
/// total in monsoon climates.
const PEAK_MONTH_SHARE: f64 = 0.4;

/// Harvest volumes derived for one site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestPotential {
    /// Collectible volume per year (liters)
    pub annual_harvest: f64,
    /// Annual volume spread over 365 days (liters)
    pub daily_average: f64,
    /// Expected volume in the wettest month (liters)
    pub peak_month_harvest: f64,
    /// Whole 30-day months of demand the annual harvest could cover (days)
    pub dry_month_supply: u32,
    /// Coefficient used for the derivation
    pub runoff_coefficient: f64,
}

/// Derive harvest potential.
///
/// `water_consumption` must be positive; input validation guarantees this
/// before the engine runs.
pub fn calculate_potential(
    roof_area: f64,
    rainfall: &RainfallStats,
    runoff_coefficient: f64,
    water_consumption: f64,
) -> HarvestPotential {
    let annual_harvest =
        roof_area * rainfall.annual * runoff_coefficient * COLLECTION_EFFICIENCY;

    HarvestPotential {
        annual_harvest,
        daily_average: annual_harvest / 365.0,
        peak_month_harvest: annual_harvest * PEAK_MONTH_SHARE,
        dry_month_supply: (annual_harvest / (water_consumption * 30.0)).floor() as u32,
        runoff_coefficient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_rainfall() -> RainfallStats {
        RainfallStats {
            annual: 800.0,
            monsoon: 600.0,
            reliability: 0.75,
        }
    }

    #[test]
    fn test_reference_site() {
        // 100 sq.m concrete roof on the default profile:
        // 100 x 800 x 0.85 x 0.8 = 54,400 L/yr
        let potential = calculate_potential(100.0, &default_rainfall(), 0.85, 500.0);

        assert_relative_eq!(potential.annual_harvest, 54_400.0);
        assert_relative_eq!(potential.daily_average, 149.0411, epsilon = 0.001);
        assert_relative_eq!(potential.peak_month_harvest, 21_760.0);
        assert_relative_eq!(potential.runoff_coefficient, 0.85);
    }

    #[test]
    fn test_dry_month_supply_floors() {
        // 54,400 / (500 x 30) = 3.63 -> 3 whole months of days
        let potential = calculate_potential(100.0, &default_rainfall(), 0.85, 500.0);
        assert_eq!(potential.dry_month_supply, 3);

        // Demand so high the harvest covers less than one month
        let potential = calculate_potential(10.0, &default_rainfall(), 0.60, 400.0);
        assert_eq!(potential.dry_month_supply, 0);
    }
}
