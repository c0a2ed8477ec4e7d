//! Environmental Impact
//!
//! CO2, pumping-energy, and groundwater-recharge estimates derived from
//! the annual harvest, plus the community-impact sentence shown in the
//! report.

use serde::{Deserialize, Serialize};

/// Treated-supply emissions displaced per liter harvested (kg CO2).
const CO2_PER_LITER: f64 = 0.0003;

/// Pumping and treatment energy displaced per liter (kWh).
const ENERGY_PER_LITER: f64 = 0.004;

/// Share of the harvest that ends up recharging the aquifer.
const RECHARGE_SHARE: f64 = 0.7;

/// Environmental impact estimate for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    /// kg per year
    pub co2_saved: f64,
    /// kWh per year
    pub energy_saved: f64,
    /// Liters per year
    pub groundwater_recharged: f64,
    pub community_impact: String,
}

/// Derive the environmental impact estimate.
pub fn calculate_environmental(annual_harvest: f64, dwellers: u32) -> EnvironmentalImpact {
    let beneficiaries = (f64::from(dwellers) * 2.5).ceil() as u64;

    EnvironmentalImpact {
        co2_saved: annual_harvest * CO2_PER_LITER,
        energy_saved: annual_harvest * ENERGY_PER_LITER,
        groundwater_recharged: annual_harvest * RECHARGE_SHARE,
        community_impact: format!(
            "Benefiting {beneficiaries} people in the neighborhood through groundwater recharge"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_impact_factors() {
        let impact = calculate_environmental(54_400.0, 4);

        assert_relative_eq!(impact.co2_saved, 16.32);
        assert_relative_eq!(impact.energy_saved, 217.6);
        assert_relative_eq!(impact.groundwater_recharged, 38_080.0);
    }

    #[test]
    fn test_community_sentence_rounds_up() {
        // 3 dwellers x 2.5 = 7.5 -> 8 beneficiaries
        let impact = calculate_environmental(10_000.0, 3);
        assert_eq!(
            impact.community_impact,
            "Benefiting 8 people in the neighborhood through groundwater recharge"
        );

        let impact = calculate_environmental(10_000.0, 4);
        assert!(impact.community_impact.starts_with("Benefiting 10 people"));
    }
}
