//! Economics
//!
//! Aggregates structure costs, applies the two standing subsidy schemes,
//! and derives annual savings, payback period, and ROI.
//!
//! Degenerate case: when annual savings do not exceed annual maintenance,
//! payback and ROI are reported as `None` ("not recoverable") instead of
//! a negative or unbounded division result.

use serde::{Deserialize, Serialize};

use crate::input::Property;
use crate::structures::StructureRecommendation;

/// Fixed allowance for pipes, filters, and installation labour on top of
/// the structure costs.
const FITTINGS_ALLOWANCE: f64 = 10_000.0;

/// Billing offset per liter of municipal supply displaced.
const UNIT_SAVINGS_RATE: f64 = 0.05;

/// Annual upkeep as a fraction of the installed cost.
const MAINTENANCE_RATE: f64 = 0.03;

/// Harvest beyond this share of annual demand has no billing offset.
const DEMAND_OFFSET_CAP: f64 = 0.8;

/// One subsidy scheme the household can apply for. Eligibility text is
/// informational; the engine does not evaluate it against the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsidyInfo {
    pub scheme: String,
    pub authority: String,
    pub amount: f64,
    pub eligibility: Vec<String>,
    pub application_process: String,
}

/// Financial model for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Economics {
    pub total_cost: f64,
    pub annual_savings: f64,
    /// Years to recoup `total_cost`; `None` when net annual benefit is
    /// zero or negative (not recoverable)
    pub payback_period: Option<f64>,
    /// Net annual benefit as % of total cost; `None` in the same
    /// degenerate case as `payback_period`
    pub roi: Option<f64>,
    /// Annual upkeep
    pub maintenance_cost: f64,
    pub subsidies: Vec<SubsidyInfo>,
}

/// Build the financial model from the recommended structures.
pub fn calculate_economics(
    property: &Property,
    structures: &[StructureRecommendation],
    annual_harvest: f64,
) -> Economics {
    let total_cost: f64 =
        structures.iter().map(|s| s.cost).sum::<f64>() + FITTINGS_ALLOWANCE;

    let annual_demand = property.water_consumption * 365.0;
    let water_saved = annual_harvest.min(annual_demand * DEMAND_OFFSET_CAP);
    let annual_savings = water_saved * UNIT_SAVINGS_RATE;
    let maintenance_cost = total_cost * MAINTENANCE_RATE;

    let net_benefit = annual_savings - maintenance_cost;
    let (payback_period, roi) = if net_benefit > 0.0 {
        (
            Some(total_cost / net_benefit),
            Some(net_benefit / total_cost * 100.0),
        )
    } else {
        (None, None)
    };

    Economics {
        total_cost,
        annual_savings,
        payback_period,
        roi,
        maintenance_cost,
        subsidies: subsidy_schemes(total_cost),
    }
}

/// The two standing subsidy schemes, with amounts capped per scheme.
fn subsidy_schemes(total_cost: f64) -> Vec<SubsidyInfo> {
    vec![
        SubsidyInfo {
            scheme: "Pradhan Mantri Krishi Sinchayee Yojana".to_string(),
            authority: "Ministry of Agriculture".to_string(),
            amount: (total_cost * 0.5).min(50_000.0),
            eligibility: vec![
                "Rural areas".to_string(),
                "Farmers".to_string(),
                "Water stressed regions".to_string(),
            ],
            application_process: "Apply through state agriculture department".to_string(),
        },
        SubsidyInfo {
            scheme: "State Rainwater Harvesting Subsidy".to_string(),
            authority: "State Water Resource Department".to_string(),
            amount: (total_cost * 0.3).min(25_000.0),
            eligibility: vec![
                "Urban households".to_string(),
                "Below 300 sq.m plot".to_string(),
            ],
            application_process: "Online application through state portal".to_string(),
        },
    ]
}
