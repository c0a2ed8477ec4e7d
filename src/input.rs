//! Assessment input records and boundary validation
//!
//! Defines the `AssessmentInput` record produced by the survey wizard,
//! plus hardcoded sample sites used by the CLI driver and benches.
//!
//! The engine is a total function over well-formed inputs; `validate()`
//! is the one gate where a malformed record is rejected, so the
//! calculation itself can never emit NaN or divide by zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection reasons for malformed input records.
///
/// The wizard enforces these ranges in the UI; the engine re-checks them
/// so a bad record coming in through any other path fails loudly instead
/// of propagating NaN through the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("roof area must be positive, got {0} sq.m")]
    NonPositiveRoofArea(f64),

    #[error("available space must not be negative, got {0} sq.m")]
    NegativeAvailableSpace(f64),

    #[error("household must have at least 1 dweller")]
    NoDwellers,

    #[error("daily water consumption must be positive, got {0} L/day")]
    NonPositiveConsumption(f64),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Roof catchment material, as captured by the survey wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofType {
    Concrete,
    Metal,
    Tile,
    Thatched,
}

/// How much upkeep the household is willing to do. Informational only;
/// carried through for the report layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceLevel {
    Low,
    Medium,
    High,
}

/// Intended primary use of harvested water. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryUse {
    Drinking,
    Domestic,
    Irrigation,
    GroundwaterRecharge,
}

/// Where the property is. Only `address` participates in region
/// resolution; coordinates and administrative fields are carried for the
/// persistence wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub pincode: String,
    pub state: String,
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Physical characteristics of the property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Catchment area (sq.m), must be > 0
    pub roof_area: f64,

    pub roof_type: RoofType,

    /// Building height (m); used by the report layer for pipe runs
    pub building_height: f64,

    /// Ground footprint available for tanks/pits (sq.m), must be >= 0
    pub available_space: f64,

    /// Number of household members, must be >= 1
    pub dwellers: u32,

    /// Household demand (liters per day), must be > 0
    pub water_consumption: f64,
}

/// Household preferences. The engine carries these through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub budget: f64,
    pub maintenance_level: MaintenanceLevel,
    pub primary_use: PrimaryUse,
}

/// One complete site description, as assembled by the survey wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub location: Location,
    pub property: Property,
    pub preferences: Preferences,
}

impl AssessmentInput {
    /// Check the ranges the calculation depends on.
    ///
    /// Rejects non-positive roof area or consumption, zero dwellers,
    /// negative space, and any non-finite numeric field.
    pub fn validate(&self) -> Result<(), InputError> {
        let p = &self.property;

        for (name, value) in [
            ("roofArea", p.roof_area),
            ("buildingHeight", p.building_height),
            ("availableSpace", p.available_space),
            ("waterConsumption", p.water_consumption),
            ("budget", self.preferences.budget),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite(name));
            }
        }

        if p.roof_area <= 0.0 {
            return Err(InputError::NonPositiveRoofArea(p.roof_area));
        }
        if p.available_space < 0.0 {
            return Err(InputError::NegativeAvailableSpace(p.available_space));
        }
        if p.dwellers < 1 {
            return Err(InputError::NoDwellers);
        }
        if p.water_consumption <= 0.0 {
            return Err(InputError::NonPositiveConsumption(p.water_consumption));
        }

        Ok(())
    }
}

// ============================================================================
// Hardcoded Sample Sites
// ============================================================================

/// Mumbai apartment block - wet basalt metro, large concrete roof.
/// High rainfall and a harvest close to annual demand.
pub fn mumbai_apartment() -> AssessmentInput {
    AssessmentInput {
        location: Location {
            address: "14 Marine Lines, Mumbai".to_string(),
            pincode: "400020".to_string(),
            state: "Maharashtra".to_string(),
            district: "Mumbai City".to_string(),
            latitude: 18.94,
            longitude: 72.82,
        },
        property: Property {
            roof_area: 120.0,
            roof_type: RoofType::Concrete,
            building_height: 9.0,
            available_space: 25.0,
            dwellers: 5,
            water_consumption: 600.0,
        },
        preferences: Preferences {
            budget: 150_000.0,
            maintenance_level: MaintenanceLevel::Medium,
            primary_use: PrimaryUse::Domestic,
        },
    }
}

/// Jaipur bungalow - arid limestone city, tile roof, modest demand.
pub fn jaipur_bungalow() -> AssessmentInput {
    AssessmentInput {
        location: Location {
            address: "C-Scheme, Jaipur".to_string(),
            pincode: "302001".to_string(),
            state: "Rajasthan".to_string(),
            district: "Jaipur".to_string(),
            latitude: 26.91,
            longitude: 75.79,
        },
        property: Property {
            roof_area: 80.0,
            roof_type: RoofType::Tile,
            building_height: 4.5,
            available_space: 15.0,
            dwellers: 4,
            water_consumption: 450.0,
        },
        preferences: Preferences {
            budget: 80_000.0,
            maintenance_level: MaintenanceLevel::Low,
            primary_use: PrimaryUse::GroundwaterRecharge,
        },
    }
}

/// Small-town house with no recognized city keyword - exercises the
/// default rainfall profile (800mm, alluvial).
pub fn smalltown_house() -> AssessmentInput {
    AssessmentInput {
        location: Location {
            address: "Ward 7, Shivpur".to_string(),
            pincode: "581301".to_string(),
            state: "Karnataka".to_string(),
            district: "Uttara Kannada".to_string(),
            latitude: 14.62,
            longitude: 74.85,
        },
        property: Property {
            roof_area: 60.0,
            roof_type: RoofType::Metal,
            building_height: 3.5,
            available_space: 8.0,
            dwellers: 3,
            water_consumption: 300.0,
        },
        preferences: Preferences {
            budget: 40_000.0,
            maintenance_level: MaintenanceLevel::Low,
            primary_use: PrimaryUse::Domestic,
        },
    }
}

/// All sample sites, in display order.
pub fn sample_sites() -> Vec<AssessmentInput> {
    vec![mumbai_apartment(), jaipur_bungalow(), smalltown_house()]
}
