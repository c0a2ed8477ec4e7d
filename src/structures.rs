//! Structure Recommendations
//!
//! Proposes physical structures for a site: a storage tank is always
//! recommended; a recharge pit and a recharge trench are added when the
//! site has the footprint (space > 10 sq.m) or the catchment
//! (roof > 100 sq.m) to justify them. The final list is sorted by
//! suitability, highest first; ties keep the tank/pit/trench assignment
//! order since the sort is stable.

use serde::{Deserialize, Serialize};

use crate::input::Property;

/// Kind of physical structure the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    StorageTank,
    RechargePit,
    RechargeTrench,
}

impl StructureType {
    pub fn display_text(&self) -> &'static str {
        match self {
            StructureType::StorageTank => "Storage Tank",
            StructureType::RechargePit => "Recharge Pit",
            StructureType::RechargeTrench => "Recharge Trench",
        }
    }
}

/// One recommended structure with suitability, sizing, and cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureRecommendation {
    #[serde(rename = "type")]
    pub kind: StructureType,
    /// Assignment rank: the storage tank is always 1
    pub priority: u8,
    /// Site fit, 0-100
    pub suitability: f64,
    pub description: String,
    /// Liters
    pub capacity: f64,
    pub cost: f64,
    pub maintenance_frequency: String,
    /// Design life (years)
    pub expected_life: u32,
    pub benefits: Vec<String>,
}

/// Storage tank cost, piecewise over capacity in liters.
pub fn storage_tank_cost(capacity: f64) -> f64 {
    if capacity <= 1000.0 {
        8000.0
    } else if capacity <= 5000.0 {
        15000.0 + (capacity - 1000.0) * 3.0
    } else if capacity <= 10000.0 {
        27000.0 + (capacity - 5000.0) * 2.5
    } else {
        39500.0 + (capacity - 10000.0) * 2.0
    }
}

/// Tank capacity for a site: 30% of the annual harvest, bounded by the
/// footprint the household can give up (1000 L per sq.m of space).
pub fn storage_tank_capacity(annual_harvest: f64, available_space: f64) -> f64 {
    (annual_harvest * 0.3).min(available_space * 1000.0)
}

/// Build the ranked recommendation list for a site. Always non-empty.
pub fn recommend_structures(
    property: &Property,
    annual_harvest: f64,
) -> Vec<StructureRecommendation> {
    let mut structures = Vec::with_capacity(3);

    let tank_capacity = storage_tank_capacity(annual_harvest, property.available_space);
    structures.push(StructureRecommendation {
        kind: StructureType::StorageTank,
        priority: 1,
        suitability: (60.0 + property.available_space / 2.0).min(95.0),
        description: "Primary storage tank for collected rainwater".to_string(),
        capacity: tank_capacity,
        cost: storage_tank_cost(tank_capacity),
        maintenance_frequency: "Every 6 months".to_string(),
        expected_life: 15,
        benefits: vec![
            "Direct water supply".to_string(),
            "Reduced water bills".to_string(),
            "Emergency backup".to_string(),
        ],
    });

    if property.available_space > 10.0 {
        structures.push(StructureRecommendation {
            kind: StructureType::RechargePit,
            priority: 2,
            suitability: (50.0 + annual_harvest / 10_000.0).min(90.0),
            description: "Groundwater recharge through percolation pit".to_string(),
            capacity: annual_harvest * 0.7,
            cost: 15000.0 + (annual_harvest / 1000.0) * 500.0,
            maintenance_frequency: "Annual cleaning".to_string(),
            expected_life: 20,
            benefits: vec![
                "Groundwater recharge".to_string(),
                "Aquifer replenishment".to_string(),
                "Community benefit".to_string(),
            ],
        });
    }

    if property.roof_area > 100.0 {
        structures.push(StructureRecommendation {
            kind: StructureType::RechargeTrench,
            priority: 3,
            suitability: (40.0 + property.roof_area / 10.0).min(85.0),
            description: "Linear recharge system for continuous infiltration".to_string(),
            capacity: annual_harvest * 0.5,
            cost: 25000.0 + property.roof_area * 50.0,
            maintenance_frequency: "Bi-annual".to_string(),
            expected_life: 25,
            benefits: vec![
                "Large volume recharge".to_string(),
                "Soil moisture improvement".to_string(),
                "Erosion control".to_string(),
            ],
        });
    }

    // Vec::sort_by is stable, so equal suitabilities keep assignment order
    structures.sort_by(|a, b| {
        b.suitability
            .partial_cmp(&a.suitability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    structures
}
