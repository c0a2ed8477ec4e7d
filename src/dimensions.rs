//! Structure Sizing
//!
//! Physical dimensions for every structure kind, computed for all four
//! regardless of which were recommended: the report layer renders sizing
//! diagrams for each so the household can compare options.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::input::Property;
use crate::structures::storage_tank_capacity;

/// Cylindrical storage tank sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageTankDimensions {
    /// Liters
    pub capacity: f64,
    /// Meters
    pub diameter: f64,
    /// Meters
    pub height: f64,
    pub material: String,
}

/// Percolation pit sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargePitDimensions {
    /// Meters
    pub depth: f64,
    /// Meters
    pub diameter: f64,
    /// Top to bottom: coarse to fine, then sand
    pub filter_layers: Vec<String>,
    pub number_of_pits: u32,
}

/// Infiltration trench sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargeTrenchDimensions {
    /// Meters
    pub length: f64,
    /// Meters
    pub width: f64,
    /// Meters
    pub depth: f64,
    /// Bed gradient (percent)
    pub slope: f64,
}

/// First-flush diverter sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstFlushDiverterDimensions {
    /// Liters
    pub capacity: f64,
    /// Millimeters
    pub diameter: u32,
}

/// Sizing for all four structure kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureDimensions {
    pub storage_tank: StorageTankDimensions,
    pub recharge_pit: RechargePitDimensions,
    pub recharge_trench: RechargeTrenchDimensions,
    pub first_flush_diverter: FirstFlushDiverterDimensions,
}

/// Tanks are sized as a 2 m tall cylinder.
const TANK_HEIGHT_M: f64 = 2.0;

/// Compute dimensions for every structure kind at this site.
pub fn size_structures(property: &Property, annual_harvest: f64) -> StructureDimensions {
    let tank_capacity = storage_tank_capacity(annual_harvest, property.available_space);
    // Cylinder diameter from volume in cubic meters at fixed height
    let tank_diameter = ((tank_capacity / 1000.0) / (PI * TANK_HEIGHT_M)).sqrt();

    StructureDimensions {
        storage_tank: StorageTankDimensions {
            capacity: tank_capacity,
            diameter: tank_diameter.max(1.5),
            height: TANK_HEIGHT_M,
            material: if tank_capacity > 5000.0 {
                "RCC with polymer lining".to_string()
            } else {
                "HDPE".to_string()
            },
        },
        recharge_pit: RechargePitDimensions {
            depth: 3.0,
            diameter: (annual_harvest / 10_000.0).sqrt().max(1.0),
            filter_layers: vec![
                "Coarse aggregate (40mm)".to_string(),
                "Medium aggregate (20mm)".to_string(),
                "Fine aggregate (10mm)".to_string(),
                "Sand".to_string(),
            ],
            number_of_pits: (annual_harvest / 50_000.0).ceil() as u32,
        },
        recharge_trench: RechargeTrenchDimensions {
            length: (property.roof_area / 10.0).max(10.0),
            width: 1.0,
            depth: 1.5,
            slope: 2.0,
        },
        first_flush_diverter: FirstFlushDiverterDimensions {
            // 2mm of first-flush depth over the catchment
            capacity: property.roof_area * 2.0,
            diameter: if property.roof_area > 100.0 { 150 } else { 100 },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RoofType;
    use approx::assert_relative_eq;

    fn property(roof_area: f64, available_space: f64) -> Property {
        Property {
            roof_area,
            roof_type: RoofType::Concrete,
            building_height: 6.0,
            available_space,
            dwellers: 4,
            water_consumption: 500.0,
        }
    }

    #[test]
    fn test_tank_diameter_floor() {
        // Small tank: raw diameter sqrt(5/(2pi)) ~ 0.89 m -> floored to 1.5
        let dims = size_structures(&property(60.0, 5.0), 30_000.0);
        assert_relative_eq!(dims.storage_tank.capacity, 5000.0);
        assert_relative_eq!(dims.storage_tank.diameter, 1.5);
        assert_eq!(dims.storage_tank.material, "HDPE");
    }

    #[test]
    fn test_large_tank_dimensions() {
        // 30% of 180,000 = 54,000 L; 54 m3 at 2 m height -> d ~ 2.93 m
        let dims = size_structures(&property(150.0, 60.0), 180_000.0);
        assert_relative_eq!(dims.storage_tank.capacity, 54_000.0);
        assert_relative_eq!(dims.storage_tank.diameter, 2.9317, epsilon = 0.001);
        assert_eq!(dims.storage_tank.material, "RCC with polymer lining");
    }

    #[test]
    fn test_pit_sizing() {
        let dims = size_structures(&property(100.0, 20.0), 54_400.0);
        assert_relative_eq!(dims.recharge_pit.depth, 3.0);
        assert_relative_eq!(dims.recharge_pit.diameter, 2.3324, epsilon = 0.001);
        assert_eq!(dims.recharge_pit.number_of_pits, 2);
        assert_eq!(dims.recharge_pit.filter_layers.len(), 4);

        // Tiny harvest: diameter floored at 1.0, still one pit
        let dims = size_structures(&property(20.0, 5.0), 4000.0);
        assert_relative_eq!(dims.recharge_pit.diameter, 1.0);
        assert_eq!(dims.recharge_pit.number_of_pits, 1);
    }

    #[test]
    fn test_trench_length_floor() {
        let dims = size_structures(&property(60.0, 10.0), 30_000.0);
        assert_relative_eq!(dims.recharge_trench.length, 10.0);
        assert_relative_eq!(dims.recharge_trench.width, 1.0);
        assert_relative_eq!(dims.recharge_trench.depth, 1.5);
        assert_relative_eq!(dims.recharge_trench.slope, 2.0);

        let dims = size_structures(&property(250.0, 10.0), 30_000.0);
        assert_relative_eq!(dims.recharge_trench.length, 25.0);
    }

    #[test]
    fn test_first_flush_diverter() {
        let dims = size_structures(&property(80.0, 10.0), 30_000.0);
        assert_relative_eq!(dims.first_flush_diverter.capacity, 160.0);
        assert_eq!(dims.first_flush_diverter.diameter, 100);

        let dims = size_structures(&property(120.0, 10.0), 30_000.0);
        assert_eq!(dims.first_flush_diverter.diameter, 150);
    }
}
