//! Feasibility Scoring
//!
//! Additive four-criterion rubric, maximum 100 points. Criteria are
//! evaluated in a fixed order (rainfall, roof area, storage space,
//! harvest-to-demand ratio) and each contributes exactly one
//! human-readable reason string, so the report layer always shows four
//! lines in the same order.

use serde::{Deserialize, Serialize};

use crate::input::Property;

/// Classification of the total rubric score.
///
/// Thresholds are inclusive lower bounds; a boundary score maps to the
/// higher category (65 is `Good`, not `Fair`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityCategory {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl FeasibilityCategory {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            FeasibilityCategory::Excellent
        } else if score >= 65 {
            FeasibilityCategory::Good
        } else if score >= 45 {
            FeasibilityCategory::Fair
        } else {
            FeasibilityCategory::Poor
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            FeasibilityCategory::Excellent => "Excellent",
            FeasibilityCategory::Good => "Good",
            FeasibilityCategory::Fair => "Fair",
            FeasibilityCategory::Poor => "Poor",
        }
    }
}

/// Rubric outcome: total score, its classification, and one reason per
/// criterion in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityAssessment {
    pub score: u8,
    pub category: FeasibilityCategory,
    pub reasons: Vec<String>,
}

/// Score a site against the rubric.
///
/// Criterion weights: rainfall 30, roof area 25, storage space 20,
/// harvest-to-demand ratio 25.
pub fn score_feasibility(
    property: &Property,
    annual_rainfall: f64,
    annual_harvest: f64,
) -> FeasibilityAssessment {
    let mut score = 0u8;
    let mut reasons = Vec::with_capacity(4);

    // Rainfall adequacy (30 points)
    if annual_rainfall > 1000.0 {
        score += 30;
        reasons.push("Excellent rainfall (>1000mm annually)".to_string());
    } else if annual_rainfall > 600.0 {
        score += 20;
        reasons.push("Good rainfall (600-1000mm annually)".to_string());
    } else {
        score += 10;
        reasons.push("Moderate rainfall (<600mm annually)".to_string());
    }

    // Roof area adequacy (25 points)
    if property.roof_area > 100.0 {
        score += 25;
        reasons.push("Large roof area (>100 sq.m)".to_string());
    } else if property.roof_area > 50.0 {
        score += 18;
        reasons.push("Medium roof area (50-100 sq.m)".to_string());
    } else {
        score += 10;
        reasons.push("Small roof area (<50 sq.m)".to_string());
    }

    // Storage space (20 points)
    if property.available_space > 20.0 {
        score += 20;
        reasons.push("Adequate space for storage systems".to_string());
    } else if property.available_space > 10.0 {
        score += 12;
        reasons.push("Limited but workable space".to_string());
    } else {
        score += 5;
        reasons.push("Very limited space for storage".to_string());
    }

    // Harvest vs annual demand (25 points)
    let annual_demand = property.water_consumption * 365.0;
    let harvest_ratio = annual_harvest / annual_demand;
    if harvest_ratio > 0.8 {
        score += 25;
        reasons.push("Harvest can meet 80%+ of water needs".to_string());
    } else if harvest_ratio > 0.4 {
        score += 18;
        reasons.push("Harvest can meet 40-80% of water needs".to_string());
    } else {
        score += 10;
        reasons.push("Harvest can supplement water needs".to_string());
    }

    FeasibilityAssessment {
        score,
        category: FeasibilityCategory::from_score(score),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Property, RoofType};

    fn property(roof_area: f64, available_space: f64, water_consumption: f64) -> Property {
        Property {
            roof_area,
            roof_type: RoofType::Concrete,
            building_height: 6.0,
            available_space,
            dwellers: 4,
            water_consumption,
        }
    }

    #[test]
    fn test_best_case_scores_100() {
        // 2200mm, big roof, ample space, harvest above demand
        let p = property(120.0, 25.0, 600.0);
        let result = score_feasibility(&p, 2200.0, 200_000.0);

        assert_eq!(result.score, 100);
        assert_eq!(result.category, FeasibilityCategory::Excellent);
        assert_eq!(result.reasons.len(), 4);
    }

    #[test]
    fn test_worst_case_scores_35() {
        let p = property(40.0, 5.0, 1000.0);
        let result = score_feasibility(&p, 500.0, 10_000.0);

        assert_eq!(result.score, 10 + 10 + 5 + 10);
        assert_eq!(result.category, FeasibilityCategory::Poor);
    }

    #[test]
    fn test_reasons_follow_criterion_order() {
        let p = property(60.0, 12.0, 500.0);
        let result = score_feasibility(&p, 800.0, 100_000.0);

        assert_eq!(result.reasons[0], "Good rainfall (600-1000mm annually)");
        assert_eq!(result.reasons[1], "Medium roof area (50-100 sq.m)");
        assert_eq!(result.reasons[2], "Limited but workable space");
        assert_eq!(result.reasons[3], "Harvest can meet 40-80% of water needs");
    }

    #[test]
    fn test_thresholds_are_strict_lower_bounds() {
        // Exactly 1000mm is NOT >1000 -> falls into the 600-1000 band
        let p = property(60.0, 12.0, 500.0);
        let at_1000 = score_feasibility(&p, 1000.0, 100_000.0);
        assert_eq!(at_1000.reasons[0], "Good rainfall (600-1000mm annually)");

        // Exactly 100 sq.m is NOT >100 -> medium band
        let p = property(100.0, 12.0, 500.0);
        let result = score_feasibility(&p, 800.0, 100_000.0);
        assert_eq!(result.reasons[1], "Medium roof area (50-100 sq.m)");
    }

    #[test]
    fn test_category_boundaries_map_up() {
        assert_eq!(FeasibilityCategory::from_score(80), FeasibilityCategory::Excellent);
        assert_eq!(FeasibilityCategory::from_score(79), FeasibilityCategory::Good);
        assert_eq!(FeasibilityCategory::from_score(65), FeasibilityCategory::Good);
        assert_eq!(FeasibilityCategory::from_score(64), FeasibilityCategory::Fair);
        assert_eq!(FeasibilityCategory::from_score(45), FeasibilityCategory::Fair);
        assert_eq!(FeasibilityCategory::from_score(44), FeasibilityCategory::Poor);
        assert_eq!(FeasibilityCategory::from_score(0), FeasibilityCategory::Poor);
    }
}
