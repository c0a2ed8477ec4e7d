//! Assessment Result Records
//!
//! The immutable output record handed to the report layer and the
//! persistence collaborator. Assembled once per invocation and never
//! mutated; the persistence service wraps it with its own id/user/time
//! envelope.

use serde::{Deserialize, Serialize};

use crate::dimensions::StructureDimensions;
use crate::economics::Economics;
use crate::environmental::EnvironmentalImpact;
use crate::feasibility::FeasibilityAssessment;
use crate::potential::HarvestPotential;
use crate::region::{AquiferProfile, AquiferQuality, AquiferType, RainfallStats};
use crate::structures::StructureRecommendation;

/// Seasonal rainfall breakdown for the resolved region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfallAssessment {
    /// Annual rainfall (mm)
    pub annual: f64,
    /// Monsoon-season rainfall (mm)
    pub monsoon: f64,
    /// Post-monsoon share of the annual total (mm)
    pub post_monsoon: f64,
    /// Pre-monsoon share of the annual total (mm)
    pub pre_monsoon: f64,
    pub reliability_index: f64,
}

impl RainfallAssessment {
    /// Seasonal split: the monsoon figure comes from the region table;
    /// post- and pre-monsoon are fixed 15% / 5% shares of the annual.
    pub fn from_stats(stats: &RainfallStats) -> Self {
        Self {
            annual: stats.annual,
            monsoon: stats.monsoon,
            post_monsoon: stats.annual * 0.15,
            pre_monsoon: stats.annual * 0.05,
            reliability_index: stats.reliability,
        }
    }
}

/// Aquifer characteristics at the site, with the recharge capacity this
/// catchment could feed into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquiferAssessment {
    #[serde(rename = "type")]
    pub kind: AquiferType,
    /// Depth to water table (m)
    pub depth: f64,
    pub quality: AquiferQuality,
    /// Daily recharge the formation can absorb from this harvest (L/day)
    pub recharge_capacity: f64,
    pub transmissivity: f64,
}

impl AquiferAssessment {
    pub fn from_profile(kind: AquiferType, profile: &AquiferProfile, annual_harvest: f64) -> Self {
        Self {
            kind,
            depth: profile.depth,
            quality: profile.quality,
            recharge_capacity: profile.recharge_rate * annual_harvest / 365.0,
            transmissivity: profile.transmissivity,
        }
    }
}

/// Complete assessment for one site: everything the report, charts, and
/// persistence layers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub feasibility: FeasibilityAssessment,
    pub rainfall: RainfallAssessment,
    pub potential: HarvestPotential,
    pub aquifer: AquiferAssessment,
    /// Descending by suitability; always contains the storage tank
    pub structures: Vec<StructureRecommendation>,
    pub economics: Economics,
    pub environmental: EnvironmentalImpact,
    pub dimensions: StructureDimensions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seasonal_split() {
        let stats = RainfallStats {
            annual: 2200.0,
            monsoon: 1800.0,
            reliability: 0.85,
        };
        let rainfall = RainfallAssessment::from_stats(&stats);

        assert_relative_eq!(rainfall.post_monsoon, 330.0);
        assert_relative_eq!(rainfall.pre_monsoon, 110.0);
        assert_relative_eq!(rainfall.reliability_index, 0.85);
    }

    #[test]
    fn test_recharge_capacity_is_daily() {
        let profile = AquiferProfile {
            depth: 25.0,
            quality: AquiferQuality::Excellent,
            recharge_rate: 0.6,
            transmissivity: 200.0,
        };
        let aquifer = AquiferAssessment::from_profile(AquiferType::Basalt, &profile, 73_000.0);

        // 0.6 x 73,000 / 365 = 120 L/day
        assert_relative_eq!(aquifer.recharge_capacity, 120.0);
        assert_eq!(aquifer.kind, AquiferType::Basalt);
    }
}
