//! Assessment Engine - coordinator for the calculation pipeline
//!
//! Runs the fixed pipeline over one validated input record: region and
//! runoff resolution feed harvest potential, which feeds scoring,
//! recommendations, sizing, economics, and environmental impact. The
//! whole pass is pure arithmetic over fixed tables; two calls with the
//! same input produce identical results.

use rayon::prelude::*;

use crate::assessment::{AquiferAssessment, AssessmentResult, RainfallAssessment};
use crate::dimensions::size_structures;
use crate::economics::calculate_economics;
use crate::environmental::calculate_environmental;
use crate::feasibility::score_feasibility;
use crate::input::{AssessmentInput, InputError};
use crate::potential::calculate_potential;
use crate::region::{RegionDataProvider, StaticRegionProvider};
use crate::runoff::runoff_coefficient;
use crate::structures::recommend_structures;

/// The assessment engine. Stateless apart from the injected region data
/// provider, so one instance can serve concurrent callers.
pub struct AssessmentEngine {
    provider: Box<dyn RegionDataProvider>,
}

impl AssessmentEngine {
    /// Engine over the embedded region tables.
    pub fn new() -> Self {
        Self::with_provider(Box::new(StaticRegionProvider::new()))
    }

    /// Engine over a custom region data source (real climate or
    /// hydrogeology data instead of the embedded tables).
    pub fn with_provider(provider: Box<dyn RegionDataProvider>) -> Self {
        Self { provider }
    }

    /// Assess one site.
    ///
    /// Validates the input, then derives the full result record. The
    /// only error path is a malformed input; every lookup inside the
    /// pipeline resolves through documented defaults instead of failing.
    pub fn assess(&self, input: &AssessmentInput) -> Result<AssessmentResult, InputError> {
        input.validate()?;

        let region = self.provider.resolve(&input.location.address);
        let coefficient = runoff_coefficient(input.property.roof_type);
        let potential = calculate_potential(
            input.property.roof_area,
            &region.rainfall,
            coefficient,
            input.property.water_consumption,
        );

        let feasibility = score_feasibility(
            &input.property,
            region.rainfall.annual,
            potential.annual_harvest,
        );
        let structures = recommend_structures(&input.property, potential.annual_harvest);
        let economics =
            calculate_economics(&input.property, &structures, potential.annual_harvest);
        let environmental =
            calculate_environmental(potential.annual_harvest, input.property.dwellers);
        let dimensions = size_structures(&input.property, potential.annual_harvest);

        Ok(AssessmentResult {
            feasibility,
            rainfall: RainfallAssessment::from_stats(&region.rainfall),
            aquifer: AquiferAssessment::from_profile(
                region.aquifer_type,
                &region.aquifer,
                potential.annual_harvest,
            ),
            potential,
            structures,
            economics,
            environmental,
            dimensions,
        })
    }

    /// Assess many sites in parallel. Result order matches input order;
    /// a malformed record yields an `Err` in its slot without affecting
    /// the others.
    pub fn assess_batch(
        &self,
        inputs: &[AssessmentInput],
    ) -> Vec<Result<AssessmentResult, InputError>> {
        inputs.par_iter().map(|input| self.assess(input)).collect()
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{jaipur_bungalow, mumbai_apartment, sample_sites, smalltown_house};
    use crate::structures::StructureType;
    use approx::assert_relative_eq;

    #[test]
    fn test_pipeline_assembles_consistent_record() {
        let engine = AssessmentEngine::new();
        let result = engine.assess(&mumbai_apartment()).unwrap();

        // 120 x 2200 x 0.85 x 0.8
        assert_relative_eq!(result.potential.annual_harvest, 179_520.0);
        assert_relative_eq!(result.rainfall.annual, 2200.0);
        // Tank sizing and the tank recommendation agree on capacity
        let tank = result
            .structures
            .iter()
            .find(|s| s.kind == StructureType::StorageTank)
            .unwrap();
        assert_relative_eq!(tank.capacity, result.dimensions.storage_tank.capacity);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let engine = AssessmentEngine::new();
        let mut input = smalltown_house();
        input.property.water_consumption = -10.0;

        assert!(engine.assess(&input).is_err());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let engine = AssessmentEngine::new();
        let sites = sample_sites();
        let batch = engine.assess_batch(&sites);

        assert_eq!(batch.len(), sites.len());
        for (input, batched) in sites.iter().zip(&batch) {
            let sequential = engine.assess(input).unwrap();
            assert_eq!(batched.as_ref().unwrap(), &sequential);
        }
    }

    #[test]
    fn test_batch_isolates_bad_records() {
        let engine = AssessmentEngine::new();
        let mut bad = jaipur_bungalow();
        bad.property.roof_area = 0.0;
        let inputs = vec![mumbai_apartment(), bad, smalltown_house()];

        let results = engine.assess_batch(&inputs);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
