//! Rooftop Rainwater Harvesting (RTRWH) Assessment Engine
//!
//! Deterministic feasibility assessment for household rainwater harvesting.
//! One validated site description goes in; one immutable result record
//! comes out, covering feasibility, harvest potential, structure
//! recommendations with physical sizing, economics, and environmental
//! impact.
//!
//! Module layout follows the calculation pipeline:
//! - `region`: address -> rainfall/aquifer profile resolution
//! - `runoff`: roof material -> runoff coefficient
//! - `potential`: harvest volume derivation
//! - `feasibility`: 0-100 rubric scoring
//! - `structures`: ranked structure recommendations
//! - `dimensions`: physical sizing for all structure kinds
//! - `economics`: costs, subsidies, payback, ROI
//! - `environmental`: CO2/energy/recharge estimates
//! - `engine`: the coordinator tying the steps together

pub mod assessment;
pub mod dimensions;
pub mod economics;
pub mod engine;
pub mod environmental;
pub mod feasibility;
pub mod input;
pub mod potential;
pub mod region;
pub mod runoff;
pub mod structures;

// Re-export the types callers touch on every assessment
pub use assessment::{AquiferAssessment, AssessmentResult, RainfallAssessment};
pub use engine::AssessmentEngine;
pub use feasibility::{FeasibilityAssessment, FeasibilityCategory};
pub use input::{AssessmentInput, InputError, RoofType};
pub use region::{RegionDataProvider, RegionProfile, StaticRegionProvider};
pub use structures::{StructureRecommendation, StructureType};
