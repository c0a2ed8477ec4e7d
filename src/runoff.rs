//! Runoff coefficient lookup
//!
//! Fraction of rainfall on the catchment that becomes collectible runoff,
//! by roof material. Pure lookup with a documented fallback; there is no
//! error path.

use crate::input::RoofType;

/// Coefficient applied when a roof material has no table entry.
pub const DEFAULT_RUNOFF_COEFFICIENT: f64 = 0.75;

static ROOF_RUNOFF: &[(RoofType, f64)] = &[
    (RoofType::Concrete, 0.85),
    (RoofType::Metal, 0.90),
    (RoofType::Tile, 0.80),
    (RoofType::Thatched, 0.60),
];

/// Runoff coefficient for a roof material.
pub fn runoff_coefficient(roof_type: RoofType) -> f64 {
    ROOF_RUNOFF
        .iter()
        .find(|(material, _)| *material == roof_type)
        .map_or(DEFAULT_RUNOFF_COEFFICIENT, |(_, coeff)| *coeff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coefficients() {
        assert_relative_eq!(runoff_coefficient(RoofType::Concrete), 0.85);
        assert_relative_eq!(runoff_coefficient(RoofType::Metal), 0.90);
        assert_relative_eq!(runoff_coefficient(RoofType::Tile), 0.80);
        assert_relative_eq!(runoff_coefficient(RoofType::Thatched), 0.60);
    }
}
