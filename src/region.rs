//! Region Profile Resolution
//!
//! Maps a free-text address to a rainfall profile and an aquifer profile
//! via fixed keyword tables. This is the one replaceable boundary of the
//! engine: swap `StaticRegionProvider` for anything backed by real
//! climate/hydrogeology data without touching the rest of the pipeline.
//!
//! Resolution rule: the address is lowercased and scanned against the
//! keyword table in declared table order; the first substring match wins.
//! Table order is the documented tie-break when several keywords could
//! match one address. An unmatched address gets the default profile
//! (800mm annual, 600mm monsoon, reliability 0.75, alluvial).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Hydrogeological formation class underlying a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AquiferType {
    Alluvial,
    Basalt,
    Sandstone,
    Granite,
    Limestone,
}

impl AquiferType {
    pub fn display_text(&self) -> &'static str {
        match self {
            AquiferType::Alluvial => "Alluvial",
            AquiferType::Basalt => "Basalt",
            AquiferType::Sandstone => "Sandstone",
            AquiferType::Granite => "Granite",
            AquiferType::Limestone => "Limestone",
        }
    }
}

/// Groundwater quality class for an aquifer formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AquiferQuality {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl AquiferQuality {
    pub fn display_text(&self) -> &'static str {
        match self {
            AquiferQuality::Excellent => "Excellent",
            AquiferQuality::Good => "Good",
            AquiferQuality::Moderate => "Moderate",
            AquiferQuality::Poor => "Poor",
        }
    }
}

/// Long-term rainfall statistics for a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfallStats {
    /// Annual rainfall (mm)
    pub annual: f64,
    /// Monsoon-season rainfall (mm)
    pub monsoon: f64,
    /// Year-to-year reliability of the annual total (0-1)
    pub reliability: f64,
}

/// Hydrogeology of an aquifer formation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquiferProfile {
    /// Depth to water table (m)
    pub depth: f64,
    pub quality: AquiferQuality,
    /// Fraction of applied water the formation accepts (0-1)
    pub recharge_rate: f64,
    /// Ease of lateral water movement through the saturated layer
    pub transmissivity: f64,
}

/// Everything region resolution yields for one address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    pub rainfall: RainfallStats,
    pub aquifer_type: AquiferType,
    pub aquifer: AquiferProfile,
}

/// The pluggable data boundary: address in, region profile out.
///
/// Implementations must be `Send + Sync` so batch assessment can share
/// one provider across worker threads.
pub trait RegionDataProvider: Send + Sync {
    fn resolve(&self, address: &str) -> RegionProfile;
}

// ============================================================================
// EMBEDDED REGION DATA
// Rainfall normals and formation classes for the major metros the survey
// product launched in. Scan order below is the match tie-break.
// ============================================================================

/// One city keyword with its rainfall statistics.
#[derive(Debug, Clone, Copy)]
pub struct CityRainfall {
    pub keyword: &'static str,
    pub stats: RainfallStats,
}

static CITY_RAINFALL: &[CityRainfall] = &[
    CityRainfall { keyword: "mumbai", stats: RainfallStats { annual: 2200.0, monsoon: 1800.0, reliability: 0.85 } },
    CityRainfall { keyword: "delhi", stats: RainfallStats { annual: 650.0, monsoon: 500.0, reliability: 0.75 } },
    CityRainfall { keyword: "bangalore", stats: RainfallStats { annual: 900.0, monsoon: 650.0, reliability: 0.80 } },
    CityRainfall { keyword: "chennai", stats: RainfallStats { annual: 1200.0, monsoon: 850.0, reliability: 0.70 } },
    CityRainfall { keyword: "kolkata", stats: RainfallStats { annual: 1600.0, monsoon: 1200.0, reliability: 0.85 } },
    CityRainfall { keyword: "hyderabad", stats: RainfallStats { annual: 750.0, monsoon: 550.0, reliability: 0.75 } },
    CityRainfall { keyword: "pune", stats: RainfallStats { annual: 650.0, monsoon: 500.0, reliability: 0.80 } },
    CityRainfall { keyword: "ahmedabad", stats: RainfallStats { annual: 800.0, monsoon: 650.0, reliability: 0.75 } },
    CityRainfall { keyword: "jaipur", stats: RainfallStats { annual: 550.0, monsoon: 450.0, reliability: 0.70 } },
    CityRainfall { keyword: "lucknow", stats: RainfallStats { annual: 1000.0, monsoon: 800.0, reliability: 0.80 } },
];

/// Formation class per city keyword. Keywords absent here fall back to
/// alluvial (the dominant formation across the Indo-Gangetic plain).
static CITY_AQUIFER: &[(&str, AquiferType)] = &[
    ("mumbai", AquiferType::Basalt),
    ("pune", AquiferType::Basalt),
    ("hyderabad", AquiferType::Granite),
    ("delhi", AquiferType::Alluvial),
    ("lucknow", AquiferType::Alluvial),
    ("kolkata", AquiferType::Alluvial),
    ("bangalore", AquiferType::Granite),
    ("chennai", AquiferType::Sandstone),
    ("jaipur", AquiferType::Limestone),
];

static AQUIFER_PROFILES: &[(AquiferType, AquiferProfile)] = &[
    (AquiferType::Alluvial, AquiferProfile { depth: 15.0, quality: AquiferQuality::Good, recharge_rate: 0.8, transmissivity: 150.0 }),
    (AquiferType::Basalt, AquiferProfile { depth: 25.0, quality: AquiferQuality::Excellent, recharge_rate: 0.6, transmissivity: 200.0 }),
    (AquiferType::Sandstone, AquiferProfile { depth: 20.0, quality: AquiferQuality::Good, recharge_rate: 0.7, transmissivity: 120.0 }),
    (AquiferType::Granite, AquiferProfile { depth: 35.0, quality: AquiferQuality::Moderate, recharge_rate: 0.4, transmissivity: 80.0 }),
    (AquiferType::Limestone, AquiferProfile { depth: 30.0, quality: AquiferQuality::Good, recharge_rate: 0.9, transmissivity: 300.0 }),
];

/// Profile used when no city keyword matches the address.
pub const DEFAULT_RAINFALL: RainfallStats = RainfallStats {
    annual: 800.0,
    monsoon: 600.0,
    reliability: 0.75,
};

/// Formation assumed for unmapped keywords and unmatched addresses.
pub const DEFAULT_AQUIFER_TYPE: AquiferType = AquiferType::Alluvial;

/// Hydrogeology used when a formation class has no profile entry.
pub const DEFAULT_AQUIFER_PROFILE: AquiferProfile = AquiferProfile {
    depth: 25.0,
    quality: AquiferQuality::Good,
    recharge_rate: 0.6,
    transmissivity: 150.0,
};

// ============================================================================
// STATIC PROVIDER
// ============================================================================

/// Table-driven `RegionDataProvider` over the embedded data above.
pub struct StaticRegionProvider {
    city_aquifer: FxHashMap<&'static str, AquiferType>,
    profiles: FxHashMap<AquiferType, AquiferProfile>,
}

impl StaticRegionProvider {
    pub fn new() -> Self {
        Self {
            city_aquifer: CITY_AQUIFER.iter().copied().collect(),
            profiles: AQUIFER_PROFILES.iter().copied().collect(),
        }
    }

    fn profile_for(&self, aquifer_type: AquiferType) -> AquiferProfile {
        self.profiles
            .get(&aquifer_type)
            .copied()
            .unwrap_or(DEFAULT_AQUIFER_PROFILE)
    }
}

impl Default for StaticRegionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionDataProvider for StaticRegionProvider {
    fn resolve(&self, address: &str) -> RegionProfile {
        let needle = address.to_lowercase();

        for city in CITY_RAINFALL {
            if needle.contains(city.keyword) {
                let aquifer_type = self
                    .city_aquifer
                    .get(city.keyword)
                    .copied()
                    .unwrap_or(DEFAULT_AQUIFER_TYPE);
                return RegionProfile {
                    rainfall: city.stats,
                    aquifer_type,
                    aquifer: self.profile_for(aquifer_type),
                };
            }
        }

        RegionProfile {
            rainfall: DEFAULT_RAINFALL,
            aquifer_type: DEFAULT_AQUIFER_TYPE,
            aquifer: self.profile_for(DEFAULT_AQUIFER_TYPE),
        }
    }
}
