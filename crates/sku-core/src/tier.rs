//! # Price Tier Classifier
//!
//! Maps a price to the single-letter tier segment of a SKU.
//!
//! ```text
//!   price            tier
//!   ─────────────    ────
//!   ≥ 50000          P  Premium
//!   ≥ 20000          H  High
//!   ≥ 10000          M  Mid
//!   ≥  5000          L  Low
//!   ≥     0          B  Budget
//!   missing          A  Unpriced
//! ```
//!
//! Lower bounds are inclusive: a boundary price belongs to the higher tier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse price bracket encoded as one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Premium,
    High,
    Mid,
    Low,
    Budget,
    /// No usable price was supplied.
    Unpriced,
}

/// Tier thresholds, highest first.
const THRESHOLDS: [(f64, PriceTier); 5] = [
    (50_000.0, PriceTier::Premium),
    (20_000.0, PriceTier::High),
    (10_000.0, PriceTier::Mid),
    (5_000.0, PriceTier::Low),
    (0.0, PriceTier::Budget),
];

impl PriceTier {
    /// Every tier, in SKU alphabet order `P H M L B A`.
    pub const ALL: [PriceTier; 6] = [
        PriceTier::Premium,
        PriceTier::High,
        PriceTier::Mid,
        PriceTier::Low,
        PriceTier::Budget,
        PriceTier::Unpriced,
    ];

    /// Letter used in the SKU.
    pub const fn code(&self) -> char {
        match self {
            PriceTier::Premium => 'P',
            PriceTier::High => 'H',
            PriceTier::Mid => 'M',
            PriceTier::Low => 'L',
            PriceTier::Budget => 'B',
            PriceTier::Unpriced => 'A',
        }
    }

    /// Decodes a tier letter.
    pub fn from_code(code: char) -> Option<Self> {
        PriceTier::ALL.into_iter().find(|tier| tier.code() == code)
    }

    /// Human-readable price range.
    pub const fn label(&self) -> &'static str {
        match self {
            PriceTier::Premium => "Premium (50000 and above)",
            PriceTier::High => "High (20000 - 49999)",
            PriceTier::Mid => "Mid (10000 - 19999)",
            PriceTier::Low => "Low (5000 - 9999)",
            PriceTier::Budget => "Budget (0 - 4999)",
            PriceTier::Unpriced => "Unpriced",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classifies a price into its tier.
///
/// Negative, NaN and infinite prices carry no usable information and are
/// treated like a missing price.
///
/// ## Example
/// ```rust
/// use sku_core::tier::{classify_tier, PriceTier};
///
/// assert_eq!(classify_tier(Some(50_000.0)), PriceTier::Premium);
/// assert_eq!(classify_tier(Some(49_999.0)), PriceTier::High);
/// assert_eq!(classify_tier(None), PriceTier::Unpriced);
/// ```
pub fn classify_tier(price: Option<f64>) -> PriceTier {
    let Some(price) = price.filter(|p| p.is_finite()) else {
        return PriceTier::Unpriced;
    };

    THRESHOLDS
        .iter()
        .find(|(floor, _)| price >= *floor)
        .map(|(_, tier)| *tier)
        .unwrap_or(PriceTier::Unpriced)
}

/// Decodes a tier letter (convenience for [`PriceTier::from_code`]).
pub fn decode_tier(code: char) -> Option<PriceTier> {
    PriceTier::from_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_higher_tier() {
        assert_eq!(classify_tier(Some(50_000.0)), PriceTier::Premium);
        assert_eq!(classify_tier(Some(49_999.0)), PriceTier::High);
        assert_eq!(classify_tier(Some(20_000.0)), PriceTier::High);
        assert_eq!(classify_tier(Some(19_999.99)), PriceTier::Mid);
        assert_eq!(classify_tier(Some(10_000.0)), PriceTier::Mid);
        assert_eq!(classify_tier(Some(5_000.0)), PriceTier::Low);
        assert_eq!(classify_tier(Some(4_999.0)), PriceTier::Budget);
        assert_eq!(classify_tier(Some(0.0)), PriceTier::Budget);
    }

    #[test]
    fn test_missing_or_unusable_price() {
        assert_eq!(classify_tier(None), PriceTier::Unpriced);
        assert_eq!(classify_tier(Some(-1.0)), PriceTier::Unpriced);
        assert_eq!(classify_tier(Some(f64::NAN)), PriceTier::Unpriced);
        assert_eq!(classify_tier(Some(f64::INFINITY)), PriceTier::Unpriced);
    }

    #[test]
    fn test_code_round_trip() {
        for tier in PriceTier::ALL {
            assert_eq!(PriceTier::from_code(tier.code()), Some(tier));
        }
        assert_eq!(decode_tier('Z'), None);
        assert_eq!(PriceTier::Premium.code(), 'P');
        assert_eq!(PriceTier::Unpriced.code(), 'A');
    }
}
