//! # SKU Codec
//!
//! Format checking, checksum verification and decoding of finished codes.
//!
//! ## Fixed Layout
//! ```text
//!   JWL-RNG-SSV-ACM-P-1234-7
//!   └┬┘ └┬┘ └┬┘ └┬┘ │ └─┬┘ │
//!    │   │   │   │  │   │  └── check digit
//!    │   │   │   │  │   └───── sequence, 4 digits
//!    │   │   │   │  └───────── tier letter {P,H,M,L,B,A}
//!    │   │   │   └──────────── brand
//!    │   │   └──────────────── material
//!    │   └──────────────────── subcategory
//!    └──────────────────────── category
//! ```
//!
//! 18 payload characters plus 6 hyphens: 24 bytes, all ASCII.
//!
//! `validate` and `parse` never fail with an `Err`: a bad string is reported
//! as a structured [`Validation`] or a `None` record.

use crate::checksum::checksum;
use crate::error::SkuFormatError;
use crate::tables::{CATEGORIES, MATERIALS, SUBCATEGORIES};
use crate::tier::PriceTier;
use crate::types::{SkuParts, SkuPrefix, SkuRecord, Validation};
use crate::SKU_LEN;

/// Byte offsets of the hyphens in a well-formed SKU.
const HYPHENS: [usize; 6] = [3, 7, 11, 15, 17, 22];

/// Byte ranges of the four letter segments.
const LETTER_SEGMENTS: [std::ops::Range<usize>; 4] = [0..3, 4..7, 8..11, 12..15];

const TIER_AT: usize = 16;
const SEQUENCE_AT: std::ops::Range<usize> = 18..22;
const CHECK_AT: usize = 23;

// =============================================================================
// Splitting
// =============================================================================

/// Checks the shape of `sku` and splits it into parts, without looking at
/// the check digit.
fn split(sku: &str) -> Result<SkuParts, SkuFormatError> {
    let bytes = sku.as_bytes();
    if bytes.len() != SKU_LEN {
        return Err(SkuFormatError::Format);
    }

    let shape_ok = HYPHENS.iter().all(|&i| bytes[i] == b'-')
        && LETTER_SEGMENTS
            .iter()
            .all(|range| bytes[range.clone()].iter().all(u8::is_ascii_uppercase))
        && bytes[SEQUENCE_AT].iter().all(u8::is_ascii_digit)
        && bytes[CHECK_AT].is_ascii_digit();
    if !shape_ok {
        return Err(SkuFormatError::Format);
    }

    let tier = PriceTier::from_code(char::from(bytes[TIER_AT])).ok_or(SkuFormatError::Format)?;

    // Every byte is ASCII at this point, so slicing on byte offsets is safe
    let segment = |range: std::ops::Range<usize>| sku[range].to_string();

    Ok(SkuParts {
        prefix: SkuPrefix {
            category: segment(LETTER_SEGMENTS[0].clone()),
            subcategory: segment(LETTER_SEGMENTS[1].clone()),
            material: segment(LETTER_SEGMENTS[2].clone()),
            brand: segment(LETTER_SEGMENTS[3].clone()),
            tier,
        },
        sequence: segment(SEQUENCE_AT),
        check: bytes[CHECK_AT] - b'0',
    })
}

/// Splits `sku` and verifies its check digit.
///
/// ## Returns
/// * `Ok(SkuParts)` - well-formed code with a matching check digit
/// * `Err(SkuFormatError::Format)` - not shaped like a SKU
/// * `Err(SkuFormatError::Checksum)` - shaped right, digit mismatch
pub fn decode(sku: &str) -> Result<SkuParts, SkuFormatError> {
    let parts = split(sku)?;
    if checksum(&parts.body()) != parts.check {
        return Err(SkuFormatError::Checksum);
    }
    Ok(parts)
}

// =============================================================================
// Public Operations
// =============================================================================

/// Validates format and check digit.
///
/// ## Example
/// ```rust
/// use sku_core::codec::validate;
/// use sku_core::SkuFormatError;
///
/// assert!(validate("GEN-GEN-GEN-UNB-A-1000-5").valid);
/// assert_eq!(validate("GEN-GEN-GEN-UNB-A-1000-4").error, Some(SkuFormatError::Checksum));
/// assert_eq!(validate("not-a-sku").error, Some(SkuFormatError::Format));
/// ```
pub fn validate(sku: &str) -> Validation {
    decode(sku).into()
}

/// True when `sku` is a well-formed code with a matching check digit.
pub fn is_valid_sku(sku: &str) -> bool {
    decode(sku).is_ok()
}

/// Decodes a valid SKU into its attributes; `None` if it fails validation.
///
/// ## Example
/// ```rust
/// use sku_core::codec::parse;
///
/// let record = parse("GEN-GEN-GEN-UNB-A-1000-5").unwrap();
/// assert_eq!(record.category_code, "GEN");
/// assert_eq!(record.category, None);
/// assert_eq!(record.tier_label, "Unpriced");
/// ```
pub fn parse(sku: &str) -> Option<SkuRecord> {
    let parts = decode(sku).ok()?;
    let SkuParts {
        prefix,
        sequence,
        check,
    } = parts;

    Some(SkuRecord {
        sku: sku.to_string(),
        category: CATEGORIES.name_for(&prefix.category).map(str::to_string),
        category_code: prefix.category,
        subcategory: SUBCATEGORIES.name_for(&prefix.subcategory).map(str::to_string),
        subcategory_code: prefix.subcategory,
        material: MATERIALS.name_for(&prefix.material).map(str::to_string),
        material_code: prefix.material,
        brand_code: prefix.brand,
        tier: prefix.tier,
        tier_code: prefix.tier.code().to_string(),
        tier_label: prefix.tier.label().to_string(),
        sequence,
        check_digit: check,
        valid: true,
    })
}

/// Normalizes a code typed by a person: trims whitespace and uppercases.
///
/// `validate` itself is strict; call this first for keyboard or scanner input.
pub fn normalize(sku: &str) -> String {
    sku.trim().to_ascii_uppercase()
}

// =============================================================================
// Unit Tests
// =============================================================================
