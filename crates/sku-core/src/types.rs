//! # Domain Types
//!
//! Inputs and outputs of the SKU codec.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  AttributePayload ──► SkuPrefix ──(+ sequence)──► SkuParts ──► String  │
//! │   name, tags,          CAT SUB MAT                 + NNNN       CAT-SUB-│
//! │   category, brand,     BRD P                       + C          ...-C   │
//! │   price                                                                 │
//! │                                                                         │
//! │  String ──► Validation { valid, error }                                │
//! │  String ──► SkuRecord  { codes, decoded names, tier label, ... }       │
//! │                                                                         │
//! │  [AttributePayload] ──► [BatchItem { input, sku, success, error }]     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::checksum::checksum;
use crate::encode::{encode_brand, encode_category, encode_material, encode_subcategory};
use crate::error::SkuFormatError;
use crate::tier::{classify_tier, PriceTier};

// =============================================================================
// Attribute Payload
// =============================================================================

/// Catalog attributes supplied by the caller.
///
/// No field is required. Missing values degrade to fallback codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AttributePayload {
    /// Product display name (also scanned for material keywords).
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub subcategory: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    /// Free-form tags, scanned for material keywords after the name.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Price in whole currency units.
    #[serde(default)]
    pub price: Option<f64>,
}

impl AttributePayload {
    /// Creates a payload with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        AttributePayload {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the subcategory.
    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Sets the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Appends a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

// =============================================================================
// Prefix & Parts
// =============================================================================

/// The five attribute-derived segments of a SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuPrefix {
    pub category: String,
    pub subcategory: String,
    pub material: String,
    pub brand: String,
    pub tier: PriceTier,
}

impl SkuPrefix {
    /// Runs every field encoder over the payload.
    pub fn from_attributes(attrs: &AttributePayload) -> Self {
        SkuPrefix {
            category: encode_category(attrs.category.as_deref().unwrap_or_default()),
            subcategory: encode_subcategory(attrs.subcategory.as_deref().unwrap_or_default()),
            material: encode_material(&attrs.name, &attrs.tags),
            brand: encode_brand(attrs.brand.as_deref().unwrap_or_default()),
            tier: classify_tier(attrs.price),
        }
    }

    /// Hyphenless key used for sequence allocation, e.g. `JWLRNGSSVACMP`.
    pub fn key(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.category, self.subcategory, self.material, self.brand, self.tier
        )
    }

    /// Completes the prefix with a sequence number and computes the check digit.
    pub fn with_sequence(self, sequence: impl Into<String>) -> SkuParts {
        let sequence = sequence.into();
        let check = checksum(&format!("{}{}", self.key(), sequence));
        SkuParts {
            prefix: self,
            sequence,
            check,
        }
    }
}

/// All seven segments of a SKU.
///
/// `Display` renders the hyphenated form `CAT-SUB-MAT-BRD-P-NNNN-C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuParts {
    pub prefix: SkuPrefix,
    /// Four decimal digits.
    pub sequence: String,
    /// Check digit, 0-9.
    pub check: u8,
}

impl SkuParts {
    /// Hyphenless body the check digit is computed over.
    pub fn body(&self) -> String {
        format!("{}{}", self.prefix.key(), self.sequence)
    }
}

impl fmt::Display for SkuParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.prefix;
        write!(
            f,
            "{}-{}-{}-{}-{}-{}-{}",
            p.category, p.subcategory, p.material, p.brand, p.tier, self.sequence, self.check
        )
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Outcome of `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SkuFormatError>,
}

impl Validation {
    pub fn ok() -> Self {
        Validation {
            valid: true,
            error: None,
        }
    }

    pub fn failed(error: SkuFormatError) -> Self {
        Validation {
            valid: false,
            error: Some(error),
        }
    }
}

impl From<Result<SkuParts, SkuFormatError>> for Validation {
    fn from(result: Result<SkuParts, SkuFormatError>) -> Self {
        match result {
            Ok(_) => Validation::ok(),
            Err(err) => Validation::failed(err),
        }
    }
}

// =============================================================================
// Parse Record
// =============================================================================

/// Structured view of a valid SKU.
///
/// Raw codes are always present. Decoded names are `None` when the code is
/// not in its table (a `GEN` fallback or a truncated unknown name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkuRecord {
    pub sku: String,
    pub category_code: String,
    pub category: Option<String>,
    pub subcategory_code: String,
    pub subcategory: Option<String>,
    pub material_code: String,
    pub material: Option<String>,
    pub brand_code: String,
    pub tier: PriceTier,
    pub tier_code: String,
    pub tier_label: String,
    pub sequence: String,
    pub check_digit: u8,
    pub valid: bool,
}

// =============================================================================
// Batch Result
// =============================================================================

/// Result of one item in a batch generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchItem {
    pub input: AttributePayload,
    pub sku: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItem {
    pub fn succeeded(input: AttributePayload, sku: String) -> Self {
        BatchItem {
            input,
            sku: Some(sku),
            success: true,
            error: None,
        }
    }

    pub fn failed(input: AttributePayload, error: impl fmt::Display) -> Self {
        BatchItem {
            input,
            sku: None,
            success: false,
            error: Some(error.to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
