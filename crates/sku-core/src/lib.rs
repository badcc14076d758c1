//! # sku-core: Pure SKU Codec for Titan POS
//!
//! Encodes catalog attributes into structured, checksum-protected product
//! codes and decodes them back. Every function here is pure; the only
//! outside capability the codec needs is described by the
//! [`CatalogRepository`] trait and implemented elsewhere.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Titan SKU Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              sku-engine (allocation + generation)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sku-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────┐ │   │
//! │  │   │  tables  │ │  encode  │ │   tier   │ │ checksum │ │codec │ │   │
//! │  │   │ JWL CLO  │ │ cat/sub  │ │ P H M L  │ │  Luhn +  │ │valid.│ │   │
//! │  │   │ RNG SSV  │ │ mat/brd  │ │ B A      │ │ letters  │ │parse │ │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ CatalogRepository (trait)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  sku-db (SQLite registry)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## SKU Format
//! `CAT-SUB-MAT-BRD-P-NNNN-C`, e.g. `JWL-RNG-SSV-ACM-P-1234-7`.
//!
//! ## Example Usage
//!
//! ```rust
//! use sku_core::{AttributePayload, SkuPrefix};
//! use sku_core::codec::{parse, validate};
//!
//! let attrs = AttributePayload::new("Sterling Silver Band")
//!     .category("Jewelry")
//!     .subcategory("Rings")
//!     .brand("Acme Inc")
//!     .price(1_500.0);
//!
//! let sku = SkuPrefix::from_attributes(&attrs).with_sequence("0420").to_string();
//! assert!(validate(&sku).valid);
//!
//! let record = parse(&sku).unwrap();
//! assert_eq!(record.category.as_deref(), Some("Jewelry"));
//! assert_eq!(record.material.as_deref(), Some("sterling silver"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checksum;
pub mod codec;
pub mod encode;
pub mod error;
pub mod repository;
pub mod tables;
pub mod tier;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use codec::{is_valid_sku, parse, validate};
pub use error::{SkuError, SkuFormatError, SkuResult};
pub use repository::CatalogRepository;
pub use tier::{classify_tier, PriceTier};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Code used when a category, subcategory or material cannot be derived.
pub const FALLBACK_CODE: &str = "GEN";

/// Brand code used when no brand survives cleaning.
pub const UNBRANDED_CODE: &str = "UNB";

/// Letter appended to short derived codes.
pub const FILLER: char = 'X';

/// Length of each alphabetic segment.
pub const SEGMENT_LEN: usize = 3;

/// Length of the numeric sequence segment.
pub const SEQUENCE_LEN: usize = 4;

/// Length of the hyphenless body the check digit covers.
pub const BODY_LEN: usize = 4 * SEGMENT_LEN + 1 + SEQUENCE_LEN;

/// Total length of a formatted SKU (body + check digit + 6 hyphens).
pub const SKU_LEN: usize = BODY_LEN + 1 + 6;
