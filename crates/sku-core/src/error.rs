//! # Error Types
//!
//! Domain-specific error types for sku-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sku-core errors (this file)                                           │
//! │  ├── SkuError         - Generation failures (repository, config)       │
//! │  └── SkuFormatError   - Why a string is not a valid SKU                │
//! │                                                                         │
//! │  sku-db errors (separate crate)                                        │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: DbError → SkuError::Repository → BatchItem.error                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! - Unknown category / material / brand: resolved to fallback codes
//! - Exhausted sequence retries: timestamp fallback + warning log
//! - Malformed input to `validate` / `parse`: structured result, not `Err`

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Sku Error
// =============================================================================

/// Errors that can abort a single `generate` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkuError {
    /// The catalog repository could not answer an existence check.
    ///
    /// ## When This Occurs
    /// - Database connection lost mid-generation
    /// - Pool exhausted
    /// - A mock repository scripted to fail (tests)
    ///
    /// The codec cannot guess whether a candidate is free without the
    /// repository, so the item fails instead of risking a duplicate.
    #[error("Catalog repository unavailable: {0}")]
    Repository(String),

    /// Engine configuration is unusable.
    #[error("Invalid SKU configuration: {0}")]
    InvalidConfig(String),
}

impl SkuError {
    /// Wraps any displayable collaborator error as a repository failure.
    pub fn repository(err: impl std::fmt::Display) -> Self {
        SkuError::Repository(err.to_string())
    }
}

// =============================================================================
// Format Error
// =============================================================================

/// Why a string failed SKU validation.
///
/// The two variants are kept apart so callers can tell
/// "corrupted or tampered code" from "not a code at all".
/// Serialized as its [`code`](SkuFormatError::code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SkuFormatError {
    /// The string does not match `CAT-SUB-MAT-BRD-P-NNNN-C`.
    #[error("invalid SKU format")]
    Format,

    /// Shape is right but the check digit does not match the body.
    #[error("invalid check digit")]
    Checksum,
}

impl SkuFormatError {
    /// Stable machine-readable code (`"format"` / `"checksum"`).
    pub const fn code(&self) -> &'static str {
        match self {
            SkuFormatError::Format => "format",
            SkuFormatError::Checksum => "checksum",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SkuError.
pub type SkuResult<T> = Result<T, SkuError>;

// =============================================================================
// Unit Tests
// =============================================================================
