//! # Catalog Repository Port
//!
//! The one external capability the codec needs: "is this candidate taken?".
//!
//! ```text
//! ┌─────────────────────┐   exists_by_sku(candidate)   ┌──────────────────┐
//! │ sku-engine          │ ───────────────────────────► │ CatalogRepository│
//! │  SequenceAllocator  │ ◄─────────────────────────── │  (sku-db, mocks) │
//! │  SkuGenerator       │         Ok(bool) / Err       └──────────────────┘
//! └─────────────────────┘
//! ```
//!
//! The trait lives here so sku-core stays free of I/O while sku-db and test
//! doubles provide the implementations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SkuResult;

/// Read-only existence index over assigned SKUs.
///
/// Candidates arrive in two shapes: the allocator asks about the hyphenless
/// `prefix + sequence` key (17 characters), the generator asks about the
/// final hyphenated code. Implementations should answer both.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Returns `true` when `candidate` is already assigned.
    async fn exists_by_sku(&self, candidate: &str) -> SkuResult<bool>;
}

#[async_trait]
impl<T: CatalogRepository + ?Sized> CatalogRepository for Arc<T> {
    async fn exists_by_sku(&self, candidate: &str) -> SkuResult<bool> {
        (**self).exists_by_sku(candidate).await
    }
}

#[async_trait]
impl<T: CatalogRepository + ?Sized> CatalogRepository for &T {
    async fn exists_by_sku(&self, candidate: &str) -> SkuResult<bool> {
        (**self).exists_by_sku(candidate).await
    }
}
