//! # SKU Registry Repository
//!
//! Existence lookups and reservations for generated SKUs.
//!
//! ## Two Lookup Keys
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sku_registry                                                           │
//! │                                                                         │
//! │  sku                       │ body               │ product_id           │
//! │  ──────────────────────────┼────────────────────┼────────────────      │
//! │  JWL-RNG-SSV-ACM-P-1234-7  │ JWLRNGSSVACMP1234  │ 5f0c...              │
//! │                                                                         │
//! │  allocator asks:  "JWLRNGSSVACMP1234"          → matches body          │
//! │  generator asks:  "JWL-RNG-SSV-ACM-P-1234-7"   → matches sku           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reservation is a plain INSERT; the UNIQUE constraint on `sku` is what
//! finally settles a race between two writers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use sku_core::codec::decode;
use sku_core::{CatalogRepository, SkuResult};

use crate::error::{DbError, DbResult};

/// A reserved SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct SkuReservation {
    pub id: String,
    pub sku: String,
    pub body: String,
    pub product_id: Option<String>,
    pub reserved_at: DateTime<Utc>,
}

/// Repository over the `sku_registry` table.
#[derive(Debug, Clone)]
pub struct SkuRegistryRepository {
    pool: SqlitePool,
}

impl SkuRegistryRepository {
    /// Creates a new SkuRegistryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SkuRegistryRepository { pool }
    }

    /// Checks whether a candidate is taken.
    ///
    /// `candidate` may be a full SKU or a hyphenless body without check digit.
    pub async fn exists(&self, candidate: &str) -> DbResult<bool> {
        let found: i64 = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM sku_registry
                WHERE sku = ?1 OR body = ?1
            )
            "#,
        )
        .bind(candidate)
        .fetch_one(&self.pool)
        .await?;

        debug!(candidate = %candidate, taken = found != 0, "Checked SKU availability");
        Ok(found != 0)
    }

    /// Reserves a SKU.
    ///
    /// ## Returns
    /// * `Ok(SkuReservation)` - the stored row
    /// * `Err(DbError::InvalidSku)` - `sku` fails format or checksum validation
    /// * `Err(DbError::UniqueViolation)` - already reserved
    pub async fn reserve(&self, sku: &str, product_id: Option<&str>) -> DbResult<SkuReservation> {
        let parts = decode(sku).map_err(|reason| DbError::InvalidSku {
            sku: sku.to_string(),
            reason,
        })?;

        let reservation = SkuReservation {
            id: Uuid::new_v4().to_string(),
            sku: sku.to_string(),
            body: parts.body(),
            product_id: product_id.map(str::to_string),
            reserved_at: Utc::now(),
        };

        debug!(sku = %sku, "Reserving SKU");

        sqlx::query(
            r#"
            INSERT INTO sku_registry (id, sku, body, product_id, reserved_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&reservation.id)
        .bind(&reservation.sku)
        .bind(&reservation.body)
        .bind(&reservation.product_id)
        .bind(reservation.reserved_at)
        .execute(&self.pool)
        .await
        .map_err(|err| match DbError::from(err) {
            DbError::UniqueViolation { .. } => DbError::duplicate("sku", sku),
            other => other,
        })?;

        Ok(reservation)
    }

    /// Gets a reservation by its SKU.
    pub async fn get(&self, sku: &str) -> DbResult<Option<SkuReservation>> {
        let reservation = sqlx::query_as::<_, SkuReservation>(
            r#"
            SELECT id, sku, body, product_id, reserved_at
            FROM sku_registry
            WHERE sku = ?1
            "#,
        )
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Releases a reservation (e.g. the product insert that followed failed).
    ///
    /// Returns `false` when nothing was reserved under `sku`.
    pub async fn release(&self, sku: &str) -> DbResult<bool> {
        debug!(sku = %sku, "Releasing SKU");

        let result = sqlx::query("DELETE FROM sku_registry WHERE sku = ?1")
            .bind(sku)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts reserved SKUs (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sku_registry")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl CatalogRepository for SkuRegistryRepository {
    async fn exists_by_sku(&self, candidate: &str) -> SkuResult<bool> {
        Ok(self.exists(candidate).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use sku_core::SkuError;

    const SKU: &str = "JWL-RNG-STS-ACM-P-1234-0";

    async fn repo() -> SkuRegistryRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().skus()
    }

    #[tokio::test]
    async fn test_reserve_then_exists_by_both_keys() {
        let repo = repo().await;
        assert!(!repo.exists(SKU).await.unwrap());

        let reservation = repo.reserve(SKU, Some("product-1")).await.unwrap();
        assert_eq!(reservation.body, "JWLRNGSTSACMP1234");

        assert!(repo.exists(SKU).await.unwrap());
        assert!(repo.exists("JWLRNGSTSACMP1234").await.unwrap());
        assert!(!repo.exists("JWLRNGSTSACMP1235").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_reservation_is_rejected() {
        let repo = repo().await;
        repo.reserve(SKU, None).await.unwrap();

        let err = repo.reserve(SKU, None).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::UniqueViolation { ref field, ref value } if field == "sku" && value == SKU
        ));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_sku_is_not_reserved() {
        let repo = repo().await;

        let err = repo.reserve("JWL-RNG-STS-ACM-P-1234-1", None).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidSku { .. }));

        let err = repo.reserve("hello", None).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidSku { .. }));

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_and_release() {
        let repo = repo().await;
        repo.reserve(SKU, Some("product-9")).await.unwrap();

        let found = repo.get(SKU).await.unwrap().unwrap();
        assert_eq!(found.product_id.as_deref(), Some("product-9"));

        assert!(repo.release(SKU).await.unwrap());
        assert!(!repo.release(SKU).await.unwrap());
        assert!(repo.get(SKU).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_catalog_repository_port() {
        let repo = repo().await;
        repo.reserve(SKU, None).await.unwrap();

        assert!(repo.exists_by_sku(SKU).await.unwrap());

        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let closed = db.skus();
        db.close().await;
        let err = closed.exists_by_sku(SKU).await.unwrap_err();
        assert!(matches!(err, SkuError::Repository(_)));
    }
}
