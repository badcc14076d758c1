//! # sku-db: SQLite Registry for Titan SKUs
//!
//! This crate is the production [`CatalogRepository`](sku_core::CatalogRepository):
//! it answers existence checks for candidate codes and stores reservations
//! behind a UNIQUE constraint.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SkuGenerator::generate (sku-engine)                                   │
//! │       │  exists_by_sku(candidate)                                      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     sku-db (THIS CRATE)                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐    ┌─────────────┐  │   │
//! │  │   │   Database    │    │  Repositories   │    │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│  (registry.rs)  │    │ (embedded)  │  │   │
//! │  │   └───────────────┘    └─────────────────┘    └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: sku_registry (sku UNIQUE, body indexed)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sku_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("skus.db")).await?;
//! let registry = db.skus();
//!
//! if !registry.exists("JWL-RNG-SSV-ACM-P-1234-7").await? {
//!     registry.reserve("JWL-RNG-SSV-ACM-P-1234-7", Some(&product_id)).await?;
//! }
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::registry::{SkuRegistryRepository, SkuReservation};
