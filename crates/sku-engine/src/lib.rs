//! # sku-engine: SKU Allocation & Generation
//!
//! Wires the pure codec from `sku-core` to a [`CatalogRepository`]:
//! random sequence allocation with bounded retries, the final collision
//! check with bounded regeneration, and partial-failure batch generation.
//!
//! ## Modules
//!
//! - [`allocator`] - Sequence allocation against the repository
//! - [`generator`] - `generate`, `generate_batch`, `validate`, `parse`
//! - [`config`] - Engine tunables (TOML + environment)
//! - [`error`] - Configuration errors
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use sku_core::AttributePayload;
//! use sku_db::{Database, DbConfig};
//! use sku_engine::{EngineConfig, SkuGenerator};
//!
//! let db = Database::new(DbConfig::new("skus.db")).await?;
//! let config = EngineConfig::load_or_default(None);
//! let generator = SkuGenerator::with_config(db.skus(), &config)?;
//!
//! let attrs = AttributePayload::new("Sterling Silver Band")
//!     .category("Jewelry")
//!     .subcategory("Rings")
//!     .brand("Acme Inc")
//!     .price(1_500.0);
//!
//! let sku = generator.generate(&attrs).await?;
//! db.skus().reserve(&sku, Some(&product_id)).await?;
//! ```
//!
//! [`CatalogRepository`]: sku_core::CatalogRepository

pub mod allocator;
pub mod config;
pub mod error;
pub mod generator;

pub use allocator::{Allocation, SequenceAllocator};
pub use config::{AllocatorSettings, EngineConfig, GeneratorSettings};
pub use error::{EngineError, EngineResult};
pub use generator::{GenerationReport, SkuGenerator};
