//! # Repository Module
//!
//! Database repository implementations for the SKU registry.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SkuGenerator (sku-engine)                                             │
//! │       │                                                                 │
//! │       │  repo.exists_by_sku("JWLRNGSSVACMP1234")   ← CatalogRepository │
//! │       ▼                                                                 │
//! │  SkuRegistryRepository                                                 │
//! │  ├── exists(&self, candidate)                                          │
//! │  ├── reserve(&self, sku, product_id)                                   │
//! │  ├── get(&self, sku)                                                   │
//! │  ├── release(&self, sku)                                               │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: sku_registry                                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod registry;
