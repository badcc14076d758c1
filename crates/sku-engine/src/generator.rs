//! # SKU Generator
//!
//! Assembles finished SKUs from attribute payloads.
//!
//! ## Generation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AttributePayload                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SkuPrefix::from_attributes      CAT SUB MAT BRD P                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SequenceAllocator::allocate     + NNNN                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  with_sequence (checksum)        + C → "CAT-SUB-MAT-BRD-P-NNNN-C"      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  exists_by_sku(final)?                                                 │
//! │  ├── free  ─────────────────────────────────► done                     │
//! │  └── taken ─► name += " #n", go again (at most max_regenerations)      │
//! │               bound hit → return last candidate, WARN                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The generator holds no mutable state and can be shared across tasks
//! (wrap it in an `Arc`). Two concurrent calls may still pick the same code;
//! the registry's UNIQUE constraint on insert is the real guarantee.

use tracing::{debug, info, warn};

use sku_core::codec;
use sku_core::{
    AttributePayload, BatchItem, CatalogRepository, SkuPrefix, SkuRecord, SkuResult, Validation,
};

use crate::allocator::SequenceAllocator;
use crate::config::{EngineConfig, GeneratorSettings};

/// Everything `generate` learned while producing a SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub sku: String,
    /// Existence checks made by the allocator, summed over regenerations.
    pub allocation_attempts: u32,
    /// A clock-derived sequence was used at least once.
    pub sequence_fallback: bool,
    /// Times the finished code was found taken and rebuilt.
    pub regenerations: u32,
    /// The returned code was still taken when the regeneration bound hit.
    pub collision_unresolved: bool,
}

/// Produces SKUs, checking candidates against a [`CatalogRepository`].
#[derive(Debug, Clone)]
pub struct SkuGenerator<R> {
    allocator: SequenceAllocator<R>,
    settings: GeneratorSettings,
}

impl<R: CatalogRepository> SkuGenerator<R> {
    /// Creates a generator with default settings.
    pub fn new(repo: R) -> Self {
        SkuGenerator {
            allocator: SequenceAllocator::with_defaults(repo),
            settings: GeneratorSettings::default(),
        }
    }

    /// Creates a generator from a configuration.
    ///
    /// Settings are checked again here: [`EngineConfig`] fields are public
    /// and may have been edited after [`EngineConfig::load`].
    ///
    /// ## Returns
    /// * `Err(SkuError::InvalidConfig)` - the sequence range is empty or wider
    ///   than four digits, or `max_attempts` is zero
    pub fn with_config(repo: R, config: &EngineConfig) -> SkuResult<Self> {
        Ok(SkuGenerator {
            allocator: SequenceAllocator::new(repo, config.allocator.clone())?,
            settings: config.generator.clone(),
        })
    }

    pub fn allocator(&self) -> &SequenceAllocator<R> {
        &self.allocator
    }

    pub fn repository(&self) -> &R {
        self.allocator.repository()
    }

    /// Generates a SKU for `attrs`.
    ///
    /// Missing or unknown attributes never fail; only the repository can.
    pub async fn generate(&self, attrs: &AttributePayload) -> SkuResult<String> {
        self.generate_with_report(attrs).await.map(|report| report.sku)
    }

    /// Generates a SKU and reports how it was obtained.
    pub async fn generate_with_report(
        &self,
        attrs: &AttributePayload,
    ) -> SkuResult<GenerationReport> {
        let max_regenerations = self.settings.max_regenerations;
        let mut working = attrs.clone();
        let mut allocation_attempts = 0;
        let mut sequence_fallback = false;
        let mut regenerations = 0;

        loop {
            let prefix = SkuPrefix::from_attributes(&working);
            let allocation = self.allocator.allocate(&prefix.key()).await?;
            allocation_attempts += allocation.attempts;
            sequence_fallback |= allocation.fallback;

            let sku = prefix.with_sequence(allocation.sequence).to_string();
            let taken = self.repository().exists_by_sku(&sku).await?;

            if !taken || regenerations >= max_regenerations {
                if taken {
                    warn!(
                        sku = %sku,
                        regenerations,
                        "Final SKU still taken after regeneration limit"
                    );
                } else {
                    debug!(sku = %sku, regenerations, "Generated SKU");
                }

                return Ok(GenerationReport {
                    sku,
                    allocation_attempts,
                    sequence_fallback,
                    regenerations,
                    collision_unresolved: taken,
                });
            }

            regenerations += 1;
            working.name = format!("{} #{}", attrs.name, regenerations);
            debug!(sku = %sku, regenerations, "Final SKU taken, regenerating");
        }
    }

    /// Generates SKUs for each payload in order.
    ///
    /// A failing item is recorded in its own [`BatchItem`] and the batch
    /// carries on. Items are processed one at a time.
    pub async fn generate_batch(&self, items: &[AttributePayload]) -> Vec<BatchItem> {
        let mut results = Vec::with_capacity(items.len());

        for attrs in items {
            let item = match self.generate(attrs).await {
                Ok(sku) => BatchItem::succeeded(attrs.clone(), sku),
                Err(err) => {
                    warn!(name = %attrs.name, error = %err, "Batch item failed");
                    BatchItem::failed(attrs.clone(), err)
                }
            };
            results.push(item);
        }

        let succeeded = results.iter().filter(|item| item.success).count();
        info!(
            total = results.len(),
            succeeded,
            failed = results.len() - succeeded,
            "Batch generation finished"
        );

        results
    }

    /// Validates a SKU (format + check digit).
    pub fn validate(&self, sku: &str) -> Validation {
        codec::validate(sku)
    }

    /// Parses a SKU into its attributes.
    pub fn parse(&self, sku: &str) -> Option<SkuRecord> {
        codec::parse(sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sku_core::{SkuError, BODY_LEN, SKU_LEN};
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Free for allocator keys; reports the first `taken` final codes as taken.
    #[derive(Debug)]
    struct FinalCollisions {
        taken: u32,
        seen: AtomicU32,
    }

    impl FinalCollisions {
        fn new(taken: u32) -> Self {
            FinalCollisions {
                taken,
                seen: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl CatalogRepository for FinalCollisions {
        async fn exists_by_sku(&self, candidate: &str) -> SkuResult<bool> {
            if candidate.len() != SKU_LEN {
                return Ok(false);
            }
            Ok(self.seen.fetch_add(1, Ordering::SeqCst) < self.taken)
        }
    }

    fn generator(repo: FinalCollisions, max_regenerations: u32) -> SkuGenerator<FinalCollisions> {
        let mut config = EngineConfig::default();
        config.generator.max_regenerations = max_regenerations;
        SkuGenerator::with_config(repo, &config).unwrap()
    }

    #[tokio::test]
    async fn test_generate_empty_payload() {
        let generator = generator(FinalCollisions::new(0), 5);
        let sku = generator.generate(&AttributePayload::default()).await.unwrap();

        assert!(sku.starts_with("GEN-GEN-GEN-UNB-A-"));
        assert!(generator.validate(&sku).valid);
    }

    #[tokio::test]
    async fn test_single_final_collision_is_regenerated() {
        let generator = generator(FinalCollisions::new(1), 5);
        let report = generator
            .generate_with_report(&AttributePayload::new("Gold Ring"))
            .await
            .unwrap();

        assert_eq!(report.regenerations, 1);
        assert!(!report.collision_unresolved);
        assert_eq!(report.allocation_attempts, 2);
        // The name suffix does not disturb material detection
        assert!(report.sku.starts_with("GEN-GEN-GLD-UNB-A-"));
    }

    #[tokio::test]
    async fn test_regeneration_is_bounded() {
        let generator = generator(FinalCollisions::new(u32::MAX), 3);
        let report = generator
            .generate_with_report(&AttributePayload::new("Anything"))
            .await
            .unwrap();

        assert_eq!(report.regenerations, 3);
        assert!(report.collision_unresolved);
        assert!(generator.validate(&report.sku).valid);
        assert_eq!(generator.repository().seen.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_zero_regenerations_checks_once() {
        let generator = generator(FinalCollisions::new(u32::MAX), 0);
        let report = generator
            .generate_with_report(&AttributePayload::default())
            .await
            .unwrap();

        assert_eq!(report.regenerations, 0);
        assert!(report.collision_unresolved);
    }

    #[derive(Debug)]
    struct Broken;

    #[async_trait]
    impl CatalogRepository for Broken {
        async fn exists_by_sku(&self, _candidate: &str) -> SkuResult<bool> {
            Err(SkuError::Repository("disk I/O error".into()))
        }
    }

    #[tokio::test]
    async fn test_repository_failure_fails_generate() {
        let generator = SkuGenerator::new(Broken);
        let err = generator.generate(&AttributePayload::default()).await.unwrap_err();
        assert!(matches!(err, SkuError::Repository(_)));
    }

    /// Every allocator key is taken; finished codes are free.
    #[derive(Debug)]
    struct BodiesTaken;

    #[async_trait]
    impl CatalogRepository for BodiesTaken {
        async fn exists_by_sku(&self, candidate: &str) -> SkuResult<bool> {
            Ok(candidate.len() == BODY_LEN)
        }
    }

    #[tokio::test]
    async fn test_clock_fallback_still_yields_valid_sku() {
        let mut config = EngineConfig::default();
        config.allocator.max_attempts = 2;
        let generator = SkuGenerator::with_config(BodiesTaken, &config).unwrap();

        let report = generator
            .generate_with_report(&AttributePayload::new("Silk Scarf").brand("Hermes"))
            .await
            .unwrap();

        assert!(report.sequence_fallback);
        assert_eq!(report.allocation_attempts, 2);
        assert_eq!(report.regenerations, 0);
        assert!(!report.collision_unresolved);
        assert!(report.sku.starts_with("GEN-GEN-SLK-HER-A-"));
        assert!(generator.validate(&report.sku).valid);
    }

    #[test]
    fn test_with_config_rejects_unusable_ranges() {
        let mut config = EngineConfig::default();
        config.allocator.min_sequence = 12_000;
        config.allocator.max_sequence = 12_000;
        let err = SkuGenerator::with_config(Broken, &config).unwrap_err();
        assert!(matches!(err, SkuError::InvalidConfig(_)));

        let mut config = EngineConfig::default();
        config.allocator.min_sequence = 5000;
        config.allocator.max_sequence = 4000;
        let err = SkuGenerator::with_config(Broken, &config).unwrap_err();
        assert!(matches!(err, SkuError::InvalidConfig(ref reason) if reason.contains("min_sequence")));
    }

    #[test]
    fn test_validate_and_parse_pass_through() {
        let generator = SkuGenerator::new(Broken);
        assert!(generator.validate("GEN-GEN-GEN-UNB-A-1000-5").valid);
        assert!(generator.parse("GEN-GEN-GEN-UNB-A-1000-5").is_some());
        assert!(generator.parse("GEN-GEN-GEN-UNB-A-1000-6").is_none());
    }
}
