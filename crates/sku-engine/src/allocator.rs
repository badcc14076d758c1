//! # Sequence Allocator
//!
//! Picks the 4-digit sequence segment for a prefix.
//!
//! ## Allocation Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  allocate("JWLRNGSSVACMP")                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  attempt 1..=max_attempts                                              │
//! │  ├── draw n uniformly from [min_sequence, max_sequence]                │
//! │  ├── exists_by_sku("JWLRNGSSVACMP" + "%04d") ──► taken?  → next draw   │
//! │  └── free? ─────────────────────────────────────────────► return n     │
//! │       │                                                                 │
//! │       ▼ all attempts taken                                             │
//! │  last 4 digits of the wall clock (ms)   + WARN log, fallback = true    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The allocator only reads. Reserving the finished SKU is the caller's job,
//! and the registry's UNIQUE constraint settles any race between the read
//! here and that write.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, warn};

use sku_core::{CatalogRepository, SkuResult, SEQUENCE_LEN};

use crate::config::AllocatorSettings;

/// Outcome of one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Zero-padded 4-digit sequence.
    pub sequence: String,
    /// Existence checks performed.
    pub attempts: u32,
    /// True when retries ran out and the clock-derived sequence was used;
    /// that sequence was not checked for collisions.
    pub fallback: bool,
}

/// Draws collision-free sequence numbers against a [`CatalogRepository`].
#[derive(Debug, Clone)]
pub struct SequenceAllocator<R> {
    repo: R,
    settings: AllocatorSettings,
}

impl<R: CatalogRepository> SequenceAllocator<R> {
    /// Creates an allocator after checking `settings`.
    ///
    /// ## Returns
    /// * `Err(SkuError::InvalidConfig)` - empty range, a bound above 9999,
    ///   or zero attempts
    pub fn new(repo: R, settings: AllocatorSettings) -> SkuResult<Self> {
        settings.validate()?;
        Ok(SequenceAllocator { repo, settings })
    }

    /// Creates an allocator with the default settings.
    pub fn with_defaults(repo: R) -> Self {
        SequenceAllocator {
            repo,
            settings: AllocatorSettings::default(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn settings(&self) -> &AllocatorSettings {
        &self.settings
    }

    /// Allocates a sequence for `prefix` (the hyphenless 5-segment key).
    ///
    /// ## Returns
    /// * `Ok(Allocation)` - a free sequence, or the clock fallback
    /// * `Err(SkuError::Repository)` - an existence check failed
    pub async fn allocate(&self, prefix: &str) -> SkuResult<Allocation> {
        let max_attempts = self.settings.max_attempts;

        for attempt in 1..=max_attempts {
            let sequence = format_sequence(self.draw());
            let candidate = format!("{prefix}{sequence}");

            if !self.repo.exists_by_sku(&candidate).await? {
                debug!(prefix = %prefix, sequence = %sequence, attempt, "Allocated sequence");
                return Ok(Allocation {
                    sequence,
                    attempts: attempt,
                    fallback: false,
                });
            }

            debug!(candidate = %candidate, attempt, "Sequence taken, retrying");
        }

        let sequence = fallback_sequence(Utc::now());
        warn!(
            prefix = %prefix,
            attempts = max_attempts,
            sequence = %sequence,
            "Sequence retries exhausted, using clock fallback; uniqueness is not guaranteed"
        );

        Ok(Allocation {
            sequence,
            attempts: max_attempts,
            fallback: true,
        })
    }

    fn draw(&self) -> u16 {
        rand::thread_rng().gen_range(self.settings.min_sequence..=self.settings.max_sequence)
    }
}

fn format_sequence(n: u16) -> String {
    format!("{:0width$}", n, width = SEQUENCE_LEN)
}

/// Last four digits of the millisecond timestamp, zero-padded.
pub fn fallback_sequence(now: DateTime<Utc>) -> String {
    let n = now.timestamp_millis().rem_euclid(10_000) as u16;
    format_sequence(n)
}
