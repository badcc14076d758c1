//! # Code Tables
//!
//! Static dictionaries mapping catalog vocabulary to 3-letter codes.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Code Tables                                     │
//! │                                                                         │
//! │  CATEGORIES        SUBCATEGORIES       MATERIALS (priority order)      │
//! │  ───────────       ─────────────       ──────────────────────────      │
//! │  Jewelry  → JWL    Rings     → RNG     sterling silver → SSV  ▲ first  │
//! │  Clothing → CLO    Necklaces → NCK     rose gold       → RGD  │        │
//! │  ...               ...                 ...                    │        │
//! │                                        gold            → GLD  │        │
//! │                                        silver          → SLV  ▼ later  │
//! │                                                                         │
//! │  forward: name (case-insensitive) → code                               │
//! │  reverse: code → canonical name                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every table is a bijection; `GEN` is never a table code so a fallback
//! always decodes to "no name".

use std::collections::HashMap;
use std::sync::OnceLock;

/// An immutable bijective name ↔ code table.
///
/// Entries keep their declaration order (material detection depends on it).
/// Both lookup maps are built on first use and never mutated afterwards.
#[derive(Debug)]
pub struct CodeTable {
    kind: &'static str,
    entries: &'static [(&'static str, &'static str)],
    forward: OnceLock<HashMap<String, &'static str>>,
    reverse: OnceLock<HashMap<&'static str, &'static str>>,
}

impl CodeTable {
    /// Declares a table from `(name, code)` pairs.
    pub const fn new(kind: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        CodeTable {
            kind,
            entries,
            forward: OnceLock::new(),
            reverse: OnceLock::new(),
        }
    }

    /// What this table encodes ("category", "material", ...).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Entries in declaration (priority) order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Looks up the code for a name. Matching ignores ASCII case and
    /// surrounding whitespace.
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        let forward = self.forward.get_or_init(|| {
            self.entries
                .iter()
                .map(|(name, code)| (name.to_ascii_lowercase(), *code))
                .collect()
        });
        forward.get(&name.trim().to_ascii_lowercase()).copied()
    }

    /// Looks up the canonical name for a code.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        let reverse = self
            .reverse
            .get_or_init(|| self.entries.iter().map(|(name, code)| (*code, *name)).collect());
        reverse.get(code).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Category Table
// =============================================================================

pub static CATEGORIES: CodeTable = CodeTable::new(
    "category",
    &[
        ("Jewelry", "JWL"),
        ("Clothing", "CLO"),
        ("Accessories", "ACC"),
        ("Footwear", "FTW"),
        ("Bags", "BAG"),
        ("Watches", "WCH"),
        ("Home Decor", "HMD"),
        ("Beauty", "BTY"),
        ("Electronics", "ELC"),
        ("Sports", "SPT"),
        ("Toys", "TOY"),
        ("Books", "BOK"),
        ("Groceries", "GRC"),
        ("Furniture", "FRN"),
        ("Kitchen", "KIT"),
    ],
);

// =============================================================================
// Subcategory Table
// =============================================================================

pub static SUBCATEGORIES: CodeTable = CodeTable::new(
    "subcategory",
    &[
        ("Rings", "RNG"),
        ("Necklaces", "NCK"),
        ("Earrings", "EAR"),
        ("Bracelets", "BRC"),
        ("Pendants", "PND"),
        ("Anklets", "ANK"),
        ("Brooches", "BRO"),
        ("Shirts", "SHT"),
        ("T-Shirts", "TSH"),
        ("Dresses", "DRS"),
        ("Jeans", "JNS"),
        ("Jackets", "JKT"),
        ("Sneakers", "SNK"),
        ("Boots", "BTS"),
        ("Sandals", "SND"),
        ("Handbags", "HBG"),
        ("Backpacks", "BPK"),
        ("Wallets", "WLT"),
        ("Belts", "BLT"),
        ("Scarves", "SCF"),
        ("Sunglasses", "SGL"),
        ("Smartwatches", "SMW"),
        ("Headphones", "HPH"),
        ("Candles", "CND"),
        ("Vases", "VAS"),
        ("Skincare", "SKN"),
        ("Fragrance", "FRG"),
    ],
);

// =============================================================================
// Material Table
// =============================================================================

/// Material keywords, most specific first.
///
/// Detection takes the first keyword contained in the product text, so a
/// compound keyword must precede any keyword it contains
/// ("sterling silver" before "silver", "stainless steel" before "steel").
pub static MATERIALS: CodeTable = CodeTable::new(
    "material",
    &[
        ("sterling silver", "SSV"),
        ("rose gold", "RGD"),
        ("white gold", "WGD"),
        ("yellow gold", "YGD"),
        ("stainless steel", "SST"),
        ("gold", "GLD"),
        ("silver", "SLV"),
        ("platinum", "PLT"),
        ("titanium", "TTN"),
        ("brass", "BRS"),
        ("copper", "CPR"),
        ("steel", "STL"),
        ("leather", "LTH"),
        ("suede", "SUD"),
        ("cotton", "CTN"),
        ("silk", "SLK"),
        ("cashmere", "CSH"),
        ("wool", "WOL"),
        ("linen", "LIN"),
        ("denim", "DNM"),
        ("polyester", "PLY"),
        ("ceramic", "CRM"),
        ("porcelain", "PRC"),
        ("glass", "GLS"),
        ("wood", "WOD"),
        ("bamboo", "BMB"),
        ("plastic", "PLS"),
        ("rubber", "RBR"),
    ],
);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::FALLBACK_CODE;

    fn all_tables() -> [&'static CodeTable; 3] {
        [&CATEGORIES, &SUBCATEGORIES, &MATERIALS]
    }

    #[test]
    fn test_tables_are_bijective() {
        for table in all_tables() {
            let names: HashSet<String> = table
                .entries()
                .iter()
                .map(|(n, _)| n.to_ascii_lowercase())
                .collect();
            let codes: HashSet<&str> = table.entries().iter().map(|(_, c)| *c).collect();

            assert_eq!(names.len(), table.len(), "duplicate name in {}", table.kind());
            assert_eq!(codes.len(), table.len(), "duplicate code in {}", table.kind());
        }
    }

    #[test]
    fn test_codes_are_three_uppercase_letters() {
        for table in all_tables() {
            for (_, code) in table.entries() {
                assert_eq!(code.len(), 3);
                assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{code}");
                assert_ne!(*code, FALLBACK_CODE);
            }
        }
    }

    #[test]
    fn test_forward_and_reverse_lookup() {
        assert_eq!(CATEGORIES.code_for("Jewelry"), Some("JWL"));
        assert_eq!(CATEGORIES.code_for("  jewelry "), Some("JWL"));
        assert_eq!(CATEGORIES.name_for("JWL"), Some("Jewelry"));
        assert_eq!(SUBCATEGORIES.code_for("T-Shirts"), Some("TSH"));
        assert_eq!(MATERIALS.name_for("SSV"), Some("sterling silver"));

        assert_eq!(CATEGORIES.code_for("Spaceships"), None);
        assert_eq!(CATEGORIES.name_for("GEN"), None);
    }

    #[test]
    fn test_compound_materials_precede_their_parts() {
        let entries = MATERIALS.entries();
        for (i, (outer, _)) in entries.iter().enumerate() {
            for (inner, _) in &entries[..i] {
                assert!(
                    !outer.contains(inner),
                    "'{outer}' is shadowed by earlier keyword '{inner}'"
                );
            }
        }
    }
}
