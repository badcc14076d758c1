//! # Field Encoders
//!
//! Pure functions that turn free-text attributes into 3-letter segments.
//!
//! ## Encoder Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Field Encoders                                   │
//! │                                                                         │
//! │  category    "Jewelry"        ──► table hit           ──► JWL          │
//! │              "Unknown Thing"  ──► first 3 letters     ──► UNK          │
//! │              "" / None        ──► fallback            ──► GEN          │
//! │                                                                         │
//! │  material    name + tags      ──► first keyword hit   ──► SSV          │
//! │              no keyword       ──► fallback            ──► GEN          │
//! │                                                                         │
//! │  brand       "Acme Inc"       ──► strip "inc"         ──► ACM          │
//! │              "Blue Nile Co"   ──► initials            ──► BNX          │
//! │              "" / None        ──► unbranded           ──► UNB          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these can fail: every input produces a well-formed segment made
//! of exactly three ASCII uppercase letters.

use crate::tables::{CodeTable, CATEGORIES, MATERIALS, SUBCATEGORIES};
use crate::{FALLBACK_CODE, FILLER, SEGMENT_LEN, UNBRANDED_CODE};

/// Words dropped from brand names before deriving the code.
const BRAND_STOP_WORDS: &[&str] = &["inc", "ltd", "llc", "corp", "company", "co", "and", "&"];

// =============================================================================
// Table-Backed Encoders
// =============================================================================

/// Encodes a category name.
///
/// The table lookup trims surrounding whitespace and ignores ASCII case, so
/// `"home decor"` encodes as `HMD` rather than being abbreviated to `HOM`.
/// Names not in the table are abbreviated to their first three letters.
///
/// ## Example
/// ```rust
/// use sku_core::encode::encode_category;
///
/// assert_eq!(encode_category("Jewelry"), "JWL");
/// assert_eq!(encode_category("  home decor "), "HMD");
/// assert_eq!(encode_category("Unknown Thing"), "UNK");
/// assert_eq!(encode_category(""), "GEN");
/// ```
pub fn encode_category(name: &str) -> String {
    encode_with_table(&CATEGORIES, name)
}

/// Encodes a subcategory name. Same rules as [`encode_category`].
pub fn encode_subcategory(name: &str) -> String {
    encode_with_table(&SUBCATEGORIES, name)
}

fn encode_with_table(table: &CodeTable, name: &str) -> String {
    if let Some(code) = table.code_for(name) {
        return code.to_string();
    }

    abbreviate(name).unwrap_or_else(|| FALLBACK_CODE.to_string())
}

/// First three ASCII letters of `text`, uppercased and padded with the
/// filler letter. `None` when the text contains no letters at all.
fn abbreviate(text: &str) -> Option<String> {
    let letters: String = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(SEGMENT_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if letters.is_empty() {
        None
    } else {
        Some(pad(letters))
    }
}

fn pad(mut code: String) -> String {
    while code.len() < SEGMENT_LEN {
        code.push(FILLER);
    }
    code
}

// =============================================================================
// Material Detection
// =============================================================================

/// Detects the material from the product name and tags.
///
/// The lowercase text `"<name> <tag1> <tag2> ..."` is scanned against the
/// material keywords in priority order; the first contained keyword wins.
///
/// ## Example
/// ```rust
/// use sku_core::encode::encode_material;
///
/// assert_eq!(encode_material("Sterling Silver Ring", &[]), "SSV");
/// assert_eq!(encode_material("Ring", &["silver".to_string()]), "SLV");
/// assert_eq!(encode_material("Mystery Box", &[]), "GEN");
/// ```
pub fn encode_material(name: &str, tags: &[String]) -> String {
    let mut haystack = name.to_lowercase();
    for tag in tags {
        haystack.push(' ');
        haystack.push_str(&tag.to_lowercase());
    }

    MATERIALS
        .entries()
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| FALLBACK_CODE.to_string())
}

// =============================================================================
// Brand Encoder
// =============================================================================

/// Derives a brand code algorithmically (there is no brand table).
///
/// ## Rules
/// 1. Drop corporate words (inc, ltd, llc, corp, company, co, and, &)
/// 2. Remaining letters ≤ 3 → uppercase + pad
/// 3. Two or more words → initials of the first three words + pad
/// 4. Otherwise → first three letters
/// 5. Nothing left → `UNB`
///
/// ## Example
/// ```rust
/// use sku_core::encode::encode_brand;
///
/// assert_eq!(encode_brand("Tiffany & Co"), "TIF");
/// assert_eq!(encode_brand("Blue Nile Inc"), "BNX");
/// assert_eq!(encode_brand("H&M"), "HMX");
/// assert_eq!(encode_brand(""), "UNB");
/// ```
pub fn encode_brand(name: &str) -> String {
    let words: Vec<String> = name
        .split_whitespace()
        .filter(|word| {
            let bare = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '&');
            !BRAND_STOP_WORDS
                .iter()
                .any(|stop| bare.eq_ignore_ascii_case(stop))
        })
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_uppercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect();

    let letters: String = words.concat();
    if letters.is_empty() {
        return UNBRANDED_CODE.to_string();
    }

    if letters.len() <= SEGMENT_LEN {
        return pad(letters);
    }

    if words.len() >= 2 {
        let initials: String = words
            .iter()
            .take(SEGMENT_LEN)
            .filter_map(|word| word.chars().next())
            .collect();
        return pad(initials);
    }

    letters[..SEGMENT_LEN].to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn is_segment(code: &str) -> bool {
        code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
    }

    #[test]
    fn test_category_lookup_and_fallback() {
        assert_eq!(encode_category("Jewelry"), "JWL");
        assert_eq!(encode_category("home decor"), "HMD");
        assert_eq!(encode_category("Unknown Thing"), "UNK");
        assert_eq!(encode_category("Ab"), "ABX");
        assert_eq!(encode_category("3D Printers"), "DPR");
        assert_eq!(encode_category(""), "GEN");
        assert_eq!(encode_category("   "), "GEN");
        assert_eq!(encode_category("123"), "GEN");
    }

    #[test]
    fn test_subcategory_lookup_and_fallback() {
        assert_eq!(encode_subcategory("Rings"), "RNG");
        assert_eq!(encode_subcategory("Tiaras"), "TIA");
        assert_eq!(encode_subcategory(""), "GEN");
    }

    #[test]
    fn test_material_priority() {
        assert_eq!(encode_material("925 Sterling Silver Band", &[]), "SSV");
        assert_eq!(encode_material("Rose Gold Pendant", &[]), "RGD");
        assert_eq!(encode_material("Gold Chain", &[]), "GLD");
        assert_eq!(encode_material("Stainless Steel Watch", &[]), "SST");
        assert_eq!(encode_material("Steel Bottle", &[]), "STL");
    }

    #[test]
    fn test_material_from_tags() {
        let tags = vec!["Handmade".to_string(), "LEATHER".to_string()];
        assert_eq!(encode_material("Classic Wallet", &tags), "LTH");

        // Name is scanned together with tags, the priority list decides
        let tags = vec!["gold".to_string()];
        assert_eq!(encode_material("Sterling Silver Ring", &tags), "SSV");
    }

    #[test]
    fn test_material_fallback() {
        assert_eq!(encode_material("", &[]), "GEN");
        assert_eq!(encode_material("Gift Card", &["promo".to_string()]), "GEN");
    }

    #[test]
    fn test_brand_strips_corporate_words() {
        assert_eq!(encode_brand("Acme Inc"), "ACM");
        assert_eq!(encode_brand("Acme Inc."), "ACM");
        assert_eq!(encode_brand("Tiffany & Co"), "TIF");
        assert_eq!(encode_brand("ACME CORP"), "ACM");
        assert_eq!(encode_brand("Inc"), "UNB");
        assert_eq!(encode_brand("Co & Co"), "UNB");
    }

    #[test]
    fn test_brand_short_names_are_padded() {
        assert_eq!(encode_brand("HP"), "HPX");
        assert_eq!(encode_brand("3M"), "MXX");
        assert_eq!(encode_brand("H&M"), "HMX");
        assert_eq!(encode_brand("Zara"), "ZAR");
    }

    #[test]
    fn test_brand_multi_word_initials() {
        assert_eq!(encode_brand("Blue Nile"), "BNX");
        assert_eq!(encode_brand("Kate Spade New York"), "KSN");
        assert_eq!(encode_brand("Johnson and Johnson"), "JJX");
    }

    #[test]
    fn test_brand_empty() {
        assert_eq!(encode_brand(""), "UNB");
        assert_eq!(encode_brand("   "), "UNB");
    }

    #[test]
    fn test_every_encoder_yields_a_segment() {
        let inputs = ["", " ", "x", "ñandú", "日本", "A-B-C", "Über Brand GmbH", "&&&", "42"];
        for input in inputs {
            assert!(is_segment(&encode_category(input)), "{input:?}");
            assert!(is_segment(&encode_subcategory(input)), "{input:?}");
            assert!(is_segment(&encode_material(input, &[])), "{input:?}");
            assert!(is_segment(&encode_brand(input)), "{input:?}");
        }
    }
}
