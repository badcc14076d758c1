//! # Checksum
//!
//! Luhn check digit extended to letters.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  body:    J   W   L   ...   P   1   2   3   4                          │
//! │  value:  10  23  12   ...  16   1   2   3   4      A=1 … Z=26, 0-9=0-9 │
//! │                                                                         │
//! │  Walk right → left, doubling the 1st, 3rd, 5th ... value:              │
//! │                                                   ×2      ×2           │
//! │  doubled value > 9 → subtract 9                                        │
//! │                                                                         │
//! │  check = (10 - sum % 10) % 10                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rightmost value is always doubled. Letters above `I` map to two-digit
//! values; doubling still reduces by subtracting 9, not by digit sum.

/// Numeric value of a body character. Hyphens and anything else that is
/// not an ASCII letter or digit contribute nothing and do not shift the
/// doubling alternation.
fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 1),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 1),
        _ => None,
    }
}

/// Computes the check digit (0-9) for a SKU body.
///
/// `body` is the code without its own check digit. Hyphens are skipped, so
/// `"JWLRNGSSVACMP1234"` and `"JWL-RNG-SSV-ACM-P-1234"` give the same digit.
///
/// ## Example
/// ```rust
/// use sku_core::checksum::checksum;
///
/// assert_eq!(checksum("JWLRNGSTSACMP1234"), 0);
/// assert_eq!(checksum("GENGENGENUNBA1000"), 5);
/// ```
pub fn checksum(body: &str) -> u8 {
    let sum: u32 = body
        .chars()
        .rev()
        .filter_map(char_value)
        .enumerate()
        .map(|(i, value)| {
            if i % 2 == 0 {
                let doubled = value * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                value
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Check digit as a character.
pub fn check_char(body: &str) -> char {
    char::from(b'0' + checksum(body))
}
