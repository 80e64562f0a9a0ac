//! Pattern 6: Avoiding Unnecessary Objects
//!
//! Immutable values can always be reused. Allocating a fresh copy, or
//! rebuilding an expensive object on every call, buys nothing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::section;

// ============================================================================
// Example: Literals are already values
// ============================================================================

/// Allocates a new `String` every call, for a value that never changes.
pub fn effective_owned() -> String {
    String::from("effective")
}

/// Same text, no allocation: every caller shares the literal.
pub fn effective_shared() -> &'static str {
    "effective"
}

// ============================================================================
// Example: Needless boxing in a hot loop
// ============================================================================

/// Sums `0..=n`, allocating a fresh box on every step.
pub fn sum_boxed(n: u64) -> u64 {
    let mut sum: Box<u64> = Box::new(0);
    for index in 0..=n {
        sum = Box::new(*sum + index);
    }
    *sum
}

pub fn sum_primitive(n: u64) -> u64 {
    let mut sum = 0u64;
    for index in 0..=n {
        sum += index;
    }
    sum
}

// ============================================================================
// Example: Reusing an expensive immutable object
// ============================================================================

const ROMAN_NUMERAL: &str = r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

lazy_static! {
    static ref ROMAN: Regex = Regex::new(ROMAN_NUMERAL).expect("valid roman numeral pattern");
}

/// Compiles the pattern on every call.
pub fn is_roman_numeral_slow(s: &str) -> bool {
    let re = Regex::new(ROMAN_NUMERAL).expect("valid roman numeral pattern");
    !s.is_empty() && re.is_match(s)
}

/// Compiles once, on first use.
pub fn is_roman_numeral(s: &str) -> bool {
    !s.is_empty() && ROMAN.is_match(s)
}

pub fn run_demo() {
    section("Literals");
    let owned = effective_owned();
    let shared = effective_shared();
    println!("owned  {:?} lives at {:p} (new each call)", owned, owned.as_ptr());
    println!("shared {:?} lives at {:p} (always the same)", shared, shared.as_ptr());

    section("Boxing in a Loop");
    println!("sum_boxed(10)     = {}", sum_boxed(10));
    println!("sum_primitive(10) = {}", sum_primitive(10));

    section("Precompiled Regex");
    for candidate in ["MCMLXXXIV", "IIII", "XLII"] {
        println!(
            "{:<10} slow={} reused={}",
            candidate,
            is_roman_numeral_slow(candidate),
            is_roman_numeral(candidate)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_shared() {
        assert_eq!(effective_owned(), effective_shared());
        assert_eq!(effective_shared().as_ptr(), effective_shared().as_ptr());
    }

    #[test]
    fn test_sums_agree() {
        assert_eq!(sum_primitive(10), 55);
        assert_eq!(sum_boxed(10), 55);
        assert_eq!(sum_boxed(0), 0);
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(Regex::new(ROMAN_NUMERAL).is_ok());
        assert_eq!(ROMAN.as_str(), ROMAN_NUMERAL);
    }

    #[test]
    fn test_roman_numerals() {
        for valid in ["I", "IV", "XLII", "MCMLXXXIV", "MMMCMXCIX"] {
            assert!(is_roman_numeral(valid), "{} should be valid", valid);
            assert!(is_roman_numeral_slow(valid), "{} should be valid", valid);
        }
        for invalid in ["", "IIII", "VV", "IC", "abc"] {
            assert!(!is_roman_numeral(invalid), "{} should be invalid", invalid);
            assert!(!is_roman_numeral_slow(invalid), "{} should be invalid", invalid);
        }
    }
}
