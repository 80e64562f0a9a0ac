//! Pattern 4: Non-instantiable Utility Types
//!
//! An enum with no variants has no values, so nobody can construct it,
//! not even this module. It works as a namespace for associated functions.
//! A plain module of free functions is usually the more Rust-like choice;
//! the empty enum is for when the functions must hang off a type.

use crate::section;

pub enum TextUtils {}

impl TextUtils {
    pub fn is_blank(text: &str) -> bool {
        text.chars().all(char::is_whitespace)
    }

    /// Upper-cases the first character, leaves the rest alone.
    pub fn capitalize(text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn count_letters(text: &str) -> usize {
        text.chars().filter(|c| c.is_alphabetic()).count()
    }
}

pub fn run_demo() {
    section("Non-instantiable Utility Type");
    println!("is_blank(\"  \\t\")        -> {}", TextUtils::is_blank("  \t"));
    println!("capitalize(\"effective\") -> {}", TextUtils::capitalize("effective"));
    println!("count_letters(\"a1b2c3\") -> {}", TextUtils::count_letters("a1b2c3"));

    // This would NOT compile: `TextUtils` has no values.
    // let utils = TextUtils;
}
