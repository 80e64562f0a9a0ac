//! # Creational Idioms
//!
//! This crate contains examples for creating and destroying objects.
//!
//! ## Patterns Covered
//!
//! 1. **Static Factory Methods**
//!    - Named constructors
//!    - Same parameter list, different meaning
//!    - Cached instances and hidden implementations
//!
//! 2. **Builder**
//!    - Telescoping constructors (anti-pattern)
//!    - Setter-based structs (anti-pattern)
//!    - Consuming builder with required arguments
//!
//! 3. **Singleton**
//!    - `static` item, `OnceLock` factory, single-variant enum
//!    - Guarded constructor
//!
//! 4. **Non-instantiable Utility Types**
//!
//! 5. **Dependency Injection** through factory traits
//!
//! 6. **Avoiding Unnecessary Objects**
//!    - Reusing literals and precompiled regexes
//!
//! 7. **Drop as a Safety Net**
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_static_factory
//! cargo run --bin p2_builder
//! cargo run --bin p3_singleton
//! cargo run --bin p4_utility
//! cargo run --bin p5_dependency_injection
//! cargo run --bin p6_object_reuse
//! cargo run --bin p7_drop_safety_net
//! ```
//!
//! Every binary reads an optional `creational.toml` from the working
//! directory, see [`settings::DemoSettings`].

pub mod error;
pub mod settings;
pub mod telemetry;

pub mod p1_static_factory;
pub mod p2_builder;
pub mod p3_singleton;
pub mod p4_utility;
pub mod p5_dependency_injection;
pub mod p6_object_reuse;
pub mod p7_drop_safety_net;

pub use error::ConstructionError;

use colored::Colorize;

/// Prints a section header the same way in every demo.
pub fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}
