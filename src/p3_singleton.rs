//! Pattern 3: Singleton
//!
//! A type instantiated exactly once. Rust has no reflection, so a private
//! field is already enough to stop outside code from building another
//! instance; the guarded variant shows the runtime check for completeness.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::error::ConstructionError;
use crate::section;

// ============================================================================
// Example: Public static item
// ============================================================================

#[derive(Debug)]
pub struct EagerFieldSingleton {
    _private: (),
}

/// The instance, built at compile time.
pub static EAGER_FIELD: EagerFieldSingleton = EagerFieldSingleton { _private: () };

// ============================================================================
// Example: Static factory returning the instance
// ============================================================================

/// Callers go through [`FactoryMethodSingleton::instance`], so the type can
/// stop being a singleton later without changing its API.
#[derive(Debug)]
pub struct FactoryMethodSingleton {
    greeting: String,
}

impl FactoryMethodSingleton {
    pub fn instance() -> &'static FactoryMethodSingleton {
        static INSTANCE: OnceLock<FactoryMethodSingleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("initializing FactoryMethodSingleton");
            FactoryMethodSingleton {
                greeting: "hello from the only instance".to_string(),
            }
        })
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}

// ============================================================================
// Example: Single-variant enum
// ============================================================================

/// Exactly one value exists and the compiler knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumSingleton {
    Instance,
}

impl EnumSingleton {
    pub fn describe(self) -> &'static str {
        match self {
            EnumSingleton::Instance => "the one and only EnumSingleton",
        }
    }
}

// ============================================================================
// Example: Guarded constructor
// ============================================================================

static GUARDED_CREATED: AtomicBool = AtomicBool::new(false);

#[derive(Debug)]
pub struct GuardedSingleton {
    _private: (),
}

impl GuardedSingleton {
    /// Succeeds once per process; every later call is refused.
    pub fn create() -> Result<GuardedSingleton, ConstructionError> {
        if GUARDED_CREATED.swap(true, Ordering::SeqCst) {
            warn!("refusing second GuardedSingleton");
            return Err(ConstructionError::AlreadyInstantiated("GuardedSingleton"));
        }
        Ok(GuardedSingleton { _private: () })
    }
}

pub fn run_demo() {
    section("Public Static Item");
    println!("EAGER_FIELD at {:p}", &EAGER_FIELD);

    section("Static Factory");
    let a = FactoryMethodSingleton::instance();
    let b = FactoryMethodSingleton::instance();
    println!("{} (same instance: {})", a.greeting(), std::ptr::eq(a, b));

    section("Single-variant Enum");
    println!("{}", EnumSingleton::Instance.describe());

    section("Guarded Constructor");
    match GuardedSingleton::create() {
        Ok(first) => println!("first create() -> {:?}", first),
        Err(e) => println!("first create() -> error: {}", e),
    }
    match GuardedSingleton::create() {
        Ok(second) => println!("second create() -> {:?}", second),
        Err(e) => println!("second create() -> error: {}", e),
    }
}
