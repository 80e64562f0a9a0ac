//! Pattern 1: Static Factory Methods
//!
//! Named associated functions instead of a public struct literal. In Rust
//! every constructor is already a function, so the idiom is mostly about
//! keeping fields private and giving each way of construction a name.

use lazy_static::lazy_static;
use tracing::debug;

use crate::error::ConstructionError;
use crate::section;

// ============================================================================
// Example: A box built only through named constructors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBox<T> {
    item: T,
}

lazy_static! {
    static ref WITH_MINIMUM_NUMBER: ItemBox<i32> = ItemBox::new(i32::MIN);
    static ref WITH_MAXIMUM_NUMBER: ItemBox<i32> = ItemBox::new(i32::MAX);
}

impl<T> ItemBox<T> {
    // Private: callers pick a named factory below.
    fn new(item: T) -> Self {
        ItemBox { item }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn into_item(self) -> T {
        self.item
    }
}

impl ItemBox<i32> {
    /// Static factory methods have names.
    pub fn of_number(number: i32) -> Self {
        ItemBox::new(number)
    }

    /// Picks the smallest of `numbers`.
    ///
    /// Shares its parameter list with [`ItemBox::of_maximum_number`]; only
    /// the name tells them apart, which a plain constructor cannot do.
    pub fn of_minimal_number(numbers: &[i32]) -> Result<Self, ConstructionError> {
        if numbers.is_empty() {
            return Err(ConstructionError::EmptyArguments);
        }

        let minimal = numbers
            .iter()
            .copied()
            .min()
            .ok_or(ConstructionError::MissingExtreme("minimal"))?;

        debug!(minimal, count = numbers.len(), "boxing minimal number");
        Ok(ItemBox::new(minimal))
    }

    /// Picks the largest of `numbers`.
    pub fn of_maximum_number(numbers: &[i32]) -> Result<Self, ConstructionError> {
        if numbers.is_empty() {
            return Err(ConstructionError::EmptyArguments);
        }

        let maximum = numbers
            .iter()
            .copied()
            .max()
            .ok_or(ConstructionError::MissingExtreme("maximum"))?;

        debug!(maximum, count = numbers.len(), "boxing maximum number");
        Ok(ItemBox::new(maximum))
    }

    /// Never creates a new instance: the same box comes back every time.
    pub fn minimum() -> &'static ItemBox<i32> {
        &*WITH_MINIMUM_NUMBER
    }

    /// Same as [`ItemBox::minimum`].
    pub fn maximum() -> &'static ItemBox<i32> {
        &*WITH_MAXIMUM_NUMBER
    }
}

impl ItemBox<char> {
    /// Wraps `letter`, rejecting anything that is not alphabetic.
    pub fn of_letter(letter: char) -> Result<Self, ConstructionError> {
        if !letter.is_alphabetic() {
            return Err(ConstructionError::NotALetter(letter));
        }
        Ok(ItemBox::new(letter))
    }
}

// ============================================================================
// Example: Returning any implementation of the declared type
// ============================================================================

pub trait Container<T> {
    fn item(&self) -> &T;
}

impl<T> Container<T> for ItemBox<T> {
    fn item(&self) -> &T {
        &self.item
    }
}

/// Callers only ever see `dyn Container`; the concrete type may change
/// without touching them.
pub fn construct<U: 'static>(item: U) -> Box<dyn Container<U>> {
    Box::new(ItemBox::new(item))
}

pub fn run_demo(numbers: &[i32], letter: char) -> Result<(), ConstructionError> {
    section("Static Factory Methods Have Names");
    println!("of_number(1)      -> {:?}", ItemBox::of_number(1));
    match ItemBox::of_letter(letter) {
        Ok(boxed) => println!("of_letter({:?})    -> {:?}", letter, boxed),
        Err(e) => println!("of_letter({:?})    -> error: {}", letter, e),
    }
    if let Err(e) = ItemBox::of_letter('7') {
        println!("of_letter('7')    -> error: {}", e);
    }

    section("Same Parameter List, Different Meaning");
    println!("numbers: {:?}", numbers);
    println!("of_minimal_number -> {:?}", ItemBox::of_minimal_number(numbers)?);
    println!("of_maximum_number -> {:?}", ItemBox::of_maximum_number(numbers)?);

    section("Controlling Instance Creation");
    let first = ItemBox::minimum();
    let second = ItemBox::minimum();
    println!("minimum() -> {:?}", first);
    println!("same instance: {}", std::ptr::eq(first, second));
    println!("maximum() -> {:?}", ItemBox::maximum());

    section("Returning a Hidden Implementation");
    let container = construct(true);
    println!("construct(true).item() -> {}", container.item());

    section("Disadvantages");
    println!("Private fields mean no struct literal outside this module,");
    println!("and factories do not stand out in docs: stick to prefixes like");
    println!("`of_`, `from_`, `with_`, `new_` so readers can find them.");

    Ok(())
}
