//! Pattern 5: Dependency Injection
//!
//! A car should not decide where its wheels come from. Passing the factory in
//! keeps the car loosely coupled and easy to test with a double.

use std::fmt;
use tracing::debug;

use crate::section;

// ============================================================================
// Example: Factory traits
// ============================================================================

/// A generic factory; `create` may or may not return a fresh value.
pub trait AbstractFactory<T> {
    fn create(&self) -> T;
}

/// A circular object that turns when a vehicle is moving.
pub trait Wheel: fmt::Debug {
    fn diameter_inches(&self) -> u8;
}

/// A factory for producing wheels.
pub trait WheelFactory: AbstractFactory<Box<dyn Wheel>> {}

impl<F: AbstractFactory<Box<dyn Wheel>>> WheelFactory for F {}

// ============================================================================
// Example: The dependent type
// ============================================================================

pub const WHEEL_COUNT: usize = 4;

/// A road vehicle with (usually) four wheels.
pub struct Car<F: WheelFactory> {
    wheel_factory: F,
    wheels: Vec<Box<dyn Wheel>>,
}

impl<F: WheelFactory> Car<F> {
    pub fn new(wheel_factory: F) -> Self {
        Car {
            wheel_factory,
            wheels: Vec::new(),
        }
    }

    /// Fits all wheels from the injected factory, replacing any old ones.
    pub fn assemble(&mut self) {
        self.wheels = (0..WHEEL_COUNT).map(|_| self.wheel_factory.create()).collect();
        debug!(wheels = self.wheels.len(), "car assembled");
    }

    pub fn wheels(&self) -> &[Box<dyn Wheel>] {
        &self.wheels
    }
}

// ============================================================================
// Example: One production implementation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlloyWheel {
    diameter: u8,
}

impl Wheel for AlloyWheel {
    fn diameter_inches(&self) -> u8 {
        self.diameter
    }
}

pub struct AlloyWheelFactory {
    pub diameter: u8,
}

impl AbstractFactory<Box<dyn Wheel>> for AlloyWheelFactory {
    fn create(&self) -> Box<dyn Wheel> {
        Box::new(AlloyWheel {
            diameter: self.diameter,
        })
    }
}

pub fn run_demo() {
    section("Injected Wheel Factory");
    let mut car = Car::new(AlloyWheelFactory { diameter: 17 });
    car.assemble();
    for (i, wheel) in car.wheels().iter().enumerate() {
        println!("wheel {}: {:?} ({}\")", i, wheel, wheel.diameter_inches());
    }
    println!("\nTests swap AlloyWheelFactory for a double; Car never changes.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::cell::Cell;

    mock! {
        pub WheelSource {}

        impl AbstractFactory<Box<dyn Wheel>> for WheelSource {
            fn create(&self) -> Box<dyn Wheel>;
        }
    }

    #[derive(Debug)]
    struct TestWheel;

    impl Wheel for TestWheel {
        fn diameter_inches(&self) -> u8 {
            1
        }
    }

    struct CountingFactory {
        calls: Cell<usize>,
    }

    impl AbstractFactory<Box<dyn Wheel>> for CountingFactory {
        fn create(&self) -> Box<dyn Wheel> {
            self.calls.set(self.calls.get() + 1);
            Box::new(TestWheel)
        }
    }

    #[test]
    fn test_car_uses_injected_factory() {
        let mut source = MockWheelSource::new();
        source
            .expect_create()
            .times(WHEEL_COUNT)
            .returning(|| Box::new(TestWheel));

        let mut car = Car::new(source);
        car.assemble();

        assert_eq!(car.wheels().len(), WHEEL_COUNT);
        assert!(car.wheels().iter().all(|w| w.diameter_inches() == 1));
    }

    #[test]
    fn test_reassembly_replaces_wheels() {
        let mut car = Car::new(CountingFactory { calls: Cell::new(0) });
        assert!(car.wheels().is_empty());

        car.assemble();
        car.assemble();

        assert_eq!(car.wheels().len(), WHEEL_COUNT);
        assert_eq!(car.wheel_factory.calls.get(), 2 * WHEEL_COUNT);
    }

    #[test]
    fn test_alloy_factory() {
        let mut car = Car::new(AlloyWheelFactory { diameter: 18 });
        car.assemble();
        assert!(car.wheels().iter().all(|w| w.diameter_inches() == 18));
    }
}
