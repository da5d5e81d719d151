//! Test utilities and helper functions

use crate::common::mock_chip::{MockPin, MockSpi};
use tle75008::Tle75008Driver;

/// Mock delay implementation for testing
///
/// This is a no-op delay that implements the embedded-hal DelayNs trait
/// for use in tests where actual delays are not needed.
#[derive(Debug, Clone, Copy)]
pub struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // No-op for testing
    }
}

/// Delay that adds up every requested wait
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingDelay {
    /// Total requested delay in nanoseconds
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Mock driver type used throughout the tests
pub type MockDriver = Tle75008Driver<MockSpi, MockPin>;

/// Create a mock driver for testing
/// Returns (driver, spi, pin) where spi and pin are clones that share state with the driver
pub fn create_mock_driver() -> (MockDriver, MockSpi, MockPin) {
    let spi = MockSpi::new();
    let pin = MockPin::new();
    let driver = Tle75008Driver::new(spi.clone(), pin.clone());
    (driver, spi, pin)
}

/// Create a mock driver that has already run `begin()`, with an empty exchange log
pub fn create_initialized_driver() -> (MockDriver, MockSpi, MockPin) {
    let (mut driver, spi, pin) = create_mock_driver();
    driver
        .begin(&mut MockDelay)
        .expect("Failed to initialize mock driver");
    spi.clear_exchanges();
    (driver, spi, pin)
}
