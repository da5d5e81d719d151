//! Unit tests for error propagation and recovery

use crate::common::mock_chip::MockPinError;
use crate::common::test_utils::MockDelay;
use crate::common::{MockError, create_initialized_driver, create_mock_driver};
use tle75008::{Error, Register};

#[test]
fn test_bus_error_on_write_propagates() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.fail_next_exchange();

    let result = driver.write_outputs(0x01);

    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
    assert_eq!(spi.register(0x00), 0x00);
}

#[test]
fn test_bus_error_on_read_propagates() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.fail_next_exchange();

    let result = driver.read_outputs();

    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
}

#[test]
fn test_bus_error_on_diagnosis_propagates() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.fail_exchange_at(1);

    let result = driver.read_standard_diagnosis();

    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
}

#[test]
fn test_recovers_after_failure_mid_read() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.set_register(0x09, 0x42);
    spi.set_register(0x08, 0x17);

    // Data exchange of the first read fails
    spi.fail_exchange_at(1);
    assert!(driver.read_register(Register::DiagOsm).is_err());

    assert_eq!(driver.read_register(Register::DiagIol).unwrap(), 0x17);
    assert_eq!(driver.read_register(Register::DiagOsm).unwrap(), 0x42);
}

#[test]
fn test_recovers_after_failure_mid_write() {
    let (mut driver, spi, _pin) = create_initialized_driver();

    // The write frame reaches the device, its drain does not
    spi.fail_exchange_at(1);
    assert!(driver.write_outputs(0x0F).is_err());
    assert_eq!(spi.register(0x00), 0x0F);

    driver.set_channel(7, true).unwrap();
    assert_eq!(spi.register(0x00), 0x8F);
}

#[test]
fn test_begin_aborts_on_bus_error() {
    let (mut driver, spi, _pin) = create_mock_driver();
    spi.fail_exchange_at(4);

    let result = driver.begin(&mut MockDelay);

    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
    assert_eq!(driver.mode(), None);
    // Only the latch clear and MAPIN0 went out
    assert_eq!(spi.writes(), vec![(0x0D, 0xFF), (0x04, 0x04)]);
}

#[test]
fn test_pin_error_on_begin() {
    let (mut driver, spi, pin) = create_mock_driver();
    pin.fail_next();

    let result = driver.begin(&mut MockDelay);

    assert!(matches!(result, Err(Error::Pin(MockPinError))));
    assert_eq!(spi.exchange_count(), 0);
    assert_eq!(driver.mode(), None);
}

#[test]
fn test_pin_error_on_sleep() {
    let (mut driver, spi, pin) = create_initialized_driver();
    driver.write_outputs(0xFF).unwrap();
    pin.fail_next();

    let result = driver.enter_sleep(&mut MockDelay);

    assert!(matches!(result, Err(Error::Pin(MockPinError))));
    // Outputs were switched off before the pin was touched
    assert_eq!(spi.register(0x00), 0x00);
    assert_eq!(pin.is_high(), Some(true));
}
