//! Unit tests for power-up, sleep, wake and reset

use crate::common::test_utils::{CountingDelay, MockDelay};
use crate::common::{MockPin, MockSpi, create_initialized_driver, create_mock_driver};
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use tle75008::{DeviceMode, DriverConfig, Tle75008Driver};

#[test]
fn test_begin_write_sequence() {
    let (mut driver, spi, pin) = create_mock_driver();
    assert_eq!(driver.mode(), None);

    driver.begin(&mut MockDelay).unwrap();

    let expected = vec![
        (0x0D, 0xFF),
        (0x04, 0x04),
        (0x05, 0x08),
        (0x08, 0x00),
        (0x0C, 0x80),
        (0x00, 0x00),
    ];
    assert_eq!(spi.writes(), expected);
    // Every write is followed by exactly one no-op
    assert_eq!(spi.exchange_count(), 12);
    assert_eq!(pin.history(), vec![true]);
    assert_eq!(driver.mode(), Some(DeviceMode::Active));
}

#[test]
fn test_begin_with_custom_config() {
    let spi = MockSpi::new();
    let pin = MockPin::new();
    let config = DriverConfig::default()
        .with_input_mapping(0x11, 0x22)
        .with_diagnostic_current(0xFF)
        .with_parallel_channels(0x05);
    let mut driver = Tle75008Driver::with_config(spi.clone(), pin, config);

    driver.begin(&mut MockDelay).unwrap();

    let expected = vec![
        (0x0D, 0xFF),
        (0x04, 0x11),
        (0x05, 0x22),
        (0x08, 0xFF),
        (0x0C, 0x85),
        (0x00, 0x00),
    ];
    assert_eq!(spi.writes(), expected);
    assert_eq!(driver.config().diagnostic_current, 0xFF);
}

#[test]
fn test_begin_switches_outputs_off() {
    let (mut driver, spi, _pin) = create_mock_driver();
    spi.set_register(0x00, 0xFF);

    driver.begin(&mut MockDelay).unwrap();

    assert_eq!(spi.register(0x00), 0x00);
}

#[test]
fn test_enter_sleep() {
    let (mut driver, spi, pin) = create_initialized_driver();
    driver.write_outputs(0xA5).unwrap();
    spi.clear_exchanges();

    driver.enter_sleep(&mut MockDelay).unwrap();

    assert_eq!(spi.register(0x00), 0x00);
    assert_eq!(spi.writes(), vec![(0x00, 0x00)]);
    assert_eq!(pin.is_high(), Some(false));
    assert_eq!(driver.mode(), Some(DeviceMode::Sleep));
}

#[test]
fn test_enter_active_sets_act() {
    let (mut driver, spi, pin) = create_initialized_driver();
    driver.enter_sleep(&mut MockDelay).unwrap();
    // Device came back in Idle with PAR configured
    spi.set_register(0x0C, 0x03);

    driver.enter_active(&mut MockDelay).unwrap();

    assert_eq!(spi.register(0x0C), 0x83);
    assert_eq!(pin.is_high(), Some(true));
    assert_eq!(driver.mode(), Some(DeviceMode::Active));
}

#[test]
fn test_enter_active_is_idempotent() {
    let (mut driver, spi, _pin) = create_initialized_driver();

    driver.enter_active(&mut MockDelay).unwrap();
    let after_first = spi.register(0x0C);
    driver.enter_active(&mut MockDelay).unwrap();

    assert_eq!(after_first, 0x80);
    assert_eq!(spi.register(0x0C), after_first);
    assert_eq!(spi.writes(), vec![(0x0C, 0x80), (0x0C, 0x80)]);
}

#[test]
fn test_software_reset() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    driver.write_outputs(0xFF).unwrap();
    spi.set_register(0x04, 0x00);
    spi.clear_exchanges();

    driver.software_reset().unwrap();

    assert_eq!(spi.writes(), vec![(0x0C, 0x40)]);
    assert_eq!(spi.register(0x00), 0x00);
    assert_eq!(spi.register(0x04), 0x04);
    assert_eq!(driver.mode(), Some(DeviceMode::Idle));
}

#[test]
fn test_settle_delays() {
    let (mut driver, _spi, _pin) = create_mock_driver();
    let mut delay = CountingDelay::default();

    driver.begin(&mut delay).unwrap();
    assert_eq!(delay.total_ns, 100_000);

    driver.enter_sleep(&mut delay).unwrap();
    assert_eq!(delay.total_ns, 200_000);

    driver.enter_active(&mut delay).unwrap();
    assert_eq!(delay.total_ns, 250_000);
}

#[test]
fn test_custom_settle_delays() {
    let config = DriverConfig::new().with_settle_times(10, 20, 30);
    let mut driver = Tle75008Driver::with_config(MockSpi::new(), MockPin::new(), config);
    let mut delay = CountingDelay::default();

    driver.begin(&mut delay).unwrap();
    driver.enter_sleep(&mut delay).unwrap();
    driver.enter_active(&mut delay).unwrap();

    assert_eq!(delay.total_ns, 60_000);
}

#[test]
fn test_release_returns_resources() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    driver.write_outputs(0x01).unwrap();

    let (mut released_spi, mut released_pin) = driver.release();

    released_pin.set_low().unwrap();
    let mut rx = [0u8; 2];
    released_spi.transfer(&mut rx, &[0x00, 0x00]).unwrap();
    assert_eq!(spi.exchange_count(), 3);
}
