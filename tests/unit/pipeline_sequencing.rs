//! Unit tests for the multi-frame read/write sequences

use crate::common::mock_chip::STALE_RESPONSE;
use crate::common::{DIAG_ACTIVE, Exchange, MockSpi, create_initialized_driver};
use tle75008::{Register, RegisterAddress, SpiInterface};

#[test]
fn test_read_uses_three_exchanges() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.set_register(0x09, 0x05);

    let value = driver.read_register(Register::DiagOsm).unwrap();

    assert_eq!(value, 0x05);
    assert_eq!(spi.frames(), vec![0x4902, 0x0000, 0x0000]);
}

#[test]
fn test_read_output_status_monitor_uses_three_exchanges() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.set_register(0x09, 0x05);

    let osm = driver.read_output_status_monitor().unwrap();

    assert_eq!(osm.bits(), 0x05);
    assert_eq!(spi.exchange_count(), 3);
}

#[test]
fn test_write_uses_two_exchanges() {
    let (mut driver, spi, _pin) = create_initialized_driver();

    driver.write_register(Register::Out, 0x81).unwrap();

    assert_eq!(spi.frames(), vec![0x8081, 0x0000]);
    assert_eq!(spi.register(0x00), 0x81);
}

#[test]
fn test_standard_diagnosis_uses_two_exchanges() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.set_diagnosis(0x5A00);

    let diagnosis = driver.read_standard_diagnosis().unwrap();

    assert_eq!(diagnosis.raw(), 0x5A00);
    assert_eq!(spi.frames(), vec![0x0001, 0x0000]);
}

#[test]
fn test_first_exchange_response_is_discarded() {
    let spi = MockSpi::new();
    spi.set_register(0x00, 0x3C);
    let mut interface = SpiInterface::new(spi.clone());

    let value = interface
        .read_byte(RegisterAddress::from_raw(0x00))
        .unwrap();

    assert_eq!(value, 0x3C);
    assert_eq!(spi.exchanges()[0].received, STALE_RESPONSE);
}

#[test]
fn test_interface_is_drained_after_each_operation() {
    let spi = MockSpi::new();
    let mut interface = SpiInterface::new(spi);
    assert!(interface.is_drained());

    interface
        .write_byte(RegisterAddress::from_raw(0x0C), 0x80)
        .unwrap();
    assert!(interface.is_drained());

    interface
        .read_byte(RegisterAddress::from_raw(0x0C))
        .unwrap();
    assert!(interface.is_drained());

    interface.read_standard_diagnosis().unwrap();
    assert!(interface.is_drained());
}

#[test]
fn test_back_to_back_reads_do_not_leak_responses() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.set_register(0x08, 0x11);
    spi.set_register(0x09, 0x22);
    spi.set_register(0x0D, 0x33);

    assert_eq!(driver.read_register(Register::DiagIol).unwrap(), 0x11);
    assert_eq!(driver.read_register(Register::DiagOsm).unwrap(), 0x22);
    assert_eq!(driver.read_register(Register::HwcrOcl).unwrap(), 0x33);
    assert_eq!(driver.read_register(Register::DiagIol).unwrap(), 0x11);
}

#[test]
fn test_data_frame_carries_address_echo() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.set_register(0x09, 0x05);

    driver.read_register(Register::DiagOsm).unwrap();

    let exchanges = spi.exchanges();
    let data = Exchange {
        sent: 0x0000,
        received: 0x8905,
    };
    assert_eq!(exchanges[1], data);
    assert_eq!(exchanges[2].received, DIAG_ACTIVE);
}

#[test]
fn test_write_captures_its_diagnosis() {
    let (mut driver, spi, _pin) = create_initialized_driver();
    spi.set_diagnosis(0x1200);

    driver.write_outputs(0x01).unwrap();

    let diagnosis = driver.last_diagnosis().unwrap();
    assert_eq!(diagnosis.raw(), 0x1200);
    assert!(diagnosis.open_load_off());
}
