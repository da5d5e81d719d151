//! Unit tests for frame encoding against a transport

use crate::common::MockSpi;
use tle75008::frame::Command;
use tle75008::{
    Frame, RegisterAddress, SpiInterface, decode_register_value, encode_read_request_frame,
    encode_write_frame,
};

#[test]
fn test_write_frame_echo_decodes_to_written_value() {
    let spi = MockSpi::echo();
    let mut interface = SpiInterface::new(spi.clone());

    for address in 0..=0x3F_u8 {
        for value in [0x00, 0x01, 0x5A, 0x80, 0xA5, 0xFE, 0xFF, address] {
            // The drain exchange clocks back the write frame itself
            let echoed = interface
                .write_byte(RegisterAddress::from_raw(address), value)
                .unwrap();

            assert_eq!(echoed.raw(), encode_write_frame(address, value).raw());
            assert_eq!(decode_register_value(echoed.raw()), value);
        }
    }
}

#[test]
fn test_every_value_survives_the_echo() {
    let spi = MockSpi::echo();
    let mut interface = SpiInterface::new(spi);
    let address = RegisterAddress::new(0x2, 1);

    for value in 0..=u8::MAX {
        let echoed = interface.write_byte(address, value).unwrap();
        assert_eq!(decode_register_value(echoed.raw()), value);
    }
}

#[test]
fn test_frames_on_the_wire_are_msb_first() {
    let spi = MockSpi::new();
    let mut interface = SpiInterface::new(spi.clone());

    interface
        .write_byte(RegisterAddress::new(0x3, 0), 0x80)
        .unwrap();

    assert_eq!(spi.frames(), vec![0x8C80, 0x0000]);
}

#[test]
fn test_read_request_trailer_bits() {
    for address in 0..=0x3F_u8 {
        let frame = encode_read_request_frame(address);
        assert_eq!(frame.command(), Command::Read);
        assert_eq!(frame.address().value(), address);
        assert_eq!(frame.raw() & 0x00FF, 0x0002);
    }
}

#[test]
fn test_frame_field_round_trip() {
    let frame = Frame::write(RegisterAddress::new(0xF, 3), 0x3C);
    assert_eq!(frame.address().group(), 0xF);
    assert_eq!(frame.address().sub(), 3);
    assert_eq!(frame.payload(), 0x3C);
    assert_eq!(Frame::from_raw(frame.raw()), frame);
}
