//! 16-bit SPI frame codec for the TLE75008-ESD
//!
//! Every exchange with the device is a single 16-bit frame, MSB first:
//!
//! ```text
//!  15 14 | 13 12 11 10 | 9 8 | 7 6 5 4 3 2 1 0
//!   cmd  |    group    | sub |     payload
//! ```
//!
//! - Write frame: `10 gggg ss dddddddd`
//! - Read request: `01 gggg ss 000000 10`
//! - Standard diagnosis request: `00 0000 00 000000 01`
//!
//! The codec is pure. It knows nothing about the one-frame response latency,
//! which is handled by [`crate::pipeline`].

/// Mask of the 6-bit combined register address
pub const ADDRESS_MASK: u8 = 0x3F;

const COMMAND_SHIFT: u16 = 14;
const ADDRESS_SHIFT: u16 = 8;
const READ_TRAILER: u16 = 0b10;

/// A 6-bit register address built from a 4-bit group and a 2-bit sub field
///
/// The datasheet lists register addresses as `ADDR0` (4 bits) and `ADDR1`
/// (2 bits). They are packed as `(group << 2) | sub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAddress(u8);

impl RegisterAddress {
    /// Pack a group and sub field into a register address
    ///
    /// Bits outside the 4-bit group and 2-bit sub fields are discarded.
    #[must_use]
    pub const fn new(group: u8, sub: u8) -> Self {
        Self(((group & 0x0F) << 2) | (sub & 0x03))
    }

    /// Build an address from an already combined 6-bit value
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw & ADDRESS_MASK)
    }

    /// The 4-bit group field (`ADDR0`)
    #[must_use]
    pub const fn group(self) -> u8 {
        self.0 >> 2
    }

    /// The 2-bit sub field (`ADDR1`)
    #[must_use]
    pub const fn sub(self) -> u8 {
        self.0 & 0x03
    }

    /// The combined 6-bit address
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<RegisterAddress> for u8 {
    fn from(address: RegisterAddress) -> Self {
        address.value()
    }
}

/// Frame command type, bits [15:14]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `00` - no register access (no-op or standard diagnosis request)
    Control = 0b00,
    /// `01` - register read request
    Read = 0b01,
    /// `10` - register write
    Write = 0b10,
    /// `11` - not used by this device
    Reserved = 0b11,
}

/// A single 16-bit frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame(u16);

impl Frame {
    /// All-zero frame used to clock out the pending response
    pub const NOP: Self = Self(0x0000);

    /// Request the standard diagnosis word on the next exchange
    pub const DIAGNOSIS_REQUEST: Self = Self(0x0001);

    /// Wrap a raw 16-bit value
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Encode a register write: `10 aaaaaa dddddddd`
    #[must_use]
    pub const fn write(address: RegisterAddress, value: u8) -> Self {
        Self(
            ((Command::Write as u16) << COMMAND_SHIFT)
                | ((address.value() as u16) << ADDRESS_SHIFT)
                | value as u16,
        )
    }

    /// Encode a register read request: `01 aaaaaa 000000 10`
    #[must_use]
    pub const fn read_request(address: RegisterAddress) -> Self {
        Self(
            ((Command::Read as u16) << COMMAND_SHIFT)
                | ((address.value() as u16) << ADDRESS_SHIFT)
                | READ_TRAILER,
        )
    }

    /// Raw 16-bit value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Command field, bits [15:14]
    #[must_use]
    pub const fn command(self) -> Command {
        match self.0 >> COMMAND_SHIFT {
            0b00 => Command::Control,
            0b01 => Command::Read,
            0b10 => Command::Write,
            _ => Command::Reserved,
        }
    }

    /// Address field, bits [13:8]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // 6-bit field, masked by from_raw
    pub const fn address(self) -> RegisterAddress {
        RegisterAddress::from_raw((self.0 >> ADDRESS_SHIFT) as u8)
    }

    /// Payload field, bits [7:0]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // low byte only
    pub const fn payload(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// Big-endian bytes as they go on the wire
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Reassemble a frame from the two bytes clocked in
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

impl From<Frame> for u16 {
    fn from(frame: Frame) -> Self {
        frame.raw()
    }
}

/// Encode a write frame for a combined address
///
/// Address bits above the 6-bit field are dropped.
#[must_use]
pub const fn encode_write_frame(address: u8, value: u8) -> Frame {
    Frame::write(RegisterAddress::from_raw(address), value)
}

/// Encode a read request frame for a combined address
///
/// Address bits above the 6-bit field are dropped.
#[must_use]
pub const fn encode_read_request_frame(address: u8) -> Frame {
    Frame::read_request(RegisterAddress::from_raw(address))
}

/// Extract the register value from a response frame
///
/// Only the low byte is returned. The echoed command and address bits are not
/// checked; the caller must know which request this response answers.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // low byte only
pub const fn decode_register_value(raw: u16) -> u8 {
    (raw & 0x00FF) as u8
}
