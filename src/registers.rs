//! Register definitions for the TLE75008-ESD
//!
//! All registers are 8 bits wide and addressed by a 6-bit combined address
//! `(ADDR0 << 2) | ADDR1` (see [`RegisterAddress`]). [`REGISTER_MAP`] is the
//! single table from symbolic name to address; the typed register block below
//! uses the same addresses.
//!
//! ## Register Map
//!
//! | Register   | ADDR0 | ADDR1 | Address | Purpose                              |
//! |------------|-------|-------|---------|--------------------------------------|
//! | `OUT`      | 0000  | 00    | 0x00    | Output control, one bit per channel  |
//! | `MAPIN0`   | 0001  | 00    | 0x04    | Channels driven by input pin IN0     |
//! | `MAPIN1`   | 0001  | 01    | 0x05    | Channels driven by input pin IN1     |
//! | `INST`     | 0001  | 10    | 0x06    | Input pin status                     |
//! | `DIAG_IOL` | 0010  | 00    | 0x08    | Open-load diagnostic current enable  |
//! | `DIAG_OSM` | 0010  | 01    | 0x09    | Output status monitor                |
//! | `HWCR`     | 0011  | 00    | 0x0C    | Hardware configuration               |
//! | `HWCR_OCL` | 0011  | 01    | 0x0D    | Output clear latch (write 1 to clear)|

use crate::frame::RegisterAddress;

/// Well-known device registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// `OUT` - output control
    Out,
    /// `MAPIN0` - input mapping for pin IN0
    MapIn0,
    /// `MAPIN1` - input mapping for pin IN1
    MapIn1,
    /// `INST` - input status
    Inst,
    /// `DIAG_IOL` - open-load diagnostic current enable
    DiagIol,
    /// `DIAG_OSM` - output status monitor
    DiagOsm,
    /// `HWCR` - hardware configuration
    Hwcr,
    /// `HWCR_OCL` - output clear latch
    HwcrOcl,
}

/// Symbolic register name to combined address
pub const REGISTER_MAP: [(Register, RegisterAddress); 8] = [
    (Register::Out, RegisterAddress::new(0x0, 0)),
    (Register::MapIn0, RegisterAddress::new(0x1, 0)),
    (Register::MapIn1, RegisterAddress::new(0x1, 1)),
    (Register::Inst, RegisterAddress::new(0x1, 2)),
    (Register::DiagIol, RegisterAddress::new(0x2, 0)),
    (Register::DiagOsm, RegisterAddress::new(0x2, 1)),
    (Register::Hwcr, RegisterAddress::new(0x3, 0)),
    (Register::HwcrOcl, RegisterAddress::new(0x3, 1)),
];

impl Register {
    /// All registers in address order
    pub const ALL: [Self; 8] = [
        Self::Out,
        Self::MapIn0,
        Self::MapIn1,
        Self::Inst,
        Self::DiagIol,
        Self::DiagOsm,
        Self::Hwcr,
        Self::HwcrOcl,
    ];

    /// Combined 6-bit address of this register
    #[must_use]
    pub const fn address(self) -> RegisterAddress {
        REGISTER_MAP[self as usize].1
    }

    /// Look up the register at a combined address
    #[must_use]
    pub fn from_address(address: RegisterAddress) -> Option<Self> {
        REGISTER_MAP
            .iter()
            .find(|(_, a)| *a == address)
            .map(|(register, _)| *register)
    }

    /// Datasheet name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Out => "OUT",
            Self::MapIn0 => "MAPIN0",
            Self::MapIn1 => "MAPIN1",
            Self::Inst => "INST",
            Self::DiagIol => "DIAG_IOL",
            Self::DiagOsm => "DIAG_OSM",
            Self::Hwcr => "HWCR",
            Self::HwcrOcl => "HWCR_OCL",
        }
    }
}

// ADDRESS values below must match REGISTER_MAP
device_driver::create_device!(
    device_name: Tle75008,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// OUT - Output Control (ADDR0=0000, ADDR1=00)
        register Out {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// Channel state, bit n = channel n (1 = ON)
            channels: uint = 0..8,
        },

        /// MAPIN0 - Input Mapping IN0 (ADDR0=0001, ADDR1=00)
        /// Reset value 0x04 (channel 2)
        register InputMap0 {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;

            /// Channels additionally controlled by IN0
            channels: uint = 0..8,
        },

        /// MAPIN1 - Input Mapping IN1 (ADDR0=0001, ADDR1=01)
        /// Reset value 0x08 (channel 3)
        register InputMap1 {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            /// Channels additionally controlled by IN1
            channels: uint = 0..8,
        },

        /// INST - Input Status (ADDR0=0001, ADDR1=10)
        register InputStatus {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            /// Level of input pins IN0 (bit 0) and IN1 (bit 1)
            input_pins: uint = 0..2,
            reserved_6_2: uint = 2..7,
            /// Transmission error in the previous frame
            ter: bool = 7,
        },

        /// `DIAG_IOL` - Open-Load Diagnostic Current Enable (ADDR0=0010, ADDR1=00)
        register DiagIol {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            /// Diagnostic current source enable, bit n = channel n
            current_enable: uint = 0..8,
        },

        /// `DIAG_OSM` - Output Status Monitor (ADDR0=0010, ADDR1=01)
        register DiagOsm {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;

            /// 1 = drain-source voltage below the monitor threshold, bit n = channel n
            below_threshold: uint = 0..8,
        },

        /// HWCR - Hardware Configuration (ADDR0=0011, ADDR1=00)
        register Hwcr {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;

            /// Parallel channel operation
            par: uint = 0..4,
            reserved_5_4: uint = 4..6,
            /// Software reset, registers return to their reset values
            rst: bool = 6,
            /// Active mode (1) or Idle mode (0) while IDLE pin is high
            act: bool = 7,
        },

        /// `HWCR_OCL` - Output Clear Latch (ADDR0=0011, ADDR1=01)
        /// Reads return latched errors, writing 1 clears the latch for that channel
        register HwcrOcl {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;

            /// Latched error per channel, bit n = channel n
            latch: uint = 0..8,
        },
    }
);

// Re-export commonly used types for convenience
pub use Tle75008 as RegisterDevice;
