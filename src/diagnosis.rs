//! Standard diagnosis word
//!
//! The device answers every frame that is not a register read with the
//! standard diagnosis. It is obtained explicitly with
//! `read_standard_diagnosis()` and is also captured from the drain exchange
//! of every register write.
//!
//! ```text
//!  15 | 14    | 13     | 12 11 | 10  | 9     | 8 | 7 .. 0
//!   0 | UVRVS | LOPVDD | MODE  | TER | OLOFF | 0 | ERR7 .. ERR0
//! ```

use crate::channel::ChannelMask;
use crate::power::DeviceMode;

const UVRVS: u16 = 1 << 14;
const LOPVDD: u16 = 1 << 13;
const MODE_SHIFT: u16 = 11;
const TER: u16 = 1 << 10;
const OLOFF: u16 = 1 << 9;

/// Raw standard diagnosis word with field accessors
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StandardDiagnosis(u16);

impl StandardDiagnosis {
    /// Wrap a raw 16-bit response
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw 16-bit word
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Undervoltage at VS has been detected
    #[must_use]
    pub const fn undervoltage(self) -> bool {
        self.0 & UVRVS != 0
    }

    /// Logic supply VDD below the operating range
    #[must_use]
    pub const fn low_vdd(self) -> bool {
        self.0 & LOPVDD != 0
    }

    /// Operating mode reported by the device
    ///
    /// Returns `None` for the reserved encoding. A sleeping device does not
    /// answer at all, so [`DeviceMode::Sleep`] is never reported.
    #[must_use]
    pub const fn mode(self) -> Option<DeviceMode> {
        match (self.0 >> MODE_SHIFT) & 0b11 {
            0b01 => Some(DeviceMode::LimpHome),
            0b10 => Some(DeviceMode::Active),
            0b11 => Some(DeviceMode::Idle),
            _ => None,
        }
    }

    /// The previous frame was not a valid 16-bit frame
    #[must_use]
    pub const fn transmission_error(self) -> bool {
        self.0 & TER != 0
    }

    /// Output status monitor reports a possible open load in OFF state
    #[must_use]
    pub const fn open_load_off(self) -> bool {
        self.0 & OLOFF != 0
    }

    /// Latched error flags, bit n = channel n
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // ERRn bits are the low byte
    pub const fn errors(self) -> ChannelMask {
        ChannelMask::from_bits((self.0 & 0x00FF) as u8)
    }

    /// Whether a channel has a latched error
    #[must_use]
    pub const fn has_error(self, channel: u8) -> bool {
        self.errors().contains(channel)
    }
}

impl From<u16> for StandardDiagnosis {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// Contents of the `INST` register
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputStatus {
    /// Level of input pin IN0
    pub in0: bool,
    /// Level of input pin IN1
    pub in1: bool,
    /// The device flagged a transmission error
    pub transmission_error: bool,
}

impl InputStatus {
    /// Build from the `INST` input pin field and TER bit
    #[must_use]
    pub const fn new(input_pins: u8, transmission_error: bool) -> Self {
        Self {
            in0: input_pins & 0b01 != 0,
            in1: input_pins & 0b10 != 0,
            transmission_error,
        }
    }
}
