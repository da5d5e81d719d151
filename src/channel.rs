//! Output channels and channel masks
//!
//! Channels are 0-based throughout the driver: channel 0 is bit 0 of every
//! per-channel register. Datasheets and some hosts number outputs 1..=8; use
//! [`channel_from_number`] to convert at the boundary.

/// Number of output channels
pub const CHANNEL_COUNT: u8 = 8;

/// Convert a 1-based output number (1..=8) to a 0-based channel index
///
/// Returns `None` for 0 and for numbers above 8.
#[must_use]
pub const fn channel_from_number(number: u8) -> Option<u8> {
    match number {
        1..=CHANNEL_COUNT => Some(number - 1),
        _ => None,
    }
}

/// Check a 0-based channel index
#[must_use]
pub const fn is_valid_channel(channel: u8) -> bool {
    channel < CHANNEL_COUNT
}

/// 8-bit per-channel mask, bit n = channel n
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMask(u8);

impl ChannelMask {
    /// No channel set
    pub const NONE: Self = Self(0x00);
    /// All eight channels set
    pub const ALL: Self = Self(0xFF);

    /// Wrap a raw register value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Mask with a single channel set
    ///
    /// Returns `None` if the channel is out of range.
    #[must_use]
    pub const fn single(channel: u8) -> Option<Self> {
        if is_valid_channel(channel) {
            Some(Self(1 << channel))
        } else {
            None
        }
    }

    /// Raw register value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether a channel is set; out-of-range channels are never set
    #[must_use]
    pub const fn contains(self, channel: u8) -> bool {
        is_valid_channel(channel) && (self.0 >> channel) & 1 == 1
    }

    /// Copy of this mask with one channel set or cleared
    ///
    /// Out-of-range channels leave the mask unchanged.
    #[must_use]
    pub const fn with(self, channel: u8, on: bool) -> Self {
        if !is_valid_channel(channel) {
            return self;
        }
        if on {
            Self(self.0 | (1 << channel))
        } else {
            Self(self.0 & !(1 << channel))
        }
    }

    /// Number of channels set
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether no channel is set
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for ChannelMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<ChannelMask> for u8 {
    fn from(mask: ChannelMask) -> Self {
        mask.0
    }
}

/// Input pins that can be mapped onto output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputPin {
    /// IN0, mapped through `MAPIN0`
    In0,
    /// IN1, mapped through `MAPIN1`
    In1,
}
