#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod channel;
pub mod config;
pub mod device;
pub mod diagnosis;
pub mod frame;
pub mod interface;
pub mod pipeline;
pub mod power;
pub mod registers;

// Re-export main types
pub use channel::{CHANNEL_COUNT, ChannelMask, InputPin, channel_from_number};
pub use config::DriverConfig;
pub use device::Tle75008Driver;
pub use diagnosis::{InputStatus, StandardDiagnosis};
pub use frame::{
    Frame, RegisterAddress, decode_register_value, encode_read_request_frame, encode_write_frame,
};
pub use interface::SpiInterface;
pub use power::DeviceMode;
pub use registers::{REGISTER_MAP, Register};

/// Bits per SPI frame
pub const FRAME_BITS: u32 = 16;

/// Maximum SPI clock frequency (VDD above 4.5 V)
pub const MAX_SPI_FREQUENCY_HZ: u32 = 5_000_000;

/// SPI mode: data sampled on the falling edge, shifted out on the rising edge
/// (CPOL = 0, CPHA = 1)
pub const SPI_MODE: embedded_hal::spi::Mode = embedded_hal::spi::MODE_1;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<B, P> {
    /// Communication error on the SPI bus, passed through unchanged
    Bus(B),
    /// Error driving the IDLE mode-control pin
    Pin(P),
}

impl<B, P> From<B> for Error<B, P> {
    fn from(error: B) -> Self {
        Self::Bus(error)
    }
}
