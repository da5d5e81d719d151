//! Operating modes and mode-line timing
//!
//! The TLE75008-ESD mode is selected by the IDLE pin and the `HWCR.ACT` bit:
//! - **Sleep**: IDLE low, all outputs off, SPI inactive, minimum current
//! - **Idle**: IDLE high, `HWCR.ACT` = 0, outputs off, registers accessible
//! - **Limp Home**: entered by the device itself when the input pins take over
//! - **Active**: IDLE high, `HWCR.ACT` = 1, outputs follow `OUT` and the input mapping
//!
//! # Example
//!
//! ```ignore
//! # use tle75008::Tle75008Driver;
//! # let mut driver: Tle75008Driver<_, _> = todo!();
//! driver.enter_sleep(&mut delay)?;
//! // ... later
//! driver.enter_active(&mut delay)?;
//! assert_eq!(driver.mode(), Some(tle75008::DeviceMode::Active));
//! # Ok::<(), tle75008::Error<(), ()>>(())
//! ```

/// Settle time after raising the mode line in `begin()`, in microseconds
pub const BEGIN_SETTLE_US: u32 = 100;

/// Settle time after lowering the mode line in `enter_sleep()`, in microseconds
pub const SLEEP_SETTLE_US: u32 = 100;

/// Settle time after raising the mode line in `enter_active()`, in microseconds
pub const ACTIVE_SETTLE_US: u32 = 50;

/// Device operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMode {
    /// Mode line low, outputs forced off
    Sleep,
    /// Mode line high, `HWCR.ACT` cleared
    Idle,
    /// Outputs controlled by the input pins only
    LimpHome,
    /// Mode line high, `HWCR.ACT` set
    Active,
}

impl DeviceMode {
    /// Whether the device can drive its outputs in this mode
    #[must_use]
    pub const fn drives_outputs(self) -> bool {
        matches!(self, Self::Active | Self::LimpHome)
    }

    /// Whether the SPI interface answers in this mode
    #[must_use]
    pub const fn is_spi_available(self) -> bool {
        !matches!(self, Self::Sleep)
    }
}
