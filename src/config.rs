//! Driver configuration applied by `begin()`
//!
//! The defaults reproduce the device reset state for the input mapping, keep
//! all open-load diagnostic currents off and select Active mode.
//!
//! # Example
//!
//! ```ignore
//! # use tle75008::{DriverConfig, Tle75008Driver};
//! let config = DriverConfig::default()
//!     .with_diagnostic_current(0xFF)
//!     .with_input_mapping(0x00, 0x00);
//! let mut driver = Tle75008Driver::with_config(spi, idle_pin, config);
//! driver.begin(&mut delay)?;
//! ```

use crate::power::{ACTIVE_SETTLE_US, BEGIN_SETTLE_US, SLEEP_SETTLE_US};

/// `MAPIN0` reset value: channel 2 follows IN0
pub const DEFAULT_MAPIN0: u8 = 0x04;

/// `MAPIN1` reset value: channel 3 follows IN1
pub const DEFAULT_MAPIN1: u8 = 0x08;

/// `HWCR` value for Active mode with no reset and no parallel channels
pub const HWCR_ACTIVE_BASELINE: u8 = 0x80;

/// `HWCR.ACT` bit
pub const HWCR_ACT: u8 = 0x80;

/// `HWCR.RST` bit
pub const HWCR_RST: u8 = 0x40;

/// Configuration written during initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Channels driven by input pin IN0 (`MAPIN0`)
    pub mapin0: u8,
    /// Channels driven by input pin IN1 (`MAPIN1`)
    pub mapin1: u8,
    /// Open-load diagnostic current enable mask (`DIAG_IOL`)
    pub diagnostic_current: u8,
    /// `HWCR` value written during initialization
    pub hwcr: u8,
    /// Settle time after raising the mode line in `begin()`, in microseconds
    pub begin_settle_us: u32,
    /// Settle time after lowering the mode line, in microseconds
    pub sleep_settle_us: u32,
    /// Settle time after raising the mode line in `enter_active()`, in microseconds
    pub active_settle_us: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverConfig {
    /// Default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mapin0: DEFAULT_MAPIN0,
            mapin1: DEFAULT_MAPIN1,
            diagnostic_current: 0x00,
            hwcr: HWCR_ACTIVE_BASELINE,
            begin_settle_us: BEGIN_SETTLE_US,
            sleep_settle_us: SLEEP_SETTLE_US,
            active_settle_us: ACTIVE_SETTLE_US,
        }
    }

    /// Set the input pin mapping masks
    #[must_use]
    pub const fn with_input_mapping(mut self, mapin0: u8, mapin1: u8) -> Self {
        self.mapin0 = mapin0;
        self.mapin1 = mapin1;
        self
    }

    /// Set the open-load diagnostic current mask
    #[must_use]
    pub const fn with_diagnostic_current(mut self, mask: u8) -> Self {
        self.diagnostic_current = mask;
        self
    }

    /// Set the parallel channel bits (`HWCR.PAR`, low nibble)
    ///
    /// `HWCR.ACT` stays set; `HWCR.RST` is never written from the configuration.
    #[must_use]
    pub const fn with_parallel_channels(mut self, par: u8) -> Self {
        self.hwcr = HWCR_ACT | (par & 0x0F);
        self
    }

    /// Set all mode-line settle times, in microseconds
    #[must_use]
    pub const fn with_settle_times(mut self, begin_us: u32, sleep_us: u32, active_us: u32) -> Self {
        self.begin_settle_us = begin_us;
        self.sleep_settle_us = sleep_us;
        self.active_settle_us = active_us;
        self
    }
}
