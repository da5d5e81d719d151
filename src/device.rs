//! High-level driver API for the TLE75008-ESD
//!
//! This module provides the channel, diagnostic and lifecycle interface on top
//! of the typed register block. Register accesses go through [`SpiInterface`],
//! which handles the one-frame response latency of the device.
//!
//! Channel indices are 0-based (0..=7). Out-of-range indices are ignored:
//! setters do nothing and status queries return `false`, without touching the
//! bus. [`Tle75008Driver::toggle_output`] is the 1-based entry point.

use crate::Error;
use crate::channel::{ChannelMask, InputPin, channel_from_number, is_valid_channel};
use crate::config::DriverConfig;
use crate::diagnosis::{InputStatus, StandardDiagnosis};
use crate::interface::SpiInterface;
use crate::power::DeviceMode;
use crate::registers::{Register, RegisterDevice};

use embedded_hal::digital::OutputPin;

/// Main driver for the TLE75008-ESD
///
/// Owns the SPI device (and with it the chip-select line) and the IDLE
/// mode-control pin. Each method runs one complete frame sequence, so the
/// `&mut self` receiver is what keeps operations from interleaving.
pub struct Tle75008Driver<SPI, MODE> {
    device: RegisterDevice<SpiInterface<SPI>>,
    mode_pin: MODE,
    config: DriverConfig,
    mode: Option<DeviceMode>,
}

impl<SPI, MODE> Tle75008Driver<SPI, MODE> {
    /// Create a new driver with the default configuration
    ///
    /// No bus traffic happens until [`begin()`](Self::begin) is called.
    #[must_use]
    pub fn new(spi: SPI, mode_pin: MODE) -> Self {
        Self::with_config(spi, mode_pin, DriverConfig::default())
    }

    /// Create a new driver with a custom configuration
    #[must_use]
    pub fn with_config(spi: SPI, mode_pin: MODE, config: DriverConfig) -> Self {
        Self {
            device: RegisterDevice::new(SpiInterface::new(spi)),
            mode_pin,
            config,
            mode: None,
        }
    }

    /// Mode the driver last commanded, `None` before `begin()`
    #[must_use]
    pub const fn mode(&self) -> Option<DeviceMode> {
        self.mode
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Standard diagnosis captured by the most recent register access
    #[must_use]
    pub const fn last_diagnosis(&self) -> Option<StandardDiagnosis> {
        self.device.interface.last_diagnosis()
    }

    /// Consume the driver and return the SPI device and mode pin
    #[must_use]
    pub fn release(self) -> (SPI, MODE) {
        (self.device.interface.release(), self.mode_pin)
    }

    fn mapping_register(pin: InputPin) -> Register {
        match pin {
            InputPin::In0 => Register::MapIn0,
            InputPin::In1 => Register::MapIn1,
        }
    }
}

#[cfg(not(feature = "async"))]
impl<SPI, MODE> Tle75008Driver<SPI, MODE>
where
    SPI: embedded_hal::spi::SpiDevice,
    MODE: OutputPin,
{
    /// Bring the device up and apply the configuration
    ///
    /// Raises the IDLE pin, waits for the device to settle and runs
    /// [`initialize_device()`](Self::initialize_device). The device ends in
    /// Active mode with all outputs off.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode pin or the SPI bus fails.
    pub fn begin<D>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error, MODE::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.mode_pin.set_high().map_err(Error::Pin)?;
        delay.delay_us(self.config.begin_settle_us);

        self.initialize_device()?;
        self.mode = Some(DeviceMode::Active);

        #[cfg(feature = "defmt")]
        defmt::info!("TLE75008 initialized");

        Ok(())
    }

    /// Write the initial register configuration
    ///
    /// The order is fixed: latched errors are cleared before diagnostics are
    /// enabled so that transient start-up states cannot latch new errors.
    /// 1. `HWCR_OCL` = 0xFF (clear all latches)
    /// 2. `MAPIN0`, `MAPIN1` = configured input mapping
    /// 3. `DIAG_IOL` = configured diagnostic current mask
    /// 4. `HWCR` = configured baseline (Active)
    /// 5. `OUT` = 0x00
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn initialize_device(&mut self) -> Result<(), Error<SPI::Error, MODE::Error>> {
        let config = self.config;

        self.clear_all_errors()?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "TLE75008 input mapping MAPIN0={=u8:#x} MAPIN1={=u8:#x}",
            config.mapin0,
            config.mapin1
        );
        self.device.input_map_0().write(|w| {
            w.set_channels(config.mapin0);
        })?;
        self.device.input_map_1().write(|w| {
            w.set_channels(config.mapin1);
        })?;

        self.device.diag_iol().write(|w| {
            w.set_current_enable(config.diagnostic_current);
        })?;

        self.device.hwcr().write(|w| {
            w.set_act(config.hwcr & crate::config::HWCR_ACT != 0);
            w.set_par(config.hwcr & 0x0F);
        })?;

        self.device.out().write(|w| {
            w.set_channels(0x00);
        })?;

        Ok(())
    }

    /// Turn all outputs off and put the device to sleep
    ///
    /// # Errors
    ///
    /// Returns an error if the SPI bus or the mode pin fails.
    pub fn enter_sleep<D>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error, MODE::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.device.out().write(|w| {
            w.set_channels(0x00);
        })?;

        self.mode_pin.set_low().map_err(Error::Pin)?;
        delay.delay_us(self.config.sleep_settle_us);
        self.mode = Some(DeviceMode::Sleep);

        #[cfg(feature = "defmt")]
        defmt::debug!("TLE75008 entered sleep");

        Ok(())
    }

    /// Wake the device and select Active mode
    ///
    /// Raises the IDLE pin and sets `HWCR.ACT`, leaving the other `HWCR`
    /// bits untouched. Calling it again has no further effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the SPI bus or the mode pin fails.
    pub fn enter_active<D>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error, MODE::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.mode_pin.set_high().map_err(Error::Pin)?;
        delay.delay_us(self.config.active_settle_us);

        self.device.hwcr().modify(|w| {
            w.set_act(true);
        })?;
        self.mode = Some(DeviceMode::Active);

        #[cfg(feature = "defmt")]
        defmt::debug!("TLE75008 entered active");

        Ok(())
    }

    /// Trigger a software reset through `HWCR.RST`
    ///
    /// All registers return to their reset values and the device drops to
    /// Idle mode. Call [`enter_active()`](Self::enter_active) or
    /// [`initialize_device()`](Self::initialize_device) afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn software_reset(&mut self) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.device.hwcr().write(|w| {
            w.set_rst(true);
        })?;
        self.mode = Some(DeviceMode::Idle);

        #[cfg(feature = "defmt")]
        defmt::warn!("TLE75008 software reset");

        Ok(())
    }

    /// Read the `OUT` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_outputs(&mut self) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let out = self.device.out().read()?;
        Ok(ChannelMask::from_bits(out.channels()))
    }

    /// Write all eight outputs at once
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_outputs(
        &mut self,
        mask: impl Into<ChannelMask>,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        let bits = mask.into().bits();
        self.device.out().write(|w| {
            w.set_channels(bits);
        })?;
        Ok(())
    }

    /// Switch one channel (0..=7) on or off, leaving the others unchanged
    ///
    /// The current `OUT` value is read back from the device before writing.
    /// Out-of-range channels are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_channel(
        &mut self,
        channel: u8,
        on: bool,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        if !is_valid_channel(channel) {
            #[cfg(feature = "defmt")]
            defmt::warn!("TLE75008 ignoring channel {}", channel);
            return Ok(());
        }

        let current = self.read_outputs()?;
        self.write_outputs(current.with(channel, on))
    }

    /// Switch one output by its 1-based number (1..=8)
    ///
    /// Numbers outside 1..=8 are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn toggle_output(
        &mut self,
        number: u8,
        on: bool,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        match channel_from_number(number) {
            Some(channel) => self.set_channel(channel, on),
            None => Ok(()),
        }
    }

    /// Clear the latched errors of all channels
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clear_all_errors(&mut self) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.write_error_clear(ChannelMask::ALL)
    }

    /// Clear the latched error of one channel (0..=7)
    ///
    /// Out-of-range channels are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clear_error(&mut self, channel: u8) -> Result<(), Error<SPI::Error, MODE::Error>> {
        match ChannelMask::single(channel) {
            Some(mask) => self.write_error_clear(mask),
            None => Ok(()),
        }
    }

    fn write_error_clear(
        &mut self,
        mask: ChannelMask,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.device.hwcr_ocl().write(|w| {
            w.set_latch(mask.bits());
        })?;
        Ok(())
    }

    /// Read the standard diagnosis word
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_standard_diagnosis(
        &mut self,
    ) -> Result<StandardDiagnosis, Error<SPI::Error, MODE::Error>> {
        Ok(self.device.interface.read_standard_diagnosis()?)
    }

    /// Operating mode reported by the device in its standard diagnosis
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_device_mode(
        &mut self,
    ) -> Result<Option<DeviceMode>, Error<SPI::Error, MODE::Error>> {
        Ok(self.read_standard_diagnosis()?.mode())
    }

    /// Read the output status monitor (`DIAG_OSM`)
    ///
    /// A set bit means the drain-source voltage of that channel is below the
    /// monitor threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_output_status_monitor(
        &mut self,
    ) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let osm = self.device.diag_osm().read()?;
        Ok(ChannelMask::from_bits(osm.below_threshold()))
    }

    /// Enable open-load diagnostic current sources (`DIAG_IOL`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_diagnostic_current(
        &mut self,
        mask: impl Into<ChannelMask>,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        let bits = mask.into().bits();
        self.device.diag_iol().write(|w| {
            w.set_current_enable(bits);
        })?;
        Ok(())
    }

    /// Read which channels have their diagnostic current enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_diagnostic_current(
        &mut self,
    ) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let iol = self.device.diag_iol().read()?;
        Ok(ChannelMask::from_bits(iol.current_enable()))
    }

    /// Whether a channel (0..=7) has a latched overload error
    ///
    /// Reads `HWCR_OCL` live; the latch stays set until cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_overload_status(
        &mut self,
        channel: u8,
    ) -> Result<bool, Error<SPI::Error, MODE::Error>> {
        if !is_valid_channel(channel) {
            return Ok(false);
        }
        let ocl = self.device.hwcr_ocl().read()?;
        Ok(ChannelMask::from_bits(ocl.latch()).contains(channel))
    }

    /// Whether a channel (0..=7) shows an open load
    ///
    /// Reads `DIAG_OSM` live. Only meaningful while the channel is off and
    /// its diagnostic current is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_open_load_status(
        &mut self,
        channel: u8,
    ) -> Result<bool, Error<SPI::Error, MODE::Error>> {
        if !is_valid_channel(channel) {
            return Ok(false);
        }
        Ok(self.read_output_status_monitor()?.contains(channel))
    }

    /// Read the channels mapped to an input pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_input_mapping(
        &mut self,
        pin: InputPin,
    ) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let value = self.read_register(Self::mapping_register(pin))?;
        Ok(ChannelMask::from_bits(value))
    }

    /// Map channels onto an input pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_input_mapping(
        &mut self,
        pin: InputPin,
        mask: impl Into<ChannelMask>,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.write_register(Self::mapping_register(pin), mask.into().bits())
    }

    /// Read the input pin status register (`INST`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_input_status(&mut self) -> Result<InputStatus, Error<SPI::Error, MODE::Error>> {
        let inst = self.device.input_status().read()?;
        Ok(InputStatus::new(inst.input_pins(), inst.ter()))
    }

    /// Read a register by name
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(
        &mut self,
        register: Register,
    ) -> Result<u8, Error<SPI::Error, MODE::Error>> {
        Ok(self.device.interface.read_byte(register.address())?)
    }

    /// Write a register by name
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.device.interface.write_byte(register.address(), value)?;
        Ok(())
    }
}

#[cfg(feature = "async")]
impl<SPI, MODE> Tle75008Driver<SPI, MODE>
where
    SPI: embedded_hal_async::spi::SpiDevice,
    MODE: OutputPin,
{
    /// Bring the device up and apply the configuration
    ///
    /// Raises the IDLE pin, waits for the device to settle and runs
    /// [`initialize_device()`](Self::initialize_device). The device ends in
    /// Active mode with all outputs off.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode pin or the SPI bus fails.
    pub async fn begin<D>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error, MODE::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.mode_pin.set_high().map_err(Error::Pin)?;
        delay.delay_us(self.config.begin_settle_us).await;

        self.initialize_device().await?;
        self.mode = Some(DeviceMode::Active);

        #[cfg(feature = "defmt")]
        defmt::info!("TLE75008 initialized");

        Ok(())
    }

    /// Write the initial register configuration
    ///
    /// Same fixed order as the blocking API: clear latches, input mapping,
    /// diagnostic current, `HWCR`, `OUT`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn initialize_device(&mut self) -> Result<(), Error<SPI::Error, MODE::Error>> {
        let config = self.config;

        self.clear_all_errors().await?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "TLE75008 input mapping MAPIN0={=u8:#x} MAPIN1={=u8:#x}",
            config.mapin0,
            config.mapin1
        );
        self.device
            .input_map_0()
            .write_async(|w| {
                w.set_channels(config.mapin0);
            })
            .await?;
        self.device
            .input_map_1()
            .write_async(|w| {
                w.set_channels(config.mapin1);
            })
            .await?;

        self.device
            .diag_iol()
            .write_async(|w| {
                w.set_current_enable(config.diagnostic_current);
            })
            .await?;

        self.device
            .hwcr()
            .write_async(|w| {
                w.set_act(config.hwcr & crate::config::HWCR_ACT != 0);
                w.set_par(config.hwcr & 0x0F);
            })
            .await?;

        self.device
            .out()
            .write_async(|w| {
                w.set_channels(0x00);
            })
            .await?;

        Ok(())
    }

    /// Turn all outputs off and put the device to sleep
    ///
    /// # Errors
    ///
    /// Returns an error if the SPI bus or the mode pin fails.
    pub async fn enter_sleep<D>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error<SPI::Error, MODE::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.device
            .out()
            .write_async(|w| {
                w.set_channels(0x00);
            })
            .await?;

        self.mode_pin.set_low().map_err(Error::Pin)?;
        delay.delay_us(self.config.sleep_settle_us).await;
        self.mode = Some(DeviceMode::Sleep);

        #[cfg(feature = "defmt")]
        defmt::debug!("TLE75008 entered sleep");

        Ok(())
    }

    /// Wake the device and select Active mode
    ///
    /// # Errors
    ///
    /// Returns an error if the SPI bus or the mode pin fails.
    pub async fn enter_active<D>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error<SPI::Error, MODE::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.mode_pin.set_high().map_err(Error::Pin)?;
        delay.delay_us(self.config.active_settle_us).await;

        self.device
            .hwcr()
            .modify_async(|w| {
                w.set_act(true);
            })
            .await?;
        self.mode = Some(DeviceMode::Active);

        #[cfg(feature = "defmt")]
        defmt::debug!("TLE75008 entered active");

        Ok(())
    }

    /// Trigger a software reset through `HWCR.RST`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn software_reset(&mut self) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.device
            .hwcr()
            .write_async(|w| {
                w.set_rst(true);
            })
            .await?;
        self.mode = Some(DeviceMode::Idle);

        #[cfg(feature = "defmt")]
        defmt::warn!("TLE75008 software reset");

        Ok(())
    }

    /// Read the `OUT` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_outputs(&mut self) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let out = self.device.out().read_async().await?;
        Ok(ChannelMask::from_bits(out.channels()))
    }

    /// Write all eight outputs at once
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn write_outputs(
        &mut self,
        mask: impl Into<ChannelMask>,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        let bits = mask.into().bits();
        self.device
            .out()
            .write_async(|w| {
                w.set_channels(bits);
            })
            .await?;
        Ok(())
    }

    /// Switch one channel (0..=7) on or off, leaving the others unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_channel(
        &mut self,
        channel: u8,
        on: bool,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        if !is_valid_channel(channel) {
            #[cfg(feature = "defmt")]
            defmt::warn!("TLE75008 ignoring channel {}", channel);
            return Ok(());
        }

        let current = self.read_outputs().await?;
        self.write_outputs(current.with(channel, on)).await
    }

    /// Switch one output by its 1-based number (1..=8)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn toggle_output(
        &mut self,
        number: u8,
        on: bool,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        match channel_from_number(number) {
            Some(channel) => self.set_channel(channel, on).await,
            None => Ok(()),
        }
    }

    /// Clear the latched errors of all channels
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn clear_all_errors(&mut self) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.write_error_clear(ChannelMask::ALL).await
    }

    /// Clear the latched error of one channel (0..=7)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn clear_error(&mut self, channel: u8) -> Result<(), Error<SPI::Error, MODE::Error>> {
        match ChannelMask::single(channel) {
            Some(mask) => self.write_error_clear(mask).await,
            None => Ok(()),
        }
    }

    async fn write_error_clear(
        &mut self,
        mask: ChannelMask,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.device
            .hwcr_ocl()
            .write_async(|w| {
                w.set_latch(mask.bits());
            })
            .await?;
        Ok(())
    }

    /// Read the standard diagnosis word
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_standard_diagnosis(
        &mut self,
    ) -> Result<StandardDiagnosis, Error<SPI::Error, MODE::Error>> {
        Ok(self
            .device
            .interface
            .read_standard_diagnosis_async()
            .await?)
    }

    /// Operating mode reported by the device in its standard diagnosis
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_device_mode(
        &mut self,
    ) -> Result<Option<DeviceMode>, Error<SPI::Error, MODE::Error>> {
        Ok(self.read_standard_diagnosis().await?.mode())
    }

    /// Read the output status monitor (`DIAG_OSM`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_output_status_monitor(
        &mut self,
    ) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let osm = self.device.diag_osm().read_async().await?;
        Ok(ChannelMask::from_bits(osm.below_threshold()))
    }

    /// Enable open-load diagnostic current sources (`DIAG_IOL`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn write_diagnostic_current(
        &mut self,
        mask: impl Into<ChannelMask>,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        let bits = mask.into().bits();
        self.device
            .diag_iol()
            .write_async(|w| {
                w.set_current_enable(bits);
            })
            .await?;
        Ok(())
    }

    /// Read which channels have their diagnostic current enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_diagnostic_current(
        &mut self,
    ) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let iol = self.device.diag_iol().read_async().await?;
        Ok(ChannelMask::from_bits(iol.current_enable()))
    }

    /// Whether a channel (0..=7) has a latched overload error
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn get_overload_status(
        &mut self,
        channel: u8,
    ) -> Result<bool, Error<SPI::Error, MODE::Error>> {
        if !is_valid_channel(channel) {
            return Ok(false);
        }
        let ocl = self.device.hwcr_ocl().read_async().await?;
        Ok(ChannelMask::from_bits(ocl.latch()).contains(channel))
    }

    /// Whether a channel (0..=7) shows an open load
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn get_open_load_status(
        &mut self,
        channel: u8,
    ) -> Result<bool, Error<SPI::Error, MODE::Error>> {
        if !is_valid_channel(channel) {
            return Ok(false);
        }
        Ok(self.read_output_status_monitor().await?.contains(channel))
    }

    /// Read the channels mapped to an input pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_input_mapping(
        &mut self,
        pin: InputPin,
    ) -> Result<ChannelMask, Error<SPI::Error, MODE::Error>> {
        let value = self.read_register(Self::mapping_register(pin)).await?;
        Ok(ChannelMask::from_bits(value))
    }

    /// Map channels onto an input pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn write_input_mapping(
        &mut self,
        pin: InputPin,
        mask: impl Into<ChannelMask>,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.write_register(Self::mapping_register(pin), mask.into().bits())
            .await
    }

    /// Read the input pin status register (`INST`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_input_status(
        &mut self,
    ) -> Result<InputStatus, Error<SPI::Error, MODE::Error>> {
        let inst = self.device.input_status().read_async().await?;
        Ok(InputStatus::new(inst.input_pins(), inst.ter()))
    }

    /// Read a register by name
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_register(
        &mut self,
        register: Register,
    ) -> Result<u8, Error<SPI::Error, MODE::Error>> {
        Ok(self
            .device
            .interface
            .read_byte_async(register.address())
            .await?)
    }

    /// Write a register by name
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Error<SPI::Error, MODE::Error>> {
        self.device
            .interface
            .write_byte_async(register.address(), value)
            .await?;
        Ok(())
    }
}
