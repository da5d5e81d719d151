//! SPI register access engine for the TLE75008-ESD
//!
//! [`SpiInterface`] turns logical register reads and writes into the frame
//! sequences the device needs and implements the `device-driver` register
//! traits on top of them:
//!
//! | Operation              | Frames sent                        | Exchanges |
//! |------------------------|------------------------------------|-----------|
//! | register write         | write, no-op                       | 2         |
//! | register read          | read request, no-op, no-op         | 3         |
//! | standard diagnosis     | diagnosis request, no-op           | 2         |
//!
//! Every operation starts by discarding the response to its first frame and
//! ends with a no-op exchange, so the [`Pipeline`] is drained between
//! operations. The raw transport is never handed out while the interface
//! owns it; use [`SpiInterface::release`] to get it back.
//!
//! # Note on Chip Select
//!
//! Each frame needs its own chip-select window. The `SpiDevice` trait from
//! `embedded-hal` asserts CS around every `transfer`, which is exactly one
//! frame here:
//! ```ignore
//! let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
//! let interface = SpiInterface::new(spi_device);
//! ```

use crate::diagnosis::StandardDiagnosis;
use crate::frame::{Frame, RegisterAddress};
use crate::pipeline::{Pipeline, Request, Response};
use device_driver::RegisterInterface;

/// SPI interface for the TLE75008-ESD
pub struct SpiInterface<SPI> {
    spi: SPI,
    pipeline: Pipeline,
    last_diagnosis: Option<StandardDiagnosis>,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    ///
    /// The SPI device must be configured for mode 1 (see [`crate::SPI_MODE`])
    /// at no more than [`crate::MAX_SPI_FREQUENCY_HZ`].
    #[must_use]
    pub const fn new(spi: SPI) -> Self {
        Self {
            spi,
            pipeline: Pipeline::new(),
            last_diagnosis: None,
        }
    }

    /// Consume the interface and return the SPI device
    #[must_use]
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Standard diagnosis captured by the most recent drain exchange
    #[must_use]
    pub const fn last_diagnosis(&self) -> Option<StandardDiagnosis> {
        self.last_diagnosis
    }

    /// No response is waiting to be clocked out
    #[must_use]
    pub const fn is_drained(&self) -> bool {
        self.pipeline.is_drained()
    }

    /// Capture the diagnosis from the final exchange of an operation
    ///
    /// That exchange answers either the operation's own request or, after a
    /// read, the data no-op. Both answers are standard diagnosis words.
    fn finish(&mut self, response: Response) {
        debug_assert!(!matches!(response.answers, Some(Request::ReadRegister(_))));
        self.last_diagnosis = Some(response.diagnosis());
    }
}

impl<SPI> SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice,
{
    fn exchange(&mut self, frame: Frame) -> Result<Response, SPI::Error> {
        let mut rx = [0u8; 2];
        if let Err(error) = self.spi.transfer(&mut rx, &frame.to_bytes()) {
            self.pipeline.reset();
            return Err(error);
        }

        let raw = u16::from_be_bytes(rx);

        #[cfg(feature = "defmt")]
        defmt::trace!("TLE75008 frame tx={=u16:#x} rx={=u16:#x}", frame.raw(), raw);

        Ok(self.pipeline.record(frame, raw))
    }

    /// Write a register: write frame, then a no-op to collect its diagnosis
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged if any exchange fails.
    pub fn write_byte(
        &mut self,
        address: RegisterAddress,
        value: u8,
    ) -> Result<StandardDiagnosis, SPI::Error> {
        // Answers whatever was sent before this operation
        self.exchange(Frame::write(address, value))?;

        let drain = self.exchange(Frame::NOP)?;
        debug_assert_eq!(drain.answers, Some(Request::WriteRegister(address)));
        self.finish(drain);

        Ok(drain.diagnosis())
    }

    /// Read a register: read request, no-op for the data, no-op to drain
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged if any exchange fails.
    pub fn read_byte(&mut self, address: RegisterAddress) -> Result<u8, SPI::Error> {
        self.exchange(Frame::read_request(address))?;

        let data = self.exchange(Frame::NOP)?;
        debug_assert_eq!(data.answers, Some(Request::ReadRegister(address)));

        let trailer = self.exchange(Frame::NOP)?;
        self.finish(trailer);

        Ok(data.value())
    }

    /// Read the 16-bit standard diagnosis word
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged if any exchange fails.
    pub fn read_standard_diagnosis(&mut self) -> Result<StandardDiagnosis, SPI::Error> {
        self.exchange(Frame::DIAGNOSIS_REQUEST)?;

        let response = self.exchange(Frame::NOP)?;
        debug_assert_eq!(response.answers, Some(Request::Diagnosis));
        self.finish(response);

        Ok(response.diagnosis())
    }
}

#[cfg(feature = "async")]
impl<SPI> SpiInterface<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice,
{
    async fn exchange_async(&mut self, frame: Frame) -> Result<Response, SPI::Error> {
        let mut rx = [0u8; 2];
        if let Err(error) = self.spi.transfer(&mut rx, &frame.to_bytes()).await {
            self.pipeline.reset();
            return Err(error);
        }

        let raw = u16::from_be_bytes(rx);

        #[cfg(feature = "defmt")]
        defmt::trace!("TLE75008 frame tx={=u16:#x} rx={=u16:#x}", frame.raw(), raw);

        Ok(self.pipeline.record(frame, raw))
    }

    /// Write a register: write frame, then a no-op to collect its diagnosis
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged if any exchange fails.
    pub async fn write_byte_async(
        &mut self,
        address: RegisterAddress,
        value: u8,
    ) -> Result<StandardDiagnosis, SPI::Error> {
        self.exchange_async(Frame::write(address, value)).await?;

        let drain = self.exchange_async(Frame::NOP).await?;
        debug_assert_eq!(drain.answers, Some(Request::WriteRegister(address)));
        self.finish(drain);

        Ok(drain.diagnosis())
    }

    /// Read a register: read request, no-op for the data, no-op to drain
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged if any exchange fails.
    pub async fn read_byte_async(&mut self, address: RegisterAddress) -> Result<u8, SPI::Error> {
        self.exchange_async(Frame::read_request(address)).await?;

        let data = self.exchange_async(Frame::NOP).await?;
        debug_assert_eq!(data.answers, Some(Request::ReadRegister(address)));

        let trailer = self.exchange_async(Frame::NOP).await?;
        self.finish(trailer);

        Ok(data.value())
    }

    /// Read the 16-bit standard diagnosis word
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged if any exchange fails.
    pub async fn read_standard_diagnosis_async(&mut self) -> Result<StandardDiagnosis, SPI::Error> {
        self.exchange_async(Frame::DIAGNOSIS_REQUEST).await?;

        let response = self.exchange_async(Frame::NOP).await?;
        debug_assert_eq!(response.answers, Some(Request::Diagnosis));
        self.finish(response);

        Ok(response.diagnosis())
    }
}

impl<SPI> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice,
{
    type Error = SPI::Error;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // All registers are 8 bits wide
        if let Some(byte) = read_data.first_mut() {
            *byte = self.read_byte(RegisterAddress::from_raw(address))?;
        }
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // All registers are 8 bits wide
        if let Some(&value) = write_data.first() {
            self.write_byte(RegisterAddress::from_raw(address), value)?;
        }
        Ok(())
    }
}

#[cfg(feature = "async")]
impl<SPI> device_driver::AsyncRegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice,
{
    type Error = SPI::Error;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // All registers are 8 bits wide
        if let Some(byte) = read_data.first_mut() {
            *byte = self
                .read_byte_async(RegisterAddress::from_raw(address))
                .await?;
        }
        Ok(())
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // All registers are 8 bits wide
        if let Some(&value) = write_data.first() {
            self.write_byte_async(RegisterAddress::from_raw(address), value)
                .await?;
        }
        Ok(())
    }
}
