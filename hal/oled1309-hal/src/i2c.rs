//! I2C bus abstractions
//!
//! The display controller is write-only from the driver's point of view, so
//! the bus trait only carries the write half of an I2C master.

/// I2C bus master
///
/// A single `write` call is one bus transaction: START, address with the
/// write bit, every byte of `data`, STOP. It blocks until the transfer has
/// finished or failed; there is no timeout at this level.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    ///
    /// Returns `Ok(())` once the device acknowledged every byte.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// Bridge from any blocking `embedded-hal` 1.0 I2C peripheral
///
/// Lets HALs that already implement `embedded_hal::i2c::I2c` (embassy-rp,
/// rp2040-hal, linux-embedded-hal, ...) drive the display without writing a
/// dedicated [`I2cBus`] implementation.
#[derive(Debug)]
pub struct EmbeddedHalBus<I> {
    inner: I,
}

impl<I> EmbeddedHalBus<I> {
    /// Wrap an `embedded-hal` I2C peripheral
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Give the wrapped peripheral back
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> I2cBus for EmbeddedHalBus<I>
where
    I: embedded_hal::i2c::I2c,
{
    type Error = I::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // SSD1309 modules are specified for fast mode
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}
