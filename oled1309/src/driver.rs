//! SSD1309 drawing API
//!
//! Every operation here is built only from [`Transact::command`] and
//! [`Transact::send`]. There is no framebuffer: drawing calls address the
//! controller and stream bytes straight into its display RAM.
//!
//! # Addressing
//!
//! The panel is 128 columns by 8 pages; each page is a strip of 8 pixel
//! rows and each data byte fills one column of one page. A cursor move is
//! always three commands: page start, low column nibble, high column
//! nibble. After that, data bytes advance the column pointer on their own,
//! so consecutive glyphs or tile bytes need no re-addressing.
//!
//! # Failures
//!
//! Arguments are validated before the first transaction is issued, so a
//! rejected call leaves the controller untouched. Once a composite
//! operation has started it issues every one of its transactions even if
//! some fail, and reports the first failure when it is done.

use oled1309_hal::I2cBus;

use crate::address::DeviceAddress;
use crate::command::{self, INIT_SEQUENCE};
use crate::error::Error;
use crate::font::{self, GLYPH_WIDTH};
use crate::format::IntFormat;
use crate::interface::{I2cInterface, Transact};
use crate::layout::TextPosition;
use crate::logo::{LOGO, LOGO_TILES};
use crate::{PAGES, WIDTH};

/// Side length of a tile in pixels
pub const TILE_SIZE: usize = 8;

/// 8x8 pixel cell: eight column bytes, LSB at the top
pub type Tile = [u8; TILE_SIZE];

/// Tracks the first transport failure of a composite operation
#[cfg_attr(not(feature = "defmt"), allow(dead_code))]
struct Outcome<E> {
    first: Option<E>,
    issued: u16,
    failed: u16,
}

impl<E> Outcome<E> {
    const fn new() -> Self {
        Self {
            first: None,
            issued: 0,
            failed: 0,
        }
    }

    fn record(&mut self, result: Result<(), E>) {
        self.issued = self.issued.saturating_add(1);
        if let Err(e) = result {
            self.failed = self.failed.saturating_add(1);
            if self.first.is_none() {
                self.first = Some(e);
            }
        }
    }

    fn finish(self) -> Result<(), Error<E>> {
        match self.first {
            None => Ok(()),
            Some(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "ssd1309: {} of {} transactions failed",
                    self.failed,
                    self.issued
                );
                Err(Error::Bus(e))
            }
        }
    }
}

/// SSD1309 128x64 OLED driver
pub struct Ssd1309<T> {
    iface: T,
}

impl<B: I2cBus> Ssd1309<I2cInterface<B>> {
    /// Create a driver talking to `address` on an I2C bus
    pub const fn with_i2c(bus: B, address: DeviceAddress) -> Self {
        Self::new(I2cInterface::new(bus, address))
    }
}

impl<T> Ssd1309<T>
where
    T: Transact,
{
    /// Create a driver on top of a transaction interface
    ///
    /// No bus traffic happens until [`Ssd1309::init`] is called.
    pub const fn new(iface: T) -> Self {
        Self { iface }
    }

    /// Give the interface back
    pub fn release(self) -> T {
        self.iface
    }

    /// Send one command byte
    pub fn command(&mut self, byte: u8) -> Result<(), Error<T::Error>> {
        self.iface.command(byte).map_err(Error::Bus)
    }

    /// Send one display RAM byte at the current pointer
    pub fn send(&mut self, byte: u8) -> Result<(), Error<T::Error>> {
        self.iface.send(byte).map_err(Error::Bus)
    }

    /// Run the power-up configuration sequence
    ///
    /// All 26 commands are sent even if some fail. A failure leaves the
    /// controller in an unknown configuration; call `init` again to retry.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1309: init ({} commands)", INIT_SEQUENCE.len());

        let mut outcome = Outcome::new();
        for &byte in INIT_SEQUENCE.iter() {
            outcome.record(self.iface.command(byte));
        }

        let result = outcome.finish();
        #[cfg(feature = "defmt")]
        if result.is_ok() {
            defmt::debug!("ssd1309: init done");
        }
        result
    }

    /// Check that the controller answers on the bus
    ///
    /// Issues a single display-on command.
    pub fn probe(&mut self) -> Result<(), Error<T::Error>> {
        self.command(command::DISPLAY_ON)
    }

    /// Move the controller's RAM pointer to `column` (0-127) of `page` (0-7)
    pub fn set_cursor(&mut self, column: u8, page: u8) -> Result<(), Error<T::Error>> {
        Self::check_column(column)?;
        Self::check_page(page)?;

        let mut outcome = Outcome::new();
        self.emit_cursor(&mut outcome, column, page);
        outcome.finish()
    }

    /// Blank the whole display
    pub fn clear(&mut self) -> Result<(), Error<T::Error>> {
        self.fill_with(0x00)
    }

    /// Light every pixel
    pub fn fill(&mut self) -> Result<(), Error<T::Error>> {
        self.fill_with(0xFF)
    }

    /// Write `pattern` to every column of every page
    pub fn fill_with(&mut self, pattern: u8) -> Result<(), Error<T::Error>> {
        let mut outcome = Outcome::new();
        for page in 0..PAGES {
            self.emit_cursor(&mut outcome, 0, page);
            for _ in 0..WIDTH {
                outcome.record(self.iface.send(pattern));
            }
        }
        outcome.finish()
    }

    /// Light the top pixel of the 8-pixel strip at `column` in `page`
    ///
    /// The other seven pixels of the strip are cleared: the controller RAM
    /// is never read back.
    pub fn draw_pixel(&mut self, column: u8, page: u8) -> Result<(), Error<T::Error>> {
        Self::check_column(column)?;
        Self::check_page(page)?;

        let mut outcome = Outcome::new();
        self.emit_cursor(&mut outcome, column, page);
        outcome.record(self.iface.send(0x01));
        outcome.finish()
    }

    /// Draw one character at the current pointer
    ///
    /// Writes the five glyph columns and one blank spacing column.
    pub fn draw_char(&mut self, c: char) -> Result<(), Error<T::Error>> {
        let glyph = font::glyph(c).ok_or(Error::InvalidCharacter(c))?;

        let mut outcome = Outcome::new();
        self.emit_glyph(&mut outcome, glyph);
        outcome.finish()
    }

    /// Draw a line of text on `page`
    ///
    /// The cursor is set once; glyphs then follow each other through the
    /// controller's auto-incrementing column pointer. Every character must
    /// be printable ASCII and the whole line must fit on the display.
    pub fn draw_text(
        &mut self,
        text: &str,
        page: u8,
        position: impl Into<TextPosition>,
    ) -> Result<(), Error<T::Error>> {
        Self::check_page(page)?;
        if let Some(bad) = text.chars().find(|&c| font::glyph(c).is_none()) {
            return Err(Error::InvalidCharacter(bad));
        }
        // All characters are ASCII here, so bytes == characters
        let column = position.into().start_column(text.len())?;

        if text.is_empty() {
            return Ok(());
        }

        let mut outcome = Outcome::new();
        self.emit_cursor(&mut outcome, column, page);
        for glyph in text.chars().filter_map(font::glyph) {
            self.emit_glyph(&mut outcome, glyph);
        }
        outcome.finish()
    }

    /// Format `value` through a printf-style `fmt` and draw it as text
    ///
    /// See [`crate::format`] for the accepted syntax. The formatted text is
    /// limited to nine characters.
    pub fn draw_int(
        &mut self,
        value: i32,
        page: u8,
        position: impl Into<TextPosition>,
        fmt: &str,
    ) -> Result<(), Error<T::Error>> {
        let text = IntFormat::parse(fmt)?.render(value)?;
        self.draw_text(&text, page, position)
    }

    /// Draw a `rows` x `columns` grid of 8x8 tiles
    ///
    /// The grid's top-left corner is at pixel column `column` of `page`.
    /// Tiles are taken row-major from `tiles` (`tiles[row * columns + col]`);
    /// each one gets its own cursor move followed by its 8 bytes.
    pub fn draw_tiles(
        &mut self,
        tiles: &[Tile],
        column: u8,
        page: u8,
        rows: u8,
        columns: u8,
    ) -> Result<(), Error<T::Error>> {
        Self::check_column(column)?;
        Self::check_page(page)?;

        if tiles.len() < rows as usize * columns as usize {
            return Err(Error::TileCountMismatch);
        }
        if rows == 0 || columns == 0 {
            return Ok(());
        }

        let last_page = page as usize + rows as usize - 1;
        if last_page >= PAGES as usize {
            return Err(Error::PageOutOfRange(last_page.min(u8::MAX as usize) as u8));
        }
        let last_column = column as usize + columns as usize * TILE_SIZE - 1;
        if last_column >= WIDTH as usize {
            return Err(Error::ColumnOutOfRange(
                last_column.min(u8::MAX as usize) as u8,
            ));
        }

        let mut outcome = Outcome::new();
        for row in 0..rows {
            for col in 0..columns {
                let tile = &tiles[row as usize * columns as usize + col as usize];
                self.emit_cursor(&mut outcome, col * TILE_SIZE as u8 + column, row + page);
                for &byte in tile {
                    outcome.record(self.iface.send(byte));
                }
            }
        }
        outcome.finish()
    }

    /// Draw a 5x5 tile image such as a QR code
    pub fn draw_qr(
        &mut self,
        tiles: &[Tile; LOGO_TILES * LOGO_TILES],
        column: u8,
        page: u8,
    ) -> Result<(), Error<T::Error>> {
        self.draw_tiles(tiles, column, page, LOGO_TILES as u8, LOGO_TILES as u8)
    }

    /// Draw the built-in logo
    pub fn draw_logo(&mut self, column: u8, page: u8) -> Result<(), Error<T::Error>> {
        self.draw_qr(&LOGO, column, page)
    }

    /// Set panel contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<T::Error>> {
        let mut outcome = Outcome::new();
        outcome.record(self.iface.command(command::SET_CONTRAST));
        outcome.record(self.iface.command(contrast));
        outcome.finish()
    }

    /// Turn the panel on or off; display RAM is kept while off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<T::Error>> {
        if on {
            self.command(command::DISPLAY_ON)
        } else {
            self.command(command::DISPLAY_OFF)
        }
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<T::Error>> {
        if inverted {
            self.command(command::SET_INVERSE)
        } else {
            self.command(command::SET_NORMAL)
        }
    }

    /// Light every pixel regardless of RAM content, or follow RAM again
    pub fn set_entire_display_on(&mut self, on: bool) -> Result<(), Error<T::Error>> {
        if on {
            self.command(command::ENTIRE_DISPLAY_ON)
        } else {
            self.command(command::ENTIRE_DISPLAY_RESUME)
        }
    }

    /// Stop any hardware scrolling
    pub fn deactivate_scroll(&mut self) -> Result<(), Error<T::Error>> {
        self.command(command::DEACTIVATE_SCROLL)
    }

    fn emit_cursor(&mut self, outcome: &mut Outcome<T::Error>, column: u8, page: u8) {
        outcome.record(self.iface.command(command::page_start(page)));
        outcome.record(self.iface.command(command::low_column(column)));
        outcome.record(self.iface.command(command::high_column(column)));
    }

    fn emit_glyph(&mut self, outcome: &mut Outcome<T::Error>, glyph: &[u8; GLYPH_WIDTH]) {
        for &byte in glyph {
            outcome.record(self.iface.send(byte));
        }
        outcome.record(self.iface.send(0x00));
    }

    fn check_column(column: u8) -> Result<(), Error<T::Error>> {
        if column < WIDTH {
            Ok(())
        } else {
            Err(Error::ColumnOutOfRange(column))
        }
    }

    fn check_page(page: u8) -> Result<(), Error<T::Error>> {
        if page < PAGES {
            Ok(())
        } else {
            Err(Error::PageOutOfRange(page))
        }
    }
}
