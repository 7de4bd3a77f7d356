//! SSD1309 OLED controller driver
//!
//! Drives a 128x64 monochrome SSD1309 over a two-wire bus without a local
//! framebuffer: every drawing call turns directly into bus transactions.
//!
//! # Wire protocol
//!
//! Every transaction is exactly two bytes:
//! ```text
//! ┌──────────────┬─────────┐
//! │ CONTROL      │ PAYLOAD │
//! │ 0x00 command │ 1B      │
//! │ 0x40 data    │         │
//! └──────────────┴─────────┘
//! ```
//!
//! Data bytes land at the controller's internal column/page pointer, which
//! advances by one column per byte. Each byte is a vertical strip of 8
//! pixels (LSB at the top) inside one of the 8 pages.
//!
//! # Layers
//!
//! - [`interface`]: the [`Transaction`] primitive and the [`Transact`] trait
//!   that frames it onto an [`oled1309_hal::I2cBus`].
//! - [`driver`]: the drawing API ([`Ssd1309`]), built only on [`Transact`].
//!
//! # Example
//!
//! ```ignore
//! let interface = I2cInterface::new(bus, DeviceAddress::PRIMARY);
//! let mut display = Ssd1309::new(interface);
//! display.init()?;
//! display.clear()?;
//! display.draw_text("Hello", 0, TextPosition::Align(Align::Center))?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod address;
pub mod command;
pub mod driver;
pub mod error;
pub mod font;
pub mod format;
pub mod interface;
pub mod layout;
pub mod logo;

pub use address::DeviceAddress;
pub use driver::{Ssd1309, Tile, TILE_SIZE};
pub use error::Error;
pub use format::{format_int, FormatError, IntFormat};
pub use interface::{I2cInterface, Transact, Transaction};
pub use layout::{Align, TextPosition};

/// Display width in pixels (columns)
pub const WIDTH: u8 = 128;
/// Display height in pixels
pub const HEIGHT: u8 = 64;
/// Number of 8-pixel pages
pub const PAGES: u8 = HEIGHT / 8;
