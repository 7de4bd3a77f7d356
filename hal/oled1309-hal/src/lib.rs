//! oled1309 Hardware Abstraction Layer
//!
//! This crate defines the bus traits the display driver is written against.
//! Chip-specific HALs either implement [`I2cBus`] directly or hand over any
//! `embedded_hal::i2c::I2c` peripheral wrapped in [`EmbeddedHalBus`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  oled1309 (command/data driver)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oled1309-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  custom bus   │
//! │  I2c (bridge) │       │ implementation│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master writes

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::{EmbeddedHalBus, I2cBus, I2cConfig};
