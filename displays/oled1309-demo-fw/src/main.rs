//! oled1309 demo firmware
//!
//! Brings up an SSD1309 panel on an RP2040 and keeps a counter ticking
//! under the built-in logo.
//!
//! Wiring (I2C0):
//! - GPIO4: SDA
//! - GPIO5: SCL

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use oled1309::{Align, DeviceAddress, I2cInterface, Ssd1309};
use oled1309_hal::{EmbeddedHalBus, I2cConfig};

type Display = Ssd1309<I2cInterface<EmbeddedHalBus<I2c<'static, I2C0, Blocking>>>>;

/// Counter refresh interval
const TICK_MS: u64 = 1000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("oled1309 demo starting...");

    let p = embassy_rp::init(Default::default());

    let bus_config = I2cConfig::FAST;
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = bus_config.frequency;

    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let mut display = Ssd1309::with_i2c(EmbeddedHalBus::new(i2c), DeviceAddress::PRIMARY);

    if let Err(e) = display.probe() {
        error!("No controller at {:#x}: {:?}", DeviceAddress::PRIMARY.get(), e);
    }

    if let Err(e) = display.init() {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
        display.clear().ok();
        display.draw_text("oled1309", 0, Align::Center).ok();
        display.draw_logo(44, 2).ok();
    }

    spawner.spawn(counter_task(display)).unwrap();
}

/// Redraw the counter once per tick
#[embassy_executor::task]
async fn counter_task(mut display: Display) {
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    let mut count: i32 = 0;

    loop {
        if let Err(e) = display.draw_int(count, 7, Align::Right, "%6d") {
            warn!("Counter redraw failed: {:?}", e);
        }
        count = count.wrapping_add(1);
        ticker.next().await;
    }
}
