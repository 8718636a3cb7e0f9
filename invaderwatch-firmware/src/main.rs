//! Invaderwatch firmware
//!
//! Watchface firmware for RP2040 boards with a 128x64 SH1106 OLED on I2C1.
//! Two tasks: a once-per-second RTC tick and the face task that owns all
//! watchface state and the display.

#![no_std]
#![no_main]

mod config;
mod sh1106;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use {defmt_rtt as _, panic_probe as _};

use crate::sh1106::Sh1106;
use crate::tasks::face::face_task;
use crate::tasks::tick::tick_task;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// RTC seed for first boot (there is no time-setting UI yet)
const RTC_SEED: DateTime = DateTime {
    year: 2026,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Thursday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Invaderwatch starting...");

    let p = embassy_rp::init(Default::default());

    // OLED on I2C1 (GP14 = SDA, GP15 = SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    let mut display = Sh1106::new(i2c);
    if let Err(e) = display.init().await {
        // Fatal: there is nothing to run without a panel
        error!("Failed to initialize display: {:?}", e);
        return;
    }
    info!("OLED initialized");

    let mut rtc = Rtc::new(p.RTC);
    if !rtc.is_running() {
        info!("RTC not running, seeding default datetime");
        if rtc.set_datetime(RTC_SEED).is_err() {
            error!("Failed to seed RTC");
            return;
        }
    }

    spawner.spawn(tick_task(rtc)).unwrap();
    spawner.spawn(face_task(config::face_config(), display)).unwrap();

    info!("All tasks spawned");
}
