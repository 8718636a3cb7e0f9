//! Tick task
//!
//! Reads the hardware RTC once per second and signals the face task with
//! the current timestamp. Which calendar units rolled over is derived by
//! the face task from consecutive timestamps.

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime as RtcDateTime, Rtc};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use invaderwatch_core::clock::DateTime;

/// Signal carrying the timestamp of the latest tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, DateTime> = Signal::new();

/// Tick task - signals the wall-clock time once per second
#[embassy_executor::task]
pub async fn tick_task(rtc: Rtc<'static, RTC>) {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_secs(1));

    loop {
        ticker.next().await;

        match rtc.now() {
            Ok(now) => TICK_SIGNAL.signal(to_core(&now)),
            Err(_) => warn!("RTC read failed, skipping tick"),
        }
    }
}

fn to_core(t: &RtcDateTime) -> DateTime {
    DateTime::new(t.year, t.month, t.day, t.hour, t.minute, t.second)
}
