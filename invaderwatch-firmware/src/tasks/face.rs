//! Face task
//!
//! Owns the watchface state machine, the renderer, and the display. Sleeps
//! on the tick signal; while the hourly ship flight is on screen it wakes
//! at frame rate instead and advances the flight by measured elapsed time.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{with_timeout, Duration, Instant};
use embedded_graphics::prelude::*;

use invaderwatch_core::clock::{DateTime, TickEvent};
use invaderwatch_core::config::FaceConfig;
use invaderwatch_core::face::Face;
use invaderwatch_display::{FaceRenderer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

use crate::config::FLIGHT_FRAME_MS;
use crate::sh1106::Sh1106;
use crate::tasks::tick::TICK_SIGNAL;

type Display = Sh1106<I2c<'static, I2C1, Async>>;

/// Face task - watchface state machine and rendering loop
#[embassy_executor::task]
pub async fn face_task(config: FaceConfig, mut display: Display) {
    info!("Face task started");

    let renderer = match FaceRenderer::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)) {
        Ok(renderer) => renderer,
        Err(e) => {
            // Nothing to show without the bitmaps; abort initialization
            error!("Bitmap resources failed to load: {:?}", e);
            return;
        }
    };

    let (start_x, end_x) = renderer.flight_span();
    let mut face = Face::new(&config, start_x, end_x);
    let mut prev: Option<DateTime> = None;
    let mut last_update = Instant::now();

    loop {
        let tick = if face.in_flight() {
            // Animate at frame rate, still picking up ticks as they land
            match with_timeout(Duration::from_millis(FLIGHT_FRAME_MS), TICK_SIGNAL.wait()).await {
                Ok(timestamp) => Some(timestamp),
                Err(_) => None,
            }
        } else {
            Some(TICK_SIGNAL.wait().await)
        };

        let now = Instant::now();
        if face.in_flight() {
            face.advance_flight((now - last_update).as_millis() as u32);
        }
        last_update = now;

        if let Some(timestamp) = tick {
            let event = TickEvent::between(prev.unwrap_or(timestamp), timestamp);
            prev = Some(timestamp);
            face.handle_tick(&event);
        }

        renderer.draw(&face.frame(), &mut display).ok();
        if display.flush().await.is_err() {
            warn!("Display flush failed");
        }
    }
}
