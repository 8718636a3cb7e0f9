//! Watchface state machine
//!
//! All sprite and layer behavior is a function of the current state and a
//! clock tick. The face owns every piece of mutable display state and
//! produces an immutable [`FrameModel`] snapshot for the renderer, so a
//! combined minute+hour tick can never render a half-updated frame.

use heapless::String;

use crate::clock::{format_date, format_time, TickEvent, DATE_TEXT_LEN, TIME_TEXT_LEN};
use crate::config::{ClockStyle, FaceConfig};
use crate::flight::ShipFlight;

/// Total invader bitmap frames (3 sprites, 2 frames each)
pub const SPRITE_FRAME_COUNT: u8 = 6;

/// Selects which invader bitmap is on screen
///
/// `offset` picks the sprite pair and is always even and `< 6`; `index`
/// toggles between the pair's two animation frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpriteCycle {
    offset: u8,
    index: u8,
}

impl SpriteCycle {
    /// Start at the first frame of the first pair
    pub const fn new() -> Self {
        Self { offset: 0, index: 0 }
    }

    /// Move to the next sprite pair, showing its first frame
    pub fn advance_pair(&mut self) {
        self.offset = (self.offset + 2) % SPRITE_FRAME_COUNT;
        self.index = 0;
    }

    /// Flip between the current pair's two frames
    pub fn toggle_frame(&mut self) {
        self.index ^= 1;
    }

    /// Bitmap frame to display, in `0..SPRITE_FRAME_COUNT`
    pub fn frame(&self) -> u8 {
        self.offset + self.index
    }

    /// Current pair offset (even, `< 6`)
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Current frame index within the pair (0 or 1)
    pub fn index(&self) -> u8 {
        self.index
    }
}

/// Which layer set is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceState {
    /// Invader sprite visible, ship parked off-screen
    ShowingSprite,
    /// Sprite hidden while the ship crosses the screen
    ShipFlight,
}

/// Render snapshot of the watchface
///
/// Produced by [`Face::frame`] after all tick processing is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameModel<'a> {
    /// Invader sprite layer hidden
    pub sprite_hidden: bool,
    /// Invader bitmap frame, in `0..SPRITE_FRAME_COUNT`
    pub sprite_frame: u8,
    /// Ship layer hidden
    pub ship_hidden: bool,
    /// Ship layer x position
    pub ship_x: i32,
    /// Time line text
    pub time_text: &'a str,
    /// Date line text
    pub date_text: &'a str,
}

/// The watchface: sprite cycling, text lines, and the hourly ship flight
pub struct Face {
    state: FaceState,
    cycle: SpriteCycle,
    flight: ShipFlight,
    style: ClockStyle,
    time_text: String<TIME_TEXT_LEN>,
    date_text: String<DATE_TEXT_LEN>,
}

impl Face {
    /// Create a face whose ship flies from `flight_start_x` to `flight_end_x`
    pub fn new(config: &FaceConfig, flight_start_x: i32, flight_end_x: i32) -> Self {
        Self {
            state: FaceState::ShowingSprite,
            cycle: SpriteCycle::new(),
            flight: ShipFlight::new(flight_start_x, flight_end_x, config.flight_duration_ms),
            style: config.clock_style,
            time_text: String::new(),
            date_text: String::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> FaceState {
        self.state
    }

    /// Check if the hourly ship flight is on screen
    pub fn in_flight(&self) -> bool {
        self.state == FaceState::ShipFlight
    }

    /// Process a clock tick
    ///
    /// The time line is refreshed on every tick, the date line only when the
    /// day changed (or on the very first tick, while the buffer is still
    /// empty). A minute boundary advances to the next sprite pair, any other
    /// tick flips between the pair's two frames. An hour boundary hands the
    /// screen to the ship flight.
    pub fn handle_tick(&mut self, event: &TickEvent) {
        format_time(&event.time, self.style, &mut self.time_text);
        if event.day_changed || self.date_text.is_empty() {
            format_date(&event.time, &mut self.date_text);
        }

        if event.minute_changed {
            self.cycle.advance_pair();
        } else {
            self.cycle.toggle_frame();
        }

        // An hour tick arriving mid-flight must not restart the crossing
        if event.hour_changed && self.state == FaceState::ShowingSprite {
            self.state = FaceState::ShipFlight;
            self.flight.begin();
        }
    }

    /// Advance an active ship flight by elapsed wall time
    ///
    /// When the flight completes, the sprite layer becomes visible again.
    pub fn advance_flight(&mut self, delta_ms: u32) {
        if self.state != FaceState::ShipFlight {
            return;
        }
        self.flight.update(delta_ms);
        if !self.flight.is_flying() {
            self.state = FaceState::ShowingSprite;
        }
    }

    /// Snapshot the face for rendering
    pub fn frame(&self) -> FrameModel<'_> {
        let in_flight = self.in_flight();
        FrameModel {
            sprite_hidden: in_flight,
            sprite_frame: self.cycle.frame(),
            ship_hidden: !in_flight,
            ship_x: self.flight.position(),
            time_text: self.time_text.as_str(),
            date_text: self.date_text.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{DateTime, WallClock};
    use proptest::prelude::*;

    fn face() -> Face {
        Face::new(&FaceConfig::default(), 128, -16)
    }

    fn plain_tick(second: u8) -> TickEvent {
        TickEvent {
            time: DateTime::new(2026, 8, 23, 10, 15, second),
            minute_changed: false,
            hour_changed: false,
            day_changed: false,
        }
    }

    fn minute_tick(minute: u8) -> TickEvent {
        TickEvent {
            time: DateTime::new(2026, 8, 23, 10, minute, 0),
            minute_changed: true,
            hour_changed: false,
            day_changed: false,
        }
    }

    fn hour_tick(hour: u8) -> TickEvent {
        TickEvent {
            time: DateTime::new(2026, 8, 23, hour, 0, 0),
            minute_changed: true,
            hour_changed: true,
            day_changed: false,
        }
    }

    #[test]
    fn test_frame_flicker_on_plain_ticks() {
        let mut face = face();
        face.handle_tick(&plain_tick(1));
        assert_eq!(face.frame().sprite_frame, 1);
        face.handle_tick(&plain_tick(2));
        assert_eq!(face.frame().sprite_frame, 0);
        face.handle_tick(&plain_tick(3));
        assert_eq!(face.frame().sprite_frame, 1);
    }

    #[test]
    fn test_minute_advances_pair_and_resets_index() {
        let mut face = face();
        face.handle_tick(&plain_tick(59)); // index = 1
        face.handle_tick(&minute_tick(16));
        let frame = face.frame();
        assert_eq!(frame.sprite_frame, 2); // offset 2, index 0

        face.handle_tick(&minute_tick(17));
        assert_eq!(face.frame().sprite_frame, 4);
        face.handle_tick(&minute_tick(18));
        assert_eq!(face.frame().sprite_frame, 0); // wrapped
    }

    #[test]
    fn test_time_refreshes_every_tick() {
        let mut face = face();
        face.handle_tick(&plain_tick(1));
        assert_eq!(face.frame().time_text, "10:15 am");

        face.handle_tick(&minute_tick(16));
        assert_eq!(face.frame().time_text, "10:16 am");
    }

    #[test]
    fn test_date_refreshes_only_on_day_change() {
        let mut face = face();
        face.handle_tick(&plain_tick(1));
        assert_eq!(face.frame().date_text, "Sun, Aug 23");

        // A later tick with a different date but no day_changed flag must
        // not touch the date line
        let stale = TickEvent {
            time: DateTime::new(2026, 8, 24, 10, 15, 2),
            minute_changed: false,
            hour_changed: false,
            day_changed: false,
        };
        face.handle_tick(&stale);
        assert_eq!(face.frame().date_text, "Sun, Aug 23");

        let day = TickEvent {
            time: DateTime::new(2026, 8, 24, 0, 0, 0),
            minute_changed: true,
            hour_changed: true,
            day_changed: true,
        };
        face.handle_tick(&day);
        assert_eq!(face.frame().date_text, "Mon, Aug 24");
    }

    #[test]
    fn test_hour_tick_swaps_layers() {
        let mut face = face();
        face.handle_tick(&hour_tick(11));

        assert_eq!(face.state(), FaceState::ShipFlight);
        let frame = face.frame();
        assert!(frame.sprite_hidden);
        assert!(!frame.ship_hidden);
        assert_eq!(frame.ship_x, 128);
    }

    #[test]
    fn test_flight_completion_restores_sprite() {
        let mut face = face();
        face.handle_tick(&hour_tick(11));

        face.advance_flight(600);
        let frame = face.frame();
        assert!(frame.sprite_hidden);
        assert!(frame.ship_x < 128 && frame.ship_x > -16);

        face.advance_flight(600);
        assert_eq!(face.state(), FaceState::ShowingSprite);
        let frame = face.frame();
        assert!(!frame.sprite_hidden);
        assert!(frame.ship_hidden);
    }

    #[test]
    fn test_hour_tick_mid_flight_does_not_restart() {
        let mut face = face();
        face.handle_tick(&hour_tick(11));
        face.advance_flight(600);
        let mid_x = face.frame().ship_x;

        face.handle_tick(&hour_tick(12));
        assert_eq!(face.frame().ship_x, mid_x);
        assert_eq!(face.state(), FaceState::ShipFlight);
    }

    #[test]
    fn test_ticks_during_flight_keep_updating_text_and_cycle() {
        let mut face = face();
        face.handle_tick(&hour_tick(11));
        face.handle_tick(&minute_tick(1));

        let frame = face.frame();
        assert!(frame.sprite_hidden);
        assert_eq!(frame.sprite_frame, 4); // two pair advances from 0
        assert_eq!(frame.time_text, "10:01 am");
    }

    #[test]
    fn test_midnight_rollover_combined_event() {
        // 11:59:58 pm -> 11:59:59 pm -> 12:00:00 am
        let mut clock = WallClock::new(DateTime::new(2026, 8, 23, 23, 59, 58));
        let mut face = face();

        face.handle_tick(&clock.tick()); // 23:59:59
        let before = face.frame();
        assert!(!before.sprite_hidden);
        let offset_before = face.cycle.offset();

        let event = clock.tick(); // 00:00:00
        assert!(event.minute_changed && event.hour_changed && event.day_changed);
        face.handle_tick(&event);

        // The post-event snapshot must already hide the sprite: no frame
        // between the minute-reset and the hour-triggered hide
        let after = face.frame();
        assert!(after.sprite_hidden);
        assert!(!after.ship_hidden);
        assert_eq!(face.cycle.offset(), (offset_before + 2) % SPRITE_FRAME_COUNT);
        assert_eq!(face.cycle.index(), 0);
        assert_eq!(after.date_text, "Mon, Aug 24");
        assert_eq!(after.time_text, "12:00 am");
    }

    proptest! {
        #[test]
        fn prop_offset_even_and_in_range(minute_flags in proptest::collection::vec(any::<bool>(), 1..256)) {
            let mut cycle = SpriteCycle::new();
            for minute_changed in minute_flags {
                if minute_changed {
                    let before = cycle.offset();
                    cycle.advance_pair();
                    prop_assert_eq!(cycle.offset(), (before + 2) % SPRITE_FRAME_COUNT);
                    prop_assert_eq!(cycle.index(), 0);
                } else {
                    cycle.toggle_frame();
                }
                prop_assert!(cycle.offset() % 2 == 0);
                prop_assert!(cycle.offset() < SPRITE_FRAME_COUNT);
                prop_assert!(cycle.frame() < SPRITE_FRAME_COUNT);
            }
        }

        #[test]
        fn prop_index_alternates_on_plain_ticks(count in 1usize..128) {
            let mut cycle = SpriteCycle::new();
            for i in 0..count {
                cycle.toggle_frame();
                prop_assert_eq!(cycle.index(), ((i + 1) % 2) as u8);
            }
        }
    }
}
