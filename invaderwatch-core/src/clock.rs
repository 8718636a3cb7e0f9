//! Calendar keeping and display string formatting
//!
//! The host platform only hands us a once-per-second tick; which calendar
//! units rolled over (minute/hour/day) is derived here by comparing
//! consecutive timestamps.

use core::fmt::Write;

use heapless::String;

use crate::config::ClockStyle;

/// Capacity of the time string buffer ("12:34 pm")
pub const TIME_TEXT_LEN: usize = 8;

/// Capacity of the date string buffer ("Wed, May 28")
pub const DATE_TEXT_LEN: usize = 12;

static WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

static MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A wall-clock timestamp with one-second resolution
///
/// `month` and `day` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    /// Create a timestamp from calendar fields
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check if a year is a leap year
    pub const fn is_leap_year(year: u16) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Number of days in a month
    pub const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if Self::is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => 0,
        }
    }

    /// Day of the week, 0 = Sunday (Sakamoto's method)
    pub fn weekday(&self) -> usize {
        const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let mut y = self.year as i32;
        if self.month < 3 {
            y -= 1;
        }
        let m = (self.month as usize).clamp(1, 12);
        ((y + y / 4 - y / 100 + y / 400 + T[m - 1] + self.day as i32) % 7) as usize
    }

    /// Advance the timestamp by one second, rolling over calendar fields
    pub fn advance_second(&mut self) {
        self.second += 1;
        if self.second < 60 {
            return;
        }
        self.second = 0;
        self.minute += 1;
        if self.minute < 60 {
            return;
        }
        self.minute = 0;
        self.hour += 1;
        if self.hour < 24 {
            return;
        }
        self.hour = 0;
        self.day += 1;
        if self.day <= Self::days_in_month(self.year, self.month) {
            return;
        }
        self.day = 1;
        self.month += 1;
        if self.month <= 12 {
            return;
        }
        self.month = 1;
        self.year += 1;
    }
}

/// Format the time line ("3:07 pm" or "15:07")
pub fn format_time(t: &DateTime, style: ClockStyle, out: &mut String<TIME_TEXT_LEN>) {
    out.clear();
    match style {
        ClockStyle::TwentyFourHour => {
            let _ = write!(out, "{:02}:{:02}", t.hour, t.minute);
        }
        ClockStyle::TwelveHour => {
            let (hour, suffix) = match t.hour {
                0 => (12, "am"),
                1..=11 => (t.hour, "am"),
                12 => (12, "pm"),
                _ => (t.hour - 12, "pm"),
            };
            let _ = write!(out, "{}:{:02} {}", hour, t.minute, suffix);
        }
    }
}

/// Format the date line ("Tue, Oct 14")
pub fn format_date(t: &DateTime, out: &mut String<DATE_TEXT_LEN>) {
    out.clear();
    let month = (t.month as usize).clamp(1, 12);
    let _ = write!(
        out,
        "{}, {} {}",
        WEEKDAY_NAMES[t.weekday()],
        MONTH_NAMES[month - 1],
        t.day
    );
}

/// A clock tick, carrying the new timestamp and which calendar units rolled
/// over since the previous tick
///
/// The second is implied to have changed on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickEvent {
    /// Timestamp after the tick
    pub time: DateTime,
    /// Minute field rolled over
    pub minute_changed: bool,
    /// Hour field rolled over
    pub hour_changed: bool,
    /// Day field rolled over
    pub day_changed: bool,
}

impl TickEvent {
    /// Derive a tick event from two consecutive timestamps
    pub fn between(prev: DateTime, now: DateTime) -> Self {
        Self {
            time: now,
            minute_changed: prev.minute != now.minute,
            hour_changed: prev.hour != now.hour,
            day_changed: prev.day != now.day || prev.month != now.month || prev.year != now.year,
        }
    }
}

/// A software wall clock advanced one second at a time
///
/// The firmware reads a hardware RTC instead; this type backs the tests and
/// serves as a fallback time source.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    now: DateTime,
}

impl WallClock {
    /// Create a clock starting at the given timestamp
    pub const fn new(start: DateTime) -> Self {
        Self { now: start }
    }

    /// Current timestamp
    pub fn now(&self) -> DateTime {
        self.now
    }

    /// Advance one second and report which units rolled over
    pub fn tick(&mut self) -> TickEvent {
        let prev = self.now;
        self.now.advance_second();
        TickEvent::between(prev, self.now)
    }
}
