//! Locale-aware date/time labels and weather severity classes.
//!
//! These are pure helpers; the page's global `weatherApp.utils` export and the
//! clock renderer both call into them.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display conventions selected from a BCP-47 language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Korean,
    English,
    /// ISO-style numeric output for any other tag.
    Numeric,
}

impl Locale {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        match lang.as_str() {
            "ko" => Self::Korean,
            "en" => Self::English,
            _ => Self::Numeric,
        }
    }
}

/// Long-form calendar date, e.g. `2024년 3월 5일` or `March 5, 2024`.
#[must_use]
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Korean => format!("{}년 {}월 {}일", date.year(), date.month(), date.day()),
        Locale::English => {
            let month = ENGLISH_MONTHS[date.month0() as usize];
            format!("{month} {}, {}", date.day(), date.year())
        }
        Locale::Numeric => date.format("%Y-%m-%d").to_string(),
    }
}

/// Long-form date from loose calendar fields (1-based month), as read off a
/// JS `Date`. Out-of-range fields yield an empty string.
#[must_use]
pub fn format_calendar_date(year: i64, month: u32, day: u32, locale: Locale) -> String {
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .map(|d| format_date(d, locale))
        .unwrap_or_default()
}

/// Two-digit hour:minute label for the header clock.
#[must_use]
pub fn format_clock(time: NaiveTime, locale: Locale) -> String {
    let (pm, hour12) = time.hour12();
    let minute = time.minute();
    match locale {
        Locale::Korean => {
            let meridiem = if pm { "오후" } else { "오전" };
            format!("{meridiem} {hour12:02}:{minute:02}")
        }
        Locale::English => {
            let meridiem = if pm { "PM" } else { "AM" };
            format!("{hour12:02}:{minute:02} {meridiem}")
        }
        Locale::Numeric => format!("{:02}:{minute:02}", time.hour()),
    }
}

/// Text color bucket for a temperature in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempColor {
    Hot,
    Warm,
    Mild,
    Cool,
    Freezing,
}

impl TempColor {
    /// Thresholds are inclusive lower bounds checked from the highest down.
    #[must_use]
    pub fn for_temperature(temp: f64) -> Self {
        if temp >= 25.0 {
            Self::Hot
        } else if temp >= 15.0 {
            Self::Warm
        } else if temp >= 5.0 {
            Self::Mild
        } else if temp >= 0.0 {
            Self::Cool
        } else {
            Self::Freezing
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Hot => "text-danger",
            Self::Warm => "text-warning",
            Self::Mild => "text-success",
            Self::Cool => "text-primary",
            Self::Freezing => "text-info",
        }
    }
}

/// Badge color bucket for a precipitation probability in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipBadge {
    Likely,
    Possible,
    Slight,
    Unlikely,
}

impl PrecipBadge {
    #[must_use]
    pub fn for_probability(percent: f64) -> Self {
        if percent >= 60.0 {
            Self::Likely
        } else if percent >= 40.0 {
            Self::Possible
        } else if percent >= 20.0 {
            Self::Slight
        } else {
            Self::Unlikely
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Likely => "bg-danger",
            Self::Possible => "bg-warning",
            Self::Slight => "bg-info",
            Self::Unlikely => "bg-secondary",
        }
    }
}

#[must_use]
pub fn temp_color_class(temp: f64) -> &'static str {
    TempColor::for_temperature(temp).css_class()
}

#[must_use]
pub fn precip_badge_class(percent: f64) -> &'static str {
    PrecipBadge::for_probability(percent).css_class()
}
