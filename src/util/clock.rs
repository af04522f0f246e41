//! Header clock rendering.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::rc::Rc;

use chrono::NaiveTime;

use super::format::{Locale, format_clock};

/// Source of the current local wall-clock time.
pub trait ClockSource {
    fn now(&self) -> NaiveTime;
}

/// Local time from the host: JS `Date` in the browser, chrono elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> NaiveTime {
        #[cfg(feature = "hydrate")]
        {
            let now = js_sys::Date::new_0();
            NaiveTime::from_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            chrono::Local::now().time()
        }
    }
}

/// Every element that shows the current time.
pub trait TimeDisplay {
    fn show_time(&self, label: &str);
}

pub struct ClockRenderer {
    source: Rc<dyn ClockSource>,
    display: Rc<dyn TimeDisplay>,
    locale: Locale,
}

impl ClockRenderer {
    pub fn new(source: Rc<dyn ClockSource>, display: Rc<dyn TimeDisplay>, locale: Locale) -> Self {
        Self { source, display, locale }
    }

    /// Write the current time into the display once and return the label.
    pub fn render(&self) -> String {
        let label = format_clock(self.source.now(), self.locale);
        self.display.show_time(&label);
        label
    }
}
