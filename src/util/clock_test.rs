use std::cell::{Cell, RefCell};

use super::*;

struct FixedClock(Cell<NaiveTime>);

impl ClockSource for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0.get()
    }
}

#[derive(Default)]
struct RecordingDisplay {
    labels: RefCell<Vec<String>>,
}

impl TimeDisplay for RecordingDisplay {
    fn show_time(&self, label: &str) {
        self.labels.borrow_mut().push(label.to_owned());
    }
}

fn is_hour_minute(label: &str) -> bool {
    let bytes = label.as_bytes();
    bytes.len() == 5 && bytes[2] == b':' && label.chars().filter(char::is_ascii_digit).count() == 4
}

#[test]
fn render_writes_label_once_and_returns_it() {
    let clock = Rc::new(FixedClock(Cell::new(NaiveTime::from_hms_opt(9, 7, 30).unwrap())));
    let display = Rc::new(RecordingDisplay::default());
    let renderer = ClockRenderer::new(clock, display.clone(), Locale::Korean);

    assert_eq!(renderer.render(), "오전 09:07");
    assert_eq!(*display.labels.borrow(), vec!["오전 09:07".to_owned()]);
}

#[test]
fn render_follows_the_source_between_calls() {
    let clock = Rc::new(FixedClock(Cell::new(NaiveTime::from_hms_opt(18, 59, 0).unwrap())));
    let display = Rc::new(RecordingDisplay::default());
    let renderer = ClockRenderer::new(clock.clone(), display.clone(), Locale::Numeric);

    renderer.render();
    clock.0.set(NaiveTime::from_hms_opt(19, 0, 0).unwrap());
    renderer.render();

    assert_eq!(*display.labels.borrow(), vec!["18:59".to_owned(), "19:00".to_owned()]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn system_clock_renders_hour_minute_pattern() {
    let display = Rc::new(RecordingDisplay::default());
    let renderer = ClockRenderer::new(Rc::new(SystemClock), display, Locale::Numeric);
    let label = renderer.render();
    assert!(is_hour_minute(&label), "unexpected label {label}");
}
