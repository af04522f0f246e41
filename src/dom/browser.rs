//! Window-level services: storage, dialogs, navigation, timers.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::callback::{Interval, Timeout};

use crate::controller::ports::{Navigator, Notifier, Scheduler};
use crate::util::theme::PreferenceBackend;

/// `window.localStorage`. Reads and writes silently no-op when storage is
/// unavailable (private mode, disabled cookies).
pub struct LocalStorageBackend;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// `window.confirm` / `window.alert`.
pub struct BrowserDialogs;

impl Notifier for BrowserDialogs {
    fn confirm(&self, question: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(question).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// `location.reload()`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

/// `gloo-timers` callbacks and `spawn_local`. Timers are never cancelled;
/// they run until the page unloads.
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) {
        let _ = Interval::new(millis(period), tick).forget();
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let _ = Timeout::new(millis(delay), task).forget();
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
