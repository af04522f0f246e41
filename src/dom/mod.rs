//! Browser bindings (hydrate builds only).
//!
//! SYSTEM CONTEXT
//! ==============
//! `elements` adapts template elements, `browser` adapts window services, and
//! `export` publishes `window.weatherApp`. `start` is the WASM entry point
//! that wires them into a [`PageController`].

pub mod browser;
pub mod elements;
pub mod export;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use self::browser::{BrowserDialogs, BrowserNavigator, LocalStorageBackend, TimerScheduler};
use self::elements::{CurrentTimeElements, DocumentRoot, DomAlerts, DomControls};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::page::{PageController, PageServices, is_loading_state};
use crate::net::api::HttpWeatherApi;
use crate::util::clock::SystemClock;
use crate::util::format::Locale;

fn read_config(document: &Document) -> PageConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    PageConfig::from_json(raw.as_deref()).unwrap_or_else(|err| {
        log::warn!("{err}; using default page config");
        PageConfig::default()
    })
}

fn is_loading(document: &Document) -> bool {
    is_loading_state(&document.ready_state())
}

/// Initialize logging, build the controller, and hook page load.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = read_config(&document);
    let locale = Locale::from_tag(&config.locale);
    let api = HttpWeatherApi::new(config.update_endpoint.clone(), config.messages.generic_failure.clone());

    let controller = Rc::new(PageController::new(PageServices {
        config,
        preferences: Rc::new(LocalStorageBackend),
        root: Rc::new(DocumentRoot),
        clock: Rc::new(SystemClock),
        time_display: Rc::new(CurrentTimeElements),
        alerts: Rc::new(DomAlerts),
        controls: Rc::new(DomControls),
        scheduler: Rc::new(TimerScheduler),
        notifier: Rc::new(BrowserDialogs),
        navigator: Rc::new(BrowserNavigator),
        api,
    }));

    controller.schedule_alert_dismissal();
    export::install(controller.update_action(), locale);

    if is_loading(&document) {
        let ready = Rc::clone(&controller);
        let cb = Closure::once_into_js(move || {
            ready.on_ready();
        });
        let _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
    } else {
        controller.on_ready();
    }
}
