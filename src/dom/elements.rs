//! `web-sys` views of the elements the page template renders.
//!
//! Lookups happen at call time, so elements added after load are still found.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use crate::config::BusyIcons;
use crate::controller::ports::{BusyControl, PageControls};
use crate::util::alerts::{AlertBanner, AlertSource};
use crate::util::clock::TimeDisplay;
use crate::util::theme::{Theme, ThemeRoot};

pub const UPDATE_BUTTON_ID: &str = "update-all-btn";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
const THEME_ATTRIBUTE: &str = "data-theme";
const CURRENT_TIME_SELECTOR: &str = ".current-time";
const ALERT_SELECTOR: &str = ".alert";
const PERMANENT_ALERT_CLASS: &str = "alert-permanent";
const DISABLED_CLASS: &str = "disabled";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The `<html>` element.
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn theme(&self) -> Option<String> {
        document()?.document_element()?.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_theme(&self, theme: Theme) {
        if let Some(el) = document().and_then(|d| d.document_element()) {
            let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}

/// Every `.current-time` element.
pub struct CurrentTimeElements;

impl TimeDisplay for CurrentTimeElements {
    fn show_time(&self, label: &str) {
        for el in query_all(CURRENT_TIME_SELECTOR) {
            el.set_text_content(Some(label));
        }
    }
}

pub struct DomAlert(Element);

impl AlertBanner for DomAlert {
    fn is_permanent(&self) -> bool {
        self.0.class_list().contains(PERMANENT_ALERT_CLASS)
    }

    fn close(&self) {
        let _ = self.0.class_list().remove_1("show");
        self.0.remove();
    }
}

pub struct DomAlerts;

impl AlertSource for DomAlerts {
    fn alerts(&self) -> Vec<Box<dyn AlertBanner>> {
        query_all(ALERT_SELECTOR)
            .into_iter()
            .map(|el| Box::new(DomAlert(el)) as Box<dyn AlertBanner>)
            .collect()
    }
}

/// A button whose label markup holds an `<i>` icon.
pub struct DomButton(Element);

impl DomButton {
    #[must_use]
    pub fn find(id: &str) -> Option<Self> {
        document()?.get_element_by_id(id).map(Self)
    }
}

impl BusyControl for DomButton {
    fn snapshot(&self) -> String {
        self.0.inner_html()
    }

    fn show_busy(&self, icons: &BusyIcons, label: &str) {
        if let Ok(Some(icon)) = self.0.query_selector("i") {
            let _ = icon.class_list().remove_1(&icons.idle);
            let _ = icon.class_list().add_1(&icons.busy);
        }
        let _ = self.0.class_list().add_1(DISABLED_CLASS);
        self.0.set_inner_html(&format!(r#"<i class="bi {}"></i> {label}"#, icons.busy));
    }

    fn restore(&self, snapshot: &str) {
        self.0.set_inner_html(snapshot);
        let _ = self.0.class_list().remove_1(DISABLED_CLASS);
    }
}

/// Click bindings on `#theme-toggle` and `#update-all-btn`.
pub struct DomControls;

fn on_click(el: &Element, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()).is_ok() {
        // Handlers live for the page.
        cb.forget();
    }
}

impl PageControls for DomControls {
    fn bind_theme_toggle(&self, handler: Box<dyn Fn()>) -> bool {
        let Some(el) = document().and_then(|d| d.get_element_by_id(THEME_TOGGLE_ID)) else {
            return false;
        };
        on_click(&el, move |_| handler());
        true
    }

    fn bind_update_all(&self, handler: Box<dyn Fn(Rc<dyn BusyControl>)>) -> bool {
        let Some(el) = document().and_then(|d| d.get_element_by_id(UPDATE_BUTTON_ID)) else {
            return false;
        };
        let button = el.clone();
        on_click(&el, move |event| {
            event.prevent_default();
            handler(Rc::new(DomButton(button.clone())));
        });
        true
    }
}
