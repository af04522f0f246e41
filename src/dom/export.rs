//! `window.weatherApp` for other scripts on the page.
//!
//! ```text
//! weatherApp.utils.formatDate(date?)         -> "2024년 3월 5일"
//! weatherApp.utils.getTempColor(temp)        -> "text-danger" | ...
//! weatherApp.utils.getPrecipBadgeClass(pct)  -> "bg-danger" | ...
//! weatherApp.updateAllWeather(event?)        -> Promise<boolean>
//! ```

use std::rc::Rc;

use js_sys::{Date, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::elements::{DomButton, UPDATE_BUTTON_ID};
use crate::controller::update_all::{UpdateAllAction, UpdateOutcome};
use crate::net::api::WeatherApi;
use crate::util::format::{Locale, format_calendar_date, precip_badge_class, temp_color_class};

const GLOBAL_NAME: &str = "weatherApp";

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

/// Accepts anything `new Date(value)` does; `undefined` means now.
fn format_js_date(value: &JsValue, locale: Locale) -> String {
    let date = if value.is_undefined() { Date::new_0() } else { Date::new(value) };
    if date.get_time().is_nan() {
        return String::new();
    }
    format_calendar_date(i64::from(date.get_full_year()), date.get_month() + 1, date.get_date(), locale)
}

fn utils(locale: Locale) -> Object {
    let utils = Object::new();

    let format = Closure::wrap(
        Box::new(move |value: JsValue| -> String { format_js_date(&value, locale) }) as Box<dyn Fn(JsValue) -> String>
    );
    set(&utils, "formatDate", &format.into_js_value());

    let temp = Closure::wrap(
        Box::new(|temp: f64| -> String { temp_color_class(temp).to_owned() }) as Box<dyn Fn(f64) -> String>
    );
    set(&utils, "getTempColor", &temp.into_js_value());

    let precip = Closure::wrap(
        Box::new(|pct: f64| -> String { precip_badge_class(pct).to_owned() }) as Box<dyn Fn(f64) -> String>
    );
    set(&utils, "getPrecipBadgeClass", &precip.into_js_value());

    utils
}

/// Publish the helpers and the update-all action on `window`.
pub fn install<A: WeatherApi + 'static>(action: Rc<UpdateAllAction<A>>, locale: Locale) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let app = Object::new();
    set(&app, "utils", &utils(locale));

    let update = Closure::wrap(Box::new(move |event: JsValue| -> Promise {
        if let Some(event) = event.dyn_ref::<web_sys::Event>() {
            event.prevent_default();
        }
        let action = Rc::clone(&action);
        wasm_bindgen_futures::future_to_promise(async move {
            let Some(button) = DomButton::find(UPDATE_BUTTON_ID) else {
                log::warn!("updateAllWeather called without #{UPDATE_BUTTON_ID}");
                return Ok(JsValue::FALSE);
            };
            let outcome = action.run(&button).await;
            Ok(JsValue::from_bool(matches!(outcome, UpdateOutcome::Reloaded { .. })))
        })
    }) as Box<dyn Fn(JsValue) -> Promise>);
    set(&app, "updateAllWeather", &update.into_js_value());

    set(&window, GLOBAL_NAME, &app);
}
