//! Page lifecycle: theme, clock, button bindings, and alert dismissal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `on_ready` runs once the document is parsed. Alert dismissal is scheduled
//! separately at script start and does not depend on `on_ready`.
//!
//! TRADE-OFFS
//! ==========
//! Nothing guards against a second click while an update is in flight; the
//! disabled styling is the only cue. Timers are never cancelled and live as
//! long as the page.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::rc::Rc;
use std::time::Duration;

use super::ports::{Navigator, Notifier, PageControls, Scheduler};
use super::update_all::UpdateAllAction;
use crate::config::PageConfig;
use crate::net::api::WeatherApi;
use crate::util::alerts::{AlertSource, dismiss_transient};
use crate::util::clock::{ClockRenderer, ClockSource, TimeDisplay};
use crate::util::format::Locale;
use crate::util::theme::{PreferenceBackend, Theme, ThemeController, ThemeRoot, ThemeStore};

/// `true` while `document.readyState` says the parser is still running, i.e.
/// `on_ready` must wait for `DOMContentLoaded`.
#[must_use]
pub fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Everything the controller talks to.
pub struct PageServices<A> {
    pub config: PageConfig,
    pub preferences: Rc<dyn PreferenceBackend>,
    pub root: Rc<dyn ThemeRoot>,
    pub clock: Rc<dyn ClockSource>,
    pub time_display: Rc<dyn TimeDisplay>,
    pub alerts: Rc<dyn AlertSource>,
    pub controls: Rc<dyn PageControls>,
    pub scheduler: Rc<dyn Scheduler>,
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
    pub api: A,
}

/// What `on_ready` found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyReport {
    pub theme: Theme,
    pub toggle_bound: bool,
    pub update_bound: bool,
}

pub struct PageController<A> {
    theme: Rc<ThemeController>,
    clock: Rc<ClockRenderer>,
    update: Rc<UpdateAllAction<A>>,
    alerts: Rc<dyn AlertSource>,
    controls: Rc<dyn PageControls>,
    scheduler: Rc<dyn Scheduler>,
    clock_interval: Duration,
    alert_delay: Duration,
}

impl<A: WeatherApi + 'static> PageController<A> {
    pub fn new(services: PageServices<A>) -> Self {
        let PageServices {
            config,
            preferences,
            root,
            clock,
            time_display,
            alerts,
            controls,
            scheduler,
            notifier,
            navigator,
            api,
        } = services;

        let store = ThemeStore::new(preferences, config.storage_key.clone());
        let locale = Locale::from_tag(&config.locale);
        let clock_interval = config.clock_interval();
        let alert_delay = config.alert_dismiss_delay();

        Self {
            theme: Rc::new(ThemeController::new(store, root)),
            clock: Rc::new(ClockRenderer::new(clock, time_display, locale)),
            update: Rc::new(UpdateAllAction::new(api, notifier, navigator, config.icons, config.messages)),
            alerts,
            controls,
            scheduler,
            clock_interval,
            alert_delay,
        }
    }

    /// The update-all flow, shared with the global `weatherApp` export.
    #[must_use]
    pub fn update_action(&self) -> Rc<UpdateAllAction<A>> {
        Rc::clone(&self.update)
    }

    /// Apply the theme, start the clock, and bind the page's buttons.
    pub fn on_ready(&self) -> ReadyReport {
        let theme = self.theme.init();

        let theme_ctl = Rc::clone(&self.theme);
        let toggle_bound = self.controls.bind_theme_toggle(Box::new(move || {
            theme_ctl.toggle();
        }));

        self.clock.render();
        let clock = Rc::clone(&self.clock);
        self.scheduler.every(
            self.clock_interval,
            Box::new(move || {
                clock.render();
            }),
        );

        let update = Rc::clone(&self.update);
        let scheduler = Rc::clone(&self.scheduler);
        let update_bound = self.controls.bind_update_all(Box::new(move |control| {
            let update = Rc::clone(&update);
            scheduler.spawn(Box::pin(async move {
                update.run(control.as_ref()).await;
            }));
        }));

        log::info!("weather page ready (theme: {}, update button: {update_bound})", theme.as_str());
        ReadyReport { theme, toggle_bound, update_bound }
    }

    /// Close transient banners once the dismissal delay has passed.
    pub fn schedule_alert_dismissal(&self) {
        let alerts = Rc::clone(&self.alerts);
        self.scheduler.after(
            self.alert_delay,
            Box::new(move || {
                let closed = dismiss_transient(alerts.as_ref());
                log::debug!("dismissed {closed} alert(s)");
            }),
        );
    }
}
