//! The "update all weather" button flow.
//!
//! confirm → busy state → POST → notify + reload, or notify + restore.
//! A declined confirmation leaves the control and the network untouched.

#[cfg(test)]
#[path = "update_all_test.rs"]
mod update_all_test;

use std::rc::Rc;

use super::ports::{BusyControl, Navigator, Notifier};
use crate::config::{BusyIcons, UpdateMessages};
use crate::net::api::WeatherApi;
use crate::net::types::UpdateError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The user declined the confirmation dialog.
    Declined,
    /// The server accepted; the page is reloading.
    Reloaded { message: String },
    Failed(UpdateError),
}

pub struct UpdateAllAction<A> {
    api: A,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    icons: BusyIcons,
    messages: UpdateMessages,
}

impl<A: WeatherApi> UpdateAllAction<A> {
    pub fn new(
        api: A,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
        icons: BusyIcons,
        messages: UpdateMessages,
    ) -> Self {
        Self { api, notifier, navigator, icons, messages }
    }

    pub async fn run(&self, control: &dyn BusyControl) -> UpdateOutcome {
        if !self.notifier.confirm(&self.messages.confirm) {
            log::debug!("update-all declined");
            return UpdateOutcome::Declined;
        }

        let snapshot = control.snapshot();
        control.show_busy(&self.icons, &self.messages.busy_label);

        match self.api.update_all_weather().await {
            Ok(resp) => {
                if let (Some(ok), Some(failed)) = (resp.success_count, resp.failed_count) {
                    log::info!("update-all finished: {ok} updated, {failed} failed");
                }
                let message = resp.message.unwrap_or_else(|| self.messages.success_fallback.clone());
                self.notifier.notify(&message);
                self.navigator.reload();
                UpdateOutcome::Reloaded { message }
            }
            Err(err) => {
                log::warn!("update-all failed: {err}");
                self.notifier.notify(&failure_message(&self.messages.failure_prefix, &err));
                control.restore(&snapshot);
                UpdateOutcome::Failed(err)
            }
        }
    }
}

fn failure_message(prefix: &str, err: &UpdateError) -> String {
    format!("{prefix}{err}")
}
