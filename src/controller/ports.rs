//! Capabilities the controller needs from its host page.
//!
//! The browser implementations live in `dom`; tests use in-memory doubles.

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::config::BusyIcons;

/// Blocking user dialogs.
pub trait Notifier {
    /// Ask a yes/no question. `true` means the user accepted.
    fn confirm(&self, question: &str) -> bool;
    fn notify(&self, message: &str);
}

/// Page-level navigation side effects.
pub trait Navigator {
    /// Re-fetch the current page from the server.
    fn reload(&self);
}

/// The control that triggered an async action.
pub trait BusyControl {
    /// Capture the control's current markup for [`BusyControl::restore`].
    fn snapshot(&self) -> String;
    /// Swap the icon, disable, and replace the label.
    fn show_busy(&self, icons: &BusyIcons, label: &str);
    /// Put back the captured markup and re-enable.
    fn restore(&self, snapshot: &str);
}

/// Click bindings for the page's optional controls.
pub trait PageControls {
    /// Returns `false` when the page has no theme toggle.
    fn bind_theme_toggle(&self, handler: Box<dyn Fn()>) -> bool;
    /// Returns `false` when the page has no update-all button. The handler
    /// receives the clicked control after default activation is suppressed.
    fn bind_update_all(&self, handler: Box<dyn Fn(Rc<dyn BusyControl>)>) -> bool;
}

/// Timers and task spawning on the UI event loop.
pub trait Scheduler {
    /// Run `tick` every `period` for the life of the page.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>);
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>);
    /// Drive `task` to completion without blocking the caller.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
