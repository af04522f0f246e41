//! In-memory doubles for the controller ports.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::ports::{BusyControl, Navigator, Notifier, PageControls, Scheduler};
use crate::config::{BusyIcons, UpdateMessages};
use crate::net::api::{WeatherApi, interpret_reply};
use crate::net::types::{UpdateAllResponse, UpdateError};

pub const IDLE_MARKUP: &str = r#"<i class="bi bi-arrow-clockwise"></i> Update all"#;

pub struct ScriptedNotifier {
    accept: bool,
    pub questions: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<String>>,
}

impl ScriptedNotifier {
    pub fn answering(accept: bool) -> Self {
        Self { accept, questions: RefCell::default(), notices: RefCell::default() }
    }
}

impl Notifier for ScriptedNotifier {
    fn confirm(&self, question: &str) -> bool {
        self.questions.borrow_mut().push(question.to_owned());
        self.accept
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }
}

#[derive(Default)]
pub struct CountingNavigator {
    pub reloads: Cell<u32>,
}

impl Navigator for CountingNavigator {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// Button double whose icon lives inside its markup, like the real element.
pub struct FakeButton {
    pub markup: RefCell<String>,
    pub disabled: Cell<bool>,
}

impl FakeButton {
    pub fn idle() -> Self {
        Self { markup: RefCell::new(IDLE_MARKUP.to_owned()), disabled: Cell::new(false) }
    }

    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }
}

impl BusyControl for FakeButton {
    fn snapshot(&self) -> String {
        self.markup()
    }

    fn show_busy(&self, icons: &BusyIcons, label: &str) {
        self.disabled.set(true);
        *self.markup.borrow_mut() = format!(r#"<i class="bi {}"></i> {label}"#, icons.busy);
    }

    fn restore(&self, snapshot: &str) {
        *self.markup.borrow_mut() = snapshot.to_owned();
        self.disabled.set(false);
    }
}

/// Canned server reply, or a transport failure when `status` is `None`.
pub struct ScriptedApi {
    status: Option<u16>,
    body: String,
    pub calls: Cell<u32>,
}

impl ScriptedApi {
    pub fn replying(status: u16, body: &str) -> Self {
        Self { status: Some(status), body: body.to_owned(), calls: Cell::new(0) }
    }

    pub fn unreachable(reason: &str) -> Self {
        Self { status: None, body: reason.to_owned(), calls: Cell::new(0) }
    }
}

impl WeatherApi for ScriptedApi {
    async fn update_all_weather(&self) -> Result<UpdateAllResponse, UpdateError> {
        self.calls.set(self.calls.get() + 1);
        match self.status {
            Some(status) => interpret_reply(status, &self.body, &UpdateMessages::default().generic_failure),
            None => Err(UpdateError::Transport(self.body.clone())),
        }
    }
}

impl WeatherApi for Rc<ScriptedApi> {
    async fn update_all_weather(&self) -> Result<UpdateAllResponse, UpdateError> {
        (**self).update_all_weather().await
    }
}

struct Repeating {
    period: Duration,
    next_due: Duration,
    tick: Box<dyn FnMut()>,
}

struct OneShot {
    due: Duration,
    task: Option<Box<dyn FnOnce()>>,
}

/// Virtual-time scheduler; nothing runs until `advance`/`run_spawned`.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    repeating: RefCell<Vec<Repeating>>,
    one_shots: RefCell<Vec<OneShot>>,
    spawned: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl ManualScheduler {
    pub fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);

        for timer in self.repeating.borrow_mut().iter_mut() {
            while timer.next_due <= now {
                (timer.tick)();
                timer.next_due += timer.period;
            }
        }

        let due: Vec<_> = self
            .one_shots
            .borrow_mut()
            .iter_mut()
            .filter(|shot| shot.due <= now)
            .filter_map(|shot| shot.task.take())
            .collect();
        for task in due {
            task();
        }
    }

    pub fn pending_spawns(&self) -> usize {
        self.spawned.borrow().len()
    }

    pub fn run_spawned(&self) {
        let tasks: Vec<_> = self.spawned.borrow_mut().drain(..).collect();
        for task in tasks {
            futures::executor::block_on(task);
        }
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) {
        let next_due = self.now.get() + period;
        self.repeating.borrow_mut().push(Repeating { period, next_due, tick });
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let due = self.now.get() + delay;
        self.one_shots.borrow_mut().push(OneShot { due, task: Some(task) });
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawned.borrow_mut().push(task);
    }
}

/// Page controls double; `has_*` flags model whether each element exists.
pub struct FakeControls {
    has_toggle: bool,
    has_update: bool,
    toggle: RefCell<Option<Box<dyn Fn()>>>,
    update: RefCell<Option<Box<dyn Fn(Rc<dyn BusyControl>)>>>,
}

impl FakeControls {
    pub fn new(has_toggle: bool, has_update: bool) -> Self {
        Self { has_toggle, has_update, toggle: RefCell::new(None), update: RefCell::new(None) }
    }

    pub fn click_toggle(&self) {
        if let Some(handler) = self.toggle.borrow().as_ref() {
            handler();
        }
    }

    pub fn click_update(&self, button: Rc<FakeButton>) {
        if let Some(handler) = self.update.borrow().as_ref() {
            handler(button);
        }
    }
}

impl PageControls for FakeControls {
    fn bind_theme_toggle(&self, handler: Box<dyn Fn()>) -> bool {
        if self.has_toggle {
            *self.toggle.borrow_mut() = Some(handler);
        }
        self.has_toggle
    }

    fn bind_update_all(&self, handler: Box<dyn Fn(Rc<dyn BusyControl>)>) -> bool {
        if self.has_update {
            *self.update.borrow_mut() = Some(handler);
        }
        self.has_update
    }
}
