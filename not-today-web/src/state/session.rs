//! Session state management
//!
//! Each page provides its own [`SessionContext`]; leaving the page disposes
//! the session along with its timers.

use std::time::Duration;

use chrono::{DateTime, Local};
use leptos::prelude::*;
use shared::catalog::{CatalogItem, GameId, SpaceGame};
use shared::clock::format_clock;
use shared::quiz::OptionMark;
use shared::{CommerceError, NoticeLog, NotificationSink, Session};

use crate::services::notify::AlertSink;
use crate::services::timers::use_interval;
use crate::utils::constants::{CLOCK_TICK_MS, VIEWER_TICK_MS};

/// View state holder for one page view
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
    pub now: RwSignal<DateTime<Local>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            // Seeded at mount so the first render already shows the time
            now: RwSignal::new(Local::now()),
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn clock_label(&self) -> String {
        self.now.with(format_clock)
    }

    pub fn score(&self) -> u32 {
        self.session.with(|s| s.score())
    }

    pub fn cart_len(&self) -> usize {
        self.session.with(|s| s.cart().len())
    }

    pub fn is_answered(&self) -> bool {
        self.session.with(|s| s.quiz().is_answered())
    }

    pub fn option_mark(&self, option: &str) -> OptionMark {
        self.session.with(|s| s.quiz().mark(option))
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.session.with(|s| s.quiz().feedback())
    }

    pub fn email(&self) -> String {
        self.session.with(|s| s.email().to_string())
    }

    pub fn comment(&self) -> String {
        self.session.with(|s| s.comment().to_string())
    }

    pub fn selected_game(&self) -> &'static SpaceGame {
        self.session.with(|s| s.selected_game())
    }

    pub fn viewer_label(&self) -> String {
        self.session.with(|s| s.viewers().label())
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    pub fn submit_answer(&self, choice: &str) {
        self.session.update(|s| s.submit_answer(choice));
    }

    pub fn purchase_with_currency(&self, item: &'static CatalogItem) {
        self.with_notices(|s, notices| s.purchase_with_currency(item, notices));
    }

    /// `None` when the session has already been disposed.
    pub fn redeem_with_points(&self, item: &'static CatalogItem) -> Option<Result<(), CommerceError>> {
        self.with_notices(|s, notices| s.redeem_with_points(item, notices))
    }

    pub fn set_email(&self, email: String) {
        self.session.update(|s| s.set_email(email));
    }

    pub fn set_comment(&self, comment: String) {
        self.session.update(|s| s.set_comment(comment));
    }

    pub fn submit_email(&self) {
        self.with_notices(|s, notices| s.submit_email(notices));
    }

    pub fn submit_comment(&self) {
        self.with_notices(|s, notices| s.submit_comment(notices));
    }

    pub fn select_game(&self, id: GameId) {
        self.session.update(|s| s.select_game(id));
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    pub fn tick_clock(&self) {
        self.now.set(Local::now());
    }

    pub fn tick_viewers(&self) {
        self.session.update(|s| s.tick_viewers(&mut rand::thread_rng()));
    }

    /// Start the one-second header clock for the current owner.
    pub fn start_clock(&self) {
        let ctx = *self;
        use_interval(Duration::from_millis(CLOCK_TICK_MS), move || ctx.tick_clock());
    }

    /// Start the five-second viewer random walk for the current owner.
    pub fn start_viewer_simulation(&self) {
        let ctx = *self;
        use_interval(Duration::from_millis(VIEWER_TICK_MS), move || ctx.tick_viewers());
    }

    /// Run a transition that may produce notices, then show them.
    ///
    /// Alerts block, so they are shown only after the signal write has been
    /// released and subscribers have been told about the new state.
    fn with_notices<R>(&self, transition: impl FnOnce(&mut Session, &NoticeLog) -> R) -> Option<R> {
        self.with_notices_into(&AlertSink, transition)
    }

    fn with_notices_into<R>(
        &self,
        sink: &dyn NotificationSink,
        transition: impl FnOnce(&mut Session, &NoticeLog) -> R,
    ) -> Option<R> {
        let notices = NoticeLog::new();
        let result = self.session.try_update(|s| transition(s, &notices));
        if result.is_none() {
            log::warn!("[SESSION] transition on a disposed session ignored");
        }
        notices.drain_into(sink);
        result
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
