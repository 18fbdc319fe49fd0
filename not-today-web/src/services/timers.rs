//! Interval timers scoped to the reactive owner that starts them.
//!
//! An interval registered here is cleared when its owner is disposed, so a
//! torn-down page never receives another tick.

use std::fmt::Debug;
use std::time::Duration;

use leptos::prelude::*;

/// Run `tick` every `period` for the lifetime of the current owner.
///
/// The first call happens one `period` after mount; callers that need a
/// value at mount time seed it before calling this.
pub fn use_interval<F>(period: Duration, tick: F)
where
    F: Fn() + 'static,
{
    schedule_interval(period, tick, set_interval_with_handle, |handle: IntervalHandle| {
        handle.clear()
    });
}

/// Start an interval through `start` and register `clear` as the owner's
/// cleanup. A failed start registers nothing.
fn schedule_interval<F, H, E, S, C>(period: Duration, tick: F, start: S, clear: C)
where
    F: Fn() + 'static,
    S: FnOnce(F, Duration) -> Result<H, E>,
    E: Debug,
    H: Send + Sync + 'static,
    C: FnOnce(H) + Send + Sync + 'static,
{
    match start(tick, period) {
        Ok(handle) => {
            log::debug!("[TIMER] started {:?} interval", period);
            on_cleanup(move || {
                clear(handle);
                log::debug!("[TIMER] cleared {:?} interval", period);
            });
        }
        Err(e) => log::error!("[TIMER] Failed to start {:?} interval: {:?}", period, e),
    }
}
