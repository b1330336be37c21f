//! Single-slot browser timer.
//!
//! Each animated component owns one [`TimerSlot`]. Arming it replaces any
//! pending callback, so at most one timeout is ever outstanding per slot.

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<TimeoutHandle>>);

impl TimerSlot {
    pub fn new() -> Self {
        Self(StoredValue::new(None))
    }

    /// Schedule `callback` after `delay_ms`, cancelling the previous one.
    pub fn arm(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.clear();
        match set_timeout_with_handle(callback, Duration::from_millis(u64::from(delay_ms))) {
            Ok(handle) => {
                self.0.try_update_value(|slot| *slot = Some(handle));
            }
            Err(err) => {
                web_sys::console::warn_2(&"timer: failed to schedule".into(), &err);
            }
        }
    }

    /// Cancel the pending callback, if any.
    pub fn clear(&self) {
        if let Some(Some(handle)) = self.0.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
