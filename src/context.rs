//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after any create/delete/renew so pages refetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after any create/delete/renew so pages refetch - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a wholesale refetch of the current page's collections.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
