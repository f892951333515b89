//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a status message stays visible.
const MESSAGE_TIMEOUT_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the catalog from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the catalog from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Transient status message (empty = hidden) - read
    pub message: ReadSignal<String>,
    /// Transient status message - write
    set_message: WriteSignal<String>,
    /// Generation counter so an expired timer never clears a newer message
    message_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        message: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            message: message.0,
            set_message: message.1,
            message_seq: StoredValue::new(0),
        }
    }

    /// Trigger a full catalog reload
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a status message for ~3 seconds. At most one message is
    /// active; a later message replaces an earlier one.
    pub fn show_message(&self, text: impl Into<String>) {
        let seq = self.message_seq.get_value() + 1;
        self.message_seq.set_value(seq);
        self.set_message.set(text.into());

        let set_message = self.set_message;
        let message_seq = self.message_seq;
        spawn_local(async move {
            TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
            if message_seq.get_value() == seq {
                set_message.set(String::new());
            }
        });
    }
}
