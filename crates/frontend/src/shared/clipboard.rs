//! Clipboard utilities for copying text to clipboard
//!
//! Provides a fire-and-forget copy function using the Web Clipboard API and a
//! `CopyToClipboard` wrapper that shows a temporary "copied" acknowledgment.

use crate::shared::config::COPY_ACK_WINDOW_MS;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard
///
/// Uses the Web Clipboard API to copy the provided text.
/// The write happens asynchronously; failures are logged and otherwise ignored.
///
/// # Example
/// ```rust,ignore
/// copy_to_clipboard("Hello, World!");
/// ```
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("Clipboard unavailable: no window");
            return;
        };
        let clipboard = window.navigator().clipboard();
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            log::warn!("Clipboard write failed: {:?}", err);
        }
    });
}

/// Acknowledgment state of a copy trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    JustCopied,
}

impl CopyState {
    /// State after the user triggered a copy
    pub fn copied(self) -> Self {
        CopyState::JustCopied
    }

    /// State after the acknowledgment window elapsed
    pub fn elapsed(self) -> Self {
        CopyState::Idle
    }

    pub fn is_copied(self) -> bool {
        self == CopyState::JustCopied
    }
}

/// Copy acknowledgment: the visible state plus the pending revert timer.
///
/// `H` is the timer handle; dropping it must cancel the timer. Each copy gets a
/// ticket, and only the latest ticket may revert the state, so a timer that
/// fires after being replaced cannot cut a newer acknowledgment short.
pub struct CopyAck<H> {
    state: CopyState,
    pending: Option<H>,
    ticket: u64,
}

impl<H> Default for CopyAck<H> {
    fn default() -> Self {
        Self {
            state: CopyState::Idle,
            pending: None,
            ticket: 0,
        }
    }
}

impl<H> CopyAck<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Enter `JustCopied` and schedule the revert. `schedule` receives the
    /// ticket to pass back to [`CopyAck::elapsed`]. A previous timer is dropped.
    pub fn copied(&mut self, schedule: impl FnOnce(u64) -> H) {
        self.ticket += 1;
        self.state = self.state.copied();
        self.pending = Some(schedule(self.ticket));
    }

    /// Revert to `Idle` if `ticket` belongs to the latest copy.
    pub fn elapsed(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.state = self.state.elapsed();
            self.pending = None;
        }
    }

    /// Drop the pending timer, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Click-to-copy wrapper
///
/// Renders `children` with the current [`CopyState`]. A click copies `text`,
/// switches to `JustCopied` and schedules the switch back to `Idle` after
/// `window_ms`. Clicking again restarts the window. The pending timer is
/// cancelled when the component is unmounted.
///
/// ```rust,ignore
/// <CopyToClipboard text=address let:state>
///     {if state.is_copied() { "Copied" } else { "Copy" }}
/// </CopyToClipboard>
/// ```
#[component]
pub fn CopyToClipboard<F, V>(
    /// Text written to the clipboard
    #[prop(into)]
    text: String,
    /// Acknowledgment window in milliseconds
    #[prop(optional)]
    window_ms: Option<u32>,
    children: F,
) -> impl IntoView
where
    F: Fn(CopyState) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let (state, set_state) = signal(CopyState::Idle);
    let ack = StoredValue::new_local(CopyAck::<Timeout>::new());
    let window_ms = window_ms.unwrap_or(COPY_ACK_WINDOW_MS);

    on_cleanup(move || {
        ack.try_update_value(|current| current.cancel());
    });

    let handle_copy = move |_| {
        log::debug!("Copying {} chars to clipboard", text.len());
        copy_to_clipboard(&text);

        ack.update_value(|current| {
            current.copied(|ticket| {
                Timeout::new(window_ms, move || {
                    let next = ack.try_update_value(|current| {
                        current.elapsed(ticket);
                        current.state()
                    });
                    if let Some(next) = next {
                        set_state.try_set(next);
                    }
                })
            })
        });
        set_state.set(ack.with_value(|current| current.state()));
    };

    view! {
        <span class="copy-to-clipboard" on:click=handle_copy>
            {move || children(state.get())}
        </span>
    }
}
