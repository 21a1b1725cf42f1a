//! Confirmation dialog UI component
//!
//! Blocks a destructive action until the user approves or cancels it.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use tokio::sync::oneshot;

use crate::app::AppState;
use crate::store::Confirm;

/// A question waiting for the user's answer
#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    responder: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
}

impl ConfirmRequest {
    fn new(message: &str) -> (Self, oneshot::Receiver<bool>) {
        let (tx, rx) = oneshot::channel();
        let request = Self {
            message: message.to_string(),
            responder: Rc::new(RefCell::new(Some(tx))),
        };
        (request, rx)
    }

    /// Resolve the pending question. Later answers are ignored.
    pub fn answer(&self, approved: bool) {
        if let Some(tx) = self.responder.borrow_mut().take() {
            let _ = tx.send(approved);
        }
    }
}

/// [`Confirm`] backed by the [`ConfirmDialog`] overlay
#[derive(Clone, Copy)]
pub struct DialogConfirm {
    pending: Signal<Option<ConfirmRequest>>,
}

impl DialogConfirm {
    pub fn new(pending: Signal<Option<ConfirmRequest>>) -> Self {
        Self { pending }
    }
}

#[async_trait(?Send)]
impl Confirm for DialogConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let mut pending = self.pending;
        let rx = post(&mut pending.write(), message);
        rx.await.unwrap_or(false)
    }
}

/// Put a new question in `slot`. An unanswered question already there is refused.
fn post(slot: &mut Option<ConfirmRequest>, message: &str) -> oneshot::Receiver<bool> {
    let (request, rx) = ConfirmRequest::new(message);
    if let Some(previous) = slot.replace(request) {
        tracing::debug!("Replacing unanswered confirmation: {}", previous.message);
        previous.answer(false);
    }
    rx
}

#[component]
pub fn ConfirmDialog() -> Element {
    let app_state = use_context::<AppState>();
    let mut pending = app_state.confirm;

    let Some(request) = pending.read().clone() else {
        return rsx! { div {} };
    };
    let message = request.message.clone();
    let request_cancel = request.clone();

    rsx! {
        div {
            class: "confirm-backdrop fixed inset-0 bg-black/60 backdrop-blur-2xl z-50 flex items-center justify-center p-4",

            div {
                class: "confirm-dialog w-full max-w-md glass-strong rounded-2xl overflow-hidden animate-scale-in",

                div {
                    class: "p-6 border-b border-[var(--border-subtle)]",
                    h2 {
                        class: "text-lg font-semibold text-[var(--text-primary)]",
                        "Please confirm"
                    }
                    p {
                        class: "mt-2 text-sm text-[var(--text-secondary)]",
                        "{message}"
                    }
                }

                div {
                    class: "p-6 flex gap-3",

                    button {
                        class: "btn-ghost flex-1",
                        onclick: move |_| {
                            request_cancel.answer(false);
                            pending.set(None);
                        },
                        "Cancel"
                    }

                    button {
                        class: "btn-primary flex-1",
                        onclick: move |_| {
                            request.answer(true);
                            pending.set(None);
                        },
                        "Confirm"
                    }
                }
            }
        }
    }
}
