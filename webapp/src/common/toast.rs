use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use api::search::SearchError;

// one-shot user-facing notices; pushed by the controller wiring, displayed
// transiently by the tray below and never persisted

const TOAST_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastCategory {
    ValidationError,
    EmptyResult,
    FetchError,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub category: ToastCategory,
    pub message: String,
}

impl Notification {
    pub fn validation() -> Notification {
        Notification {
            category: ToastCategory::ValidationError,
            message: String::from("Please enter a search term."),
        }
    }

    pub fn empty_result() -> Notification {
        Notification {
            category: ToastCategory::EmptyResult,
            message: String::from("No movies found for your request."),
        }
    }

    pub fn fetch_error(err: &SearchError) -> Notification {
        Notification {
            category: ToastCategory::FetchError,
            message: err.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

// global toast signal
//
// like the modal stack in the rest of the app, a single global signal means
// any component (or spawned fetch task) can raise a toast without plumbing
pub static TOAST_STACK: GlobalSignal<Vec<Toast>> = Signal::global(|| Vec::new());

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

pub fn push_toast(notification: Notification) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);

    TOAST_STACK.with_mut(|stack| stack.push(Toast { id, notification }));

    let task = Timeout::new(TOAST_DISMISS_MS, move || {
        TOAST_STACK.with_mut(|stack| stack.retain(|toast| toast.id != id));
    });
    task.forget();
}

fn toast_class(category: ToastCategory) -> &'static str {
    match category {
        ToastCategory::ValidationError => "toast toast-error",
        ToastCategory::FetchError => "toast toast-error",
        ToastCategory::EmptyResult => "toast toast-info",
    }
}

#[component]
pub fn ToastTray() -> Element {
    rsx! {
        div { class: "toast-tray",
            for toast in TOAST_STACK.read().iter() {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.notification.category),
                    onclick: {
                        let id = toast.id;
                        move |_| {
                            TOAST_STACK.with_mut(|stack| stack.retain(|toast| toast.id != id));
                        }
                    },
                    "{toast.notification.message}"
                }
            }
        }
    }
}
