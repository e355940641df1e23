use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use crate::common::debounce::{Debounce, DEBOUNCE_QUIET_MS};

// SearchBar
//
// raw keystrokes accumulate in a local buffer and arm the trailing-edge
// debounce; once the input quiesces the buffer goes out through on_search.
// the submit button bypasses the timer entirely and hands the raw text to
// on_submit, leaving validation to the controller.
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    pub on_search: EventHandler<String>,
    pub on_submit: EventHandler<String>,
    #[props(default)]
    pub status: String,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut buffer = use_signal(String::new);
    let mut debounce = use_signal(Debounce::default);

    let on_search = props.on_search;
    let on_submit = props.on_submit;
    let status = props.status;

    rsx! {
        div { class: "search-bar",
            form {
                onsubmit: move |event| {
                    let raw = match event.values().get("query") {
                        Some(val) => val.as_value(),
                        None => String::from(""),
                    };

                    // the controller decides validity; the buffer and any
                    // pending timer reset only once real text was sent
                    if !raw.trim().is_empty() {
                        buffer.set(String::new());
                        debounce.write().disarm();
                    }

                    on_submit.call(raw);
                },
                input {
                    class: "form-input",
                    name: "query",
                    r#type: "text",
                    placeholder: "Search movies...",
                    autocomplete: "off",
                    autofocus: true,
                    value: "{buffer}",
                    oninput: move |event| {
                        buffer.set(event.value());

                        let ticket = debounce.write().arm();
                        let task = Timeout::new(DEBOUNCE_QUIET_MS, move || {
                            if !debounce.peek().is_current(ticket) {
                                return;
                            }

                            let text = buffer.peek().clone();
                            if !text.trim().is_empty() {
                                on_search.call(text);
                            }
                        });
                        task.forget();
                    },
                }
                button { class: "btn btn-primary", r#type: "submit", "Search" }
            }

            if !status.is_empty() {
                span { class: "search-status", "{status}" }
            }
        }
    }
}
