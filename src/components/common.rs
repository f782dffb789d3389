use dioxus::prelude::*;

use crate::api::{ProcessingStatus, SentimentLabel};
use crate::styles::combinations::{EMPTY, ERROR, LOADING};

#[component]
pub fn LoadingState(message: Option<String>) -> Element {
    rsx! {
        div {
            class: LOADING,
            if let Some(msg) = message {
                "{msg}"
            } else {
                "Loading..."
            }
        }
    }
}

#[component]
pub fn ErrorState(error: String, title: Option<String>) -> Element {
    rsx! {
        div {
            class: ERROR,
            if let Some(title) = title {
                h3 { class: "font-semibold mb-2", "{title}" }
            }
            "{error}"
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: EMPTY,
            "{message}"
        }
    }
}

#[component]
pub fn StatusBadge(status: ProcessingStatus) -> Element {
    rsx! {
        span {
            class: "px-2 py-1 rounded-full text-xs font-medium {status.badge_class()}",
            "{status.label()}"
        }
    }
}

#[component]
pub fn SentimentBadge(label: SentimentLabel) -> Element {
    rsx! {
        span {
            class: "px-2 py-1 rounded-full text-sm font-medium {label.badge_class()}",
            "{label.label()}"
        }
    }
}
