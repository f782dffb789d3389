use dioxus::prelude::*;

use crate::styles::combinations::{PAGE_SUBTITLE, PAGE_TITLE};

#[component]
pub fn PageHeader(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "mb-6",
            h1 { class: PAGE_TITLE, "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: PAGE_SUBTITLE, "{subtitle}" }
            }
        }
    }
}

/// Standard vertical rhythm between page sections.
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div {
            class: "space-y-6",
            {children}
        }
    }
}
