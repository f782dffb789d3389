use dioxus::prelude::*;

use crate::styles::combinations::CARD;

#[component]
pub fn Card(
    title: &'static str,
    children: Element,
    #[props(optional)] header_right: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: CARD,
            div {
                class: "px-6 py-4 border-b border-gray-200 flex items-center justify-between gap-3",
                h3 { class: "text-lg font-semibold text-gray-900", "{title}" }
                if let Some(el) = header_right {
                    div { class: "flex items-center gap-2", {el} }
                }
            }
            div { class: "p-6", {children} }
        }
    }
}
