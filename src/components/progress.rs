use dioxus::prelude::*;

/// Upload progress bar, 0..=100.
#[component]
pub fn ProgressBar(percent: u8) -> Element {
    rsx! {
        div {
            class: "flex items-center space-x-2",
            div {
                class: "w-32 bg-gray-200 rounded-full h-2",
                div {
                    class: "bg-blue-600 h-2 rounded-full transition-all duration-300",
                    style: format!("width: {percent}%;"),
                }
            }
            span { class: "text-sm text-gray-600", "{percent}%" }
        }
    }
}
