use dioxus::prelude::*;

/// Horizontal value bars. Widths are scaled against the largest value so
/// a plain div does the work of a chart.
#[component]
pub fn ValueBars(items: Vec<(String, u64)>) -> Element {
    let max = items.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);

    rsx! {
        div {
            class: "space-y-2",
            for (label, value) in items {
                div {
                    class: "flex items-center justify-between gap-3",
                    span { class: "text-sm text-gray-600 w-24 truncate", "{label}" }
                    div {
                        class: "flex-1 bg-gray-200 rounded-full h-2",
                        div {
                            class: "bg-blue-600 h-2 rounded-full",
                            style: format!("width: {}%;", value * 100 / max),
                        }
                    }
                    span { class: "text-sm font-medium text-gray-900 w-14 text-right", "{value}" }
                }
            }
        }
    }
}

/// Small inline bar for a score in [0, 1], with the percentage alongside.
#[component]
pub fn ScoreBar(fraction: f64) -> Element {
    let percent = (fraction.clamp(0.0, 1.0) * 100.0).round() as u32;

    rsx! {
        div {
            class: "flex items-center space-x-2",
            div {
                class: "w-24 bg-gray-200 rounded-full h-2",
                div {
                    class: "bg-blue-600 h-2 rounded-full",
                    style: format!("width: {percent}%;"),
                }
            }
            span { class: "text-sm text-gray-500", "{percent}%" }
        }
    }
}
