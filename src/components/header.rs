use dioxus::prelude::*;
use dioxus_router::Link;

use crate::app::Route;
use crate::components::icon::Icon;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200",
            div {
                class: "px-6 py-4 flex items-center justify-between",
                Link {
                    to: Route::DashboardPage {},
                    class: "flex items-center space-x-3",
                    Icon { icon: &icondata::AiFileSearchOutlined, class: "w-7 h-7 text-blue-600" }
                    div {
                        class: "flex flex-col",
                        span { class: "text-xl font-bold text-gray-900", "Document Intelligence" }
                        span { class: "text-xs text-gray-500", "Analysis & Processing Platform" }
                    }
                }
                div {
                    class: "flex items-center space-x-4",
                    Link {
                        to: Route::SettingsPage {},
                        class: "p-2 text-gray-500 hover:text-gray-700 transition-colors",
                        Icon { icon: &icondata::AiSettingOutlined, class: "w-5 h-5" }
                    }
                }
            }
        }
    }
}
