use dioxus::prelude::*;
use dioxus_router::{use_route, Link};
use icondata::Icon as IconData;

use crate::app::Route;
use crate::components::icon::Icon;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        aside {
            class: "w-64 bg-white shadow-sm border-r border-gray-200 min-h-screen flex flex-col",
            nav {
                class: "p-4",
                div {
                    class: "space-y-2",
                    SidebarNavItem {
                        to: Route::DashboardPage {},
                        icon: &icondata::AiHomeOutlined,
                        label: "Dashboard",
                        is_active: route == Route::DashboardPage {},
                    }
                    SidebarNavItem {
                        to: Route::UploadPage {},
                        icon: &icondata::AiUploadOutlined,
                        label: "Upload Documents",
                        is_active: route == Route::UploadPage {},
                    }
                    SidebarNavItem {
                        to: Route::AnalysisPage {},
                        icon: &icondata::AiExperimentOutlined,
                        label: "Document Analysis",
                        is_active: route == Route::AnalysisPage {},
                    }
                    SidebarNavItem {
                        to: Route::SearchPage {},
                        icon: &icondata::AiSearchOutlined,
                        label: "Search Documents",
                        is_active: route == Route::SearchPage {},
                    }
                    SidebarNavItem {
                        to: Route::AnalyticsPage {},
                        icon: &icondata::AiAreaChartOutlined,
                        label: "Analytics",
                        is_active: route == Route::AnalyticsPage {},
                    }
                    SidebarNavItem {
                        to: Route::SettingsPage {},
                        icon: &icondata::AiSettingOutlined,
                        label: "Settings",
                        is_active: route == Route::SettingsPage {},
                    }
                }
            }
            div {
                class: "p-4 mt-8",
                SystemStatusCard {}
            }
        }
    }
}

#[component]
fn SidebarNavItem(to: Route, icon: &'static IconData, label: &'static str, is_active: bool) -> Element {
    let class_str = if is_active {
        "flex items-center space-x-3 px-3 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-50 text-blue-700 border-r-2 border-blue-700"
    } else {
        "flex items-center space-x-3 px-3 py-2 rounded-lg text-sm font-medium transition-colors text-gray-600 hover:bg-gray-50 hover:text-gray-900"
    };

    rsx! {
        Link {
            to: to,
            class: class_str,
            Icon { icon, class: "w-5 h-5" }
            span { "{label}" }
        }
    }
}

/// Static service list matching the platform's backing stack. Live state
/// comes from the health probe on the Settings page.
#[component]
fn SystemStatusCard() -> Element {
    let services = ["MongoDB", "Tika Server", "AI Service"];

    rsx! {
        div {
            class: "bg-gray-50 rounded-lg p-4",
            h4 { class: "text-sm font-medium text-gray-900 mb-2", "System Status" }
            div {
                class: "space-y-2",
                for service in services {
                    div {
                        class: "flex items-center justify-between",
                        span { class: "text-xs text-gray-600", "{service}" }
                        span { class: "h-2 w-2 bg-green-500 rounded-full" }
                    }
                }
            }
        }
    }
}
