use dioxus::prelude::*;
use dioxus_router::Link;
use icondata::Icon as IconData;

use crate::api::{ApiClient, DashboardStats};
use crate::app::Route;
use crate::components::bars::ValueBars;
use crate::components::card::Card;
use crate::components::common::LoadingState;
use crate::components::icon::Icon;
use crate::components::page::{PageContainer, PageHeader};
use crate::hooks::use_api_state;
use crate::styles::combinations::CARD_HOVER;
use crate::styles::styles::{GAP_6, GRID_COLS_2, GRID_COLS_4};

#[component]
pub fn Dashboard() -> Element {
    let state = use_api_state::<DashboardStats>();

    use_effect(move || {
        spawn(async move {
            let mut loading = state.loading;
            let mut data = state.data;
            loading.set(true);
            let client = ApiClient::new();
            // Never fails: the client substitutes the demo snapshot itself.
            data.set(Some(Ok(client.get_dashboard_stats().await)));
            loading.set(false);
        });
    });

    rsx! {
        PageContainer {
            PageHeader {
                title: "Dashboard".to_string(),
                subtitle: Some("Welcome to the Document Intelligence Platform".to_string()),
            }

            if state.is_loading() {
                LoadingState { message: Some("Loading dashboard...".to_string()) }
            } else if let Some(stats) = state.value() {
                div {
                    class: "{GRID_COLS_4} {GAP_6}",
                    StatCard {
                        title: "Total Documents",
                        value: stats.total_documents.to_string(),
                        icon: &icondata::AiFileTextOutlined,
                        accent: "bg-blue-500",
                    }
                    StatCard {
                        title: "Processed Today",
                        value: stats.documents_processed_today.to_string(),
                        icon: &icondata::AiRiseOutlined,
                        accent: "bg-green-500",
                    }
                    StatCard {
                        title: "Entities Extracted",
                        value: stats.entities_extracted.to_string(),
                        icon: &icondata::AiBulbOutlined,
                        accent: "bg-purple-500",
                    }
                    StatCard {
                        title: "Avg Processing Time",
                        value: format!("{}ms", stats.average_processing_time),
                        icon: &icondata::AiDashboardOutlined,
                        accent: "bg-yellow-500",
                    }
                }

                div {
                    class: "{GRID_COLS_2} {GAP_6}",
                    Card {
                        title: "Processing History",
                        ValueBars {
                            items: stats.processing_history.iter()
                                .map(|p| (p.date.clone(), p.count))
                                .collect::<Vec<_>>(),
                        }
                    }
                    Card {
                        title: "Document Types",
                        ValueBars {
                            items: stats.document_types.iter()
                                .map(|t| (t.kind.clone(), t.count))
                                .collect::<Vec<_>>(),
                        }
                    }
                }

                QuickActions {}
                RecentActivity {}
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: String, icon: &'static IconData, accent: &'static str) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm font-medium text-gray-600", "{title}" }
                    p { class: "text-2xl font-bold text-gray-900", "{value}" }
                }
                div {
                    class: "{accent} p-3 rounded-lg",
                    Icon { icon, class: "w-6 h-6 text-white" }
                }
            }
        }
    }
}

#[component]
fn QuickActions() -> Element {
    rsx! {
        div {
            h3 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                QuickAction {
                    to: Route::UploadPage {},
                    icon: &icondata::AiUploadOutlined,
                    title: "Upload Documents",
                    description: "Add new documents for processing",
                    accent: "bg-blue-500",
                }
                QuickAction {
                    to: Route::SearchPage {},
                    icon: &icondata::AiSearchOutlined,
                    title: "Search Documents",
                    description: "Find and analyze documents",
                    accent: "bg-green-500",
                }
                QuickAction {
                    to: Route::AnalysisPage {},
                    icon: &icondata::AiExperimentOutlined,
                    title: "Document Analysis",
                    description: "View detailed analysis results",
                    accent: "bg-purple-500",
                }
                QuickAction {
                    to: Route::AnalyticsPage {},
                    icon: &icondata::AiAreaChartOutlined,
                    title: "System Analytics",
                    description: "View system performance metrics",
                    accent: "bg-yellow-500",
                }
            }
        }
    }
}

#[component]
fn QuickAction(
    to: Route,
    icon: &'static IconData,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
) -> Element {
    rsx! {
        Link {
            to: to,
            class: "{CARD_HOVER} p-6 block",
            div {
                class: "flex items-center space-x-3",
                div {
                    class: "{accent} p-2 rounded-lg",
                    Icon { icon, class: "w-5 h-5 text-white" }
                }
                div {
                    h4 { class: "font-medium text-gray-900", "{title}" }
                    p { class: "text-sm text-gray-600", "{description}" }
                }
            }
        }
    }
}

#[component]
fn RecentActivity() -> Element {
    let entries = [
        ("Document uploaded", "contract_2024.pdf", "2 minutes ago"),
        ("Analysis completed", "financial_report.docx", "5 minutes ago"),
        ("Entities extracted", "meeting_notes.txt", "10 minutes ago"),
        ("Document processed", "presentation.pptx", "15 minutes ago"),
    ];

    rsx! {
        Card {
            title: "Recent Activity",
            div {
                class: "space-y-1",
                for (action, file, time) in entries {
                    div {
                        class: "flex items-center justify-between py-2 border-b border-gray-100 last:border-b-0",
                        div {
                            class: "flex items-center space-x-3",
                            span { class: "w-2 h-2 bg-blue-500 rounded-full" }
                            div {
                                p { class: "text-sm font-medium text-gray-900", "{action}" }
                                p { class: "text-xs text-gray-600", "{file}" }
                            }
                        }
                        span { class: "text-xs text-gray-500", "{time}" }
                    }
                }
            }
        }
    }
}
