use dioxus::prelude::*;

use crate::api::{AnalyticsReport, ApiClient};
use crate::components::bars::ValueBars;
use crate::components::card::Card;
use crate::components::common::LoadingState;
use crate::components::page::{PageContainer, PageHeader};
use crate::hooks::use_api_state;
use crate::styles::styles::{GAP_6, GRID_COLS_2, GRID_COLS_4};

#[component]
pub fn Analytics() -> Element {
    let state = use_api_state::<AnalyticsReport>();

    use_effect(move || {
        spawn(async move {
            let mut loading = state.loading;
            let mut data = state.data;
            loading.set(true);
            let client = ApiClient::new();
            let report = match client.get_analytics().await {
                Ok(report) => report,
                Err(err) => {
                    log::warn!("analytics unavailable, serving demo report: {err}");
                    AnalyticsReport::demo()
                }
            };
            data.set(Some(Ok(report)));
            loading.set(false);
        });
    });

    rsx! {
        PageContainer {
            PageHeader {
                title: "Analytics".to_string(),
                subtitle: Some("System performance and processing metrics".to_string()),
            }

            if state.is_loading() {
                LoadingState { message: Some("Loading analytics...".to_string()) }
            } else if let Some(report) = state.value() {
                div {
                    class: "{GRID_COLS_4} {GAP_6}",
                    MetricCard {
                        title: "Total Documents",
                        value: report.total_documents.to_string(),
                    }
                    MetricCard {
                        title: "Avg Processing Time",
                        value: format!("{}ms", report.average_processing_time),
                    }
                    MetricCard {
                        title: "Active Users",
                        value: report.active_users.to_string(),
                    }
                    MetricCard {
                        title: "API Calls",
                        value: report.api_calls.to_string(),
                    }
                }

                div {
                    class: "{GRID_COLS_2} {GAP_6}",
                    Card {
                        title: "Processing Volume",
                        ValueBars {
                            items: report.processing_volume.iter()
                                .map(|p| (p.label.clone(), p.value))
                                .collect::<Vec<_>>(),
                        }
                    }
                    Card {
                        title: "Processing Time Trend",
                        ValueBars {
                            items: report.processing_time_trend.iter()
                                .map(|p| (p.label.clone(), p.value))
                                .collect::<Vec<_>>(),
                        }
                    }
                    Card {
                        title: "Document Types",
                        ValueBars {
                            items: report.document_types.iter()
                                .map(|t| (t.kind.clone(), t.count))
                                .collect::<Vec<_>>(),
                        }
                    }
                    Card {
                        title: "Entity Types",
                        ValueBars {
                            items: report.entity_types.iter()
                                .map(|t| (t.kind.clone(), t.count))
                                .collect::<Vec<_>>(),
                        }
                    }
                }

                Card {
                    title: "Error Rates",
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        ErrorRateCell { label: "Upload", rate: report.error_rates.upload }
                        ErrorRateCell { label: "Processing", rate: report.error_rates.processing }
                        ErrorRateCell { label: "API", rate: report.error_rates.api }
                        ErrorRateCell { label: "System", rate: report.error_rates.system }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(title: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            p { class: "text-sm font-medium text-gray-600", "{title}" }
            p { class: "text-2xl font-bold text-gray-900", "{value}" }
        }
    }
}

#[component]
fn ErrorRateCell(label: &'static str, rate: f64) -> Element {
    // Anything above 1% gets flagged.
    let rate_class = if rate > 1.0 {
        "text-2xl font-bold text-red-600"
    } else {
        "text-2xl font-bold text-green-600"
    };

    rsx! {
        div {
            class: "text-center",
            p { class: rate_class, "{rate}%" }
            p { class: "text-sm text-gray-600", "{label}" }
        }
    }
}
