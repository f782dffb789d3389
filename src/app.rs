use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::layout::AppLayout;
use crate::pages::{
    analysis::DocumentAnalysis, analytics::Analytics, dashboard::Dashboard,
    search::SearchDocuments, settings::Settings, upload::DocumentUpload,
};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    DashboardPage {},
    #[route("/upload")]
    UploadPage {},
    #[route("/analysis")]
    AnalysisPage {},
    #[route("/search")]
    SearchPage {},
    #[route("/analytics")]
    AnalyticsPage {},
    #[route("/settings")]
    SettingsPage {},
}

#[component]
pub fn DashboardPage() -> Element {
    rsx! { AppLayout { Dashboard {} } }
}

#[component]
pub fn UploadPage() -> Element {
    rsx! { AppLayout { DocumentUpload {} } }
}

#[component]
pub fn AnalysisPage() -> Element {
    rsx! { AppLayout { DocumentAnalysis {} } }
}

#[component]
pub fn SearchPage() -> Element {
    rsx! { AppLayout { SearchDocuments {} } }
}

#[component]
pub fn AnalyticsPage() -> Element {
    rsx! { AppLayout { Analytics {} } }
}

#[component]
pub fn SettingsPage() -> Element {
    rsx! { AppLayout { Settings {} } }
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
