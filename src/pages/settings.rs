use dioxus::prelude::*;

use crate::api::{self, ApiClient, Health};
use crate::components::card::Card;
use crate::components::common::LoadingState;
use crate::components::page::{PageContainer, PageHeader};
use crate::hooks::use_api_state;
use crate::styles::combinations::{BUTTON_PRIMARY, INPUT, LABEL};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    General,
    Api,
    Processing,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::General => "General",
            Tab::Api => "API",
            Tab::Processing => "Processing",
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let mut tab = use_signal(|| Tab::General);

    rsx! {
        PageContainer {
            PageHeader {
                title: "Settings".to_string(),
                subtitle: Some("Platform configuration and system status".to_string()),
            }

            div {
                class: "border-b border-gray-200",
                nav {
                    class: "flex space-x-6",
                    for option in [Tab::General, Tab::Api, Tab::Processing] {
                        TabButton {
                            label: option.label(),
                            is_active: *tab.read() == option,
                            on_select: move |_| tab.set(option),
                        }
                    }
                }
            }

            match *tab.read() {
                Tab::General => rsx! { GeneralSettings {} },
                Tab::Api => rsx! { ApiSettings {} },
                Tab::Processing => rsx! { ProcessingSettings {} },
            }
        }
    }
}

#[component]
fn TabButton(label: &'static str, is_active: bool, on_select: EventHandler<()>) -> Element {
    let class_str = if is_active {
        "pb-3 text-sm font-medium border-b-2 border-blue-600 text-blue-600"
    } else {
        "pb-3 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-700"
    };

    rsx! {
        button {
            class: class_str,
            onclick: move |_| on_select.call(()),
            "{label}"
        }
    }
}

/// Local form state only. The backend has no settings endpoint; values are
/// kept for the session.
#[component]
fn GeneralSettings() -> Element {
    let mut platform_name = use_signal(|| "Document Intelligence Platform".to_string());
    let mut language = use_signal(|| "en".to_string());
    let mut notifications = use_signal(|| true);

    rsx! {
        Card {
            title: "General",
            div {
                class: "space-y-4 max-w-lg",
                div {
                    label { class: LABEL, "Platform Name" }
                    input {
                        r#type: "text",
                        class: INPUT,
                        value: "{platform_name}",
                        oninput: move |evt| platform_name.set(evt.value()),
                    }
                }
                div {
                    label { class: LABEL, "Language" }
                    select {
                        class: INPUT,
                        onchange: move |evt| language.set(evt.value()),
                        option { value: "en", "English" }
                        option { value: "de", "German" }
                        option { value: "fr", "French" }
                    }
                }
                div {
                    class: "flex items-center space-x-2",
                    input {
                        r#type: "checkbox",
                        checked: *notifications.read(),
                        onchange: move |evt| notifications.set(evt.checked()),
                    }
                    span { class: "text-sm text-gray-700", "Enable processing notifications" }
                }
                button { class: BUTTON_PRIMARY, "Save Changes" }
            }
        }
    }
}

#[component]
fn ApiSettings() -> Element {
    let health = use_api_state::<Health>();

    use_effect(move || {
        spawn(async move {
            let mut loading = health.loading;
            let mut data = health.data;
            loading.set(true);
            let client = ApiClient::new();
            data.set(Some(client.get_system_health().await));
            loading.set(false);
        });
    });

    rsx! {
        Card {
            title: "API",
            div {
                class: "space-y-4 max-w-lg",
                div {
                    label { class: LABEL, "Backend Address" }
                    p {
                        class: "text-sm text-gray-900 font-mono bg-gray-50 rounded px-3 py-2",
                        "{api::base_url()}"
                    }
                }
                div {
                    label { class: LABEL, "System Health" }
                    if health.is_loading() {
                        LoadingState { message: Some("Checking health...".to_string()) }
                    } else if let Some(status) = health.value() {
                        HealthBadge { health: status }
                    } else if let Some(err) = health.error() {
                        p { class: "text-sm text-red-600", "{err}" }
                    }
                }
            }
        }
    }
}

#[component]
fn HealthBadge(health: Health) -> Element {
    let (dot, text) = if health.is_up() {
        ("h-2 w-2 bg-green-500 rounded-full", "All systems operational")
    } else {
        ("h-2 w-2 bg-red-500 rounded-full", "Service degraded")
    };

    rsx! {
        div {
            class: "flex items-center space-x-2",
            span { class: dot }
            span { class: "text-sm text-gray-900", "{text}" }
            span { class: "text-xs text-gray-500", "({health.status})" }
        }
    }
}

#[component]
fn ProcessingSettings() -> Element {
    let mut auto_analyze = use_signal(|| true);
    let mut extraction_depth = use_signal(|| "standard".to_string());
    let mut batch_size = use_signal(|| "25".to_string());

    rsx! {
        Card {
            title: "Processing",
            div {
                class: "space-y-4 max-w-lg",
                div {
                    class: "flex items-center space-x-2",
                    input {
                        r#type: "checkbox",
                        checked: *auto_analyze.read(),
                        onchange: move |evt| auto_analyze.set(evt.checked()),
                    }
                    span { class: "text-sm text-gray-700", "Analyze documents automatically after upload" }
                }
                div {
                    label { class: LABEL, "Entity Extraction Depth" }
                    select {
                        class: INPUT,
                        onchange: move |evt| extraction_depth.set(evt.value()),
                        option { value: "fast", "Fast" }
                        option { value: "standard", "Standard" }
                        option { value: "deep", "Deep" }
                    }
                }
                div {
                    label { class: LABEL, "Batch Size" }
                    input {
                        r#type: "number",
                        class: INPUT,
                        value: "{batch_size}",
                        oninput: move |evt| batch_size.set(evt.value()),
                    }
                }
                button { class: BUTTON_PRIMARY, "Save Changes" }
            }
        }
    }
}
