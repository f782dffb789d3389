use dioxus::prelude::*;

use crate::api::{format_file_size, ApiClient, Document};
use crate::components::card::Card;
use crate::components::common::StatusBadge;
use crate::components::icon::Icon;
use crate::components::page::{PageContainer, PageHeader};
use crate::components::progress::ProgressBar;
use crate::styles::combinations::LIST_ROW;

#[derive(Clone, PartialEq)]
enum UploadOutcome {
    InProgress,
    Done(Document),
    Failed(String),
}

#[derive(Clone, PartialEq)]
struct UploadEntry {
    name: String,
    size: u64,
    percent: u8,
    outcome: UploadOutcome,
}

#[component]
pub fn DocumentUpload() -> Element {
    let mut entries = use_signal(Vec::<UploadEntry>::new);

    let on_files = move |evt: FormEvent| {
        for file in evt.files() {
            let name = file.name();
            let size = file.size();
            let content_type = file
                .content_type()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let index = {
                let mut list = entries.write();
                list.push(UploadEntry {
                    name: name.clone(),
                    size,
                    percent: 0,
                    outcome: UploadOutcome::InProgress,
                });
                list.len() - 1
            };
            spawn(async move {
                let mut entries = entries;
                let bytes = match file.read_bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(err) => {
                        entries.write()[index].outcome = UploadOutcome::Failed(err.to_string());
                        return;
                    }
                };
                let client = ApiClient::new();
                let result = client
                    .upload_document(&name, &content_type, bytes, move |percent| {
                        let mut entries = entries;
                        entries.write()[index].percent = percent;
                    })
                    .await;
                let mut list = entries.write();
                match result {
                    Ok(document) => list[index].outcome = UploadOutcome::Done(document),
                    Err(err) => list[index].outcome = UploadOutcome::Failed(err.to_string()),
                }
            });
        }
    };

    rsx! {
        PageContainer {
            PageHeader {
                title: "Upload Documents".to_string(),
                subtitle: Some("Add documents for processing and analysis".to_string()),
            }

            Card {
                title: "Select Files",
                div {
                    class: "border-2 border-dashed border-gray-300 rounded-lg p-8 text-center",
                    Icon {
                        icon: &icondata::AiCloudUploadOutlined,
                        class: "w-12 h-12 text-gray-400 mx-auto mb-3",
                    }
                    p {
                        class: "text-gray-600 mb-1",
                        "Choose files to upload"
                    }
                    p {
                        class: "text-xs text-gray-500 mb-4",
                        "PDF, Word, text and image documents are supported"
                    }
                    label {
                        class: "inline-block px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors font-medium cursor-pointer",
                        "Browse Files"
                        input {
                            r#type: "file",
                            multiple: true,
                            class: "hidden",
                            onchange: on_files,
                        }
                    }
                }
            }

            if !entries.read().is_empty() {
                Card {
                    title: "Uploads",
                    div {
                        class: "space-y-1",
                        for entry in entries.read().iter() {
                            UploadRow { entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UploadRow(entry: UploadEntry) -> Element {
    rsx! {
        div {
            class: LIST_ROW,
            div {
                class: "flex-1 min-w-0 pr-4",
                div {
                    class: "flex items-center space-x-2",
                    p { class: "text-sm font-medium text-gray-900 truncate", "{entry.name}" }
                    span { class: "text-xs text-gray-500", "{format_file_size(entry.size)}" }
                }
                match &entry.outcome {
                    UploadOutcome::InProgress => rsx! {
                        div {
                            class: "mt-2",
                            ProgressBar { percent: entry.percent }
                        }
                    },
                    UploadOutcome::Done(document) => rsx! {
                        p {
                            class: "text-xs text-gray-600 mt-1",
                            "Stored as {document.filename}"
                        }
                    },
                    UploadOutcome::Failed(message) => rsx! {
                        p {
                            class: "text-xs text-red-600 mt-1",
                            "{message}"
                        }
                    },
                }
            }
            match &entry.outcome {
                UploadOutcome::InProgress => rsx! {
                    span { class: "text-xs text-gray-500", "Uploading" }
                },
                UploadOutcome::Done(document) => rsx! {
                    StatusBadge { status: document.processing_status }
                },
                UploadOutcome::Failed(_) => rsx! {
                    span {
                        class: "px-2 py-1 rounded-full text-xs font-medium bg-red-100 text-red-800",
                        "FAILED"
                    }
                },
            }
        }
    }
}
