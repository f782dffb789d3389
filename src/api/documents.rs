use std::cell::Cell;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::Value;

use super::error::{ApiError, Result};
use super::models::{
    AnalysisResult, Classification, Document, DocumentPage, EntitiesResponse, Entity,
    SearchHit, SearchRequest, SearchResponse, Sentiment,
};
use super::ApiClient;

/// Export formats the backend can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "excel",
        }
    }

    /// Filename handed to the browser save dialog.
    pub fn filename(&self) -> String {
        format!("documents.{}", self.as_str())
    }
}

/// Forwards upload progress as whole percentages. Values are clamped to
/// 0..=100 and never move backwards, whatever the underlying transport
/// reports.
struct ProgressSink<'a> {
    last: Cell<u8>,
    callback: &'a dyn Fn(u8),
}

impl<'a> ProgressSink<'a> {
    fn new(callback: &'a dyn Fn(u8)) -> Self {
        Self {
            last: Cell::new(0),
            callback,
        }
    }

    fn report(&self, percent: i64) {
        let percent = percent.clamp(0, 100) as u8;
        if percent < self.last.get() {
            return;
        }
        self.last.set(percent);
        (self.callback)(percent);
    }
}

impl ApiClient {
    /// Multipart upload of one file under the form field `file`.
    ///
    /// The fetch transport gives no per-chunk transmit hook, so the sink is
    /// driven at the two points the contract pins down: 0 when the request
    /// leaves and 100 only once the server has acknowledged the document.
    pub async fn upload_document(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
        on_progress: impl Fn(u8),
    ) -> Result<Document> {
        let progress = ProgressSink::new(&on_progress);
        progress.report(0);

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);
        let builder = self
            .request(Method::POST, "/api/documents/upload")
            .multipart(form);

        let response = self
            .dispatch(builder)
            .await
            .map_err(|e| e.or_fallback("Upload failed"))?;
        let document = super::decode(response)
            .await
            .map_err(|e: ApiError| e.or_fallback("Upload failed"))?;
        progress.report(100);
        Ok(document)
    }

    /// Offset-based listing, zero-indexed. `search` is appended last when
    /// present and non-empty.
    pub async fn get_documents(
        &self,
        page: u32,
        size: u32,
        search: Option<&str>,
    ) -> Result<DocumentPage> {
        let path = format!("/api/documents?{}", list_query(page, size, search));
        self.get_json(&path)
            .await
            .map_err(|e| e.or_fallback("Failed to fetch documents"))
    }

    pub async fn get_document(&self, id: &str) -> Result<Document> {
        self.get_json(&format!("/api/documents/{id}"))
            .await
            .map_err(|e| e.or_fallback("Failed to fetch document"))
    }

    /// Triggers analysis and waits for the result.
    pub async fn analyze_document(&self, id: &str) -> Result<AnalysisResult> {
        self.post_empty(&format!("/api/documents/{id}/analyze"))
            .await
            .map_err(|e| e.or_fallback("Analysis failed"))
    }

    /// Full-text search. `filters` is an open object the client passes
    /// through without validating.
    pub async fn search_documents(&self, query: &str, filters: Value) -> Result<Vec<SearchHit>> {
        let request = SearchRequest {
            query: query.to_string(),
            filters,
        };
        let response: SearchResponse = self
            .post_json("/api/documents/search", &request)
            .await
            .map_err(|e| e.or_fallback("Search failed"))?;
        Ok(response.documents)
    }

    pub async fn get_document_entities(&self, id: &str) -> Result<Vec<Entity>> {
        let response: EntitiesResponse = self
            .get_json(&format!("/api/documents/{id}/entities"))
            .await
            .map_err(|e| e.or_fallback("Failed to fetch entities"))?;
        Ok(response.entities)
    }

    pub async fn classify_document(&self, id: &str) -> Result<Classification> {
        self.post_empty(&format!("/api/documents/{id}/classify"))
            .await
            .map_err(|e| e.or_fallback("Classification failed"))
    }

    pub async fn get_sentiment_analysis(&self, id: &str) -> Result<Sentiment> {
        self.get_json(&format!("/api/documents/{id}/sentiment"))
            .await
            .map_err(|e| e.or_fallback("Sentiment analysis failed"))
    }

    pub async fn delete_document(&self, id: &str) -> Result<()> {
        self.delete(&format!("/api/documents/{id}"))
            .await
            .map_err(|e| e.or_fallback("Failed to delete document"))
    }

    /// Fetches the export blob and hands it to the browser as a file save.
    /// Returns nothing: the download is the result.
    pub async fn export_documents(&self, format: ExportFormat) -> Result<()> {
        let path = format!("/api/documents/export/{}", format.as_str());
        let bytes = self
            .get_bytes(&path)
            .await
            .map_err(|e| e.or_fallback("Export failed"))?;
        save_file(&bytes, &format.filename())
    }
}

fn list_query(page: u32, size: u32, search: Option<&str>) -> String {
    let mut query = format!("page={page}&size={size}");
    if let Some(term) = search.filter(|s| !s.is_empty()) {
        query.push_str("&search=");
        query.push_str(&urlencoding::encode(term));
    }
    query
}

#[cfg(target_arch = "wasm32")]
fn save_file(bytes: &[u8], filename: &str) -> Result<()> {
    use wasm_bindgen::JsCast;

    let failed = |_| ApiError::Transport("Export failed".to_string());
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Transport("Export failed".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(failed)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(failed)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(failed)?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Non-browser builds have nowhere to hand the blob to.
#[cfg(not(target_arch = "wasm32"))]
fn save_file(_bytes: &[u8], _filename: &str) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn list_query_orders_page_size_then_search() {
        assert_eq!(
            list_query(2, 10, Some("report")),
            "page=2&size=10&search=report"
        );
        assert_eq!(list_query(0, 10, None), "page=0&size=10");
        // An empty search term is dropped, not sent as `search=`.
        assert_eq!(list_query(1, 25, Some("")), "page=1&size=25");
    }

    #[test]
    fn list_query_escapes_the_search_term() {
        assert_eq!(
            list_query(0, 10, Some("q2 report & summary")),
            "page=0&size=10&search=q2%20report%20%26%20summary"
        );
    }

    #[test]
    fn export_format_paths_and_filenames() {
        assert_eq!(ExportFormat::Csv.filename(), "documents.csv");
        assert_eq!(ExportFormat::Excel.filename(), "documents.excel");
        assert_eq!(
            format!("/api/documents/export/{}", ExportFormat::Csv.as_str()),
            "/api/documents/export/csv"
        );
    }

    #[test]
    fn progress_is_monotone_and_clamped() {
        let seen = RefCell::new(Vec::new());
        let callback = |p: u8| seen.borrow_mut().push(p);
        let sink = ProgressSink::new(&callback);

        sink.report(0);
        sink.report(30);
        sink.report(20); // regression from the transport is swallowed
        sink.report(150); // clamped
        sink.report(-5); // below the already-reported floor, swallowed

        assert_eq!(*seen.borrow(), vec![0, 30, 100]);
    }
}
