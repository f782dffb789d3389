//! Wire shapes exchanged with the backend. The client decodes them but
//! performs no further validation; they are rendered as-is by the pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ProcessingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessingStatus::Pending => "PENDING",
            ProcessingStatus::Processing => "PROCESSING",
            ProcessingStatus::Completed => "COMPLETED",
            ProcessingStatus::Failed => "FAILED",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ProcessingStatus::Completed => "bg-green-100 text-green-800",
            ProcessingStatus::Processing => "bg-yellow-100 text-yellow-800",
            ProcessingStatus::Failed => "bg-red-100 text-red-800",
            ProcessingStatus::Pending => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processing_status: ProcessingStatus,
    #[serde(default)]
    pub entities: Option<Vec<Entity>>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub classification: Option<Classification>,
}

impl Document {
    /// Human-readable byte size, matching the original dashboard's display.
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }

    pub fn display_date(&self) -> String {
        self.upload_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Offset-based, zero-indexed page of documents as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    #[serde(default)]
    pub content: Vec<Document>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub text: String,
    /// In [0, 1].
    pub confidence: f64,
    #[serde(default)]
    pub start_offset: Option<u32>,
    #[serde(default)]
    pub end_offset: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

/// The entities endpoint wraps its list in an object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EntitiesResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "bg-green-100 text-green-800",
            SentimentLabel::Negative => "bg-red-100 text-red-800",
            SentimentLabel::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    pub overall: SentimentLabel,
    pub confidence: f64,
    /// Per-class distribution, summing to ~1.
    #[serde(default)]
    pub scores: Option<SentimentScores>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: String,
    pub confidence: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result of the synchronous analyze call. Most fields are optional because
/// the backend fills them in per analysis type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub key_phrases: Vec<String>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub classification: Option<Classification>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    /// Open filter object, passed through unvalidated.
    pub filters: Value,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub documents: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Relevance in [0, 1].
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_documents: u64,
    pub documents_processed_today: u64,
    pub entities_extracted: u64,
    /// Milliseconds.
    pub average_processing_time: u64,
    pub processing_history: Vec<HistoryPoint>,
    pub document_types: Vec<TypeCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}

impl DashboardStats {
    /// Fixed snapshot served when the stats endpoint is unreachable, so the
    /// landing page never renders empty.
    pub fn demo() -> Self {
        let history = [
            ("2024-01-01", 12),
            ("2024-01-02", 18),
            ("2024-01-03", 15),
            ("2024-01-04", 22),
            ("2024-01-05", 19),
            ("2024-01-06", 25),
            ("2024-01-07", 23),
        ];
        let types = [
            ("PDF", 450),
            ("Word", 320),
            ("Text", 280),
            ("Image", 150),
            ("Other", 47),
        ];
        DashboardStats {
            total_documents: 1247,
            documents_processed_today: 23,
            entities_extracted: 8532,
            average_processing_time: 1250,
            processing_history: history
                .iter()
                .map(|&(date, count)| HistoryPoint {
                    date: date.to_string(),
                    count,
                })
                .collect(),
            document_types: types
                .iter()
                .map(|&(kind, count)| TypeCount {
                    kind: kind.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_documents: u64,
    /// Milliseconds.
    pub average_processing_time: u64,
    pub active_users: u64,
    pub api_calls: u64,
    pub processing_volume: Vec<SeriesPoint>,
    pub processing_time_trend: Vec<SeriesPoint>,
    pub document_types: Vec<TypeCount>,
    pub entity_types: Vec<TypeCount>,
    pub error_rates: ErrorRates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

/// Percentages in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRates {
    pub upload: f64,
    pub processing: f64,
    pub api: f64,
    pub system: f64,
}

impl AnalyticsReport {
    /// Demo report shown when the analytics endpoint is unreachable.
    pub fn demo() -> Self {
        fn series(points: &[(&str, u64)]) -> Vec<SeriesPoint> {
            points
                .iter()
                .map(|&(label, value)| SeriesPoint {
                    label: label.to_string(),
                    value,
                })
                .collect()
        }
        fn counts(points: &[(&str, u64)]) -> Vec<TypeCount> {
            points
                .iter()
                .map(|&(kind, count)| TypeCount {
                    kind: kind.to_string(),
                    count,
                })
                .collect()
        }
        AnalyticsReport {
            total_documents: 12_847,
            average_processing_time: 1200,
            active_users: 2847,
            api_calls: 45_231,
            processing_volume: series(&[
                ("Jan", 120),
                ("Feb", 190),
                ("Mar", 300),
                ("Apr", 500),
                ("May", 200),
                ("Jun", 300),
            ]),
            processing_time_trend: series(&[
                ("Week 1", 1200),
                ("Week 2", 1100),
                ("Week 3", 950),
                ("Week 4", 800),
            ]),
            document_types: counts(&[
                ("PDF", 45),
                ("Word", 25),
                ("Text", 15),
                ("Image", 10),
                ("Other", 5),
            ]),
            entity_types: counts(&[
                ("Person", 3200),
                ("Organization", 2800),
                ("Location", 1900),
                ("Date", 2100),
                ("Money", 1200),
            ]),
            error_rates: ErrorRates {
                upload: 0.2,
                processing: 1.5,
                api: 0.8,
                system: 0.1,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub components: Option<Value>,
}

impl Health {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_decodes_backend_camel_case() {
        let json = r#"{
            "id": "doc-1",
            "filename": "annual_report_2023.pdf",
            "contentType": "application/pdf",
            "size": 2048000,
            "uploadDate": "2024-01-15T10:30:00Z",
            "processingStatus": "COMPLETED"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(doc.processing_status, ProcessingStatus::Completed);
        assert_eq!(doc.display_size(), "1.95 MB");
        assert_eq!(doc.display_date(), "2024-01-15");
    }

    #[test]
    fn entity_uses_type_key_on_the_wire() {
        let json = r#"{"type": "PERSON", "text": "John Doe", "confidence": 0.95}"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.entity_type, "PERSON");
        assert_eq!(entity.confidence, 0.95);
        assert_eq!(entity.start_offset, None);
    }

    #[test]
    fn page_tolerates_missing_fields() {
        let page: DocumentPage = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn demo_stats_match_fallback_contract() {
        let stats = DashboardStats::demo();
        assert_eq!(stats.total_documents, 1247);
        assert_eq!(stats.processing_history.len(), 7);
        assert_eq!(stats.document_types.len(), 5);
    }

    #[test]
    fn file_sizes_format_like_the_dashboard() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(15_360), "15.00 KB");
        assert_eq!(format_file_size(2_048_000), "1.95 MB");
    }
}
