use super::error::Result;
use super::models::AnalyticsReport;
use super::ApiClient;

impl ApiClient {
    /// System-wide processing metrics for the analytics page.
    pub async fn get_analytics(&self) -> Result<AnalyticsReport> {
        self.get_json("/api/analytics")
            .await
            .map_err(|e| e.or_fallback("Failed to fetch analytics"))
    }
}
