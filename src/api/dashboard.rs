use super::models::DashboardStats;
use super::ApiClient;

impl ApiClient {
    /// Aggregate counters and time series for the landing page.
    ///
    /// The one operation that never fails: when the endpoint is
    /// unreachable for any reason the fixed demo snapshot is returned
    /// instead, so the dashboard always renders populated.
    pub async fn get_dashboard_stats(&self) -> DashboardStats {
        match self.get_json("/api/dashboard/stats").await {
            Ok(stats) => stats,
            Err(err) => {
                log::warn!("dashboard stats unavailable, serving demo snapshot: {err}");
                DashboardStats::demo()
            }
        }
    }
}
