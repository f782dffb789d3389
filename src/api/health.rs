use super::error::Result;
use super::models::Health;
use super::ApiClient;

impl ApiClient {
    /// Backend liveness probe (Spring actuator path).
    pub async fn get_system_health(&self) -> Result<Health> {
        self.get_json("/actuator/health")
            .await
            .map_err(|e| e.or_fallback("Health check failed"))
    }
}
