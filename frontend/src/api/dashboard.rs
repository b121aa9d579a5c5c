use super::{
    client::ApiClient,
    types::{ApiError, DashboardSummary},
};

impl ApiClient {
    /// The summary is the whole response body rather than a keyed payload.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let body = self.get_json("/dashboard/summary").await?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse dashboard summary: {}", e)))
    }
}
