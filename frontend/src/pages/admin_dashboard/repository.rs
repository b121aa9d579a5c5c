use crate::api::{ApiClient, ApiError, DashboardSummary};

pub async fn fetch_summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    api.dashboard_summary().await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn reads_whole_body_as_summary() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/dashboard/summary");
            then.status(200).json_body(json!({
                "success": true,
                "totalEmployee": 12,
                "totalDepartment": 3,
                "totalSalary": 420000.5,
                "leaveSummary": {
                    "appliedFor": [{ "_id": "e1" }, { "_id": "e2" }],
                    "approved": 4,
                    "pending": 1,
                    "rejected": 2
                }
            }));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let summary = fetch_summary(&api).await.unwrap();
        assert_eq!(summary.total_employees, 12);
        assert_eq!(summary.leave_requests(), 2);
        assert_eq!(summary.leave_summary.rejected, 2);
    }
}
