use super::repository;
use crate::api::{ApiClient, ApiError, DashboardSummary};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminSummaryViewModel {
    pub summary_resource: Resource<(), Result<DashboardSummary, ApiError>>,
}

impl AdminSummaryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let summary_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move {
                    let result = repository::fetch_summary(&api).await;
                    if let Err(err) = &result {
                        log::error!("Dashboard summary failed: {}", err);
                    }
                    result
                }
            },
        );
        Self { summary_resource }
    }
}

impl Default for AdminSummaryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
