use crate::api::{ApiClient, ApiError, Leave, LeaveBalance, LeavePayload, LeaveStatus};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl Default for LeavesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LeavesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub fn asset_url(&self, file_name: &str) -> String {
        self.client.asset_url(file_name)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Leave>, ApiError> {
        self.client.list_leaves().await
    }

    pub async fn fetch_for(&self, id: &str) -> Result<Vec<Leave>, ApiError> {
        self.client.leaves_for(id).await
    }

    pub async fn fetch_detail(&self, id: &str) -> Result<Leave, ApiError> {
        self.client.leave_detail(id).await
    }

    pub async fn apply(&self, payload: LeavePayload) -> Result<Option<LeaveBalance>, ApiError> {
        self.client.add_leave(&payload).await
    }

    pub async fn set_status(&self, id: &str, status: LeaveStatus) -> Result<Leave, ApiError> {
        self.client.update_leave_status(id, status).await
    }
}
