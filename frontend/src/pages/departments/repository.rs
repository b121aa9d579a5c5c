use crate::api::{ApiClient, ApiError, Department, DepartmentPayload};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct DepartmentsRepository {
    client: Rc<ApiClient>,
}

impl Default for DepartmentsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DepartmentsRepository {
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

    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    pub async fn fetch_department(&self, id: &str) -> Result<Department, ApiError> {
        self.client.get_department(id).await
    }

    pub async fn create_department(&self, payload: DepartmentPayload) -> Result<(), ApiError> {
        self.client.add_department(&payload).await
    }

    pub async fn update_department(&self, id: &str, payload: DepartmentPayload) -> Result<(), ApiError> {
        self.client.update_department(id, &payload).await
    }

    pub async fn delete_department(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_department(id).await
    }
}
