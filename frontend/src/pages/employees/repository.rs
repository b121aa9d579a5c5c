use crate::api::{ApiClient, ApiError, Department, Employee, EmployeeUpdate, NewEmployee};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
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

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn fetch_employee(&self, id: &str) -> Result<Employee, ApiError> {
        self.client.get_employee(id).await
    }

    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    pub async fn create_employee(&self, employee: NewEmployee) -> Result<(), ApiError> {
        self.client.add_employee(&employee).await
    }

    pub async fn update_employee(&self, id: &str, update: EmployeeUpdate) -> Result<(), ApiError> {
        self.client.update_employee(id, &update).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }
}
