use crate::api::{ApiClient, ApiError, Department, Employee, Salary, SalaryPayload};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct SalariesRepository {
    client: Rc<ApiClient>,
}

impl Default for SalariesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SalariesRepository {
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

    pub async fn fetch_department_employees(
        &self,
        department_id: &str,
    ) -> Result<Vec<Employee>, ApiError> {
        self.client.employees_by_department(department_id).await
    }

    pub async fn fetch_salaries(&self, id: &str) -> Result<Vec<Salary>, ApiError> {
        self.client.salaries_for(id).await
    }

    pub async fn add_salary(&self, payload: SalaryPayload) -> Result<(), ApiError> {
        self.client.add_salary(&payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn department_employees_hit_department_route() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/department/d1");
            then.status(200).json_body(json!({
                "success": true,
                "employee": [{ "_id": "e1", "employeeId": "EMP001", "userID": { "_id": "u1", "name": "Ali" } }]
            }));
        });
        let repo = SalariesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let employees = repo.fetch_department_employees("d1").await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name(), "Ali");
    }

    #[tokio::test]
    async fn add_salary_posts_wire_names() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/salary/add");
            then.status(200).json_body(json!({ "success": true }));
        });
        let repo = SalariesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        repo.add_salary(SalaryPayload {
            employee_id: "e1".into(),
            basic: 50000.0,
            allowance: 5000.0,
            deduction: 2000.0,
            pay_date: "2024-03-31".into(),
            month: "2024-03".into(),
        })
        .await
        .unwrap();

        let body = server.last_request().and_then(|r| r.body).unwrap();
        assert_eq!(body["employeeId"], "e1");
        assert_eq!(body["Deductation"], 2000.0);
    }
}
