use reqwest::Method;

use super::{
    client::{encode_segment, take_list, ApiClient},
    types::{ApiError, Salary, SalaryPayload},
};

impl ApiClient {
    /// Salary history for an employee record id or, from the employee side, a user id.
    pub async fn salaries_for(&self, id: &str) -> Result<Vec<Salary>, ApiError> {
        let mut body = self
            .get_json(&format!("/salary/{}", encode_segment(id)))
            .await?;
        take_list(&mut body, "salary")
    }

    pub async fn add_salary(&self, payload: &SalaryPayload) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/salary/add", payload)
            .await
            .map(|_| ())
    }
}
