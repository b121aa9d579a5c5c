use reqwest::Method;

use super::{
    client::{encode_segment, take_field, take_list, ApiClient},
    types::{ApiError, Department, DepartmentPayload},
};

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        let mut body = self.get_json("/department").await?;
        take_list(&mut body, "department")
    }

    pub async fn add_department(&self, payload: &DepartmentPayload) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/department/add", payload)
            .await
            .map(|_| ())
    }

    pub async fn get_department(&self, id: &str) -> Result<Department, ApiError> {
        let mut body = self
            .get_json(&format!("/department/{}", encode_segment(id)))
            .await?;
        take_field(&mut body, "dep")
    }

    pub async fn update_department(
        &self,
        id: &str,
        payload: &DepartmentPayload,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/department/{}", encode_segment(id)),
            payload,
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_department(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/department/{}", encode_segment(id)))
            .await
            .map(|_| ())
    }
}
