use reqwest::Method;
use serde_json::json;

use super::{
    client::{encode_segment, take_field, take_list, ApiClient},
    types::{ApiError, Leave, LeaveBalance, LeavePayload, LeaveStatus},
};

impl ApiClient {
    pub async fn list_leaves(&self) -> Result<Vec<Leave>, ApiError> {
        let mut body = self.get_json("/leaves").await?;
        take_list(&mut body, "leavs")
    }

    pub async fn leaves_for(&self, id: &str) -> Result<Vec<Leave>, ApiError> {
        let mut body = self
            .get_json(&format!("/leaves/{}", encode_segment(id)))
            .await?;
        take_list(&mut body, "leave")
    }

    pub async fn leave_detail(&self, id: &str) -> Result<Leave, ApiError> {
        let mut body = self
            .get_json(&format!("/leaves/detail/{}", encode_segment(id)))
            .await?;
        take_field(&mut body, "leaves")
    }

    /// Returns the updated balance when the API includes one.
    pub async fn add_leave(&self, payload: &LeavePayload) -> Result<Option<LeaveBalance>, ApiError> {
        let mut body = self.send_json(Method::POST, "/leaves/add", payload).await?;
        Ok(take_field(&mut body, "leaveBalance").ok())
    }

    pub async fn update_leave_status(&self, id: &str, status: LeaveStatus) -> Result<Leave, ApiError> {
        let mut body = self
            .send_json(
                Method::PUT,
                &format!("/leaves/{}", encode_segment(id)),
                &json!({ "status": status }),
            )
            .await?;
        take_field(&mut body, "leaves")
    }
}
