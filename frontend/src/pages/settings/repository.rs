use crate::api::{ApiClient, ApiError, ChangePasswordRequest};

pub async fn change_password(
    client: ApiClient,
    request: ChangePasswordRequest,
) -> Result<(), ApiError> {
    client.change_password(&request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::change_password;
    use crate::api::test_support::mock::*;
    use crate::api::{ApiClient, ChangePasswordRequest};

    #[tokio::test]
    async fn change_password_puts_settings_route() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/api/setting/change-password");
            then.status(200).json_body(serde_json::json!({ "success": true }));
        });

        let client = ApiClient::new_with_base_url(server.url("/api"));
        change_password(
            client,
            ChangePasswordRequest {
                user_id: "u1".into(),
                old_password: "current".into(),
                new_password: "newpass".into(),
                confirmed_password: "newpass".into(),
            },
        )
        .await
        .expect("change password");

        let body = server.last_request().and_then(|r| r.body).unwrap();
        assert_eq!(body["userID"], "u1");
        assert_eq!(body["newPassword"], "newpass");
    }

    #[tokio::test]
    async fn wrong_old_password_surfaces_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/api/setting/change-password");
            then.status(404)
                .json_body(serde_json::json!({ "success": false, "error": "wrong old password" }));
        });

        let client = ApiClient::new_with_base_url(server.url("/api"));
        let err = change_password(client, ChangePasswordRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.error, "wrong old password");
    }
}
