use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, SessionUser},
    pages::login::repository::LoginRepository,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

pub fn home_path_for(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "/admin-dashboard",
        Some(Role::Employee) => "/employee-dashboard",
        _ => "/login",
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        user: None,
        loading: true,
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        restore_session(&api_client, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

/// Owns the session for everything rendered inside it. The stored token is
/// verified once on mount; [`logout`] is the matching teardown.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn restore_session(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    let user = match api_client.verify().await {
        Ok(user) if user.is_blocked => {
            log::warn!("Stored session belongs to a blocked account, signing out");
            api_client.clear_session();
            None
        }
        Ok(user) => {
            log::info!("Session restored for {}", user.email);
            Some(user)
        }
        Err(err) => {
            log::debug!("No session restored: {}", err);
            api_client.clear_session();
            None
        }
    };
    set_auth_state.update(|state| {
        state.user = user;
        state.loading = false;
    });
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<SessionUser, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            let user = response.user;
            set_auth_state.update(|state| {
                state.user = Some(user.clone());
                state.loading = false;
            });
            Ok(user)
        }
        Err(error) => {
            log::warn!("Login failed: {}", error);
            set_auth_state.update(|state| {
                state.user = None;
                state.loading = false;
            });
            Err(error)
        }
    }
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.update(|state| {
        state.user = None;
        state.loading = false;
    });
    log::info!("Logged out");
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<SessionUser, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();
    Callback::new(move |_| logout(&repo, set_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn home_path_follows_role() {
        assert_eq!(home_path_for(Some(Role::Admin)), "/admin-dashboard");
        assert_eq!(home_path_for(Some(Role::Employee)), "/employee-dashboard");
        assert_eq!(home_path_for(Some(Role::Unknown)), "/login");
        assert_eq!(home_path_for(None), "/login");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::utils::storage::{KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};

    fn user_json(blocked: bool) -> serde_json::Value {
        serde_json::json!({
            "_id": "u1",
            "name": "Ayesha Khan",
            "email": "ayesha@example.com",
            "role": "employee",
            "isBlocked": blocked
        })
    }

    fn api_for(server: &MockServer, store: &MemoryStore) -> ApiClient {
        ApiClient::new_with_base_url(server.url("/api")).with_store(Rc::new(store.clone()))
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "success": true,
                "token": "tok-1",
                "user": user_json(false)
            }));
        });

        let runtime = create_runtime();
        let store = MemoryStore::new();
        let (state, set_state) = create_signal(AuthState::default());
        let repo = LoginRepository::new_with_client(Rc::new(api_for(&server, &store)));

        let user = login_request(
            LoginRequest {
                email: "ayesha@example.com".into(),
                password: "secret1".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(user.name, "Ayesha Khan");
        assert_eq!(state.get().role(), Some(Role::Employee));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));

        logout(&repo, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_session_anonymous() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(400).json_body(serde_json::json!({ "success": false, "error": "Wrong Password" }));
        });

        let runtime = create_runtime();
        let store = MemoryStore::new();
        let (state, set_state) = create_signal(AuthState::default());
        let repo = LoginRepository::new_with_client(Rc::new(api_for(&server, &store)));

        let err = login_request(
            LoginRequest {
                email: "ayesha@example.com".into(),
                password: "nope".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Wrong Password");
        assert!(!state.get().is_authenticated());
        assert!(!state.get().loading);
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_session_accepts_verified_user() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/verify");
            then.status(200).json_body(serde_json::json!({ "success": true, "user": user_json(false) }));
        });

        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok-1").unwrap();
        let (state, set_state) = create_signal(AuthState {
            user: None,
            loading: true,
        });

        restore_session(&api_for(&server, &store), set_state).await;
        let snapshot = state.get();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user.map(|u| u.id), Some("u1".to_string()));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_session_rejects_blocked_user_and_clears_storage() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/verify");
            then.status(200).json_body(serde_json::json!({ "success": true, "user": user_json(true) }));
        });

        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok-1").unwrap();
        store.set(USER_KEY, "{}").unwrap();
        let (state, set_state) = create_signal(AuthState {
            user: None,
            loading: true,
        });

        restore_session(&api_for(&server, &store), set_state).await;
        assert!(!state.get().is_authenticated());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_session_without_token_is_anonymous() {
        let server = MockServer::start();
        let runtime = create_runtime();
        let store = MemoryStore::new();
        let (state, set_state) = create_signal(AuthState {
            user: None,
            loading: true,
        });

        restore_session(&api_for(&server, &store), set_state).await;
        assert!(!state.get().loading);
        assert!(!state.get().is_authenticated());
        assert!(server.requests().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_session_failure_clears_storage() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/verify");
            then.status(500).json_body(serde_json::json!({ "success": false, "error": "db down" }));
        });

        let runtime = create_runtime();
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok-1").unwrap();
        let (state, set_state) = create_signal(AuthState::default());

        restore_session(&api_for(&server, &store), set_state).await;
        assert!(!state.get().is_authenticated());
        assert!(store.get(TOKEN_KEY).is_none());
        runtime.dispose();
    }
}
