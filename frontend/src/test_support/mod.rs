#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, SessionUser};
    use crate::state::auth::{AuthContext, AuthState};
    use leptos::*;

    pub fn admin_user() -> SessionUser {
        SessionUser {
            id: "u-admin".into(),
            name: "Admin User".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            is_blocked: false,
            profile_image: None,
        }
    }

    pub fn employee_user() -> SessionUser {
        SessionUser {
            id: "u-employee".into(),
            name: "Ayesha Khan".into(),
            email: "ayesha@example.com".into(),
            role: Role::Employee,
            is_blocked: false,
            profile_image: Some("ayesha.png".into()),
        }
    }

    pub fn provide_auth(user: Option<SessionUser>) -> AuthContext {
        provide_auth_state(AuthState {
            user,
            loading: false,
        })
    }

    pub fn provide_auth_state(state: AuthState) -> AuthContext {
        let ctx = create_signal(state);
        provide_context::<AuthContext>(ctx);
        ctx
    }
}
