use super::utils;
use crate::{
    api::{ApiError, LoginRequest, SessionUser},
    state::{
        auth::{self, home_path_for, use_auth, AuthState},
        toast::use_toast,
    },
    utils::navigation::{self, SHORT_REDIRECT_DELAY_MS},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<SessionUser, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match utils::validate_credentials(&self.email.get_untracked(), &self.password.get_untracked()) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

/// Home of a visitor who reaches `/login` already signed in. A login submitted
/// from this page sets the session while it runs; that one redirects on its own
/// schedule, so `login_in_flight` suppresses the forward.
pub fn existing_session_target(state: &AuthState, login_in_flight: bool) -> Option<&'static str> {
    if state.loading || login_in_flight {
        return None;
    }
    state.user.as_ref().map(|user| home_path_for(Some(user.role)))
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let toast = use_toast();
    let (auth_state, _) = use_auth();

    create_effect(move |_| {
        let in_flight = login_action.pending().get_untracked()
            || login_action.value().with_untracked(Option::is_some);
        if let Some(target) = auth_state.with(|state| existing_session_target(state, in_flight)) {
            navigation::redirect(target);
        }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    error.set(None);
                    password.set(String::new());
                    toast.success(utils::welcome_message(&user.name));
                    navigation::redirect_after(home_path_for(Some(user.role)), SHORT_REDIRECT_DELAY_MS);
                }
                Err(err) => {
                    toast.error(err.error.clone());
                    error.set(Some(err));
                }
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, employee_user};

    fn settled(user: Option<SessionUser>) -> AuthState {
        AuthState {
            user,
            loading: false,
        }
    }

    #[test]
    fn restored_session_is_forwarded_home() {
        assert_eq!(
            existing_session_target(&settled(Some(admin_user())), false),
            Some("/admin-dashboard")
        );
        assert_eq!(
            existing_session_target(&settled(Some(employee_user())), false),
            Some("/employee-dashboard")
        );
    }

    #[test]
    fn session_set_by_a_running_login_waits_for_its_redirect() {
        assert_eq!(existing_session_target(&settled(Some(admin_user())), true), None);
    }

    #[test]
    fn anonymous_or_loading_session_stays_on_form() {
        assert_eq!(existing_session_target(&settled(None), false), None);
        let restoring = AuthState {
            user: Some(admin_user()),
            loading: true,
        };
        assert_eq!(existing_session_target(&restoring, false), None);
    }
}
