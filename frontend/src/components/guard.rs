use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Pending,
    Redirect(&'static str),
    Render,
}

pub fn guard_decision(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match state.role() {
        None => GuardDecision::Redirect(LOGIN_PATH),
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        Some(_) => GuardDecision::Redirect(UNAUTHORIZED_PATH),
    }
}

/// Renders `children` only for a session whose role is in `allowed`.
#[component]
pub fn RequireRole(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| guard_decision(&auth.get(), allowed));

    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::info!("Route guard redirecting to {}", target);
            navigation::redirect(target);
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Pending {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, employee_user};

    fn state(user: Option<crate::api::SessionUser>, loading: bool) -> AuthState {
        AuthState { user, loading }
    }

    #[test]
    fn loading_session_is_pending() {
        assert_eq!(
            guard_decision(&state(Some(admin_user()), true), &[Role::Admin]),
            GuardDecision::Pending
        );
    }

    #[test]
    fn anonymous_session_goes_to_login() {
        assert_eq!(
            guard_decision(&state(None, false), &[Role::Admin, Role::Employee]),
            GuardDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn role_outside_allow_list_is_unauthorized() {
        assert_eq!(
            guard_decision(&state(Some(employee_user()), false), &[Role::Admin]),
            GuardDecision::Redirect(UNAUTHORIZED_PATH)
        );
        let mut stranger = employee_user();
        stranger.role = Role::Unknown;
        assert_eq!(
            guard_decision(&state(Some(stranger), false), &[Role::Admin, Role::Employee]),
            GuardDecision::Redirect(UNAUTHORIZED_PATH)
        );
    }

    #[test]
    fn allowed_role_renders() {
        assert_eq!(
            guard_decision(&state(Some(admin_user()), false), &[Role::Admin, Role::Employee]),
            GuardDecision::Render
        );
        assert_eq!(
            guard_decision(&state(Some(employee_user()), false), &[Role::Admin, Role::Employee]),
            GuardDecision::Render
        );
    }
}
