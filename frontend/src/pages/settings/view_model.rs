use super::{repository, utils::PasswordForm};
use crate::{
    api::{ApiClient, ApiError, ChangePasswordRequest},
    state::{
        auth::{home_path_for, use_auth, AuthState},
        toast::use_toast,
    },
    utils::navigation::{self, SHORT_REDIRECT_DELAY_MS},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SettingsViewModel {
    pub form: RwSignal<PasswordForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub change_password_action: Action<ChangePasswordRequest, Result<(), ApiError>>,
    auth: ReadSignal<AuthState>,
}

impl SettingsViewModel {
    pub fn submit(&self) {
        if self.change_password_action.pending().get_untracked() {
            return;
        }
        let user_id = self
            .auth
            .with_untracked(|state| state.user.as_ref().map(|user| user.id.clone()));
        match self
            .form
            .with_untracked(|form| form.to_request(user_id.as_deref()))
        {
            Ok(request) => {
                self.error.set(None);
                self.change_password_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_settings_view_model() -> SettingsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (auth, _) = use_auth();
    let toast = use_toast();
    let form = create_rw_signal(PasswordForm::default());
    let error = create_rw_signal(None::<ApiError>);

    let change_password_action = create_action(move |request: &ChangePasswordRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { repository::change_password(api, request).await }
    });

    create_effect(move |_| {
        if let Some(result) = change_password_action.value().get() {
            match result {
                Ok(()) => {
                    toast.success("Password changed successfully");
                    form.set(PasswordForm::default());
                    let home = home_path_for(auth.with_untracked(AuthState::role));
                    navigation::redirect_after(home, SHORT_REDIRECT_DELAY_MS);
                }
                Err(err) => {
                    log::warn!("Password change failed: {}", err);
                    toast.error("Failed to change password");
                    error.set(Some(err));
                }
            }
        }
    });

    SettingsViewModel {
        form,
        error,
        change_password_action,
        auth,
    }
}
