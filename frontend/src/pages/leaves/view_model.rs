use super::{
    repository::LeavesRepository,
    utils::{AdminLeave, LeaveFormState, StatusFilter, EMPLOYEE_HOME_PATH, LEAVES_PATH},
};
use crate::{
    api::{ApiError, Leave, LeaveBalance, LeavePayload, LeaveStatus},
    state::{
        list::{use_list_state, ListState},
        toast::{use_toast, ToastState},
    },
    utils::navigation::{self, SAVE_REDIRECT_DELAY_MS},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminLeavesViewModel {
    pub list: ListState<AdminLeave>,
}

impl AdminLeavesViewModel {
    pub fn status(&self) -> StatusFilter {
        self.list.listing.with(|l| *l.filter())
    }

    pub fn set_status(&self, status: StatusFilter) {
        self.list.set_filter(status);
    }
}

pub fn use_admin_leaves_view_model() -> AdminLeavesViewModel {
    let repository = LeavesRepository::from_context();
    let list = use_list_state(String::new, move |_| {
        let repo = repository.clone();
        async move {
            repo.fetch_all()
                .await
                .map(|leaves| leaves.into_iter().map(AdminLeave).collect())
        }
    });
    AdminLeavesViewModel { list }
}

#[derive(Clone, Copy)]
pub struct LeaveHistoryViewModel {
    pub list: ListState<Leave>,
}

/// `id` is whatever the route carries: an employee record id on the admin
/// side, the session user id on the employee side.
pub fn use_leave_history_view_model(id: String) -> LeaveHistoryViewModel {
    let repository = LeavesRepository::from_context();
    let list = use_list_state(
        move || id.clone(),
        move |id| {
            let repo = repository.clone();
            async move { repo.fetch_for(&id).await }
        },
    );
    LeaveHistoryViewModel { list }
}

#[derive(Clone)]
pub struct LeaveDetailViewModel {
    pub leave: Resource<String, Result<Leave, ApiError>>,
    pub status_action: Action<LeaveStatus, Result<Leave, ApiError>>,
    repository: LeavesRepository,
}

impl LeaveDetailViewModel {
    pub fn approve(&self) {
        self.change_status(LeaveStatus::Approved);
    }

    pub fn reject(&self) {
        self.change_status(LeaveStatus::Rejected);
    }

    fn change_status(&self, status: LeaveStatus) {
        if !self.status_action.pending().get_untracked() {
            self.status_action.dispatch(status);
        }
    }

    pub fn image_url(&self, file_name: Option<&str>) -> String {
        match file_name {
            Some(name) if !name.is_empty() => self.repository.asset_url(name),
            _ => crate::pages::employees::utils::DEFAULT_AVATAR.to_string(),
        }
    }
}

pub fn use_leave_detail_view_model(id: String) -> LeaveDetailViewModel {
    let repository = LeavesRepository::from_context();
    let toast = use_toast();

    let repo = repository.clone();
    let leave_id = id.clone();
    let leave = create_resource(
        move || leave_id.clone(),
        move |id| {
            let repo = repo.clone();
            async move { repo.fetch_detail(&id).await }
        },
    );

    let repo = repository.clone();
    let status_action = create_action(move |status: &LeaveStatus| {
        let repo = repo.clone();
        let id = id.clone();
        let status = *status;
        async move { repo.set_status(&id, status).await }
    });

    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(updated) => {
                    toast.success(format!("Leave {}", updated.status.as_str()));
                    navigation::redirect_after(LEAVES_PATH, SAVE_REDIRECT_DELAY_MS);
                }
                Err(err) => {
                    log::error!("Leave status update failed: {}", err);
                    toast.error(err.error);
                }
            }
        }
    });

    LeaveDetailViewModel {
        leave,
        status_action,
        repository,
    }
}

#[derive(Clone, Copy)]
pub struct AddLeaveViewModel {
    pub form: RwSignal<LeaveFormState>,
    pub error: RwSignal<Option<ApiError>>,
    pub balance: RwSignal<LeaveBalance>,
    pub save_action: Action<LeavePayload, Result<Option<LeaveBalance>, ApiError>>,
    toast: ToastState,
}

impl AddLeaveViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(LeaveFormState::to_payload) {
            Ok(payload) => {
                self.error.set(None);
                self.save_action.dispatch(payload);
            }
            Err(err) => {
                self.toast.error(err.error.clone());
                self.error.set(Some(err));
            }
        }
    }
}

pub fn use_add_leave_view_model() -> AddLeaveViewModel {
    let repository = LeavesRepository::from_context();
    let toast = use_toast();
    let form = create_rw_signal(LeaveFormState::default());
    let error = create_rw_signal(None::<ApiError>);
    let balance = create_rw_signal(LeaveBalance::default());

    let save_action = create_action(move |payload: &LeavePayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { repo.apply(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(updated) => {
                    toast.success("Leave request submitted successfully");
                    if let Some(updated) = updated {
                        balance.set(updated);
                    }
                    navigation::redirect_after(EMPLOYEE_HOME_PATH, SAVE_REDIRECT_DELAY_MS);
                }
                Err(err) => {
                    log::error!("Leave request failed: {}", err);
                    toast.error(err.error.clone());
                    error.set(Some(err));
                }
            }
        }
    });

    AddLeaveViewModel {
        form,
        error,
        balance,
        save_action,
        toast,
    }
}
