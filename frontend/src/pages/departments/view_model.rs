use super::{repository::DepartmentsRepository, utils::DepartmentFormState};
use crate::{
    api::{ApiError, Department, DepartmentPayload},
    state::{
        list::{settle_delete, use_list_state, ListState},
        toast::{use_toast, ToastState},
    },
    utils::navigation::{self, SAVE_REDIRECT_DELAY_MS},
};
use leptos::*;

pub const DEPARTMENTS_PATH: &str = "/admin-dashboard/departments";

#[derive(Clone, Copy)]
pub struct DepartmentListViewModel {
    pub list: ListState<Department>,
    pub pending_delete: RwSignal<Option<Department>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl DepartmentListViewModel {
    pub fn confirm_delete(&self) {
        if let Some(department) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(department.id);
        }
    }
}

pub fn use_department_list_view_model() -> DepartmentListViewModel {
    let repository = DepartmentsRepository::from_context();
    let toast = use_toast();

    let repo_for_list = repository.clone();
    let list = use_list_state(String::new, move |_| {
        let repo = repo_for_list.clone();
        async move { repo.fetch_departments().await }
    });

    let pending_delete = create_rw_signal(None::<Department>);
    let delete_action = create_action(move |id: &String| {
        let repo = repository.clone();
        let id = id.clone();
        async move { repo.delete_department(&id).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            settle_delete(list, toast, result, "Department deleted successfully");
        }
    });

    DepartmentListViewModel {
        list,
        pending_delete,
        delete_action,
    }
}

#[derive(Clone, Copy)]
pub struct DepartmentFormViewModel {
    pub form: RwSignal<DepartmentFormState>,
    pub error: RwSignal<Option<ApiError>>,
    pub existing: Option<Resource<String, Result<Department, ApiError>>>,
    pub save_action: Action<DepartmentPayload, Result<(), ApiError>>,
}

impl DepartmentFormViewModel {
    pub fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_payload() {
            Ok(payload) => {
                self.error.set(None);
                self.save_action.dispatch(payload);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_add_department_view_model() -> DepartmentFormViewModel {
    build_form_view_model(None)
}

pub fn use_edit_department_view_model(id: String) -> DepartmentFormViewModel {
    build_form_view_model(Some(id))
}

fn build_form_view_model(id: Option<String>) -> DepartmentFormViewModel {
    let repository = DepartmentsRepository::from_context();
    let toast = use_toast();
    let form = create_rw_signal(DepartmentFormState::default());
    let error = create_rw_signal(None::<ApiError>);

    let existing = id.clone().map(|id| {
        let repo = repository.clone();
        let resource = create_resource(
            move || id.clone(),
            move |id| {
                let repo = repo.clone();
                async move { repo.fetch_department(&id).await }
            },
        );
        create_effect(move |_| match resource.get() {
            Some(Ok(department)) => form.set(DepartmentFormState::from_department(&department)),
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });
        resource
    });

    let save_action = create_action(move |payload: &DepartmentPayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        let id = id.clone();
        async move {
            match id {
                Some(id) => repo.update_department(&id, payload).await,
                None => repo.create_department(payload).await,
            }
        }
    });

    let editing = existing.is_some();
    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            on_department_saved(toast, result, editing, error);
        }
    });

    DepartmentFormViewModel {
        form,
        error,
        existing,
        save_action,
    }
}

fn on_department_saved(
    toast: ToastState,
    result: Result<(), ApiError>,
    editing: bool,
    error: RwSignal<Option<ApiError>>,
) {
    match result {
        Ok(()) => {
            toast.success(if editing {
                "Department updated successfully"
            } else {
                "Department added successfully"
            });
            navigation::redirect_after(DEPARTMENTS_PATH, SAVE_REDIRECT_DELAY_MS);
        }
        Err(err) => {
            toast.error(err.error.clone());
            error.set(Some(err));
        }
    }
}
