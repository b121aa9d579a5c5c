use super::{
    repository::EmployeesRepository,
    utils::{EmployeeEditForm, NewEmployeeForm, DEFAULT_AVATAR, EMPLOYEES_PATH},
};
use crate::{
    api::{ApiError, Department, Employee, EmployeeUpdate, NewEmployee},
    state::{
        list::{settle_delete, use_list_state, ListState},
        toast::{use_toast, ToastState},
    },
    utils::navigation::{self, SAVE_REDIRECT_DELAY_MS},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeeListViewModel {
    pub list: ListState<Employee>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl EmployeeListViewModel {
    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(employee.id);
        }
    }
}

pub fn use_employee_list_view_model() -> EmployeeListViewModel {
    let repository = EmployeesRepository::from_context();
    let toast = use_toast();

    let repo_for_list = repository.clone();
    let list = use_list_state(String::new, move |_| {
        let repo = repo_for_list.clone();
        async move { repo.fetch_employees().await }
    });

    let pending_delete = create_rw_signal(None::<Employee>);
    let delete_action = create_action(move |id: &String| {
        let repo = repository.clone();
        let id = id.clone();
        async move { repo.delete_employee(&id).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            settle_delete(list, toast, result, "Employee deleted successfully");
        }
    });

    EmployeeListViewModel {
        list,
        pending_delete,
        delete_action,
    }
}

fn departments_resource(repository: &EmployeesRepository) -> Resource<(), Result<Vec<Department>, ApiError>> {
    let repo = repository.clone();
    create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_departments().await }
        },
    )
}

/// Shared tail of every employee save: toast, then back to the list.
fn on_saved(
    toast: ToastState,
    result: Result<(), ApiError>,
    success: &'static str,
    error: RwSignal<Option<ApiError>>,
) {
    match result {
        Ok(()) => {
            toast.success(success);
            navigation::redirect_after(EMPLOYEES_PATH, SAVE_REDIRECT_DELAY_MS);
        }
        Err(err) => {
            toast.error(err.error.clone());
            error.set(Some(err));
        }
    }
}

#[derive(Clone, Copy)]
pub struct AddEmployeeViewModel {
    pub form: RwSignal<NewEmployeeForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub departments: Resource<(), Result<Vec<Department>, ApiError>>,
    pub save_action: Action<NewEmployee, Result<(), ApiError>>,
}

impl AddEmployeeViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(NewEmployeeForm::to_new_employee) {
            Ok(employee) => {
                self.error.set(None);
                self.save_action.dispatch(employee);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_add_employee_view_model() -> AddEmployeeViewModel {
    let repository = EmployeesRepository::from_context();
    let form = create_rw_signal(NewEmployeeForm::default());
    let error = create_rw_signal(None::<ApiError>);
    let departments = departments_resource(&repository);
    let toast = use_toast();

    let save_action = create_action(move |employee: &NewEmployee| {
        let repo = repository.clone();
        let employee = employee.clone();
        async move { repo.create_employee(employee).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            on_saved(toast, result, "Employee added successfully", error);
        }
    });

    AddEmployeeViewModel {
        form,
        error,
        departments,
        save_action,
    }
}

#[derive(Clone, Copy)]
pub struct EditEmployeeViewModel {
    pub form: RwSignal<EmployeeEditForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub employee: Resource<String, Result<Employee, ApiError>>,
    pub departments: Resource<(), Result<Vec<Department>, ApiError>>,
    pub save_action: Action<EmployeeUpdate, Result<(), ApiError>>,
}

impl EditEmployeeViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(EmployeeEditForm::to_update) {
            Ok(update) => {
                self.error.set(None);
                self.save_action.dispatch(update);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_edit_employee_view_model(id: String) -> EditEmployeeViewModel {
    let repository = EmployeesRepository::from_context();
    let form = create_rw_signal(EmployeeEditForm::default());
    let error = create_rw_signal(None::<ApiError>);
    let departments = departments_resource(&repository);
    let employee = employee_resource(&repository, id.clone());
    let toast = use_toast();

    create_effect(move |_| match employee.get() {
        Some(Ok(employee)) => form.set(EmployeeEditForm::from_employee(&employee)),
        Some(Err(err)) => {
            toast.error("Failed to load employee data");
            error.set(Some(err));
        }
        None => {}
    });

    let save_action = create_action(move |update: &EmployeeUpdate| {
        let repo = repository.clone();
        let update = update.clone();
        let id = id.clone();
        async move { repo.update_employee(&id, update).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            on_saved(toast, result, "Employee updated successfully", error);
        }
    });

    EditEmployeeViewModel {
        form,
        error,
        employee,
        departments,
        save_action,
    }
}

fn employee_resource(
    repository: &EmployeesRepository,
    id: String,
) -> Resource<String, Result<Employee, ApiError>> {
    let repo = repository.clone();
    create_resource(
        move || id.clone(),
        move |id| {
            let repo = repo.clone();
            async move { repo.fetch_employee(&id).await }
        },
    )
}

#[derive(Clone)]
pub struct EmployeeProfileViewModel {
    pub employee: Resource<String, Result<Employee, ApiError>>,
    repository: EmployeesRepository,
}

impl EmployeeProfileViewModel {
    pub fn image_url(&self, file_name: Option<&str>) -> String {
        profile_image_url(&self.repository, file_name)
    }
}

/// Stored image names resolve against the uploads directory; no image means the default avatar.
pub fn profile_image_url(repository: &EmployeesRepository, file_name: Option<&str>) -> String {
    match file_name {
        Some(name) if !name.is_empty() => repository.asset_url(name),
        _ => DEFAULT_AVATAR.to_string(),
    }
}

pub fn use_employee_profile_view_model(id: String) -> EmployeeProfileViewModel {
    let repository = EmployeesRepository::from_context();
    let employee = employee_resource(&repository, id);
    EmployeeProfileViewModel {
        employee,
        repository,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn add_form_rejects_incomplete_input() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = use_add_employee_view_model();
            vm.form.update(|f| f.name = "Sara".into());
            vm.submit();
            assert_eq!(
                vm.error.get().map(|e| e.error),
                Some("Email is required".to_string())
            );
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn profile_image_resolves_against_uploads() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_context(ApiClient::new_with_base_url("http://api.test/api"));
            let vm = use_employee_profile_view_model("e1".into());
            assert_eq!(
                vm.image_url(Some("sara.png")),
                "http://api.test/uploads/sara.png"
            );
            assert_eq!(vm.image_url(None), "/avatar.png");
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn save_success_toasts_without_error() {
        with_runtime(|| {
            let toast = ToastState::new();
            let error = create_rw_signal(None::<ApiError>);
            on_saved(toast, Ok(()), "Employee added successfully", error);
            assert!(error.get().is_none());
            let toasts = toast.toasts.get();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[0].message, "Employee added successfully");
        });
    }

    #[test]
    fn save_failure_keeps_the_form_error() {
        with_runtime(|| {
            let toast = ToastState::new();
            let error = create_rw_signal(None::<ApiError>);
            on_saved(
                toast,
                Err(ApiError::validation("Email already registered")),
                "Employee updated successfully",
                error,
            );
            assert_eq!(
                error.get().map(|e| e.error),
                Some("Email already registered".to_string())
            );
            assert_eq!(toast.toasts.with(|t| t[0].kind), ToastKind::Error);
        });
    }
}
