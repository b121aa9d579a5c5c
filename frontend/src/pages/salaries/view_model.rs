use super::{
    repository::SalariesRepository,
    utils::{history_path, SalaryFormState},
};
use crate::{
    api::{ApiError, Department, Employee, Salary, SalaryPayload},
    state::{
        list::{use_list_state, ListState},
        toast::use_toast,
    },
    utils::navigation::{self, SAVE_REDIRECT_DELAY_MS},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SalaryHistoryViewModel {
    pub list: ListState<Salary>,
}

/// `id` is an employee record id (admin) or the session user id (employee side).
pub fn use_salary_history_view_model(id: String) -> SalaryHistoryViewModel {
    let repository = SalariesRepository::from_context();
    let list = use_list_state(
        move || id.clone(),
        move |id| {
            let repo = repository.clone();
            async move { repo.fetch_salaries(&id).await }
        },
    );
    SalaryHistoryViewModel { list }
}

#[derive(Clone, Copy)]
pub struct AddSalaryViewModel {
    pub form: RwSignal<SalaryFormState>,
    pub error: RwSignal<Option<ApiError>>,
    pub departments: Resource<(), Result<Vec<Department>, ApiError>>,
    pub employees: Resource<String, Result<Vec<Employee>, ApiError>>,
    /// Resolves to the employee the record was filed for.
    pub save_action: Action<SalaryPayload, Result<String, ApiError>>,
}

impl AddSalaryViewModel {
    pub fn net_preview(&self) -> f64 {
        self.form.with(SalaryFormState::net_preview)
    }

    pub fn select_department(&self, department: String) {
        self.form.update(|form| form.select_department(department));
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(SalaryFormState::to_payload) {
            Ok(payload) => {
                self.error.set(None);
                self.save_action.dispatch(payload);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_add_salary_view_model() -> AddSalaryViewModel {
    let repository = SalariesRepository::from_context();
    let toast = use_toast();
    let form = create_rw_signal(SalaryFormState::default());
    let error = create_rw_signal(None::<ApiError>);

    let repo = repository.clone();
    let departments = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_departments().await }
        },
    );

    let repo = repository.clone();
    let employees = create_resource(
        move || form.with(|f| f.department.clone()),
        move |department: String| {
            let repo = repo.clone();
            async move {
                if department.is_empty() {
                    Ok(Vec::new())
                } else {
                    repo.fetch_department_employees(&department).await
                }
            }
        },
    );

    let save_action = create_action(move |payload: &SalaryPayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move {
            let employee_id = payload.employee_id.clone();
            repo.add_salary(payload).await.map(|_| employee_id)
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(employee_id) => {
                    toast.success("Salary Added Successfully");
                    navigation::redirect_after_owned(
                        history_path(&employee_id),
                        SAVE_REDIRECT_DELAY_MS,
                    );
                }
                Err(err) => {
                    log::error!("Salary save failed: {}", err);
                    toast.error(err.error.clone());
                    error.set(Some(err));
                }
            }
        }
    });

    AddSalaryViewModel {
        form,
        error,
        departments,
        employees,
        save_action,
    }
}
