use super::{
    components::{
        form::{AddEmployeeForm, EditEmployeeForm},
        profile::EmployeeProfileCard,
        table::EmployeeTable,
    },
    repository::EmployeesRepository,
    utils::EMPLOYEES_PATH,
    view_model::{
        profile_image_url, use_add_employee_view_model, use_edit_employee_view_model, use_employee_list_view_model,
        use_employee_profile_view_model,
    },
};
use crate::{
    api::{ApiError, Department, Employee, Role},
    components::{
        common::SearchInput,
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, LoadingSpinner, PageHeader},
    },
    pages::route_param,
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

fn department_options(
    departments: Resource<(), Result<Vec<Department>, ApiError>>,
) -> Signal<Vec<Department>> {
    Signal::derive(move || {
        departments
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    })
}

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let vm = use_employee_list_view_model();
    let list = vm.list;
    let query = Signal::derive(move || list.listing.with(|l| l.query().to_string()));
    let profile = use_employee_profile_images();

    view! {
        <section>
            <PageHeader title="Manage Employees" subtitle="View and manage all employees" />
            <div class="flex flex-col md:flex-row gap-4 justify-between items-center mb-4">
                <SearchInput
                    placeholder="Search by ID, name or department..."
                    value=query
                    on_input=Callback::new(move |q: String| list.search(q))
                />
                <div class="flex items-center gap-4">
                    <span class="text-sm text-gray-600">
                        "Total: " {move || list.listing.with(|l| l.filtered_count())}
                    </span>
                    <a
                        href="/admin-dashboard/add-employee"
                        class="px-4 py-2 rounded-md bg-teal-600 text-white text-sm font-semibold hover:bg-teal-700"
                    >
                        "Add New Employee"
                    </a>
                </div>
            </div>
            {move || {
                if list.is_loading() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if let Some(err) = list.load_error() {
                    view! { <ErrorMessage message=err.error /> }.into_view()
                } else {
                    view! {
                        <EmployeeTable
                            listing=list.listing
                            image_url=profile
                            on_delete=Callback::new(move |employee: Employee| {
                                vm.pending_delete.set(Some(employee))
                            })
                        />
                    }
                    .into_view()
                }
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete employee"
                message="Are you sure you want to delete this employee?"
                pending=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </section>
    }
}

fn use_employee_profile_images() -> Callback<Option<String>, String> {
    let repository = EmployeesRepository::from_context();
    Callback::new(move |file_name: Option<String>| {
        profile_image_url(&repository, file_name.as_deref())
    })
}

#[component]
pub fn AddEmployeePanel() -> impl IntoView {
    let vm = use_add_employee_view_model();
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <section>
            <PageHeader title="Add New Employee" back_href=EMPLOYEES_PATH />
            <AddEmployeeForm
                form=vm.form
                departments=department_options(vm.departments)
                error=vm.error
                pending=vm.save_action.pending().into()
                on_submit=on_submit
            />
        </section>
    }
}

#[component]
pub fn EditEmployeePanel(#[prop(into)] id: String) -> impl IntoView {
    let vm = use_edit_employee_view_model(id);
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <section>
            <PageHeader title="Edit Employee" back_href=EMPLOYEES_PATH />
            <Show
                when=move || vm.employee.with(|result| result.is_some())
                fallback=|| view! { <LoadingSpinner /> }
            >
                <EditEmployeeForm
                    form=vm.form
                    departments=department_options(vm.departments)
                    error=vm.error
                    pending=vm.save_action.pending().into()
                    on_submit=on_submit
                />
            </Show>
        </section>
    }
}

/// Shared by the admin detail route and the employee's own profile route.
#[component]
pub fn EmployeeProfilePanel(#[prop(into)] id: String) -> impl IntoView {
    let vm = use_employee_profile_view_model(id);
    let (auth, _) = use_auth();
    let is_admin = move || auth.with(|state| state.role() == Some(Role::Admin));
    let employee = vm.employee;

    view! {
        <section>
            <PageHeader title="Employee Details" />
            {move || match employee.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(employee)) => {
                    let image_url = vm.image_url(employee.profile_image());
                    view! {
                        <EmployeeProfileCard employee=employee image_url=image_url can_edit=is_admin() />
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

#[component]
pub fn AddEmployeePage() -> impl IntoView {
    view! { <AddEmployeePanel /> }
}

#[component]
pub fn EditEmployeePage() -> impl IntoView {
    let id = route_param("id");
    view! { <EditEmployeePanel id=id /> }
}

#[component]
pub fn EmployeeProfilePage() -> impl IntoView {
    let id = route_param("id");
    view! { <EmployeeProfilePanel id=id /> }
}
