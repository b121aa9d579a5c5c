use crate::{
    api::{ApiError, Department},
    components::{
        common::{Button, FormField, INPUT_CLASS},
        error::InlineErrorMessage,
    },
    pages::employees::utils::{
        read_profile_image, EmployeeEditForm, NewEmployeeForm, GENDERS, MARITAL_STATUSES, ROLES,
    },
    state::toast::use_toast,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

fn option_list(options: &'static [(&'static str, &'static str)], selected: Signal<String>) -> impl IntoView {
    options
        .iter()
        .map(|(value, label)| {
            let value = *value;
            view! {
                <option value=value selected=move || selected.get() == value>{*label}</option>
            }
        })
        .collect_view()
}

/// Department `<select>` fed by `GET /department`.
#[component]
pub fn DepartmentSelect(
    departments: Signal<Vec<Department>>,
    selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class=INPUT_CLASS
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            <option value="" selected=move || selected.get().is_empty()>"Select Department"</option>
            <For
                each=move || departments.get()
                key=|department| department.id.clone()
                children=move |department: Department| {
                    let id = department.id.clone();
                    view! {
                        <option value=department.id.clone() selected=move || selected.get() == id>
                            {department.name}
                        </option>
                    }
                }
            />
        </select>
    }
}

#[component]
pub fn AddEmployeeForm(
    form: RwSignal<NewEmployeeForm>,
    departments: Signal<Vec<Department>>,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let toast = use_toast();
    let field = move |read: fn(&NewEmployeeForm) -> &String| move || form.with(|f| read(f).clone());

    let on_image = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            form.update(|f| f.profile_image = None);
            return;
        };
        spawn_local(async move {
            match read_profile_image(file).await {
                Ok(image) => form.update(|f| f.profile_image = Some(image)),
                Err(err) => {
                    toast.error(err.error);
                }
            }
        });
    };

    view! {
        <form class="bg-white rounded-lg shadow p-6 space-y-6" on:submit=move |ev| on_submit.call(ev)>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <FormField label="Full Name">
                    <input type="text" required placeholder="Enter full name" class=INPUT_CLASS
                        prop:value=field(|f| &f.name)
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev)) />
                </FormField>
                <FormField label="Email Address">
                    <input type="email" required placeholder="employee@company.com" class=INPUT_CLASS
                        prop:value=field(|f| &f.email)
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev)) />
                </FormField>
                <FormField label="Date of Birth">
                    <input type="date" required class=INPUT_CLASS
                        prop:value=field(|f| &f.date_of_birth)
                        on:input=move |ev| form.update(|f| f.date_of_birth = event_target_value(&ev)) />
                </FormField>
                <FormField label="Gender">
                    <select class=INPUT_CLASS on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))>
                        <option value="">"Select Gender"</option>
                        {option_list(&GENDERS, Signal::derive(field(|f| &f.gender)))}
                    </select>
                </FormField>
                <FormField label="Marital Status">
                    <select class=INPUT_CLASS on:change=move |ev| form.update(|f| f.marital_status = event_target_value(&ev))>
                        <option value="">"Select Status"</option>
                        {option_list(&MARITAL_STATUSES, Signal::derive(field(|f| &f.marital_status)))}
                    </select>
                </FormField>
                <FormField label="Joining Date">
                    <input type="date" required class=INPUT_CLASS
                        prop:value=field(|f| &f.joining_date)
                        on:input=move |ev| form.update(|f| f.joining_date = event_target_value(&ev)) />
                </FormField>
                <FormField label="Designation">
                    <input type="text" required placeholder="e.g. Senior Developer" class=INPUT_CLASS
                        prop:value=field(|f| &f.designation)
                        on:input=move |ev| form.update(|f| f.designation = event_target_value(&ev)) />
                </FormField>
                <FormField label="Department">
                    <DepartmentSelect
                        departments=departments
                        selected=Signal::derive(field(|f| &f.department))
                        on_change=Callback::new(move |id| form.update(|f| f.department = id))
                    />
                </FormField>
                <FormField label="Salary">
                    <input type="number" min="0" required placeholder="Enter salary amount" class=INPUT_CLASS
                        prop:value=field(|f| &f.salary)
                        on:input=move |ev| form.update(|f| f.salary = event_target_value(&ev)) />
                </FormField>
                <FormField label="Role">
                    <select class=INPUT_CLASS on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))>
                        {option_list(&ROLES, Signal::derive(field(|f| &f.role)))}
                    </select>
                </FormField>
                <FormField label="Password">
                    <input type="password" required placeholder="Create strong password" class=INPUT_CLASS
                        prop:value=field(|f| &f.password)
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev)) />
                </FormField>
                <FormField label="Profile Image">
                    <input type="file" accept="image/*" class=INPUT_CLASS on:change=on_image />
                </FormField>
            </div>
            <InlineErrorMessage error=error />
            <Button attr:type="submit" class="w-full" loading=pending>"Add Employee"</Button>
        </form>
    }
}

#[component]
pub fn EditEmployeeForm(
    form: RwSignal<EmployeeEditForm>,
    departments: Signal<Vec<Department>>,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field = move |read: fn(&EmployeeEditForm) -> &String| move || form.with(|f| read(f).clone());

    view! {
        <form class="bg-white rounded-lg shadow p-6 space-y-6" on:submit=move |ev| on_submit.call(ev)>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <FormField label="Full Name">
                    <input type="text" required placeholder="Enter full name" class=INPUT_CLASS
                        prop:value=field(|f| &f.name)
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev)) />
                </FormField>
                <FormField label="Marital Status">
                    <select class=INPUT_CLASS on:change=move |ev| form.update(|f| f.marital_status = event_target_value(&ev))>
                        <option value="">"Select Status"</option>
                        {option_list(&MARITAL_STATUSES, Signal::derive(field(|f| &f.marital_status)))}
                    </select>
                </FormField>
                <FormField label="Designation">
                    <input type="text" required placeholder="e.g. Senior Developer" class=INPUT_CLASS
                        prop:value=field(|f| &f.designation)
                        on:input=move |ev| form.update(|f| f.designation = event_target_value(&ev)) />
                </FormField>
                <FormField label="Salary">
                    <input type="number" min="0" required placeholder="Enter salary amount" class=INPUT_CLASS
                        prop:value=field(|f| &f.salary)
                        on:input=move |ev| form.update(|f| f.salary = event_target_value(&ev)) />
                </FormField>
                <FormField label="Department">
                    <DepartmentSelect
                        departments=departments
                        selected=Signal::derive(field(|f| &f.department))
                        on_change=Callback::new(move |id| form.update(|f| f.department = id))
                    />
                </FormField>
                <FormField label="Role">
                    <select class=INPUT_CLASS on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))>
                        {option_list(&ROLES, Signal::derive(field(|f| &f.role)))}
                    </select>
                </FormField>
            </div>
            <InlineErrorMessage error=error />
            <Button attr:type="submit" class="w-full" loading=pending>"Update Employee"</Button>
        </form>
    }
}
