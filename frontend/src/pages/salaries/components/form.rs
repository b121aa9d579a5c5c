use crate::{
    api::{ApiError, Department, Employee},
    components::{
        common::{Button, FormField, INPUT_CLASS},
        error::InlineErrorMessage,
    },
    pages::salaries::utils::SalaryFormState,
    utils::format::format_currency,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AddSalaryForm(
    form: RwSignal<SalaryFormState>,
    departments: Signal<Vec<Department>>,
    employees: Signal<Vec<Employee>>,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_department: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field = move |read: fn(&SalaryFormState) -> &String| move || form.with(|f| read(f).clone());
    let net = move || format_currency(form.with(SalaryFormState::net_preview));

    view! {
        <form class="bg-white rounded-lg shadow p-6 space-y-6" on:submit=move |ev| on_submit.call(ev)>
            <fieldset class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <legend class="text-lg font-semibold text-gray-800 mb-2">"Employee Selection"</legend>
                <FormField label="Department">
                    <select class=INPUT_CLASS on:change=move |ev| on_department.call(event_target_value(&ev))>
                        <option value="">"Select Department"</option>
                        <For
                            each=move || departments.get()
                            key=|department| department.id.clone()
                            children=move |department: Department| {
                                view! { <option value=department.id.clone()>{department.name}</option> }
                            }
                        />
                    </select>
                </FormField>
                <FormField label="Employee Name">
                    <select
                        class=INPUT_CLASS
                        prop:value=field(|f| &f.employee_id)
                        on:change=move |ev| form.update(|f| f.employee_id = event_target_value(&ev))
                    >
                        <option value="">"Select Employee"</option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id.clone()
                            children=move |employee: Employee| {
                                let label = format!("{} - {}", employee.employee_code, employee.name());
                                view! { <option value=employee.id.clone()>{label}</option> }
                            }
                        />
                    </select>
                </FormField>
            </fieldset>
            <fieldset class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <legend class="text-lg font-semibold text-gray-800 mb-2">"Salary Breakdown"</legend>
                <FormField label="Basic Salary">
                    <input type="number" min="0" step="0.01" placeholder="0.00" class=INPUT_CLASS
                        prop:value=field(|f| &f.basic)
                        on:input=move |ev| form.update(|f| f.basic = event_target_value(&ev)) />
                </FormField>
                <FormField label="Allowances">
                    <input type="number" min="0" step="0.01" placeholder="0.00" class=INPUT_CLASS
                        prop:value=field(|f| &f.allowance)
                        on:input=move |ev| form.update(|f| f.allowance = event_target_value(&ev)) />
                </FormField>
                <FormField label="Deductions">
                    <input type="number" min="0" step="0.01" placeholder="0.00" class=INPUT_CLASS
                        prop:value=field(|f| &f.deduction)
                        on:input=move |ev| form.update(|f| f.deduction = event_target_value(&ev)) />
                </FormField>
            </fieldset>
            <div class="flex items-center justify-between rounded-md bg-teal-50 px-4 py-3">
                <span class="text-sm font-semibold text-teal-800">"Net Salary"</span>
                <span class="text-lg font-bold text-teal-800">{net}</span>
            </div>
            <fieldset class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <legend class="text-lg font-semibold text-gray-800 mb-2">"Payment Details"</legend>
                <FormField label="Salary Month">
                    <input type="month" class=INPUT_CLASS
                        prop:value=field(|f| &f.month)
                        on:input=move |ev| form.update(|f| f.month = event_target_value(&ev)) />
                </FormField>
                <FormField label="Payment Date">
                    <input type="date" class=INPUT_CLASS
                        prop:value=field(|f| &f.pay_date)
                        on:input=move |ev| form.update(|f| f.pay_date = event_target_value(&ev)) />
                </FormField>
            </fieldset>
            <InlineErrorMessage error=error />
            <div class="flex justify-end">
                <Button attr:type="submit" loading=pending>"Add Salary"</Button>
            </div>
        </form>
    }
}
