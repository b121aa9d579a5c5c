use crate::{
    api::Employee,
    components::cards::DetailRow,
    pages::employees::utils::display_date,
    utils::format::{capitalize, format_currency},
};
use leptos::*;

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => capitalize(value),
        _ => "N/A".into(),
    }
}

#[component]
pub fn EmployeeProfileCard(
    employee: Employee,
    #[prop(into)] image_url: String,
    #[prop(optional)] can_edit: bool,
) -> impl IntoView {
    let email = employee
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_else(|| "N/A".into());
    let edit_href = format!("/admin-dashboard/employees/edit/{}", employee.id);

    view! {
        <div class="bg-white rounded-lg shadow p-6 flex flex-col md:flex-row gap-8">
            <div class="flex flex-col items-center gap-3">
                <img
                    src=image_url
                    alt=employee.name().to_string()
                    class="w-40 h-40 rounded-full object-cover border-4 border-teal-100"
                />
                <h3 class="text-xl font-semibold text-gray-800">{employee.name().to_string()}</h3>
                <span class="text-sm text-gray-500">{employee.designation.clone()}</span>
            </div>
            <dl class="flex-1 divide-y divide-gray-100">
                <DetailRow label="Employee ID" value=employee.employee_code.clone() />
                <DetailRow label="Email" value=email />
                <DetailRow label="Date of Birth" value=display_date(employee.date_of_birth.as_deref()) />
                <DetailRow label="Gender" value=or_na(employee.gender.as_deref()) />
                <DetailRow label="Marital Status" value=or_na(employee.marital_status.as_deref()) />
                <DetailRow label="Joining Date" value=display_date(employee.joining_date.as_deref()) />
                <DetailRow label="Department" value=employee.department_name().to_string() />
                <DetailRow label="Salary" value=format_currency(employee.salary) />
                <Show when=move || can_edit>
                    <div class="pt-4">
                        <a
                            href=edit_href.clone()
                            class="px-4 py-2 rounded-md bg-teal-600 text-white text-sm font-semibold hover:bg-teal-700"
                        >
                            "Edit Profile"
                        </a>
                    </div>
                </Show>
            </dl>
        </div>
    }
}
