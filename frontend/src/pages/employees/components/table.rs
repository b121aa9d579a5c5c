use crate::{
    api::Employee,
    components::{empty_state::EmptyState, pagination::Pagination},
    pages::employees::utils::display_date,
    utils::listing::Listing,
};
use leptos::*;

#[component]
pub fn EmployeeTable(
    listing: RwSignal<Listing<Employee>>,
    image_url: Callback<Option<String>, String>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let rows = move || listing.with(Listing::numbered_rows);

    view! {
        <Show
            when=move || listing.with(|l| l.filtered_count() > 0)
            fallback=|| view! { <EmptyState title="No employees found" action=("/admin-dashboard/add-employee", "Add New Employee") /> }
        >
            <div class="overflow-x-auto bg-white rounded-lg shadow">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"S No"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Employee ID"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Profile"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Name"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Department"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Date of Birth"</th>
                            <th class="px-4 py-3 text-center text-xs font-semibold text-gray-600 uppercase">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=rows
                            key=|(serial, employee)| (*serial, employee.id.clone())
                            children=move |(serial, employee): (usize, Employee)| {
                                let id = employee.id.clone();
                                let src = image_url.call(employee.profile_image().map(str::to_string));
                                let target = employee.clone();
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-4 py-3 text-sm text-gray-700">{serial}</td>
                                        <td class="px-4 py-3 text-sm font-mono text-teal-700">{employee.employee_code.clone()}</td>
                                        <td class="px-4 py-3">
                                            <img src=src alt="profile" class="h-10 w-10 rounded-full object-cover" />
                                        </td>
                                        <td class="px-4 py-3 text-sm font-medium text-gray-800">{employee.name().to_string()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{employee.department_name().to_string()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{display_date(employee.date_of_birth.as_deref())}</td>
                                        <td class="px-4 py-3 text-sm text-center whitespace-nowrap space-x-1">
                                            <a href=format!("/admin-dashboard/employees/{}", id) class="px-2 py-1 rounded bg-teal-600 text-white">"View"</a>
                                            <a href=format!("/admin-dashboard/employees/edit/{}", id) class="px-2 py-1 rounded bg-blue-600 text-white">"Edit"</a>
                                            <a href=format!("/admin-dashboard/employees/salary/{}", id) class="px-2 py-1 rounded bg-yellow-500 text-white">"Salary"</a>
                                            <a href=format!("/admin-dashboard/employees/leaves/{}", id) class="px-2 py-1 rounded bg-purple-600 text-white">"Leaves"</a>
                                            <button
                                                type="button"
                                                class="px-2 py-1 rounded bg-red-600 text-white"
                                                on:click=move |_| on_delete.call(target.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
            <Pagination listing=listing />
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Department, EmployeeUser};
    use crate::test_support::ssr::render_to_string;

    fn employee() -> Employee {
        Employee {
            id: "e1".into(),
            employee_code: "EMP001".into(),
            user: Some(EmployeeUser {
                id: "u1".into(),
                name: "Ali Raza".into(),
                profile_image: Some("ali.png".into()),
                ..EmployeeUser::default()
            }),
            department: Some(Department {
                id: "d1".into(),
                name: "IT".into(),
                description: String::new(),
            }),
            date_of_birth: Some("1990-05-04".into()),
            ..Employee::default()
        }
    }

    #[test]
    fn renders_row_with_actions_and_image() {
        let html = render_to_string(move || {
            let listing = create_rw_signal(Listing::new(vec![employee()]));
            view! {
                <EmployeeTable
                    listing=listing
                    image_url=Callback::new(|name: Option<String>| format!("/uploads/{}", name.unwrap_or_default()))
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("EMP001"));
        assert!(html.contains("Ali Raza"));
        assert!(html.contains("May 4, 1990"));
        assert!(html.contains("/uploads/ali.png"));
        assert!(html.contains("/admin-dashboard/employees/salary/e1"));
        assert!(html.contains("/admin-dashboard/employees/leaves/e1"));
    }
}
