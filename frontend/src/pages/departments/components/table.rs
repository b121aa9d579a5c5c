use crate::{
    api::Department,
    components::{empty_state::EmptyState, pagination::Pagination},
    utils::listing::Listing,
};
use leptos::*;

#[component]
pub fn DepartmentTable(
    listing: RwSignal<Listing<Department>>,
    on_delete: Callback<Department>,
) -> impl IntoView {
    let rows = move || listing.with(Listing::numbered_rows);

    view! {
        <Show
            when=move || listing.with(|l| l.filtered_count() > 0)
            fallback=|| view! { <EmptyState title="No departments found" action=("/admin-dashboard/add-department", "Add New Department") /> }
        >
            <div class="overflow-x-auto bg-white rounded-lg shadow">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"S No"</th>
                            <th class="px-6 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Department Name"</th>
                            <th class="px-6 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Description"</th>
                            <th class="px-6 py-3 text-center text-xs font-semibold text-gray-600 uppercase">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=rows
                            key=|(serial, department)| (*serial, department.id.clone())
                            children=move |(serial, department): (usize, Department)| {
                                let edit_href = format!("/admin-dashboard/departments/{}", department.id);
                                let target = department.clone();
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-3 text-sm text-gray-700">{serial}</td>
                                        <td class="px-6 py-3 text-sm font-medium text-gray-800">{department.name}</td>
                                        <td class="px-6 py-3 text-sm text-gray-600">{department.description}</td>
                                        <td class="px-6 py-3 text-sm text-center space-x-2">
                                            <a href=edit_href class="px-3 py-1 rounded bg-teal-600 text-white hover:bg-teal-700">"Edit"</a>
                                            <button
                                                type="button"
                                                class="px-3 py-1 rounded bg-red-600 text-white hover:bg-red-700"
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
