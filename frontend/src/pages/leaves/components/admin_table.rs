use super::history::StatusBadge;
use crate::{
    components::{empty_state::EmptyState, pagination::Pagination},
    pages::leaves::utils::{AdminLeave, StatusFilter},
    utils::listing::Listing,
};
use leptos::*;

#[component]
pub fn StatusFilterBar(
    #[prop(into)] selected: Signal<StatusFilter>,
    on_select: Callback<StatusFilter>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {StatusFilter::ALL
                .into_iter()
                .map(|status| {
                    let class = move || {
                        if selected.get() == status {
                            "px-4 py-2 rounded-md text-sm font-medium bg-teal-600 text-white"
                        } else {
                            "px-4 py-2 rounded-md text-sm font-medium bg-gray-200 text-gray-700 hover:bg-gray-300"
                        }
                    };
                    view! {
                        <button type="button" class=class on:click=move |_| on_select.call(status)>
                            {status.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AdminLeaveTable(listing: RwSignal<Listing<AdminLeave>>) -> impl IntoView {
    let rows = move || {
        listing.with(|l| {
            l.numbered_rows()
                .into_iter()
                .map(|(serial, AdminLeave(leave))| (serial, leave))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show
            when=move || listing.with(|l| l.filtered_count() > 0)
            fallback=|| view! { <EmptyState title="No leave requests found" /> }
        >
            <div class="overflow-x-auto bg-white rounded-lg shadow">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"S No"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Emp ID"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Name"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Leave Type"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Department"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Days"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Status"</th>
                            <th class="px-4 py-3 text-center text-xs font-semibold text-gray-600 uppercase">"Action"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=rows
                            key=|(serial, leave)| (*serial, leave.id.clone())
                            children=|(serial, leave): (usize, crate::api::Leave)| {
                                let href = format!("/admin-dashboard/leaves/{}", leave.id);
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-4 py-3 text-sm text-gray-700">{serial}</td>
                                        <td class="px-4 py-3 text-sm text-gray-700">{leave.employee_code().to_string()}</td>
                                        <td class="px-4 py-3 text-sm font-medium text-gray-800">{leave.employee_name().to_string()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{leave.leave_type.label()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{leave.department_name().to_string()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{leave.days()}</td>
                                        <td class="px-4 py-3 text-sm"><StatusBadge status=leave.status /></td>
                                        <td class="px-4 py-3 text-sm text-center">
                                            <a href=href class="px-3 py-1 rounded bg-teal-600 text-white hover:bg-teal-700">"View"</a>
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
