use crate::{
    api::{Leave, LeaveStatus},
    components::{empty_state::EmptyState, pagination::Pagination},
    pages::leaves::utils::status_badge_class,
    utils::{listing::Listing, time::format_display_date},
};
use leptos::*;

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block rounded-full border px-3 py-1 text-xs font-semibold {}",
            status_badge_class(status)
        )>{status.label()}</span>
    }
}

/// An employee's own leave requests.
#[component]
pub fn LeaveHistoryTable(listing: RwSignal<Listing<Leave>>) -> impl IntoView {
    let rows = move || listing.with(Listing::numbered_rows);

    view! {
        <Show
            when=move || listing.with(|l| l.filtered_count() > 0)
            fallback=|| view! { <EmptyState title="No leave records found" /> }
        >
            <div class="overflow-x-auto bg-white rounded-lg shadow">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"S No"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Leave Type"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"From"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"To"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Description"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Applied Date"</th>
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=rows
                            key=|(serial, leave)| (*serial, leave.id.clone())
                            children=|(serial, leave): (usize, Leave)| {
                                let applied = leave
                                    .applied_at
                                    .as_deref()
                                    .map(format_display_date)
                                    .unwrap_or_else(|| "N/A".into());
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-4 py-3 text-sm text-gray-700">{serial}</td>
                                        <td class="px-4 py-3 text-sm font-medium text-gray-800">{leave.leave_type.label()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{format_display_date(&leave.start_date)}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{format_display_date(&leave.end_date)}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{leave.reason.clone()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-600">{applied}</td>
                                        <td class="px-4 py-3 text-sm"><StatusBadge status=leave.status /></td>
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
    use crate::api::LeaveType;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rows_show_type_dates_and_badge() {
        let html = render_to_string(|| {
            let listing = Listing::new(vec![Leave {
                id: "l1".into(),
                leave_type: LeaveType::Casual,
                start_date: "2024-03-01".into(),
                end_date: "2024-03-02".into(),
                reason: "Errand".into(),
                status: LeaveStatus::Approved,
                applied_at: Some("2024-02-28T09:00:00.000Z".into()),
                ..Leave::default()
            }]);
            view! { <LeaveHistoryTable listing=create_rw_signal(listing) /> }
        });
        assert!(html.contains("Casual Leave"));
        assert!(html.contains("Mar 1, 2024"));
        assert!(html.contains("Feb 28, 2024"));
        assert!(html.contains("bg-green-100"));
    }
}
