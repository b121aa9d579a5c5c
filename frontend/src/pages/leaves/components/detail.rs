use super::history::StatusBadge;
use crate::{
    api::{Leave, LeaveStatus},
    components::{
        cards::DetailRow,
        common::{Button, ButtonVariant},
    },
    utils::time::{format_display_date, format_long_date},
};
use leptos::*;

#[component]
pub fn LeaveDetailCard(
    leave: Leave,
    #[prop(into)] image_url: String,
    #[prop(into)] pending: Signal<bool>,
    on_approve: Callback<()>,
    on_reject: Callback<()>,
) -> impl IntoView {
    let designation = leave
        .employee
        .as_ref()
        .map(|e| e.designation.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No Designation".into());
    let applied = leave
        .applied_at
        .as_deref()
        .map(format_long_date)
        .unwrap_or_else(|| "N/A".into());
    let is_pending = leave.status == LeaveStatus::Pending;

    view! {
        <div class="bg-white rounded-lg shadow p-6 flex flex-col md:flex-row gap-8">
            <div class="flex flex-col items-center gap-2">
                <img
                    src=image_url
                    alt="Employee"
                    class="w-32 h-32 rounded-full object-cover border-4 border-teal-100"
                />
                <h3 class="text-xl font-semibold text-gray-800">{leave.employee_name().to_string()}</h3>
                <p class="text-sm text-gray-500">{designation}</p>
                <p class="text-sm text-gray-500">{leave.department_name().to_string()}</p>
                <StatusBadge status=leave.status />
            </div>
            <div class="flex-1">
                <h4 class="text-lg font-semibold text-gray-800 mb-2">"Leave Information"</h4>
                <dl class="divide-y divide-gray-100">
                    <DetailRow label="Employee ID" value=leave.employee_code().to_string() />
                    <DetailRow label="Leave Type" value=leave.leave_type.label().to_string() />
                    <DetailRow label="Start Date" value=format_display_date(&leave.start_date) />
                    <DetailRow label="End Date" value=format_display_date(&leave.end_date) />
                    <DetailRow label="Duration" value=format!("{} day(s)", leave.days()) />
                    <DetailRow label="Applied On" value=applied />
                    <DetailRow label="Reason" value=leave.reason.clone() />
                </dl>
                <Show when=move || is_pending>
                    <div class="flex gap-3 pt-6">
                        <Button
                            variant=ButtonVariant::Success
                            disabled=pending
                            on:click=move |_| on_approve.call(())
                        >
                            "Approve"
                        </Button>
                        <Button
                            variant=ButtonVariant::Danger
                            disabled=pending
                            on:click=move |_| on_reject.call(())
                        >
                            "Reject"
                        </Button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
