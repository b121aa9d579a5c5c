use crate::{
    api::Salary,
    components::{empty_state::EmptyState, pagination::Pagination},
    utils::{format::format_currency, listing::Listing, time::format_long_date},
};
use leptos::*;

#[component]
pub fn SalaryCard(salary: Salary) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-5 border-t-4 border-teal-500">
            <div class="flex justify-between items-start pb-3 mb-3 border-b border-gray-100">
                <div>
                    <p class="text-xs text-gray-500">"Employee ID"</p>
                    <h3 class="text-lg font-semibold text-gray-800">{salary.employee_code().to_string()}</h3>
                </div>
                <span class="text-sm font-semibold text-teal-700 bg-teal-50 px-3 py-1 rounded-full">
                    {salary.month.clone()}
                </span>
            </div>
            <dl class="space-y-2 text-sm">
                <div class="flex justify-between">
                    <dt class="text-gray-600">"Basic Salary"</dt>
                    <dd class="font-semibold text-gray-800">{format_currency(salary.basic)}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-600">"Allowances"</dt>
                    <dd class="font-semibold text-green-700">"+" {format_currency(salary.allowance)}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-600">"Deductions"</dt>
                    <dd class="font-semibold text-red-700">"-" {format_currency(salary.deduction)}</dd>
                </div>
                <div class="flex justify-between rounded-md bg-teal-600 px-3 py-2 text-white">
                    <dt class="font-semibold">"Net Salary"</dt>
                    <dd class="font-bold">{format_currency(salary.net)}</dd>
                </div>
            </dl>
            <p class="mt-3 text-center text-xs text-gray-500">
                "Paid on " {format_long_date(&salary.pay_date)}
            </p>
        </div>
    }
}

#[component]
pub fn SalaryHistoryGrid(listing: RwSignal<Listing<Salary>>) -> impl IntoView {
    let empty_title = move || {
        if listing.with(|l| l.query().is_empty()) {
            "No salary records available"
        } else {
            "No matching records found"
        }
    };

    view! {
        <Show
            when=move || listing.with(|l| l.filtered_count() > 0)
            fallback=move || view! { <EmptyState title=empty_title() /> }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || listing.with(|l| l.current_items())
                    key=|salary| salary.id.clone()
                    children=|salary: Salary| view! { <SalaryCard salary=salary /> }
                />
            </div>
            <Pagination listing=listing />
        </Show>
    }
}
