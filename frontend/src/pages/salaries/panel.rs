use super::{
    components::{form::AddSalaryForm, history::SalaryHistoryGrid},
    utils::record_count_label,
    view_model::{use_add_salary_view_model, use_salary_history_view_model},
};
use crate::{
    components::{
        common::SearchInput,
        layout::{ErrorMessage, LoadingSpinner, PageHeader},
    },
    pages::route_param,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AddSalaryPanel() -> impl IntoView {
    let vm = use_add_salary_view_model();
    let departments = Signal::derive(move || vm.departments.get().and_then(Result::ok).unwrap_or_default());
    let employees = Signal::derive(move || vm.employees.get().and_then(Result::ok).unwrap_or_default());
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <section>
            <PageHeader
                title="Add Salary Record"
                subtitle="Process and record employee salary payments"
                back_href="/admin-dashboard"
            />
            <AddSalaryForm
                form=vm.form
                departments=departments
                employees=employees
                error=vm.error
                pending=vm.save_action.pending().into()
                on_department=Callback::new(move |id: String| vm.select_department(id))
                on_submit=on_submit
            />
        </section>
    }
}

#[component]
pub fn SalaryHistoryPanel(#[prop(into)] id: String) -> impl IntoView {
    let vm = use_salary_history_view_model(id);
    let list = vm.list;
    let query = Signal::derive(move || list.listing.with(|l| l.query().to_string()));
    let subtitle = Signal::derive(move || record_count_label(list.listing.with(|l| l.total_count())));

    view! {
        <section>
            <PageHeader title="Salary History" />
            <p class="-mt-4 mb-4 text-sm text-gray-600">{subtitle}</p>
            <div class="mb-6">
                <SearchInput
                    placeholder="Search by Employee ID..."
                    value=query
                    on_input=Callback::new(move |q: String| list.search(q))
                />
            </div>
            {move || {
                if list.is_loading() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if let Some(err) = list.load_error() {
                    view! { <ErrorMessage message=err.error /> }.into_view()
                } else {
                    view! { <SalaryHistoryGrid listing=list.listing /> }.into_view()
                }
            }}
        </section>
    }
}

#[component]
pub fn AddSalaryPage() -> impl IntoView {
    view! { <AddSalaryPanel /> }
}

#[component]
pub fn SalaryHistoryPage() -> impl IntoView {
    let id = route_param("id");
    view! { <SalaryHistoryPanel id=id /> }
}
