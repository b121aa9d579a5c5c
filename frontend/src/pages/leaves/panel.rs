use super::{
    components::{
        admin_table::{AdminLeaveTable, StatusFilterBar},
        detail::LeaveDetailCard,
        form::{AddLeaveForm, LeaveBalanceCards},
        history::LeaveHistoryTable,
    },
    utils::{result_count_label, ADD_LEAVE_PATH, EMPLOYEE_HOME_PATH, LEAVES_PATH},
    view_model::{
        use_add_leave_view_model, use_admin_leaves_view_model, use_leave_detail_view_model,
        use_leave_history_view_model,
    },
};
use crate::{
    api::Role,
    components::{
        common::SearchInput,
        layout::{ErrorMessage, LoadingSpinner, PageHeader},
    },
    pages::route_param,
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AdminLeavesPage() -> impl IntoView {
    let vm = use_admin_leaves_view_model();
    let list = vm.list;
    let query = Signal::derive(move || list.listing.with(|l| l.query().to_string()));

    view! {
        <section>
            <PageHeader title="Manage Leaves" subtitle="Review and act on leave requests" />
            <div class="flex flex-col md:flex-row gap-4 justify-between items-center mb-4">
                <SearchInput
                    placeholder="Search by employee ID, name, leave type, department, or status..."
                    value=query
                    on_input=Callback::new(move |q: String| list.search(q))
                />
                <StatusFilterBar
                    selected=Signal::derive(move || vm.status())
                    on_select=Callback::new(move |status| vm.set_status(status))
                />
            </div>
            <Show when=move || !query.get().is_empty()>
                <p class="mb-2 text-sm text-gray-600">
                    {move || result_count_label(list.listing.with(|l| l.filtered_count()))}
                </p>
            </Show>
            {move || {
                if list.is_loading() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if let Some(err) = list.load_error() {
                    view! { <ErrorMessage message=err.error /> }.into_view()
                } else {
                    view! { <AdminLeaveTable listing=list.listing /> }.into_view()
                }
            }}
        </section>
    }
}

#[component]
pub fn LeaveDetailPanel(#[prop(into)] id: String) -> impl IntoView {
    let vm = use_leave_detail_view_model(id);
    let leave = vm.leave;
    let pending = Signal::derive({
        let action = vm.status_action;
        move || action.pending().get()
    });

    view! {
        <section>
            <PageHeader title="Leave Details" back_href=LEAVES_PATH />
            {move || match leave.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(leave)) => {
                    let image = leave
                        .employee
                        .as_ref()
                        .and_then(|e| e.user.as_ref())
                        .and_then(|u| u.profile_image.clone());
                    let image_url = vm.image_url(image.as_deref());
                    let approve = vm.clone();
                    let reject = vm.clone();
                    view! {
                        <LeaveDetailCard
                            leave=leave
                            image_url=image_url
                            pending=pending
                            on_approve=Callback::new(move |_| approve.approve())
                            on_reject=Callback::new(move |_| reject.reject())
                        />
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

/// Leave history for one employee; the add link is only offered to employees.
#[component]
pub fn LeaveHistoryPanel(#[prop(into)] id: String) -> impl IntoView {
    let vm = use_leave_history_view_model(id);
    let list = vm.list;
    let (auth, _) = use_auth();
    let is_employee = move || auth.with(|state| state.role() == Some(Role::Employee));
    let query = Signal::derive(move || list.listing.with(|l| l.query().to_string()));

    view! {
        <section>
            <PageHeader title="Manage Leaves" subtitle="Track your leave requests" />
            <div class="flex flex-col md:flex-row gap-4 justify-between items-center mb-4">
                <SearchInput
                    placeholder="Search by type, reason or status..."
                    value=query
                    on_input=Callback::new(move |q: String| list.search(q))
                />
                <Show when=is_employee>
                    <a
                        href=ADD_LEAVE_PATH
                        class="px-4 py-2 rounded-md bg-teal-600 text-white text-sm font-semibold hover:bg-teal-700"
                    >
                        "Add New Leave"
                    </a>
                </Show>
            </div>
            {move || {
                if list.is_loading() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if let Some(err) = list.load_error() {
                    view! { <ErrorMessage message=err.error /> }.into_view()
                } else {
                    view! { <LeaveHistoryTable listing=list.listing /> }.into_view()
                }
            }}
        </section>
    }
}

#[component]
pub fn AddLeavePanel() -> impl IntoView {
    let vm = use_add_leave_view_model();
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <section>
            <PageHeader
                title="Request Leave"
                subtitle="Submit a new leave application"
                back_href=EMPLOYEE_HOME_PATH
            />
            <LeaveBalanceCards balance=vm.balance />
            <AddLeaveForm
                form=vm.form
                error=vm.error
                pending=vm.save_action.pending().into()
                on_submit=on_submit
            />
        </section>
    }
}

#[component]
pub fn LeaveDetailPage() -> impl IntoView {
    let id = route_param("id");
    view! { <LeaveDetailPanel id=id /> }
}

#[component]
pub fn LeaveHistoryPage() -> impl IntoView {
    let id = route_param("id");
    view! { <LeaveHistoryPanel id=id /> }
}

#[component]
pub fn AddLeavePage() -> impl IntoView {
    view! { <AddLeavePanel /> }
}
