use super::{
    components::{form::DepartmentForm, table::DepartmentTable},
    view_model::{
        use_add_department_view_model, use_department_list_view_model,
        use_edit_department_view_model, DepartmentFormViewModel, DEPARTMENTS_PATH,
    },
};
use crate::{
    api::Department,
    components::{
        common::SearchInput,
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, LoadingSpinner, PageHeader},
    },
    pages::route_param,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn DepartmentListPage() -> impl IntoView {
    let vm = use_department_list_view_model();
    let list = vm.list;
    let query = Signal::derive(move || list.listing.with(|l| l.query().to_string()));
    let total = move || list.listing.with(|l| l.filtered_count());

    let dialog_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let dialog_message = Signal::derive(move || {
        let name = vm
            .pending_delete
            .with(|d| d.as_ref().map(|d| d.name.clone()).unwrap_or_default());
        format!("Are you sure you want to delete the {} department?", name)
    });

    view! {
        <section>
            <PageHeader title="Manage Departments" subtitle="Organize and manage all departments" />
            <div class="flex flex-col md:flex-row gap-4 justify-between items-center mb-4">
                <SearchInput
                    placeholder="Search by name or description..."
                    value=query
                    on_input=Callback::new(move |q: String| list.search(q))
                />
                <div class="flex items-center gap-4">
                    <span class="text-sm text-gray-600">"Total: " {total}</span>
                    <a
                        href="/admin-dashboard/add-department"
                        class="px-4 py-2 rounded-md bg-teal-600 text-white text-sm font-semibold hover:bg-teal-700"
                    >
                        "Add New Department"
                    </a>
                </div>
            </div>
            {move || {
                if list.is_loading() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if let Some(err) = list.load_error() {
                    view! { <ErrorMessage message=err.error /> }.into_view()
                } else {
                    view! {
                        <DepartmentTable
                            listing=list.listing
                            on_delete=Callback::new(move |department: Department| {
                                vm.pending_delete.set(Some(department))
                            })
                        />
                    }
                    .into_view()
                }
            }}
            <ConfirmDialog
                is_open=dialog_open
                title="Delete department"
                message=dialog_message
                pending=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </section>
    }
}

#[component]
fn DepartmentFormPanel(vm: DepartmentFormViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let title = if vm.is_editing() { "Edit Department" } else { "Add New Department" };
    let loading = move || {
        vm.existing
            .map(|resource| resource.with(|result| result.is_none()))
            .unwrap_or(false)
    };
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <section>
            <PageHeader title=title back_href=DEPARTMENTS_PATH />
            <Show when=move || !loading() fallback=|| view! { <LoadingSpinner /> }>
                <DepartmentForm
                    form=vm.form
                    error=vm.error
                    pending=pending.into()
                    submit_label=title
                    on_submit=on_submit
                />
            </Show>
        </section>
    }
}

#[component]
pub fn AddDepartmentPanel() -> impl IntoView {
    let vm = use_add_department_view_model();
    view! { <DepartmentFormPanel vm=vm /> }
}

#[component]
pub fn EditDepartmentPanel(#[prop(into)] id: String) -> impl IntoView {
    let vm = use_edit_department_view_model(id);
    view! { <DepartmentFormPanel vm=vm /> }
}

#[component]
pub fn AddDepartmentPage() -> impl IntoView {
    view! { <AddDepartmentPanel /> }
}

#[component]
pub fn EditDepartmentPage() -> impl IntoView {
    let id = route_param("id");
    view! { <EditDepartmentPanel id=id /> }
}
