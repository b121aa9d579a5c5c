use crate::{
    api::ApiError,
    components::{
        common::{Button, FormField, INPUT_CLASS},
        error::InlineErrorMessage,
    },
    pages::departments::utils::DepartmentFormState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn DepartmentForm(
    form: RwSignal<DepartmentFormState>,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    #[prop(into)] submit_label: String,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="bg-white rounded-lg shadow p-6 space-y-4 max-w-2xl" on:submit=move |ev| on_submit.call(ev)>
            <FormField label="Department Name">
                <input
                    type="text"
                    required
                    placeholder="Enter department name"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </FormField>
            <FormField label="Description">
                <textarea
                    rows="4"
                    placeholder="Description"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </FormField>
            <InlineErrorMessage error=error />
            <Button attr:type="submit" class="w-full" loading=pending>
                {submit_label}
            </Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_prefilled_fields() {
        let html = render_to_string(move || {
            let form = create_rw_signal(DepartmentFormState {
                name: "Finance".into(),
                description: "Books".into(),
            });
            view! {
                <DepartmentForm
                    form=form
                    error=create_rw_signal(None)
                    pending=Signal::derive(|| false)
                    submit_label="Edit Department"
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Department Name"));
        assert!(html.contains("Edit Department"));
    }
}
