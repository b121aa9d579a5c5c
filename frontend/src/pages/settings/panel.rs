use super::{utils::PasswordForm, view_model::use_settings_view_model};
use crate::components::{
    common::{Button, FormField, INPUT_CLASS},
    error::InlineErrorMessage,
    layout::PageHeader,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let vm = use_settings_view_model();
    let form = vm.form;
    let pending = vm.change_password_action.pending();
    let field = move |read: fn(&PasswordForm) -> &String| move || form.with(|f| read(f).clone());
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <section class="max-w-lg mx-auto">
            <PageHeader title="Change Password" subtitle="Update your account password" />
            <form class="bg-white rounded-lg shadow p-6 space-y-4" on:submit=on_submit>
                <InlineErrorMessage error=vm.error />
                <FormField label="Old Password">
                    <input type="password" required placeholder="Enter old password" class=INPUT_CLASS
                        prop:value=field(|f| &f.old_password)
                        on:input=move |ev| form.update(|f| f.old_password = event_target_value(&ev)) />
                </FormField>
                <FormField label="New Password">
                    <input type="password" required placeholder="Enter new password" class=INPUT_CLASS
                        prop:value=field(|f| &f.new_password)
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev)) />
                </FormField>
                <FormField label="Confirm Password">
                    <input type="password" required placeholder="Confirm new password" class=INPUT_CLASS
                        prop:value=field(|f| &f.confirmed_password)
                        on:input=move |ev| form.update(|f| f.confirmed_password = event_target_value(&ev)) />
                </FormField>
                <Button attr:type="submit" class="w-full" loading=Signal::derive(move || pending.get())>
                    {move || if pending.get() { "Changing..." } else { "Change Password" }}
                </Button>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_user, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn renders_three_password_fields() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <SettingsPage /> }
        });
        assert!(html.contains("Old Password"));
        assert!(html.contains("Confirm Password"));
        assert_eq!(html.matches("type=\"password\"").count(), 3);
    }
}
