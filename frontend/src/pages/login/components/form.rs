use crate::{
    api::ApiError,
    components::{common::INPUT_CLASS, error::InlineErrorMessage},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 bg-gradient-to-b from-teal-600 from-50% to-gray-100 to-50% px-4">
            <h1 class="text-3xl font-bold text-white">"Employee Management System"</h1>
            <div class="w-full max-w-sm bg-white rounded-lg shadow-lg p-6">
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Login"</h2>
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <label class="block">
                        <span class="block text-sm font-medium text-gray-700">"Email"</span>
                        <input
                            id="email"
                            type="email"
                            required
                            autocomplete="username"
                            placeholder="Enter Email"
                            class=INPUT_CLASS
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="block text-sm font-medium text-gray-700">"Password"</span>
                        <input
                            id="password"
                            type="password"
                            required
                            autocomplete="current-password"
                            placeholder="******"
                            class=INPUT_CLASS
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full py-2 px-4 rounded-md text-sm font-semibold text-white bg-teal-600 hover:bg-teal-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
