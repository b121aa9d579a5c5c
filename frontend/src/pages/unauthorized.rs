use crate::state::auth::{home_path_for, use_auth};
use leptos::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let home = move || home_path_for(auth.get().role());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md text-center space-y-4">
                <h1 class="text-3xl font-bold text-gray-800">"Unauthorized"</h1>
                <p class="text-gray-600">"You do not have permission to view this page."</p>
                <a
                    href=home
                    class="inline-block px-4 py-2 rounded-md bg-teal-600 text-white text-sm font-semibold hover:bg-teal-700"
                >
                    "Go back home"
                </a>
            </div>
        </div>
    }
}
