use crate::state::toast::{use_toast, Toast, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-600 text-white",
        ToastKind::Error => "bg-red-600 text-white",
    }
}

/// Stack of active toasts, pinned to the top right corner.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "flex items-center gap-3 rounded-md px-4 py-3 shadow-lg text-sm {}",
                            toast_class(toast.kind),
                        )>
                            <span>{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-80 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::provide_toasts;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_pushed_toasts() {
        let html = render_to_string(move || {
            let toasts = provide_toasts();
            toasts.success("Department added");
            toasts.error("Server down");
            view! { <ToastHost /> }
        });
        assert!(html.contains("Department added"));
        assert!(html.contains("Server down"));
        assert!(html.contains("bg-red-600"));
    }
}
