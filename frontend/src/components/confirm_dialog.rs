use leptos::ev::KeyboardEvent;
use leptos::*;

const BUTTON_CLASS: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";

/// Modal used before every delete. Escape or a click on the backdrop cancels;
/// the confirm button is locked while the delete is in flight.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    let cancel_unless_pending = move || {
        if !pending.get_untracked() {
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-black/40" on:click=move |_| cancel_unless_pending()></div>
                <div
                    class="relative w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel_unless_pending();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-gray-800">{title.clone()}</h2>
                    <p class="text-sm text-gray-600">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class=format!("{} bg-gray-100 text-gray-700 hover:bg-gray-200", BUTTON_CLASS)
                            disabled=move || pending.get()
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=format!("{} bg-red-600 text-white hover:bg-red-700", BUTTON_CLASS)
                            disabled=move || pending.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || if pending.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn open_dialog_shows_message_and_delete_button() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Delete employee"
                    message="Are you sure you want to delete this employee?"
                    pending=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("Are you sure you want to delete this employee?"));
        assert!(!html.contains("Deleting..."));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn pending_delete_relabels_confirm_button() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Delete department"
                    message="Delete IT?"
                    pending=Signal::derive(|| true)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Deleting..."));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="Delete"
                    message="hidden-message"
                    pending=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("hidden-message"));
    }
}
