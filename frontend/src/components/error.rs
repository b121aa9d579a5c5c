use crate::api::ApiError;
use leptos::*;

fn detail_lines(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Error banner for forms; lists per-field messages when the server sends them.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let lines = error.get().map(|e| detail_lines(&e)).unwrap_or_default();
                    (!lines.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}
