use leptos::*;

/// Placeholder for a list with nothing to show. `action` is an optional
/// `(href, label)` link, e.g. to the add form.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2 py-12 px-4 rounded-lg border-2 border-dashed border-gray-300 bg-gray-50 text-center">
            <p class="text-sm font-semibold text-gray-800">{title}</p>
            {description.map(|text| view! { <p class="text-sm text-gray-500">{text}</p> })}
            {action.map(|(href, label)| view! {
                <a href=href class="mt-2 text-sm font-medium text-teal-600 hover:text-teal-800">{label}</a>
            })}
        </div>
    }
}
