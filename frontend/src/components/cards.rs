use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardAccent {
    #[default]
    Teal,
    Blue,
    Yellow,
    Green,
    Red,
}

impl CardAccent {
    fn badge_class(&self) -> &'static str {
        match self {
            CardAccent::Teal => "bg-teal-600",
            CardAccent::Blue => "bg-blue-600",
            CardAccent::Yellow => "bg-yellow-500",
            CardAccent::Green => "bg-green-600",
            CardAccent::Red => "bg-red-600",
        }
    }
}

#[component]
pub fn SummaryCard(
    #[prop(into)] title: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] accent: CardAccent,
) -> impl IntoView {
    view! {
        <div class="flex items-stretch bg-white rounded-lg shadow overflow-hidden">
            <div class=format!("w-2 {}", accent.badge_class())></div>
            <div class="px-4 py-5">
                <p class="text-sm font-medium text-gray-500">{title}</p>
                <p class="mt-1 text-2xl font-bold text-gray-800">{move || value.get()}</p>
            </div>
        </div>
    }
}

/// Label/value pair used by the detail pages.
#[component]
pub fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="flex gap-3 py-2">
            <dt class="w-40 text-sm font-semibold text-gray-600">{label}</dt>
            <dd class="text-sm text-gray-800">{move || value.get()}</dd>
        </div>
    }
}
