use crate::{
    state::auth::use_auth,
    utils::time::{current_greeting, today_display},
};
use leptos::*;

pub fn display_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => "Employee".into(),
    }
}

#[component]
pub fn GreetingBanner(
    #[prop(into)] greeting: String,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] date: String,
) -> impl IntoView {
    view! {
        <div class="rounded-xl p-5 flex items-center bg-teal-600 text-white shadow-lg">
            <div class="h-16 w-16 rounded-full bg-white text-teal-700 flex items-center justify-center text-2xl font-bold">
                {move || name.get().chars().next().unwrap_or('E').to_uppercase().to_string()}
            </div>
            <div class="ml-5 flex-1">
                <p class="text-sm font-medium opacity-90">{format!("{},", greeting)}</p>
                <p class="text-2xl font-bold">{move || name.get()}</p>
            </div>
            <span class="hidden sm:block text-xs opacity-80">{date}</span>
        </div>
    }
}

#[component]
pub fn EmployeeSummaryPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let name = Signal::derive(move || {
        auth.with(|state| display_name(state.user.as_ref().map(|user| user.name.as_str())))
    });

    view! {
        <section class="p-2">
            <GreetingBanner greeting=current_greeting() name=name date=today_display() />
        </section>
    }
}
