use super::{
    utils::{leave_cards, overview_cards, SummaryCardData},
    view_model::AdminSummaryViewModel,
};
use crate::components::{
    cards::SummaryCard,
    layout::{ErrorMessage, LoadingSpinner, PageHeader},
};
use leptos::*;

fn card_grid(cards: Vec<SummaryCardData>, columns: &'static str) -> impl IntoView {
    view! {
        <div class=format!("grid grid-cols-1 gap-6 {}", columns)>
            {cards
                .into_iter()
                .map(|card| view! { <SummaryCard title=card.title value=card.value accent=card.accent /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AdminSummaryPage() -> impl IntoView {
    let vm = AdminSummaryViewModel::new();

    view! {
        <section>
            <PageHeader title="Dashboard Overview" />
            {move || match vm.summary_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(summary)) => view! {
                    <div class="space-y-10">
                        {card_grid(overview_cards(&summary), "md:grid-cols-3")}
                        <div>
                            <h4 class="text-center text-2xl font-bold text-gray-800 mb-6">"Leave Details"</h4>
                            {card_grid(leave_cards(&summary), "md:grid-cols-2")}
                        </div>
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}
