use crate::{
    components::layout::LoadingSpinner,
    state::auth::{home_path_for, use_auth},
    utils::navigation,
};
use leptos::*;

/// `/` has no content of its own; it forwards to the session's home once the
/// session is known.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();

    create_effect(move |_| {
        let state = auth.get();
        if !state.loading {
            navigation::redirect(home_path_for(state.role()));
        }
    });

    view! { <LoadingSpinner /> }
}
