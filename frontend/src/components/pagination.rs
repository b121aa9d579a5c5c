use crate::utils::listing::{page_links, Listing, PageLink, Searchable};
use leptos::*;

/// "Showing X to Y of Z" for the current window; zero-based bounds in.
pub fn showing_label(start: usize, end: usize, total: usize) -> String {
    if total == 0 {
        return "Showing 0 of 0".into();
    }
    format!("Showing {} to {} of {}", start + 1, end, total)
}

/// Page controls bound to a listing; hidden when everything fits on one page.
#[component]
pub fn Pagination<T>(listing: RwSignal<Listing<T>>) -> impl IntoView
where
    T: Searchable + Clone + 'static,
{
    let page_count = move || listing.with(|l| l.page_count());
    let current = move || listing.with(|l| l.page());
    let label = move || {
        listing.with(|l| {
            let (start, end) = l.page_bounds();
            showing_label(start, end, l.filtered_count())
        })
    };

    view! {
        <Show when=move || { page_count() > 1 } fallback=|| ()>
            <div class="flex flex-col sm:flex-row items-center justify-between gap-3 mt-4">
                <p class="text-sm text-gray-600">{label}</p>
                <nav class="flex items-center gap-1" aria-label="Pagination">
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-gray-300 text-sm disabled:opacity-50"
                        disabled=move || listing.with(|l| l.is_first_page())
                        on:click=move |_| listing.update(|l| l.prev())
                    >
                        "Previous"
                    </button>
                    {move || {
                        page_links(current(), page_count())
                            .into_iter()
                            .map(|link| match link {
                                PageLink::Page(page) => {
                                    let class = if page == current() {
                                        "px-3 py-1 rounded-md text-sm bg-teal-600 text-white"
                                    } else {
                                        "px-3 py-1 rounded-md text-sm border border-gray-300 text-gray-700"
                                    };
                                    view! {
                                        <button
                                            type="button"
                                            class=class
                                            on:click=move |_| listing.update(|l| l.go_to(page))
                                        >
                                            {page}
                                        </button>
                                    }
                                    .into_view()
                                }
                                PageLink::Ellipsis => {
                                    view! { <span class="px-2 text-gray-500">"..."</span> }.into_view()
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-gray-300 text-sm disabled:opacity-50"
                        disabled=move || listing.with(|l| l.is_last_page())
                        on:click=move |_| listing.update(|l| l.next())
                    >
                        "Next"
                    </button>
                </nav>
            </div>
        </Show>
    }
}
