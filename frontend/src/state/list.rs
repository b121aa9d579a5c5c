use crate::{
    api::ApiError,
    state::toast::ToastState,
    utils::listing::{Listing, Searchable},
};
use leptos::*;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;

/// A fetched collection mirrored into a [`Listing`]. Bumping `reload`
/// re-fetches; the listing keeps its query and filter across loads.
pub struct ListState<T: Searchable + Clone + 'static> {
    pub listing: RwSignal<Listing<T>>,
    pub reload: RwSignal<u32>,
    pub resource: Resource<(String, u32), Result<Vec<T>, ApiError>>,
}

impl<T: Searchable + Clone + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Searchable + Clone + 'static> Copy for ListState<T> {}

impl<T: Searchable + Clone + 'static> ListState<T> {
    pub fn refetch(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn search(&self, query: String) {
        self.listing.update(|listing| listing.search(query));
    }

    pub fn set_filter(&self, filter: T::Filter) {
        self.listing.update(|listing| listing.set_filter(filter));
    }

    /// True until the first response arrives.
    pub fn is_loading(&self) -> bool {
        self.resource.with(|result| result.is_none())
    }

    pub fn load_error(&self) -> Option<ApiError> {
        self.resource
            .with(|result| result.as_ref().and_then(|r| r.as_ref().err().cloned()))
    }
}

/// Outcome of a row delete: success toasts and re-fetches, failure toasts
/// and leaves the current rows alone.
pub fn settle_delete<T: Searchable + Clone + 'static>(
    list: ListState<T>,
    toast: ToastState,
    result: Result<(), ApiError>,
    success: &str,
) {
    match result {
        Ok(()) => {
            toast.success(success);
            list.refetch();
        }
        Err(err) => {
            log::error!("Delete failed: {}", err);
            toast.error(err.error);
        }
    }
}

/// `key` scopes the fetch (e.g. an employee id); pass `String::new` for global lists.
pub fn use_list_state<T, K, F, Fut>(key: K, fetch: F) -> ListState<T>
where
    T: Searchable + Clone + Serialize + DeserializeOwned + 'static,
    K: Fn() -> String + 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let listing = create_rw_signal(Listing::<T>::default());
    let reload = create_rw_signal(0u32);
    let resource = create_resource(move || (key(), reload.get()), move |(key, _)| fetch(key));

    create_effect(move |_| {
        if let Some(result) = resource.get() {
            match result {
                Ok(items) => listing.update(|listing| listing.set_items(items)),
                Err(err) => log::error!("Failed to load list: {}", err),
            }
        }
    });

    ListState {
        listing,
        reload,
        resource,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Department;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn search_and_refetch_touch_their_signals() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let state = use_list_state(String::new, |_| async { Ok(Vec::<Department>::new()) });
            state.listing.update(|listing| {
                listing.set_items(vec![
                    Department {
                        id: "d1".into(),
                        name: "IT".into(),
                        description: String::new(),
                    },
                    Department {
                        id: "d2".into(),
                        name: "HR".into(),
                        description: String::new(),
                    },
                ])
            });
            state.search("hr".into());
            assert_eq!(state.listing.with(|l| l.filtered_count()), 1);

            state.refetch();
            assert_eq!(state.reload.get(), 1);
            assert!(state.load_error().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    fn empty_departments() -> ListState<Department> {
        use_list_state(String::new, |_| async { Ok(Vec::<Department>::new()) })
    }

    #[test]
    fn successful_delete_refetches_and_toasts() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let state = empty_departments();
            let toast = ToastState::new();
            settle_delete(state, toast, Ok(()), "Department deleted successfully");
            assert_eq!(state.reload.get(), 1);
            let toasts = toast.toasts.get();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[0].message, "Department deleted successfully");
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn failed_delete_keeps_rows_and_reports() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let state = empty_departments();
            let toast = ToastState::new();
            settle_delete(
                state,
                toast,
                Err(ApiError::validation("Department not found")),
                "Department deleted successfully",
            );
            assert_eq!(state.reload.get(), 0);
            let toasts = toast.toasts.get();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].kind, ToastKind::Error);
            assert_eq!(toasts[0].message, "Department not found");
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
