use crate::{
    api::{ApiError, LeaveBalance, LeaveType},
    components::{
        common::{Button, FormField, INPUT_CLASS},
        error::InlineErrorMessage,
    },
    pages::leaves::utils::LeaveFormState,
};
use leptos::{ev::SubmitEvent, *};

fn balance_colours(kind: LeaveType) -> &'static str {
    match kind {
        LeaveType::Sick => "bg-green-50 text-green-600",
        LeaveType::Casual => "bg-purple-50 text-purple-600",
        LeaveType::Annual => "bg-blue-50 text-blue-600",
        _ => "bg-orange-50 text-orange-600",
    }
}

#[component]
pub fn LeaveBalanceCards(#[prop(into)] balance: Signal<LeaveBalance>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
            {LeaveType::ALL
                .into_iter()
                .map(|kind| {
                    let days = move || {
                        balance
                            .get()
                            .entries()
                            .into_iter()
                            .find(|(entry, _)| *entry == kind)
                            .map(|(_, days)| days)
                            .unwrap_or_default()
                    };
                    view! {
                        <div class=format!("rounded-lg p-4 text-center {}", balance_colours(kind))>
                            <p class="text-2xl font-bold">{days}</p>
                            <p class="text-sm font-medium">{kind.label()}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AddLeaveForm(
    form: RwSignal<LeaveFormState>,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field = move |read: fn(&LeaveFormState) -> &String| move || form.with(|f| read(f).clone());
    let days = move || form.with(LeaveFormState::requested_days);

    view! {
        <form class="bg-white rounded-lg shadow p-6 space-y-6" on:submit=move |ev| on_submit.call(ev)>
            <FormField label="Leave Type">
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| {
                        form.update(|f| f.leave_type = LeaveType::from_value(&event_target_value(&ev)))
                    }
                >
                    {LeaveType::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option
                                    value=kind.as_str()
                                    selected=move || form.with(|f| f.leave_type == kind)
                                >
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </FormField>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <FormField label="From Date">
                    <input type="date" required class=INPUT_CLASS
                        prop:value=field(|f| &f.start_date)
                        on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev)) />
                </FormField>
                <FormField label="To Date">
                    <input type="date" required class=INPUT_CLASS
                        prop:value=field(|f| &f.end_date)
                        on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev)) />
                </FormField>
            </div>
            {move || {
                days().map(|days| {
                    view! {
                        <p class="rounded-md bg-teal-50 px-4 py-2 text-sm text-teal-800">
                            "Total Days: " <strong>{days}</strong>
                        </p>
                    }
                })
            }}
            <FormField label="Reason">
                <textarea rows="4" required placeholder="Describe the reason for your leave" class=INPUT_CLASS
                    prop:value=field(|f| &f.reason)
                    on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))></textarea>
            </FormField>
            <InlineErrorMessage error=error />
            <Button attr:type="submit" class="w-full" loading=pending>
                {move || if pending.get() { "Submitting..." } else { "Submit Leave Request" }}
            </Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn balance_cards_show_defaults() {
        let html = render_to_string(|| {
            view! { <LeaveBalanceCards balance=Signal::derive(LeaveBalance::default) /> }
        });
        assert!(html.contains("Sick Leave"));
        assert!(html.contains("Unpaid Leave"));
        assert!(html.contains("10"));
    }

    #[test]
    fn form_shows_inclusive_day_count() {
        let html = render_to_string(|| {
            let form = create_rw_signal(LeaveFormState {
                start_date: "2024-03-01".into(),
                end_date: "2024-03-05".into(),
                ..LeaveFormState::default()
            });
            view! {
                <AddLeaveForm
                    form=form
                    error=create_rw_signal(None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Total Days"));
        assert!(html.contains("Submit Leave Request"));
    }
}
