use crate::pages::my_assets::{types::AssetFilter, utils::AssetsFilterState};
use leptos::*;

pub const SEARCH_PLACEHOLDER: &str = "Search Item By Asset Name";

#[component]
pub fn AssetsFilter(filter_state: AssetsFilterState) -> impl IntoView {
    let search = filter_state.search_signal();
    let filter = filter_state.filter_signal();

    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between my-6 print:hidden">
            <input
                type="text"
                class="w-full md:w-80 border border-border rounded-md px-3 py-2 text-sm bg-surface-elevated"
                placeholder=SEARCH_PLACEHOLDER
                aria-label=SEARCH_PLACEHOLDER
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="flex items-center gap-2">
                <select
                    class="border border-border rounded-md px-3 py-2 text-sm bg-surface-elevated"
                    aria-label=AssetFilter::All.label()
                    prop:value=move || filter.get().as_value()
                    on:change=move |ev| filter_state.set_filter_value(&event_target_value(&ev))
                >
                    <option value="">{AssetFilter::All.label()}</option>
                    {AssetFilter::OPTIONS
                        .iter()
                        .map(|option| view! { <option value=option.as_value()>{option.label()}</option> })
                        .collect_view()}
                </select>
                <Show when=move || filter_state.is_active()>
                    <button
                        type="button"
                        class="text-sm text-fg-muted underline"
                        on:click=move |_| filter_state.reset()
                    >
                        {"Clear"}
                    </button>
                </Show>
            </div>
        </div>
    }
}
