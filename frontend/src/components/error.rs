use crate::api::ApiError;
use leptos::*;

/// Error banner for a failed request. Renders nothing while `error` is `None`.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some()) fallback=|| ()>
            <div
                class="flex items-start justify-between gap-3 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2"
                role="alert"
            >
                <div class="space-y-1">
                    <div class="font-bold">
                        {move || error.get().map(|e| e.error).unwrap_or_default()}
                    </div>
                    {move || {
                        error
                            .get()
                            .filter(|e| !e.code.is_empty() && e.code != "UNKNOWN")
                            .map(|e| view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> })
                    }}
                </div>
                {on_dismiss.map(|dismiss| {
                    view! {
                        <button
                            type="button"
                            aria-label="Dismiss"
                            class="text-status-error-text hover:opacity-75"
                            on:click=move |_| dismiss.call(())
                        >
                            {"✕"}
                        </button>
                    }
                })}
            </div>
        </Show>
    }
}
