use leptos::*;

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg border border-dashed border-border-strong bg-surface-muted">
            <svg class="mx-auto h-10 w-10 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M20 13V7a2 2 0 00-2-2H6a2 2 0 00-2 2v6m16 0v4a2 2 0 01-2 2H6a2 2 0 01-2-2v-4m16 0h-4l-2 3h-4l-2-3H4" />
            </svg>
            <p class="mt-2 text-sm font-medium text-fg">{title}</p>
        </div>
    }
}
