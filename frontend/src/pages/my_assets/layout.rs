use crate::components::layout::Layout;
use leptos::*;

pub const PAGE_TITLE: &str = "My Requested Assets";

#[component]
pub fn MyAssetsLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-4">
                <div class="print:hidden">
                    <h1 class="text-2xl font-bold text-fg">{PAGE_TITLE}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"Track your asset requests, cancel pending ones and return what you borrowed."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
