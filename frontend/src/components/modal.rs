use leptos::ev::KeyboardEvent;
use leptos::*;

pub const OVERLAY_STYLE: &str = "background-color: rgba(0, 0, 0, 0.7);";
pub const CLOSE_BUTTON_STYLE: &str = "position: absolute; top: 0; right: 120px; background-color: green; color: white; border: none; border-radius: 5px; padding: 5px 10px; cursor: pointer;";

/// Full-width overlay dialog. Escape, the backdrop and the close button all call `on_close`.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] label: String,
    children: ChildrenFn,
) -> impl IntoView {
    let label = store_value(label);
    let children = store_value(children);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] overflow-y-auto print:static print:overflow-visible" style=OVERLAY_STYLE>
                <button
                    type="button"
                    aria-label="Dismiss dialog"
                    class="absolute inset-0 w-full h-full cursor-default print:hidden"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[71] w-full"
                    style="padding: 0;"
                    role="dialog"
                    aria-modal="true"
                    aria-label=label.get_value()
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <button
                        type="button"
                        class="print:hidden"
                        style=CLOSE_BUTTON_STYLE
                        on:click=move |_| on_close.call(())
                    >
                        "Close"
                    </button>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
