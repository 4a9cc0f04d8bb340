use crate::api::RequestedAsset;
use crate::pages::my_assets::types::{action_cell_for, ActionButton};
use leptos::*;

#[component]
pub fn ActionCell(
    asset: RequestedAsset,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<String>,
    on_return: Callback<String>,
    on_print: Callback<RequestedAsset>,
) -> impl IntoView {
    let asset = store_value(asset);

    let activate = move |button: ActionButton| match button {
        ActionButton::Cancel { .. } => on_cancel.call(asset.with_value(|a| a.id.clone())),
        ActionButton::Return { .. } => on_return.call(asset.with_value(|a| a.id.clone())),
        ActionButton::Print => on_print.call(asset.get_value()),
        ActionButton::ReturnedMarker => {}
    };

    let render_button = move |button: ActionButton| {
        let label = button.label();
        let class = button.class();
        let disabled = button.disabled();
        if button == ActionButton::ReturnedMarker {
            return view! {
                <button type="button" class=class disabled=disabled aria-disabled="true">
                    {label}
                </button>
            }
            .into_view();
        }
        view! {
            <button type="button" class=class disabled=disabled on:click=move |_| activate(button)>
                {label}
            </button>
        }
        .into_view()
    };

    view! {
        <div class="flex items-center">
            {move || {
                asset
                    .with_value(|a| action_cell_for(a, busy.get()))
                    .into_iter()
                    .map(render_button)
                    .collect_view()
            }}
        </div>
    }
}
