use crate::api::RequestedAsset;
use crate::components::modal::Modal;
use crate::pages::my_assets::components::approval_slip::ApprovalSlip;
use leptos::*;

#[component]
pub fn PrintModal(print_item: RwSignal<Option<RequestedAsset>>, on_close: Callback<()>) -> impl IntoView {
    let is_open = Signal::derive(move || print_item.with(|item| item.is_some()));

    view! {
        <Modal is_open=is_open on_close=on_close label="Approval slip">
            {move || print_item.get().map(|asset| view! { <ApprovalSlip asset=asset /> })}
        </Modal>
    }
}
