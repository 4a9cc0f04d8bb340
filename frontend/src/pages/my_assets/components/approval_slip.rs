use crate::api::RequestedAsset;
use crate::pages::my_assets::types::approval_date_label;
use crate::utils::time::{format_date, format_naive_date, today_in_app_tz};
use leptos::*;

#[cfg(target_arch = "wasm32")]
fn print_slip() {
    if let Err(err) = crate::utils::storage::print_window() {
        log::warn!("{}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn print_slip() {}

/// Printable summary of one approved request.
#[component]
pub fn ApprovalSlip(asset: RequestedAsset) -> impl IntoView {
    let requester = match (&asset.requester_name, &asset.requester_email) {
        (Some(name), Some(email)) => Some(format!("{} ({})", name, email)),
        (Some(name), None) => Some(name.clone()),
        (None, Some(email)) => Some(email.clone()),
        (None, None) => None,
    };
    let rows = [
        ("Asset Name", Some(asset.asset_name.clone())),
        ("Asset Type", Some(asset.asset_type.to_string())),
        ("Requested By", requester),
        ("Request Date", Some(format_date(&asset.request_date))),
        ("Approval Date", Some(approval_date_label(&asset, format_date))),
        ("Status", Some(asset.status.to_string())),
        ("Note", asset.note.clone()),
    ];
    let printed_on = format_naive_date(&today_in_app_tz());

    view! {
        <section class="bg-white text-black min-h-screen w-full px-8 py-12">
            <div class="max-w-2xl mx-auto border border-gray-300 rounded-lg p-8 space-y-6">
                <header class="text-center space-y-1">
                    {asset.company_name.clone().map(|company| view! {
                        <p class="text-lg font-semibold">{company}</p>
                    })}
                    <h2 class="text-2xl font-bold">{"Asset Approval Slip"}</h2>
                    <p class="text-xs text-gray-500">{format!("Reference {}", asset.id)}</p>
                </header>
                <dl class="grid grid-cols-3 gap-y-3 text-sm">
                    {rows
                        .into_iter()
                        .filter_map(|(label, value)| value.map(|value| (label, value)))
                        .map(|(label, value)| view! {
                            <dt class="font-medium text-gray-600">{label}</dt>
                            <dd class="col-span-2">{value}</dd>
                        })
                        .collect_view()}
                </dl>
                <footer class="flex items-center justify-between text-xs text-gray-500">
                    <span>{format!("Printed on {}", printed_on)}</span>
                    <button
                        type="button"
                        class="p-2 text-base rounded-md bg-light-blue-400 print:hidden"
                        on:click=move |_| print_slip()
                    >
                        {"Print"}
                    </button>
                </footer>
            </div>
        </section>
    }
}
