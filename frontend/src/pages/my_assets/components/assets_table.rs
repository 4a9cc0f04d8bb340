use crate::api::{AssetStatus, RequestedAsset};
use crate::components::data_table::{ColumnDef, DataTable};
use crate::pages::my_assets::{
    components::action_cell::ActionCell,
    types::{approval_date_label, approval_sort_key, status_cell_style},
    utils::UpdatingIds,
};
use crate::utils::time::format_date;
use leptos::*;

/// Signals and callbacks every row's action cell needs.
#[derive(Clone, Copy)]
pub struct RowActions {
    pub updating: RwSignal<UpdatingIds>,
    pub on_cancel: Callback<String>,
    pub on_return: Callback<String>,
    pub on_print: Callback<RequestedAsset>,
}

pub fn asset_columns(actions: RowActions) -> Vec<ColumnDef<RequestedAsset>> {
    let mut status_column =
        ColumnDef::text("Request Status", |a: &RequestedAsset| a.status.to_string()).sortable();
    for status in [AssetStatus::Pending, AssetStatus::Approved, AssetStatus::Rejected] {
        if let Some(style) = status_cell_style(status) {
            status_column = status_column.style_when(move |a: &RequestedAsset| a.status == status, style);
        }
    }

    vec![
        ColumnDef::row_index("#"),
        ColumnDef::text("Asset Name", |a: &RequestedAsset| a.asset_name.clone()).sortable(),
        ColumnDef::text("Asset Type", |a: &RequestedAsset| a.asset_type.to_string()).sortable(),
        ColumnDef::text("Request Date", |a: &RequestedAsset| format_date(&a.request_date))
            .sort_by(|a: &RequestedAsset, b: &RequestedAsset| a.request_date.cmp(&b.request_date)),
        ColumnDef::text("Approval Date", |a: &RequestedAsset| approval_date_label(a, format_date))
            .sort_by(|a: &RequestedAsset, b: &RequestedAsset| {
                approval_sort_key(a).cmp(&approval_sort_key(b))
            }),
        status_column,
        ColumnDef::custom("Action", move |a: &RequestedAsset| {
            let id = a.id.clone();
            let updating = actions.updating;
            view! {
                <ActionCell
                    asset=a.clone()
                    busy=Signal::derive(move || updating.with(|ids| ids.contains(&id)))
                    on_cancel=actions.on_cancel
                    on_return=actions.on_return
                    on_print=actions.on_print
                />
            }
            .into_view()
        }),
    ]
}

#[component]
pub fn AssetsTable(#[prop(into)] assets: Signal<Vec<RequestedAsset>>, actions: RowActions) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden print:hidden">
            <DataTable columns=asset_columns(actions) rows=assets />
        </div>
    }
}
