use crate::components::{
    error::InlineErrorMessage,
    layout::{LoadingSpinner, SuccessMessage},
};
use crate::pages::my_assets::{
    components::{
        assets_table::{AssetsTable, RowActions},
        filter::AssetsFilter,
        print_modal::PrintModal,
    },
    layout::{MyAssetsLayout, PAGE_TITLE},
    view_model::use_my_assets_view_model,
};
use leptos::*;
use leptos_meta::Title;

/// Everything but the slip overlay is left out of the printout.
const SCREEN_ONLY_CLASS: &str = "space-y-4 print:hidden";

#[component]
pub fn MyAssetsPage() -> impl IntoView {
    let vm = use_my_assets_view_model();
    let filtered_assets = vm.filtered_assets();
    let is_loading = vm.is_loading();
    let fetch_error = vm.fetch_error();
    let list_message = vm.list_message;
    let action_error = Signal::derive(move || list_message.with(|msg| msg.error.clone()));
    let success = Signal::derive(move || list_message.with(|msg| msg.success.clone()));
    let actions = RowActions {
        updating: vm.updating,
        on_cancel: vm.on_cancel(),
        on_return: vm.on_return(),
        on_print: vm.on_print(),
    };

    view! {
        <Title text=PAGE_TITLE />
        <MyAssetsLayout>
            <div class=SCREEN_ONLY_CLASS>
                {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
                <InlineErrorMessage error=action_error on_dismiss=vm.on_dismiss_message() />
                <InlineErrorMessage error=fetch_error />
                <AssetsFilter filter_state=vm.filter_state />
                <Show when=move || !is_loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <AssetsTable assets=filtered_assets actions=actions />
                </Show>
            </div>
            <PrintModal print_item=vm.print_item on_close=vm.on_close_print() />
        </MyAssetsLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError, AssetStatus, AssetType};
    use crate::pages::my_assets::{types::AssetFilter, view_model::MyAssetsViewModel};
    use crate::test_support::fixtures::asset;
    use crate::test_support::ssr::render_to_string;

    fn provide_view_model() -> MyAssetsViewModel {
        provide_context(ApiClient::new_with_base_url("http://localhost:3000/api"));
        let vm = MyAssetsViewModel::new();
        provide_context(vm);
        vm
    }

    #[test]
    fn page_renders_rows_from_snapshot() {
        let html = render_to_string(move || {
            let vm = provide_view_model();
            vm.assets_resource.set(Ok(vec![
                asset("a1", "Laptop", AssetType::Returnable, AssetStatus::Pending),
                asset("a2", "Monitor", AssetType::Returnable, AssetStatus::Approved),
            ]));
            view! { <MyAssetsPage /> }
        });
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("Search Item By Asset Name"));
        assert!(html.contains("Laptop"));
        assert!(html.contains("Monitor"));
        assert!(html.contains("Asset Name"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn page_applies_filter_before_rendering() {
        let html = render_to_string(move || {
            let vm = provide_view_model();
            vm.assets_resource.set(Ok(vec![
                asset("a1", "Laptop", AssetType::Returnable, AssetStatus::Pending),
                asset("a2", "Stapler", AssetType::NonReturnable, AssetStatus::Approved),
            ]));
            vm.filter_state.filter_signal().set(AssetFilter::NonReturnable);
            view! { <MyAssetsPage /> }
        });
        assert!(html.contains("Stapler"));
        assert!(!html.contains("Laptop"));
    }

    #[test]
    fn page_shows_empty_state_and_fetch_error() {
        let html = render_to_string(move || {
            let vm = provide_view_model();
            vm.assets_resource
                .set(Err(ApiError::request_failed("Request failed with status 503")));
            view! { <MyAssetsPage /> }
        });
        assert!(html.contains("Request failed with status 503"));
        assert!(html.contains("There are no records to display"));
    }

    #[test]
    fn page_shows_success_notice_and_open_slip() {
        let html = render_to_string(move || {
            let vm = provide_view_model();
            let row = asset("a2", "Monitor", AssetType::Returnable, AssetStatus::Approved);
            vm.assets_resource.set(Ok(vec![row.clone()]));
            vm.list_message.update(|msg| msg.set_success("Asset returned."));
            vm.print_item.set(Some(row));
            view! { <MyAssetsPage /> }
        });
        assert!(html.contains("Asset returned."));
        assert!(html.contains("Asset Approval Slip"));
    }

    #[test]
    fn open_slip_is_the_only_printable_content() {
        let html = render_to_string(move || {
            let vm = provide_view_model();
            let row = asset("a2", "Keyboard", AssetType::Returnable, AssetStatus::Approved);
            vm.assets_resource.set(Ok(vec![row.clone()]));
            vm.list_message
                .update(|msg| msg.set_error(ApiError::unknown("Error returning asset")));
            vm.print_item.set(Some(row));
            view! { <MyAssetsPage /> }
        });

        let screen_only = html
            .find(&format!("class=\"{}\"", SCREEN_ONLY_CLASS))
            .expect("screen-only wrapper rendered");
        let banner = html.find("Error returning asset").expect("error banner rendered");
        let table = html.find("bg-surface-elevated shadow rounded-lg").expect("table rendered");
        let dialog = html.find("role=\"dialog\"").expect("slip overlay rendered");
        assert!(screen_only < banner && banner < table && table < dialog);
        assert!(html[table..dialog].contains("print:hidden"));

        let slip = &html[dialog..];
        assert!(slip.contains("Asset Approval Slip"));
        assert!(slip.contains("Keyboard"));
        assert!(!slip.contains("Rows per page"));
    }
}
