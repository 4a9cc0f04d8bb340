use crate::api::{ApiClient, ApiError, RequestedAsset};
use crate::pages::my_assets::{
    repository::MyAssetsRepository,
    types::{filter_assets, AssetTransition, TransitionKind},
    utils::{AssetsFilterState, MessageState, UpdatingIds},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct MyAssetsViewModel {
    pub filter_state: AssetsFilterState,
    pub updating: RwSignal<UpdatingIds>,
    pub print_item: RwSignal<Option<RequestedAsset>>,
    pub list_message: RwSignal<MessageState>,
    pub reload: RwSignal<u32>,
    pub assets_resource: Resource<u32, Result<Vec<RequestedAsset>, ApiError>>,
    pub transition_action: Action<AssetTransition, Result<(), ApiError>>,
    all_assets: Memo<Vec<RequestedAsset>>,
}

/// Marks `id` busy. `false` means a call for that row is already in flight.
fn begin_transition(updating: RwSignal<UpdatingIds>, id: &str) -> bool {
    let mut started = false;
    updating.update(|ids| started = ids.begin(id));
    started
}

fn finish_transition(
    transition: &AssetTransition,
    result: &Result<(), ApiError>,
    updating: RwSignal<UpdatingIds>,
    list_message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    updating.update(|ids| ids.finish(&transition.id));
    match result {
        Ok(()) => {
            list_message.update(|msg| msg.set_success(transition.kind.success_message()));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => {
            log::error!("{}: {}", transition.kind.failure_context(), err);
            list_message.update(|msg| msg.set_error(err.clone()));
        }
    }
}

fn request_transition(
    transition: AssetTransition,
    updating: RwSignal<UpdatingIds>,
    list_message: RwSignal<MessageState>,
    dispatch: impl FnOnce(AssetTransition),
) {
    if !begin_transition(updating, &transition.id) {
        log::debug!("Ignoring {:?} for {}: already in flight", transition.kind, transition.id);
        return;
    }
    list_message.update(|msg| msg.clear());
    dispatch(transition);
}

impl MyAssetsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(MyAssetsRepository::new(api));

        let filter_state = AssetsFilterState::default();
        let updating = create_rw_signal(UpdatingIds::default());
        let print_item = create_rw_signal(None::<RequestedAsset>);
        let list_message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let assets_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_my_assets().await }
            },
        );

        let transition_action = create_action(move |transition: &AssetTransition| {
            let repo = repository.get_value();
            let transition = transition.clone();
            async move {
                let result = repo.apply_transition(&transition).await;
                finish_transition(&transition, &result, updating, list_message, reload);
                result
            }
        });

        // Keeps the last good snapshot while a refetch is pending or failed.
        let all_assets = create_memo(move |previous: Option<&Vec<RequestedAsset>>| {
            match assets_resource.get() {
                Some(Ok(assets)) => assets,
                _ => previous.cloned().unwrap_or_default(),
            }
        });

        Self {
            filter_state,
            updating,
            print_item,
            list_message,
            reload,
            assets_resource,
            transition_action,
            all_assets,
        }
    }

    pub fn all_assets(&self) -> Signal<Vec<RequestedAsset>> {
        self.all_assets.into()
    }

    pub fn filtered_assets(&self) -> Signal<Vec<RequestedAsset>> {
        let all_assets = self.all_assets;
        let filter_state = self.filter_state;
        Signal::derive(move || {
            let search = filter_state.search_signal().get();
            let filter = filter_state.filter_signal().get();
            all_assets.with(|assets| filter_assets(assets, &search, filter))
        })
    }

    /// True only until the first response arrives.
    pub fn is_loading(&self) -> Signal<bool> {
        let resource = self.assets_resource;
        Signal::derive(move || resource.loading().get() && resource.get().is_none())
    }

    pub fn fetch_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.assets_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.updating.with(|ids| ids.contains(id))
    }

    pub fn on_cancel(&self) -> Callback<String> {
        self.transition_callback(TransitionKind::Cancel)
    }

    pub fn on_return(&self) -> Callback<String> {
        self.transition_callback(TransitionKind::Return)
    }

    fn transition_callback(&self, kind: TransitionKind) -> Callback<String> {
        let updating = self.updating;
        let list_message = self.list_message;
        let transition_action = self.transition_action;
        Callback::new(move |id: String| {
            request_transition(AssetTransition { id, kind }, updating, list_message, |t| {
                transition_action.dispatch(t)
            });
        })
    }

    pub fn on_print(&self) -> Callback<RequestedAsset> {
        let print_item = self.print_item;
        Callback::new(move |asset: RequestedAsset| print_item.set(Some(asset)))
    }

    pub fn on_close_print(&self) -> Callback<()> {
        let print_item = self.print_item;
        Callback::new(move |_| print_item.set(None))
    }

    pub fn on_dismiss_message(&self) -> Callback<()> {
        let list_message = self.list_message;
        Callback::new(move |_| list_message.update(|msg| msg.clear()))
    }
}

impl Default for MyAssetsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_my_assets_view_model() -> MyAssetsViewModel {
    match use_context::<MyAssetsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = MyAssetsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
