use crate::api::ApiError;
use leptos::*;
use std::collections::HashSet;

use super::types::AssetFilter;

#[derive(Clone, Copy)]
pub struct AssetsFilterState {
    search: RwSignal<String>,
    filter: RwSignal<AssetFilter>,
}

impl Default for AssetsFilterState {
    fn default() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            filter: create_rw_signal(AssetFilter::All),
        }
    }
}

impl AssetsFilterState {
    pub fn search_signal(&self) -> RwSignal<String> {
        self.search
    }

    pub fn filter_signal(&self) -> RwSignal<AssetFilter> {
        self.filter
    }

    pub fn set_filter_value(&self, value: &str) {
        self.filter.set(AssetFilter::from_value(value));
    }

    pub fn is_active(&self) -> bool {
        !self.search.get().is_empty() || self.filter.get() != AssetFilter::All
    }

    pub fn reset(&self) {
        self.search.set(String::new());
        self.filter.set(AssetFilter::All);
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Row ids with a cancel/return call in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatingIds(HashSet<String>);

impl UpdatingIds {
    /// Returns `false` when `id` was already in flight.
    pub fn begin(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
