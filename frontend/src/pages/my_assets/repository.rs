use crate::api::{ApiClient, ApiError, RequestedAsset};
use std::rc::Rc;

use super::types::{AssetTransition, TransitionKind};

#[derive(Clone)]
pub struct MyAssetsRepository {
    client: Rc<ApiClient>,
}

impl MyAssetsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_my_assets(&self) -> Result<Vec<RequestedAsset>, ApiError> {
        self.client.get_my_requested_assets().await
    }

    pub async fn cancel_request(&self, id: &str) -> Result<(), ApiError> {
        self.client.cancel_requested_asset(id).await
    }

    pub async fn return_asset(&self, id: &str) -> Result<(), ApiError> {
        self.client.return_requested_asset(id).await
    }

    pub async fn apply_transition(&self, transition: &AssetTransition) -> Result<(), ApiError> {
        match transition.kind {
            TransitionKind::Cancel => self.cancel_request(&transition.id).await,
            TransitionKind::Return => self.return_asset(&transition.id).await,
        }
    }
}
