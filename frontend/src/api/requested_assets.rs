use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{
    client::ApiClient,
    types::{ApiError, RequestedAsset},
};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn requested_asset_action_url(base_url: &str, id: &str, action: &str) -> String {
    format!(
        "{}/requested-assets/{}/{}",
        base_url,
        utf8_percent_encode(id, PATH_SEGMENT),
        action
    )
}

impl ApiClient {
    pub async fn get_my_requested_assets(&self) -> Result<Vec<RequestedAsset>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|| {
                self.http_client()
                    .get(format!("{}/requested-assets/me", base_url))
            })
            .await?;
        self.map_json_response(response).await
    }

    pub async fn cancel_requested_asset(&self, id: &str) -> Result<(), ApiError> {
        self.transition_requested_asset(id, "cancel").await
    }

    pub async fn return_requested_asset(&self, id: &str) -> Result<(), ApiError> {
        self.transition_requested_asset(id, "return").await
    }

    async fn transition_requested_asset(&self, id: &str, action: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = requested_asset_action_url(&base_url, id, action);
        let response = self
            .send_authorized(|| self.http_client().put(url))
            .await?;
        self.map_empty_response(response).await
    }
}
