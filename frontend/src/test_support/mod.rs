#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{AssetStatus, AssetType, RequestedAsset};
    use chrono::{TimeZone, Utc};

    pub fn asset(id: &str, name: &str, asset_type: AssetType, status: AssetStatus) -> RequestedAsset {
        let approved = matches!(status, AssetStatus::Approved | AssetStatus::Returned);
        RequestedAsset {
            id: id.into(),
            asset_name: name.into(),
            asset_type,
            request_date: Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap(),
            approval_date: approved.then(|| Utc.with_ymd_and_hms(2025, 1, 7, 9, 30, 0).unwrap()),
            status,
            requester_name: None,
            requester_email: None,
            company_name: None,
            note: None,
        }
    }
}
