use crate::api::{AssetStatus, AssetType, RequestedAsset};

/// Single-select filter over the requested assets list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetFilter {
    #[default]
    All,
    Pending,
    Approved,
    Returnable,
    NonReturnable,
}

impl AssetFilter {
    pub const OPTIONS: [AssetFilter; 4] = [
        AssetFilter::Pending,
        AssetFilter::Approved,
        AssetFilter::Returnable,
        AssetFilter::NonReturnable,
    ];

    /// Unknown values mean "no filter".
    pub fn from_value(value: &str) -> Self {
        match value {
            "Pending" => AssetFilter::Pending,
            "Approved" => AssetFilter::Approved,
            "Returnable" => AssetFilter::Returnable,
            "Non-Returnable" => AssetFilter::NonReturnable,
            _ => AssetFilter::All,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            AssetFilter::All => "",
            AssetFilter::Pending => "Pending",
            AssetFilter::Approved => "Approved",
            AssetFilter::Returnable => "Returnable",
            AssetFilter::NonReturnable => "Non-Returnable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetFilter::All => "Filter Assets",
            other => other.as_value(),
        }
    }

    pub fn matches(&self, asset: &RequestedAsset) -> bool {
        match self {
            AssetFilter::All => true,
            AssetFilter::Pending => asset.status == AssetStatus::Pending,
            AssetFilter::Approved => asset.status == AssetStatus::Approved,
            AssetFilter::Returnable => asset.asset_type == AssetType::Returnable,
            AssetFilter::NonReturnable => asset.asset_type == AssetType::NonReturnable,
        }
    }
}

pub fn matches_search(asset: &RequestedAsset, search: &str) -> bool {
    asset
        .asset_name
        .to_lowercase()
        .contains(&search.to_lowercase())
}

/// Rows passing both the name search and the filter, in source order.
pub fn filter_assets(
    assets: &[RequestedAsset],
    search: &str,
    filter: AssetFilter,
) -> Vec<RequestedAsset> {
    assets
        .iter()
        .filter(|asset| matches_search(asset, search) && filter.matches(asset))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Cancel,
    Return,
}

impl TransitionKind {
    pub fn idle_label(&self) -> &'static str {
        match self {
            TransitionKind::Cancel => "Cancel",
            TransitionKind::Return => "Return",
        }
    }

    pub fn progress_label(&self) -> &'static str {
        match self {
            TransitionKind::Cancel => "Cancelling...",
            TransitionKind::Return => "Returning...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            TransitionKind::Cancel => "Request cancelled.",
            TransitionKind::Return => "Asset returned.",
        }
    }

    pub fn failure_context(&self) -> &'static str {
        match self {
            TransitionKind::Cancel => "Error cancelling request",
            TransitionKind::Return => "Error returning asset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTransition {
    pub id: String,
    pub kind: TransitionKind,
}

/// One control in a row's action cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Cancel { busy: bool },
    Print,
    Return { busy: bool },
    /// Inert "Return" shown on rows that were already returned.
    ReturnedMarker,
}

impl ActionButton {
    pub fn label(&self) -> &'static str {
        match self {
            ActionButton::Cancel { busy: true } => TransitionKind::Cancel.progress_label(),
            ActionButton::Cancel { busy: false } => TransitionKind::Cancel.idle_label(),
            ActionButton::Print => "Print",
            ActionButton::Return { busy: true } => TransitionKind::Return.progress_label(),
            ActionButton::Return { busy: false } | ActionButton::ReturnedMarker => {
                TransitionKind::Return.idle_label()
            }
        }
    }

    pub fn disabled(&self) -> bool {
        match self {
            ActionButton::Cancel { busy } | ActionButton::Return { busy } => *busy,
            ActionButton::Print => false,
            ActionButton::ReturnedMarker => true,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ActionButton::Cancel { .. } => "p-2 text-base rounded-md bg-red-400 text-white",
            ActionButton::Print => "p-2 text-base rounded-md bg-light-blue-400",
            ActionButton::Return { .. } => {
                "ml-2 p-2 text-base rounded-md bg-green-400 text-white"
            }
            ActionButton::ReturnedMarker => {
                "ml-2 p-2 text-base rounded-md bg-red-400 text-white cursor-not-allowed opacity-50"
            }
        }
    }
}

pub fn action_cell_for(asset: &RequestedAsset, busy: bool) -> Vec<ActionButton> {
    match asset.status {
        AssetStatus::Pending => vec![ActionButton::Cancel { busy }],
        AssetStatus::Approved if asset.is_returnable() => {
            vec![ActionButton::Print, ActionButton::Return { busy }]
        }
        AssetStatus::Approved => vec![ActionButton::Print],
        AssetStatus::Returned if asset.is_returnable() => vec![ActionButton::ReturnedMarker],
        AssetStatus::Returned | AssetStatus::Rejected | AssetStatus::Cancelled => Vec::new(),
    }
}

/// Approval Date cell text; `format` renders a present approval date.
pub fn approval_date_label(
    asset: &RequestedAsset,
    format: impl Fn(&chrono::DateTime<chrono::Utc>) -> String,
) -> String {
    match (asset.status, asset.approval_date.as_ref()) {
        (AssetStatus::Cancelled | AssetStatus::Rejected, _) => String::new(),
        (_, None) => "Pending".to_string(),
        (_, Some(date)) => format(date),
    }
}

/// Sort key for the Approval Date column, grouped like the rendered cell:
/// blank cells, then dates in time order, then "Pending".
pub fn approval_sort_key(asset: &RequestedAsset) -> (u8, Option<chrono::DateTime<chrono::Utc>>) {
    match (asset.status, asset.approval_date) {
        (AssetStatus::Cancelled | AssetStatus::Rejected, _) => (0, None),
        (_, Some(date)) => (1, Some(date)),
        (_, None) => (2, None),
    }
}

pub fn status_cell_style(status: AssetStatus) -> Option<&'static str> {
    match status {
        AssetStatus::Pending => Some("background-color: rgba(255, 193, 7, 0.2); color: goldenrod;"),
        AssetStatus::Approved => Some("background-color: rgba(46, 204, 113, 0.2); color: green;"),
        AssetStatus::Rejected => Some("background-color: rgba(231, 76, 60, 0.2); color: red;"),
        AssetStatus::Returned | AssetStatus::Cancelled => None,
    }
}
