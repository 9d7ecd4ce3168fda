use crate::model::asset::{Asset, AssetAction};
use serde::{Deserialize, Serialize};

/// One page of the asset list, as returned by `GET /assets/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPage {
    pub assets: Vec<Asset>,
    /// Number of records matching the query across all pages.
    pub total: usize,
    pub page: usize,
    pub pages: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

/// Acknowledgement of a committed create, edit or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationAck {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub action: Option<AssetAction>,
}

impl MutationAck {
    pub fn success(action: Option<AssetAction>) -> Self {
        Self {
            message: "success".to_string(),
            action,
        }
    }
}
