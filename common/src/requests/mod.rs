use crate::model::asset::AssetFields;
use serde::Deserialize;

/// Url-encoded body of `POST /asset-entry`.
///
/// Field names follow the entry page's form inputs, which mix camelCase and snake_case.
/// Every field defaults to an empty string so a missing input reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetEntryForm {
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    #[serde(rename = "applicationDate")]
    pub application_date: String,
    pub specification: String,
    #[serde(rename = "assetCode")]
    pub asset_code: String,
    #[serde(rename = "orderDate")]
    pub order_date: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub department: String,
    pub location: String,
    pub supplier: String,
    pub recipient: String,
    pub recipient_department: String,
    pub remarks: String,
    /// `create` (or empty) or `edit`.
    pub action: String,
    /// Record id, only read when `action` is `edit`.
    pub id: String,
}

impl AssetEntryForm {
    pub fn fields(&self) -> AssetFields {
        AssetFields {
            serial_number: self.serial_number.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            brand: self.brand.clone(),
            application_date: self.application_date.clone(),
            specification: self.specification.clone(),
            asset_code: self.asset_code.clone(),
            order_date: self.order_date.clone(),
            created_at: self.created_at.clone(),
            department: self.department.clone(),
            location: self.location.clone(),
            supplier: self.supplier.clone(),
            recipient: self.recipient.clone(),
            recipient_department: self.recipient_department.clone(),
            remarks: self.remarks.clone(),
        }
    }
}

/// Query string of `GET /assets/list`.
///
/// Paging values stay raw text; the server falls back to defaults for anything that is not
/// a positive integer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub query: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Query string of `DELETE /asset-entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteQuery {
    pub id: String,
}

/// Url-encoded body of `POST /login`.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
