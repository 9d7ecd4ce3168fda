use serde::{Deserialize, Serialize};

/// Number of free-text fields that take part in search.
pub const SEARCHABLE_FIELD_COUNT: usize = 10;

/// The editable attributes of an asset record.
///
/// Every attribute is carried as text; an empty string means "not set". Dates use the
/// `YYYY-MM-DD` form both on the wire and in the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFields {
    pub serial_number: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub application_date: String,
    pub specification: String,
    pub asset_code: String,
    pub order_date: String,
    pub created_at: String,
    pub department: String,
    pub location: String,
    pub supplier: String,
    pub recipient: String,
    pub recipient_department: String,
    pub remarks: String,
}

impl AssetFields {
    /// The fields matched by free-text search, in the order they are scored.
    ///
    /// Specification, asset code and the dates are deliberately not searchable.
    pub fn searchable(&self) -> [&str; SEARCHABLE_FIELD_COUNT] {
        [
            &self.serial_number,
            &self.name,
            &self.category,
            &self.brand,
            &self.department,
            &self.location,
            &self.supplier,
            &self.recipient,
            &self.recipient_department,
            &self.remarks,
        ]
    }
}

/// A stored asset: the store-assigned id plus its attributes.
///
/// Serialized flat, so the JSON object carries `id` next to every attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    #[serde(flatten)]
    pub fields: AssetFields,
}

/// Whether an entry form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetAction {
    Create,
    Edit,
}
