use crate::error::{AssetError, Result};
use chrono::NaiveDate;
use common::model::asset::AssetFields;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is a valid regex")
});

/// Fails on the first empty required attribute, in form order. Only the empty string counts
/// as missing; whitespace is stored as given.
pub(crate) fn validate_required(fields: &AssetFields) -> Result<()> {
    let required = [
        ("serial number", &fields.serial_number),
        ("name", &fields.name),
        ("category", &fields.category),
        ("brand", &fields.brand),
        ("department", &fields.department),
        ("location", &fields.location),
        ("supplier", &fields.supplier),
        ("recipient", &fields.recipient),
        ("recipient department", &fields.recipient_department),
    ];

    match required.iter().find(|(_, value)| value.is_empty()) {
        Some((label, _)) => Err(AssetError::validation(format!(
            "{} must not be empty",
            label
        ))),
        None => Ok(()),
    }
}

/// Checks an optional date. Empty is accepted; anything else must be a real `YYYY-MM-DD` day.
pub(crate) fn validate_date(label: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if !DATE_PATTERN.is_match(value) || NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
        return Err(AssetError::validation(format!(
            "{} must be a date in YYYY-MM-DD format",
            label
        )));
    }
    Ok(())
}
