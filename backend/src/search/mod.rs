//! Fuzzy matching and paging for the asset list.

pub mod pagination;
pub mod similarity;
