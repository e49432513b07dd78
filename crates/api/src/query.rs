//! Query-string parameter structs.
//!
//! Every value is kept as a raw string: `limit` falls back to the default
//! instead of rejecting non-numeric input, and an empty `bbox`, `cursor` or
//! `type` counts as absent.

use serde::Deserialize;

/// `?limit&cursor` for memory listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListMemoriesParams {
    pub limit: Option<String>,
    pub cursor: Option<String>,
}

/// `?bbox&owner&type&limit&cursor` for flower listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListFlowersParams {
    pub bbox: Option<String>,
    pub owner: Option<String>,
    #[serde(rename = "type")]
    pub flower_type: Option<String>,
    pub limit: Option<String>,
    pub cursor: Option<String>,
}
