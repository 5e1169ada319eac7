//! DTOs for the click ledger endpoints.

use serde::Serialize;

use crate::domain::repositories::AttributedClick;

/// Click listing, newest first.
///
/// `page` and `page_size` are echoed back only for paginated requests.
#[derive(Debug, Serialize)]
pub struct ClickListResponse {
    pub items: Vec<AttributedClick>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
