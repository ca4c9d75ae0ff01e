//! Wire types shared by the client adapter and the tool layer.
//!
//! Asana resources are modeled as a hybrid: minimal typed fields for dispatch,
//! with every remaining upstream field preserved as raw JSON so nothing the
//! API returns is silently dropped.

use serde::{Deserialize, Serialize};
use serde_json::Map;

/// A globally unique identifier for an Asana resource.
pub type Gid = String;

/// Generic wrapper for Asana API single-object responses.
#[derive(Debug, Clone, Deserialize)]
pub struct DataWrapper<T> {
    /// The wrapped data.
    pub data: T,
}

/// Generic wrapper for paginated list API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ListWrapper<T> {
    /// The list of items.
    pub data: Vec<T>,
    /// Pagination information for fetching more results.
    pub next_page: Option<NextPage>,
}

/// Pagination cursor for fetching additional results.
#[derive(Debug, Clone, Deserialize)]
pub struct NextPage {
    /// The offset token for the next page.
    pub offset: String,
}

/// One page of a list result with the normalized continuation token.
///
/// `next_offset` is the opaque offset from the API's `next_page`, passed
/// through unmodified; it is absent at the end of pagination.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Offset token to request the next page, when more results exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
}

/// A minimal wrapper for any Asana resource.
///
/// Provides typed access to `gid` and `resource_type` for dispatch while
/// preserving all other fields as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// The unique identifier for the resource.
    pub gid: Gid,

    /// The resource type (e.g., "task", "project", "goal").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// All other fields from the API response.
    #[serde(flatten)]
    pub fields: Map<String, serde_json::Value>,
}

/// Compact reference form of a resource: GID, type, and name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCompact {
    /// The unique identifier.
    pub gid: Gid,

    /// The resource type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// The display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
