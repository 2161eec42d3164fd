//! Typed domain models returned to callers.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    pub id: Option<Uuid>,
    pub codename: Option<String>,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub continuation_token: Option<String>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    pub id: Uuid,
    pub reference_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescription {
    pub language: Reference,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: Uuid,
    pub file_name: String,
    pub title: Option<String>,
    pub size: u64,
    /// MIME type of the stored file.
    pub asset_type: String,
    pub file_reference: FileReference,
    pub descriptions: Vec<AssetDescription>,
    pub external_id: Option<String>,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetsListing {
    pub assets: Vec<Asset>,
    pub pagination: Pagination,
}

/// Content item as seen by the management API (no element values).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItemModel {
    pub id: Uuid,
    pub name: String,
    pub codename: String,
    pub item_type: Reference,
    pub sitemap_locations: Vec<Reference>,
    pub external_id: Option<String>,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItemsListing {
    pub items: Vec<ContentItemModel>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageVariant<E> {
    pub item: Reference,
    pub language: Reference,
    pub last_modified: DateTime<Utc>,
    pub elements: E,
}
