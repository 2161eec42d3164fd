//! Raw wire contracts of the content management API.
//!
//! # Design
//! These types mirror the JSON documents exchanged with the service and are
//! never handed to callers directly; the mappers turn them into `models`.
//! Request payload types live here too because they are serialized verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to another entity by id, codename or external id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceContract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl ReferenceContract {
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_codename(codename: &str) -> Self {
        Self {
            codename: Some(codename.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationContract {
    #[serde(default)]
    pub continuation_token: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReferenceContract {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub reference_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptionContract {
    pub language: ReferenceContract,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetModelContract {
    pub id: Uuid,
    pub file_name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub size: u64,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub file_reference: FileReferenceContract,
    #[serde(default)]
    pub descriptions: Vec<AssetDescriptionContract>,
    #[serde(default)]
    pub external_id: Option<String>,
    pub last_modified: DateTime<Utc>,
}

pub type AddAssetResponseContract = AssetModelContract;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsListingResponseContract {
    pub assets: Vec<AssetModelContract>,
    #[serde(default)]
    pub pagination: PaginationContract,
}

pub type UploadBinaryFileResponseContract = FileReferenceContract;

/// Payload for creating an asset from a previously uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAssetRequestData {
    pub file_reference: FileReferenceContract,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<AssetDescriptionContract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Raw file upload. Sent as the request body, not as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBinaryFileRequestData {
    pub binary_data: Vec<u8>,
    pub content_type: String,
    pub content_length: u64,
}

impl UploadBinaryFileRequestData {
    /// Upload `binary_data` with its length taken from the buffer.
    pub fn new(binary_data: Vec<u8>, content_type: &str) -> Self {
        Self {
            content_length: binary_data.len() as u64,
            binary_data,
            content_type: content_type.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Content items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItemModelContract {
    pub id: Uuid,
    pub name: String,
    pub codename: String,
    #[serde(rename = "type")]
    pub item_type: ReferenceContract,
    #[serde(default)]
    pub sitemap_locations: Vec<ReferenceContract>,
    #[serde(default)]
    pub external_id: Option<String>,
    pub last_modified: DateTime<Utc>,
}

pub type ViewContentItemResponseContract = ContentItemModelContract;
pub type AddContentItemResponseContract = ContentItemModelContract;
pub type UpdateContentItemResponseContract = ContentItemModelContract;

/// Delete responses carry no body.
pub type DeleteContentItemResponseContract = ();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItemsListingResponseContract {
    pub items: Vec<ContentItemModelContract>,
    #[serde(default)]
    pub pagination: PaginationContract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddContentItemPostContract {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ReferenceContract,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sitemap_locations: Vec<ReferenceContract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContentItemPostContract {
    pub name: String,
    #[serde(default)]
    pub sitemap_locations: Vec<ReferenceContract>,
}

/// One language variant of a content item. `elements` is keyed by element
/// codename and its values are shaped by the project's content model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageVariantContract {
    pub item: ReferenceContract,
    pub language: ReferenceContract,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub elements: serde_json::Map<String, serde_json::Value>,
}

pub type ListLanguageVariantsResponseContract = Vec<LanguageVariantContract>;
