//! Client and per-query configuration.
//!
//! # Design
//! `ClientConfig` is fixed for the lifetime of a query service and knows how
//! to build endpoint URLs for one project. `QueryConfig` is supplied per call
//! and is forwarded to the transport as-is.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_BASE_URL: &str = "https://manage.kenticocloud.com/projects";

/// Header carrying the SDK identity on every request.
pub const SDK_TRACKING_HEADER: &str = "X-KC-SDKID";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub project_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Emit warnings for recoverable problems such as unresolved URL slugs.
    #[serde(default)]
    pub enable_advanced_logging: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            base_url: default_base_url(),
            enable_advanced_logging: false,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_advanced_logging(mut self, enabled: bool) -> Self {
        self.enable_advanced_logging = enabled;
        self
    }

    fn project_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.project_id)
    }

    pub fn assets_url(&self) -> String {
        format!("{}/assets", self.project_url())
    }

    pub fn asset_url(&self, id: Uuid) -> String {
        format!("{}/assets/{id}", self.project_url())
    }

    pub fn upload_file_url(&self, file_name: &str) -> String {
        format!("{}/files/{file_name}", self.project_url())
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.project_url())
    }

    pub fn item_url(&self, id: Uuid) -> String {
        format!("{}/items/{id}", self.project_url())
    }

    pub fn variants_url(&self, item_id: Uuid) -> String {
        format!("{}/items/{item_id}/variants", self.project_url())
    }
}

/// Identity reported to the service through `SDK_TRACKING_HEADER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkInfo {
    pub name: String,
    pub version: String,
    pub host: String,
}

impl Default for SdkInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            host: "crates.io".to_string(),
        }
    }
}

impl SdkInfo {
    pub fn tracking_header(&self) -> (String, String) {
        (
            SDK_TRACKING_HEADER.to_string(),
            format!("{};{};{}", self.host, self.name, self.version),
        )
    }
}

/// A single extra request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Per-request options, passed through unchanged to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub headers: Vec<Header>,
}

impl QueryConfig {
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }
}
