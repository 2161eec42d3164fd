//! Query operations of the content management API.
//!
//! # Design
//! Each operation only picks a verb, a body and a mapper; everything else is
//! shared through `BaseQueryService`. Operations take fully formed URLs (see
//! `ClientConfig` for builders) so the service itself stays stateless apart
//! from the transport it owns. Futures are lazy: nothing is sent until the
//! returned future is awaited.

use crate::base::{json_body, BaseQueryService};
use crate::config::{ClientConfig, Header, QueryConfig, SdkInfo};
use crate::contracts::{
    AddAssetRequestData, AddContentItemPostContract, UpdateContentItemPostContract,
    UploadBinaryFileRequestData,
};
use crate::elements::{ElementDefinition, VariantElements};
use crate::error::ApiError;
use crate::http::{HttpService, RequestBody};
use crate::mappers;
use crate::responses::{
    AddAssetResponse, AddContentItemResponse, AssetsListResponse, ContentItemsResponse,
    DeleteContentItemResponse, ListLanguageVariantsResponse, UpdateContentItemResponse,
    UploadBinaryFileResponse, ViewAssetResponse, ViewContentItemResponse,
};

#[derive(Debug, Clone)]
pub struct ContentManagementQueryService<H> {
    config: ClientConfig,
    base: BaseQueryService<H>,
}

impl<H: HttpService> ContentManagementQueryService<H> {
    pub fn new(config: ClientConfig, http: H) -> Self {
        Self::with_sdk_info(config, http, SdkInfo::default())
    }

    pub fn with_sdk_info(config: ClientConfig, http: H, sdk_info: SdkInfo) -> Self {
        Self {
            config,
            base: BaseQueryService::new(http, sdk_info),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &H {
        self.base.http()
    }

    pub async fn add_asset(
        &self,
        url: &str,
        data: &AddAssetRequestData,
        config: &QueryConfig,
    ) -> Result<AddAssetResponse, ApiError> {
        let raw = self.base.post_response(url, json_body(data)?, config, &[]).await?;
        Ok(mappers::map_add_asset_response(raw))
    }

    /// Upload raw file content. The transport cannot infer content headers
    /// from a byte payload, so both are attached explicitly.
    pub async fn upload_binary_file(
        &self,
        url: &str,
        data: UploadBinaryFileRequestData,
        config: &QueryConfig,
    ) -> Result<UploadBinaryFileResponse, ApiError> {
        let headers = [
            Header::new("Content-type", &data.content_type),
            Header::new("Content-length", &data.content_length.to_string()),
        ];
        let raw = self
            .base
            .post_response(url, RequestBody::Binary(data.binary_data), config, &headers)
            .await?;
        Ok(mappers::map_upload_binary_file_response(raw))
    }

    pub async fn view_asset(&self, url: &str, config: &QueryConfig) -> Result<ViewAssetResponse, ApiError> {
        let raw = self.base.get_response(url, config).await?;
        Ok(mappers::map_view_asset_response(raw))
    }

    pub async fn list_assets(&self, url: &str, config: &QueryConfig) -> Result<AssetsListResponse, ApiError> {
        let raw = self.base.get_response(url, config).await?;
        Ok(mappers::map_listing_assets_response(raw))
    }

    pub async fn list_content_items(
        &self,
        url: &str,
        config: &QueryConfig,
    ) -> Result<ContentItemsResponse, ApiError> {
        let raw = self.base.get_response(url, config).await?;
        Ok(mappers::map_listing_items_response(raw))
    }

    pub async fn view_content_item(
        &self,
        url: &str,
        config: &QueryConfig,
    ) -> Result<ViewContentItemResponse, ApiError> {
        let raw = self.base.get_response(url, config).await?;
        Ok(mappers::map_view_content_item_response(raw))
    }

    pub async fn add_content_item(
        &self,
        url: &str,
        data: &AddContentItemPostContract,
        config: &QueryConfig,
    ) -> Result<AddContentItemResponse, ApiError> {
        let raw = self.base.post_response(url, json_body(data)?, config, &[]).await?;
        Ok(mappers::map_add_content_item_response(raw))
    }

    pub async fn update_content_item(
        &self,
        url: &str,
        data: &UpdateContentItemPostContract,
        config: &QueryConfig,
    ) -> Result<UpdateContentItemResponse, ApiError> {
        let raw = self.base.put_response(url, json_body(data)?, config).await?;
        Ok(mappers::map_update_content_item_response(raw))
    }

    pub async fn delete_content_item(
        &self,
        url: &str,
        config: &QueryConfig,
    ) -> Result<DeleteContentItemResponse, ApiError> {
        let raw = self.base.delete_response(url, config).await?;
        Ok(mappers::map_delete_content_item_response(raw))
    }

    /// List variants of one item, rebuilding their elements with
    /// `create_elements` according to `field_definitions`.
    pub async fn list_language_variants<E, F>(
        &self,
        url: &str,
        field_definitions: &[ElementDefinition],
        create_elements: F,
        config: &QueryConfig,
    ) -> Result<ListLanguageVariantsResponse<E>, ApiError>
    where
        E: VariantElements,
        F: Fn() -> E,
    {
        let raw = self.base.get_response(url, config).await?;
        mappers::map_language_variants_response(raw, field_definitions, create_elements)
    }
}
