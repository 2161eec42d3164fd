//! Typed responses returned by the query service.
//!
//! Every response keeps the raw contract next to the mapped data so callers
//! can reach fields the models do not expose.

use crate::contracts::{
    AddAssetResponseContract, AddContentItemResponseContract, AssetModelContract,
    AssetsListingResponseContract, ContentItemsListingResponseContract,
    DeleteContentItemResponseContract, ListLanguageVariantsResponseContract,
    UpdateContentItemResponseContract, UploadBinaryFileResponseContract,
    ViewContentItemResponseContract,
};
use crate::models::{Asset, AssetsListing, ContentItemModel, ContentItemsListing, FileReference, LanguageVariant};

/// Status and headers of the response the data was mapped from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDebug {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentManagementResponse<TRaw, TData> {
    pub debug: ResponseDebug,
    pub raw_data: TRaw,
    pub data: TData,
}

pub type AddAssetResponse = ContentManagementResponse<AddAssetResponseContract, Asset>;
pub type UploadBinaryFileResponse = ContentManagementResponse<UploadBinaryFileResponseContract, FileReference>;
pub type ViewAssetResponse = ContentManagementResponse<AssetModelContract, Asset>;
pub type AssetsListResponse = ContentManagementResponse<AssetsListingResponseContract, AssetsListing>;

pub type ContentItemsResponse = ContentManagementResponse<ContentItemsListingResponseContract, ContentItemsListing>;
pub type ViewContentItemResponse = ContentManagementResponse<ViewContentItemResponseContract, ContentItemModel>;
pub type AddContentItemResponse = ContentManagementResponse<AddContentItemResponseContract, ContentItemModel>;
pub type UpdateContentItemResponse = ContentManagementResponse<UpdateContentItemResponseContract, ContentItemModel>;
pub type DeleteContentItemResponse = ContentManagementResponse<DeleteContentItemResponseContract, ()>;
pub type ListLanguageVariantsResponse<E> =
    ContentManagementResponse<ListLanguageVariantsResponseContract, Vec<LanguageVariant<E>>>;
