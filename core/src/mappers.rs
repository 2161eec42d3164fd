//! Contract-to-model mapping.
//!
//! # Design
//! Mappers are pure functions over an already-validated `RawResponse`. Field
//! copies cannot fail; only language variants, whose element shapes are
//! declared by the caller, can produce a `Deserialization` error.

use crate::base::RawResponse;
use crate::contracts::{
    AssetDescriptionContract, AssetModelContract, AssetsListingResponseContract,
    ContentItemModelContract, ContentItemsListingResponseContract, FileReferenceContract,
    LanguageVariantContract, PaginationContract, ReferenceContract,
};
use crate::elements::{ElementDefinition, ElementValue, VariantElements};
use crate::error::ApiError;
use crate::models::{
    Asset, AssetDescription, AssetsListing, ContentItemModel, ContentItemsListing, FileReference,
    LanguageVariant, Pagination, Reference,
};
use crate::responses::{
    AddAssetResponse, AddContentItemResponse, AssetsListResponse, ContentItemsResponse,
    ContentManagementResponse, DeleteContentItemResponse, ListLanguageVariantsResponse,
    UpdateContentItemResponse, UploadBinaryFileResponse, ViewAssetResponse, ViewContentItemResponse,
};

fn wrap<TRaw, TData>(raw: RawResponse<TRaw>, map: impl FnOnce(&TRaw) -> TData) -> ContentManagementResponse<TRaw, TData> {
    let data = map(&raw.data);
    ContentManagementResponse {
        debug: raw.debug,
        raw_data: raw.data,
        data,
    }
}

pub fn map_reference(contract: &ReferenceContract) -> Reference {
    Reference {
        id: contract.id,
        codename: contract.codename.clone(),
        external_id: contract.external_id.clone(),
    }
}

fn map_pagination(contract: &PaginationContract) -> Pagination {
    Pagination {
        continuation_token: contract.continuation_token.clone(),
        next_page: contract.next_page.clone(),
    }
}

fn map_file_reference(contract: &FileReferenceContract) -> FileReference {
    FileReference {
        id: contract.id,
        reference_type: contract.reference_type.clone(),
    }
}

fn map_asset_description(contract: &AssetDescriptionContract) -> AssetDescription {
    AssetDescription {
        language: map_reference(&contract.language),
        description: contract.description.clone(),
    }
}

pub fn map_asset(contract: &AssetModelContract) -> Asset {
    Asset {
        id: contract.id,
        file_name: contract.file_name.clone(),
        title: contract.title.clone(),
        size: contract.size,
        asset_type: contract.asset_type.clone(),
        file_reference: map_file_reference(&contract.file_reference),
        descriptions: contract.descriptions.iter().map(map_asset_description).collect(),
        external_id: contract.external_id.clone(),
        last_modified: contract.last_modified,
    }
}

pub fn map_content_item(contract: &ContentItemModelContract) -> ContentItemModel {
    ContentItemModel {
        id: contract.id,
        name: contract.name.clone(),
        codename: contract.codename.clone(),
        item_type: map_reference(&contract.item_type),
        sitemap_locations: contract.sitemap_locations.iter().map(map_reference).collect(),
        external_id: contract.external_id.clone(),
        last_modified: contract.last_modified,
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

pub fn map_add_asset_response(raw: RawResponse<AssetModelContract>) -> AddAssetResponse {
    wrap(raw, map_asset)
}

pub fn map_upload_binary_file_response(raw: RawResponse<FileReferenceContract>) -> UploadBinaryFileResponse {
    wrap(raw, map_file_reference)
}

pub fn map_view_asset_response(raw: RawResponse<AssetModelContract>) -> ViewAssetResponse {
    wrap(raw, map_asset)
}

pub fn map_listing_assets_response(raw: RawResponse<AssetsListingResponseContract>) -> AssetsListResponse {
    wrap(raw, |contract| AssetsListing {
        assets: contract.assets.iter().map(map_asset).collect(),
        pagination: map_pagination(&contract.pagination),
    })
}

// ---------------------------------------------------------------------------
// Content items
// ---------------------------------------------------------------------------

pub fn map_listing_items_response(raw: RawResponse<ContentItemsListingResponseContract>) -> ContentItemsResponse {
    wrap(raw, |contract| ContentItemsListing {
        items: contract.items.iter().map(map_content_item).collect(),
        pagination: map_pagination(&contract.pagination),
    })
}

pub fn map_view_content_item_response(raw: RawResponse<ContentItemModelContract>) -> ViewContentItemResponse {
    wrap(raw, map_content_item)
}

pub fn map_add_content_item_response(raw: RawResponse<ContentItemModelContract>) -> AddContentItemResponse {
    wrap(raw, map_content_item)
}

pub fn map_update_content_item_response(raw: RawResponse<ContentItemModelContract>) -> UpdateContentItemResponse {
    wrap(raw, map_content_item)
}

pub fn map_delete_content_item_response(raw: RawResponse<()>) -> DeleteContentItemResponse {
    wrap(raw, |_| ())
}

/// Rebuild typed variants. `create_elements` is called once per variant;
/// elements missing from the raw variant are left untouched in the container.
pub fn map_language_variants_response<E, F>(
    raw: RawResponse<Vec<LanguageVariantContract>>,
    field_definitions: &[ElementDefinition],
    create_elements: F,
) -> Result<ListLanguageVariantsResponse<E>, ApiError>
where
    E: VariantElements,
    F: Fn() -> E,
{
    let data = raw
        .data
        .iter()
        .map(|variant| map_language_variant(variant, field_definitions, &create_elements))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ContentManagementResponse {
        debug: raw.debug,
        raw_data: raw.data,
        data,
    })
}

fn map_language_variant<E, F>(
    contract: &LanguageVariantContract,
    field_definitions: &[ElementDefinition],
    create_elements: &F,
) -> Result<LanguageVariant<E>, ApiError>
where
    E: VariantElements,
    F: Fn() -> E,
{
    let mut elements = create_elements();
    for definition in field_definitions {
        if let Some(raw) = contract.elements.get(&definition.codename) {
            elements.set_element(definition, ElementValue::decode(definition, raw)?);
        }
    }
    Ok(LanguageVariant {
        item: map_reference(&contract.item),
        language: map_reference(&contract.language),
        last_modified: contract.last_modified,
        elements,
    })
}
