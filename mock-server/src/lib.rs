use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileReference {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub reference_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssetDescription {
    pub language: Reference,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Asset {
    pub id: Uuid,
    pub file_name: String,
    pub title: Option<String>,
    pub size: u64,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub file_reference: FileReference,
    pub descriptions: Vec<AssetDescription>,
    pub external_id: Option<String>,
    pub last_modified: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct AddAsset {
    pub file_reference: FileReference,
    pub title: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<AssetDescription>,
    pub external_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub name: String,
    pub codename: String,
    #[serde(rename = "type")]
    pub item_type: Reference,
    pub sitemap_locations: Vec<Reference>,
    pub external_id: Option<String>,
    pub last_modified: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct AddContentItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: Reference,
    #[serde(default)]
    pub sitemap_locations: Vec<Reference>,
    pub external_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateContentItem {
    pub name: String,
    #[serde(default)]
    pub sitemap_locations: Vec<Reference>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageVariant {
    pub item: Reference,
    pub language: Reference,
    pub last_modified: DateTime<Utc>,
    pub elements: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct UpsertVariant {
    pub elements: Map<String, Value>,
}

#[derive(Serialize)]
pub struct Pagination {
    pub continuation_token: Option<String>,
    pub next_page: Option<String>,
}

const LAST_PAGE: Pagination = Pagination {
    continuation_token: None,
    next_page: None,
};

#[derive(Serialize)]
pub struct AssetListing {
    pub assets: Vec<Asset>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct ItemListing {
    pub items: Vec<ContentItem>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug)]
struct StoredFile {
    file_name: String,
    content_type: String,
    size: u64,
}

#[derive(Default)]
pub struct Store {
    files: HashMap<Uuid, StoredFile>,
    assets: HashMap<Uuid, Asset>,
    items: HashMap<Uuid, ContentItem>,
    variants: HashMap<(Uuid, Uuid), LanguageVariant>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/projects/{project_id}/files/{file_name}", post(upload_file))
        .route("/projects/{project_id}/assets", get(list_assets).post(add_asset))
        .route("/projects/{project_id}/assets/{id}", get(view_asset))
        .route("/projects/{project_id}/items", get(list_items).post(add_item))
        .route(
            "/projects/{project_id}/items/{id}",
            get(view_item).put(update_item).delete(delete_item),
        )
        .route("/projects/{project_id}/items/{id}/variants", get(list_variants))
        .route(
            "/projects/{project_id}/items/{id}/variants/{language_id}",
            put(upsert_variant),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn codename_of(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

// --- files & assets ---

async fn upload_file(
    State(db): State<Db>,
    Path((_project_id, file_name)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<FileReference>, StatusCode> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::BAD_REQUEST)?
        .to_string();
    let id = Uuid::new_v4();
    info!(%file_name, %content_type, size = body.len(), "stored file");
    db.write().await.files.insert(
        id,
        StoredFile {
            file_name,
            content_type,
            size: body.len() as u64,
        },
    );
    Ok(Json(FileReference {
        id,
        reference_type: "internal".to_string(),
    }))
}

async fn add_asset(
    State(db): State<Db>,
    Path(_project_id): Path<String>,
    Json(input): Json<AddAsset>,
) -> Result<(StatusCode, Json<Asset>), (StatusCode, String)> {
    let mut store = db.write().await;
    let file = store.files.get(&input.file_reference.id).cloned().ok_or((
        StatusCode::BAD_REQUEST,
        format!("file {} was not uploaded", input.file_reference.id),
    ))?;
    let asset = Asset {
        id: Uuid::new_v4(),
        file_name: file.file_name,
        title: input.title,
        size: file.size,
        asset_type: file.content_type,
        file_reference: input.file_reference,
        descriptions: input.descriptions,
        external_id: input.external_id,
        last_modified: Utc::now(),
    };
    store.assets.insert(asset.id, asset.clone());
    Ok((StatusCode::CREATED, Json(asset)))
}

async fn view_asset(
    State(db): State<Db>,
    Path((_project_id, id)): Path<(String, Uuid)>,
) -> Result<Json<Asset>, StatusCode> {
    let store = db.read().await;
    store.assets.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_assets(State(db): State<Db>, Path(_project_id): Path<String>) -> Json<AssetListing> {
    let store = db.read().await;
    Json(AssetListing {
        assets: store.assets.values().cloned().collect(),
        pagination: LAST_PAGE,
    })
}

// --- content items ---

async fn list_items(State(db): State<Db>, Path(_project_id): Path<String>) -> Json<ItemListing> {
    let store = db.read().await;
    Json(ItemListing {
        items: store.items.values().cloned().collect(),
        pagination: LAST_PAGE,
    })
}

async fn add_item(
    State(db): State<Db>,
    Path(_project_id): Path<String>,
    Json(input): Json<AddContentItem>,
) -> (StatusCode, Json<ContentItem>) {
    let item = ContentItem {
        id: Uuid::new_v4(),
        codename: codename_of(&input.name),
        name: input.name,
        item_type: input.item_type,
        sitemap_locations: input.sitemap_locations,
        external_id: input.external_id,
        last_modified: Utc::now(),
    };
    db.write().await.items.insert(item.id, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn view_item(
    State(db): State<Db>,
    Path((_project_id, id)): Path<(String, Uuid)>,
) -> Result<Json<ContentItem>, StatusCode> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path((_project_id, id)): Path<(String, Uuid)>,
    Json(input): Json<UpdateContentItem>,
) -> Result<Json<ContentItem>, StatusCode> {
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    item.name = input.name;
    item.sitemap_locations = input.sitemap_locations;
    item.last_modified = Utc::now();
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path((_project_id, id)): Path<(String, Uuid)>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.items.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    store.variants.retain(|(item_id, _), _| *item_id != id);
    Ok(StatusCode::NO_CONTENT)
}

// --- language variants ---

async fn list_variants(
    State(db): State<Db>,
    Path((_project_id, id)): Path<(String, Uuid)>,
) -> Result<Json<Vec<LanguageVariant>>, StatusCode> {
    let store = db.read().await;
    if !store.items.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut variants: Vec<LanguageVariant> = store
        .variants
        .iter()
        .filter(|((item_id, _), _)| *item_id == id)
        .map(|(_, variant)| variant.clone())
        .collect();
    variants.sort_by_key(|v| v.language.id);
    Ok(Json(variants))
}

async fn upsert_variant(
    State(db): State<Db>,
    Path((_project_id, id, language_id)): Path<(String, Uuid, Uuid)>,
    Json(input): Json<UpsertVariant>,
) -> Result<Json<LanguageVariant>, StatusCode> {
    let mut store = db.write().await;
    if !store.items.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let variant = LanguageVariant {
        item: Reference {
            id: Some(id),
            ..Reference::default()
        },
        language: Reference {
            id: Some(language_id),
            ..Reference::default()
        },
        last_modified: Utc::now(),
        elements: input.elements,
    };
    store.variants.insert((id, language_id), variant.clone());
    Ok(Json(variant))
}
