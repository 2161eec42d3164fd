//! Verify query operations against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use std::sync::Mutex;

use async_trait::async_trait;
use content_core::contracts::{
    AddAssetRequestData, AddContentItemPostContract, UpdateContentItemPostContract,
    UploadBinaryFileRequestData,
};
use content_core::{
    resolve_url, ApiError, ClientConfig, ContentItem, ContentManagementQueryService, HttpMethod,
    HttpRequest, HttpResponse, HttpService, Link, QueryConfig, RequestBody, ResolverContext,
    ResolverResult,
};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000/projects/p1";

/// Replays one simulated response and keeps the request it was given.
struct ReplayHttp {
    response: HttpResponse,
    request: Mutex<Option<HttpRequest>>,
}

#[async_trait]
impl HttpService for ReplayHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        *self.request.lock().unwrap() = Some(request);
        Ok(self.response.clone())
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Run the case's operation and summarize its result as JSON.
async fn run_operation(
    svc: &ContentManagementQueryService<ReplayHttp>,
    case: &Value,
) -> Result<Value, ApiError> {
    let url = format!("{BASE_URL}{}", case["url"].as_str().unwrap());
    let input = case["input"].clone();
    let q = QueryConfig::default();

    let summary = match case["operation"].as_str().unwrap() {
        "add_content_item" => {
            let data: AddContentItemPostContract = serde_json::from_value(input).unwrap();
            let r = svc.add_content_item(&url, &data, &q).await?;
            json!({"codename": r.data.codename, "name": r.data.name})
        }
        "update_content_item" => {
            let data: UpdateContentItemPostContract = serde_json::from_value(input).unwrap();
            let r = svc.update_content_item(&url, &data, &q).await?;
            json!({"codename": r.data.codename, "name": r.data.name})
        }
        "view_content_item" => {
            let r = svc.view_content_item(&url, &q).await?;
            json!({"codename": r.data.codename, "name": r.data.name})
        }
        "delete_content_item" => {
            svc.delete_content_item(&url, &q).await?;
            Value::Null
        }
        "list_content_items" => {
            let r = svc.list_content_items(&url, &q).await?;
            json!({"count": r.data.items.len()})
        }
        "upload_binary_file" => {
            let length = input["content_length"].as_u64().unwrap();
            let data = UploadBinaryFileRequestData {
                binary_data: vec![0u8; length as usize],
                content_type: input["content_type"].as_str().unwrap().to_string(),
                content_length: length,
            };
            let r = svc.upload_binary_file(&url, data, &q).await?;
            json!({"id": r.data.id, "type": r.data.reference_type})
        }
        "add_asset" => {
            let data: AddAssetRequestData = serde_json::from_value(input).unwrap();
            let r = svc.add_asset(&url, &data, &q).await?;
            json!({"file_name": r.data.file_name, "size": r.data.size})
        }
        "list_assets" => {
            let r = svc.list_assets(&url, &q).await?;
            json!({"count": r.data.assets.len(), "continuation_token": r.data.pagination.continuation_token})
        }
        "view_asset" => {
            let r = svc.view_asset(&url, &q).await?;
            json!({"file_name": r.data.file_name})
        }
        other => panic!("unknown operation: {other}"),
    };
    Ok(summary)
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["url"].as_str().unwrap()), "{name}: url");

    for h in expected["headers"].as_array().unwrap() {
        let pair = h.as_array().unwrap();
        let (key, value) = (pair[0].as_str().unwrap(), pair[1].as_str().unwrap());
        assert!(
            req.headers.iter().any(|(k, v)| k == key && v == value),
            "{name}: missing header {key}: {value} in {:?}",
            req.headers
        );
    }

    match (&req.body, expected.get("body")) {
        (Some(RequestBody::Json(body)), Some(expected_body)) => {
            let body: Value = serde_json::from_str(body).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");
        }
        (Some(RequestBody::Binary(_)), None) => {}
        (None, None) => {}
        (body, expected_body) => panic!("{name}: body mismatch {body:?} vs {expected_body:?}"),
    }
}

async fn run_vector_file(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let svc = ContentManagementQueryService::new(
            ClientConfig::new("p1").with_base_url("http://localhost:3000/projects"),
            ReplayHttp {
                response: simulated_response(case),
                request: Mutex::new(None),
            },
        );

        let result = run_operation(&svc, case).await;

        let req = svc.http().request.lock().unwrap().take().unwrap();
        check_request(name, &req, &case["expected_request"]);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: result");
        }
    }
}

// ---------------------------------------------------------------------------
// Content items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn item_test_vectors() {
    run_vector_file(include_str!("../../test-vectors/items.json")).await;
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn asset_test_vectors() {
    run_vector_file(include_str!("../../test-vectors/assets.json")).await;
}

// ---------------------------------------------------------------------------
// URL slugs
// ---------------------------------------------------------------------------

#[test]
fn url_slug_test_vectors() {
    let raw = include_str!("../../test-vectors/url_slug.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let item: ContentItem = serde_json::from_value(case["item"].clone()).unwrap();
        let element_value = case["element_value"].as_str().unwrap();
        let output = &case["resolver_output"];

        let result = resolve_url(
            element_value,
            case["element_name"].as_str().unwrap(),
            &item,
            |link: &Link, _: &ResolverContext<'_>| {
                assert_eq!(link.url_slug, element_value, "{name}: slug");
                assert_eq!(link.codename, item.system.codename, "{name}: codename");
                assert_eq!(link.link_id, item.system.id, "{name}: id");
                output.as_object().map(|o| ResolverResult {
                    url: o["url"].as_str().unwrap().to_string(),
                    html: o["html"].as_str().unwrap().to_string(),
                })
            },
            false,
        );

        let expected = &case["expected"];
        assert_eq!(result.url, expected["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(result.html, expected["html"].as_str().unwrap(), "{name}: html");
    }
}
