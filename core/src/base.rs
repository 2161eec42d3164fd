//! Shared request/response plumbing behind every query operation.
//!
//! # Design
//! `build_request` is pure: it turns verb, URL, body and per-query config
//! into an `HttpRequest` without touching the network. `parse_raw` is pure
//! too: it checks the status and deserializes the raw contract. The async
//! helpers in between only hand the request to the `HttpService` and return
//! its error untouched if the round-trip itself fails.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{Header, QueryConfig, SdkInfo};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpService, RequestBody};
use crate::responses::ResponseDebug;

/// Raw contract plus the response metadata it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse<T> {
    pub debug: ResponseDebug,
    pub data: T,
}

/// Serialize a JSON request payload.
pub fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Assemble a request. Header order: SDK tracking header, JSON content type
/// (JSON bodies only), query config headers, then `extra_headers`.
pub fn build_request(
    sdk_info: &SdkInfo,
    method: HttpMethod,
    url: &str,
    body: Option<RequestBody>,
    config: &QueryConfig,
    extra_headers: &[Header],
) -> HttpRequest {
    let mut headers = vec![sdk_info.tracking_header()];
    if matches!(body, Some(RequestBody::Json(_))) {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }
    headers.extend(
        config
            .headers
            .iter()
            .chain(extra_headers)
            .map(|h| (h.name.clone(), h.value.clone())),
    );

    HttpRequest {
        method,
        url: url.to_string(),
        headers,
        body,
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    debug!(status = response.status, "request failed");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Validate the status and deserialize the body. An empty body reads as
/// JSON `null`, which is what `()` contracts expect.
pub fn parse_raw<T: DeserializeOwned>(response: HttpResponse) -> Result<RawResponse<T>, ApiError> {
    check_status(&response)?;
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    let data = serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(RawResponse {
        debug: ResponseDebug {
            status: response.status,
            headers: response.headers,
        },
        data,
    })
}

/// Verb helpers shared by all query operations.
#[derive(Debug, Clone)]
pub struct BaseQueryService<H> {
    http: H,
    sdk_info: SdkInfo,
}

impl<H: HttpService> BaseQueryService<H> {
    pub fn new(http: H, sdk_info: SdkInfo) -> Self {
        Self { http, sdk_info }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub async fn get_response<T: DeserializeOwned>(
        &self,
        url: &str,
        config: &QueryConfig,
    ) -> Result<RawResponse<T>, ApiError> {
        self.send(HttpMethod::Get, url, None, config, &[]).await
    }

    pub async fn post_response<T: DeserializeOwned>(
        &self,
        url: &str,
        body: RequestBody,
        config: &QueryConfig,
        extra_headers: &[Header],
    ) -> Result<RawResponse<T>, ApiError> {
        self.send(HttpMethod::Post, url, Some(body), config, extra_headers).await
    }

    pub async fn put_response<T: DeserializeOwned>(
        &self,
        url: &str,
        body: RequestBody,
        config: &QueryConfig,
    ) -> Result<RawResponse<T>, ApiError> {
        self.send(HttpMethod::Put, url, Some(body), config, &[]).await
    }

    pub async fn delete_response<T: DeserializeOwned>(
        &self,
        url: &str,
        config: &QueryConfig,
    ) -> Result<RawResponse<T>, ApiError> {
        self.send(HttpMethod::Delete, url, None, config, &[]).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<RequestBody>,
        config: &QueryConfig,
        extra_headers: &[Header],
    ) -> Result<RawResponse<T>, ApiError> {
        let request = build_request(&self.sdk_info, method, url, body, config, extra_headers);
        debug!(method = method.as_str(), url, "sending request");
        let response = self.http.send(request).await?;
        parse_raw(response)
    }
}
