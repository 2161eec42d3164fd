//! Client SDK for the content management API.
//!
//! # Overview
//! `ContentManagementQueryService` wraps each API endpoint as an async
//! operation that builds a request, sends it through an `HttpService`, and
//! maps the raw contract into typed models. `resolver` turns URL slug
//! elements of delivered content items into application URLs through a
//! caller-supplied function.
//!
//! # Design
//! - The network sits behind the `HttpService` trait; `ReqwestHttpService`
//!   is the stock implementation and tests use recording fakes.
//! - Request building (`base::build_request`) and response parsing
//!   (`base::parse_raw`) are pure, so the I/O boundary stays explicit.
//! - Transport errors are returned to the caller untouched; no retries.
//! - Wire contracts (`contracts`) and caller-facing models (`models`) are
//!   separate types joined by the pure functions in `mappers`.

pub mod base;
pub mod client;
pub mod config;
pub mod contracts;
pub mod elements;
pub mod error;
pub mod http;
pub mod mappers;
pub mod models;
pub mod resolver;
pub mod responses;

pub use client::ContentManagementQueryService;
pub use config::{ClientConfig, Header, QueryConfig, SdkInfo};
pub use elements::{DynamicElements, ElementDefinition, ElementType, ElementValue, VariantElements};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpService, ReqwestHttpService, RequestBody};
pub use resolver::{
    resolve_rich_text_link, resolve_url, ContentItem, ContentItemSystem, Link, ResolverContext,
    ResolverResult, UrlSlugResolver,
};
