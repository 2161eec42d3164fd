//! URL slug resolution for content items.
//!
//! # Design
//! Applications decide what a content item's URL looks like, so resolution
//! is delegated to a caller-supplied function. This module only builds the
//! `Link` and `ResolverContext` the function needs and turns a missing
//! answer into an empty `ResolverResult`. A single unresolved element must
//! not abort processing of a whole content tree, so nothing here fails.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// System attributes identifying a delivered content item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItemSystem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub codename: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sitemap_locations: Vec<String>,
}

/// A delivered content item: system attributes plus raw element values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub system: ContentItemSystem,
    #[serde(default)]
    pub elements: BTreeMap<String, serde_json::Value>,
}

/// Identity of the linked item, handed to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url_slug: String,
    pub item_type: String,
    pub codename: String,
    pub link_id: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolverContext<'a> {
    pub item: &'a ContentItem,
    /// Set only for links inside rich text elements.
    pub link_id: Option<&'a str>,
    /// Set only for links inside rich text elements.
    pub link_text: Option<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverResult {
    pub url: String,
    pub html: String,
}

impl ResolverResult {
    pub fn url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            html: String::new(),
        }
    }
}

/// Resolve a URL slug element value of `item`.
///
/// `resolver` returning `None` yields an empty result, with a warning when
/// `enable_advanced_logging` is set. A `Some` result is returned as is, even
/// if its fields are empty.
pub fn resolve_url<F>(
    element_value: &str,
    element_name: &str,
    item: &ContentItem,
    resolver: F,
    enable_advanced_logging: bool,
) -> ResolverResult
where
    F: Fn(&Link, &ResolverContext<'_>) -> Option<ResolverResult>,
{
    let link = item_link(element_value, item);
    let context = ResolverContext {
        item,
        link_id: None,
        link_text: None,
    };

    match resolver(&link, &context) {
        Some(result) => result,
        None => {
            if enable_advanced_logging {
                warn!(
                    codename = %item.system.codename,
                    item_type = %item.system.item_type,
                    element = element_name,
                    "url slug resolver returned no url for '{}' item of '{}' type in element '{}'; \
                     disable advanced logging to silence this warning",
                    item.system.codename,
                    item.system.item_type,
                    element_name,
                );
            }
            ResolverResult::default()
        }
    }
}

/// Resolve a link found inside a rich text element. Same contract as
/// `resolve_url`, but the context carries the link id and text.
pub fn resolve_rich_text_link<F>(
    link_id: &str,
    link_text: &str,
    url_slug: &str,
    item: &ContentItem,
    resolver: F,
    enable_advanced_logging: bool,
) -> ResolverResult
where
    F: Fn(&Link, &ResolverContext<'_>) -> Option<ResolverResult>,
{
    let link = item_link(url_slug, item);
    let context = ResolverContext {
        item,
        link_id: Some(link_id),
        link_text: Some(link_text),
    };

    match resolver(&link, &context) {
        Some(result) => result,
        None => {
            if enable_advanced_logging {
                warn!(
                    codename = %item.system.codename,
                    item_type = %item.system.item_type,
                    link_id,
                    "url resolved for rich text link '{}' to '{}' item of '{}' type is undefined",
                    link_id,
                    item.system.codename,
                    item.system.item_type,
                );
            }
            ResolverResult::default()
        }
    }
}

fn item_link(url_slug: &str, item: &ContentItem) -> Link {
    Link {
        url_slug: url_slug.to_string(),
        item_type: item.system.item_type.clone(),
        codename: item.system.codename.clone(),
        link_id: item.system.id.clone(),
    }
}

type BoxedResolver = Box<dyn Fn(&Link, &ResolverContext<'_>) -> Option<ResolverResult> + Send + Sync>;

/// A resolver function configured once and applied to many elements.
pub struct UrlSlugResolver {
    resolver: BoxedResolver,
    enable_advanced_logging: bool,
}

impl fmt::Debug for UrlSlugResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSlugResolver")
            .field("enable_advanced_logging", &self.enable_advanced_logging)
            .finish_non_exhaustive()
    }
}

impl UrlSlugResolver {
    pub fn new<F>(resolver: F, enable_advanced_logging: bool) -> Self
    where
        F: Fn(&Link, &ResolverContext<'_>) -> Option<ResolverResult> + Send + Sync + 'static,
    {
        Self {
            resolver: Box::new(resolver),
            enable_advanced_logging,
        }
    }

    pub fn resolve(&self, element_value: &str, element_name: &str, item: &ContentItem) -> ResolverResult {
        resolve_url(
            element_value,
            element_name,
            item,
            &self.resolver,
            self.enable_advanced_logging,
        )
    }

    /// Resolve the slug stored in `item.elements[element_name]`. The element
    /// may be a bare string or an object with a string `value`; anything else
    /// resolves as an empty slug.
    pub fn resolve_element(&self, item: &ContentItem, element_name: &str) -> ResolverResult {
        let slug = item
            .elements
            .get(element_name)
            .and_then(|element| element.as_str().or_else(|| element.get("value")?.as_str()))
            .unwrap_or_default();
        self.resolve(slug, element_name, item)
    }
}
