//! Warnings for unresolved URL slugs, observed through a `tracing` layer.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use content_core::{
    resolve_rich_text_link, resolve_url, ContentItem, ContentItemSystem, Link, ResolverContext,
    ResolverResult, UrlSlugResolver,
};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
struct LogCollector {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCollector {
    fn snapshot(&self) -> Vec<CapturedEvent> {
        self.events.lock().expect("log collector lock").clone()
    }
}

impl<S> tracing_subscriber::Layer<S> for LogCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor { fields: &mut fields });
        self.events.lock().expect("log collector lock").push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

struct FieldVisitor<'a> {
    fields: &'a mut BTreeMap<String, String>,
}

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        self.fields.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }
}

/// Run `f` with a collector installed and return the captured warnings.
fn capture_warnings(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let collector = LogCollector::default();
    let subscriber = tracing_subscriber::registry().with(collector.clone());
    tracing::subscriber::with_default(subscriber, f);
    collector
        .snapshot()
        .into_iter()
        .filter(|e| e.level == tracing::Level::WARN)
        .collect()
}

fn home_item() -> ContentItem {
    ContentItem {
        system: ContentItemSystem {
            id: "abc-1".to_string(),
            codename: "home".to_string(),
            item_type: "page".to_string(),
            ..ContentItemSystem::default()
        },
        elements: BTreeMap::new(),
    }
}

fn unresolved(_: &Link, _: &ResolverContext<'_>) -> Option<ResolverResult> {
    None
}

#[test]
fn unresolved_slug_warns_when_logging_enabled() {
    let item = home_item();
    let mut result = None;
    let warnings = capture_warnings(|| {
        result = Some(resolve_url("home-page", "url_slug", &item, unresolved, true));
    });

    assert_eq!(result, Some(ResolverResult::default()));
    assert_eq!(warnings.len(), 1, "got {warnings:#?}");
    let fields = &warnings[0].fields;
    assert_eq!(fields["codename"], "home");
    assert_eq!(fields["item_type"], "page");
    assert_eq!(fields["element"], "url_slug");
    let message = &fields["message"];
    assert!(message.contains("'home'"), "{message}");
    assert!(message.contains("'page'"), "{message}");
    assert!(message.contains("'url_slug'"), "{message}");
}

#[test]
fn unresolved_slug_is_silent_when_logging_disabled() {
    let item = home_item();
    let warnings = capture_warnings(|| {
        let result = resolve_url("home-page", "url_slug", &item, unresolved, false);
        assert_eq!(result, ResolverResult::default());
    });
    assert!(warnings.is_empty(), "got {warnings:#?}");
}

#[test]
fn resolved_slug_never_warns() {
    let item = home_item();
    let warnings = capture_warnings(|| {
        let result = resolve_url(
            "home-page",
            "url_slug",
            &item,
            |link: &Link, _: &ResolverContext<'_>| Some(ResolverResult::url(&format!("/en/{}", link.url_slug))),
            true,
        );
        assert_eq!(result.url, "/en/home-page");
    });
    assert!(warnings.is_empty(), "got {warnings:#?}");
}

#[test]
fn unresolved_rich_text_link_names_link_id() {
    let item = home_item();
    let warnings = capture_warnings(|| {
        resolve_rich_text_link("link-7", "Read more", "home-page", &item, unresolved, true);
    });
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].fields["link_id"], "link-7");
}

#[test]
fn configured_resolver_uses_its_logging_flag() {
    let item = home_item();
    let quiet = UrlSlugResolver::new(unresolved, false);
    let loud = UrlSlugResolver::new(unresolved, true);

    let warnings = capture_warnings(|| {
        quiet.resolve_element(&item, "url_slug");
        loud.resolve_element(&item, "url_slug");
    });
    assert_eq!(warnings.len(), 1);
}
