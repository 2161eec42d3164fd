//! Element definitions and values for language variants.
//!
//! # Design
//! Variant elements are shaped by each project's content model, so the SDK
//! cannot know them statically. Callers describe the elements they care
//! about with `ElementDefinition`s and provide a container implementing
//! `VariantElements`; the mapper decodes each raw element according to its
//! declared type and hands it to the container. `DynamicElements` is a
//! ready-made container for callers that do not want a dedicated struct.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::contracts::ReferenceContract;
use crate::error::ApiError;
use crate::mappers::map_reference;
use crate::models::Reference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Text,
    RichText,
    Number,
    DateTime,
    MultipleChoice,
    Asset,
    ModularContent,
    Taxonomy,
    UrlSlug,
    Guidelines,
    Custom,
}

/// Describes one element of a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDefinition {
    /// Element codename as used on the wire.
    pub codename: String,
    /// Name under which the container stores the element.
    pub property_name: String,
    pub element_type: ElementType,
}

impl ElementDefinition {
    pub fn new(codename: &str, property_name: &str, element_type: ElementType) -> Self {
        Self {
            codename: codename.to_string(),
            property_name: property_name.to_string(),
            element_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    Text(Option<String>),
    RichText(Option<String>),
    Number(Option<f64>),
    DateTime(Option<DateTime<Utc>>),
    MultipleChoice(Vec<Reference>),
    Asset(Vec<Reference>),
    ModularContent(Vec<Reference>),
    Taxonomy(Vec<Reference>),
    UrlSlug(Option<String>),
    Custom(Option<String>),
    Guidelines,
}

impl ElementValue {
    /// Decode a raw element according to its declared type.
    pub fn decode(definition: &ElementDefinition, raw: &serde_json::Value) -> Result<Self, ApiError> {
        let value = match definition.element_type {
            ElementType::Text => ElementValue::Text(decode_as(definition, raw)?),
            ElementType::RichText => ElementValue::RichText(decode_as(definition, raw)?),
            ElementType::Number => ElementValue::Number(decode_as(definition, raw)?),
            ElementType::DateTime => ElementValue::DateTime(decode_as(definition, raw)?),
            ElementType::MultipleChoice => ElementValue::MultipleChoice(decode_references(definition, raw)?),
            ElementType::Asset => ElementValue::Asset(decode_references(definition, raw)?),
            ElementType::ModularContent => ElementValue::ModularContent(decode_references(definition, raw)?),
            ElementType::Taxonomy => ElementValue::Taxonomy(decode_references(definition, raw)?),
            ElementType::UrlSlug => ElementValue::UrlSlug(decode_as(definition, raw)?),
            ElementType::Custom => ElementValue::Custom(decode_as(definition, raw)?),
            ElementType::Guidelines => ElementValue::Guidelines,
        };
        Ok(value)
    }
}

fn decode_as<T: DeserializeOwned>(definition: &ElementDefinition, raw: &serde_json::Value) -> Result<T, ApiError> {
    T::deserialize(raw).map_err(|e| {
        ApiError::Deserialization(format!("element '{}': {e}", definition.codename))
    })
}

fn decode_references(definition: &ElementDefinition, raw: &serde_json::Value) -> Result<Vec<Reference>, ApiError> {
    let references: Option<Vec<ReferenceContract>> = decode_as(definition, raw)?;
    Ok(references.unwrap_or_default().iter().map(map_reference).collect())
}

/// Container that receives decoded element values.
pub trait VariantElements {
    fn set_element(&mut self, definition: &ElementDefinition, value: ElementValue);
}

/// Elements stored by property name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicElements {
    values: BTreeMap<String, ElementValue>,
}

impl DynamicElements {
    pub fn get(&self, property_name: &str) -> Option<&ElementValue> {
        self.values.get(property_name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariantElements for DynamicElements {
    fn set_element(&mut self, definition: &ElementDefinition, value: ElementValue) {
        self.values.insert(definition.property_name.clone(), value);
    }
}
