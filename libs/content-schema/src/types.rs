//! Typed model of an exported content-model schema document.
//!
//! The document shape is the standard space export: a `contentTypes` array of
//! content-type definitions, each carrying an id under `sys`, a display name,
//! and an ordered list of field definitions with optional validations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A full schema document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Schema {
    /// All content types, in document order.
    #[serde(default, rename = "contentTypes")]
    pub content_types: Vec<ContentType>,
}

/// One content-type definition. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub sys: ContentTypeSys,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_field: Option<String>,
    /// Field definitions, in schema-declared order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl ContentType {
    /// The stable identifier used for file/type naming and runtime dispatch.
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

/// The `sys` envelope of a content-type definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentTypeSys {
    pub id: String,
}

/// One field of a content type.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Property name within the entry's `fields` object.
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// An omitted field is excluded from the generated shape entirely.
    #[serde(default)]
    pub omitted: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub localized: bool,
    /// Only present when `field_type` is `Link`.
    #[serde(default)]
    pub link_type: Option<LinkType>,
    /// Only present when `field_type` is `Array`.
    #[serde(default)]
    pub items: Option<ItemsDefinition>,
    #[serde(default)]
    pub validations: Vec<Validation>,
}

impl FieldDefinition {
    /// Materializes the `items` descriptor of an Array field as a pseudo-field
    /// carrying this field's id. The item field is never required or omitted
    /// on its own; those flags live on the enclosing Array field.
    pub fn item_field(&self) -> Option<FieldDefinition> {
        self.items.as_ref().map(|items| FieldDefinition {
            id: self.id.clone(),
            name: None,
            field_type: items.item_type,
            required: false,
            omitted: false,
            disabled: false,
            localized: false,
            link_type: items.link_type,
            items: None,
            validations: items.validations.clone(),
        })
    }

    /// First validation constraining this field to a set of literal values.
    pub fn in_validation(&self) -> Option<&[Value]> {
        self.validations
            .iter()
            .filter_map(|v| v.in_values.as_deref())
            .find(|values| !values.is_empty())
    }

    /// First validation constraining a Link field's target content types.
    pub fn link_content_types(&self) -> Option<&[String]> {
        self.validations
            .iter()
            .filter_map(|v| v.link_content_type.as_deref())
            .find(|ids| !ids.is_empty())
    }
}

/// The type tag of a field.
///
/// Unrecognized tags deserialize to `Unknown` so that schemas may evolve
/// ahead of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FieldType {
    Symbol,
    Text,
    Date,
    Integer,
    Number,
    Boolean,
    Location,
    Link,
    Array,
    #[serde(other)]
    Unknown,
}

/// Target kind of a Link field. Anything that is not an Asset link is
/// treated as an entry link downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LinkType {
    Asset,
    Entry,
    #[serde(other)]
    Other,
}

/// Item descriptor of an Array field. A trimmed-down field definition that is
/// re-resolved recursively under the enclosing field's id.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsDefinition {
    #[serde(rename = "type")]
    pub item_type: FieldType,
    #[serde(default)]
    pub link_type: Option<LinkType>,
    #[serde(default)]
    pub validations: Vec<Validation>,
}

/// One validation rule. Only the enumerated-literal constraint (`in`) and the
/// link-target constraint (`linkContentType`) affect generation; everything
/// else is retained untyped.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    #[serde(default, rename = "in")]
    pub in_values: Option<Vec<Value>>,
    #[serde(default)]
    pub link_content_type: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, Value>,
}
