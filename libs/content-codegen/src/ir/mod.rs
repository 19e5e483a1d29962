//! Intermediate representation for code generation.
//!
//! Naming rules, the per-unit generation context (union-alias and link
//! registries), the finalized per-content-type unit, and the directory the
//! aggregate index is built from.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Derives the Pascal-case type name stem for a content-type or field id.
pub fn type_name_for_id(id: &str) -> String {
    id.to_upper_camel_case()
}

/// Derives the filesystem-safe module stem for a content-type id.
pub fn file_stem_for_id(id: &str) -> String {
    id.to_snake_case()
}

/// Name of the synthesized union alias for a field of a content type.
/// The field name is singularized so `menu.items` yields `MenuItem`.
pub fn union_type_def_name(content_type_id: &str, field_id: &str) -> String {
    format!(
        "{}{}",
        type_name_for_id(content_type_id),
        singularize(&type_name_for_id(field_id))
    )
}

/// Singular form of a Pascal-case word, by suffix rule.
pub(crate) fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{stem}y")
    } else if name.ends_with("ss") || name.ends_with("us") {
        name.to_string()
    } else if let Some(stem) = name.strip_suffix("es") {
        if stem.ends_with('s')
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            stem.to_string()
        } else {
            // the trailing e belongs to the stem: Sides -> Side
            name.strip_suffix('s').unwrap_or(name).to_string()
        }
    } else if let Some(stem) = name.strip_suffix('s') {
        stem.to_string()
    } else {
        name.to_string()
    }
}

/// A synthesized union type alias within one generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionAlias {
    /// Alias name, unique within the unit.
    pub name: String,
    /// Right-hand side of the alias declaration.
    pub definition: String,
}

/// Mutable state accumulated while generating one content type's unit.
///
/// Threaded explicitly through field resolution and accessor synthesis so
/// units can be generated independently of each other. Alias registration is
/// idempotent: resolving the same field twice never creates a duplicate.
#[derive(Debug)]
pub struct UnitContext {
    content_type_id: String,
    type_name: String,
    aliases: Vec<UnionAlias>,
    linked_types: Vec<String>,
}

impl UnitContext {
    pub fn new(content_type_id: &str) -> Self {
        Self {
            content_type_id: content_type_id.to_string(),
            type_name: type_name_for_id(content_type_id),
            aliases: Vec::new(),
            linked_types: Vec::new(),
        }
    }

    /// Pascal-case name stem of the content type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn content_type_id(&self) -> &str {
        &self.content_type_id
    }

    /// Records content-type ids referenced by a link field.
    pub fn register_links<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.linked_types.push(id.to_string());
        }
    }

    /// Adds a union alias unless one with the same name already exists.
    /// Returns whether the alias was inserted.
    pub fn add_alias(&mut self, name: &str, definition: String) -> bool {
        if self.has_alias(name) {
            return false;
        }
        self.aliases.push(UnionAlias {
            name: name.to_string(),
            definition,
        });
        true
    }

    pub fn has_alias(&self, name: &str) -> bool {
        self.aliases.iter().any(|a| a.name == name)
    }

    /// Aliases in discovery order.
    pub fn aliases(&self) -> &[UnionAlias] {
        &self.aliases
    }

    /// Sorted, deduplicated link targets, excluding the content type itself.
    /// Stable across repeated runs on unchanged input.
    pub fn finalize_links(&self) -> Vec<String> {
        let mut links = self.linked_types.clone();
        links.sort();
        links.dedup();
        links.retain(|id| id != &self.content_type_id);
        links
    }
}

/// One finalized per-content-type declaration unit. Never mutated after the
/// writer produces it; consumed by the directory aggregator.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub content_type_id: String,
    /// Module stem the unit is written under (`<file_stem>.ts`).
    pub file_stem: String,
    /// `I<Pascal>Fields`
    pub fields_type_name: String,
    /// `I<Pascal>`
    pub entry_type_name: String,
    /// `<Pascal>`
    pub class_name: String,
    pub union_aliases: Vec<UnionAlias>,
    /// Other content types this unit references, finalized.
    pub linked_types: Vec<String>,
    /// Rendered module source.
    pub code: String,
}

/// One row of the aggregate directory.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub content_type_id: String,
    pub entry_type_name: String,
    pub class_name: String,
}

/// Maps content-type ids to their generated interface and class names, in the
/// order units were generated (schema order). Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    pub fn from_units(units: &[GeneratedUnit]) -> Self {
        Self {
            entries: units
                .iter()
                .map(|unit| DirectoryEntry {
                    content_type_id: unit.content_type_id.clone(),
                    entry_type_name: unit.entry_type_name.clone(),
                    class_name: unit.class_name.clone(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn get(&self, content_type_id: &str) -> Option<&DirectoryEntry> {
        self.entries
            .iter()
            .find(|e| e.content_type_id == content_type_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
