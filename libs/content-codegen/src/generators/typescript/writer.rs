//! Per-content-type declaration unit writer.
//!
//! Walks one content type's field definitions and produces a self-contained
//! TypeScript module: synthesized union aliases, the fields interface, the
//! entry interface, a type-guard predicate, and a wrapper class whose
//! accessors unwrap and re-wrap link fields.

use std::collections::BTreeSet;

use heck::ToSnakeCase;
use quill_schema::{ContentType, FieldDefinition, FieldType, LinkType};
use serde_json::Value;

use crate::error::{CodegenError, Result};
use crate::generators::GeneratorConfig;
use crate::ir::{file_stem_for_id, type_name_for_id, union_type_def_name, GeneratedUnit, UnitContext};

/// A synthesized accessor: name, exposed type, and body statement lines
/// (relative to the accessor's own indentation).
struct Accessor {
    name: String,
    return_type: String,
    body: Vec<String>,
}

pub struct ContentTypeWriter<'a> {
    content_type: &'a ContentType,
    config: &'a GeneratorConfig,
    ctx: UnitContext,
    /// Named imports needed from the base module, in ASCII order.
    base_imports: BTreeSet<&'static str>,
    uses_wrap: bool,
}

impl<'a> ContentTypeWriter<'a> {
    pub fn new(content_type: &'a ContentType, config: &'a GeneratorConfig) -> Self {
        Self {
            content_type,
            config,
            ctx: UnitContext::new(content_type.id()),
            // the class, entry interface, and guard always need these
            base_imports: BTreeSet::from(["Entry", "IEntry"]),
            uses_wrap: false,
        }
    }

    /// Generates the full declaration unit for this content type.
    pub fn write(mut self) -> Result<GeneratedUnit> {
        let content_type = self.content_type;
        if content_type.id().is_empty() {
            return Err(CodegenError::MalformedContentType {
                id: content_type.name.clone(),
                reason: "content type has an empty id".to_string(),
            });
        }

        let name = self.ctx.type_name().to_string();
        let fields_type_name = format!("I{name}Fields");
        let entry_type_name = format!("I{name}");
        let class_name = name;

        // Field shapes first, in schema-declared order. Union aliases and
        // link targets are registered as they are discovered.
        let field_shapes: Vec<(String, bool, String)> = content_type
            .fields
            .iter()
            .map(|f| {
                let optional = f.omitted || !f.required;
                let ty = self.field_type(f);
                (f.id.clone(), optional, ty)
            })
            .collect();

        // Accessors for every non-omitted field, after the field pass so the
        // union aliases an accessor refers to already exist.
        let mut accessors = Vec::new();
        for f in &content_type.fields {
            if f.omitted {
                continue;
            }
            self.field_accessors(f, &mut accessors);
        }

        let mut code = String::new();
        self.write_imports(&mut code);

        for alias in self.ctx.aliases() {
            code.push_str(&format!("export type {} = {}\n\n", alias.name, alias.definition));
        }

        code.push_str(&format!("export interface {fields_type_name} {{\n"));
        for (id, optional, ty) in &field_shapes {
            let marker = if *optional { "?" } else { "" };
            code.push_str(&format!("  {id}{marker}: {ty}\n"));
        }
        code.push_str("}\n\n");

        if self.config.generate_docs {
            code.push_str("/**\n");
            code.push_str(&format!(" * {}\n", content_type.name));
            if let Some(description) = content_type
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
            {
                code.push_str(" *\n");
                code.push_str(&format!(" * {description}\n"));
            }
            code.push_str(" */\n");
        }
        code.push_str(&format!(
            "export interface {entry_type_name} extends IEntry<{fields_type_name}> {{\n}}\n\n"
        ));

        self.write_guard(&mut code, &class_name, &entry_type_name);

        code.push_str(&format!(
            "export class {class_name} extends Entry<{fields_type_name}> implements {entry_type_name} {{\n"
        ));
        for accessor in &accessors {
            code.push_str(&format!(
                "  get {}(): {} {{\n",
                accessor.name, accessor.return_type
            ));
            for line in &accessor.body {
                code.push_str(&format!("    {line}\n"));
            }
            code.push_str("  }\n\n");
        }
        code.push_str(&format!("  constructor(entry: {entry_type_name})\n"));
        code.push_str(&format!("  constructor(id: string, fields: {fields_type_name})\n"));
        code.push_str(&format!(
            "  constructor(entryOrId: {entry_type_name} | string, fields?: {fields_type_name}) {{\n"
        ));
        code.push_str(&format!("    super(entryOrId, '{}', fields)\n", content_type.id()));
        code.push_str("  }\n");
        code.push_str("}\n");

        Ok(GeneratedUnit {
            content_type_id: content_type.id().to_string(),
            file_stem: file_stem_for_id(content_type.id()),
            fields_type_name,
            entry_type_name,
            class_name,
            union_aliases: self.ctx.aliases().to_vec(),
            linked_types: self.ctx.finalize_links(),
            code,
        })
    }

    fn write_imports(&self, code: &mut String) {
        let names: Vec<&str> = self.base_imports.iter().copied().collect();
        code.push_str(&format!("import {{ {} }} from '../base'\n", names.join(", ")));
        if self.uses_wrap {
            code.push_str("import { wrap } from '.'\n");
        }
        for id in self.ctx.finalize_links() {
            let name = type_name_for_id(&id);
            code.push_str(&format!(
                "import {{ I{name}, {name} }} from './{}'\n",
                file_stem_for_id(&id)
            ));
        }
        code.push('\n');
    }

    fn write_guard(&self, code: &mut String, class_name: &str, entry_type_name: &str) {
        code.push_str(&format!(
            "export function is{class_name}(entry: IEntry<any>): entry is {entry_type_name} {{\n"
        ));
        code.push_str("  return entry &&\n");
        code.push_str("    entry.sys &&\n");
        code.push_str("    entry.sys.contentType &&\n");
        code.push_str("    entry.sys.contentType.sys &&\n");
        code.push_str(&format!(
            "    entry.sys.contentType.sys.id == '{}'\n",
            self.content_type.id()
        ));
        code.push_str("}\n\n");
    }

    /// Derives the serialized TypeScript type of one field. Registers any
    /// union aliases and link targets it discovers; registration is
    /// idempotent, so re-resolving a field is safe.
    fn field_type(&mut self, field: &FieldDefinition) -> String {
        if field.omitted {
            return "never".to_string();
        }
        match field.field_type {
            FieldType::Symbol | FieldType::Text | FieldType::Date => self
                .enum_union_type(field)
                .unwrap_or_else(|| "string".to_string()),
            FieldType::Integer | FieldType::Number => self
                .enum_union_type(field)
                .unwrap_or_else(|| "number".to_string()),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::Location => "{ lon: number, lat: number }".to_string(),
            FieldType::Link => {
                self.base_imports.insert("ILink");
                if field.link_type == Some(LinkType::Asset) {
                    self.base_imports.insert("IAsset");
                    "ILink<'Asset'> | IAsset".to_string()
                } else {
                    let target = self.resolve_link_content_type(field);
                    format!("ILink<'Entry'> | {target}")
                }
            }
            FieldType::Array => {
                let item_type = match field.item_field() {
                    Some(item) => self.field_type(&item),
                    None => "any".to_string(),
                };
                if item_type.contains(" | ") || item_type.contains('{') {
                    format!("Array<{item_type}>")
                } else {
                    format!("{item_type}[]")
                }
            }
            FieldType::Unknown => "any".to_string(),
        }
    }

    /// Synthesizes/reuses a union-of-literals alias for an `in` validation.
    fn enum_union_type(&mut self, field: &FieldDefinition) -> Option<String> {
        let values = field.in_validation()?;
        let name = union_type_def_name(self.content_type.id(), &field.id);
        if !self.ctx.has_alias(&name) {
            let definition = values
                .iter()
                .map(ts_literal)
                .collect::<Vec<_>>()
                .join(" | ");
            self.ctx.add_alias(&name, definition);
        }
        Some(name)
    }

    /// Resolves the entry shape an entry link points at, based on the first
    /// `linkContentType` validation. Multi-target constraints synthesize a
    /// pair of aliases: one over entry interfaces, one over wrapper classes.
    fn resolve_link_content_type(&mut self, field: &FieldDefinition) -> String {
        let Some(targets) = field.link_content_types() else {
            return "IEntry<any>".to_string();
        };
        self.ctx.register_links(targets.iter().map(String::as_str));

        if let [target] = targets {
            return format!("I{}", type_name_for_id(target));
        }

        let union_name = union_type_def_name(self.content_type.id(), &field.id);
        if !self.ctx.has_alias(&union_name) {
            let interfaces = targets
                .iter()
                .map(|t| format!("I{}", type_name_for_id(t)))
                .collect::<Vec<_>>()
                .join(" | ");
            self.ctx.add_alias(&union_name, interfaces);

            let classes = targets
                .iter()
                .map(|t| type_name_for_id(t))
                .collect::<Vec<_>>()
                .join(" | ");
            self.ctx.add_alias(&format!("{union_name}Class"), classes);
        }
        union_name
    }

    /// Synthesizes the accessor(s) for one non-omitted field: the primary
    /// accessor, plus an independent snake_case duplicate whenever that
    /// spelling differs from the primary name.
    fn field_accessors(&mut self, field: &FieldDefinition, out: &mut Vec<Accessor>) {
        let (return_type, body) = self.synthesize(field);

        // `fields` and `sys` are reserved by the entry envelope
        let primary = if field.id == "fields" || field.id == "sys" {
            format!("{}_get", field.id)
        } else {
            field.id.clone()
        };
        let underscored = primary.to_snake_case();

        out.push(Accessor {
            name: primary.clone(),
            return_type: return_type.clone(),
            body: body.clone(),
        });
        if underscored != primary {
            out.push(Accessor {
                name: underscored,
                return_type,
                body,
            });
        }
    }

    /// Derives the exposed type and body of one accessor: plain passthrough,
    /// nullable link unwrap-and-wrap, or array-of-links map.
    fn synthesize(&mut self, field: &FieldDefinition) -> (String, Vec<String>) {
        let optional = if field.required && !field.omitted {
            ""
        } else {
            " | undefined"
        };
        let raw = format!("this.fields.{}", field.id);

        if field.field_type == FieldType::Link {
            let (expr, base_return) = self.link_expression(field, &raw);
            let body = if field.required {
                vec![format!("return ({expr})")]
            } else {
                vec![
                    format!("return !{raw} ? undefined :"),
                    format!("  ({expr})"),
                ]
            };
            return (format!("{base_return}{optional}"), body);
        }

        if field.field_type == FieldType::Array {
            if let Some(item) = field.item_field() {
                if item.field_type == FieldType::Link {
                    let (expr, base_return) = self.link_expression(&item, "item");
                    let body = if field.required {
                        vec![
                            format!("return {raw}.map((item) =>"),
                            format!("  {expr}"),
                            ")".to_string(),
                        ]
                    } else {
                        vec![
                            format!("return !{raw} ? undefined :"),
                            format!("  {raw}.map((item) =>"),
                            format!("    {expr}"),
                            "  )".to_string(),
                        ]
                    };
                    return (format!("Array<{base_return}>{optional}"), body);
                }
            }
        }

        let ty = self.field_type(field);
        (format!("{ty}{optional}"), vec![format!("return {raw}")])
    }

    /// The wrap-or-null expression for a link-shaped value, and the exposed
    /// base type of the wrapped result. Unresolved links (still in Link form)
    /// fail the tag check and map to null rather than throwing.
    fn link_expression(&mut self, field: &FieldDefinition, val: &str) -> (String, String) {
        if field.link_type == Some(LinkType::Asset) {
            self.base_imports.insert("Asset");
            self.base_imports.insert("isAsset");
            return (
                format!("isAsset({val}) ? new Asset({val}) : null"),
                "Asset | null".to_string(),
            );
        }

        self.base_imports.insert("isEntry");
        self.uses_wrap = true;

        match field.link_content_types() {
            Some(targets) => {
                let tags = targets
                    .iter()
                    .map(|t| format!("'{t}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                let base_return = if let [target] = targets {
                    format!("{} | null", type_name_for_id(target))
                } else {
                    format!(
                        "{}Class | null",
                        union_type_def_name(self.content_type.id(), &field.id)
                    )
                };
                (
                    format!("isEntry({val}) ? wrap<{tags}>({val}) : null"),
                    base_return,
                )
            }
            None => (
                format!("isEntry({val}) ? wrap({val}) : null"),
                "IEntry<any> | null".to_string(),
            ),
        }
    }
}

/// Renders a validation literal as TypeScript source: strings single-quoted,
/// numbers and booleans bare.
fn ts_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_schema::ContentType;

    fn content_type(json: serde_json::Value) -> ContentType {
        serde_json::from_value(json).expect("Failed to parse content type")
    }

    fn write(json: serde_json::Value) -> GeneratedUnit {
        let ct = content_type(json);
        let config = GeneratorConfig::default();
        ContentTypeWriter::new(&ct, &config)
            .write()
            .expect("Failed to write unit")
    }

    #[test]
    fn test_scalar_field_types() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [
                { "id": "title", "type": "Symbol", "required": true },
                { "id": "count", "type": "Integer" },
                { "id": "flag", "type": "Boolean" },
                { "id": "place", "type": "Location" },
                { "id": "body", "type": "RichText" }
            ]
        }));

        assert!(unit.code.contains("  title: string\n"));
        assert!(unit.code.contains("  count?: number\n"));
        assert!(unit.code.contains("  flag?: boolean\n"));
        assert!(unit.code.contains("  place?: { lon: number, lat: number }\n"));
        // unknown type tags degrade to any
        assert!(unit.code.contains("  body?: any\n"));
    }

    #[test]
    fn test_enum_union_alias_synthesized_once() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [{
                "id": "style",
                "type": "Symbol",
                "required": true,
                "validations": [{ "in": ["oneColumn", "twoColumn"] }]
            }]
        }));

        assert_eq!(unit.union_aliases.len(), 1);
        assert!(unit
            .code
            .contains("export type PageStyle = 'oneColumn' | 'twoColumn'\n"));
        assert!(unit.code.contains("  style: PageStyle\n"));
        // the accessor re-resolves the field; still one alias definition
        assert_eq!(unit.code.matches("export type PageStyle =").count(), 1);
        assert!(unit.code.contains("  get style(): PageStyle {\n"));
    }

    #[test]
    fn test_numeric_enum_union() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [{
                "id": "columns",
                "type": "Integer",
                "validations": [{ "in": [1, 2, 3] }]
            }]
        }));

        assert!(unit.code.contains("export type PageColumn = 1 | 2 | 3\n"));
        assert!(unit.code.contains("  get columns(): PageColumn | undefined {\n"));
    }

    #[test]
    fn test_omitted_field_is_never_and_has_no_accessor() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [
                { "id": "legacy", "type": "Symbol", "required": true, "omitted": true }
            ]
        }));

        assert!(unit.code.contains("  legacy?: never\n"));
        assert!(!unit.code.contains("get legacy"));
        assert!(!unit.code.contains("this.fields.legacy"));
    }

    #[test]
    fn test_asset_link_accessor() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [
                { "id": "hero", "type": "Link", "linkType": "Asset" }
            ]
        }));

        assert!(unit.code.contains("  hero?: ILink<'Asset'> | IAsset\n"));
        assert!(unit.code.contains("  get hero(): Asset | null | undefined {\n"));
        assert!(unit.code.contains("return !this.fields.hero ? undefined :\n"));
        assert!(unit
            .code
            .contains("(isAsset(this.fields.hero) ? new Asset(this.fields.hero) : null)"));
        assert!(unit
            .code
            .contains("import { Asset, Entry, IAsset, IEntry, ILink, isAsset } from '../base'\n"));
    }

    #[test]
    fn test_single_target_entry_link() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [{
                "id": "header",
                "type": "Link",
                "linkType": "Entry",
                "required": true,
                "validations": [{ "linkContentType": ["sectionHeader"] }]
            }]
        }));

        assert!(unit.code.contains("  header: ILink<'Entry'> | ISectionHeader\n"));
        assert!(unit.code.contains("  get header(): SectionHeader | null {\n"));
        assert!(unit.code.contains(
            "return (isEntry(this.fields.header) ? wrap<'sectionHeader'>(this.fields.header) : null)\n"
        ));
        assert!(unit
            .code
            .contains("import { ISectionHeader, SectionHeader } from './section_header'\n"));
        assert!(unit.code.contains("import { wrap } from '.'\n"));
        assert_eq!(unit.linked_types, vec!["sectionHeader"]);
    }

    #[test]
    fn test_multi_target_entry_link_synthesizes_alias_pair() {
        let unit = write(serde_json::json!({
            "sys": { "id": "menu" },
            "name": "Menu",
            "fields": [{
                "id": "sides",
                "type": "Link",
                "linkType": "Entry",
                "validations": [{ "linkContentType": ["menuButton", "divider"] }]
            }]
        }));

        assert!(unit.code.contains("export type MenuSide = IMenuButton | IDivider\n"));
        assert!(unit.code.contains("export type MenuSideClass = MenuButton | Divider\n"));
        assert!(unit.code.contains("  sides?: ILink<'Entry'> | MenuSide\n"));
        assert!(unit.code.contains("  get sides(): MenuSideClass | null | undefined {\n"));
        assert!(unit.code.contains("wrap<'menuButton' | 'divider'>(this.fields.sides)"));
        // imports are sorted and deduplicated
        assert!(unit.code.contains("import { IDivider, Divider } from './divider'\n"));
        assert!(unit.code.contains("import { IMenuButton, MenuButton } from './menu_button'\n"));
        assert_eq!(unit.linked_types, vec!["divider", "menuButton"]);
    }

    #[test]
    fn test_unconstrained_entry_link() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [
                { "id": "related", "type": "Link", "linkType": "Entry" }
            ]
        }));

        assert!(unit.code.contains("  related?: ILink<'Entry'> | IEntry<any>\n"));
        assert!(unit.code.contains("  get related(): IEntry<any> | null | undefined {\n"));
        assert!(unit
            .code
            .contains("(isEntry(this.fields.related) ? wrap(this.fields.related) : null)"));
        assert!(unit.linked_types.is_empty());
    }

    #[test]
    fn test_array_of_links_maps_items() {
        let unit = write(serde_json::json!({
            "sys": { "id": "menu" },
            "name": "Menu",
            "fields": [{
                "id": "items",
                "type": "Array",
                "required": true,
                "items": {
                    "type": "Link",
                    "linkType": "Entry",
                    "validations": [{ "linkContentType": ["menuButton"] }]
                }
            }]
        }));

        assert!(unit.code.contains("  items: Array<ILink<'Entry'> | IMenuButton>\n"));
        assert!(unit.code.contains("  get items(): Array<MenuButton | null> {\n"));
        assert!(unit.code.contains("return this.fields.items.map((item) =>\n"));
        assert!(unit.code.contains("isEntry(item) ? wrap<'menuButton'>(item) : null\n"));
    }

    #[test]
    fn test_optional_array_of_links_short_circuits() {
        let unit = write(serde_json::json!({
            "sys": { "id": "menu" },
            "name": "Menu",
            "fields": [{
                "id": "extras",
                "type": "Array",
                "items": { "type": "Link", "linkType": "Entry" }
            }]
        }));

        assert!(unit
            .code
            .contains("  get extras(): Array<IEntry<any> | null> | undefined {\n"));
        assert!(unit.code.contains("return !this.fields.extras ? undefined :\n"));
        assert!(unit.code.contains("this.fields.extras.map((item) =>\n"));
    }

    #[test]
    fn test_array_of_scalars() {
        let unit = write(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "fields": [
                { "id": "tags", "type": "Array", "items": { "type": "Symbol" } }
            ]
        }));

        assert!(unit.code.contains("  tags?: string[]\n"));
        assert!(unit.code.contains("  get tags(): string[] | undefined {\n"));
        assert!(unit.code.contains("    return this.fields.tags\n"));
    }

    #[test]
    fn test_self_link_excluded_from_imports() {
        let unit = write(serde_json::json!({
            "sys": { "id": "menu" },
            "name": "Menu",
            "fields": [{
                "id": "parent",
                "type": "Link",
                "linkType": "Entry",
                "validations": [{ "linkContentType": ["menu"] }]
            }]
        }));

        assert!(unit.linked_types.is_empty());
        assert!(!unit.code.contains("from './menu'"));
        // the type reference itself is still emitted
        assert!(unit.code.contains("  parent?: ILink<'Entry'> | IMenu\n"));
    }

    #[test]
    fn test_reserved_field_name_gets_suffixed_accessor() {
        let unit = write(serde_json::json!({
            "sys": { "id": "sectionContactUs" },
            "name": "Section: Contact Us",
            "fields": [
                { "id": "fields", "type": "Symbol", "required": true }
            ]
        }));

        assert!(unit.code.contains("  fields: string\n"));
        assert!(unit.code.contains("  get fields_get(): string {\n"));
        assert!(unit.code.contains("    return this.fields.fields\n"));
        // the snake spelling equals the suffixed name, so no duplicate
        assert_eq!(unit.code.matches("get fields_get").count(), 1);
    }

    #[test]
    fn test_camel_case_field_emits_duplicate_snake_accessor() {
        let unit = write(serde_json::json!({
            "sys": { "id": "menuButton" },
            "name": "Menu Button",
            "fields": [
                { "id": "buttonText", "type": "Symbol", "required": true }
            ]
        }));

        assert!(unit.code.contains("  get buttonText(): string {\n"));
        assert!(unit.code.contains("  get button_text(): string {\n"));
        // both accessors share the same body
        assert_eq!(unit.code.matches("return this.fields.buttonText\n").count(), 2);
    }

    #[test]
    fn test_constructor_overloads_and_guard() {
        let unit = write(serde_json::json!({
            "sys": { "id": "menuButton" },
            "name": "Menu Button",
            "description": "A button in a menu",
            "fields": [{ "id": "title", "type": "Text" }]
        }));

        assert!(unit.code.contains("export interface IMenuButton extends IEntry<IMenuButtonFields> {\n}\n"));
        assert!(unit.code.contains(" * Menu Button\n *\n * A button in a menu\n"));
        assert!(unit
            .code
            .contains("export function isMenuButton(entry: IEntry<any>): entry is IMenuButton {\n"));
        assert!(unit.code.contains("    entry.sys.contentType.sys.id == 'menuButton'\n"));
        assert!(unit.code.contains("  constructor(entry: IMenuButton)\n"));
        assert!(unit.code.contains("  constructor(id: string, fields: IMenuButtonFields)\n"));
        assert!(unit
            .code
            .contains("  constructor(entryOrId: IMenuButton | string, fields?: IMenuButtonFields) {\n"));
        assert!(unit.code.contains("    super(entryOrId, 'menuButton', fields)\n"));
    }

    #[test]
    fn test_empty_content_type_id_is_malformed() {
        let ct = content_type(serde_json::json!({
            "sys": { "id": "" },
            "name": "Broken",
            "fields": []
        }));
        let config = GeneratorConfig::default();
        let err = ContentTypeWriter::new(&ct, &config).write().unwrap_err();
        assert!(matches!(err, CodegenError::MalformedContentType { .. }));
    }

    #[test]
    fn test_docs_can_be_disabled() {
        let ct = content_type(serde_json::json!({
            "sys": { "id": "page" },
            "name": "Page",
            "description": "A page",
            "fields": []
        }));
        let config = GeneratorConfig {
            generate_docs: false,
        };
        let unit = ContentTypeWriter::new(&ct, &config).write().unwrap();
        assert!(!unit.code.contains("/**"));
    }

    #[test]
    fn test_ts_literal_escaping() {
        assert_eq!(ts_literal(&serde_json::json!("it's")), "'it\\'s'");
        assert_eq!(ts_literal(&serde_json::json!(2.5)), "2.5");
        assert_eq!(ts_literal(&serde_json::json!(true)), "true");
        assert_eq!(ts_literal(&serde_json::json!(null)), "null");
    }
}
