//! Aggregate index module emission.
//!
//! Combines all per-content-type units into one module: re-exports, the
//! type/class directory interfaces, and the `wrap` dispatch function built
//! as a closed tag-to-constructor table with an explicit unknown-tag error.

use crate::ir::{Directory, GeneratedUnit};

pub fn generate_index(units: &[GeneratedUnit], directory: &Directory) -> String {
    let mut code = String::new();

    for unit in units {
        code.push_str(&format!("export * from './{}'\n", unit.file_stem));
    }
    if !units.is_empty() {
        code.push('\n');
    }

    code.push_str("import * as C from '.'\n");
    code.push_str("import { IEntry } from '../base'\n\n");

    code.push_str("export interface TypeDirectory {\n");
    for entry in directory.entries() {
        code.push_str(&format!(
            "  '{}': C.{}\n",
            entry.content_type_id, entry.entry_type_name
        ));
    }
    code.push_str("}\n\n");

    code.push_str("export interface ClassDirectory {\n");
    for entry in directory.entries() {
        code.push_str(&format!(
            "  '{}': C.{}\n",
            entry.content_type_id, entry.class_name
        ));
    }
    code.push_str("}\n\n");

    code.push_str("const constructors: { [id: string]: new (entry: any) => IEntry<any> } = {\n");
    for entry in directory.entries() {
        code.push_str(&format!(
            "  '{}': C.{},\n",
            entry.content_type_id, entry.class_name
        ));
    }
    code.push_str("}\n\n");

    for entry in directory.entries() {
        code.push_str(&format!(
            "export function wrap(entry: C.{}): C.{}\n",
            entry.entry_type_name, entry.class_name
        ));
    }
    code.push_str(
        "export function wrap<CT extends keyof TypeDirectory>(entry: TypeDirectory[CT]): ClassDirectory[CT]\n",
    );
    code.push_str("export function wrap(entry: IEntry<any>): IEntry<any> {\n");
    code.push_str("  const id = entry.sys.contentType.sys.id\n");
    code.push_str("  const ctor = constructors[id]\n");
    code.push_str("  if (!ctor) {\n");
    code.push_str("    throw new Error('Unknown content type: ' + id)\n");
    code.push_str("  }\n");
    code.push_str("  return new ctor(entry)\n");
    code.push_str("}\n");

    code
}
