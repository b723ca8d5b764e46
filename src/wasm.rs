//! WebAssembly bindings for `.frm` decoding.
//!
//! Each exported function accepts raw file bytes as `&[u8]` (via wasm-bindgen)
//! and returns a string. These are thin wrappers over the same library code
//! used by the CLI subcommands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::frm::options::format_mysql_version;
use crate::frm::schema::Schema;
use crate::util::hex::hex_dump;

fn to_js_err(e: crate::FrmError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(val: &T) -> Result<String, JsValue> {
    serde_json::to_string(val).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns the fully decoded schema (header, columns, keys) as JSON.
#[wasm_bindgen]
pub fn decode_frm(data: &[u8]) -> Result<String, JsValue> {
    let schema = Schema::decode(data).map_err(to_js_err)?;
    to_json(&schema)
}

/// Returns the `CREATE TABLE` statement for `table`, mirroring `unfrm ddl`.
///
/// When `with_options` is true the ENGINE/DEFAULT CHARSET suffix is appended.
#[wasm_bindgen]
pub fn create_table(data: &[u8], table: &str, with_options: bool) -> Result<String, JsValue> {
    let schema = Schema::decode(data).map_err(to_js_err)?;
    let mut buf = Vec::new();
    schema
        .render_create_table(table, &mut buf)
        .map_err(to_js_err)?;
    if with_options {
        schema.render_table_options(&mut buf).map_err(to_js_err)?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[derive(Serialize)]
struct TableSummary {
    mysql_version: String,
    engine: String,
    row_format: String,
    charset: Option<&'static str>,
    collation: Option<&'static str>,
    columns: usize,
    keys: usize,
}

/// Returns a short summary for file list panels.
#[wasm_bindgen]
pub fn get_table_summary(data: &[u8]) -> Result<String, JsValue> {
    let schema = Schema::decode(data).map_err(to_js_err)?;
    let charset = schema.table_charset();
    to_json(&TableSummary {
        mysql_version: format_mysql_version(schema.header.mysql_version_id),
        engine: schema.engine().to_string(),
        row_format: schema.row_type().to_string(),
        charset: charset.map(|cs| cs.name),
        collation: charset.map(|cs| cs.collation),
        columns: schema.columns.len(),
        keys: schema.keys.len(),
    })
}

/// Hex dump of `length` bytes starting at `offset`, clamped to the input.
#[wasm_bindgen]
pub fn hex_dump_range(data: &[u8], offset: usize, length: usize) -> String {
    let start = offset.min(data.len());
    let end = start.saturating_add(length).min(data.len());
    hex_dump(&data[start..end], start as u64)
}
