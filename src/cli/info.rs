use std::io::Write;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::cli::read_frm_file;
use crate::frm::constants::KEY_PART_FIELD_MASK;
use crate::frm::options::{format_mysql_version, table_option_names};
use crate::frm::schema::Schema;
use crate::util::hex::{format_hex16, format_offset};
use crate::{wprintln, FrmError};

/// Options for the `unfrm info` subcommand.
pub struct InfoOptions {
    /// Path to the `.frm` file.
    pub file: String,
    /// Emit output as JSON.
    pub json: bool,
    /// Use memory-mapped I/O.
    pub mmap: bool,
}

#[derive(Serialize)]
struct InfoReport {
    file: String,
    file_size: usize,
    signature: u16,
    format_version: u8,
    mysql_version: String,
    engine: String,
    row_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    table_charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table_collation: Option<String>,
    table_options: Vec<&'static str>,
    io_size: u16,
    key_section_offset: usize,
    column_section_offset: usize,
    columns: Vec<ColumnInfo>,
    keys: Vec<KeyInfo>,
}

#[derive(Serialize)]
struct ColumnInfo {
    name: String,
    type_code: u8,
    type_name: &'static str,
    length: u16,
    nullable: bool,
    auto_increment: bool,
    charset_id: u16,
    definition: String,
}

#[derive(Serialize)]
struct KeyInfo {
    name: String,
    kind: &'static str,
    algorithm: String,
    columns: Vec<String>,
}

/// Display decoded header fields, columns, and keys of one `.frm` file.
///
/// Key parts that reference a missing column are listed as `#<ordinal>`
/// instead of failing, so the report stays usable on damaged files whose
/// `CREATE TABLE` cannot be rendered.
pub fn execute(opts: &InfoOptions, writer: &mut dyn Write) -> Result<(), FrmError> {
    let path = Path::new(&opts.file);
    let data = read_frm_file(path, opts.mmap)?;
    let schema = Schema::decode(&data)?;
    let report = build_report(&opts.file, data.len(), &schema)?;

    if opts.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| FrmError::Parse(format!("JSON serialization error: {}", e)))?;
        wprintln!(writer, "{}", json)?;
        return Ok(());
    }

    wprintln!(writer, "{}", "Table Definition".bold())?;
    wprintln!(writer, "  File:            {}", report.file)?;
    wprintln!(writer, "  Size:            {} bytes", report.file_size)?;
    wprintln!(
        writer,
        "  Signature:       {} (format version {})",
        format_hex16(report.signature),
        report.format_version
    )?;
    wprintln!(writer, "  MySQL version:   {}", report.mysql_version)?;
    wprintln!(writer, "  Engine:          {}", report.engine)?;
    wprintln!(writer, "  Row format:      {}", report.row_format)?;
    match (&report.table_charset, &report.table_collation) {
        (Some(cs), Some(coll)) => wprintln!(writer, "  Charset:         {} ({})", cs, coll)?,
        _ => wprintln!(writer, "  Charset:         {}", "unknown".yellow())?,
    }
    if !report.table_options.is_empty() {
        wprintln!(writer, "  Options:         {}", report.table_options.join(", "))?;
    }
    wprintln!(writer, "  Key section:     {}", format_offset(report.key_section_offset as u64))?;
    wprintln!(
        writer,
        "  Column section:  {}",
        format_offset(report.column_section_offset as u64)
    )?;
    wprintln!(writer)?;

    wprintln!(writer, "{} ({})", "Columns".bold(), report.columns.len())?;
    for (i, col) in report.columns.iter().enumerate() {
        wprintln!(writer, "  {:>3}  {}", i + 1, col.definition)?;
    }
    wprintln!(writer)?;

    wprintln!(writer, "{} ({})", "Keys".bold(), report.keys.len())?;
    for key in &report.keys {
        wprintln!(
            writer,
            "  {:<12} {:<24} {:<10} ({})",
            key.kind,
            key.name,
            key.algorithm,
            key.columns.join(", ")
        )?;
    }

    Ok(())
}

fn build_report(file: &str, file_size: usize, schema: &Schema) -> Result<InfoReport, FrmError> {
    let hdr = &schema.header;
    let charset = schema.table_charset();

    let mut columns = Vec::with_capacity(schema.columns.len());
    for col in &schema.columns {
        columns.push(ColumnInfo {
            name: col.name.clone(),
            type_code: col.field_type.as_u8(),
            type_name: col.field_type.name(),
            length: col.field_length,
            nullable: col.is_nullable(),
            auto_increment: col.is_auto_increment(),
            charset_id: col.charset_id(),
            definition: col.to_ddl()?,
        });
    }

    let keys = schema
        .keys
        .iter()
        .map(|key| KeyInfo {
            name: key.name.clone(),
            kind: key.kind(),
            algorithm: key.algorithm.to_string(),
            columns: key
                .parts
                .iter()
                .map(|part| match part.column(&schema.columns) {
                    Ok(col) => col.name.clone(),
                    Err(_) => format!("#{}", part.field_number & KEY_PART_FIELD_MASK),
                })
                .collect(),
        })
        .collect();

    Ok(InfoReport {
        file: file.to_string(),
        file_size,
        signature: hdr.file_type,
        format_version: hdr.version,
        mysql_version: format_mysql_version(hdr.mysql_version_id),
        engine: schema.engine().to_string(),
        row_format: schema.row_type().to_string(),
        table_charset: charset.map(|cs| cs.name.to_string()),
        table_collation: charset.map(|cs| cs.collation.to_string()),
        table_options: table_option_names(hdr.table_options),
        io_size: hdr.io_size,
        key_section_offset: hdr.key_section_offset(),
        column_section_offset: hdr.column_section_offset()?,
        columns,
        keys,
    })
}
