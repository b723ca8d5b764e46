use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::{read_frm_file, table_name_from_path};
use crate::frm::schema::Schema;
use crate::{wprint, wprintln, FrmError};

/// Options for the `unfrm ddl` subcommand.
pub struct DdlOptions {
    /// Path to the `.frm` file.
    pub file: String,
    /// Table name override; defaults to the file stem.
    pub table: Option<String>,
    /// Append the table option suffix (ENGINE, DEFAULT CHARSET, ...).
    pub options: bool,
    /// Output in JSON format.
    pub json: bool,
    /// Use memory-mapped I/O.
    pub mmap: bool,
}

#[derive(Serialize)]
struct DdlReport<'a> {
    file: &'a str,
    table: &'a str,
    ddl: String,
    schema: &'a Schema,
}

/// Decode one `.frm` file and print its `CREATE TABLE` statement.
pub fn execute(opts: &DdlOptions, writer: &mut dyn Write) -> Result<(), FrmError> {
    let path = Path::new(&opts.file);
    let table = match &opts.table {
        Some(t) => t.clone(),
        None => table_name_from_path(path)?,
    };

    let data = read_frm_file(path, opts.mmap)?;
    let schema = Schema::decode(&data)?;

    let mut ddl = Vec::new();
    schema.render_create_table(&table, &mut ddl)?;
    if opts.options {
        schema.render_table_options(&mut ddl)?;
    }

    if opts.json {
        let report = DdlReport {
            file: &opts.file,
            table: &table,
            ddl: String::from_utf8_lossy(&ddl).into_owned(),
            schema: &schema,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| FrmError::Parse(format!("JSON serialization error: {}", e)))?;
        wprintln!(writer, "{}", json)?;
    } else {
        writer
            .write_all(&ddl)
            .map_err(|e| FrmError::Io(format!("Cannot write output: {}", e)))?;
        wprint!(writer, ";\n")?;
    }

    Ok(())
}
