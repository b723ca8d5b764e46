use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::{create_progress_bar, read_frm_file, table_name_from_path};
use crate::frm::schema::Schema;
use crate::util::fs::find_frm_files;
use crate::{wprintln, FrmError};

/// Options for the `unfrm scan` subcommand.
pub struct ScanOptions {
    /// MySQL data directory to search.
    pub datadir: String,
    /// Output in JSON format.
    pub json: bool,
    /// Emit a DISCARD/IMPORT TABLESPACE restore script.
    pub tablespace_script: bool,
    /// Maximum directory recursion depth (None = default 2, Some(0) = unlimited).
    pub depth: Option<u32>,
    /// Use memory-mapped I/O.
    pub mmap: bool,
}

#[derive(Serialize)]
struct ScanTable {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<String>,
    table: String,
    columns: usize,
    keys: usize,
    ddl: String,
}

#[derive(Serialize)]
struct ScanFailure {
    file: String,
    error: String,
}

#[derive(Serialize)]
struct ScanReport {
    datadir: String,
    files_scanned: usize,
    tables_decoded: usize,
    files_failed: usize,
    tables: Vec<ScanTable>,
    failures: Vec<ScanFailure>,
}

/// Decode every `.frm` file under a data directory.
///
/// Files are decoded in parallel; output order follows the sorted file list.
/// A file that cannot be decoded or rendered is reported on stderr (or in
/// the `failures` array for JSON) and skipped.
pub fn execute(opts: &ScanOptions, writer: &mut dyn Write) -> Result<(), FrmError> {
    let datadir = Path::new(&opts.datadir);
    if !datadir.is_dir() {
        return Err(FrmError::Argument(format!(
            "Data directory does not exist: {}",
            opts.datadir
        )));
    }

    let frm_files = find_frm_files(datadir, opts.depth)?;

    let pb = if !opts.json && !frm_files.is_empty() {
        Some(create_progress_bar(frm_files.len() as u64, "files"))
    } else {
        None
    };

    let use_mmap = opts.mmap;
    let results: Vec<(PathBuf, Result<ScanTable, FrmError>)> = frm_files
        .par_iter()
        .map(|path| {
            let r = decode_table(path, datadir, use_mmap);
            if let Some(ref pb) = pb {
                pb.inc(1);
            }
            (path.clone(), r)
        })
        .collect();

    if let Some(ref pb) = pb {
        pb.finish_and_clear();
    }

    let mut tables = Vec::new();
    let mut failures = Vec::new();
    for (path, result) in results {
        let display = display_path(&path, datadir);
        match result {
            Ok(t) => tables.push(t),
            Err(e) => {
                if !opts.json {
                    eprintln!("{} skipping {}: {}", "Warning:".yellow(), display, e);
                }
                failures.push(ScanFailure {
                    file: display,
                    error: e.to_string(),
                });
            }
        }
    }

    if opts.json {
        let report = ScanReport {
            datadir: opts.datadir.clone(),
            files_scanned: frm_files.len(),
            tables_decoded: tables.len(),
            files_failed: failures.len(),
            tables,
            failures,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| FrmError::Parse(format!("JSON serialization error: {}", e)))?;
        wprintln!(writer, "{}", json)?;
        return Ok(());
    }

    if frm_files.is_empty() {
        wprintln!(writer, "-- No .frm files found in {}", opts.datadir)?;
        return Ok(());
    }

    if opts.tablespace_script {
        write_tablespace_script(&tables, writer)?;
    } else {
        for t in &tables {
            wprintln!(writer, "-- {}", t.file)?;
            wprintln!(writer, "{};", t.ddl)?;
            wprintln!(writer)?;
        }
    }

    if !failures.is_empty() {
        eprintln!(
            "{} {} of {} files could not be decoded",
            "Warning:".yellow(),
            failures.len(),
            frm_files.len()
        );
    }

    Ok(())
}

fn decode_table(path: &Path, datadir: &Path, use_mmap: bool) -> Result<ScanTable, FrmError> {
    let table = table_name_from_path(path)?;
    let data = read_frm_file(path, use_mmap)?;
    let schema = Schema::decode(&data)?;
    let ddl = schema.create_table_sql(&table)?;

    Ok(ScanTable {
        file: display_path(path, datadir),
        database: database_name(path, datadir),
        table,
        columns: schema.columns.len(),
        keys: schema.keys.len(),
        ddl,
    })
}

fn display_path(path: &Path, datadir: &Path) -> String {
    path.strip_prefix(datadir)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Database a table belongs to: its parent directory, unless that is the
/// data directory itself.
fn database_name(path: &Path, datadir: &Path) -> Option<String> {
    let parent = path.parent()?;
    if parent == datadir {
        return None;
    }
    parent
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

/// Emit the statements that re-attach existing tablespaces to recreated
/// tables: every CREATE TABLE with its DISCARD first, then all the IMPORTs.
/// The data files must be copied back between the two phases.
fn write_tablespace_script(tables: &[ScanTable], writer: &mut dyn Write) -> Result<(), FrmError> {
    let mut current_db: Option<&str> = None;
    for t in tables {
        switch_database(writer, &mut current_db, t.database.as_deref())?;
        wprintln!(writer, "{};", t.ddl)?;
        wprintln!(
            writer,
            "ALTER TABLE {} DISCARD TABLESPACE;",
            quoted(&t.table)
        )?;
    }

    wprintln!(writer)?;
    wprintln!(writer, "-- Copy the tablespace files back into place, then:")?;
    let mut current_db: Option<&str> = None;
    for t in tables {
        switch_database(writer, &mut current_db, t.database.as_deref())?;
        wprintln!(
            writer,
            "ALTER TABLE {} IMPORT TABLESPACE;",
            quoted(&t.table)
        )?;
    }
    Ok(())
}

fn quoted(name: &str) -> String {
    format!("`{}`", name)
}

fn switch_database<'a>(
    writer: &mut dyn Write,
    current: &mut Option<&'a str>,
    next: Option<&'a str>,
) -> Result<(), FrmError> {
    if let Some(db) = next {
        if *current != Some(db) {
            wprintln!(writer, "USE {};", quoted(db))?;
            *current = Some(db);
        }
    }
    Ok(())
}
