//! CLI subcommand implementations for the `unfrm` binary.
//!
//! The `unfrm` binary decodes legacy MySQL table definition files and prints
//! the recovered schema. CLI argument parsing uses clap derive macros, with
//! the top-level [`app::Cli`] struct and [`app::Commands`] enum defined in
//! [`app`] and shared between `main.rs` and `build.rs` (for man page
//! generation) via `include!()`.
//!
//! Each subcommand module follows the same pattern: an `Options` struct
//! holding the parsed arguments and a
//! `pub fn execute(opts, writer) -> Result<(), FrmError>` entry point. The
//! `writer: &mut dyn Write` parameter allows output to be captured in tests
//! or redirected to a file via the global `--output` flag.
//!
//! # Subcommands
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `unfrm ddl` | [`ddl`] | Print the `CREATE TABLE` statement for one file |
//! | `unfrm info` | [`info`] | Header fields, engine, charset, columns, and keys |
//! | `unfrm dump` | [`dump`] | Hex dump of the header, key, or column section |
//! | `unfrm scan` | [`scan`] | Decode every `.frm` under a data directory in parallel |
//!
//! # Common patterns
//!
//! - **`--json`**: structured output via `#[derive(Serialize)]` structs and
//!   `serde_json`.
//! - **`--color`** (global): colored terminal output (`auto`, `always`,
//!   `never`).
//! - **`--output` / `-o`** (global): redirect output to a file.
//! - **`--mmap`** (global): memory-map input files instead of reading them.
//!
//! Warnings about files that cannot be decoded go to stderr so that stdout
//! stays a usable SQL script. `scan` shows a progress bar (via
//! [`indicatif`]) unless JSON output is requested.

pub mod app;
pub mod ddl;
pub mod dump;
pub mod info;
pub mod scan;

use std::ops::Deref;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::FrmError;

/// Contents of a `.frm` file, either read into memory or memory-mapped.
pub(crate) enum FrmBytes {
    Owned(Vec<u8>),
    Mapped(memmap2::Mmap),
}

impl Deref for FrmBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FrmBytes::Owned(v) => v,
            FrmBytes::Mapped(m) => m,
        }
    }
}

/// Read a `.frm` file, selecting mmap or a plain read based on the flag.
///
/// Empty files are never mapped; they are returned as an empty buffer and
/// rejected by the header check like any other short file.
pub(crate) fn read_frm_file(path: &Path, use_mmap: bool) -> Result<FrmBytes, FrmError> {
    if !use_mmap {
        let data = std::fs::read(path)
            .map_err(|e| FrmError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
        return Ok(FrmBytes::Owned(data));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| FrmError::Io(format!("Cannot open {}: {}", path.display(), e)))?;
    let file_size = file
        .metadata()
        .map_err(|e| FrmError::Io(format!("Cannot stat {}: {}", path.display(), e)))?
        .len();
    if file_size == 0 {
        return Ok(FrmBytes::Owned(Vec::new()));
    }

    // SAFETY: the mapping is read-only and table definitions are not
    // rewritten in place while the server is stopped.
    let mmap = unsafe {
        memmap2::Mmap::map(&file)
            .map_err(|e| FrmError::Io(format!("Cannot mmap {}: {}", path.display(), e)))?
    };
    Ok(FrmBytes::Mapped(mmap))
}

/// Table name implied by a `.frm` path: the file name without extension.
pub(crate) fn table_name_from_path(path: &Path) -> Result<String, FrmError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            FrmError::Argument(format!(
                "Cannot derive a table name from {}; use --table",
                path.display()
            ))
        })
}

/// Create a styled progress bar for iterating over files.
pub(crate) fn create_progress_bar(count: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(count);
    if let Ok(style) = ProgressStyle::default_bar().template(&format!(
        "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{eta}})",
        unit
    )) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}
