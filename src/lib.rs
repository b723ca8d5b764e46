//! MySQL `.frm` table definition toolkit.
//!
//! The `frm-utils` crate (library name `frm`) decodes the legacy binary table
//! definition files (`.frm`) written by MySQL 5.x and MariaDB, and renders the
//! decoded schema back out as a `CREATE TABLE` statement. The typical use is
//! recovering table definitions after a filesystem-level restore, when only
//! the `.frm` and data files survive and the server catalog does not know the
//! tables yet.
//!
//! # CLI Reference
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`unfrm ddl`](cli::app::Commands::Ddl) | Print the `CREATE TABLE` statement for one `.frm` file |
//! | [`unfrm info`](cli::app::Commands::Info) | Show decoded header fields, columns, and keys |
//! | [`unfrm dump`](cli::app::Commands::Dump) | Hex dump of the header, key, or column section |
//! | [`unfrm scan`](cli::app::Commands::Scan) | Decode every `.frm` file under a data directory |
//! | [`unfrm completions`](cli::app::Commands::Completions) | Generate shell completion scripts |
//!
//! All subcommands accept `--color <auto|always|never>` and `--output <file>`.
//!
//! # Library API
//!
//! ```toml
//! [dependencies]
//! frm = { package = "frm-utils", version = "1" }
//! ```
//!
//! ## Quick example
//!
//! ```no_run
//! use frm::frm::schema::Schema;
//!
//! let data = std::fs::read("orders.frm").unwrap();
//! let schema = Schema::decode(&data).unwrap();
//! println!("{}", schema.create_table_sql("orders").unwrap());
//! ```
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`frm::schema`] | Decoded table aggregate, `decode` and `CREATE TABLE` rendering |
//! | [`frm::header`] | Fixed 64-byte file preamble |
//! | [`frm::key`] | Key section parsing and index DDL fragments |
//! | [`frm::column`] | Column section parsing and column DDL fragments |
//! | [`frm::field_type`] | Physical field type codes |
//! | [`frm::charset`] | Static charset/collation registry |
//! | [`frm::options`] | Legacy engine codes, row types, server versions |
//! | [`frm::constants`] | Offsets, record sizes, flag masks |

#[cfg(feature = "cli")]
pub mod cli;
pub mod frm;
pub mod util;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

use thiserror::Error;

/// Errors returned by `frm` operations.
#[derive(Error, Debug)]
pub enum FrmError {
    /// The buffer is smaller than the fixed 64-byte header.
    #[error("File too short: {len} bytes, need at least 64")]
    TooShort { len: usize },

    /// The 2-byte signature is not the table definition signature.
    #[error("Wrong file type: signature 0x{signature:04x}{}", view_note(.view))]
    WrongFileType { signature: u16, view: bool },

    /// A header-derived offset or length points past the end of the buffer.
    #[error("Out of bounds reading {what}: offset {offset} + {len} exceeds {size} bytes")]
    OutOfBounds {
        what: &'static str,
        offset: usize,
        len: usize,
        size: usize,
    },

    /// A column references a charset id missing from the registry.
    #[error("Unknown charset id {0}")]
    UnknownCharset(u16),

    /// An I/O error occurred (file open, read, or write failure).
    #[error("I/O error: {0}")]
    Io(String),

    /// A parse or serialization error outside the binary decoder.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid argument was supplied.
    #[error("Invalid argument: {0}")]
    Argument(String),
}

fn view_note(view: &bool) -> &'static str {
    if *view {
        " (view definition, not a table)"
    } else {
        ""
    }
}

/// Write a line to the given writer, converting io::Error to FrmError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::FrmError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::FrmError::Io(e.to_string()))
    };
}

/// Write (without newline) to the given writer, converting io::Error to FrmError.
macro_rules! wprint {
    ($w:expr, $($arg:tt)*) => {
        write!($w, $($arg)*).map_err(|e| $crate::FrmError::Io(e.to_string()))
    };
}

pub(crate) use wprint;
pub(crate) use wprintln;
