//! `.frm` binary format parsing.
//!
//! This module contains types and functions for reading the legacy table
//! definition files written by MySQL 5.x and MariaDB: the fixed header, the
//! key section with its per-key part records, and the column section whose
//! vestigial "screens" carry the column names.
//!
//! Start with [`schema::Schema::decode`] to decode a whole file, then use
//! [`schema::Schema::create_table_sql`] to render it.

pub mod charset;
pub mod column;
pub mod constants;
pub mod field_type;
pub mod header;
pub mod key;
pub mod options;
pub mod schema;
pub mod section;
