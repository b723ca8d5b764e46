//! Shared utilities (hex dump formatting, `.frm` file discovery).

#[cfg(feature = "cli")]
pub mod fs;
pub mod hex;
