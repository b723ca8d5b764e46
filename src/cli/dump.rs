use std::io::Write;
use std::path::Path;

use crate::cli::app::DumpSection;
use crate::cli::read_frm_file;
use crate::frm::constants::FRM_HEADER_SIZE;
use crate::frm::header::FrmHeader;
use crate::util::hex::{format_offset, hex_dump};
use crate::{wprintln, FrmError};

/// Options for the `unfrm dump` subcommand.
pub struct DumpOptions {
    pub file: String,
    pub section: DumpSection,
    /// Bytes to dump; defaults to the section's length.
    pub length: Option<usize>,
    pub mmap: bool,
}

/// Hex dump one section of a `.frm` file.
///
/// The header can be dumped from any file at least 64 bytes long, which
/// helps when the signature check itself is what fails. The key and column
/// sections are located through the parsed header.
pub fn execute(opts: &DumpOptions, writer: &mut dyn Write) -> Result<(), FrmError> {
    let data = read_frm_file(Path::new(&opts.file), opts.mmap)?;

    let (start, natural_len) = match opts.section {
        DumpSection::Header => {
            if data.len() < FRM_HEADER_SIZE {
                return Err(FrmError::TooShort { len: data.len() });
            }
            (0, FRM_HEADER_SIZE)
        }
        DumpSection::Keys => {
            let hdr = FrmHeader::parse(&data)?;
            let len = if hdr.key_info_length > 0 {
                hdr.key_info_length
            } else {
                hdr.tmp_key_length
            };
            (hdr.key_section_offset(), len as usize)
        }
        DumpSection::Columns => {
            let hdr = FrmHeader::parse(&data)?;
            let start = hdr.column_section_offset()?;
            (start, data.len().saturating_sub(start))
        }
    };

    if start >= data.len() {
        return Err(FrmError::Argument(format!(
            "{:?} section offset {} is beyond file size {}",
            opts.section,
            start,
            data.len()
        )));
    }

    let len = opts
        .length
        .unwrap_or(natural_len)
        .min(data.len() - start);

    wprintln!(
        writer,
        "Hex dump of {} {:?} section at offset {} ({} bytes):",
        opts.file,
        opts.section,
        format_offset(start as u64),
        len
    )?;
    wprintln!(writer)?;
    wprintln!(writer, "{}", hex_dump(&data[start..start + len], start as u64))?;

    Ok(())
}
