//! `.frm` file header parsing.
//!
//! Every `.frm` file starts with a fixed 64-byte preamble ([`FrmHeader`]).
//! Besides table-level options it carries the values needed to locate the
//! other sections: the key section starts at `io_size`, and the column
//! section follows the default-record block whose size is derived from
//! `io_size`, `tmp_key_length`, and `rec_length`.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::frm::constants::*;
use crate::frm::section::out_of_bounds;
use crate::FrmError;

/// Parsed `.frm` header (64 bytes at offset 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrmHeader {
    /// File signature. Bytes 0-1. Always 0x01FE for tables.
    pub file_type: u16,
    /// Format version. Byte 2.
    pub version: u8,
    /// Legacy storage engine code. Byte 3.
    pub legacy_db_type: u8,
    /// I/O block size; also the offset of the key section. Bytes 6-7.
    pub io_size: u16,
    /// Total file length. Bytes 10-13.
    pub length: u32,
    /// Key section length used to place the record block. Bytes 14-15.
    pub tmp_key_length: u16,
    /// Default record length. Bytes 16-17.
    pub rec_length: u16,
    /// MAX_ROWS table option. Bytes 18-21.
    pub max_rows: u32,
    /// MIN_ROWS table option. Bytes 22-25.
    pub min_rows: u32,
    /// Pack flag set at creation time. Bytes 26-27.
    pub db_create_pack: u16,
    /// Length of the key info block. Bytes 28-29.
    pub key_info_length: u16,
    /// HA_OPTION_* table option bits. Bytes 30-31.
    pub table_options: u16,
    /// Byte 33.
    pub file_version: u8,
    /// AVG_ROW_LENGTH table option. Bytes 34-37.
    pub avg_row_length: u32,
    /// Low byte of the table default charset id. Byte 38.
    pub default_charset: u8,
    /// ROW_FORMAT code. Byte 40.
    pub row_type: u8,
    /// High byte of the table default charset id. Byte 41.
    pub charset_high: u8,
    /// STATS_SAMPLE_PAGES table option. Bytes 42-43.
    pub stats_sample_pages: u16,
    /// STATS_AUTO_RECALC table option. Byte 45.
    pub stats_auto_recalc: u8,
    /// Bytes 47-50.
    pub key_length: u32,
    /// Server version that wrote the file (e.g. 50726). Bytes 51-54.
    pub mysql_version_id: u32,
    /// Size of the extra (engine/comment) section. Bytes 55-58.
    pub extra_size: u32,
    /// Bytes 59-60.
    pub extra_rec_buf_length: u16,
    /// Legacy engine code of partitions. Byte 61.
    pub default_part_db_type: u8,
    /// KEY_BLOCK_SIZE table option. Bytes 62-63.
    pub key_block_size: u16,
}

impl FrmHeader {
    /// Parse and validate the header.
    ///
    /// Fails with [`FrmError::TooShort`] when fewer than 64 bytes are present
    /// and with [`FrmError::WrongFileType`] unless the signature is the table
    /// signature. View definitions share the `.frm` extension but are text
    /// files starting with `TYPE=VIEW`; they are rejected explicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// use frm::frm::header::FrmHeader;
    /// use frm::FrmError;
    ///
    /// let mut data = vec![0u8; 64];
    /// data[0] = 0xfe;
    /// data[1] = 0x01;
    /// data[6] = 0x00;
    /// data[7] = 0x10; // io_size = 4096
    /// let hdr = FrmHeader::parse(&data).unwrap();
    /// assert_eq!(hdr.io_size, 4096);
    ///
    /// let view = b"TYPE=VIEW\nquery=select 1\n".repeat(4);
    /// assert!(matches!(
    ///     FrmHeader::parse(&view),
    ///     Err(FrmError::WrongFileType { view: true, .. })
    /// ));
    /// ```
    pub fn parse(data: &[u8]) -> Result<Self, FrmError> {
        if data.len() < FRM_HEADER_SIZE {
            return Err(FrmError::TooShort { len: data.len() });
        }

        let file_type = LittleEndian::read_u16(&data[FRM_SIGNATURE..]);
        if file_type != FRM_TABLE_SIGNATURE {
            return Err(FrmError::WrongFileType {
                signature: file_type,
                view: file_type == FRM_VIEW_SIGNATURE,
            });
        }

        Ok(FrmHeader {
            file_type,
            version: data[FRM_VERSION],
            legacy_db_type: data[FRM_LEGACY_DB_TYPE],
            io_size: LittleEndian::read_u16(&data[FRM_IO_SIZE..]),
            length: LittleEndian::read_u32(&data[FRM_LENGTH..]),
            tmp_key_length: LittleEndian::read_u16(&data[FRM_TMP_KEY_LENGTH..]),
            rec_length: LittleEndian::read_u16(&data[FRM_REC_LENGTH..]),
            max_rows: LittleEndian::read_u32(&data[FRM_MAX_ROWS..]),
            min_rows: LittleEndian::read_u32(&data[FRM_MIN_ROWS..]),
            db_create_pack: LittleEndian::read_u16(&data[FRM_DB_CREATE_PACK..]),
            key_info_length: LittleEndian::read_u16(&data[FRM_KEY_INFO_LENGTH..]),
            table_options: LittleEndian::read_u16(&data[FRM_TABLE_OPTIONS..]),
            file_version: data[FRM_FILE_VERSION],
            avg_row_length: LittleEndian::read_u32(&data[FRM_AVG_ROW_LENGTH..]),
            default_charset: data[FRM_DEFAULT_CHARSET],
            row_type: data[FRM_ROW_TYPE],
            charset_high: data[FRM_CHARSET_HIGH],
            stats_sample_pages: LittleEndian::read_u16(&data[FRM_STATS_SAMPLE_PAGES..]),
            stats_auto_recalc: data[FRM_STATS_AUTO_RECALC],
            key_length: LittleEndian::read_u32(&data[FRM_KEY_LENGTH..]),
            mysql_version_id: LittleEndian::read_u32(&data[FRM_MYSQL_VERSION_ID..]),
            extra_size: LittleEndian::read_u32(&data[FRM_EXTRA_SIZE..]),
            extra_rec_buf_length: LittleEndian::read_u16(&data[FRM_EXTRA_REC_BUF_LENGTH..]),
            default_part_db_type: data[FRM_DEFAULT_PART_DB_TYPE],
            key_block_size: LittleEndian::read_u16(&data[FRM_KEY_BLOCK_SIZE..]),
        })
    }

    /// Offset of the key section.
    pub fn key_section_offset(&self) -> usize {
        self.io_size as usize
    }

    /// Offset of the column section.
    ///
    /// The record block after the keys is rounded up to the next multiple of
    /// `io_size`, and the column section starts 256 bytes past that. An
    /// `io_size` of zero cannot locate anything and is reported as an
    /// out-of-bounds header.
    pub fn column_section_offset(&self) -> Result<usize, FrmError> {
        let io = self.io_size as usize;
        if io == 0 {
            return Err(out_of_bounds("column section (io_size is 0)", 0, 0, 0));
        }
        let end = io + self.tmp_key_length as usize + self.rec_length as usize;
        let block = (end / io + 1) * io;
        Ok(block + COLUMN_SECTION_EXTRA)
    }

    /// Table default charset id, combining bytes 41 and 38.
    pub fn table_charset_id(&self) -> u16 {
        ((self.charset_high as u16) << 8) | self.default_charset as u16
    }
}
