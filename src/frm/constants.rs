//! `.frm` file structure constants.
//!
//! Offsets and sizes follow the layout MySQL 5.x writes in `table.cc`
//! (`create_frm` / `open_binary_frm`). All multi-byte integers are
//! little-endian.

// File signatures (bytes 0-1)
pub const FRM_TABLE_SIGNATURE: u16 = 0x01fe;
pub const FRM_VIEW_SIGNATURE: u16 = 0x5954; // "TY" from "TYPE=VIEW"

// Fixed record sizes
pub const FRM_HEADER_SIZE: usize = 64;
pub const FRM_KEY_RECORD_SIZE: usize = 8;
pub const FRM_PART_RECORD_SIZE: usize = 9;
pub const FRM_COLUMN_RECORD_SIZE: usize = 17;

// Header field offsets
pub const FRM_SIGNATURE: usize = 0; // 2 bytes
pub const FRM_VERSION: usize = 2; // 1 byte - frm format version
pub const FRM_LEGACY_DB_TYPE: usize = 3; // 1 byte - legacy engine code
pub const FRM_IO_SIZE: usize = 6; // 2 bytes - I/O block size, also key section offset
pub const FRM_LENGTH: usize = 10; // 4 bytes - total file length
pub const FRM_TMP_KEY_LENGTH: usize = 14; // 2 bytes
pub const FRM_REC_LENGTH: usize = 16; // 2 bytes - default record length
pub const FRM_MAX_ROWS: usize = 18; // 4 bytes
pub const FRM_MIN_ROWS: usize = 22; // 4 bytes
pub const FRM_DB_CREATE_PACK: usize = 26; // 2 bytes
pub const FRM_KEY_INFO_LENGTH: usize = 28; // 2 bytes
pub const FRM_TABLE_OPTIONS: usize = 30; // 2 bytes - HA_OPTION_* bits
pub const FRM_FILE_VERSION: usize = 33; // 1 byte
pub const FRM_AVG_ROW_LENGTH: usize = 34; // 4 bytes
pub const FRM_DEFAULT_CHARSET: usize = 38; // 1 byte - low byte of table charset id
pub const FRM_ROW_TYPE: usize = 40; // 1 byte
pub const FRM_CHARSET_HIGH: usize = 41; // 1 byte - high byte of table charset id
pub const FRM_STATS_SAMPLE_PAGES: usize = 42; // 2 bytes
pub const FRM_STATS_AUTO_RECALC: usize = 45; // 1 byte
pub const FRM_KEY_LENGTH: usize = 47; // 4 bytes
pub const FRM_MYSQL_VERSION_ID: usize = 51; // 4 bytes
pub const FRM_EXTRA_SIZE: usize = 55; // 4 bytes
pub const FRM_EXTRA_REC_BUF_LENGTH: usize = 59; // 2 bytes
pub const FRM_DEFAULT_PART_DB_TYPE: usize = 61; // 1 byte
pub const FRM_KEY_BLOCK_SIZE: usize = 62; // 2 bytes

// Key section
pub const KEY_SECTION_HEADER_SIZE: usize = 6;
pub const KEY_EXTENDED_COUNT_FLAG: u8 = 0x80;
pub const KEY_PART_FIELD_MASK: u16 = 0x3fff;
pub const KEY_FLAG_ALLOW_DUPS: u16 = 0x0001;
pub const PRIMARY_KEY_NAME: &str = "PRIMARY";

// Key algorithms (enum ha_key_alg)
pub const KEY_ALGO_UNDEFINED: u8 = 0;
pub const KEY_ALGO_BTREE: u8 = 1;
pub const KEY_ALGO_RTREE: u8 = 2;
pub const KEY_ALGO_HASH: u8 = 3;
pub const KEY_ALGO_FULLTEXT: u8 = 4;

// Column section
pub const COLUMN_SECTION_EXTRA: usize = 256; // past the I/O-aligned block
pub const COLUMN_SECTION_HEADER_SIZE: usize = 32;
pub const SCREEN_HEADER_SIZE: usize = 48;
pub const SCREEN_NAME_COUNT: usize = 3; // byte within the screen header
pub const SCREEN_NAME_SKIP: usize = 2; // bytes before each name length

// Column record field offsets (17-byte record)
pub const COL_FIELD_LENGTH: usize = 3; // 2 bytes
pub const COL_UNIREG: usize = 7; // 1 byte
pub const COL_FLAGS: usize = 8; // 2 bytes
pub const COL_UNIREG_TYPE: usize = 10; // 1 byte
pub const COL_CHARSET_LOW: usize = 11; // 1 byte
pub const COL_INTERVAL_NR: usize = 12; // 1 byte
pub const COL_FIELD_TYPE: usize = 13; // 1 byte
pub const COL_CHARSET: usize = 14; // 1 byte
pub const COL_COMMENT_LENGTH: usize = 15; // 2 bytes

// Column flags word
pub const FIELD_FLAG_NULLABLE: u16 = 0x8000;
pub const FIELD_FLAG_SIGNED: u16 = 0x0001;
pub const FIELD_FLAG_DEC_SHIFT: u16 = 8;
pub const FIELD_FLAG_DEC_MASK: u16 = 0x1f;

// Unireg type marking an auto-increment column (Field::NEXT_NUMBER)
pub const UNIREG_NEXT_NUMBER: u8 = 15;

// Charset id with no text semantics
pub const BINARY_CHARSET: u16 = 63;

pub const UNKNOWN_TYPE_PLACEHOLDER: &str = "<UNKNOWN_TYPE>";
