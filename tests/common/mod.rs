//! Synthetic `.frm` image builder shared by the integration tests.

#![allow(dead_code)]

use byteorder::{ByteOrder, LittleEndian};

use frm::frm::constants::*;

pub const IO_SIZE: usize = 4096;

pub struct ColumnDef {
    pub name: String,
    pub field_type: u8,
    pub length: u16,
    pub flags: u16,
    pub unireg_type: u8,
    pub charset_id: u16,
}

impl ColumnDef {
    pub fn new(name: &str, field_type: u8, length: u16, charset_id: u16) -> Self {
        ColumnDef {
            name: name.to_string(),
            field_type,
            length,
            flags: FIELD_FLAG_NULLABLE | FIELD_FLAG_SIGNED,
            unireg_type: 0,
            charset_id,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.flags &= !FIELD_FLAG_NULLABLE;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.flags &= !FIELD_FLAG_SIGNED;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.unireg_type = UNIREG_NEXT_NUMBER;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }
}

pub struct KeyDef {
    pub name: String,
    pub flags: u16,
    pub algorithm: u8,
    /// (1-based column ordinal, indexed length in bytes)
    pub parts: Vec<(u16, u16)>,
}

impl KeyDef {
    pub fn primary(parts: Vec<(u16, u16)>) -> Self {
        KeyDef {
            name: PRIMARY_KEY_NAME.to_string(),
            flags: 0,
            algorithm: KEY_ALGO_UNDEFINED,
            parts,
        }
    }

    pub fn unique(name: &str, parts: Vec<(u16, u16)>) -> Self {
        KeyDef {
            name: name.to_string(),
            flags: 0,
            algorithm: KEY_ALGO_UNDEFINED,
            parts,
        }
    }

    pub fn index(name: &str, parts: Vec<(u16, u16)>) -> Self {
        KeyDef {
            name: name.to_string(),
            flags: KEY_FLAG_ALLOW_DUPS,
            algorithm: KEY_ALGO_UNDEFINED,
            parts,
        }
    }

    pub fn using(mut self, algorithm: u8) -> Self {
        self.algorithm = algorithm;
        self
    }
}

pub struct FrmBuilder {
    pub columns: Vec<ColumnDef>,
    pub keys: Vec<KeyDef>,
    pub legacy_db_type: u8,
    pub table_charset: u16,
    pub row_type: u8,
    pub mysql_version: u32,
}

impl FrmBuilder {
    pub fn new() -> Self {
        FrmBuilder {
            columns: Vec::new(),
            keys: Vec::new(),
            legacy_db_type: 12,
            table_charset: 33,
            row_type: 0,
            mysql_version: 50726,
        }
    }

    pub fn column(mut self, col: ColumnDef) -> Self {
        self.columns.push(col);
        self
    }

    pub fn key(mut self, key: KeyDef) -> Self {
        self.keys.push(key);
        self
    }

    fn key_section(&self) -> Vec<u8> {
        let n = self.keys.len();
        let total_parts: usize = self.keys.iter().map(|k| k.parts.len()).sum();
        let mut buf = vec![0u8; KEY_SECTION_HEADER_SIZE];
        if n < 0x80 {
            buf[0] = n as u8;
            buf[1] = total_parts as u8;
        } else {
            buf[0] = 0x80 | (n & 0x7f) as u8;
            buf[1] = (n >> 7) as u8;
            LittleEndian::write_u16(&mut buf[2..], total_parts as u16);
        }
        for k in &self.keys {
            let mut rec = [0u8; FRM_KEY_RECORD_SIZE];
            LittleEndian::write_u16(&mut rec[0..], k.flags);
            rec[4] = k.parts.len() as u8;
            rec[5] = k.algorithm;
            buf.extend_from_slice(&rec);
            for &(field, length) in &k.parts {
                let mut part = [0u8; FRM_PART_RECORD_SIZE];
                LittleEndian::write_u16(&mut part[0..], field);
                LittleEndian::write_u16(&mut part[7..], length);
                buf.extend_from_slice(&part);
            }
        }
        buf.push(0xff);
        for k in &self.keys {
            buf.extend_from_slice(k.name.as_bytes());
            buf.push(0xff);
        }
        buf.push(0);
        buf
    }

    fn column_section(&self) -> Vec<u8> {
        let mut buf = vec![0u8; COLUMN_SECTION_HEADER_SIZE];
        // Split names over screens of at most 32 to exercise multi-screen files
        let screens: Vec<&[ColumnDef]> = self.columns.chunks(32).collect();
        LittleEndian::write_u16(&mut buf[0..], screens.len() as u16);
        LittleEndian::write_u16(&mut buf[2..], self.columns.len() as u16);
        for screen in &screens {
            let mut head = [0u8; SCREEN_HEADER_SIZE];
            head[SCREEN_NAME_COUNT] = screen.len() as u8;
            buf.extend_from_slice(&head);
            for c in screen.iter() {
                buf.extend_from_slice(&[0, 0, (c.name.len() + 1) as u8]);
                buf.extend_from_slice(c.name.as_bytes());
                buf.push(0);
            }
        }
        for c in &self.columns {
            let mut rec = [0u8; FRM_COLUMN_RECORD_SIZE];
            LittleEndian::write_u16(&mut rec[COL_FIELD_LENGTH..], c.length);
            LittleEndian::write_u16(&mut rec[COL_FLAGS..], c.flags);
            rec[COL_UNIREG_TYPE] = c.unireg_type;
            rec[COL_CHARSET_LOW] = (c.charset_id >> 8) as u8;
            rec[COL_FIELD_TYPE] = c.field_type;
            rec[COL_CHARSET] = (c.charset_id & 0xff) as u8;
            buf.extend_from_slice(&rec);
        }
        buf
    }

    pub fn build(&self) -> Vec<u8> {
        let keys = self.key_section();
        let rec_length: u16 = 64;
        let end = IO_SIZE + keys.len() + rec_length as usize;
        let col_offset = (end / IO_SIZE + 1) * IO_SIZE + COLUMN_SECTION_EXTRA;
        let cols = self.column_section();

        let mut data = vec![0u8; col_offset];
        LittleEndian::write_u16(&mut data[FRM_SIGNATURE..], FRM_TABLE_SIGNATURE);
        data[FRM_VERSION] = 10;
        data[FRM_LEGACY_DB_TYPE] = self.legacy_db_type;
        LittleEndian::write_u16(&mut data[FRM_IO_SIZE..], IO_SIZE as u16);
        LittleEndian::write_u32(&mut data[FRM_LENGTH..], (col_offset + cols.len()) as u32);
        LittleEndian::write_u16(&mut data[FRM_TMP_KEY_LENGTH..], keys.len() as u16);
        LittleEndian::write_u16(&mut data[FRM_REC_LENGTH..], rec_length);
        LittleEndian::write_u16(&mut data[FRM_KEY_INFO_LENGTH..], keys.len() as u16);
        data[FRM_FILE_VERSION] = 5;
        data[FRM_DEFAULT_CHARSET] = (self.table_charset & 0xff) as u8;
        data[FRM_ROW_TYPE] = self.row_type;
        data[FRM_CHARSET_HIGH] = (self.table_charset >> 8) as u8;
        LittleEndian::write_u32(&mut data[FRM_MYSQL_VERSION_ID..], self.mysql_version);

        data[IO_SIZE..IO_SIZE + keys.len()].copy_from_slice(&keys);
        data.extend_from_slice(&cols);
        data
    }
}

/// A small but representative table:
///
/// ```sql
/// CREATE TABLE `orders`(
/// `id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT,
/// `email` VARCHAR(64) CHARSET utf8mb4 COLLATE utf8mb4_general_ci NOT NULL,
/// `total` DECIMAL(10,2),
/// `note` TEXT CHARSET latin1 COLLATE latin1_swedish_ci,
/// PRIMARY KEY(`id`),
/// UNIQUE KEY `uk_email`(`email`(64)),
/// KEY `idx_note`(`note`(20)) USING BTREE)
/// ```
pub fn orders_table() -> FrmBuilder {
    FrmBuilder::new()
        .column(ColumnDef::new("id", 3, 11, 63).not_null().unsigned().auto_increment())
        .column(ColumnDef::new("email", 15, 256, 45).not_null())
        .column(ColumnDef::new("total", 246, 12, 8).flags(FIELD_FLAG_NULLABLE | FIELD_FLAG_SIGNED | (2 << 8)))
        .column(ColumnDef::new("note", 252, 10, 8))
        .key(KeyDef::primary(vec![(1, 4)]))
        .key(KeyDef::unique("uk_email", vec![(2, 256)]))
        .key(KeyDef::index("idx_note", vec![(4, 20)]).using(KEY_ALGO_BTREE))
}

pub const ORDERS_DDL: &str = "CREATE TABLE `orders`(\n\
`id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT,\n\
`email` VARCHAR(64) CHARSET utf8mb4 COLLATE utf8mb4_general_ci NOT NULL,\n\
`total` DECIMAL(10,2),\n\
`note` TEXT CHARSET latin1 COLLATE latin1_swedish_ci,\n\
PRIMARY KEY(`id`),\n\
UNIQUE KEY `uk_email`(`email`(64)),\n\
KEY `idx_note`(`note`(20)) USING BTREE)";
