//! Decoded table definition and `CREATE TABLE` rendering.
//!
//! [`Schema::decode`] runs the section parsers in file order (header, keys,
//! columns) and then checks every character column against the charset
//! registry, so a successfully decoded schema can always be rendered as long
//! as its key parts point at real columns.
//!
//! The statement layout matches what the legacy tooling produced and what
//! downstream scripts diff against:
//!
//! ```text
//! CREATE TABLE `t`(
//! `id` INT(11) NOT NULL AUTO_INCREMENT,
//! `name` VARCHAR(100) CHARSET utf8 COLLATE utf8_general_ci,
//! PRIMARY KEY(`id`))
//! ```
//!
//! There is no trailing newline or semicolon; callers add their own.

use serde::Serialize;
use std::io::Write;

use crate::frm::charset::{self, CharsetEntry};
use crate::frm::column::{parse_columns, write_quoted, Column};
use crate::frm::header::FrmHeader;
use crate::frm::key::{parse_keys, Key};
use crate::frm::options::{LegacyEngine, RowType};
use crate::{wprint, FrmError};

/// A fully decoded `.frm` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub header: FrmHeader,
    /// Columns in definition order.
    pub columns: Vec<Column>,
    /// Keys in definition order; `PRIMARY` comes first when present.
    pub keys: Vec<Key>,
}

impl Schema {
    /// Decode a complete `.frm` image.
    ///
    /// The first failure aborts decoding; no partial schema is returned.
    /// Columns with an unrecognized field type are kept and render as a
    /// placeholder, but a string or blob column whose charset id is not in
    /// the registry fails with [`FrmError::UnknownCharset`].
    pub fn decode(data: &[u8]) -> Result<Self, FrmError> {
        let header = FrmHeader::parse(data)?;
        let keys = parse_keys(data, &header)?;
        let columns = parse_columns(data, &header)?;

        for col in columns.iter().filter(|c| c.field_type.has_charset()) {
            charset::lookup(col.charset_id())?;
        }

        Ok(Schema {
            header,
            columns,
            keys,
        })
    }

    /// Write the `CREATE TABLE` statement for this schema under `table`.
    pub fn render_create_table(&self, table: &str, w: &mut dyn Write) -> Result<(), FrmError> {
        wprint!(w, "CREATE TABLE ")?;
        write_quoted(w, table)?;
        wprint!(w, "(")?;

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                wprint!(w, ",")?;
            }
            wprint!(w, "\n")?;
            col.write_ddl(w)?;
        }
        for key in &self.keys {
            wprint!(w, ",\n")?;
            key.write_ddl(w, &self.columns)?;
        }

        wprint!(w, ")")?;
        Ok(())
    }

    /// Render the `CREATE TABLE` statement into a `String`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use frm::frm::schema::Schema;
    ///
    /// let data = std::fs::read("/var/lib/mysql/shop/orders.frm").unwrap();
    /// let schema = Schema::decode(&data).unwrap();
    /// println!("{};", schema.create_table_sql("orders").unwrap());
    /// ```
    pub fn create_table_sql(&self, table: &str) -> Result<String, FrmError> {
        let mut buf = Vec::new();
        self.render_create_table(table, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Storage engine recorded in the header.
    ///
    /// Partitioned tables store a marker code in byte 3 and the engine of the
    /// partitions in byte 61; the latter is returned for them.
    pub fn engine(&self) -> LegacyEngine {
        match LegacyEngine::from_u8(self.header.legacy_db_type) {
            LegacyEngine::Partition => LegacyEngine::from_u8(self.header.default_part_db_type),
            engine => engine,
        }
    }

    pub fn row_type(&self) -> RowType {
        RowType::from_u8(self.header.row_type)
    }

    /// Table default charset, or `None` when unset or not in the registry.
    pub fn table_charset(&self) -> Option<&'static CharsetEntry> {
        match self.header.table_charset_id() {
            0 => None,
            id => charset::lookup(id).ok(),
        }
    }

    /// Write the table option suffix, e.g.
    /// ` ENGINE=InnoDB DEFAULT CHARSET=utf8 COLLATE=utf8_general_ci`.
    ///
    /// Options the header cannot express (dynamic engines, unknown charsets)
    /// are left out.
    pub fn render_table_options(&self, w: &mut dyn Write) -> Result<(), FrmError> {
        if let Some(engine) = self.engine().engine_name() {
            wprint!(w, " ENGINE={}", engine)?;
        }
        if let Some(cs) = self.table_charset() {
            wprint!(w, " DEFAULT CHARSET={} COLLATE={}", cs.name, cs.collation)?;
        }
        let row_type = self.row_type();
        if !matches!(row_type, RowType::Default | RowType::Unknown(_)) {
            wprint!(w, " ROW_FORMAT={}", row_type)?;
        }
        if self.header.key_block_size != 0 {
            wprint!(w, " KEY_BLOCK_SIZE={}", self.header.key_block_size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frm::constants::*;
    use crate::frm::field_type::FieldType;
    use byteorder::{ByteOrder, LittleEndian};

    const IO_SIZE: usize = 1024;

    struct ColSpec {
        name: &'static str,
        field_type: u8,
        length: u16,
        flags: u16,
        unireg_type: u8,
        charset_id: u16,
    }

    fn col(name: &'static str, field_type: u8, length: u16, flags: u16, charset_id: u16) -> ColSpec {
        ColSpec {
            name,
            field_type,
            length,
            flags,
            unireg_type: 0,
            charset_id,
        }
    }

    struct KeySpec {
        name: String,
        flags: u16,
        algorithm: u8,
        parts: Vec<(u16, u16)>,
    }

    fn key(name: &str, flags: u16, parts: Vec<(u16, u16)>) -> KeySpec {
        KeySpec {
            name: name.to_string(),
            flags,
            algorithm: 0,
            parts,
        }
    }

    fn key_section(keys: &[KeySpec]) -> Vec<u8> {
        let total_parts: usize = keys.iter().map(|k| k.parts.len()).sum();
        let mut buf = vec![0u8; KEY_SECTION_HEADER_SIZE];
        if keys.len() < 0x80 {
            buf[0] = keys.len() as u8;
            buf[1] = total_parts as u8;
        } else {
            buf[0] = 0x80 | (keys.len() & 0x7f) as u8;
            buf[1] = (keys.len() >> 7) as u8;
            buf[2] = (total_parts & 0xff) as u8;
            buf[3] = (total_parts >> 8) as u8;
        }
        for k in keys {
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
        for k in keys {
            buf.extend_from_slice(k.name.as_bytes());
            buf.push(0xff);
        }
        buf.push(0);
        buf
    }

    fn column_section(cols: &[ColSpec]) -> Vec<u8> {
        let mut buf = vec![0u8; COLUMN_SECTION_HEADER_SIZE];
        LittleEndian::write_u16(&mut buf[0..], 1);
        LittleEndian::write_u16(&mut buf[2..], cols.len() as u16);
        let mut screen = [0u8; SCREEN_HEADER_SIZE];
        screen[SCREEN_NAME_COUNT] = cols.len() as u8;
        buf.extend_from_slice(&screen);
        for c in cols {
            buf.extend_from_slice(&[0, 0, (c.name.len() + 1) as u8]);
            buf.extend_from_slice(c.name.as_bytes());
            buf.push(0);
        }
        for c in cols {
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

    fn build_frm(cols: &[ColSpec], keys: &[KeySpec]) -> Vec<u8> {
        let keys_buf = key_section(keys);
        let mut hdr = FrmHeader {
            file_type: FRM_TABLE_SIGNATURE,
            version: 10,
            legacy_db_type: 12,
            io_size: IO_SIZE as u16,
            length: 0,
            tmp_key_length: keys_buf.len() as u16,
            rec_length: 16,
            max_rows: 0,
            min_rows: 0,
            db_create_pack: 0,
            key_info_length: keys_buf.len() as u16,
            table_options: 0,
            file_version: 5,
            avg_row_length: 0,
            default_charset: 33,
            row_type: 0,
            charset_high: 0,
            stats_sample_pages: 0,
            stats_auto_recalc: 0,
            key_length: 0,
            mysql_version_id: 50726,
            extra_size: 0,
            extra_rec_buf_length: 0,
            default_part_db_type: 0,
            key_block_size: 0,
        };
        let col_offset = hdr.column_section_offset().unwrap();
        let cols_buf = column_section(cols);
        hdr.length = (col_offset + cols_buf.len()) as u32;

        let mut data = vec![0u8; col_offset];
        LittleEndian::write_u16(&mut data[FRM_SIGNATURE..], hdr.file_type);
        data[FRM_VERSION] = hdr.version;
        data[FRM_LEGACY_DB_TYPE] = hdr.legacy_db_type;
        LittleEndian::write_u16(&mut data[FRM_IO_SIZE..], hdr.io_size);
        LittleEndian::write_u32(&mut data[FRM_LENGTH..], hdr.length);
        LittleEndian::write_u16(&mut data[FRM_TMP_KEY_LENGTH..], hdr.tmp_key_length);
        LittleEndian::write_u16(&mut data[FRM_REC_LENGTH..], hdr.rec_length);
        LittleEndian::write_u16(&mut data[FRM_KEY_INFO_LENGTH..], hdr.key_info_length);
        data[FRM_FILE_VERSION] = hdr.file_version;
        data[FRM_DEFAULT_CHARSET] = hdr.default_charset;
        LittleEndian::write_u32(&mut data[FRM_MYSQL_VERSION_ID..], hdr.mysql_version_id);
        data[IO_SIZE..IO_SIZE + keys_buf.len()].copy_from_slice(&keys_buf);
        data.extend_from_slice(&cols_buf);
        data
    }

    fn sample_columns() -> Vec<ColSpec> {
        let mut id = col("id", 3, 11, 0, 63);
        id.unireg_type = UNIREG_NEXT_NUMBER;
        vec![
            id,
            col("name", 15, 300, FIELD_FLAG_NULLABLE | FIELD_FLAG_SIGNED, 33),
            col("price", 246, 7, 0x0200, 8),
        ]
    }

    fn sample_keys() -> Vec<KeySpec> {
        vec![
            key("PRIMARY", 0, vec![(1, 4)]),
            key("name_idx", KEY_FLAG_ALLOW_DUPS, vec![(2, 30)]),
        ]
    }

    #[test]
    fn test_decode_and_render() {
        let data = build_frm(&sample_columns(), &sample_keys());
        let schema = Schema::decode(&data).unwrap();
        assert_eq!(schema.columns.len(), 3);
        assert_eq!(schema.keys.len(), 2);
        assert_eq!(schema.keys[0].name, "PRIMARY");
        assert_eq!(schema.keys[1].name, "name_idx");
        assert_eq!(schema.columns[1].field_type, FieldType::VarChar);

        let sql = schema.create_table_sql("t").unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE `t`(\n\
             `id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT,\n\
             `name` VARCHAR(100) CHARSET utf8 COLLATE utf8_general_ci,\n\
             `price` DECIMAL(6,2) UNSIGNED NOT NULL,\n\
             PRIMARY KEY(`id`),\n\
             KEY `name_idx`(`name`(10)))"
        );
    }

    #[test]
    fn test_separator_and_paren_balance() {
        let data = build_frm(&sample_columns(), &sample_keys());
        let schema = Schema::decode(&data).unwrap();
        let sql = schema.create_table_sql("t").unwrap();
        assert_eq!(sql.matches('(').count(), sql.matches(')').count());
        // One separator between every pair of fragments
        assert_eq!(sql.matches(",\n").count(), 3 + 2 - 1);
        assert!(!sql.ends_with('\n'));
    }

    #[test]
    fn test_no_keys() {
        let data = build_frm(&sample_columns(), &[]);
        let schema = Schema::decode(&data).unwrap();
        assert!(schema.keys.is_empty());
        let sql = schema.create_table_sql("t").unwrap();
        assert!(sql.ends_with("NOT NULL)"));
        assert_eq!(sql.matches(",\n").count(), 2);
    }

    #[test]
    fn test_extended_key_count() {
        let cols = vec![col("a", 3, 11, FIELD_FLAG_SIGNED, 63)];
        let keys: Vec<KeySpec> = (0..261)
            .map(|i| key(&format!("k{}", i), KEY_FLAG_ALLOW_DUPS, vec![(1, 4)]))
            .collect();
        let data = build_frm(&cols, &keys);
        assert_eq!(data[IO_SIZE], 0x85);
        assert_eq!(data[IO_SIZE + 1], 0x02);

        let schema = Schema::decode(&data).unwrap();
        assert_eq!(schema.keys.len(), 261);
        assert_eq!(schema.keys[260].name, "k260");
        let sql = schema.create_table_sql("t").unwrap();
        assert!(sql.ends_with(",\nKEY `k260`(`a`))"));
    }

    #[test]
    fn test_unknown_type_keeps_siblings() {
        let cols = vec![
            col("a", 3, 11, FIELD_FLAG_SIGNED, 63),
            col("odd", 200, 4, FIELD_FLAG_NULLABLE, 63),
            col("b", 1, 4, FIELD_FLAG_NULLABLE, 63),
        ];
        let data = build_frm(&cols, &[]);
        let schema = Schema::decode(&data).unwrap();
        assert_eq!(schema.columns[1].field_type, FieldType::Unknown(200));
        let sql = schema.create_table_sql("t").unwrap();
        assert!(sql.contains("\n`a` INT(11) NOT NULL,"));
        assert!(sql.contains("\n`odd` <UNKNOWN_TYPE>,"));
        assert!(sql.contains("\n`b` TINYINT(4) UNSIGNED)"));
    }

    #[test]
    fn test_unknown_charset_fails_decode() {
        let cols = vec![col("s", 15, 30, FIELD_FLAG_NULLABLE, 17)];
        let data = build_frm(&cols, &[]);
        assert!(matches!(
            Schema::decode(&data),
            Err(FrmError::UnknownCharset(17))
        ));

        // Non-character columns never consult the registry
        let cols = vec![col("n", 3, 11, FIELD_FLAG_NULLABLE, 17)];
        assert!(Schema::decode(&build_frm(&cols, &[])).is_ok());
    }

    #[test]
    fn test_bad_key_reference_fails_render() {
        let cols = vec![col("a", 3, 11, FIELD_FLAG_SIGNED, 63)];
        let keys = vec![key("k", KEY_FLAG_ALLOW_DUPS, vec![(2, 4)])];
        let schema = Schema::decode(&build_frm(&cols, &keys)).unwrap();
        assert!(matches!(
            schema.create_table_sql("t"),
            Err(FrmError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_truncated_column_section() {
        let data = build_frm(&sample_columns(), &sample_keys());
        let cut = &data[..data.len() - 5];
        assert!(matches!(
            Schema::decode(cut),
            Err(FrmError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_table_options() {
        let mut data = build_frm(&sample_columns(), &[]);
        let schema = Schema::decode(&data).unwrap();
        assert_eq!(schema.engine(), LegacyEngine::InnoDb);
        assert_eq!(schema.table_charset().map(|cs| cs.name), Some("utf8"));
        let mut out = Vec::new();
        schema.render_table_options(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            " ENGINE=InnoDB DEFAULT CHARSET=utf8 COLLATE=utf8_general_ci"
        );

        data[FRM_LEGACY_DB_TYPE] = 20;
        data[FRM_DEFAULT_PART_DB_TYPE] = 9;
        data[FRM_ROW_TYPE] = 5;
        data[FRM_DEFAULT_CHARSET] = 0;
        LittleEndian::write_u16(&mut data[FRM_KEY_BLOCK_SIZE..], 8);
        let schema = Schema::decode(&data).unwrap();
        let mut out = Vec::new();
        schema.render_table_options(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            " ENGINE=MyISAM ROW_FORMAT=COMPACT KEY_BLOCK_SIZE=8"
        );
    }

    #[test]
    fn test_schema_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
