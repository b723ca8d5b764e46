//! Column section parsing and column DDL rendering.
//!
//! The column section sits after the I/O-aligned default-record block (see
//! [`FrmHeader::column_section_offset`]). It starts with a 32-byte block
//! holding the screen and column counts, followed by the "screens": legacy
//! form-layout blocks that happen to be the only place column names are
//! stored. After the screens come one 17-byte attribute record per column,
//! in the same order as the names.
//!
//! [`Column::write_ddl`] maps a decoded column to its `CREATE TABLE`
//! fragment.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::io::Write;

use crate::frm::charset::{self, CharsetEntry};
use crate::frm::constants::*;
use crate::frm::field_type::{FieldType, GeometryType};
use crate::frm::header::FrmHeader;
use crate::frm::section::{out_of_bounds, Section};
use crate::{wprint, FrmError};

/// A decoded column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column name from the screen section.
    pub name: String,
    /// Length in bytes (display width for integers, total digits for DECIMAL).
    pub field_length: u16,
    /// Raw unireg byte. Not used for rendering.
    pub unireg: u8,
    /// Pack flags. Bit 15 clear means NOT NULL, bit 0 set means signed,
    /// bits 8-12 carry the DECIMAL scale.
    pub flags: u16,
    /// Unireg type; 15 marks AUTO_INCREMENT.
    pub unireg_type: u8,
    /// High byte of the charset id. The name follows the on-disk layout,
    /// where this byte precedes the field type.
    pub charset_low: u8,
    /// ENUM/SET interval number.
    pub interval_nr: u8,
    /// Physical field type.
    pub field_type: FieldType,
    /// Low byte of the charset id, or the geometry subtype.
    pub charset: u8,
    /// Length of the column comment. Not used for rendering.
    pub comment_length: u16,
}

impl Column {
    /// Decode a 17-byte column attribute record. The name is filled in
    /// separately from the screen section.
    pub fn parse(record: &[u8], name: String) -> Option<Self> {
        if record.len() < FRM_COLUMN_RECORD_SIZE {
            return None;
        }

        Some(Column {
            name,
            field_length: LittleEndian::read_u16(&record[COL_FIELD_LENGTH..]),
            unireg: record[COL_UNIREG],
            flags: LittleEndian::read_u16(&record[COL_FLAGS..]),
            unireg_type: record[COL_UNIREG_TYPE],
            charset_low: record[COL_CHARSET_LOW],
            interval_nr: record[COL_INTERVAL_NR],
            field_type: FieldType::from_u8(record[COL_FIELD_TYPE]),
            charset: record[COL_CHARSET],
            comment_length: LittleEndian::read_u16(&record[COL_COMMENT_LENGTH..]),
        })
    }

    /// Combined 16-bit charset id.
    pub fn charset_id(&self) -> u16 {
        ((self.charset_low as u16) << 8) + self.charset as u16
    }

    /// Registry entry for this column's charset.
    pub fn charset_entry(&self) -> Result<&'static CharsetEntry, FrmError> {
        charset::lookup(self.charset_id())
    }

    /// True when the charset is the `binary` pseudo-charset.
    pub fn is_binary(&self) -> bool {
        self.charset_id() == BINARY_CHARSET
    }

    /// The legacy format stores "may be NULL" in bit 15; when it is clear
    /// the column is NOT NULL.
    pub fn is_nullable(&self) -> bool {
        self.flags & FIELD_FLAG_NULLABLE != 0
    }

    pub fn is_signed(&self) -> bool {
        self.flags & FIELD_FLAG_SIGNED != 0
    }

    pub fn is_auto_increment(&self) -> bool {
        self.unireg_type == UNIREG_NEXT_NUMBER
    }

    /// DECIMAL scale, bits 8-12 of the flags word.
    pub fn decimal_scale(&self) -> u16 {
        (self.flags >> FIELD_FLAG_DEC_SHIFT) & FIELD_FLAG_DEC_MASK
    }

    /// DECIMAL precision: the stored length less the sign and point positions.
    pub fn decimal_precision(&self) -> i32 {
        let mut digits = self.field_length as i32 - (self.flags & FIELD_FLAG_SIGNED) as i32;
        if self.decimal_scale() > 0 {
            digits -= 1;
        }
        digits
    }

    /// Write the column's `CREATE TABLE` fragment.
    ///
    /// Unrecognized field types produce `<UNKNOWN_TYPE>` rather than an error
    /// so one odd column does not prevent rendering the rest of the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use frm::frm::column::Column;
    /// use frm::frm::field_type::FieldType;
    ///
    /// let col = Column {
    ///     name: "price".to_string(),
    ///     field_length: 7,
    ///     unireg: 0,
    ///     flags: 0x0200, // scale 2, unsigned, NOT NULL
    ///     unireg_type: 0,
    ///     charset_low: 0,
    ///     interval_nr: 0,
    ///     field_type: FieldType::NewDecimal,
    ///     charset: 8,
    ///     comment_length: 0,
    /// };
    /// assert_eq!(col.to_ddl().unwrap(), "`price` DECIMAL(6,2) UNSIGNED NOT NULL");
    /// ```
    pub fn write_ddl(&self, w: &mut dyn Write) -> Result<(), FrmError> {
        write_quoted(w, &self.name)?;
        wprint!(w, " ")?;

        match self.field_type {
            FieldType::NewDate => wprint!(w, "DATE")?,
            FieldType::DateTime2 => wprint!(w, "DATETIME")?,
            FieldType::Time2 => wprint!(w, "TIME")?,
            FieldType::Timestamp2 => wprint!(w, "TIMESTAMP")?,
            FieldType::Geometry => {
                let keyword = GeometryType::from_id(self.charset_id())
                    .unwrap_or(GeometryType::Geometry)
                    .keyword();
                wprint!(w, "{}", keyword)?;
            }
            FieldType::Double => self.write_signed(w, "DOUBLE")?,
            FieldType::Float => self.write_signed(w, "FLOAT")?,
            FieldType::Bit => self.write_sized(w, "BIT")?,
            FieldType::Tiny => self.write_sized_signed(w, "TINYINT")?,
            FieldType::Short => self.write_sized_signed(w, "SMALLINT")?,
            FieldType::Long => self.write_sized_signed(w, "INT")?,
            FieldType::Int24 => self.write_sized_signed(w, "MEDIUMINT")?,
            FieldType::LongLong => self.write_sized_signed(w, "BIGINT")?,
            FieldType::TinyBlob => self.write_blob(w, "TINY")?,
            FieldType::MediumBlob => self.write_blob(w, "MEDIUM")?,
            FieldType::LongBlob => self.write_blob(w, "LONG")?,
            FieldType::Blob => self.write_blob(w, "")?,
            FieldType::VarChar => self.write_string(w, "VAR")?,
            FieldType::String => self.write_string(w, "")?,
            FieldType::NewDecimal => {
                wprint!(
                    w,
                    "DECIMAL({},{})",
                    self.decimal_precision(),
                    self.decimal_scale()
                )?;
                self.write_sign(w)?;
            }
            _ => wprint!(w, "{}", UNKNOWN_TYPE_PLACEHOLDER)?,
        }

        if !self.is_nullable() {
            wprint!(w, " NOT NULL")?;
        }
        if self.is_auto_increment() {
            wprint!(w, " AUTO_INCREMENT")?;
        }
        Ok(())
    }

    /// Render the column fragment into a `String`.
    pub fn to_ddl(&self) -> Result<String, FrmError> {
        let mut buf = Vec::new();
        self.write_ddl(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_sign(&self, w: &mut dyn Write) -> Result<(), FrmError> {
        if !self.is_signed() {
            wprint!(w, " UNSIGNED")?;
        }
        Ok(())
    }

    fn write_signed(&self, w: &mut dyn Write, keyword: &str) -> Result<(), FrmError> {
        wprint!(w, "{}", keyword)?;
        self.write_sign(w)
    }

    fn write_sized(&self, w: &mut dyn Write, keyword: &str) -> Result<(), FrmError> {
        wprint!(w, "{}({})", keyword, self.field_length)
    }

    fn write_sized_signed(&self, w: &mut dyn Write, keyword: &str) -> Result<(), FrmError> {
        self.write_sized(w, keyword)?;
        self.write_sign(w)
    }

    fn write_charset(&self, w: &mut dyn Write, cs: &CharsetEntry) -> Result<(), FrmError> {
        wprint!(w, " CHARSET {} COLLATE {}", cs.name, cs.collation)
    }

    fn write_blob(&self, w: &mut dyn Write, prefix: &str) -> Result<(), FrmError> {
        if self.is_binary() {
            wprint!(w, "{}BLOB", prefix)
        } else {
            let cs = self.charset_entry()?;
            wprint!(w, "{}TEXT", prefix)?;
            self.write_charset(w, cs)
        }
    }

    fn write_string(&self, w: &mut dyn Write, prefix: &str) -> Result<(), FrmError> {
        if self.is_binary() {
            wprint!(w, "{}BINARY({})", prefix, self.field_length)
        } else {
            let cs = self.charset_entry()?;
            wprint!(
                w,
                "{}CHAR({})",
                prefix,
                self.field_length / cs.max_len as u16
            )?;
            self.write_charset(w, cs)
        }
    }
}

/// Write a backtick-quoted identifier.
pub(crate) fn write_quoted(w: &mut dyn Write, name: &str) -> Result<(), FrmError> {
    wprint!(w, "`{}`", name)
}

/// Parse the column section.
///
/// Names are collected from every screen in file order and paired with the
/// attribute records that follow. The number of names must match the
/// declared column count; a mismatch means the section is damaged and
/// decoding fails rather than guessing.
pub fn parse_columns(data: &[u8], header: &FrmHeader) -> Result<Vec<Column>, FrmError> {
    let offset = header.column_section_offset()?;
    let mut section = Section::at(data, offset, "column section")?;

    let head = section.take(COLUMN_SECTION_HEADER_SIZE, "column section header")?;
    let num_screens = LittleEndian::read_u16(&head[0..]) as usize;
    let num_columns = LittleEndian::read_u16(&head[2..]) as usize;

    let mut names: Vec<String> = Vec::with_capacity(num_columns);
    for _ in 0..num_screens {
        let screen = section.take(SCREEN_HEADER_SIZE, "screen header")?;
        let num_names = screen[SCREEN_NAME_COUNT] as usize;

        for _ in 0..num_names {
            if names.len() == num_columns {
                return Err(out_of_bounds(
                    "column name beyond declared column count",
                    section.position(),
                    1,
                    num_columns,
                ));
            }
            section.skip(SCREEN_NAME_SKIP, "column name prefix")?;
            let name_size = section.read_u8("column name length")? as usize;
            let raw = section.take(name_size, "column name")?;
            // Last byte is the terminator
            let name = &raw[..name_size.saturating_sub(1)];
            names.push(String::from_utf8_lossy(name).into_owned());
        }
    }

    if names.len() != num_columns {
        return Err(out_of_bounds(
            "column names",
            section.position(),
            num_columns - names.len(),
            num_columns,
        ));
    }

    let mut columns = Vec::with_capacity(num_columns);
    for name in names {
        let at = section.position();
        let record = section.take(FRM_COLUMN_RECORD_SIZE, "column record")?;
        let col = Column::parse(record, name).ok_or_else(|| {
            out_of_bounds("column record", at, FRM_COLUMN_RECORD_SIZE, data.len())
        })?;
        columns.push(col);
    }

    Ok(columns)
}
