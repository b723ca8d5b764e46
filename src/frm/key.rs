//! Key section parsing and index DDL rendering.
//!
//! The key section starts at `io_size`. Its 6-byte header carries the key
//! and key-part counts; older servers store both as single bytes, while
//! tables with more than 127 keys set the top bit of the first byte and
//! spread the key count over both bytes (see [`KeyCounts`]).
//!
//! The header is followed by one 8-byte record per key, each immediately
//! followed by that key's 9-byte part records. After the last part comes a
//! terminator byte and then the key names, each ended by that same byte.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::frm::column::{write_quoted, Column};
use crate::frm::constants::*;
use crate::frm::header::FrmHeader;
use crate::frm::section::{out_of_bounds, Section};
use crate::{wprint, FrmError};

/// Index algorithm (`enum ha_key_alg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyAlgorithm {
    /// Engine default; no `USING` clause.
    Undefined,
    BTree,
    RTree,
    Hash,
    FullText,
    /// Unrecognized code, rendered without a `USING` clause.
    Unknown(u8),
}

impl KeyAlgorithm {
    pub fn from_u8(value: u8) -> Self {
        match value {
            KEY_ALGO_UNDEFINED => KeyAlgorithm::Undefined,
            KEY_ALGO_BTREE => KeyAlgorithm::BTree,
            KEY_ALGO_RTREE => KeyAlgorithm::RTree,
            KEY_ALGO_HASH => KeyAlgorithm::Hash,
            KEY_ALGO_FULLTEXT => KeyAlgorithm::FullText,
            other => KeyAlgorithm::Unknown(other),
        }
    }

    /// Keyword used in `USING <algo>`, if any.
    pub fn using_clause(self) -> Option<&'static str> {
        match self {
            KeyAlgorithm::BTree => Some("BTREE"),
            KeyAlgorithm::RTree => Some("RTREE"),
            KeyAlgorithm::Hash => Some("HASH"),
            KeyAlgorithm::FullText => Some("FULLTEXT"),
            KeyAlgorithm::Undefined | KeyAlgorithm::Unknown(_) => None,
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Undefined => f.write_str("UNDEFINED"),
            KeyAlgorithm::Unknown(v) => write!(f, "UNKNOWN({})", v),
            other => f.write_str(other.using_clause().unwrap_or("UNDEFINED")),
        }
    }
}

/// Key and part counts from the first bytes of the key section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyCounts {
    /// Number of keys.
    pub keys: usize,
    /// Total number of key parts across all keys.
    pub parts: usize,
    /// True when the extended (more than 127 keys) encoding was used.
    pub extended: bool,
}

impl KeyCounts {
    /// Decode the counts from the key section header.
    ///
    /// # Examples
    ///
    /// ```
    /// use frm::frm::key::KeyCounts;
    ///
    /// // Legacy encoding: one byte each
    /// let c = KeyCounts::parse(&[3, 5, 0, 0, 0, 0]).unwrap();
    /// assert_eq!((c.keys, c.parts, c.extended), (3, 5, false));
    ///
    /// // Extended encoding: (0x02 << 7) | 0x05 keys, parts from bytes 2-3
    /// let c = KeyCounts::parse(&[0x85, 0x02, 0x10, 0x01, 0, 0]).unwrap();
    /// assert_eq!((c.keys, c.parts, c.extended), (261, 0x0110, true));
    /// ```
    pub fn parse(head: &[u8]) -> Option<Self> {
        if head.len() < 4 {
            return None;
        }
        let keys_byte = head[0];
        let parts_byte = head[1];

        if keys_byte & KEY_EXTENDED_COUNT_FLAG == 0 {
            Some(KeyCounts {
                keys: keys_byte as usize,
                parts: parts_byte as usize,
                extended: false,
            })
        } else {
            Some(KeyCounts {
                keys: ((parts_byte as usize) << 7) | (keys_byte & 0x7f) as usize,
                parts: head[2] as usize + ((head[3] as usize) << 8),
                extended: true,
            })
        }
    }
}

/// One column's contribution to a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPart {
    /// 1-based column ordinal in the low 14 bits; the top 2 bits are reserved.
    pub field_number: u16,
    /// Byte offset of the field within the record.
    pub offset: u16,
    pub key_type: u16,
    pub key_part_flag: u8,
    /// Indexed length in bytes (the prefix length for text/blob columns).
    pub length: u16,
}

impl KeyPart {
    /// Decode a 9-byte key part record.
    pub fn parse(record: &[u8]) -> Option<Self> {
        if record.len() < FRM_PART_RECORD_SIZE {
            return None;
        }

        Some(KeyPart {
            field_number: LittleEndian::read_u16(&record[0..]),
            offset: LittleEndian::read_u16(&record[2..]),
            key_type: LittleEndian::read_u16(&record[4..]),
            key_part_flag: record[6],
            length: LittleEndian::read_u16(&record[7..]),
        })
    }

    /// 0-based index into the table's columns, or `None` for ordinal 0.
    pub fn column_index(&self) -> Option<usize> {
        ((self.field_number & KEY_PART_FIELD_MASK) as usize).checked_sub(1)
    }

    /// Resolve the referenced column, bounds-checked against `columns`.
    pub fn column<'c>(&self, columns: &'c [Column]) -> Result<&'c Column, FrmError> {
        self.column_index()
            .and_then(|i| columns.get(i))
            .ok_or_else(|| {
                out_of_bounds(
                    "key part column reference",
                    (self.field_number & KEY_PART_FIELD_MASK) as usize,
                    1,
                    columns.len(),
                )
            })
    }
}

/// A decoded key (index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    pub name: String,
    /// HA_NOSAME and friends; bit 0 clear means unique.
    pub flags: u16,
    /// Total key length in bytes.
    pub length: u16,
    /// Number of part records following the key record.
    pub num_parts: u8,
    pub algorithm: KeyAlgorithm,
    pub block_size: u16,
    pub parts: Vec<KeyPart>,
}

impl Key {
    /// Decode an 8-byte key record. Parts and name are filled in later.
    pub fn parse(record: &[u8]) -> Option<Self> {
        if record.len() < FRM_KEY_RECORD_SIZE {
            return None;
        }

        Some(Key {
            name: String::new(),
            flags: LittleEndian::read_u16(&record[0..]),
            length: LittleEndian::read_u16(&record[2..]),
            num_parts: record[4],
            algorithm: KeyAlgorithm::from_u8(record[5]),
            block_size: LittleEndian::read_u16(&record[6..]),
            parts: Vec::new(),
        })
    }

    pub fn is_primary(&self) -> bool {
        self.name == PRIMARY_KEY_NAME
    }

    pub fn is_unique(&self) -> bool {
        self.flags & KEY_FLAG_ALLOW_DUPS == 0
    }

    /// `PRIMARY KEY`, `UNIQUE KEY`, or `KEY`.
    pub fn kind(&self) -> &'static str {
        if self.is_primary() {
            "PRIMARY KEY"
        } else if self.is_unique() {
            "UNIQUE KEY"
        } else {
            "KEY"
        }
    }

    /// Write the key's `CREATE TABLE` fragment.
    ///
    /// Parts are resolved against `columns` here rather than at decode time;
    /// a reference past the end of `columns` is [`FrmError::OutOfBounds`].
    pub fn write_ddl(&self, w: &mut dyn Write, columns: &[Column]) -> Result<(), FrmError> {
        wprint!(w, "{}", self.kind())?;
        if !self.is_primary() {
            wprint!(w, " ")?;
            write_quoted(w, &self.name)?;
        }

        wprint!(w, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            let col = part.column(columns)?;
            if i > 0 {
                wprint!(w, ",")?;
            }
            write_quoted(w, &col.name)?;

            if col.field_type.has_charset() {
                let mut len = part.length;
                if !col.is_binary() {
                    len /= col.charset_entry()?.max_len as u16;
                }
                wprint!(w, "({})", len)?;
            } else if col.field_type.is_prefixable() {
                wprint!(w, "({})", part.length)?;
            }
        }
        wprint!(w, ")")?;

        if let Some(algo) = self.algorithm.using_clause() {
            wprint!(w, " USING {}", algo)?;
        }
        Ok(())
    }

    /// Render the key fragment into a `String`.
    pub fn to_ddl(&self, columns: &[Column]) -> Result<String, FrmError> {
        let mut buf = Vec::new();
        self.write_ddl(&mut buf, columns)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Parse the key section.
pub fn parse_keys(data: &[u8], header: &FrmHeader) -> Result<Vec<Key>, FrmError> {
    let mut section = Section::at(data, header.key_section_offset(), "key section")?;
    let head = section.take(KEY_SECTION_HEADER_SIZE, "key section header")?;
    let counts = KeyCounts::parse(head).ok_or_else(|| {
        out_of_bounds(
            "key section header",
            header.key_section_offset(),
            KEY_SECTION_HEADER_SIZE,
            data.len(),
        )
    })?;

    let mut keys = Vec::with_capacity(counts.keys.min(data.len() / FRM_KEY_RECORD_SIZE));
    for _ in 0..counts.keys {
        let at = section.position();
        let record = section.take(FRM_KEY_RECORD_SIZE, "key record")?;
        let mut key = Key::parse(record)
            .ok_or_else(|| out_of_bounds("key record", at, FRM_KEY_RECORD_SIZE, data.len()))?;
        key.parts.reserve(key.num_parts as usize);
        for _ in 0..key.num_parts {
            let at = section.position();
            let record = section.take(FRM_PART_RECORD_SIZE, "key part record")?;
            let part = KeyPart::parse(record).ok_or_else(|| {
                out_of_bounds("key part record", at, FRM_PART_RECORD_SIZE, data.len())
            })?;
            key.parts.push(part);
        }
        keys.push(key);
    }

    let terminator = section.read_u8("key name terminator")?;
    for key in keys.iter_mut() {
        let name = section.take_until(terminator, "key name")?;
        key.name = String::from_utf8_lossy(name).into_owned();
    }

    Ok(keys)
}
