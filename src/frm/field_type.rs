//! Physical field type codes.
//!
//! Byte 13 of each column record holds the server's `enum_field_types`
//! value for the column's *real* type. [`FieldType`] gives every code a
//! variant and keeps anything unrecognized in [`FieldType::Unknown`] so that
//! a new or corrupt code degrades to a visible placeholder at render time.
//!
//! Geometry columns reuse the charset byte as a subtype tag, decoded by
//! [`GeometryType`].

use serde::Serialize;
use std::fmt;

/// MySQL `enum_field_types`, as stored in `.frm` column records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldType {
    /// Pre-5.0 DECIMAL stored as a string (MYSQL_TYPE_DECIMAL = 0)
    Decimal,
    /// TINYINT (MYSQL_TYPE_TINY = 1)
    Tiny,
    /// SMALLINT (MYSQL_TYPE_SHORT = 2)
    Short,
    /// INT (MYSQL_TYPE_LONG = 3)
    Long,
    /// FLOAT (MYSQL_TYPE_FLOAT = 4)
    Float,
    /// DOUBLE (MYSQL_TYPE_DOUBLE = 5)
    Double,
    /// MYSQL_TYPE_NULL = 6
    Null,
    /// Pre-5.6 TIMESTAMP (MYSQL_TYPE_TIMESTAMP = 7)
    Timestamp,
    /// BIGINT (MYSQL_TYPE_LONGLONG = 8)
    LongLong,
    /// MEDIUMINT (MYSQL_TYPE_INT24 = 9)
    Int24,
    /// Pre-5.0 DATE (MYSQL_TYPE_DATE = 10)
    Date,
    /// Pre-5.6 TIME (MYSQL_TYPE_TIME = 11)
    Time,
    /// Pre-5.6 DATETIME (MYSQL_TYPE_DATETIME = 12)
    DateTime,
    /// YEAR (MYSQL_TYPE_YEAR = 13)
    Year,
    /// DATE (MYSQL_TYPE_NEWDATE = 14)
    NewDate,
    /// VARCHAR / VARBINARY (MYSQL_TYPE_VARCHAR = 15)
    VarChar,
    /// BIT (MYSQL_TYPE_BIT = 16)
    Bit,
    /// TIMESTAMP with fractional seconds (MYSQL_TYPE_TIMESTAMP2 = 17)
    Timestamp2,
    /// DATETIME with fractional seconds (MYSQL_TYPE_DATETIME2 = 18)
    DateTime2,
    /// TIME with fractional seconds (MYSQL_TYPE_TIME2 = 19)
    Time2,
    /// DECIMAL (MYSQL_TYPE_NEWDECIMAL = 246)
    NewDecimal,
    /// ENUM (MYSQL_TYPE_ENUM = 247)
    Enum,
    /// SET (MYSQL_TYPE_SET = 248)
    Set,
    /// TINYBLOB / TINYTEXT (MYSQL_TYPE_TINY_BLOB = 249)
    TinyBlob,
    /// MEDIUMBLOB / MEDIUMTEXT (MYSQL_TYPE_MEDIUM_BLOB = 250)
    MediumBlob,
    /// LONGBLOB / LONGTEXT (MYSQL_TYPE_LONG_BLOB = 251)
    LongBlob,
    /// BLOB / TEXT (MYSQL_TYPE_BLOB = 252)
    Blob,
    /// Pre-5.0 VARCHAR (MYSQL_TYPE_VAR_STRING = 253)
    VarString,
    /// CHAR / BINARY (MYSQL_TYPE_STRING = 254)
    String,
    /// Spatial types (MYSQL_TYPE_GEOMETRY = 255)
    Geometry,
    /// Unrecognized code, kept verbatim.
    Unknown(u8),
}

impl FieldType {
    /// Decode a field type byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use frm::frm::field_type::FieldType;
    ///
    /// assert_eq!(FieldType::from_u8(15), FieldType::VarChar);
    /// assert_eq!(FieldType::from_u8(246), FieldType::NewDecimal);
    /// assert_eq!(FieldType::from_u8(200), FieldType::Unknown(200));
    /// ```
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => FieldType::Decimal,
            1 => FieldType::Tiny,
            2 => FieldType::Short,
            3 => FieldType::Long,
            4 => FieldType::Float,
            5 => FieldType::Double,
            6 => FieldType::Null,
            7 => FieldType::Timestamp,
            8 => FieldType::LongLong,
            9 => FieldType::Int24,
            10 => FieldType::Date,
            11 => FieldType::Time,
            12 => FieldType::DateTime,
            13 => FieldType::Year,
            14 => FieldType::NewDate,
            15 => FieldType::VarChar,
            16 => FieldType::Bit,
            17 => FieldType::Timestamp2,
            18 => FieldType::DateTime2,
            19 => FieldType::Time2,
            246 => FieldType::NewDecimal,
            247 => FieldType::Enum,
            248 => FieldType::Set,
            249 => FieldType::TinyBlob,
            250 => FieldType::MediumBlob,
            251 => FieldType::LongBlob,
            252 => FieldType::Blob,
            253 => FieldType::VarString,
            254 => FieldType::String,
            255 => FieldType::Geometry,
            other => FieldType::Unknown(other),
        }
    }

    /// The raw on-disk code.
    pub fn as_u8(self) -> u8 {
        match self {
            FieldType::Decimal => 0,
            FieldType::Tiny => 1,
            FieldType::Short => 2,
            FieldType::Long => 3,
            FieldType::Float => 4,
            FieldType::Double => 5,
            FieldType::Null => 6,
            FieldType::Timestamp => 7,
            FieldType::LongLong => 8,
            FieldType::Int24 => 9,
            FieldType::Date => 10,
            FieldType::Time => 11,
            FieldType::DateTime => 12,
            FieldType::Year => 13,
            FieldType::NewDate => 14,
            FieldType::VarChar => 15,
            FieldType::Bit => 16,
            FieldType::Timestamp2 => 17,
            FieldType::DateTime2 => 18,
            FieldType::Time2 => 19,
            FieldType::NewDecimal => 246,
            FieldType::Enum => 247,
            FieldType::Set => 248,
            FieldType::TinyBlob => 249,
            FieldType::MediumBlob => 250,
            FieldType::LongBlob => 251,
            FieldType::Blob => 252,
            FieldType::VarString => 253,
            FieldType::String => 254,
            FieldType::Geometry => 255,
            FieldType::Unknown(v) => v,
        }
    }

    /// MySQL source name (`MYSQL_TYPE_*`).
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Decimal => "MYSQL_TYPE_DECIMAL",
            FieldType::Tiny => "MYSQL_TYPE_TINY",
            FieldType::Short => "MYSQL_TYPE_SHORT",
            FieldType::Long => "MYSQL_TYPE_LONG",
            FieldType::Float => "MYSQL_TYPE_FLOAT",
            FieldType::Double => "MYSQL_TYPE_DOUBLE",
            FieldType::Null => "MYSQL_TYPE_NULL",
            FieldType::Timestamp => "MYSQL_TYPE_TIMESTAMP",
            FieldType::LongLong => "MYSQL_TYPE_LONGLONG",
            FieldType::Int24 => "MYSQL_TYPE_INT24",
            FieldType::Date => "MYSQL_TYPE_DATE",
            FieldType::Time => "MYSQL_TYPE_TIME",
            FieldType::DateTime => "MYSQL_TYPE_DATETIME",
            FieldType::Year => "MYSQL_TYPE_YEAR",
            FieldType::NewDate => "MYSQL_TYPE_NEWDATE",
            FieldType::VarChar => "MYSQL_TYPE_VARCHAR",
            FieldType::Bit => "MYSQL_TYPE_BIT",
            FieldType::Timestamp2 => "MYSQL_TYPE_TIMESTAMP2",
            FieldType::DateTime2 => "MYSQL_TYPE_DATETIME2",
            FieldType::Time2 => "MYSQL_TYPE_TIME2",
            FieldType::NewDecimal => "MYSQL_TYPE_NEWDECIMAL",
            FieldType::Enum => "MYSQL_TYPE_ENUM",
            FieldType::Set => "MYSQL_TYPE_SET",
            FieldType::TinyBlob => "MYSQL_TYPE_TINY_BLOB",
            FieldType::MediumBlob => "MYSQL_TYPE_MEDIUM_BLOB",
            FieldType::LongBlob => "MYSQL_TYPE_LONG_BLOB",
            FieldType::Blob => "MYSQL_TYPE_BLOB",
            FieldType::VarString => "MYSQL_TYPE_VAR_STRING",
            FieldType::String => "MYSQL_TYPE_STRING",
            FieldType::Geometry => "MYSQL_TYPE_GEOMETRY",
            FieldType::Unknown(_) => "UNKNOWN",
        }
    }

    /// TINY/MEDIUM/LONG/plain BLOB (TEXT when the charset is not binary).
    pub fn is_blob(self) -> bool {
        matches!(
            self,
            FieldType::TinyBlob | FieldType::MediumBlob | FieldType::LongBlob | FieldType::Blob
        )
    }

    /// VARCHAR or fixed CHAR (VARBINARY/BINARY when the charset is binary).
    pub fn is_string(self) -> bool {
        matches!(self, FieldType::VarChar | FieldType::String)
    }

    /// Types whose rendering consults the charset registry.
    pub fn has_charset(self) -> bool {
        self.is_blob() || self.is_string()
    }

    /// Types that take a prefix length when used in an index.
    pub fn is_prefixable(self) -> bool {
        self.has_charset() || self == FieldType::Geometry
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Unknown(v) => write!(f, "UNKNOWN({})", v),
            other => f.write_str(other.name()),
        }
    }
}

/// Spatial subtype stored in the charset byte of a geometry column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeometryType {
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// Decode the subtype tag. Returns `None` for tags outside 0-7.
    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(GeometryType::Geometry),
            1 => Some(GeometryType::Point),
            2 => Some(GeometryType::LineString),
            3 => Some(GeometryType::Polygon),
            4 => Some(GeometryType::MultiPoint),
            5 => Some(GeometryType::MultiLineString),
            6 => Some(GeometryType::MultiPolygon),
            7 => Some(GeometryType::GeometryCollection),
            _ => None,
        }
    }

    /// SQL keyword for the column type.
    pub fn keyword(self) -> &'static str {
        match self {
            GeometryType::Geometry => "GEOMETRY",
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}
