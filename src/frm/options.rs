//! Table-level options carried by the `.frm` header.
//!
//! These do not affect the column and key fragments; they back the optional
//! `ENGINE=... DEFAULT CHARSET=...` suffix and the `unfrm info` report.

use serde::Serialize;
use std::fmt;

/// Legacy storage engine code (`enum legacy_db_type`), header byte 3.
///
/// Codes from 42 up are dynamically registered plugins whose real name is
/// only stored in the extra section; they map to [`LegacyEngine::Dynamic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegacyEngine {
    Unknown,
    DiabIsam,
    Hash,
    Misam,
    Pisam,
    RmsIsam,
    Heap,
    Isam,
    MrgIsam,
    MyIsam,
    MrgMyIsam,
    BerkeleyDb,
    InnoDb,
    Gemini,
    NdbCluster,
    Example,
    Archive,
    Csv,
    Federated,
    Blackhole,
    Partition,
    Binlog,
    Solid,
    Pbxt,
    TableFunction,
    Memcache,
    Falcon,
    Maria,
    PerformanceSchema,
    Dynamic(u8),
    Default,
    Other(u8),
}

impl LegacyEngine {
    /// Decode a legacy engine code.
    ///
    /// # Examples
    ///
    /// ```
    /// use frm::frm::options::LegacyEngine;
    ///
    /// assert_eq!(LegacyEngine::from_u8(12), LegacyEngine::InnoDb);
    /// assert_eq!(LegacyEngine::from_u8(12).engine_name(), Some("InnoDB"));
    /// assert_eq!(LegacyEngine::from_u8(6).engine_name(), Some("MEMORY"));
    /// assert_eq!(LegacyEngine::from_u8(50), LegacyEngine::Dynamic(50));
    /// ```
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LegacyEngine::Unknown,
            1 => LegacyEngine::DiabIsam,
            2 => LegacyEngine::Hash,
            3 => LegacyEngine::Misam,
            4 => LegacyEngine::Pisam,
            5 => LegacyEngine::RmsIsam,
            6 => LegacyEngine::Heap,
            7 => LegacyEngine::Isam,
            8 => LegacyEngine::MrgIsam,
            9 => LegacyEngine::MyIsam,
            10 => LegacyEngine::MrgMyIsam,
            11 => LegacyEngine::BerkeleyDb,
            12 => LegacyEngine::InnoDb,
            13 => LegacyEngine::Gemini,
            14 => LegacyEngine::NdbCluster,
            15 => LegacyEngine::Example,
            16 => LegacyEngine::Archive,
            17 => LegacyEngine::Csv,
            18 => LegacyEngine::Federated,
            19 => LegacyEngine::Blackhole,
            20 => LegacyEngine::Partition,
            21 => LegacyEngine::Binlog,
            22 => LegacyEngine::Solid,
            23 => LegacyEngine::Pbxt,
            24 => LegacyEngine::TableFunction,
            25 => LegacyEngine::Memcache,
            26 => LegacyEngine::Falcon,
            27 => LegacyEngine::Maria,
            28 => LegacyEngine::PerformanceSchema,
            127 => LegacyEngine::Default,
            v @ 42..=126 => LegacyEngine::Dynamic(v),
            other => LegacyEngine::Other(other),
        }
    }

    /// Name accepted by `ENGINE=`, for engines a 5.x server can still load.
    pub fn engine_name(self) -> Option<&'static str> {
        match self {
            LegacyEngine::Heap => Some("MEMORY"),
            LegacyEngine::MyIsam => Some("MyISAM"),
            LegacyEngine::MrgMyIsam => Some("MRG_MYISAM"),
            LegacyEngine::InnoDb => Some("InnoDB"),
            LegacyEngine::NdbCluster => Some("ndbcluster"),
            LegacyEngine::Example => Some("EXAMPLE"),
            LegacyEngine::Archive => Some("ARCHIVE"),
            LegacyEngine::Csv => Some("CSV"),
            LegacyEngine::Federated => Some("FEDERATED"),
            LegacyEngine::Blackhole => Some("BLACKHOLE"),
            LegacyEngine::Maria => Some("Aria"),
            LegacyEngine::PerformanceSchema => Some("PERFORMANCE_SCHEMA"),
            _ => None,
        }
    }

    /// Internal `DB_TYPE_*` name.
    pub fn name(self) -> &'static str {
        match self {
            LegacyEngine::Unknown => "DB_TYPE_UNKNOWN",
            LegacyEngine::DiabIsam => "DB_TYPE_DIAB_ISAM",
            LegacyEngine::Hash => "DB_TYPE_HASH",
            LegacyEngine::Misam => "DB_TYPE_MISAM",
            LegacyEngine::Pisam => "DB_TYPE_PISAM",
            LegacyEngine::RmsIsam => "DB_TYPE_RMS_ISAM",
            LegacyEngine::Heap => "DB_TYPE_HEAP",
            LegacyEngine::Isam => "DB_TYPE_ISAM",
            LegacyEngine::MrgIsam => "DB_TYPE_MRG_ISAM",
            LegacyEngine::MyIsam => "DB_TYPE_MYISAM",
            LegacyEngine::MrgMyIsam => "DB_TYPE_MRG_MYISAM",
            LegacyEngine::BerkeleyDb => "DB_TYPE_BERKELEY_DB",
            LegacyEngine::InnoDb => "DB_TYPE_INNODB",
            LegacyEngine::Gemini => "DB_TYPE_GEMINI",
            LegacyEngine::NdbCluster => "DB_TYPE_NDBCLUSTER",
            LegacyEngine::Example => "DB_TYPE_EXAMPLE_DB",
            LegacyEngine::Archive => "DB_TYPE_ARCHIVE_DB",
            LegacyEngine::Csv => "DB_TYPE_CSV_DB",
            LegacyEngine::Federated => "DB_TYPE_FEDERATED_DB",
            LegacyEngine::Blackhole => "DB_TYPE_BLACKHOLE_DB",
            LegacyEngine::Partition => "DB_TYPE_PARTITION_DB",
            LegacyEngine::Binlog => "DB_TYPE_BINLOG",
            LegacyEngine::Solid => "DB_TYPE_SOLID",
            LegacyEngine::Pbxt => "DB_TYPE_PBXT",
            LegacyEngine::TableFunction => "DB_TYPE_TABLE_FUNCTION",
            LegacyEngine::Memcache => "DB_TYPE_MEMCACHE",
            LegacyEngine::Falcon => "DB_TYPE_FALCON",
            LegacyEngine::Maria => "DB_TYPE_MARIA",
            LegacyEngine::PerformanceSchema => "DB_TYPE_PERFORMANCE_SCHEMA",
            LegacyEngine::Dynamic(_) => "DB_TYPE_FIRST_DYNAMIC",
            LegacyEngine::Default => "DB_TYPE_DEFAULT",
            LegacyEngine::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for LegacyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.engine_name() {
            Some(name) => f.write_str(name),
            None => match self {
                LegacyEngine::Dynamic(v) | LegacyEngine::Other(v) => {
                    write!(f, "{} ({})", self.name(), v)
                }
                _ => f.write_str(self.name()),
            },
        }
    }
}

/// ROW_FORMAT code, header byte 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowType {
    Default,
    Fixed,
    Dynamic,
    Compressed,
    Redundant,
    Compact,
    Page,
    Unknown(u8),
}

impl RowType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => RowType::Default,
            1 => RowType::Fixed,
            2 => RowType::Dynamic,
            3 => RowType::Compressed,
            4 => RowType::Redundant,
            5 => RowType::Compact,
            6 => RowType::Page,
            other => RowType::Unknown(other),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RowType::Default => "DEFAULT",
            RowType::Fixed => "FIXED",
            RowType::Dynamic => "DYNAMIC",
            RowType::Compressed => "COMPRESSED",
            RowType::Redundant => "REDUNDANT",
            RowType::Compact => "COMPACT",
            RowType::Page => "PAGE",
            RowType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// HA_OPTION_* bits of the table options word (header bytes 30-31).
const TABLE_OPTION_BITS: &[(u16, &str)] = &[
    (0x0001, "PACK_RECORD"),
    (0x0002, "PACK_KEYS"),
    (0x0004, "COMPRESS_RECORD"),
    (0x0008, "LONG_BLOB_PTR"),
    (0x0010, "TMP_TABLE"),
    (0x0020, "CHECKSUM"),
    (0x0040, "DELAY_KEY_WRITE"),
    (0x0080, "NO_PACK_KEYS"),
    (0x0100, "CREATE_FROM_ENGINE"),
    (0x0200, "RELIES_ON_SQL_LAYER"),
    (0x0400, "NULL_FIELDS"),
    (0x0800, "PAGE_CHECKSUM"),
    (0x1000, "STATS_PERSISTENT"),
    (0x2000, "NO_STATS_PERSISTENT"),
];

/// Names of the option bits set in `options`.
///
/// # Examples
///
/// ```
/// use frm::frm::options::table_option_names;
///
/// assert_eq!(table_option_names(0x0009), vec!["PACK_RECORD", "LONG_BLOB_PTR"]);
/// assert!(table_option_names(0).is_empty());
/// ```
pub fn table_option_names(options: u16) -> Vec<&'static str> {
    TABLE_OPTION_BITS
        .iter()
        .filter(|(bit, _)| options & bit != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// Format a server version id (e.g. 50726 -> "5.7.26").
///
/// # Examples
///
/// ```
/// use frm::frm::options::format_mysql_version;
///
/// assert_eq!(format_mysql_version(50726), "5.7.26");
/// assert_eq!(format_mysql_version(100311), "10.3.11");
/// assert_eq!(format_mysql_version(0), "unknown");
/// ```
pub fn format_mysql_version(version_id: u32) -> String {
    if version_id == 0 {
        return "unknown".to_string();
    }
    let major = version_id / 10000;
    let minor = (version_id % 10000) / 100;
    let patch = version_id % 100;
    format!("{}.{}.{}", major, minor, patch)
}
