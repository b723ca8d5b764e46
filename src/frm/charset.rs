//! Charset and collation registry.
//!
//! `.frm` files store a single numeric id per column which MySQL calls the
//! charset number but which actually identifies a collation. [`lookup`] maps
//! that id to the character set name, the collation name, and the maximum
//! number of bytes one character can occupy (needed to turn byte lengths back
//! into `VARCHAR(n)` / `CHAR(n)` character counts).
//!
//! The table covers every compiled-in collation of MySQL 5.5 through 5.7 and
//! MariaDB 10.x (ids 1-250), plus `utf8mb4_0900_ai_ci` (255). It is a plain
//! `static` slice sorted by id, so lookups are lock-free and safe from any
//! thread.

use serde::Serialize;

use crate::frm::constants::BINARY_CHARSET;
use crate::FrmError;

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharsetEntry {
    /// Collation id as stored in the `.frm` column record.
    pub id: u16,
    /// Character set name (e.g. `utf8mb4`).
    pub name: &'static str,
    /// Collation name (e.g. `utf8mb4_general_ci`).
    pub collation: &'static str,
    /// Maximum bytes per character (mbmaxlen).
    pub max_len: u8,
}

impl CharsetEntry {
    /// Returns true for the `binary` pseudo-charset (id 63).
    pub fn is_binary(&self) -> bool {
        self.id == BINARY_CHARSET
    }
}

const fn entry(id: u16, name: &'static str, collation: &'static str, max_len: u8) -> CharsetEntry {
    CharsetEntry {
        id,
        name,
        collation,
        max_len,
    }
}

static CHARSETS: &[CharsetEntry] = &[
    entry(1, "big5", "big5_chinese_ci", 2),
    entry(2, "latin2", "latin2_czech_cs", 1),
    entry(3, "dec8", "dec8_swedish_ci", 1),
    entry(4, "cp850", "cp850_general_ci", 1),
    entry(5, "latin1", "latin1_german1_ci", 1),
    entry(6, "hp8", "hp8_english_ci", 1),
    entry(7, "koi8r", "koi8r_general_ci", 1),
    entry(8, "latin1", "latin1_swedish_ci", 1),
    entry(9, "latin2", "latin2_general_ci", 1),
    entry(10, "swe7", "swe7_swedish_ci", 1),
    entry(11, "ascii", "ascii_general_ci", 1),
    entry(12, "ujis", "ujis_japanese_ci", 3),
    entry(13, "sjis", "sjis_japanese_ci", 2),
    entry(14, "cp1251", "cp1251_bulgarian_ci", 1),
    entry(15, "latin1", "latin1_danish_ci", 1),
    entry(16, "hebrew", "hebrew_general_ci", 1),
    entry(18, "tis620", "tis620_thai_ci", 1),
    entry(19, "euckr", "euckr_korean_ci", 2),
    entry(20, "latin7", "latin7_estonian_cs", 1),
    entry(21, "latin2", "latin2_hungarian_ci", 1),
    entry(22, "koi8u", "koi8u_general_ci", 1),
    entry(23, "cp1251", "cp1251_ukrainian_ci", 1),
    entry(24, "gb2312", "gb2312_chinese_ci", 2),
    entry(25, "greek", "greek_general_ci", 1),
    entry(26, "cp1250", "cp1250_general_ci", 1),
    entry(27, "latin2", "latin2_croatian_ci", 1),
    entry(28, "gbk", "gbk_chinese_ci", 2),
    entry(29, "cp1257", "cp1257_lithuanian_ci", 1),
    entry(30, "latin5", "latin5_turkish_ci", 1),
    entry(31, "latin1", "latin1_german2_ci", 1),
    entry(32, "armscii8", "armscii8_general_ci", 1),
    entry(33, "utf8", "utf8_general_ci", 3),
    entry(34, "cp1250", "cp1250_czech_cs", 1),
    entry(35, "ucs2", "ucs2_general_ci", 2),
    entry(36, "cp866", "cp866_general_ci", 1),
    entry(37, "keybcs2", "keybcs2_general_ci", 1),
    entry(38, "macce", "macce_general_ci", 1),
    entry(39, "macroman", "macroman_general_ci", 1),
    entry(40, "cp852", "cp852_general_ci", 1),
    entry(41, "latin7", "latin7_general_ci", 1),
    entry(42, "latin7", "latin7_general_cs", 1),
    entry(43, "macce", "macce_bin", 1),
    entry(44, "cp1250", "cp1250_croatian_ci", 1),
    entry(45, "utf8mb4", "utf8mb4_general_ci", 4),
    entry(46, "utf8mb4", "utf8mb4_bin", 4),
    entry(47, "latin1", "latin1_bin", 1),
    entry(48, "latin1", "latin1_general_ci", 1),
    entry(49, "latin1", "latin1_general_cs", 1),
    entry(50, "cp1251", "cp1251_bin", 1),
    entry(51, "cp1251", "cp1251_general_ci", 1),
    entry(52, "cp1251", "cp1251_general_cs", 1),
    entry(53, "macroman", "macroman_bin", 1),
    entry(54, "utf16", "utf16_general_ci", 4),
    entry(55, "utf16", "utf16_bin", 4),
    entry(56, "utf16le", "utf16le_general_ci", 4),
    entry(57, "cp1256", "cp1256_general_ci", 1),
    entry(58, "cp1257", "cp1257_bin", 1),
    entry(59, "cp1257", "cp1257_general_ci", 1),
    entry(60, "utf32", "utf32_general_ci", 4),
    entry(61, "utf32", "utf32_bin", 4),
    entry(62, "utf16le", "utf16le_bin", 4),
    entry(63, "binary", "binary", 1),
    entry(64, "armscii8", "armscii8_bin", 1),
    entry(65, "ascii", "ascii_bin", 1),
    entry(66, "cp1250", "cp1250_bin", 1),
    entry(67, "cp1256", "cp1256_bin", 1),
    entry(68, "cp866", "cp866_bin", 1),
    entry(69, "dec8", "dec8_bin", 1),
    entry(70, "greek", "greek_bin", 1),
    entry(71, "hebrew", "hebrew_bin", 1),
    entry(72, "hp8", "hp8_bin", 1),
    entry(73, "keybcs2", "keybcs2_bin", 1),
    entry(74, "koi8r", "koi8r_bin", 1),
    entry(75, "koi8u", "koi8u_bin", 1),
    entry(77, "latin2", "latin2_bin", 1),
    entry(78, "latin5", "latin5_bin", 1),
    entry(79, "latin7", "latin7_bin", 1),
    entry(80, "cp850", "cp850_bin", 1),
    entry(81, "cp852", "cp852_bin", 1),
    entry(82, "swe7", "swe7_bin", 1),
    entry(83, "utf8", "utf8_bin", 3),
    entry(84, "big5", "big5_bin", 2),
    entry(85, "euckr", "euckr_bin", 2),
    entry(86, "gb2312", "gb2312_bin", 2),
    entry(87, "gbk", "gbk_bin", 2),
    entry(88, "sjis", "sjis_bin", 2),
    entry(89, "tis620", "tis620_bin", 1),
    entry(90, "ucs2", "ucs2_bin", 2),
    entry(91, "ujis", "ujis_bin", 3),
    entry(92, "geostd8", "geostd8_general_ci", 1),
    entry(93, "geostd8", "geostd8_bin", 1),
    entry(94, "latin1", "latin1_spanish_ci", 1),
    entry(95, "cp932", "cp932_japanese_ci", 2),
    entry(96, "cp932", "cp932_bin", 2),
    entry(97, "eucjpms", "eucjpms_japanese_ci", 3),
    entry(98, "eucjpms", "eucjpms_bin", 3),
    entry(99, "cp1250", "cp1250_polish_ci", 1),
    entry(101, "utf16", "utf16_unicode_ci", 4),
    entry(102, "utf16", "utf16_icelandic_ci", 4),
    entry(103, "utf16", "utf16_latvian_ci", 4),
    entry(104, "utf16", "utf16_romanian_ci", 4),
    entry(105, "utf16", "utf16_slovenian_ci", 4),
    entry(106, "utf16", "utf16_polish_ci", 4),
    entry(107, "utf16", "utf16_estonian_ci", 4),
    entry(108, "utf16", "utf16_spanish_ci", 4),
    entry(109, "utf16", "utf16_swedish_ci", 4),
    entry(110, "utf16", "utf16_turkish_ci", 4),
    entry(111, "utf16", "utf16_czech_ci", 4),
    entry(112, "utf16", "utf16_danish_ci", 4),
    entry(113, "utf16", "utf16_lithuanian_ci", 4),
    entry(114, "utf16", "utf16_slovak_ci", 4),
    entry(115, "utf16", "utf16_spanish2_ci", 4),
    entry(116, "utf16", "utf16_roman_ci", 4),
    entry(117, "utf16", "utf16_persian_ci", 4),
    entry(118, "utf16", "utf16_esperanto_ci", 4),
    entry(119, "utf16", "utf16_hungarian_ci", 4),
    entry(120, "utf16", "utf16_sinhala_ci", 4),
    entry(121, "utf16", "utf16_german2_ci", 4),
    entry(122, "utf16", "utf16_croatian_ci", 4),
    entry(123, "utf16", "utf16_unicode_520_ci", 4),
    entry(124, "utf16", "utf16_vietnamese_ci", 4),
    entry(128, "ucs2", "ucs2_unicode_ci", 2),
    entry(129, "ucs2", "ucs2_icelandic_ci", 2),
    entry(130, "ucs2", "ucs2_latvian_ci", 2),
    entry(131, "ucs2", "ucs2_romanian_ci", 2),
    entry(132, "ucs2", "ucs2_slovenian_ci", 2),
    entry(133, "ucs2", "ucs2_polish_ci", 2),
    entry(134, "ucs2", "ucs2_estonian_ci", 2),
    entry(135, "ucs2", "ucs2_spanish_ci", 2),
    entry(136, "ucs2", "ucs2_swedish_ci", 2),
    entry(137, "ucs2", "ucs2_turkish_ci", 2),
    entry(138, "ucs2", "ucs2_czech_ci", 2),
    entry(139, "ucs2", "ucs2_danish_ci", 2),
    entry(140, "ucs2", "ucs2_lithuanian_ci", 2),
    entry(141, "ucs2", "ucs2_slovak_ci", 2),
    entry(142, "ucs2", "ucs2_spanish2_ci", 2),
    entry(143, "ucs2", "ucs2_roman_ci", 2),
    entry(144, "ucs2", "ucs2_persian_ci", 2),
    entry(145, "ucs2", "ucs2_esperanto_ci", 2),
    entry(146, "ucs2", "ucs2_hungarian_ci", 2),
    entry(147, "ucs2", "ucs2_sinhala_ci", 2),
    entry(148, "ucs2", "ucs2_german2_ci", 2),
    entry(149, "ucs2", "ucs2_croatian_ci", 2),
    entry(150, "ucs2", "ucs2_unicode_520_ci", 2),
    entry(151, "ucs2", "ucs2_vietnamese_ci", 2),
    entry(159, "ucs2", "ucs2_general_mysql500_ci", 2),
    entry(160, "utf32", "utf32_unicode_ci", 4),
    entry(161, "utf32", "utf32_icelandic_ci", 4),
    entry(162, "utf32", "utf32_latvian_ci", 4),
    entry(163, "utf32", "utf32_romanian_ci", 4),
    entry(164, "utf32", "utf32_slovenian_ci", 4),
    entry(165, "utf32", "utf32_polish_ci", 4),
    entry(166, "utf32", "utf32_estonian_ci", 4),
    entry(167, "utf32", "utf32_spanish_ci", 4),
    entry(168, "utf32", "utf32_swedish_ci", 4),
    entry(169, "utf32", "utf32_turkish_ci", 4),
    entry(170, "utf32", "utf32_czech_ci", 4),
    entry(171, "utf32", "utf32_danish_ci", 4),
    entry(172, "utf32", "utf32_lithuanian_ci", 4),
    entry(173, "utf32", "utf32_slovak_ci", 4),
    entry(174, "utf32", "utf32_spanish2_ci", 4),
    entry(175, "utf32", "utf32_roman_ci", 4),
    entry(176, "utf32", "utf32_persian_ci", 4),
    entry(177, "utf32", "utf32_esperanto_ci", 4),
    entry(178, "utf32", "utf32_hungarian_ci", 4),
    entry(179, "utf32", "utf32_sinhala_ci", 4),
    entry(180, "utf32", "utf32_german2_ci", 4),
    entry(181, "utf32", "utf32_croatian_ci", 4),
    entry(182, "utf32", "utf32_unicode_520_ci", 4),
    entry(183, "utf32", "utf32_vietnamese_ci", 4),
    entry(192, "utf8", "utf8_unicode_ci", 3),
    entry(193, "utf8", "utf8_icelandic_ci", 3),
    entry(194, "utf8", "utf8_latvian_ci", 3),
    entry(195, "utf8", "utf8_romanian_ci", 3),
    entry(196, "utf8", "utf8_slovenian_ci", 3),
    entry(197, "utf8", "utf8_polish_ci", 3),
    entry(198, "utf8", "utf8_estonian_ci", 3),
    entry(199, "utf8", "utf8_spanish_ci", 3),
    entry(200, "utf8", "utf8_swedish_ci", 3),
    entry(201, "utf8", "utf8_turkish_ci", 3),
    entry(202, "utf8", "utf8_czech_ci", 3),
    entry(203, "utf8", "utf8_danish_ci", 3),
    entry(204, "utf8", "utf8_lithuanian_ci", 3),
    entry(205, "utf8", "utf8_slovak_ci", 3),
    entry(206, "utf8", "utf8_spanish2_ci", 3),
    entry(207, "utf8", "utf8_roman_ci", 3),
    entry(208, "utf8", "utf8_persian_ci", 3),
    entry(209, "utf8", "utf8_esperanto_ci", 3),
    entry(210, "utf8", "utf8_hungarian_ci", 3),
    entry(211, "utf8", "utf8_sinhala_ci", 3),
    entry(212, "utf8", "utf8_german2_ci", 3),
    entry(213, "utf8", "utf8_croatian_ci", 3),
    entry(214, "utf8", "utf8_unicode_520_ci", 3),
    entry(215, "utf8", "utf8_vietnamese_ci", 3),
    entry(223, "utf8", "utf8_general_mysql500_ci", 3),
    entry(224, "utf8mb4", "utf8mb4_unicode_ci", 4),
    entry(225, "utf8mb4", "utf8mb4_icelandic_ci", 4),
    entry(226, "utf8mb4", "utf8mb4_latvian_ci", 4),
    entry(227, "utf8mb4", "utf8mb4_romanian_ci", 4),
    entry(228, "utf8mb4", "utf8mb4_slovenian_ci", 4),
    entry(229, "utf8mb4", "utf8mb4_polish_ci", 4),
    entry(230, "utf8mb4", "utf8mb4_estonian_ci", 4),
    entry(231, "utf8mb4", "utf8mb4_spanish_ci", 4),
    entry(232, "utf8mb4", "utf8mb4_swedish_ci", 4),
    entry(233, "utf8mb4", "utf8mb4_turkish_ci", 4),
    entry(234, "utf8mb4", "utf8mb4_czech_ci", 4),
    entry(235, "utf8mb4", "utf8mb4_danish_ci", 4),
    entry(236, "utf8mb4", "utf8mb4_lithuanian_ci", 4),
    entry(237, "utf8mb4", "utf8mb4_slovak_ci", 4),
    entry(238, "utf8mb4", "utf8mb4_spanish2_ci", 4),
    entry(239, "utf8mb4", "utf8mb4_roman_ci", 4),
    entry(240, "utf8mb4", "utf8mb4_persian_ci", 4),
    entry(241, "utf8mb4", "utf8mb4_esperanto_ci", 4),
    entry(242, "utf8mb4", "utf8mb4_hungarian_ci", 4),
    entry(243, "utf8mb4", "utf8mb4_sinhala_ci", 4),
    entry(244, "utf8mb4", "utf8mb4_german2_ci", 4),
    entry(245, "utf8mb4", "utf8mb4_croatian_ci", 4),
    entry(246, "utf8mb4", "utf8mb4_unicode_520_ci", 4),
    entry(247, "utf8mb4", "utf8mb4_vietnamese_ci", 4),
    entry(248, "gb18030", "gb18030_chinese_ci", 4),
    entry(249, "gb18030", "gb18030_bin", 4),
    entry(250, "gb18030", "gb18030_unicode_520_ci", 4),
    entry(255, "utf8mb4", "utf8mb4_0900_ai_ci", 4),
];

/// Look up a charset id.
///
/// # Examples
///
/// ```
/// use frm::frm::charset::lookup;
///
/// let cs = lookup(33).unwrap();
/// assert_eq!(cs.name, "utf8");
/// assert_eq!(cs.collation, "utf8_general_ci");
/// assert_eq!(cs.max_len, 3);
///
/// assert!(lookup(63).unwrap().is_binary());
/// assert!(lookup(1000).is_err());
/// ```
pub fn lookup(id: u16) -> Result<&'static CharsetEntry, FrmError> {
    CHARSETS
        .binary_search_by_key(&id, |c| c.id)
        .map(|i| &CHARSETS[i])
        .map_err(|_| FrmError::UnknownCharset(id))
}

/// All registry entries, ordered by id.
pub fn all() -> &'static [CharsetEntry] {
    CHARSETS
}
