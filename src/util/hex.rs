//! Hex formatting for `unfrm dump` and `unfrm info`.

/// Format a byte offset as "decimal (0xhex)".
pub fn format_offset(offset: u64) -> String {
    format!("{} (0x{:x})", offset, offset)
}

/// Format a 16-bit value as `0x` plus four hex digits, as used for signatures.
pub fn format_hex16(value: u16) -> String {
    format!("0x{:04x}", value)
}

/// Hex dump of `data`, 16 bytes per line, addressed from `base_offset`.
///
/// ```text
/// 00000400  03 03 00 00 2c 00 00 00  29 00 04 00 01 00 00 00  |....,...).......|
/// ```
pub fn hex_dump(data: &[u8], base_offset: u64) -> String {
    data.chunks(16)
        .enumerate()
        .map(|(i, chunk)| dump_line(chunk, base_offset + (i * 16) as u64))
        .collect::<Vec<_>>()
        .join("\n")
}

fn dump_line(chunk: &[u8], offset: u64) -> String {
    let mut line = format!("{:08x}  ", offset);
    for j in 0..16 {
        if j == 8 {
            line.push(' ');
        }
        match chunk.get(j) {
            Some(b) => line.push_str(&format!("{:02x} ", b)),
            None => line.push_str("   "),
        }
    }

    let ascii: String = chunk
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect();
    line.push_str(&format!(" |{:<16}|", ascii));
    line
}
