use super::HexColorError;

fn parse_prefix(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

const fn parse_hex_digit(b: u8, index: usize) -> Result<u8, HexColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

fn parse_hex_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let hi = parse_hex_digit(bytes[index], index)?;
    let lo = parse_hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

/// Parses `RRGGBB` or `RRGGBBAA` after an optional `#` / `0x` prefix.
pub fn parse_hex_color(s: &str) -> Result<([u8; 3], Option<u8>), HexColorError> {
    let bytes = s.as_bytes();
    let offset = parse_prefix(bytes);
    let digits = bytes.len().saturating_sub(offset);
    if digits != 6 && digits != 8 {
        return Err(HexColorError::InvalidLength);
    }

    let rgb = [
        parse_hex_byte(bytes, offset)?,
        parse_hex_byte(bytes, offset + 2)?,
        parse_hex_byte(bytes, offset + 4)?,
    ];
    let alpha = if digits == 8 {
        Some(parse_hex_byte(bytes, offset + 6)?)
    } else {
        None
    };

    Ok((rgb, alpha))
}
