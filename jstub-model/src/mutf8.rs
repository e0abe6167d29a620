use crate::error::Error;

/// Decode a `CONSTANT_Utf8` payload (JVMS §4.4.7) into a Rust `String`.
///
/// `base` is the file offset of `bytes`, used only for error reporting.
///
/// Differences from standard UTF-8:
/// - U+0000 is encoded as 0xC0 0x80; a raw 0x00 byte is invalid
/// - Supplementary characters arrive as two 3-byte surrogate halves
/// - 4-byte forms never appear
pub fn decode(bytes: &[u8], base: usize) -> Result<String, Error> {
    // Fast path: most class-file strings are plain ASCII.
    if bytes.iter().all(|&b| b != 0 && b < 0x80) {
        return Ok(bytes.iter().map(|&b| b as char).collect());
    }

    let mut out = String::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let b = bytes[pos];
        if b == 0 {
            return Err(Error::InvalidMutf8(base + pos));
        }
        if b & 0x80 == 0 {
            out.push(b as char);
            pos += 1;
        } else if b & 0xe0 == 0xc0 {
            let b2 = continuation(bytes, pos + 1, base)?;
            let cp = ((b as u32 & 0x1f) << 6) | b2;
            out.push(char::from_u32(cp).ok_or(Error::InvalidMutf8(base + pos))?);
            pos += 2;
        } else if b & 0xf0 == 0xe0 {
            let cp = three_byte(bytes, pos, base)?;
            if (0xD800..=0xDBFF).contains(&cp) {
                let low = if pos + 5 < bytes.len() && bytes[pos + 3] & 0xf0 == 0xe0 {
                    three_byte(bytes, pos + 3, base).ok()
                } else {
                    None
                };
                match low {
                    Some(lo) if (0xDC00..=0xDFFF).contains(&lo) => {
                        let supplementary = 0x10000 + ((cp - 0xD800) << 10) + (lo - 0xDC00);
                        out.push(char::from_u32(supplementary).unwrap_or('\u{FFFD}'));
                        pos += 6;
                        continue;
                    }
                    _ => out.push('\u{FFFD}'),
                }
            } else {
                // Lone low surrogates land here as well.
                out.push(char::from_u32(cp).unwrap_or('\u{FFFD}'));
            }
            pos += 3;
        } else {
            return Err(Error::InvalidMutf8(base + pos));
        }
    }
    Ok(out)
}

fn continuation(bytes: &[u8], pos: usize, base: usize) -> Result<u32, Error> {
    match bytes.get(pos) {
        Some(&b) if b & 0xc0 == 0x80 => Ok(b as u32 & 0x3f),
        _ => Err(Error::InvalidMutf8(base + pos)),
    }
}

fn three_byte(bytes: &[u8], pos: usize, base: usize) -> Result<u32, Error> {
    let b2 = continuation(bytes, pos + 1, base)?;
    let b3 = continuation(bytes, pos + 2, base)?;
    Ok(((bytes[pos] as u32 & 0x0f) << 12) | (b2 << 6) | b3)
}
