//! Decoding of `name` table strings across platforms and legacy encodings

use encoding_rs::{Encoding, BIG5, EUC_KR, GBK, MACINTOSH, SHIFT_JIS, UTF_16BE};
use ttf_parser::PlatformId;

/// Decode a name string. `None` only when the encoding is unknown or the
/// bytes are invalid for it.
pub fn decode_name(platform: PlatformId, encoding_id: u16, bytes: &[u8]) -> Option<String> {
    match platform {
        PlatformId::Unicode => decode_strict(UTF_16BE, bytes),
        PlatformId::Windows => match encoding_id {
            0 | 1 | 10 => decode_strict(UTF_16BE, bytes),
            // Legacy code pages are usually stored as 16-bit units with a zero high byte
            2..=5 => {
                let packed: Vec<u8> = bytes.iter().copied().filter(|b| *b != 0).collect();
                decode_strict(windows_legacy(encoding_id)?, &packed)
            }
            _ => None,
        },
        PlatformId::Macintosh => decode_strict(macintosh(encoding_id)?, bytes),
        _ => None,
    }
}

fn windows_legacy(encoding_id: u16) -> Option<&'static Encoding> {
    match encoding_id {
        2 => Some(SHIFT_JIS),
        3 => Some(GBK),
        4 => Some(BIG5),
        5 => Some(EUC_KR),
        _ => None,
    }
}

fn macintosh(encoding_id: u16) -> Option<&'static Encoding> {
    match encoding_id {
        0 => Some(MACINTOSH),
        1 => Some(SHIFT_JIS),
        2 => Some(BIG5),
        3 => Some(EUC_KR),
        25 => Some(GBK),
        _ => None,
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}
