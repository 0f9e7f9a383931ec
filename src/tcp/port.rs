//! Textual port parsing.

use crate::error::Error;

/// Parses a decimal port number from raw text.
///
/// Only ASCII digits are accepted; any other byte in the scanned prefix
/// fails with [`Error::BadField`], as does a value above 65535.
///
/// Input longer than five bytes is truncated to its first five bytes
/// before parsing, so `"123456"` parses as `12345` rather than failing.
/// This mirrors the original stack's behavior and is intentional, even
/// though most parsers would reject overlong input. Empty input parses
/// as 0 for the same reason.
pub fn parse_port(text: &[u8]) -> Result<u16, Error> {
    // 65535 最多五位数字，超出部分不读
    let digits = if text.len() > 5 { &text[..5] } else { text };

    // 累加器取 u32：五位数字最大 99999，先算完再做范围检查，
    // 避免在 16 位内回绕
    let mut port: u32 = 0;
    for &c in digits {
        if !c.is_ascii_digit() {
            return Err(Error::BadField);
        }
        port = port * 10 + u32::from(c - b'0');
    }

    if port > u32::from(u16::MAX) {
        return Err(Error::BadField);
    }

    Ok(port as u16)
}
