//! Scancode-to-ASCII translation for the US QWERTY layout.
//!
//! One static table indexed by make code. Break codes, extended codes
//! and keys with no printable character all translate to `None`; the
//! caller decides what to do about them (usually nothing).

use crate::keyboard::Scancode;

/// ASCII produced by each single-byte make code, 0 where the key has
/// no printable character (modifiers, function keys, unassigned slots).
/// Row comments give the index of the first entry.
pub const US_QWERTY: [u8; 128] = [
    // 0x00
    0, 27, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', 8, b'\t',
    // 0x10
    b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n', 0, b'a', b's',
    // 0x20
    b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', b'`', 0, b'\\', b'z', b'x', b'c', b'v',
    // 0x30
    b'b', b'n', b'm', b',', b'.', b'/', 0, b'*', 0, b' ', 0, 0, 0, 0, 0, 0,
    // 0x40
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, b'-', 0, 0, 0, b'+', 0,
    // 0x50
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x60
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x70
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Maps a complete scancode to its printable ASCII byte.
///
/// Only single-byte make codes can carry a character; anything at or
/// above `0x80` (break codes and reassembled extended sequences) maps
/// to `None`. The table keeps 0 as its internal "no character" marker,
/// and this accessor is the only place that reads it.
pub fn ascii(scancode: Scancode) -> Option<u8> {
    let code = scancode.as_u32();
    if code >= 0x80 {
        return None;
    }
    match US_QWERTY[code as usize] {
        0 => None,
        byte => Some(byte),
    }
}
