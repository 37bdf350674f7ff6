//! MessagePack format constants.

// Single-byte values
pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

// Binary (length-prefixed opaque bytes)
pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

// Integers (big-endian payloads)
pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;

// Strings (length-prefixed UTF-8)
pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

// Containers (big-endian counts)
pub const ARR16: u8 = 0xdc;
pub const ARR32: u8 = 0xdd;
pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

// Header overlays (value or length embedded in the header's low bits)
pub const OVERLAY_FIXMAP: u8 = 0x80;
pub const OVERLAY_FIXARR: u8 = 0x90;
pub const OVERLAY_FIXSTR: u8 = 0xa0;

/// Maximum length embeddable in a fixstr header.
pub const FIXSTR_MAX: usize = 0b11111;

/// Maximum count embeddable in a fixarray or fixmap header.
pub const FIXCONTAINER_MAX: usize = 0b1111;

/// Maximum nesting depth the encoder will recurse into.
pub const MAX_DEPTH: u32 = 1024;
