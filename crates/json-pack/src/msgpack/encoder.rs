//! `MsgPackEncoder` — one-directional MessagePack encoder.

use packdown_buffers::Writer;

use super::constants::*;
use super::error::MsgPackError;
use crate::PackValue;

/// MessagePack encoder for [`PackValue`] trees.
///
/// Supports the nil, boolean, 8/16/32-bit integer, str, bin, array and map
/// families of the format. Every multi-byte field is big-endian and every
/// value takes the smallest header that can represent it. The 64-bit
/// integer, float and ext families are not supported; encoding a value that
/// needs them fails with a typed error and no output.
pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn with_writer(writer: Writer) -> Self {
        Self { writer }
    }

    /// Encode a value and return the MessagePack bytes.
    ///
    /// On failure no partial output is returned and the encoder is left
    /// ready for the next call. Encoding is deterministic: the same tree
    /// always produces the same bytes or the same error.
    pub fn encode(&mut self, value: &PackValue) -> Result<Vec<u8>, MsgPackError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    /// Write any value, dispatching on its variant.
    pub fn write_any(&mut self, value: &PackValue) -> Result<(), MsgPackError> {
        self.encode_any(value, 0)
    }

    fn encode_any(&mut self, value: &PackValue, depth: u32) -> Result<(), MsgPackError> {
        use crate::PackValue::*;
        match value {
            Null => {
                self.write_null();
                Ok(())
            }
            Bool(b) => {
                self.write_boolean(*b);
                Ok(())
            }
            Integer(i) => self.write_integer(*i),
            Str(s) => self.write_str(s),
            Bytes(b) => self.write_bin(b),
            Array(arr) => self.encode_arr(arr, depth),
            Object(obj) => self.encode_obj(obj, depth),
            Float(_) | Extension(_) => Err(MsgPackError::UnsupportedType),
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(NIL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { TRUE } else { FALSE });
    }

    /// Write a signed integer using the smallest representation that holds
    /// it: fixint, then 8/16/32-bit. Values outside `[-2^31, 2^32 - 1]`
    /// would need the 64-bit family and fail with `Range`.
    pub fn write_integer(&mut self, int: i64) -> Result<(), MsgPackError> {
        let w = &mut self.writer;
        if int >= 0 {
            if int <= 0x7f {
                w.u8(int as u8);
            } else if int <= 0xff {
                w.u8u8(UINT8, int as u8);
            } else if int <= 0xffff {
                w.u8u16(UINT16, int as u16);
            } else if int <= 0xffff_ffff {
                w.u8u32(UINT32, int as u32);
            } else {
                return Err(MsgPackError::Range);
            }
        } else if int >= -32 {
            // negative fixint, top three bits set
            w.u8(int as u8);
        } else if int >= -128 {
            w.u8u8(INT8, int as u8);
        } else if int >= -32768 {
            w.u8u16(INT16, int as u16);
        } else if int >= -2147483648 {
            w.u8u32(INT32, int as u32);
        } else {
            return Err(MsgPackError::Range);
        }
        Ok(())
    }

    /// Write a UTF-8 string: minimal-width header, then the raw bytes.
    pub fn write_str(&mut self, s: &str) -> Result<(), MsgPackError> {
        self.write_str_hdr(s.len())?;
        self.writer.utf8(s);
        Ok(())
    }

    /// Write a str header for a payload of `length` UTF-8 bytes.
    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        let w = &mut self.writer;
        if length <= FIXSTR_MAX {
            w.u8(OVERLAY_FIXSTR | length as u8);
        } else if length <= 0xff {
            w.u8u8(STR8, length as u8);
        } else if length <= 0xffff {
            w.u8u16(STR16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(STR32, length as u32);
        } else {
            return Err(MsgPackError::Range);
        }
        Ok(())
    }

    /// Write opaque bytes: minimal-width bin header, then the raw bytes.
    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), MsgPackError> {
        self.write_bin_hdr(buf.len())?;
        self.writer.buf(buf);
        Ok(())
    }

    /// Write a bin header for a payload of `length` bytes.
    pub fn write_bin_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        let w = &mut self.writer;
        if length <= 0xff {
            w.u8u8(BIN8, length as u8);
        } else if length <= 0xffff {
            w.u8u16(BIN16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(BIN32, length as u32);
        } else {
            return Err(MsgPackError::Range);
        }
        Ok(())
    }

    /// Write an array: header, then each element in order.
    pub fn write_arr(&mut self, arr: &[PackValue]) -> Result<(), MsgPackError> {
        self.encode_arr(arr, 0)
    }

    fn encode_arr(&mut self, arr: &[PackValue], depth: u32) -> Result<(), MsgPackError> {
        if depth >= MAX_DEPTH {
            return Err(MsgPackError::DepthLimit);
        }
        self.write_arr_hdr(arr.len())?;
        for item in arr {
            self.encode_any(item, depth + 1)?;
        }
        Ok(())
    }

    /// Write an array header for `length` elements.
    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        let w = &mut self.writer;
        if length <= FIXCONTAINER_MAX {
            w.u8(OVERLAY_FIXARR | length as u8);
        } else if length <= 0xffff {
            w.u8u16(ARR16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(ARR32, length as u32);
        } else {
            return Err(MsgPackError::Range);
        }
        Ok(())
    }

    /// Write a map: header, then each pair as key followed by value, in
    /// insertion order.
    pub fn write_obj(&mut self, obj: &[(PackValue, PackValue)]) -> Result<(), MsgPackError> {
        self.encode_obj(obj, 0)
    }

    fn encode_obj(&mut self, obj: &[(PackValue, PackValue)], depth: u32) -> Result<(), MsgPackError> {
        if depth >= MAX_DEPTH {
            return Err(MsgPackError::DepthLimit);
        }
        self.write_obj_hdr(obj.len())?;
        for (key, value) in obj {
            self.encode_any(key, depth + 1)?;
            self.encode_any(value, depth + 1)?;
        }
        Ok(())
    }

    /// Write a map header for `length` key-value pairs.
    pub fn write_obj_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        let w = &mut self.writer;
        if length <= FIXCONTAINER_MAX {
            w.u8(OVERLAY_FIXMAP | length as u8);
        } else if length <= 0xffff {
            w.u8u16(MAP16, length as u16);
        } else if length <= 0xffff_ffff {
            w.u8u32(MAP32, length as u32);
        } else {
            return Err(MsgPackError::Range);
        }
        Ok(())
    }
}

// ---- JSON convenience methods (operate on serde_json::Value) ----

impl MsgPackEncoder {
    /// Encode a `serde_json::Value` to MessagePack bytes.
    ///
    /// Integers route through the integer encoder; non-integer numbers are
    /// floats and fail with `UnsupportedType`. Object keys encode as str
    /// values and object entries keep their iteration order.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, MsgPackError> {
        self.writer.reset();
        self.write_json(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_json(&mut self, value: &serde_json::Value) -> Result<(), MsgPackError> {
        self.encode_json_value(value, 0)
    }

    fn encode_json_value(
        &mut self,
        value: &serde_json::Value,
        depth: u32,
    ) -> Result<(), MsgPackError> {
        match value {
            serde_json::Value::Null => {
                self.write_null();
                Ok(())
            }
            serde_json::Value::Bool(b) => {
                self.write_boolean(*b);
                Ok(())
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    self.write_integer(i)
                } else if n.is_u64() {
                    // above i64::MAX, so far beyond the 32-bit wire range
                    Err(MsgPackError::Range)
                } else {
                    Err(MsgPackError::UnsupportedType)
                }
            }
            serde_json::Value::String(s) => self.write_str(s),
            serde_json::Value::Array(arr) => {
                if depth >= MAX_DEPTH {
                    return Err(MsgPackError::DepthLimit);
                }
                self.write_arr_hdr(arr.len())?;
                for item in arr {
                    self.encode_json_value(item, depth + 1)?;
                }
                Ok(())
            }
            serde_json::Value::Object(obj) => {
                if depth >= MAX_DEPTH {
                    return Err(MsgPackError::DepthLimit);
                }
                self.write_obj_hdr(obj.len())?;
                for (key, value) in obj {
                    self.write_str(key)?;
                    self.encode_json_value(value, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}
