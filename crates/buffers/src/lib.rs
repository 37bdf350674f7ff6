//! Binary buffer utilities for packdown.
//!
//! This crate provides the binary buffer writing primitive used by the
//! packdown encoders.
//!
//! # Overview
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//!
//! # Example
//!
//! ```
//! use packdown_buffers::Writer;
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! assert_eq!(data[..3], [0x01, 0x02, 0x03]);
//! assert_eq!(&data[3..], b"hello");
//! ```

mod writer;

pub use writer::Writer;
