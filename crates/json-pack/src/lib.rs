//! One-directional MessagePack encoding for packdown.
//!
//! This crate turns an in-memory [`PackValue`] tree into its compact,
//! self-describing MessagePack byte encoding. Decoding is the job of an
//! external collaborator and is not provided here.

mod pack_extension;
mod pack_value;

pub mod msgpack;

pub use pack_extension::PackExtension;
pub use pack_value::PackValue;

pub use msgpack::{MsgPackEncoder, MsgPackError};
