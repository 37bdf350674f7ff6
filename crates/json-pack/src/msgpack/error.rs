//! MessagePack encoder error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgPackError {
    #[error("value out of supported range")]
    Range,
    #[error("unsupported value type")]
    UnsupportedType,
    #[error("maximum nesting depth exceeded")]
    DepthLimit,
}
