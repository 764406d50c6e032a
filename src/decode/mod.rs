//! Tolerant decoding of loosely typed API fields
//!
//! The orders API emits the same logical field as either a native JSON
//! number or a numeric string depending on context. The decoders here
//! accept both shapes and fail loudly on anything else.

mod decoders;

pub use decoders::{flex_int, flex_int_opt, parse_flexible_int, rfc3339_opt};
