//! Command implementations for the pathrep CLI.

mod decode;
mod encode;
mod resolve;
mod scan;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use resolve::ResolveCommand;
pub use scan::ScanCommand;

use pathrep::PathValue;

/// Render a path value for human-readable output: text as-is, raw
/// bytes in ASCII-escaped form.
pub fn display_value(value: &PathValue) -> String {
    match value {
        PathValue::Text(text) => text.clone(),
        PathValue::Bytes(bytes) => bytes.escape_ascii().to_string(),
    }
}
