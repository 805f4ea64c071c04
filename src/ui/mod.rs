//! Output rendering
//!
//! - `json` - Machine-readable output (`--json`)
//! - `text` - Human-readable reports

pub mod json;
pub mod text;
