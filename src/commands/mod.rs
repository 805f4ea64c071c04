//! Command implementations

pub mod check;
pub mod profiles;

use std::io::Write;

/// Flush stdout and exit with `code`
pub(crate) fn exit_with(code: i32) -> ! {
    let _ = std::io::stdout().flush();
    std::process::exit(code)
}
