//! UI helper functions for terminal output formatting.
//!
//! Error messages and warnings go to the error stream with a fixed prefix so
//! they read the same across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Display parameter ignored warning
pub fn warn_parameter_unused(
    err: &mut dyn Write,
    param_name: &str,
    reason: &str,
) -> std::io::Result<()> {
    writeln!(err, "WARNING: Parameter --{} is ignored {}.", param_name, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        display_warning(&mut err, "careful").unwrap();
        warn_parameter_unused(&mut err, "max-retries", "by the circle strategy").unwrap();
        let text = String::from_utf8(err).unwrap();
        assert_eq!(
            text,
            "Error: boom\nWARNING: careful\nWARNING: Parameter --max-retries is ignored by the circle strategy.\n"
        );
    }
}
