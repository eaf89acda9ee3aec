//! Reading the player list.
//!
//! - Reading text files with automatic .zst decompression
//! - Turning a text file into the list of entrant names
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

use std::path::Path;

use crate::error::CliError;

/// Read text file with automatic .zst decompression detection.
///
/// UTF-8 BOM (Byte Order Mark) is automatically stripped if present.
///
/// # Returns
///
/// * `Ok(String)` - File contents as UTF-8 string
/// * `Err(String)` - I/O error, decompression error, or UTF-8 conversion error
pub fn read_text_auto(path: &Path) -> Result<String, String> {
    let is_zst = path.extension().is_some_and(|ext| ext == "zst");
    let mut content = if is_zst {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        // Use a conservative initial capacity; zstd will grow as needed
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Non-blank, trimmed lines of `content`, in order.
///
/// ```rust
/// # use chessort_cli::io_utils::parse_entrant_names;
/// let names = parse_entrant_names("Ana\n\n  Luis  \r\n\t\nMarta");
/// assert_eq!(names, vec!["Ana", "Luis", "Marta"]);
/// ```
pub fn parse_entrant_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ensure the input path names an existing regular file.
pub fn check_input_path(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::InvalidInput(format!(
            "file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(CliError::InvalidInput(format!(
            "path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Read the player list at `path`, one name per line.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when the path does not exist, is not a
/// regular file, cannot be read, or contains no player names.
pub fn read_entrant_names(path: &Path) -> Result<Vec<String>, CliError> {
    check_input_path(path)?;
    let content = read_text_auto(path).map_err(|e| {
        CliError::InvalidInput(format!("failed to read {}: {}", path.display(), e))
    })?;
    let names = parse_entrant_names(&content);
    if names.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "file is empty: {}",
            path.display()
        )));
    }
    Ok(names)
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
