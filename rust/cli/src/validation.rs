//! Validation of command-line values before a draw runs.

use chessort_engine::group::max_group_size;

/// Validate the requested group size against the number of players.
///
/// Accepts any size in `1..=entrant_count / 2` and returns it as `usize`.
///
/// # Example
///
/// ```rust
/// # use chessort_cli::validation::validate_group_size;
/// assert_eq!(validate_group_size(5, 10), Ok(5));
/// assert!(validate_group_size(6, 10).is_err());
/// assert!(validate_group_size(0, 10).is_err());
/// ```
pub fn validate_group_size(group: i64, entrant_count: usize) -> Result<usize, String> {
    let size = validate_positive_group(group)?;
    let max = max_group_size(entrant_count);
    if size > max {
        return Err(format!(
            "group size cannot be greater than half the number of players ({} players allow at most {})",
            entrant_count, max
        ));
    }
    Ok(size)
}

/// Validate that the group size is a positive integer.
pub fn validate_positive_group(group: i64) -> Result<usize, String> {
    if group <= 0 {
        return Err("group size must be a positive integer".into());
    }
    usize::try_from(group).map_err(|_| "group size is too large".to_string())
}

/// Validate the per-round retry budget.
///
/// ```rust
/// # use chessort_cli::validation::validate_max_retries;
/// assert!(validate_max_retries(1).is_ok());
/// assert!(validate_max_retries(0).is_err());
/// ```
pub fn validate_max_retries(max_retries: u32) -> Result<(), String> {
    if max_retries == 0 {
        return Err("max_retries must be >= 1".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_size_half_of_roster_is_accepted() {
        assert_eq!(validate_group_size(5, 10), Ok(5));
        assert_eq!(validate_group_size(5, 11), Ok(5));
    }

    #[test]
    fn group_size_above_half_is_rejected() {
        let err = validate_group_size(6, 11).unwrap_err();
        assert!(err.contains("half the number of players"));
    }

    #[test]
    fn non_positive_group_size_is_rejected() {
        assert!(validate_positive_group(0).unwrap_err().contains("positive"));
        assert!(validate_positive_group(-4).unwrap_err().contains("positive"));
        assert_eq!(validate_positive_group(3), Ok(3));
    }
}
