//! Golden name validation.
//!
//! A golden name doubles as the stem of its file on disk, so it must survive
//! a round trip through the filesystem on every platform:
//! - Must be non-empty
//! - Must not contain `/`, `\`, or control characters
//! - Must not start with `.`
//! - Must not end with `.` or whitespace

use crate::error::TypeError;

/// Separators rejected regardless of the host platform.
const SEPARATORS: &[char] = &['/', '\\'];

/// Validate a golden name, returning `Ok(())` if it can be stored.
///
/// # Examples
///
/// ```
/// use aurum_types::name::validate_golden_name;
///
/// assert!(validate_golden_name("monthly_totals").is_ok());
/// assert!(validate_golden_name("fit.v2").is_ok());
/// assert!(validate_golden_name("").is_err());
/// assert!(validate_golden_name("dir/name").is_err());
/// ```
pub fn validate_golden_name(name: &str) -> Result<(), TypeError> {
    let invalid = |reason: String| TypeError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name must not be empty".into()));
    }

    if let Some(sep) = name.chars().find(|c| SEPARATORS.contains(c)) {
        return Err(invalid(format!("contains path separator {sep:?}")));
    }

    if let Some(ch) = name.chars().find(|c| c.is_control()) {
        return Err(invalid(format!("contains control character {ch:?}")));
    }

    if name.starts_with('.') {
        return Err(invalid("must not start with '.'".into()));
    }

    // Windows silently drops trailing dots and spaces from file names.
    if name.ends_with('.') || name.ends_with(char::is_whitespace) {
        return Err(invalid("must not end with '.' or whitespace".into()));
    }

    Ok(())
}
