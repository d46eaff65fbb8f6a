//! Derivation of golden names from storage identifiers.

use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Derive a bare golden name from a storage identifier.
///
/// Strips any leading directories and the final extension. Both `/` and `\`
/// are treated as separators on every platform, so identifiers recorded on
/// one OS resolve to the same name on another.
///
/// ```
/// use aurum_store::name_of;
///
/// assert_eq!(name_of("golden/totals.json").unwrap(), "totals");
/// assert_eq!(name_of("golden\\totals.json").unwrap(), "totals");
/// ```
pub fn name_of(identifier: &str) -> StoreResult<String> {
    let file_name = identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier);

    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| StoreError::InvalidIdentifier(identifier.to_string()))
}
