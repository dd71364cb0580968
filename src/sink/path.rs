//! Summary file naming

use std::path::{Path, PathBuf};

/// Extension appended to every summary file
pub const SUMMARY_EXTENSION: &str = ".summary";

/// Scope separator inside tensor names
const SCOPE_SEPARATOR: char = '/';

/// Stand-in for [`SCOPE_SEPARATOR`] in file names
const SCOPE_PLACEHOLDER: &str = "#";

/// Path of the summary file for tensor `name` under `root`
///
/// Tensor names are scoped with `/` (`scope/layer/weight`); every `/` is
/// replaced by `#` so the whole name maps to one file directly inside
/// `root` instead of a nested path.
///
/// ```
/// use std::path::Path;
/// use tensorsum::sink::summary_file_path;
/// assert_eq!(
///     summary_file_path("/tmp/run1", "a/b/weight"),
///     Path::new("/tmp/run1/a#b#weight.summary"),
/// );
/// ```
pub fn summary_file_path(root: impl AsRef<Path>, name: &str) -> PathBuf {
    let mut file_name = name.replace(SCOPE_SEPARATOR, SCOPE_PLACEHOLDER);
    file_name.push_str(SUMMARY_EXTENSION);
    root.as_ref().join(file_name)
}
