//! Filename resolution policy.
//!
//! - `mime` - Content-type to extension table
//! - `unique` - Collision-free destination paths

mod mime;
mod unique;

use std::path::Path;

pub use mime::extension_for_mime;
pub use unique::unique_path;

/// Check whether `name` already carries an extension.
///
/// Uses path semantics: `archive.tar.gz` has one, `.bashrc` and `photo`
/// do not.
#[must_use]
pub fn has_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| !ext.is_empty())
}

/// Make sure `base_name` ends in a suitable extension.
///
/// Names that already have an extension are returned unchanged. Otherwise
/// the extension registered for `mime_type` is appended; unknown content
/// types leave the name untouched.
#[must_use]
pub fn derive_filename(base_name: &str, mime_type: &str) -> String {
    if has_extension(base_name) {
        return base_name.to_string();
    }

    match extension_for_mime(mime_type) {
        Some(ext) => format!("{base_name}.{ext}"),
        None => base_name.to_string(),
    }
}
