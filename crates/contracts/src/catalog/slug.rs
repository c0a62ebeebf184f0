//! Category name to image file name normalization.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derives the background image file name for a category display name.
///
/// Lowercases, decomposes accented letters (NFD) and drops the combining
/// marks, then maps every remaining non-`[a-z0-9]` character to `-` and
/// appends `.jpg`. Total and deterministic.
///
/// # Examples
///
/// ```
/// use contracts::catalog::image_file_name;
///
/// assert_eq!(image_file_name("CAFÉ"), "cafe.jpg");
/// assert_eq!(image_file_name("AZÚCAR Y PAPELÓN"), "azucar-y-papelon.jpg");
/// ```
pub fn image_file_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    for ch in name.to_lowercase().nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else {
            slug.push('-');
        }
    }
    slug.push_str(".jpg");
    slug
}
