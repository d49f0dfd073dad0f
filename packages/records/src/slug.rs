//! Slugs: URL-safe pattern handles, unique across all patterns.

use crate::input::strip_all_tags;
use crate::{Pattern, Records};

/// Turn a title into a slug: lowercase ASCII words joined by `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in strip_all_tags(title).chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        } else if (c == '-' || c.is_whitespace() || c == '.' || c == '/') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Whether `slug` is taken by a pattern other than `exclude_id`.
pub fn slug_taken(patterns: &Records<Pattern>, slug: &str, exclude_id: Option<&str>) -> bool {
    patterns
        .iter()
        .any(|pattern| pattern.slug == slug && Some(pattern.id.as_str()) != exclude_id)
}

/// `base`, or `base-1`, `base-2`, ... whichever is first free.
pub fn unique_slug(patterns: &Records<Pattern>, base: &str, exclude_id: Option<&str>) -> String {
    let mut slug = base.to_string();
    let mut counter = 1;
    while slug_taken(patterns, &slug, exclude_id) {
        slug = format!("{}-{}", base, counter);
        counter += 1;
    }
    slug
}
