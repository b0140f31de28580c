//! URL slug generation for article titles.

use uuid::Uuid;

/// Generate a URL-friendly slug from a title.
///
/// Lowercases, folds common Latin accents to ASCII, drops everything that is not
/// an ASCII letter, digit, whitespace or `-`, and turns each run of whitespace
/// and dashes into a single `-`. Leading and trailing dashes are trimmed.
///
/// ```text
/// "Réparer son vélo : 5 conseils" -> "reparer-son-velo-5-conseils"
/// ```
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        let c = fold_accent(c);

        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
        // anything else (punctuation, underscores, other scripts) is dropped
    }

    slug
}

/// Short random suffix used to disambiguate colliding slugs.
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Append a random suffix to `slug`, or use the suffix alone if the slug is empty.
pub fn with_suffix(slug: &str) -> String {
    if slug.is_empty() {
        unique_suffix()
    } else {
        format!("{}-{}", slug, unique_suffix())
    }
}

/// Whether `slug` is `base` itself or `base` with a random suffix from [`with_suffix`].
pub fn is_variant_of(slug: &str, base: &str) -> bool {
    if slug == base {
        return true;
    }

    let suffix = if base.is_empty() {
        Some(slug)
    } else {
        slug.strip_prefix(base).and_then(|rest| rest.strip_prefix('-'))
    };

    suffix.is_some_and(|s| s.len() == 8 && s.chars().all(|c| c.is_ascii_hexdigit()))
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}
