//! Bare subreddit-name validation and canonical `/r/<name>` form.

/// The supplied string is not a syntactically valid subreddit name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid subreddit name: {name:?}")]
pub struct InvalidSubredditName {
    pub name: String,
}

impl InvalidSubredditName {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '.' | ':')
}

fn bare_name(candidate: &str) -> Option<&str> {
    let candidate = candidate.strip_suffix('/').unwrap_or(candidate);
    if !candidate.is_empty() && candidate.chars().all(is_name_char) {
        Some(candidate)
    } else {
        None
    }
}

/// Strips an optional leading `/`, `r/` and trailing `/` from `name`.
///
/// - `"pics"`, `"r/pics"`, `"/r/pics/"` → `"pics"`
/// - `"news+world"` → `"news+world"`
/// - `""`, `"two words"` → `InvalidSubredditName`
pub fn strip_r_prefix(name: &str) -> Result<&str, InvalidSubredditName> {
    let trimmed = name.trim();
    let rest = trimmed.strip_prefix('/').unwrap_or(trimmed);

    rest.strip_prefix("r/")
        .and_then(bare_name)
        .or_else(|| bare_name(rest))
        .ok_or_else(|| InvalidSubredditName::new(name))
}

/// Canonical display form, `/r/<name>`.
pub fn canonical_name(name: &str) -> Result<String, InvalidSubredditName> {
    Ok(format!("/r/{}", strip_r_prefix(name)?))
}
