//! Lexical shapes of the subreddit token in `/r/<token>`.

/// Which listing a token names. Checked in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenShape {
    /// Exactly `all`.
    All,
    /// `all-a-b`: everything except the listed subreddits.
    AllSubtraction,
    /// `a+b+c`: several subreddits merged.
    Combination,
    /// A single subreddit name.
    Single,
}

/// Word characters (ASCII letters, digits, `_`) and dots.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// `.` and `..` are path navigation, not names; a URL cannot carry them as a segment.
fn is_name(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && s.chars().all(is_name_char)
}

fn is_all_subtraction(token: &str) -> bool {
    match token.strip_prefix("all-") {
        Some(excluded) => excluded.split('-').all(is_name),
        None => false,
    }
}

fn is_combination(token: &str) -> bool {
    token.contains('+') && token.split('+').all(is_name)
}

/// Classifies `token`, or `None` if it fits no listing shape.
///
/// Matching is case-sensitive: `All` is a plain subreddit name, not the
/// site-wide listing.
pub fn classify(token: &str) -> Option<TokenShape> {
    if token == "all" {
        Some(TokenShape::All)
    } else if is_all_subtraction(token) {
        Some(TokenShape::AllSubtraction)
    } else if is_combination(token) {
        Some(TokenShape::Combination)
    } else if is_name(token) {
        Some(TokenShape::Single)
    } else {
        None
    }
}
