//! Branch name derivation from issue summaries.

/// Maximum number of summary words carried into the slug.
const MAX_SLUG_WORDS: usize = 5;

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
///
/// Already-sanitized input is a fixed point, so running this twice is
/// the same as running it once.
fn sanitize_word(word: &str) -> String {
    word.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive a branch name from a project short name, an issue ID, and the
/// issue summary.
///
/// Pattern: {short_name}-{issue_id}-{slug}
/// Example: ABC-ABC-42-Fix-the-login-page-crash__
///
/// The slug keeps at most the first five space-separated words of the
/// summary; words past that are dropped, not folded into the fifth.
/// Words from repeated spaces stay as empty segments. An empty summary
/// leaves an empty slug, so the result ends with a hyphen.
///
/// Neither `short_name` nor `issue_id` is escaped; a hyphen inside
/// either passes through verbatim.
pub fn branch_name(short_name: &str, issue_id: &str, summary: &str) -> String {
    let slug = summary
        .split(' ')
        .take(MAX_SLUG_WORDS)
        .map(sanitize_word)
        .collect::<Vec<_>>()
        .join("-");

    format!("{short_name}-{issue_id}-{slug}")
}
