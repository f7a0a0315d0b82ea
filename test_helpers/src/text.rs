//! Text normalisation for behavioural step placeholders.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Splits a comma-separated placeholder into unquoted, non-empty items.
#[must_use]
pub fn list(value: &str) -> Vec<String> {
    unquote(value)
        .split(',')
        .map(|item| unquote(item).to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
