use super::types::Directive;

/// Strip trailing end-of-line characters (any run of `\r` and `\n`).
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Classify a stripped line.
///
/// Returns `None` for ordinary content, including lines that merely
/// resemble a directive: `@ifdef` with no name or with extra tokens,
/// `@elsewhere`, leading whitespace before the keyword.
pub fn parse_directive(line: &str) -> Option<Directive<'_>> {
    if let Some(rest) = line.strip_prefix("@ifdef") {
        return parse_ifdef(rest);
    }
    if let Some(rest) = line.strip_prefix("@else") {
        if rest.chars().all(char::is_whitespace) {
            return Some(Directive::Else);
        }
        return None;
    }
    if let Some(rest) = line.strip_prefix("@endif") {
        if rest.chars().all(char::is_whitespace) {
            return Some(Directive::Endif);
        }
        return None;
    }
    None
}

/// `@ifdef` takes exactly one bare name: keyword, one or more whitespace
/// characters, a non-whitespace token, then nothing but whitespace.
fn parse_ifdef(rest: &str) -> Option<Directive<'_>> {
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        // No separating whitespace: "@ifdef" alone or "@ifdefFOO"
        return None;
    }
    let name_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (name, tail) = trimmed.split_at(name_end);
    if name.is_empty() || !tail.chars().all(char::is_whitespace) {
        return None;
    }
    Some(Directive::Ifdef(name))
}
