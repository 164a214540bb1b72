//! `?` → `$n` placeholder rewriting.
//!
//! Statements passed to [`Gdo`](crate::Gdo) use `?` positional markers. The
//! Postgres driver expects `$1, $2, ...`, so markers are numbered left to right
//! before dispatch. A `?` inside a single-quoted literal (including `E'...'`
//! escape strings), a double-quoted identifier, a dollar-quoted body or a
//! comment is left alone.
//!
//! Postgres operators spelled with `?` (`jsonb ? text`, `?|`, `?&`) cannot be
//! used in these statements; call `jsonb_exists`/`jsonb_exists_any`/
//! `jsonb_exists_all` instead.

use crate::error::{GdoError, GdoResult};

/// Rewrite `?` markers to `$n` and return the new SQL with the marker count.
pub fn rewrite_placeholders(sql: &str) -> (String, usize) {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut count = 0usize;
    let mut rest = sql;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '?' => {
                count += 1;
                out.push('$');
                out.push_str(&count.to_string());
                rest = &rest[1..];
            }
            '\'' | '"' => {
                let escapes = ch == '\'' && opens_escape_string(&out);
                let end = quoted_len(rest, ch, escapes);
                out.push_str(&rest[..end]);
                rest = &rest[end..];
            }
            '-' if rest.starts_with("--") => {
                let end = rest.find('\n').map_or(rest.len(), |pos| pos + 1);
                out.push_str(&rest[..end]);
                rest = &rest[end..];
            }
            '/' if rest.starts_with("/*") => {
                let end = block_comment_len(rest);
                out.push_str(&rest[..end]);
                rest = &rest[end..];
            }
            '$' => {
                let end = dollar_quoted_len(rest).unwrap_or(1);
                out.push_str(&rest[..end]);
                rest = &rest[end..];
            }
            _ => {
                let len = ch.len_utf8();
                out.push_str(&rest[..len]);
                rest = &rest[len..];
            }
        }
    }

    (out, count)
}

/// Rewrite markers and require exactly `arg_count` of them.
pub fn bind_positional(sql: &str, arg_count: usize) -> GdoResult<String> {
    let (rewritten, count) = rewrite_placeholders(sql);
    if count != arg_count {
        return Err(GdoError::validation(format!(
            "statement has {} '?' placeholders, but {} arguments provided",
            count, arg_count
        )));
    }
    Ok(rewritten)
}

/// Whether a `'` following `before` opens an `E'...'` escape string.
fn opens_escape_string(before: &str) -> bool {
    let mut tail = before.chars().rev();
    matches!(tail.next(), Some('E' | 'e'))
        && !tail
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Length of a quoted run starting at `s[0] == quote`, including both quotes.
/// Doubled quotes (`''`, `""`) are escapes; with `backslash`, so is `\x`.
/// Unterminated runs extend to the end.
fn quoted_len(s: &str, quote: char, backslash: bool) -> usize {
    let bytes = s.as_bytes();
    let q = quote as u8;
    let mut i = 1;
    while i < bytes.len() {
        if backslash && bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if bytes[i] == q {
            if bytes.get(i + 1) == Some(&q) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    s.len()
}

/// Length of a (possibly nested) block comment starting at `s`.
fn block_comment_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'/', b'*') => {
                depth += 1;
                i += 2;
            }
            (b'*', b'/') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return i;
                }
            }
            _ => i += 1,
        }
    }
    s.len()
}

/// Length of a dollar-quoted body (`$$...$$` or `$tag$...$tag$`) starting at `s`.
///
/// Returns `None` when `s` does not open one (e.g. `$1`).
fn dollar_quoted_len(s: &str) -> Option<usize> {
    let after = &s[1..];
    let tag_len = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
    let tag = &after[..tag_len];
    if tag.starts_with(|c: char| c.is_ascii_digit()) || !after[tag_len..].starts_with('$') {
        return None;
    }

    let open_len = tag_len + 2;
    let delimiter = &s[..open_len];
    let close = s[open_len..].find(delimiter)?;
    Some(open_len + close + open_len)
}
