//! Small readers for the text files collectors get their data from.
//!
//! Everything here is lenient: a missing or unreadable file reads as `None`
//! and collectors decide whether that is an error.

use regex::Regex;
use std::fs;
use std::path::Path;

/// Read a file and strip trailing newlines and spaces.
///
/// Returns `None` when the file cannot be read or is empty after trimming.
#[must_use]
pub fn read_trimmed(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let trimmed = content.trim_end_matches(['\n', ' ', '\0']);
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Count the subdirectories of `dir`. A missing directory counts as zero.
#[must_use]
pub fn count_dirs(dir: &Path) -> u32 {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let count = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .count();

    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Find the first `key=value` line in `content` and return the unquoted value.
///
/// Whitespace around `=` is allowed. Surrounding double quotes are removed and
/// `\"` / `\\` escapes inside the value are resolved.
#[must_use]
pub fn find_property(content: &str, key: &str) -> Option<String> {
    let pattern = format!(r"(?m)^[ \t]*{}[ \t]*=[ \t]*(.*?)[ \t\r]*$", regex::escape(key));
    let re = Regex::new(&pattern).ok()?;

    let raw = re.captures(content)?.get(1)?.as_str();
    let value = unquote(raw);
    (!value.is_empty()).then_some(value)
}

/// Read `path` and look up `key` in it, see [`find_property`].
#[must_use]
pub fn read_property(path: &Path, key: &str) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    find_property(&content, key)
}

fn unquote(raw: &str) -> String {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && (next == '"' || next == '\\')
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
