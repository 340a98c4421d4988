//! Placeholder substitution for user supplied format strings.
//!
//! A template is literal text with placeholders:
//!
//! - `{N}` inserts argument `N` (1-based).
//! - `{}` inserts the argument chosen by an internal counter. The counter
//!   starts at 1 and advances only on empty placeholders, so `"{2} {} {}"`
//!   yields the second, the first, then the second argument again.
//! - `{{` and `}}` produce a literal `{` and `}`. A lone `}` is copied as is.
//!   Text without placeholders is therefore returned unchanged only when it
//!   holds no `{{` or `}}`: `"a}}b"` renders as `"a}b"`.
//!
//! Rendering never fails. Anything that cannot be resolved (an index out of
//! range, a non-numeric body) is copied through with its braces, and an
//! unterminated `{` copies the rest of the template verbatim.
//!
//! ```rust
//! use fastfetch::format::{render, FormatArg};
//!
//! let args = [FormatArg::UInt(512), FormatArg::UInt(2048), FormatArg::UInt(25)];
//! assert_eq!(render("{}MiB / {}MiB ({}%)", None, &args), "512MiB / 2048MiB (25%)");
//! ```

use std::fmt::Write as _;

use super::FormatArg;

/// Render `template` against `args` into a new string.
///
/// When `error` is a non-empty string the result is exactly that string and no
/// substitution happens. Error messages go through the same print path as
/// successful values this way.
#[must_use]
pub fn render(template: &str, error: Option<&str>, args: &[FormatArg]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    render_into(&mut out, template, error, args);
    out
}

/// Same as [`render`], appending to an existing buffer.
pub fn render_into(out: &mut String, template: &str, error: Option<&str>, args: &[FormatArg]) {
    if let Some(error) = error.filter(|e| !e.is_empty()) {
        out.push_str(error);
        return;
    }

    let mut auto_index = 1usize;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }

        if let Some(after) = tail.strip_prefix('}') {
            // `}}` collapses to one brace, a lone `}` is literal
            out.push('}');
            rest = after.strip_prefix('}').unwrap_or(after);
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return;
        };

        let placeholder = &tail[..=close];
        let body = &tail[1..close];
        rest = &tail[close + 1..];

        let index = if body.is_empty() {
            let index = auto_index;
            auto_index += 1;
            Some(index)
        } else {
            parse_index(body)
        };

        match index.and_then(|i| i.checked_sub(1)).and_then(|i| args.get(i)) {
            Some(arg) => {
                let _ = write!(out, "{arg}");
            }
            None => out.push_str(placeholder),
        }
    }

    out.push_str(rest);
}

fn parse_index(body: &str) -> Option<usize> {
    if body.bytes().all(|b| b.is_ascii_digit()) {
        body.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FormatArg {
        FormatArg::from(s)
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        for template in ["", "plain text", "tabs\tand\nnewlines", "ünïcödé"] {
            assert_eq!(render(template, None, &[text("unused")]), template);
        }
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(render("{{}}", None, &[text("A")]), "{}");
        assert_eq!(render("{{1}", None, &[text("A")]), "{1}");
        assert_eq!(render("a}b", None, &[]), "a}b");
    }

    #[test]
    fn test_doubled_closing_brace_collapses() {
        assert_eq!(render("a}}b", None, &[]), "a}b");
        assert_eq!(render("}}}", None, &[]), "}}");
        assert_eq!(render("{1}}}", None, &[text("A")]), "A}");
    }

    #[test]
    fn test_auto_index_matches_explicit() {
        let args = [text("A"), text("B")];
        assert_eq!(render("{1} {2}", None, &args), render("{} {}", None, &args));
        assert_eq!(render("{} {}", None, &args), "A B");
    }

    #[test]
    fn test_explicit_index_does_not_advance_counter() {
        let args = [text("A"), text("B")];
        assert_eq!(render("{2} {} {}", None, &args), "B A B");
    }

    #[test]
    fn test_out_of_range_is_verbatim() {
        assert_eq!(render("{5}", None, &[text("A")]), "{5}");
        assert_eq!(render("{0}", None, &[text("A")]), "{0}");
        assert_eq!(render("{} {} {}", None, &[text("A")]), "A {} {}");
    }

    #[test]
    fn test_malformed_index_is_verbatim() {
        assert_eq!(render("{x}", None, &[text("A")]), "{x}");
        assert_eq!(render("{+1}", None, &[text("A")]), "{+1}");
        assert_eq!(render("{ 1}", None, &[text("A")]), "{ 1}");
    }

    #[test]
    fn test_unterminated_placeholder() {
        assert_eq!(render("abc{def", None, &[]), "abc{def");
        assert_eq!(render("{1} and {", None, &[text("A")]), "A and {");
    }

    #[test]
    fn test_null_renders_empty() {
        let args = [text("A"), FormatArg::Null, text("C")];
        assert_eq!(render("{1}[{2}]{3}", None, &args), "A[]C");
    }

    #[test]
    fn test_error_short_circuits() {
        let args = [FormatArg::Null, FormatArg::Null];
        assert_eq!(render("{} {}", Some("No battery"), &args), "No battery");
        assert_eq!(render("{1}", Some(""), &[text("A")]), "A");
    }

    #[test]
    fn test_memory_format() {
        let args = [FormatArg::UInt(512), FormatArg::UInt(2048), FormatArg::UInt(25)];
        assert_eq!(
            render("{}MiB / {}MiB ({}%)", None, &args),
            "512MiB / 2048MiB (25%)"
        );
    }

    #[test]
    fn test_render_into_appends() {
        let mut out = String::from("Battery");
        render_into(&mut out, " {}", None, &[FormatArg::UInt8(2)]);
        assert_eq!(out, "Battery 2");
    }
}
