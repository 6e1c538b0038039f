//! Glob pattern compilation.
//!
//! Patterns compile to anchored regular expressions in a single pass:
//! `**/` matches zero or more whole path segments, a remaining `**`
//! matches any sequence, `*` matches a run of non-separator characters,
//! and `?` matches a single non-separator character. Everything else is
//! matched literally.

use regex::Regex;

use crate::error::{Error, Result};

/// True when the pattern contains any wildcard at all.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// True when the pattern requires a recursive tree traversal.
pub fn is_recursive(pattern: &str) -> bool {
    pattern.contains("**")
}

/// Compiles a glob pattern to an anchored regex.
pub fn to_regex(pattern: &str) -> Result<Regex> {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push('^');

    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    if chars.get(i + 2) == Some(&'/') {
                        // "**/": zero or more whole segments
                        out.push_str("(?:.*/)?");
                        i += 3;
                    } else {
                        // bare "**": any sequence
                        out.push_str(".*");
                        i += 2;
                    }
                } else {
                    out.push_str("[^/]*");
                    i += 1;
                }
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            c => {
                if regex_syntax_char(c) {
                    out.push('\\');
                }
                out.push(c);
                i += 1;
            }
        }
    }

    out.push('$');
    Regex::new(&out).map_err(|_| Error::invalid_pattern(pattern))
}

fn regex_syntax_char(c: char) -> bool {
    matches!(
        c,
        '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\'
    )
}
