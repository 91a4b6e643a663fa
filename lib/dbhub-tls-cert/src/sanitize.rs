/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use std::borrow::Cow;

/// Escape control characters in a user supplied string before it is
/// written to a log sink, so that line feeds and friends cannot be used
/// to forge log records. Idempotent, the escaped form contains no
/// control characters itself.
pub fn log_str(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_string_is_borrowed() {
        assert!(matches!(log_str("alice"), Cow::Borrowed("alice")));
        assert_eq!(log_str("alice@dbhub.io"), "alice@dbhub.io");
    }

    #[test]
    fn control_chars_escaped() {
        assert_eq!(log_str("a\nb"), "a\\nb");
        assert_eq!(log_str("a\r\nINFO forged"), "a\\r\\nINFO forged");
        assert_eq!(log_str("bell\x07"), "bell\\u{7}");
    }

    #[test]
    fn idempotent() {
        let once = log_str("x\ny").into_owned();
        let twice = log_str(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_ascii_kept() {
        assert_eq!(log_str("müller"), "müller");
    }
}
