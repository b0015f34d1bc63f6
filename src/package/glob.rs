// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Shell-style file patterns used to search the file lists of built packages.
//!
//! `*` also crosses `/`, `?` matches a single character and `[...]` is a
//! character class (`[!...]` negates it). The whole path has to match.

use glob::Pattern;

use super::errors::{PackageError, PackageResult};

/// A compiled file pattern.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: Pattern,
}

impl Glob {
    /// Compile a shell-style pattern.
    ///
    /// # Errors
    /// Returns an error if the pattern is malformed, e.g. an unterminated `[`.
    pub fn new(pattern: &str) -> PackageResult<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| PackageError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(Self { pattern })
    }

    /// Escape the pattern metacharacters in `text` so it only matches itself.
    #[must_use]
    pub fn escape(text: &str) -> String {
        Pattern::escape(text)
    }

    /// Get the original pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        Glob::new(pattern).unwrap().is_match(path)
    }

    #[test]
    fn test_star_crosses_directories() {
        assert!(matches("*.html", "/usr/share/javadoc/foo/index.html"));
        assert!(matches(
            "/usr/share/javadoc/foo/*",
            "/usr/share/javadoc/foo/a/b.css"
        ));
        assert!(!matches("*.html", "/usr/share/javadoc/foo/index.htm"));
    }

    #[test]
    fn test_whole_path_must_match() {
        assert!(!matches(
            "/usr/share/javadoc/foo/*",
            "/opt/usr/share/javadoc/foo/x"
        ));
        assert!(!matches("/usr/share/javadoc/foo/*", "/usr/share/javadoc/foo"));
    }

    #[test]
    fn test_dot_is_literal() {
        assert!(matches(
            "/usr/share/javadoc/foo-1.0/*",
            "/usr/share/javadoc/foo-1.0/a"
        ));
        assert!(!matches(
            "/usr/share/javadoc/foo-1.0/*",
            "/usr/share/javadoc/foo-1x0/a"
        ));
        assert!(matches("/lib/libfoo+bar.so", "/lib/libfoo+bar.so"));
    }

    #[test]
    fn test_question_mark() {
        assert!(matches("/a/?.pom", "/a/x.pom"));
        assert!(!matches("/a/?.pom", "/a/xy.pom"));
    }

    #[test]
    fn test_character_classes() {
        assert!(matches("/a/[abc].jar", "/a/b.jar"));
        assert!(!matches("/a/[!abc].jar", "/a/b.jar"));
        assert!(matches("/a/[!abc].jar", "/a/d.jar"));
        assert!(matches("/a/[a-c].jar", "/a/b.jar"));
    }

    #[test]
    fn test_malformed_pattern_is_error() {
        let err = Glob::new("/a/[abc.jar").unwrap_err();
        assert!(matches!(err, PackageError::InvalidPattern { .. }));
    }

    #[test]
    fn test_as_str_keeps_pattern() {
        assert_eq!(Glob::new("*.pom").unwrap().as_str(), "*.pom");
    }

    #[test]
    fn test_escape() {
        let escaped = Glob::escape("foo[1]*?");
        assert_eq!(escaped, "foo[[]1[]][*][?]");
        assert!(matches(&escaped, "foo[1]*?"));
        assert!(!matches(&escaped, "foo1xy"));
    }
}
