//! File and directory name matching.
//!
//! # Responsibilities
//! - Decide which file names are route modules
//! - Decide which directory names are descended into
//!
//! # Design Decisions
//! - Pattern matching is an unanchored regex search (`routes\.rs` also
//!   accepts `admin.routes.rs`)
//! - Directory names match exactly and case-sensitively
//! - The blacklist only subtracts from what the whitelist admits

use std::collections::HashSet;
use std::fmt;

use regex::Regex;

/// Trait for deciding whether a file name is a route module.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns true if `file_name` should be loaded as a route module.
    fn matches(&self, file_name: &str) -> bool;
}

/// Matches file names against a regular expression.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Regex,
}

impl PatternMatcher {
    /// Compile a new pattern matcher.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Matcher for PatternMatcher {
    fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }
}

/// Matches file names with an arbitrary predicate.
pub struct FnMatcher<F> {
    predicate: F,
}

impl<F> FnMatcher<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> fmt::Debug for FnMatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMatcher").finish_non_exhaustive()
    }
}

impl<F> Matcher for FnMatcher<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, file_name: &str) -> bool {
        (self.predicate)(file_name)
    }
}

/// Whitelist/blacklist filter over directory names.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    white_list: HashSet<String>,
    black_list: HashSet<String>,
}

impl DirectoryFilter {
    pub fn new<W, B>(white_list: W, black_list: B) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            white_list: white_list.into_iter().map(Into::into).collect(),
            black_list: black_list.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the directory should be descended into.
    pub fn admits(&self, dir_name: &str) -> bool {
        self.white_list.contains(dir_name) && !self.black_list.contains(dir_name)
    }

    /// Blacklist entries that are not whitelisted and therefore have no effect.
    pub fn inert_black_list_entries(&self) -> Vec<&str> {
        let mut inert: Vec<&str> = self
            .black_list
            .difference(&self.white_list)
            .map(String::as_str)
            .collect();
        inert.sort_unstable();
        inert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matcher() {
        let matcher = PatternMatcher::new(r"routes\.rs").unwrap();

        assert!(matcher.matches("routes.rs"));
        assert!(matcher.matches("admin.routes.rs")); // Unanchored
        assert!(!matcher.matches("routes_rs"));
        assert!(!matcher.matches("api.rs"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternMatcher::new("routes(").is_err());
    }

    #[test]
    fn test_fn_matcher() {
        let matcher = FnMatcher::new(|name: &str| name.ends_with(".api"));
        assert!(matcher.matches("users.api"));
        assert!(!matcher.matches("users.rs"));
    }

    #[test]
    fn test_directory_filter() {
        let filter = DirectoryFilter::new(["auth", "blackList"], ["blackList", "legacy"]);

        assert!(filter.admits("auth"));
        assert!(!filter.admits("blackList"));
        assert!(!filter.admits("account"));
        assert!(!filter.admits("Auth")); // Case sensitive
        assert_eq!(filter.inert_black_list_entries(), vec!["legacy"]);
    }

    #[test]
    fn test_empty_filter_admits_nothing() {
        let filter = DirectoryFilter::default();
        assert!(!filter.admits("auth"));
    }
}
