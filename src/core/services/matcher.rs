//! Exclusion matcher service - decides which changed files are ignored
//!
//! This module contains pure matching logic with no I/O dependencies.

use glob::{MatchOptions, Pattern};

/// `*` and `?` never cross a `/`, like shell globs
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A single compiled exclusion pattern
#[derive(Debug, Clone)]
struct Exclusion {
    pattern: Pattern,
    /// Directory portion of a `dir/*` pattern, matched as a raw string prefix
    dir_prefix: Option<String>,
}

impl Exclusion {
    fn compile(raw: &str) -> Result<Self, glob::PatternError> {
        let pattern = Pattern::new(&normalize(raw))?;
        let dir_prefix = raw.strip_suffix('*').filter(|dir| dir.ends_with('/')).map(clean_dir);
        Ok(Self {
            pattern,
            dir_prefix,
        })
    }

    fn matches(&self, path: &str) -> bool {
        self.pattern.matches_with(path, MATCH_OPTIONS)
            || self.pattern.matches_with(base_name(path), MATCH_OPTIONS)
            || self.dir_prefix.as_deref().is_some_and(|dir| path.starts_with(dir))
    }
}

/// A compiled list of exclusion patterns
///
/// Each pattern is tried three ways against a path:
/// - glob match against the full path
/// - glob match against the final path segment
/// - for `dir/*` patterns, a plain string prefix test against the cleaned `dir`
///
/// Patterns that fail to compile are logged and skipped.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    exclusions: Vec<Exclusion>,
}

impl ExclusionSet {
    /// Compile a list of glob patterns, skipping malformed ones
    #[must_use]
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let exclusions = patterns
            .iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                match Exclusion::compile(raw) {
                    Ok(exclusion) => Some(exclusion),
                    Err(e) => {
                        log::warn!("Invalid exclude pattern '{raw}': {e}");
                        None
                    },
                }
            })
            .collect();
        Self { exclusions }
    }

    /// Check if a changed file is excluded from size accounting
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusions.iter().any(|e| e.matches(path))
    }
}

/// Check if `path` is excluded by any of `patterns`
///
/// Convenience wrapper around [`ExclusionSet`] for one-off checks.
#[must_use]
pub fn is_excluded<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    ExclusionSet::new(patterns).is_excluded(path)
}

/// Rewrite shell-glob syntax into the dialect `glob::Pattern` accepts
///
/// A run of `*` is a single wildcard and `[^...]` negates a class.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.next_if_eq(&'*').is_some() {}
                out.push('*');
            },
            '[' => {
                out.push('[');
                if chars.next_if_eq(&'^').is_some() {
                    out.push('!');
                }
            },
            _ => out.push(c),
        }
    }
    out
}

/// Lexically clean the `dir/` part of a `dir/*` pattern
///
/// Drops empty and `.` segments and resolves `..` against the preceding
/// segment. A rooted directory stays rooted, an empty relative one is `.`.
fn clean_dir(dir: &str) -> String {
    let rooted = dir.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in dir.split('/') {
        match segment {
            "" | "." => {},
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                },
                _ if rooted => {},
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Final `/`-separated segment of a path
fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return path;
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
