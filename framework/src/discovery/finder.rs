//! Recursive file discovery
//!
//! The finder walks a directory tree depth-first and collects every regular
//! file whose base name matches a suffix or a regex. It backs router module
//! discovery at startup but is general-purpose.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

use super::matchers::{matches_substring, matches_suffix};

/// Errors raised by directory traversal
///
/// Both variants are fail-fast: the finder runs once at startup, so partial
/// results are worth less than a clear failure.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A directory could not be opened or read (missing, permission denied,
    /// not a directory).
    #[error("could not read directory '{path}': {source}")]
    Access {
        /// The directory that failed to open
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The supplied file name pattern is not a valid regex.
    #[error("invalid file name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// How file base names are matched during discovery
#[derive(Debug, Clone)]
pub enum FilePattern {
    /// Literal trailing substring of the base name, e.g. `.router.json`
    Suffix(String),
    /// Fully-formed regex tested against the base name
    Regex(Regex),
}

impl FilePattern {
    /// Match base names by literal suffix
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::Suffix(suffix.into())
    }

    /// Match base names by regex
    ///
    /// A malformed pattern is surfaced immediately as
    /// [`DiscoveryError::Pattern`] rather than silently treated as a
    /// non-match.
    pub fn regex(pattern: &str) -> Result<Self, DiscoveryError> {
        Ok(Self::Regex(Regex::new(pattern)?))
    }

    /// Test a file base name against this pattern
    pub fn matches(&self, base_name: &str) -> bool {
        match self {
            Self::Suffix(suffix) => matches_suffix(suffix, base_name),
            Self::Regex(regex) => regex.is_match(base_name),
        }
    }
}

/// Directories to skip during traversal
///
/// A token is matched against the *directory path string* by substring
/// containment, not by path-segment equality. Looser than it looks, but
/// downstream callers rely on it; see `DESIGN.md` before tightening.
#[derive(Debug, Clone, Default)]
pub enum Exclusion {
    /// No exclusion: every subdirectory is visited
    #[default]
    None,
    /// A single directory-name token
    Token(String),
    /// A set of directory-name tokens
    Tokens(Vec<String>),
}

impl Exclusion {
    /// Exclude directories whose path contains `token`
    ///
    /// An empty token means no exclusion.
    pub fn token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            Self::None
        } else {
            Self::Token(token)
        }
    }

    /// Exclude directories whose path contains any of `tokens`
    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    /// True when any token occurs as a substring of the directory path
    pub fn suppresses(&self, dir: &Path) -> bool {
        let dir = dir.to_string_lossy();
        match self {
            Self::None => false,
            Self::Token(token) => matches_substring(token, &dir),
            Self::Tokens(tokens) => tokens.iter().any(|token| matches_substring(token, &dir)),
        }
    }
}

/// Recursively collect files under `root` whose base name matches `pattern`
///
/// Traversal is synchronous and depth-first; each level holds one open
/// directory handle for the duration of its iteration. Results are full
/// paths in traversal order (filesystem-dependent, not sorted), fully
/// materialized before returning. An empty result is valid, not an error.
///
/// The exclusion check runs once per call against the *invoking* directory:
/// when the current path contains an excluded token, this level yields
/// nothing at all, matching files included. Recursive calls receive the same
/// exclusion, so a subtree is cut off at the first path that picks up an
/// excluded token.
pub fn find_files(
    root: &Path,
    pattern: &FilePattern,
    exclude: &Exclusion,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    // The handle is acquired before the exclusion short-circuit, so a
    // missing or unreadable root fails even when excluded.
    let entries = fs::read_dir(root).map_err(|source| DiscoveryError::Access {
        path: root.to_path_buf(),
        source,
    })?;

    if exclude.suppresses(root) {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Access {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        // is_dir follows symlinks, so a linked subtree is traversed like a
        // real one.
        if path.is_dir() {
            files.extend(find_files(&path, pattern, exclude)?);
        } else if pattern.matches(&entry.file_name().to_string_lossy()) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Convenience form of [`find_files`] taking the raw suffix-or-pattern string
///
/// With `pattern_is_regex` set, `suffix_or_pattern` is compiled as a regex
/// and tested against base names; otherwise it is matched as a literal
/// trailing substring.
pub fn find(
    root: &Path,
    suffix_or_pattern: &str,
    pattern_is_regex: bool,
    exclude: &Exclusion,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = if pattern_is_regex {
        FilePattern::regex(suffix_or_pattern)?
    } else {
        FilePattern::suffix(suffix_or_pattern)
    };
    find_files(root, &pattern, exclude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs::File;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    /// modules/
    ///   a.router.json
    ///   readme.md
    ///   users/
    ///     users.router.json
    ///     notes.txt
    ///     deep/
    ///       deep.router.json
    ///   drafts/
    ///     wip.router.json
    fn fixture_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.router.json"));
        touch(&root.join("readme.md"));
        fs::create_dir_all(root.join("users/deep")).unwrap();
        touch(&root.join("users/users.router.json"));
        touch(&root.join("users/notes.txt"));
        touch(&root.join("users/deep/deep.router.json"));
        fs::create_dir(root.join("drafts")).unwrap();
        touch(&root.join("drafts/wip.router.json"));
        dir
    }

    fn names(paths: &[PathBuf]) -> BTreeSet<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_suffix_search_recurses_and_skips_non_matches() {
        let dir = fixture_tree();
        let found = find(dir.path(), ".router.json", false, &Exclusion::None).unwrap();

        assert_eq!(
            names(&found),
            BTreeSet::from([
                "a.router.json".to_string(),
                "users.router.json".to_string(),
                "deep.router.json".to_string(),
                "wip.router.json".to_string(),
            ])
        );
        // Every returned path is a regular file, never a directory.
        assert!(found.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_directories_matching_the_suffix_are_not_results() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("odd.router.json")).unwrap();
        touch(&dir.path().join("odd.router.json/inner.router.json"));

        let found = find(dir.path(), ".router.json", false, &Exclusion::None).unwrap();
        assert_eq!(
            names(&found),
            BTreeSet::from(["inner.router.json".to_string()])
        );
    }

    #[test]
    fn test_regex_mode_matches_base_names() {
        let dir = fixture_tree();
        let found = find(dir.path(), r"^users\..*\.json$", true, &Exclusion::None).unwrap();
        assert_eq!(
            names(&found),
            BTreeSet::from(["users.router.json".to_string()])
        );
    }

    #[test]
    fn test_malformed_regex_is_a_pattern_error() {
        let dir = fixture_tree();
        let err = find(dir.path(), "(unclosed", true, &Exclusion::None).unwrap_err();
        assert!(matches!(err, DiscoveryError::Pattern(_)));
    }

    #[test]
    fn test_exclusion_token_cuts_off_the_subtree() {
        let dir = fixture_tree();
        let found = find(
            dir.path(),
            ".router.json",
            false,
            &Exclusion::token("drafts"),
        )
        .unwrap();

        assert_eq!(
            names(&found),
            BTreeSet::from([
                "a.router.json".to_string(),
                "users.router.json".to_string(),
                "deep.router.json".to_string(),
            ])
        );
    }

    #[test]
    fn test_exclusion_matching_the_root_yields_nothing() {
        let dir = fixture_tree();
        // The root path itself contains the token, so the whole call is
        // suppressed even though matching files exist.
        let root_token = dir.path().to_string_lossy().into_owned();
        let found = find(
            dir.path(),
            ".router.json",
            false,
            &Exclusion::token(root_token),
        )
        .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_exclusion_token_set() {
        let dir = fixture_tree();
        let found = find(
            dir.path(),
            ".router.json",
            false,
            &Exclusion::tokens(["drafts", "deep"]),
        )
        .unwrap();

        assert_eq!(
            names(&found),
            BTreeSet::from([
                "a.router.json".to_string(),
                "users.router.json".to_string(),
            ])
        );
    }

    #[test]
    fn test_empty_exclusion_token_means_no_exclusion() {
        assert!(matches!(Exclusion::token(""), Exclusion::None));
    }

    #[test]
    fn test_no_matches_is_empty_not_an_error() {
        let dir = fixture_tree();
        let found = find(dir.path(), ".toml", false, &Exclusion::None).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = find(&missing, ".router.json", false, &Exclusion::None).unwrap_err();
        match err {
            DiscoveryError::Access { path, .. } => assert_eq!(path, missing),
            other => panic!("expected access error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_root_fails_even_when_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let token = missing.to_string_lossy().into_owned();
        let err = find(&missing, ".router.json", false, &Exclusion::token(token)).unwrap_err();
        assert!(matches!(err, DiscoveryError::Access { .. }));
    }
}
