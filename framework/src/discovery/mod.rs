//! Filesystem discovery for auto-registered framework pieces
//!
//! At startup the application points the finder at its modules directory to
//! collect router manifests by file name suffix. The traversal is read-only
//! and runs to completion or fails outright; there is no retry and no
//! partial result.

mod finder;
mod matchers;

pub use finder::{find, find_files, DiscoveryError, Exclusion, FilePattern};
pub use matchers::{matches_prefix, matches_substring, matches_suffix};
