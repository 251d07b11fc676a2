//! Root-confined path handling.
//!
//! This module turns untrusted, user-supplied relative path strings into
//! absolute filesystem paths that are guaranteed to stay inside the configured
//! root directory.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is applied to the *configured* root only. It:
//! - Expands tilde (~) to the home directory
//! - Converts relative paths to absolute paths
//! - Resolves `.` and `..` components
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to get the "real" path on the filesystem.
//! Both the root and every requested path are canonicalized before they are
//! compared, so `..` segments and symlinks cannot smuggle a request out of the
//! root.
//!
//! ## Containment
//!
//! A resolved path is valid only when it *is* the root or the root is one of
//! its ancestors. The comparison is done component by component (see
//! [`PathRelationship`]), so a sibling such as `/data-evil` is never mistaken
//! for a child of `/data`.
//!
//! # Examples
//!
//! ```no_run
//! use fileweb::path::PathResolver;
//! use std::path::Path;
//!
//! let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
//!
//! let report = resolver.resolve("reports/2024.pdf").unwrap();
//! assert_eq!(report.relative(), "reports/2024.pdf");
//!
//! // Escapes are reported exactly like missing files.
//! assert!(resolver.resolve("../../etc/passwd").unwrap_err().is_not_found());
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use fileweb::path::PathRelationship;
//! use std::path::Path;
//!
//! let root = Path::new("/data");
//! assert!(PathRelationship::contains(root, Path::new("/data/imgs/a.png")));
//! assert!(!PathRelationship::contains(root, Path::new("/data-evil/a.png")));
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod relationship;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
pub use resolver::PathResolver;
pub use types::ResolvedPath;
