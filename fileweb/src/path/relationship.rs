//! Component-wise comparison of canonical paths.
//!
//! Confinement to the root is decided here. Paths are compared component by
//! component, so `/data` never contains `/data-evil`.

use std::path::{Component, Path};

/// How a candidate path sits relative to a base path.
///
/// # Examples
///
/// ```
/// use fileweb::path::PathRelationship;
/// use std::path::Path;
///
/// let root = Path::new("/srv/files");
/// let rel = PathRelationship::between(root, Path::new("/srv/files/imgs"));
/// assert_eq!(rel, PathRelationship::Ancestor);
/// assert!(rel.keeps_inside());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The base is a strict ancestor of the candidate.
    Ancestor,

    /// The candidate is a strict ancestor of the base.
    Descendant,

    /// Both name the same location.
    Same,

    /// The paths diverge at some component.
    Unrelated,
}

impl PathRelationship {
    /// Compare `base` with `candidate`.
    ///
    /// Both paths should be in the same form, usually canonical. `.` and
    /// trailing separators are ignored by [`Path::components`].
    ///
    /// ```
    /// use fileweb::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a/b"), Path::new("/a")),
    ///     PathRelationship::Descendant
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a/"), Path::new("/a")),
    ///     PathRelationship::Same
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a"), Path::new("/ab")),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between(base: &Path, candidate: &Path) -> Self {
        let mut base = base.components();
        let mut candidate = candidate.components();

        loop {
            match (base.next(), candidate.next()) {
                (None, None) => return Self::Same,
                (None, Some(_)) => return Self::Ancestor,
                (Some(_), None) => return Self::Descendant,
                (Some(a), Some(b)) if a == b => {}
                _ => return Self::Unrelated,
            }
        }
    }

    /// Whether `base` is `candidate` or one of its ancestors.
    ///
    /// Every resolved path must satisfy this against the root.
    ///
    /// ```
    /// use fileweb::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let root = Path::new("/data");
    /// assert!(PathRelationship::contains(root, Path::new("/data/report.pdf")));
    /// assert!(PathRelationship::contains(root, root));
    /// assert!(!PathRelationship::contains(root, Path::new("/data-evil")));
    /// ```
    #[must_use]
    pub fn contains(base: &Path, candidate: &Path) -> bool {
        Self::between(base, candidate).keeps_inside()
    }

    /// Number of normal components `candidate` has below `base`.
    ///
    /// Returns `None` when `candidate` is not contained in `base`; the base
    /// itself has depth zero.
    #[must_use]
    pub fn depth_below(base: &Path, candidate: &Path) -> Option<usize> {
        let rest = candidate.strip_prefix(base).ok()?;
        Some(
            rest.components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count(),
        )
    }

    /// True for [`Same`](Self::Same) and [`Ancestor`](Self::Ancestor).
    #[must_use]
    pub fn keeps_inside(self) -> bool {
        matches!(self, Self::Ancestor | Self::Same)
    }

    /// Short reason a candidate with this relationship to the root was
    /// refused. Only meant for debug logs.
    #[must_use]
    pub fn rejection_reason(self) -> &'static str {
        match self {
            Self::Ancestor | Self::Same => "inside the root",
            Self::Descendant => "resolves above the root",
            Self::Unrelated => "resolves outside the root",
        }
    }
}
