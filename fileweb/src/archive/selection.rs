//! Selection handling and archive member collection.

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::{PathResolver, ResolvedPath};

/// The ordered set of root-relative paths picked for a bulk download.
///
/// Exact duplicates are dropped on construction, keeping the first
/// occurrence. Nothing else is validated here; entries that do not resolve
/// are skipped later by [`collect_members`].
///
/// # Examples
///
/// ```
/// use fileweb::archive::Selection;
///
/// let selection = Selection::new(["imgs", "report.pdf", "imgs"]);
/// assert_eq!(selection.len(), 2);
/// assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["imgs", "report.pdf"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<String>,
}

impl Selection {
    /// Build a selection from the submitted paths, in submission order.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        items.into_iter().map(Into::into).collect()
    }

    /// Number of distinct submitted paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the submitted paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Selection {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut items: Vec<String> = Vec::new();
        for item in iter {
            if !items.contains(&item) {
                items.push(item);
            }
        }
        Self { items }
    }
}

/// A file to be written into an archive, and the name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    /// The resolved file on disk.
    pub source: ResolvedPath,
    /// Root-relative entry name with `/` separators.
    pub name: String,
}

/// Expand a selection into the list of files to archive.
///
/// Files contribute themselves; directories contribute every regular file
/// below them, walked in file-name order without following symlinked
/// directories. Every walked file is re-resolved, so symlinks leading out of
/// the root are dropped. Entries that do not resolve are skipped silently.
/// Overlapping selections yield repeated members.
///
/// # Errors
///
/// - [`Error::EmptySelection`] if `selection` is empty
/// - [`Error::NoValidSelection`] if no entry contributed a single file
///
/// # Examples
///
/// ```no_run
/// use fileweb::archive::{collect_members, Selection};
/// use fileweb::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
/// let members = collect_members(&resolver, &Selection::new(["imgs", "report.pdf"])).unwrap();
/// for member in &members {
///     println!("{}", member.name);
/// }
/// ```
pub fn collect_members(resolver: &PathResolver, selection: &Selection) -> Result<Vec<ArchiveMember>> {
    if selection.is_empty() {
        return Err(Error::EmptySelection);
    }

    let mut members = Vec::new();

    for item in selection.iter() {
        let resolved = match resolver.resolve(item) {
            Ok(resolved) => resolved,
            Err(e) => {
                log::debug!("skipping selection entry '{item}': {e}");
                continue;
            }
        };

        if resolved.is_file() {
            members.push(ArchiveMember {
                name: resolved.relative().to_string(),
                source: resolved,
            });
        } else if resolved.is_dir() {
            collect_directory(resolver, &resolved, &mut members);
        } else {
            log::debug!("skipping selection entry '{item}': not a file or directory");
        }
    }

    if members.is_empty() {
        return Err(Error::NoValidSelection);
    }

    log::debug!(
        "collected {} archive members from {} selected entries",
        members.len(),
        selection.len()
    );
    Ok(members)
}

fn collect_directory(resolver: &PathResolver, dir: &ResolvedPath, members: &mut Vec<ArchiveMember>) {
    let walker = WalkDir::new(dir.path())
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping entry below '{}': {e}", dir.relative());
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        match resolver.resolve_walked(entry.path()) {
            Ok(source) if source.is_file() => {
                members.push(ArchiveMember {
                    name: source.original().to_string(),
                    source,
                });
            }
            Ok(source) => {
                log::debug!("skipping '{}': not a regular file", source.original());
            }
            Err(e) => {
                log::debug!("skipping walked entry: {e}");
            }
        }
    }
}
