//! Property-based tests for path confinement.
//!
//! The relationship module carries light property tests of its own; this
//! suite hammers the resolver with generated path strings against a real
//! directory tree.

use super::relationship::PathRelationship;
use super::resolver::PathResolver;
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// A root with a nested tree, plus a sibling directory that shares the root's
// name as a prefix.
fn fixture() -> (TempDir, PathResolver) {
    let parent = tempfile::tempdir().unwrap();
    let root = parent.path().join("data");
    fs::create_dir_all(root.join("imgs").join("2024")).unwrap();
    fs::write(root.join("report.pdf"), b"PDF").unwrap();
    fs::write(root.join("imgs").join("a.png"), b"PNG").unwrap();
    fs::write(root.join("imgs").join("2024").join("b.png"), b"PNG").unwrap();

    let evil = parent.path().join("data-evil");
    fs::create_dir_all(&evil).unwrap();
    fs::write(evil.join("loot.txt"), b"loot").unwrap();

    let resolver = PathResolver::new(&root).unwrap();
    (parent, resolver)
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("..".to_string()),
        Just(".".to_string()),
        Just(String::new()),
        Just("imgs".to_string()),
        Just("2024".to_string()),
        Just("a.png".to_string()),
        Just("report.pdf".to_string()),
        Just("data".to_string()),
        Just("data-evil".to_string()),
        Just("loot.txt".to_string()),
        "[a-z0-9\\\\. -]{1,8}",
    ]
}

fn request_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 0..8),
    )
        .prop_map(|(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        })
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec("[a-z0-9_-]{1,20}", 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Whatever the request, a successful resolution stays inside the root
    #[test]
    fn resolved_paths_stay_in_root(request in request_strategy()) {
        let (_guard, resolver) = fixture();

        match resolver.resolve(&request) {
            Ok(resolved) => {
                prop_assert!(PathRelationship::contains(resolver.root(), resolved.path()));
                prop_assert!(resolved.path().exists());
                prop_assert_eq!(resolved.original(), request.as_str());
            }
            Err(e) => {
                prop_assert!(e.is_not_found(), "unexpected error kind: {:?}", e);
                prop_assert_eq!(e.to_string(), format!("not found: {request}"));
            }
        }
    }

    // The relative name of a resolved path resolves back to the same place
    #[test]
    fn relative_name_round_trips(request in request_strategy()) {
        let (_guard, resolver) = fixture();

        if let Ok(resolved) = resolver.resolve(&request) {
            let again = resolver.resolve(resolved.relative()).unwrap();
            prop_assert_eq!(again.path(), resolved.path());
            prop_assert_eq!(again.relative(), resolved.relative());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Containment is transitive (if A contains B and B contains C, then A contains C)
    #[test]
    fn path_containment_transitive(base in absolute_path_strategy(), parts1 in 1..5usize, parts2 in 1..5usize) {
        let mut path_b = base.clone();
        for i in 0..parts1 {
            path_b.push(format!("sub{i}"));
        }

        let mut path_c = path_b.clone();
        for i in 0..parts2 {
            path_c.push(format!("deep{i}"));
        }

        prop_assert!(PathRelationship::contains(&base, &path_b));
        prop_assert!(PathRelationship::contains(&path_b, &path_c));
        prop_assert!(PathRelationship::contains(&base, &path_c));
    }

    // Relationship types are mutually exclusive
    #[test]
    fn path_relationship_mutually_exclusive(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel = PathRelationship::between(&path1, &path2);

        let count = [
            matches!(rel, PathRelationship::Same),
            matches!(rel, PathRelationship::Ancestor),
            matches!(rel, PathRelationship::Descendant),
            matches!(rel, PathRelationship::Unrelated),
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        prop_assert_eq!(count, 1);
        prop_assert_eq!(rel.keeps_inside(), PathRelationship::contains(&path1, &path2));
    }

    // A string-prefix sibling is never contained
    #[test]
    fn prefix_sibling_never_contained(base in absolute_path_strategy(), suffix in "[a-z0-9_-]{1,8}") {
        let sibling = PathBuf::from(format!("{}{suffix}", base.display()));
        prop_assert!(!PathRelationship::contains(&base, &sibling));
        prop_assert!(!PathRelationship::contains(&base, &sibling.join("child")));
    }
}
