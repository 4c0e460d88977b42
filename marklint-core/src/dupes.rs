//! The two redundancy detectors: repeated URLs, and folders whose link
//! sets mirror another folder's.

use crate::model::Mark;
use crate::walk::walk_tree;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Group bookmark URIs that occur under more than one folder path.
///
/// Keys are exact URI strings; values are every folder path the URI was
/// seen under, repeats included. Both key order and path order follow
/// first appearance in the document, so the same tree always produces the
/// same report.
pub fn find_duplicate_urls(root: &Mark) -> IndexMap<String, Vec<String>> {
    let mut dupes: IndexMap<String, Vec<String>> = IndexMap::new();

    for (path, place) in walk_tree(root, "") {
        dupes.entry(place.uri.clone()).or_default().push(path);
    }

    dupes.retain(|_, paths| paths.len() > 1);
    dupes
}

/// Find pairs of folder paths whose descendant URI sets are identical.
///
/// URIs are compared with set semantics per path (repeats within one
/// folder collapse). Every unordered pair appears exactly once and a path
/// is never paired with itself. Pairwise comparison is quadratic in the
/// number of distinct paths, which is fine at personal-export scale.
///
/// Only paths with at least one bookmark under them take part: a folder
/// holding nothing (or only separators) never reaches the walker's output
/// and so never appears in a pair. Two folders whose only bookmarks have
/// empty URIs do compare equal, though.
pub fn find_duplicate_folders(root: &Mark) -> Vec<(String, String)> {
    let mut paths: IndexMap<String, HashSet<&str>> = IndexMap::new();

    for (path, place) in walk_tree(root, "") {
        paths.entry(path).or_default().insert(place.uri.as_str());
    }

    let mut dupe_paths = Vec::new();
    for (i, (path, urls)) in paths.iter().enumerate() {
        for (other, other_urls) in paths.iter().skip(i + 1) {
            if urls == other_urls {
                dupe_paths.push((path.clone(), other.clone()));
            }
        }
    }

    dupe_paths
}
