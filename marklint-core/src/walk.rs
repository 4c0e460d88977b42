//! Flattening traversal: every bookmark paired with its folder path.

use crate::model::{Mark, Place};

/// Walk a tree depth-first in document order, yielding one
/// `(folder path, place)` pair per bookmark.
///
/// Paths are built by joining ancestor container titles with `/`.
/// Containers titled `"/"` (the normalized root) are transparent: they
/// extend the path with nothing. Separators contribute nothing and have
/// nothing to recurse into.
///
/// The walk is lazy and side-effect free; re-running it from the same root
/// yields the same sequence.
pub fn walk_tree<'a>(root: &'a Mark, start_path: &str) -> TreeWalk<'a> {
    TreeWalk {
        stack: vec![(start_path.to_string(), root)],
    }
}

/// Iterator state for [`walk_tree`]. Pending `(path, node)` frames live on
/// an explicit stack, so deeply nested backups cannot exhaust the call
/// stack; children are pushed in reverse to come back out in document
/// order.
pub struct TreeWalk<'a> {
    stack: Vec<(String, &'a Mark)>,
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = (String, &'a Place);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                Mark::Separator(_) => {}
                Mark::Place(place) => return Some((path, place)),
                Mark::Container(container) => {
                    let child_path = if container.title.is_empty() || container.title == "/" {
                        path
                    } else {
                        format!("{}/{}", path, container.title)
                    };

                    for child in container.children.iter().rev() {
                        self.stack.push((child_path.clone(), child));
                    }
                }
            }
        }

        None
    }
}
