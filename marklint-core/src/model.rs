use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// MIME discriminant carried by folder nodes in a Firefox backup.
pub const CONTAINER_TYPE: &str = "text/x-moz-place-container";
/// MIME discriminant carried by separator nodes.
pub const SEPARATOR_TYPE: &str = "text/x-moz-place-separator";
/// MIME discriminant carried by bookmark (link) nodes.
pub const PLACE_TYPE: &str = "text/x-moz-place";

/// One node of a parsed bookmark backup.
///
/// The root of a backup is always a `Container`; everything below it is a
/// mix of the three variants in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Mark {
    Container(Container),
    Separator(Separator),
    Place(Place),
}

/// A bookmark folder.
///
/// Metadata fields beyond `title` and `children` are carried through from
/// the backup but never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub guid: String,
    pub id: i64,
    pub index: i64,
    pub date_added: i64,
    pub last_modified: i64,
    /// Never empty: an unnamed container is stored as `"/"`.
    pub title: String,
    pub type_code: i64,
    pub root: String,
    pub annos: Value,
    pub children: Vec<Mark>,
}

/// A visual divider between bookmarks. Has no URL and no children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Separator {
    pub guid: String,
    pub id: i64,
    pub index: i64,
    pub date_added: i64,
    pub last_modified: i64,
    pub title: String,
    pub type_code: i64,
}

/// A bookmark proper: a leaf with a target URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub guid: String,
    pub id: i64,
    pub index: i64,
    pub date_added: i64,
    pub last_modified: i64,
    /// Kept verbatim, empty titles included.
    pub title: String,
    pub type_code: i64,
    /// May be empty, and may use a non-http scheme such as `javascript:`.
    pub uri: String,
    pub charset: String,
    pub icon_uri: String,
    pub keyword: String,
    pub post_data: String,
    pub tags: String,
    pub annos: Value,
}

impl Mark {
    /// Collect the URIs of this node's subtree, in document order.
    ///
    /// Places yield their own URI, separators yield nothing, containers
    /// concatenate their children's results. Runs over an explicit stack,
    /// so nesting depth is bounded by input size rather than the call
    /// stack.
    pub fn collect_urls(&self) -> Vec<&str> {
        let mut urls = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Mark::Place(place) => urls.push(place.uri.as_str()),
                Mark::Separator(_) => {}
                Mark::Container(container) => {
                    // Reversed push keeps document order on pop.
                    stack.extend(container.children.iter().rev());
                }
            }
        }

        urls
    }

    /// The node's title, whatever the variant.
    pub fn title(&self) -> &str {
        match self {
            Mark::Container(container) => &container.title,
            Mark::Separator(separator) => &separator.title,
            Mark::Place(place) => &place.title,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.index)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.uri)
    }
}
