//! Builds the typed bookmark tree from a deserialized backup.
//!
//! The input is the `serde_json::Value` of a Firefox bookmarks backup
//! (backup, not HTML export). Construction is pure: no I/O, no globals.
//! Building recurses once per nesting level; serde_json's own recursion
//! limit caps document depth well below anything the call stack minds.

use crate::error::{ParseError, Result};
use crate::model::{CONTAINER_TYPE, Container, Mark, PLACE_TYPE, Place, SEPARATOR_TYPE, Separator};
use serde_json::Value;

/// Parse one backup node, recursively parsing container children.
///
/// The node's `type` field must be one of the three recognized MIME
/// discriminants; anything else fails the whole parse. Children attach only
/// to containers, in input order, and every child must itself be a JSON
/// object.
pub fn parse_mark(node: &Value) -> Result<Mark> {
    let kind = require_str(node, "type")?;

    let mut mark = match kind {
        CONTAINER_TYPE => Mark::Container(container_from_json(node)?),
        SEPARATOR_TYPE => Mark::Separator(separator_from_json(node)?),
        PLACE_TYPE => Mark::Place(place_from_json(node)?),
        other => return Err(ParseError::UnrecognizedNodeType(other.to_string())),
    };

    if let Mark::Container(ref mut container) = mark {
        if let Some(children) = node.get("children") {
            let children = children
                .as_array()
                .ok_or_else(|| ParseError::MalformedChild(container.title.clone()))?;

            for child in children {
                if !child.is_object() {
                    return Err(ParseError::MalformedChild(container.title.clone()));
                }
                container.children.push(parse_mark(child)?);
            }
        }
    }

    Ok(mark)
}

fn container_from_json(node: &Value) -> Result<Container> {
    let title = require_str(node, "title")?;

    Ok(Container {
        guid: require_str(node, "guid")?.to_string(),
        id: require_i64(node, "id")?,
        index: require_i64(node, "index")?,
        date_added: require_i64(node, "dateAdded")?,
        last_modified: require_i64(node, "lastModified")?,
        // An unnamed container is root-like; "/" keeps it out of paths.
        title: if title.is_empty() {
            "/".to_string()
        } else {
            title.to_string()
        },
        type_code: require_i64(node, "typeCode")?,
        root: optional_str(node, "root"),
        annos: optional_annos(node),
        children: Vec::new(),
    })
}

fn separator_from_json(node: &Value) -> Result<Separator> {
    Ok(Separator {
        guid: require_str(node, "guid")?.to_string(),
        id: require_i64(node, "id")?,
        index: require_i64(node, "index")?,
        date_added: require_i64(node, "dateAdded")?,
        last_modified: require_i64(node, "lastModified")?,
        title: require_str(node, "title")?.to_string(),
        type_code: require_i64(node, "typeCode")?,
    })
}

fn place_from_json(node: &Value) -> Result<Place> {
    Ok(Place {
        guid: require_str(node, "guid")?.to_string(),
        id: require_i64(node, "id")?,
        index: require_i64(node, "index")?,
        date_added: require_i64(node, "dateAdded")?,
        last_modified: require_i64(node, "lastModified")?,
        title: require_str(node, "title")?.to_string(),
        type_code: require_i64(node, "typeCode")?,
        uri: optional_str(node, "uri"),
        charset: optional_str(node, "charset"),
        icon_uri: optional_str(node, "iconuri"),
        keyword: optional_str(node, "keyword"),
        post_data: optional_str(node, "postData"),
        tags: optional_str(node, "tags"),
        annos: optional_annos(node),
    })
}

fn require_str<'a>(node: &'a Value, field: &str) -> Result<&'a str> {
    node.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::MissingRequiredField(field.to_string()))
}

fn require_i64(node: &Value, field: &str) -> Result<i64> {
    node.get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| ParseError::MissingRequiredField(field.to_string()))
}

fn optional_str(node: &Value, field: &str) -> String {
    node.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// Annotations are passed through uninterpreted; missing ones collapse to
// the same empty-string default the other optional fields use.
fn optional_annos(node: &Value) -> Value {
    node.get("annos")
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}
