//! Structural validation of a node tree.

use std::collections::HashSet;

use super::error::BlueprintError;
use super::node::{Node, NodeKind};

/// Checks the structural rules of a blueprint tree.
///
/// Rules, checked depth-first and reported on the first violation:
///
/// 1. The root is a page, and no other page appears in the tree
/// 2. Every id is non-empty and unique
/// 3. Headers and footers sit directly under the page
/// 4. Images have a `src`, components a `name`, links an `href`
pub fn validate(root: &Node) -> Result<(), BlueprintError> {
    if root.kind() != NodeKind::Page {
        return Err(BlueprintError::RootNotPage { kind: root.kind() });
    }

    let mut seen = HashSet::new();
    check_node(root, None, &mut seen)
}

fn check_node<'a>(
    node: &'a Node,
    parent: Option<NodeKind>,
    seen: &mut HashSet<&'a str>,
) -> Result<(), BlueprintError> {
    let id = node.id();
    let kind = node.kind();

    if id.trim().is_empty() {
        return Err(BlueprintError::EmptyId { kind });
    }
    if !seen.insert(id) {
        return Err(BlueprintError::DuplicateId { id: id.to_string() });
    }

    match node {
        Node::Page(_) if parent.is_some() => {
            return Err(BlueprintError::NestedPage { id: id.to_string() });
        }
        Node::Header(_) | Node::Footer(_) if parent != Some(NodeKind::Page) => {
            return Err(BlueprintError::MisplacedChrome {
                id: id.to_string(),
                kind,
            });
        }
        Node::Image(image) if image.src.trim().is_empty() => {
            return Err(BlueprintError::MissingImageSource { id: id.to_string() });
        }
        Node::Component(component) if component.name.trim().is_empty() => {
            return Err(BlueprintError::EmptyComponentName { id: id.to_string() });
        }
        _ => {}
    }

    if let Some(link) = node.links().iter().find(|link| link.href.trim().is_empty()) {
        return Err(BlueprintError::EmptyLinkTarget {
            id: id.to_string(),
            label: link.label.clone(),
        });
    }

    for child in node.children() {
        check_node(child, Some(kind), seen)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_tree() {
        let root = node(json!({
            "type": "page",
            "id": "home",
            "children": [
                {"type": "header", "id": "top", "nav": [{"label": "Home", "href": "/"}]},
                {"type": "section", "id": "hero", "children": [
                    {"type": "image", "id": "hero-img", "src": "/hero.png"}
                ]},
                {"type": "footer", "id": "bottom"}
            ]
        }));
        assert_eq!(validate(&root), Ok(()));
    }

    #[test]
    fn test_root_must_be_page() {
        let root = node(json!({"type": "section", "id": "s"}));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::RootNotPage {
                kind: NodeKind::Section
            })
        );
    }

    #[test]
    fn test_nested_page() {
        let root = node(json!({
            "type": "page", "id": "a",
            "children": [{"type": "page", "id": "b"}]
        }));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::NestedPage { id: "b".into() })
        );
    }

    #[test]
    fn test_duplicate_id() {
        let root = node(json!({
            "type": "page", "id": "home",
            "children": [
                {"type": "section", "id": "x"},
                {"type": "container", "id": "x"}
            ]
        }));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::DuplicateId { id: "x".into() })
        );
    }

    #[test]
    fn test_empty_id() {
        let root = node(json!({
            "type": "page", "id": "home",
            "children": [{"type": "text", "id": "  ", "content": "hi"}]
        }));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::EmptyId {
                kind: NodeKind::Text
            })
        );
    }

    #[test]
    fn test_header_inside_section() {
        let root = node(json!({
            "type": "page", "id": "home",
            "children": [{"type": "section", "id": "s", "children": [
                {"type": "header", "id": "h"}
            ]}]
        }));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::MisplacedChrome {
                id: "h".into(),
                kind: NodeKind::Header
            })
        );
    }

    #[test]
    fn test_image_without_src() {
        let root = node(json!({
            "type": "page", "id": "home",
            "children": [{"type": "image", "id": "img", "src": ""}]
        }));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::MissingImageSource { id: "img".into() })
        );
    }

    #[test]
    fn test_component_without_name() {
        let root = node(json!({
            "type": "page", "id": "home",
            "children": [{"type": "component", "id": "c", "name": ""}]
        }));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::EmptyComponentName { id: "c".into() })
        );
    }

    #[test]
    fn test_link_without_href() {
        let root = node(json!({
            "type": "page", "id": "home",
            "children": [{"type": "footer", "id": "f", "links": [
                {"label": "Docs", "href": "/docs"},
                {"label": "Blog", "href": ""}
            ]}]
        }));
        assert_eq!(
            validate(&root),
            Err(BlueprintError::EmptyLinkTarget {
                id: "f".into(),
                label: "Blog".into()
            })
        );
    }
}
