//! Typed blueprint nodes.
//!
//! Each node kind carries only the fields valid for it. In serialized form
//! the kind is the `type` field:
//!
//! ```json
//! { "type": "image", "id": "hero-img", "src": "/hero.png", "styles": { "rounded": "lg" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::style::Styles;

/// The kind of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Page,
    Header,
    Section,
    Container,
    Component,
    Text,
    Image,
    Footer,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Page => "page",
            NodeKind::Header => "header",
            NodeKind::Section => "section",
            NodeKind::Container => "container",
            NodeKind::Component => "component",
            NodeKind::Text => "text",
            NodeKind::Image => "image",
            NodeKind::Footer => "footer",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigation or footer link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub nav: Vec<Link>,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Layout node shared by `section` and `container`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub styles: Styles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default)]
    pub styles: Styles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub id: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default)]
    pub styles: Styles,
}

/// A blueprint node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Page(Page),
    Header(Header),
    Section(Block),
    Container(Block),
    Component(Component),
    Text(Text),
    Image(Image),
    Footer(Footer),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Page(_) => NodeKind::Page,
            Node::Header(_) => NodeKind::Header,
            Node::Section(_) => NodeKind::Section,
            Node::Container(_) => NodeKind::Container,
            Node::Component(_) => NodeKind::Component,
            Node::Text(_) => NodeKind::Text,
            Node::Image(_) => NodeKind::Image,
            Node::Footer(_) => NodeKind::Footer,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Node::Page(n) => &n.id,
            Node::Header(n) => &n.id,
            Node::Section(n) | Node::Container(n) => &n.id,
            Node::Component(n) => &n.id,
            Node::Text(n) => &n.id,
            Node::Image(n) => &n.id,
            Node::Footer(n) => &n.id,
        }
    }

    pub fn styles(&self) -> &Styles {
        match self {
            Node::Page(n) => &n.styles,
            Node::Header(n) => &n.styles,
            Node::Section(n) | Node::Container(n) => &n.styles,
            Node::Component(n) => &n.styles,
            Node::Text(n) => &n.styles,
            Node::Image(n) => &n.styles,
            Node::Footer(n) => &n.styles,
        }
    }

    pub(crate) fn styles_mut(&mut self) -> &mut Styles {
        match self {
            Node::Page(n) => &mut n.styles,
            Node::Header(n) => &mut n.styles,
            Node::Section(n) | Node::Container(n) => &mut n.styles,
            Node::Component(n) => &mut n.styles,
            Node::Text(n) => &mut n.styles,
            Node::Image(n) => &mut n.styles,
            Node::Footer(n) => &mut n.styles,
        }
    }

    /// Child nodes. Leaf kinds (text, image, footer) have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Page(n) => &n.children,
            Node::Header(n) => &n.children,
            Node::Section(n) | Node::Container(n) => &n.children,
            Node::Component(n) => &n.children,
            Node::Text(_) | Node::Image(_) | Node::Footer(_) => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Page(n) => &mut n.children,
            Node::Header(n) => &mut n.children,
            Node::Section(n) | Node::Container(n) => &mut n.children,
            Node::Component(n) => &mut n.children,
            Node::Text(_) | Node::Image(_) | Node::Footer(_) => &mut [],
        }
    }

    /// Links carried by headers (nav) and footers.
    pub fn links(&self) -> &[Link] {
        match self {
            Node::Header(n) => &n.nav,
            Node::Footer(n) => &n.links,
            _ => &[],
        }
    }

    /// Finds a node by id in this subtree, depth-first.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id() == id {
            return Some(self);
        }
        self.children_mut()
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_tagged_kinds() {
        let node: Node = serde_json::from_value(json!({
            "type": "section",
            "id": "hero",
            "styles": {"p": 4},
            "children": [
                {"type": "image", "id": "hero-img", "src": "/hero.png"},
                {"type": "text", "id": "tagline", "content": "Build pages"}
            ]
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::Section);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].kind(), NodeKind::Image);
        assert_eq!(node.styles().get("p"), Some(&json!(4)));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = serde_json::from_value::<Node>(json!({"type": "carousel", "id": "c"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_image_requires_src_field() {
        let result = serde_json::from_value::<Node>(json!({"type": "image", "id": "i"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_leaf_kinds_have_no_children() {
        let node: Node = serde_json::from_value(json!({
            "type": "footer",
            "id": "foot",
            "links": [{"label": "About", "href": "/about"}]
        }))
        .unwrap();
        assert!(node.children().is_empty());
        assert_eq!(node.links(), &[Link::new("About", "/about")]);
    }

    #[test]
    fn test_find_descends() {
        let node: Node = serde_json::from_value(json!({
            "type": "container",
            "id": "outer",
            "children": [{"type": "container", "id": "inner", "children": [
                {"type": "component", "id": "cta", "name": "Button"}
            ]}]
        }))
        .unwrap();
        assert_eq!(node.find("cta").map(Node::kind), Some(NodeKind::Component));
        assert!(node.find("missing").is_none());
    }

    #[test]
    fn test_serialize_keeps_type_tag() {
        let node = Node::Text(Text {
            id: "t".into(),
            content: "Hi".into(),
            styles: Styles::new(),
        });
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], json!("text"));
        assert_eq!(value["content"], json!("Hi"));
    }
}
