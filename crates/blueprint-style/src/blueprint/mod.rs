//! Blueprint page trees.
//!
//! A [`Blueprint`] is a validated tree of typed [`Node`]s rooted at a page.
//! Styles on each node are plain [`Styles`] records; [`Blueprint::resolve`]
//! turns the whole tree into a [`ResolvedNode`] tree carrying class strings,
//! which is what a rendering layer consumes.
//!
//! Loading always validates, so a `Blueprint` value is structurally sound.
//! Edits such as [`Blueprint::with_preset`] return a new tree.

mod error;
mod node;
mod validate;

use serde::Serialize;

pub use error::BlueprintError;
pub use node::{Block, Component, Footer, Header, Image, Link, Node, NodeKind, Page, Text};
pub use validate::validate;

use crate::style::Styles;
use crate::tokens::{NavState, TokenRegistry};

/// A validated page tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Blueprint {
    root: Node,
}

impl Blueprint {
    /// Validates a node tree.
    pub fn new(root: Node) -> Result<Self, BlueprintError> {
        validate(&root)?;
        Ok(Self { root })
    }

    /// Parses and validates a JSON document.
    pub fn from_json(input: &str) -> Result<Self, BlueprintError> {
        let root = serde_json::from_str(input).map_err(|e| BlueprintError::Parse {
            format: "JSON",
            message: e.to_string(),
        })?;
        Self::new(root)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(input: &str) -> Result<Self, BlueprintError> {
        let root = serde_yaml::from_str(input).map_err(|e| BlueprintError::Parse {
            format: "YAML",
            message: e.to_string(),
        })?;
        Self::new(root)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root.find(id)
    }

    /// All nodes in depth-first pre-order.
    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// Returns a copy of this tree with `preset` merged into one node's
    /// styles. Values the node already sets are kept.
    pub fn with_preset(&self, id: &str, preset: &Styles) -> Result<Self, BlueprintError> {
        let mut root = self.root.clone();
        let node = root
            .find_mut(id)
            .ok_or_else(|| BlueprintError::NodeNotFound { id: id.to_string() })?;

        let merged = node.styles().merge_missing(preset);
        *node.styles_mut() = merged;

        tracing::debug!(node = id, "preset applied");
        Ok(Self { root })
    }

    /// Maps every node's styles to classes.
    pub fn resolve(&self, tokens: &TokenRegistry) -> ResolvedNode {
        resolve_node(&self.root, tokens)
    }
}

/// A node with its styles mapped to classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNode {
    pub id: String,
    pub kind: NodeKind,
    pub classes: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ResolvedLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// `(id, classes)` pairs in depth-first pre-order.
    pub fn class_map(&self) -> Vec<(&str, &str)> {
        let mut out = vec![(self.id.as_str(), self.classes.as_str())];
        for child in &self.children {
            out.extend(child.class_map());
        }
        out
    }
}

/// A link with its nav-state classes.
///
/// `classes` holds the default (or active) bundle followed by the hover
/// bundle scoped with `hover:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub label: String,
    pub href: String,
    pub active: bool,
    pub classes: String,
}

fn resolve_node(node: &Node, tokens: &TokenRegistry) -> ResolvedNode {
    ResolvedNode {
        id: node.id().to_string(),
        kind: node.kind(),
        classes: node.styles().to_classes(tokens),
        links: node
            .links()
            .iter()
            .map(|link| resolve_link(link, tokens))
            .collect(),
        children: node
            .children()
            .iter()
            .map(|child| resolve_node(child, tokens))
            .collect(),
    }
}

fn resolve_link(link: &Link, tokens: &TokenRegistry) -> ResolvedLink {
    let state = if link.active {
        NavState::Active
    } else {
        NavState::Default
    };

    let mut classes = tokens.nav(state).classes();
    classes.extend(
        tokens
            .nav(NavState::Hover)
            .classes()
            .into_iter()
            .map(|class| format!("hover:{}", class)),
    );

    ResolvedLink {
        label: link.label.clone(),
        href: link.href.clone(),
        active: link.active,
        classes: classes.join(" "),
    }
}
