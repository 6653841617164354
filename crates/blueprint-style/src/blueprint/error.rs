//! Blueprint tree errors.

use super::node::NodeKind;

/// Error returned when a blueprint tree cannot be loaded or edited.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlueprintError {
    /// The document could not be deserialized into a node tree.
    #[error("failed to parse {format} blueprint: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// The root node is not a page.
    #[error("blueprint root must be a page, found {kind}")]
    RootNotPage { kind: NodeKind },

    /// A page appears below the root.
    #[error("page '{id}' is nested inside another node")]
    NestedPage { id: String },

    /// A node has an empty id.
    #[error("{kind} node has an empty id")]
    EmptyId { kind: NodeKind },

    /// Two nodes share an id.
    #[error("node id '{id}' is used more than once")]
    DuplicateId { id: String },

    /// A header or footer is not a direct child of the page.
    #[error("{kind} '{id}' must be a direct child of the page")]
    MisplacedChrome { id: String, kind: NodeKind },

    /// An image has no source.
    #[error("image '{id}' has no src")]
    MissingImageSource { id: String },

    /// A component has no name.
    #[error("component '{id}' has no name")]
    EmptyComponentName { id: String },

    /// A nav or footer link has no target.
    #[error("link '{label}' in '{id}' has no href")]
    EmptyLinkTarget { id: String, label: String },

    /// No node with this id exists.
    #[error("no node with id '{id}'")]
    NodeNotFound { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misplaced_chrome_display() {
        let err = BlueprintError::MisplacedChrome {
            id: "top".to_string(),
            kind: NodeKind::Header,
        };
        assert_eq!(err.to_string(), "header 'top' must be a direct child of the page");
    }

    #[test]
    fn test_parse_error_display() {
        let err = BlueprintError::Parse {
            format: "JSON",
            message: "expected value".to_string(),
        };
        assert!(err.to_string().starts_with("failed to parse JSON blueprint"));
    }
}
