//! Token source loading errors.

use std::path::PathBuf;

/// Error returned when a token source cannot be turned into a registry.
///
/// Only structural problems with the document itself surface here. Optional
/// sections (`breakpoints`, `nav`) never fail; they fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum TokenSourceError {
    /// The document is not valid YAML/JSON, or is not a mapping.
    #[error("token source is not a valid document: {message}")]
    Parse { message: String },

    /// A core section is present but has the wrong shape.
    #[error("token section '{section}' is malformed: {message}")]
    Section { section: String, message: String },

    /// Reading the token source from disk failed.
    #[error("failed to read token source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
