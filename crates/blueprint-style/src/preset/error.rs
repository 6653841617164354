//! Preset catalog errors.

use std::path::PathBuf;

/// Error returned when a preset catalog cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// The catalog document is not a list of `{ name, styles }` entries.
    #[error("preset catalog is not valid: {message}")]
    Parse { message: String },

    /// Two presets share a name.
    #[error("preset '{name}' is defined more than once")]
    DuplicateName { name: String },

    /// Reading the catalog from disk failed.
    #[error("failed to read preset catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = PresetError::DuplicateName {
            name: "Soft".to_string(),
        };
        assert_eq!(err.to_string(), "preset 'Soft' is defined more than once");
    }
}
