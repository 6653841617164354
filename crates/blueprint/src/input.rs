//! Reading documents from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use blueprint_style::Styles;
use serde_json::Value;

/// Document syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.json` files are JSON; everything else, stdin included, is YAML.
    ///
    /// YAML is a superset of JSON, so a JSON document on stdin still parses.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads a whole file, or stdin for `-`.
pub fn read_text(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parses a document into a generic value.
pub fn parse_value(text: &str, format: Format, origin: &Path) -> Result<Value> {
    let value = match format {
        Format::Json => serde_json::from_str(text)
            .with_context(|| format!("{} is not valid JSON", origin.display()))?,
        Format::Yaml => serde_yaml::from_str(text)
            .with_context(|| format!("{} is not valid YAML", origin.display()))?,
    };
    Ok(value)
}

/// Loads a style record. An empty document is an empty record.
pub fn read_styles(path: &Path) -> Result<Styles> {
    let text = read_text(path)?;
    if text.trim().is_empty() {
        return Ok(Styles::new());
    }

    let value = parse_value(&text, Format::of(path), path)?;
    match value {
        Value::Null => Ok(Styles::new()),
        value => Styles::from_value(value)
            .with_context(|| format!("{} must contain a mapping of style properties", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::of(Path::new("page.json")), Format::Json);
        assert_eq!(Format::of(Path::new("page.JSON")), Format::Json);
        assert_eq!(Format::of(Path::new("page.yaml")), Format::Yaml);
        assert_eq!(Format::of(Path::new("page")), Format::Yaml);
        assert_eq!(Format::of(Path::new("-")), Format::Yaml);
    }

    #[test]
    fn test_read_styles_yaml() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "p: 2\nsm:\n  p: 3").unwrap();

        let styles = read_styles(file.path()).unwrap();
        assert_eq!(styles.get("p"), Some(&serde_json::json!(2)));
        assert!(styles.get("sm").is_some());
    }

    #[test]
    fn test_read_styles_empty_file() {
        let file = NamedTempFile::with_suffix(".json").unwrap();
        assert!(read_styles(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_styles_rejects_list() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "[1, 2]").unwrap();

        let err = read_styles(file.path()).unwrap_err();
        assert!(err.to_string().contains("mapping"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_text(Path::new("/no/such/styles.yaml")).unwrap_err();
        assert!(err.to_string().contains("/no/such/styles.yaml"));
    }
}
