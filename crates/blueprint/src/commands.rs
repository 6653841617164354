//! Subcommand handlers.
//!
//! Each handler returns the text to print on stdout. Diagnostics go through
//! `tracing` on stderr.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use blueprint_style::{Blueprint, NavState, PresetCatalog, TokenCategory, TokenRegistry};

use crate::cli::{Cli, Command, TreeFormat};
use crate::input::{self, Format};

pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Classes { input, preset } => {
            let tokens = load_tokens(cli.tokens.as_deref())?;
            let presets = load_presets(cli.presets.as_deref())?;
            classes(input, preset.as_deref(), &tokens, &presets)
        }
        Command::Merge { existing, incoming } => merge(existing, incoming),
        Command::Tokens { category } => {
            let tokens = load_tokens(cli.tokens.as_deref())?;
            list_tokens(&tokens, category.as_deref())
        }
        Command::Presets { check } => {
            let tokens = load_tokens(cli.tokens.as_deref())?;
            let presets = load_presets(cli.presets.as_deref())?;
            list_presets(&presets, &tokens, *check)
        }
        Command::Tree {
            input,
            preset,
            node,
            format,
        } => {
            let tokens = load_tokens(cli.tokens.as_deref())?;
            let presets = load_presets(cli.presets.as_deref())?;
            let target = match (preset.as_deref(), node.as_deref()) {
                (Some(preset), Some(node)) => Some((preset, node)),
                _ => None,
            };
            tree(input, target, *format, &tokens, &presets)
        }
    }
}

fn load_tokens(path: Option<&Path>) -> Result<Cow<'static, TokenRegistry>> {
    match path {
        Some(path) => {
            let registry = TokenRegistry::from_path(path)
                .with_context(|| format!("failed to load tokens from {}", path.display()))?;
            Ok(Cow::Owned(registry))
        }
        None => Ok(Cow::Borrowed(TokenRegistry::builtin())),
    }
}

fn load_presets(path: Option<&Path>) -> Result<Cow<'static, PresetCatalog>> {
    match path {
        Some(path) => {
            let catalog = PresetCatalog::from_path(path)
                .with_context(|| format!("failed to load presets from {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(PresetCatalog::builtin())),
    }
}

fn classes(
    input: &Path,
    preset: Option<&str>,
    tokens: &TokenRegistry,
    presets: &PresetCatalog,
) -> Result<String> {
    let mut styles = input::read_styles(input)?;

    for key in styles.unknown_keys() {
        tracing::warn!(key, "unknown style property ignored");
    }

    if let Some(name) = preset {
        styles = presets
            .apply(name, &styles)
            .ok_or_else(|| unknown_preset(name, presets))?;
    }

    Ok(styles.to_classes(tokens))
}

fn merge(existing: &Path, incoming: &Path) -> Result<String> {
    let existing = input::read_styles(existing)?;
    let incoming = input::read_styles(incoming)?;
    let merged = existing.merge_missing(&incoming);

    serde_json::to_string_pretty(&merged).context("failed to serialize merged record")
}

fn list_tokens(tokens: &TokenRegistry, category: Option<&str>) -> Result<String> {
    let mut lines = Vec::new();

    match category {
        Some(category) => {
            let category: TokenCategory = category.parse().map_err(|e: String| anyhow!(e))?;
            for (name, value) in tokens.entries(category) {
                lines.push(format!("{}\t{}", name, value));
            }
        }
        None => {
            for category in TokenCategory::ALL {
                for (name, value) in tokens.entries(category) {
                    lines.push(format!("{}\t{}\t{}", category, name, value));
                }
            }
            for state in NavState::ALL {
                lines.push(format!("nav\t{}\t{}", state.as_str(), tokens.nav_classes(state)));
            }
        }
    }

    Ok(lines.join("\n"))
}

fn list_presets(presets: &PresetCatalog, tokens: &TokenRegistry, check: bool) -> Result<String> {
    if check {
        let issues = presets.validate(tokens);
        if !issues.is_empty() {
            let report: Vec<String> = issues.iter().map(ToString::to_string).collect();
            bail!(
                "{} preset value(s) would not map to a class:\n{}",
                issues.len(),
                report.join("\n")
            );
        }
        tracing::info!(presets = presets.len(), "all preset values map to classes");
    }

    let lines: Vec<String> = presets
        .iter()
        .map(|preset| format!("{}\t{}", preset.name, preset.styles.to_classes(tokens)))
        .collect();
    Ok(lines.join("\n"))
}

fn tree(
    input: &Path,
    target: Option<(&str, &str)>,
    format: TreeFormat,
    tokens: &TokenRegistry,
    presets: &PresetCatalog,
) -> Result<String> {
    let text = input::read_text(input)?;
    let mut blueprint = match Format::of(input) {
        Format::Json => Blueprint::from_json(&text),
        Format::Yaml => Blueprint::from_yaml(&text),
    }
    .with_context(|| format!("invalid blueprint in {}", input.display()))?;

    if let Some((name, node)) = target {
        let styles = presets
            .get(name)
            .ok_or_else(|| unknown_preset(name, presets))?;
        blueprint = blueprint.with_preset(node, styles)?;
    }

    let resolved = blueprint.resolve(tokens);
    match format {
        TreeFormat::Json => {
            serde_json::to_string_pretty(&resolved).context("failed to serialize resolved tree")
        }
        TreeFormat::Classes => {
            let lines: Vec<String> = resolved
                .class_map()
                .into_iter()
                .map(|(id, classes)| format!("{}\t{}", id, classes))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

fn unknown_preset(name: &str, presets: &PresetCatalog) -> anyhow::Error {
    let known: Vec<&str> = presets.names().collect();
    anyhow!("unknown preset '{}' (available: {})", name, known.join(", "))
}
