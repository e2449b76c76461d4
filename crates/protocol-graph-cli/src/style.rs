//! Style files: a `StyleDef` stored as TOML or JSON, chosen by extension.

use std::{fs, path::Path};

use log::debug;
use protocol_graph::{config::ConfigOverrides, serde::StyleDef};

use crate::error::CliError;

pub fn load(path: &Path) -> Result<ConfigOverrides, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;

    let style: StyleDef = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| CliError::Style {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        Some("json") => serde_json::from_str(&content).map_err(|e| CliError::Style {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        _ => return Err(CliError::UnsupportedStyle(path.to_path_buf())),
    };

    debug!("loaded style {:?} from {}", style, path.display());
    Ok(ConfigOverrides::try_from(style)?)
}
