use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SiteError {
    #[error("I/O error within site domain")]
    #[diagnostic(code(brutal::site::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(brutal::site::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Hugo accepts either a single theme or a list of themes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ThemeSetting {
    One(String),
    Many(Vec<String>),
}

/// The only part of the site config this tool cares about.
#[derive(Debug, Deserialize)]
struct SiteConfig {
    theme: Option<ThemeSetting>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ThemeStatus {
    /// The site config already selects the theme.
    Active,
    /// The site config exists but selects another theme or none.
    Inactive,
    /// No site config was found.
    Unknown,
}

/// Returns the first of `markers` that exists in `root`.
pub fn find_marker(root: &Path, markers: &[&str]) -> Option<PathBuf> {
    markers
        .iter()
        .map(|marker| root.join(marker))
        .find(|path| {
            let exists = path.exists();
            log::debug!("marker {}: {}", path.display(), exists);
            exists
        })
}

/// Reads the site config at `marker` and reports whether `theme` is selected.
///
/// The file is never written.
pub fn theme_status(marker: &Path, theme: &str) -> Result<ThemeStatus, SiteError> {
    let content = fs::read_to_string(marker)
        .map_err(|error| IoError::new(FileOperation::Read, marker, error))?;

    let config: SiteConfig = toml::from_str(&content).map_err(|err| SiteError::ParseToml {
        path: marker.to_path_buf(),
        source: err,
    })?;

    let active = match config.theme {
        Some(ThemeSetting::One(name)) => name == theme,
        Some(ThemeSetting::Many(names)) => names.iter().any(|name| name == theme),
        None => false,
    };

    Ok(if active {
        ThemeStatus::Active
    } else {
        ThemeStatus::Inactive
    })
}
