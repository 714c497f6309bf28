use crate::{
    instructions, preview,
    prompt::Confirmation,
    scaffold::{self, Outcome},
    site::{self, ThemeStatus},
    template,
    theme::{MARKER_FILES, THEME_NAME},
    tree::ThemeTree,
};
use colored::Colorize;
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BrutalError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] template::TemplateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

/// Writes the theme into `root` and prints the follow-up steps.
///
/// # Errors
///
/// Returns a [`BrutalError`] if:
///
/// - An embedded template fails to render.
/// - The confirmation prompt cannot be read.
/// - A directory or file cannot be created or written to.
pub fn install(root: &Path, confirmation: &mut dyn Confirmation) -> Result<Outcome, BrutalError> {
    let tree = ThemeTree::build()?;

    log::debug!(
        "installing {} directories and {} files into {}",
        tree.directories.len(),
        tree.files.len(),
        root.display()
    );

    let outcome = scaffold::run(root, &MARKER_FILES, &tree, confirmation)?;

    match &outcome {
        Outcome::Installed(report) => {
            log::debug!("{:?}", report);

            let status = match site::find_marker(root, &MARKER_FILES) {
                Some(marker) => site::theme_status(&marker, THEME_NAME).unwrap_or_else(|err| {
                    log::warn!("{}", err);
                    ThemeStatus::Unknown
                }),
                None => ThemeStatus::Unknown,
            };

            println!("{}", instructions::render(THEME_NAME, &status));
        }
        Outcome::Declined => {
            println!("{}", "Aborted, nothing was written.".yellow());
        }
    }

    Ok(outcome)
}

/// Renders the theme and prints what [`install`] would write into `root`, without
/// touching the filesystem.
///
/// # Errors
///
/// Returns a [`BrutalError`] if an embedded template fails to render.
pub fn preview(root: &Path) -> Result<(), BrutalError> {
    let tree = ThemeTree::build()?;

    if site::find_marker(root, &MARKER_FILES).is_none() {
        log::warn!("no site config found in {}", root.display());
    }

    preview::preview_as_tree(&tree, root);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AssumeYes;
    use std::fs;

    #[test]
    fn test_install_leaves_site_config_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = "title = 'x'\ntheme = 'brutal'\n";
        fs::write(dir.path().join("hugo.toml"), config).unwrap();

        install(dir.path(), &mut AssumeYes).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("hugo.toml")).unwrap(), config);
    }

    #[test]
    fn test_unparsable_site_config_does_not_fail_install() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "this is = = not toml").unwrap();

        let outcome = install(dir.path(), &mut AssumeYes).unwrap();

        assert!(matches!(outcome, Outcome::Installed(_)));
    }

    #[test]
    fn test_preview_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        preview(dir.path()).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
