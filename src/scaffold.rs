use crate::{
    errors::{FileOperation, IoError},
    prompt::{Confirmation, PromptError},
    site,
    tree::ThemeTree,
};
use colored::Colorize;
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(brutal::scaffold::io))]
    Io(#[from] IoError),

    #[error("Error occurred trying to confirm with user")]
    #[diagnostic(code(brutal::scaffold::prompt))]
    Prompt(#[from] PromptError),
}

pub const CONTINUE_QUESTION: &str = "Continue generating theme files?";

/// Counts of what a completed run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub directories_created: usize,
    pub directories_existing: usize,
    pub files_created: usize,
    pub files_overwritten: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Installed(Report),
    /// The user said no at the confirmation prompt; nothing was touched.
    Declined,
}

/// Materializes `tree` under `root`.
///
/// When none of `markers` exists in `root` the user is asked whether to continue, and
/// anything but a yes returns [`Outcome::Declined`] before the filesystem is touched.
/// Existing files are overwritten. The first filesystem error aborts the run and leaves
/// whatever was already written in place.
pub fn run(
    root: &Path,
    markers: &[&str],
    tree: &ThemeTree,
    confirmation: &mut dyn Confirmation,
) -> Result<Outcome, ScaffoldError> {
    if site::find_marker(root, markers).is_none() {
        log::warn!("no site config found in {}", root.display());

        println!(
            "{} No {} found. Make sure you run this from the root of a Hugo site.",
            "warning:".yellow().bold(),
            markers.join(" or ")
        );

        if !confirmation.confirm(CONTINUE_QUESTION)? {
            return Ok(Outcome::Declined);
        }
    }

    let mut report = Report::default();

    for dir in &tree.directories {
        create_directory(root, dir, &mut report)?;
    }

    for (path, contents) in &tree.files {
        write_file(root, path, contents, &mut report)?;
    }

    Ok(Outcome::Installed(report))
}

/// Creates `relative` (and any missing parents) under `root`. An existing directory is
/// reported and left alone.
fn create_directory(root: &Path, relative: &Path, report: &mut Report) -> Result<(), ScaffoldError> {
    let path = root.join(relative);

    if path.is_dir() {
        println!("{} {}", "exists".blue(), relative.display());
        report.directories_existing += 1;

        return Ok(());
    }

    log::debug!("mkdir -p {}", path.display());

    fs::create_dir_all(&path).map_err(|error| IoError::new(FileOperation::Mkdir, &path, error))?;

    println!("{} {}", "create".green(), relative.display());
    report.directories_created += 1;

    Ok(())
}

/// Writes `contents` to `relative` under `root`, replacing any file already there.
fn write_file(
    root: &Path,
    relative: &Path,
    contents: &str,
    report: &mut Report,
) -> Result<(), ScaffoldError> {
    let path = root.join(relative);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| IoError::new(FileOperation::Mkdir, parent, error))?;
    }

    let existed = path.is_file();

    log::debug!("writing {} bytes to {}", contents.len(), path.display());

    fs::write(&path, contents).map_err(|error| IoError::new(FileOperation::Write, &path, error))?;

    if existed {
        println!("{} {}", "overwrite".yellow(), relative.display());
        report.files_overwritten += 1;
    } else {
        println!("{} {}", "create".green(), relative.display());
        report.files_created += 1;
    }

    Ok(())
}
