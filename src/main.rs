use brutal_theme::{api, prompt};
use clap::{crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("directory")
                .short('C')
                .long("directory")
                .help("Site root to install the theme into")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the files that would be written and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Continue without asking when no site config is found")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    let root = matches
        .get_one::<PathBuf>("directory")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    if matches.get_flag("dry-run") {
        api::preview(&root)?;
    } else {
        let mut confirmation = prompt::from_stdin(matches.get_flag("yes"));

        api::install(&root, confirmation.as_mut())?;
    }

    Ok(())
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
