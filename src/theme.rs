//! Fixed description of the theme: its name, where it lands, and the embedded sources.
//!
//! Nothing here is mutated at runtime. Sources live under `templates/` at the crate root
//! and are compiled into the binary; a `.tera` suffix marks a source that still has icon
//! placeholders to fill in (see [`crate::template`]).

use std::path::{Path, PathBuf};

pub const THEME_NAME: &str = "brutal";

/// Site config files whose presence marks the working directory as a Hugo site root.
/// Listed in the order Hugo resolves them.
pub const MARKER_FILES: [&str; 2] = ["hugo.toml", "config.toml"];

/// Directories created under the theme root, in creation order.
pub const DIRECTORIES: [&str; 4] = [
    "layouts/_default",
    "layouts/partials",
    "assets/css",
    "static/images",
];

/// Embedded sources as `(name relative to templates/, contents)`, in write order.
pub const SOURCES: [(&str, &str); 8] = [
    (
        "layouts/_default/baseof.html",
        include_str!("../templates/layouts/_default/baseof.html"),
    ),
    (
        "layouts/_default/list.html",
        include_str!("../templates/layouts/_default/list.html"),
    ),
    (
        "layouts/_default/single.html",
        include_str!("../templates/layouts/_default/single.html"),
    ),
    (
        "layouts/index.html.tera",
        include_str!("../templates/layouts/index.html.tera"),
    ),
    (
        "layouts/partials/head.html",
        include_str!("../templates/layouts/partials/head.html"),
    ),
    (
        "layouts/partials/header.html.tera",
        include_str!("../templates/layouts/partials/header.html.tera"),
    ),
    (
        "layouts/partials/footer.html.tera",
        include_str!("../templates/layouts/partials/footer.html.tera"),
    ),
    (
        "assets/css/main.css",
        include_str!("../templates/assets/css/main.css"),
    ),
];

/// `themes/<name>`, relative to the site root.
pub fn theme_dir() -> PathBuf {
    Path::new("themes").join(THEME_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_not_empty() {
        for (name, contents) in SOURCES {
            assert!(!contents.trim().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn test_every_source_lands_in_a_declared_directory() {
        for (name, _) in SOURCES {
            let parent = Path::new(name).parent().unwrap();
            assert!(
                DIRECTORIES.iter().any(|dir| Path::new(dir) == parent)
                    || parent == Path::new("layouts"),
                "{name} has no declared parent"
            );
        }
    }

    #[test]
    fn test_theme_dir() {
        assert_eq!(theme_dir(), PathBuf::from("themes/brutal"));
    }
}
