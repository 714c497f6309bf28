use crate::{
    template::{render_sources, TemplateError},
    theme,
};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Everything a run will put on disk, with paths relative to the site root.
///
/// Built once per run from the embedded [`theme`] tables and consumed by either the
/// scaffolder or the dry-run preview.
#[derive(Debug, Clone)]
pub struct ThemeTree {
    /// Directories to create, in order.
    pub directories: Vec<PathBuf>,
    /// Rendered file contents keyed by output path, in write order.
    pub files: IndexMap<PathBuf, String>,
}
impl ThemeTree {
    pub fn build() -> Result<Self, TemplateError> {
        let theme_dir = theme::theme_dir();

        let directories = theme::DIRECTORIES
            .iter()
            .map(|dir| theme_dir.join(dir))
            .collect();

        let files = render_sources(&theme::SOURCES)?
            .into_iter()
            .map(|(path, contents)| (theme_dir.join(path), contents))
            .collect();

        Ok(Self { directories, files })
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_lives_under_the_theme_dir() {
        let tree = ThemeTree::build().unwrap();
        let root = theme::theme_dir();

        for dir in &tree.directories {
            assert!(dir.starts_with(&root), "{}", dir.display());
        }
        for path in tree.files.keys() {
            assert!(path.starts_with(&root), "{}", path.display());
            assert!(path.is_relative());
        }
    }

    #[test]
    fn test_layout_matches_hugo_theme_structure() {
        let tree = ThemeTree::build().unwrap();
        let expected = [
            "themes/brutal/layouts/_default/baseof.html",
            "themes/brutal/layouts/_default/list.html",
            "themes/brutal/layouts/_default/single.html",
            "themes/brutal/layouts/index.html",
            "themes/brutal/layouts/partials/head.html",
            "themes/brutal/layouts/partials/header.html",
            "themes/brutal/layouts/partials/footer.html",
            "themes/brutal/assets/css/main.css",
        ];

        let actual: Vec<_> = tree.files.keys().map(PathBuf::as_path).collect();
        let expected: Vec<_> = expected.iter().map(Path::new).collect();

        assert_eq!(actual, expected);
        assert!(tree
            .directories
            .contains(&PathBuf::from("themes/brutal/static/images")));
    }

    #[test]
    fn test_css_entry_is_fixed() {
        let tree = ThemeTree::build().unwrap();
        let css = tree.get("themes/brutal/assets/css/main.css").unwrap();

        assert_eq!(
            css,
            "\n@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n@layer base {\n  body {\n    @apply antialiased;\n  }\n}\n"
        );
    }
}
