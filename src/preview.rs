use crate::tree::ThemeTree;
use colored::Colorize;
use indexmap::IndexMap;
use std::path::{Component, Path};

/// Represents a node in the tree (either file or directory).
#[derive(Debug, Default)]
struct TreeNode {
    children: IndexMap<String, TreeNode>,
    is_file: bool,
}
impl TreeNode {
    /// Inserts `path`, creating intermediate directory nodes on the way down.
    fn insert(&mut self, path: &Path, is_file: bool) {
        let mut node = self;

        for component in path.components() {
            if let Component::Normal(name) = component {
                node = node
                    .children
                    .entry(name.to_string_lossy().to_string())
                    .or_default();
            }
        }

        node.is_file = is_file;
    }
}

fn build_tree(tree: &ThemeTree) -> TreeNode {
    let mut root = TreeNode::default();

    for dir in &tree.directories {
        root.insert(dir, false);
    }
    for path in tree.files.keys() {
        root.insert(path, true);
    }

    root
}

/// Appends `node`'s children to `out` with ASCII connectors.
fn render_children(node: &TreeNode, prefix: &str, out: &mut Vec<String>) {
    let len = node.children.len();

    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i == len - 1;

        let connector = if is_last { "└── " } else { "├── " };
        let name = if child.is_file {
            name.green()
        } else {
            name.blue()
        };

        out.push(format!("{}{}{}", prefix.yellow(), connector.yellow(), name));

        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        render_children(child, &child_prefix, out);
    }
}

/// Renders `tree` as lines, rooted at `root`.
pub fn tree_lines(tree: &ThemeTree, root: &Path) -> Vec<String> {
    let mut lines = vec![root.display().to_string().blue().to_string()];

    render_children(&build_tree(tree), "", &mut lines);

    lines
}

pub fn preview_as_tree(tree: &ThemeTree, root: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    for line in tree_lines(tree, root) {
        println!("{}", line);
    }

    println!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        "Dry run, nothing was written".bright_green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tree_lines() {
        colored::control::set_override(false);

        let tree = ThemeTree {
            directories: vec![PathBuf::from("themes/t/static/images")],
            files: [
                (PathBuf::from("themes/t/layouts/index.html"), String::new()),
                (PathBuf::from("themes/t/assets/main.css"), String::new()),
            ]
            .into_iter()
            .collect(),
        };

        let lines = tree_lines(&tree, Path::new("site"));

        assert_eq!(
            lines,
            vec![
                "site",
                "└── themes",
                "    └── t",
                "        ├── static",
                "        │   └── images",
                "        ├── layouts",
                "        │   └── index.html",
                "        └── assets",
                "            └── main.css",
            ]
        );
    }

    #[test]
    fn test_full_theme_has_every_file() {
        colored::control::set_override(false);

        let tree = ThemeTree::build().unwrap();
        let lines = tree_lines(&tree, Path::new("."));

        for path in tree.files.keys() {
            let name = path.file_name().unwrap().to_string_lossy();
            assert!(
                lines.iter().any(|line| line.ends_with(&*name)),
                "{name} missing"
            );
        }
    }
}
