use crate::node::Node;
use colored::Colorize;
use std::path::Path;

/// Appends `node` and its subtree to `out` with box-drawing connectors.
fn write_node(out: &mut Vec<String>, node: &Node, prefix: &str, is_last: bool, colorize: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let label = match (&node.comment, node.is_directory()) {
        (Some(comment), true) => format!("{}/  # {}", node.name, comment),
        (Some(comment), false) => format!("{}  # {}", node.name, comment),
        (None, true) => format!("{}/", node.name),
        (None, false) => node.name.clone(),
    };

    if colorize {
        let label = if node.is_directory() {
            label.as_str().blue()
        } else {
            label.as_str().green()
        };
        out.push(format!("{}{}{}", prefix.yellow(), connector.yellow(), label));
    } else {
        out.push(format!("{}{}{}", prefix, connector, label));
    }

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        write_node(out, child, &child_prefix, i == len - 1, colorize);
    }
}

fn render_lines(tree: &Node, colorize: bool) -> Vec<String> {
    let mut lines = vec![tree.name.clone()];

    let len = tree.children.len();
    for (i, child) in tree.children.iter().enumerate() {
        write_node(&mut lines, child, "", i == len - 1, colorize);
    }

    lines
}

/// Renders a tree the way `tree` prints it, starting with the root's name.
///
/// The output reads back through the tree-drawing parser to the same structure.
pub fn render(tree: &Node) -> String {
    render_lines(tree, false).join("\n")
}

/// Prints a colored preview of `tree` as it would be created under `destination`.
pub fn preview_as_tree(tree: &Node, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        format!("Preview of {}", destination.display())
            .as_str()
            .bold()
            .bright_blue()
    );

    for line in render_lines(tree, true) {
        println!("{}", line);
    }
}
