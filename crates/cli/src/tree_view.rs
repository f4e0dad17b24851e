//! Text rendering of a search tree.
//!
//! One line per node, indented by ply: `MAX`/`MIN` label, stones left,
//! and the backed-up score. Pruned placeholders are labeled `PRUNED` and
//! carry no score, since they were never evaluated.

use nim_core::SearchNode;

pub fn render_tree(root: &SearchNode) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &SearchNode, level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str("  ");
    }
    if node.pruned {
        out.push_str(&format!("PRUNED {}\n", node.stones));
    } else {
        let label = if node.is_maximizing { "MAX" } else { "MIN" };
        out.push_str(&format!("{} {}  s: {}\n", label, node.stones, node.score));
    }
    for child in &node.children {
        render_node(child, level + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nim_core::{Algorithm, search_root};

    #[test]
    fn test_renders_one_line_per_node_with_ply_indent() {
        let mut nodes = 0;
        let tree = search_root(Algorithm::Minimax, 3, 3, &mut nodes);
        let rendered = render_tree(&tree);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), tree.total_nodes());
        assert_eq!(lines[0], "MIN 3  s: -1");
        assert!(lines[1].starts_with("  MAX "));
    }

    #[test]
    fn test_exhaustive_tree_has_no_pruned_lines() {
        let mut nodes = 0;
        let tree = search_root(Algorithm::Minimax, 7, 7, &mut nodes);
        assert!(!render_tree(&tree).contains("PRUNED"));
    }

    #[test]
    fn test_pruned_lines_carry_no_score() {
        let mut nodes = 0;
        let tree = search_root(Algorithm::AlphaBeta, 7, 7, &mut nodes);
        let rendered = render_tree(&tree);

        assert!(rendered.contains("PRUNED"));
        for line in rendered.lines() {
            if line.trim_start().starts_with("PRUNED") {
                assert!(!line.contains("s:"));
            }
        }
    }
}
