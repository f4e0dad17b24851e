use super::*;

#[test]
fn test_new_node_defaults() {
    let node = SearchNode::new(5, true, 2);
    assert_eq!(node.stones, 5);
    assert!(node.is_maximizing);
    assert_eq!(node.depth, 2);
    assert!(!node.pruned);
    assert_eq!(node.score, 0);
    assert!(node.is_leaf());
}

#[test]
fn test_placeholder_is_marked_pruned() {
    let node = SearchNode::pruned_placeholder(3, false, 4);
    assert!(node.pruned);
    assert_eq!(node.score, 0);
    assert!(node.children.is_empty());
}

#[test]
fn test_subtree_counts() {
    let mut root = SearchNode::new(3, false, 0);
    root.children.push(SearchNode::new(2, true, 1));
    root.children.push(SearchNode::new(1, true, 1));
    root.children.push(SearchNode::pruned_placeholder(0, true, 1));
    root.children[0]
        .children
        .push(SearchNode::new(0, false, 2));

    assert_eq!(root.total_nodes(), 5);
    assert_eq!(root.pruned_count(), 1);
    assert!(!root.is_leaf());
    assert!(root.children[1].is_leaf());
}
