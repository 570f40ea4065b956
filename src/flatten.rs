use crate::tree::TreeNode;

/// Flatten a tree into pre-order: the root, then each child's subtree in
/// child order. The returned references point into `root`.
pub fn flatten(root: &TreeNode) -> Vec<&TreeNode> {
    let mut nodes = Vec::new();
    let mut to_visit = vec![root];
    while let Some(node) = to_visit.pop() {
        nodes.push(node);
        to_visit.extend(node.children.iter().rev());
    }
    nodes
}
