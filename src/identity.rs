use crate::tree::{NodeId, TreeNode};

/// Hands out node identifiers for one render pass.
///
/// Ids are sequential from 1 in the order nodes are first seen. A node that
/// already carries an id keeps it and does not consume a counter value.
#[derive(Debug)]
pub struct IdAssigner {
    last: NodeId,
}

impl Default for IdAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAssigner {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    pub fn assign(&mut self, node: &TreeNode) -> NodeId {
        if let Some(id) = node.id() {
            return id;
        }
        self.last += 1;
        node.set_id(self.last);
        self.last
    }

    /// Number of ids this assigner has handed out.
    pub fn issued(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_sequentially_from_one() {
        let mut ids = IdAssigner::new();
        let a = TreeNode::new(0.0, 0.0, 1.0, 1.0);
        let b = TreeNode::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(ids.assign(&a), 1);
        assert_eq!(ids.assign(&b), 2);
        assert_eq!(a.id(), Some(1));
        assert_eq!(b.id(), Some(2));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn returns_existing_id_on_second_encounter() {
        let mut ids = IdAssigner::new();
        let node = TreeNode::new(0.0, 0.0, 1.0, 1.0);
        let first = ids.assign(&node);
        assert_eq!(ids.assign(&node), first);
        assert_eq!(ids.issued(), 1);
    }

    #[test]
    fn keeps_ids_from_input() {
        let mut ids = IdAssigner::new();
        let node = TreeNode::new(0.0, 0.0, 1.0, 1.0);
        node.set_id(42);
        assert_eq!(ids.assign(&node), 42);
        assert_eq!(ids.assign(&TreeNode::new(0.0, 0.0, 1.0, 1.0)), 1);
    }

    #[test]
    fn zero_id_in_input_is_renumbered() {
        let node: TreeNode =
            serde_json::from_str(r#"{"id":0,"x":0,"y":0,"width":1,"height":1}"#).unwrap();
        let mut ids = IdAssigner::new();
        assert_eq!(ids.assign(&node), 1);
        assert_eq!(node.id(), Some(1));
    }

    #[test]
    fn separate_passes_do_not_share_state() {
        let mut first = IdAssigner::new();
        let mut second = IdAssigner::new();
        first.assign(&TreeNode::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(second.assign(&TreeNode::new(0.0, 0.0, 1.0, 1.0)), 1);
    }
}
