use crate::flatten::flatten;
use crate::identity::IdAssigner;
use crate::tree::{NodeId, TreeNode};
use serde::Serialize;

/// Everything the renderer needs to draw one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RenderRecord {
    fn new(id: NodeId, node: &TreeNode) -> Self {
        Self {
            id,
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
        }
    }
}

/// Walk the flattened node list, assigning ids on first encounter, and
/// produce one record per node in that order.
pub fn bind(root: &TreeNode, ids: &mut IdAssigner) -> Vec<RenderRecord> {
    flatten(root)
        .into_iter()
        .map(|node| RenderRecord::new(ids.assign(node), node))
        .collect()
}
