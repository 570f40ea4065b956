use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::Cell;

/// Identifier attached to a node the first time a render pass binds it.
pub type NodeId = u64;

/// One node of a pre-computed tree layout.
///
/// `x` is the horizontal center of the node and `y` its top edge, both in
/// tree space. Fields the layout engine writes but the renderer does not
/// need (`x_size`, `depth`, ...) are ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "id_unset")]
    id: Cell<Option<NodeId>>,
    #[serde(default = "missing_coord")]
    pub x: f64,
    #[serde(default = "missing_coord")]
    pub y: f64,
    #[serde(default = "missing_coord")]
    pub width: f64,
    #[serde(default = "missing_coord")]
    pub height: f64,
    #[serde(default, deserialize_with = "nullable_children")]
    pub children: Vec<TreeNode>,
}

// Records without geometry are not rejected; they produce NaN geometry.
fn missing_coord() -> f64 {
    f64::NAN
}

fn nullable_children<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TreeNode>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
    Other(IgnoredAny),
}

// Only positive integers (or strings holding one) are usable ids. Anything
// else, including 0, leaves the node to be numbered by the render pass.
fn lenient_id<'de, D>(deserializer: D) -> Result<Cell<Option<NodeId>>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(id)) => Some(id),
        Some(RawId::Text(text)) => text.trim().parse::<NodeId>().ok(),
        Some(RawId::Other(_)) | None => None,
    };
    Ok(Cell::new(id.filter(|id| *id > 0)))
}

fn id_unset(id: &Cell<Option<NodeId>>) -> bool {
    id.get().is_none()
}

// Dropping a long chain of nodes must not recurse once per level.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl TreeNode {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Cell::new(None),
            x,
            y,
            width,
            height,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn id(&self) -> Option<NodeId> {
        self.id.get()
    }

    /// Stores an id on the node. Ids are assigned through shared references
    /// so that binding can walk the flattened node list.
    pub fn set_id(&self, id: NodeId) {
        self.id.set(Some(id));
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        crate::flatten::flatten(self).len()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut to_visit = vec![(self, 1)];
        while let Some((node, level)) = to_visit.pop() {
            deepest = deepest.max(level);
            to_visit.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the two node rectangles share a region of positive area.
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps_with(&self, other: &TreeNode) -> bool {
        spans_overlap(self.left(), self.right(), other.left(), other.right())
            && spans_overlap(self.top(), self.bottom(), other.top(), other.bottom())
    }

    /// Every pair of distinct nodes in this subtree whose rectangles overlap,
    /// in pre-order.
    pub fn overlapping_pairs(&self) -> Vec<(&TreeNode, &TreeNode)> {
        let nodes = crate::flatten::flatten(self);
        let mut pairs = Vec::new();
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                if a.overlaps_with(b) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

fn spans_overlap(start: f64, end: f64, other_start: f64, other_end: f64) -> bool {
    other_start < end && other_end > start
}
