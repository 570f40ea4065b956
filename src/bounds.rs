use crate::tree::TreeNode;
use serde::Serialize;

/// Smallest axis-aligned rectangle, in tree space, enclosing every node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Size of the drawing surface and the offset applied to the node group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

#[derive(Default)]
struct Extent {
    min_x: Option<f64>,
    max_x: Option<f64>,
    min_y: Option<f64>,
    max_y: Option<f64>,
}

// An unset bound loses every comparison, so the first node sets all four.
fn widen_min(bound: &mut Option<f64>, value: f64) {
    if bound.is_none_or(|current| value < current) {
        *bound = Some(value);
    }
}

fn widen_max(bound: &mut Option<f64>, value: f64) {
    if bound.is_none_or(|current| value > current) {
        *bound = Some(value);
    }
}

impl BoundingBox {
    pub fn of(root: &TreeNode) -> Self {
        let mut extent = Extent::default();
        let mut to_visit = vec![root];
        while let Some(node) = to_visit.pop() {
            widen_min(&mut extent.min_x, node.left());
            widen_max(&mut extent.max_x, node.right());
            widen_min(&mut extent.min_y, node.top());
            widen_max(&mut extent.max_y, node.bottom());
            to_visit.extend(node.children.iter().rev());
        }
        // The root is always visited, so no bound can remain unset.
        Self {
            min_x: extent.min_x.unwrap_or_default(),
            max_x: extent.max_x.unwrap_or_default(),
            min_y: extent.min_y.unwrap_or_default(),
            max_y: extent.max_y.unwrap_or_default(),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Canvas that fits the box. The leftmost point is shifted to x = 0; the
    /// vertical axis is only shifted when `align_top` is set.
    pub fn canvas(&self, align_top: bool) -> Canvas {
        Canvas {
            width: self.width(),
            height: self.height(),
            translate_x: -self.min_x,
            translate_y: if align_top { -self.min_y } else { 0.0 },
        }
    }
}
