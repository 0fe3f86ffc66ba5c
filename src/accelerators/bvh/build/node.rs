use crate::core::pbrt::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Items `item_index .. item_index + item_count` of the tree's item array.
    Leaf { item_index: usize, item_count: usize },
    /// Children live at `child_index` and `child_index + 1`.
    Interior { child_index: usize, split_axis: u8 },
}

/// One node of a flattened binary BVH. One node per cache line.
#[repr(align(64))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BvhNode {
    pub bounds: Bounds3f,
    pub kind: NodeKind,
}

impl BvhNode {
    pub fn init_leaf(bounds: &Bounds3f, item_index: usize, item_count: usize) -> Self {
        BvhNode {
            bounds: *bounds,
            kind: NodeKind::Leaf {
                item_index,
                item_count,
            },
        }
    }

    pub fn init_interior(bounds: &Bounds3f, child_index: usize, split_axis: usize) -> Self {
        debug_assert!(split_axis < 3);
        BvhNode {
            bounds: *bounds,
            kind: NodeKind::Interior {
                child_index,
                split_axis: split_axis as u8,
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        return matches!(self.kind, NodeKind::Leaf { .. });
    }

    /// Item range of a leaf; `None` for interior nodes.
    pub fn item_range(&self) -> Option<std::ops::Range<usize>> {
        match self.kind {
            NodeKind::Leaf {
                item_index,
                item_count,
            } => Some(item_index..item_index + item_count),
            NodeKind::Interior { .. } => None,
        }
    }

    /// Indices of both children; `None` for leaves.
    pub fn children(&self) -> Option<[usize; 2]> {
        match self.kind {
            NodeKind::Interior { child_index, .. } => Some([child_index, child_index + 1]),
            NodeKind::Leaf { .. } => None,
        }
    }
}

impl Default for BvhNode {
    fn default() -> Self {
        return BvhNode::init_leaf(&Bounds3f::empty(), 0, 0);
    }
}

/// A tree whose node array the generic builder fills in.
pub trait BvhTree {
    fn nodes(&self) -> &[BvhNode];
    fn nodes_mut(&mut self) -> &mut Vec<BvhNode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let b = Bounds3f::from(((0.0, 0.0, 0.0), (1.0, 1.0, 1.0)));
        let leaf = BvhNode::init_leaf(&b, 4, 3);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.item_range(), Some(4..7));
        assert_eq!(leaf.children(), None);

        let interior = BvhNode::init_interior(&b, 5, 2);
        assert!(!interior.is_leaf());
        assert_eq!(interior.children(), Some([5, 6]));
        assert_eq!(interior.item_range(), None);
    }

    #[test]
    fn test_002() {
        assert_eq!(std::mem::align_of::<BvhNode>(), 64);
        let nodes = vec![BvhNode::default(); 3];
        assert_eq!(nodes.as_ptr() as usize % 64, 0);
    }
}
