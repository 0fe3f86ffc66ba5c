use super::node::*;
use crate::core::stats::*;

/// Shape of a built tree, gathered by walking it from the root.
#[derive(Debug, Clone, Default)]
pub struct TreeStatistics {
    pub node_count: usize,
    pub interior_node_count: usize,
    pub leaf_count: usize,
    pub empty_leaf_count: usize,
    pub max_depth: usize,
    pub leaf_sizes: Vec<u64>,
    pub leaf_depths: Vec<u64>,
}

impl TreeStatistics {
    pub fn new(nodes: &[BvhNode]) -> Self {
        let mut stats = TreeStatistics {
            node_count: nodes.len(),
            ..Default::default()
        };
        if nodes.is_empty() {
            return stats;
        }

        let mut stack = vec![(0, 1)];
        while let Some((index, depth)) = stack.pop() {
            let node = &nodes[index];
            stats.max_depth = usize::max(stats.max_depth, depth);
            match node.kind {
                NodeKind::Leaf { item_count, .. } => {
                    stats.leaf_count += 1;
                    if item_count == 0 {
                        stats.empty_leaf_count += 1;
                    }
                    stats.leaf_sizes.push(item_count as u64);
                    stats.leaf_depths.push(depth as u64);
                }
                NodeKind::Interior { child_index, .. } => {
                    stats.interior_node_count += 1;
                    stack.push((child_index + 1, depth + 1));
                    stack.push((child_index, depth + 1));
                }
            }
        }
        return stats;
    }

    pub fn insert_into(&self, statistics: &mut Statistics) {
        statistics.insert_count("nodes", self.node_count as u64);
        statistics.insert_count("interior nodes", self.interior_node_count as u64);
        statistics.insert_count("leaves", self.leaf_count as u64);
        statistics.insert_count("empty leaves", self.empty_leaf_count as u64);
        statistics.insert_count("depth", self.max_depth as u64);
        statistics.insert_distribution("leaf size", &self.leaf_sizes);
        statistics.insert_distribution("leaf depth", &self.leaf_depths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::*;

    #[test]
    fn test_001() {
        let b = Bounds3f::from(((0.0, 0.0, 0.0), (1.0, 1.0, 1.0)));
        let nodes = vec![
            BvhNode::init_interior(&b, 1, 0),
            BvhNode::init_leaf(&b, 0, 2),
            BvhNode::init_interior(&b, 3, 1),
            BvhNode::init_leaf(&b, 2, 1),
            BvhNode::init_leaf(&b, 3, 0),
        ];
        let stats = TreeStatistics::new(&nodes);
        assert_eq!(stats.node_count, 5);
        assert_eq!(stats.interior_node_count, 2);
        assert_eq!(stats.leaf_count, 3);
        assert_eq!(stats.empty_leaf_count, 1);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.leaf_sizes, vec![2, 1, 0]);

        let mut s = Statistics::new();
        stats.insert_into(&mut s);
        assert!(s.get("leaf size").is_some());
        assert!(matches!(s.get("leaves"), Some(StatValue::Count(3))));
    }

    #[test]
    fn test_002() {
        let stats = TreeStatistics::new(&[BvhNode::default()]);
        assert_eq!(stats.leaf_count, 1);
        assert_eq!(stats.empty_leaf_count, 1);
        assert_eq!(stats.max_depth, 1);
    }
}
