use super::node::*;
use super::partitioner::*;
use crate::core::pbrt::*;

use log::*;
use std::time::Instant;

struct BuildItem {
    node_index: usize,
    begin: usize,
    end: usize,
    bbox: Bounds3f,
}

/// Top-down BVH builder working from an explicit stack.
///
/// The root is node 0, both children of an interior node are allocated as
/// an adjacent pair, and left subtrees are built before right ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct Builder;

impl Builder {
    pub fn new() -> Self {
        Builder
    }

    /// Builds `tree` over `size` items and returns the build time in
    /// seconds. Leaves refer to positions of `partitioner.get_item_ordering()`.
    pub fn build<T, P>(
        &self,
        tree: &mut T,
        partitioner: &mut P,
        size: usize,
        max_leaf_size: usize,
    ) -> f64
    where
        T: BvhTree,
        P: Partitioner,
    {
        let start = Instant::now();

        let nodes = tree.nodes_mut();
        nodes.clear();

        let root_bbox = if size > 0 {
            partitioner.compute_bbox(0, size)
        } else {
            Bounds3f::empty()
        };
        nodes.push(BvhNode::init_leaf(&root_bbox, 0, 0));

        let mut stack = vec![BuildItem {
            node_index: 0,
            begin: 0,
            end: size,
            bbox: root_bbox,
        }];
        while let Some(item) = stack.pop() {
            let count = item.end - item.begin;
            let split = if count > max_leaf_size {
                partitioner.partition(item.begin, item.end, &item.bbox)
            } else {
                None
            };

            match split {
                Some(split) => {
                    assert!(
                        item.begin < split.pivot && split.pivot < item.end,
                        "pivot outside of item range"
                    );
                    let child_index = nodes.len();
                    let left_bbox = partitioner.compute_bbox(item.begin, split.pivot);
                    let right_bbox = partitioner.compute_bbox(split.pivot, item.end);
                    nodes[item.node_index] =
                        BvhNode::init_interior(&item.bbox, child_index, split.axis);
                    nodes.push(BvhNode::init_leaf(&left_bbox, item.begin, 0));
                    nodes.push(BvhNode::init_leaf(&right_bbox, split.pivot, 0));

                    stack.push(BuildItem {
                        node_index: child_index + 1,
                        begin: split.pivot,
                        end: item.end,
                        bbox: right_bbox,
                    });
                    stack.push(BuildItem {
                        node_index: child_index,
                        begin: item.begin,
                        end: split.pivot,
                        bbox: left_bbox,
                    });
                }
                None => {
                    nodes[item.node_index] = BvhNode::init_leaf(&item.bbox, item.begin, count);
                }
            }
        }

        let build_time = start.elapsed().as_secs_f64();
        trace!(
            "built {} nodes over {} items in {:.3} ms",
            nodes.len(),
            size,
            build_time * 1000.0
        );
        return build_time;
    }
}
