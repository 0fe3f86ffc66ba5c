use super::partitioner::*;
use crate::core::pbrt::*;

const N_BINS: usize = 12;

#[derive(Debug, Clone, Copy)]
struct BinInfo {
    count: usize,
    bounds: Bounds3f,
}

impl Default for BinInfo {
    fn default() -> Self {
        BinInfo {
            count: 0,
            bounds: Bounds3f::empty(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    cost: Float,
    axis: usize,
    bin: usize,
    left_count: usize,
}

#[inline]
fn bin_index(c: Float, min: Float, extent: Float) -> usize {
    let b = (N_BINS as Float * ((c - min) / extent)) as usize;
    return usize::min(b, N_BINS - 1);
}

/// Binned surface area heuristic partitioner.
///
/// The cost of splitting a node is
/// `traversal + (A(L) / A * n(L) + A(R) / A * n(R)) * intersection`,
/// the cost of a leaf is `n * intersection`. Ties go to the leaf, then to
/// the lowest axis, then to the lowest bin.
pub struct SahPartitioner<'a> {
    bboxes: &'a [Bounds3f],
    centroids: Vec<Point3f>,
    indices: Vec<usize>,
    max_leaf_size: usize,
    interior_node_traversal_cost: Float,
    item_intersection_cost: Float,
}

impl<'a> SahPartitioner<'a> {
    pub fn new(
        bboxes: &'a [Bounds3f],
        max_leaf_size: usize,
        interior_node_traversal_cost: Float,
        item_intersection_cost: Float,
    ) -> Self {
        let centroids = bboxes.iter().map(|b| b.centroid()).collect();
        SahPartitioner {
            bboxes,
            centroids,
            indices: (0..bboxes.len()).collect(),
            max_leaf_size: usize::max(max_leaf_size, 1),
            interior_node_traversal_cost,
            item_intersection_cost,
        }
    }

    fn centroid_bounds(&self, begin: usize, end: usize) -> Bounds3f {
        return self.indices[begin..end]
            .iter()
            .fold(Bounds3f::empty(), |b, &i| b.union_p(&self.centroids[i]));
    }

    fn find_best_split(
        &self,
        begin: usize,
        end: usize,
        bbox: &Bounds3f,
        centroid_bounds: &Bounds3f,
    ) -> Option<SplitCandidate> {
        let total_area = bbox.surface_area();
        // Flat or degenerate boxes give no area information; weigh both
        // sides fully, which never beats a leaf.
        let area_ratio = |b: &Bounds3f| -> Float {
            if total_area > 0.0 {
                b.surface_area() / total_area
            } else {
                1.0
            }
        };

        let mut best: Option<SplitCandidate> = None;
        for axis in 0..3 {
            let min = centroid_bounds.min[axis];
            let extent = centroid_bounds.max[axis] - min;
            if !(extent > 0.0) {
                continue;
            }

            let mut bins = [BinInfo::default(); N_BINS];
            for &i in self.indices[begin..end].iter() {
                let b = bin_index(self.centroids[i][axis], min, extent);
                bins[b].count += 1;
                bins[b].bounds = bins[b].bounds.union(&self.bboxes[i]);
            }

            // Right side of a split after bin i is bins i+1..N.
            let mut right = [BinInfo::default(); N_BINS - 1];
            let mut acc = BinInfo::default();
            for i in (0..N_BINS - 1).rev() {
                acc.count += bins[i + 1].count;
                acc.bounds = acc.bounds.union(&bins[i + 1].bounds);
                right[i] = acc;
            }

            let mut left = BinInfo::default();
            for i in 0..N_BINS - 1 {
                left.count += bins[i].count;
                left.bounds = left.bounds.union(&bins[i].bounds);
                if left.count == 0 || right[i].count == 0 {
                    continue;
                }
                let cost = self.interior_node_traversal_cost
                    + (area_ratio(&left.bounds) * left.count as Float
                        + area_ratio(&right[i].bounds) * right[i].count as Float)
                        * self.item_intersection_cost;
                if best.map_or(true, |b| cost < b.cost) {
                    best = Some(SplitCandidate {
                        cost,
                        axis,
                        bin: i,
                        left_count: left.count,
                    });
                }
            }
        }
        return best;
    }
}

impl Partitioner for SahPartitioner<'_> {
    fn compute_bbox(&self, begin: usize, end: usize) -> Bounds3f {
        return self.indices[begin..end]
            .iter()
            .fold(Bounds3f::empty(), |b, &i| b.union(&self.bboxes[i]));
    }

    fn partition(&mut self, begin: usize, end: usize, bbox: &Bounds3f) -> Option<Split> {
        let n = end - begin;
        if n <= self.max_leaf_size {
            return None;
        }

        let centroid_bounds = self.centroid_bounds(begin, end);
        let best = self.find_best_split(begin, end, bbox, &centroid_bounds)?;
        let leaf_cost = n as Float * self.item_intersection_cost;
        if best.cost >= leaf_cost {
            return None;
        }

        // Stable partition keeps the ordering reproducible.
        let axis = best.axis;
        let min = centroid_bounds.min[axis];
        let extent = centroid_bounds.max[axis] - min;
        let centroids = &self.centroids;
        let (left, right): (Vec<usize>, Vec<usize>) = self.indices[begin..end]
            .iter()
            .partition(|&&i| bin_index(centroids[i][axis], min, extent) <= best.bin);
        debug_assert_eq!(left.len(), best.left_count);
        let pivot = begin + left.len();
        self.indices[begin..pivot].copy_from_slice(&left);
        self.indices[pivot..end].copy_from_slice(&right);

        return Some(Split { pivot, axis });
    }

    fn get_item_ordering(&self) -> &[usize] {
        return &self.indices;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: Float, y: Float, z: Float) -> Bounds3f {
        let p = Point3f::new(x, y, z);
        return Bounds3f::new(&p, &p).expand(0.5);
    }

    #[test]
    fn test_001() {
        // Two well separated clusters split between them.
        let bboxes = vec![
            unit_box_at(0.0, 0.0, 0.0),
            unit_box_at(100.0, 0.0, 0.0),
            unit_box_at(1.0, 0.0, 0.0),
            unit_box_at(101.0, 0.0, 0.0),
        ];
        let mut p = SahPartitioner::new(&bboxes, 1, 1.0, 1.0);
        let bbox = p.compute_bbox(0, 4);
        let split = p.partition(0, 4, &bbox).unwrap();
        assert_eq!(split, Split { pivot: 2, axis: 0 });
        assert_eq!(p.get_item_ordering(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_002() {
        // Identical boxes have no usable centroid extent.
        let bboxes = vec![unit_box_at(1.0, 2.0, 3.0); 16];
        let mut p = SahPartitioner::new(&bboxes, 1, 1.0, 1.0);
        let bbox = p.compute_bbox(0, 16);
        assert!(p.partition(0, 16, &bbox).is_none());
        assert_eq!(p.get_item_ordering(), (0..16).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_003() {
        let bboxes = vec![unit_box_at(0.0, 0.0, 0.0), unit_box_at(10.0, 0.0, 0.0)];
        let mut p = SahPartitioner::new(&bboxes, 2, 1.0, 1.0);
        let bbox = p.compute_bbox(0, 2);
        assert!(p.partition(0, 2, &bbox).is_none());
    }

    #[test]
    fn test_004() {
        // Zero-area boxes on a line: no area information, so a leaf.
        let bboxes: Vec<Bounds3f> = (0..8)
            .map(|i| {
                let p = Point3f::new(i as Float, 0.0, 0.0);
                Bounds3f::new(&p, &p)
            })
            .collect();
        let mut p = SahPartitioner::new(&bboxes, 1, 1.0, 1.0);
        let bbox = p.compute_bbox(0, 8);
        assert!(p.partition(0, 8, &bbox).is_none());
    }

    #[test]
    fn test_006() {
        // Split cost 0.9375 + (6/96 + 96/96) * 1 equals the leaf cost 2.
        let bboxes = vec![
            Bounds3f::from(((0.0, 0.0, 0.0), (4.0, 4.0, 4.0))),
            Bounds3f::from(((1.0, 1.0, 1.0), (2.0, 2.0, 2.0))),
        ];
        let mut p = SahPartitioner::new(&bboxes, 1, 0.9375, 1.0);
        let bbox = p.compute_bbox(0, 2);
        assert_eq!(bbox.surface_area(), 96.0);
        assert!(p.partition(0, 2, &bbox).is_none());
        assert_eq!(p.get_item_ordering(), &[0, 1]);

        // Slightly cheaper traversal tips it into a split.
        let mut p = SahPartitioner::new(&bboxes, 1, 0.9, 1.0);
        let split = p.partition(0, 2, &bbox).unwrap();
        assert_eq!(split, Split { pivot: 1, axis: 0 });
        assert_eq!(p.get_item_ordering(), &[1, 0]);
    }

    #[test]
    fn test_005() {
        // Splitting only inside a sub-range leaves the rest untouched.
        let bboxes: Vec<Bounds3f> = [5.0, 0.0, 9.0, 1.0, 8.0, 3.0]
            .iter()
            .map(|&y| unit_box_at(0.0, y * 10.0, 0.0))
            .collect();
        let mut p = SahPartitioner::new(&bboxes, 1, 1.0, 1.0);
        let bbox = p.compute_bbox(1, 5);
        let split = p.partition(1, 5, &bbox).unwrap();
        assert_eq!(split.axis, 1);
        let order = p.get_item_ordering();
        assert_eq!(order[0], 0);
        assert_eq!(order[5], 5);
        let mut mid = order[1..5].to_vec();
        mid.sort();
        assert_eq!(mid, vec![1, 2, 3, 4]);
        for &i in order[1..split.pivot].iter() {
            for &j in order[split.pivot..5].iter() {
                assert!(bboxes[i].centroid().y < bboxes[j].centroid().y);
            }
        }
    }
}
