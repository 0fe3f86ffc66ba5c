use super::collect::*;
use super::curve_key::*;
use crate::accelerators::bvh::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::pbrt::*;
use crate::core::scene::*;
use crate::core::stats::*;
use crate::shapes::*;

use log::*;
use std::time::Instant;

pub const CURVE_TREE_DEFAULT_MAX_LEAF_SIZE: usize = 1;
pub const CURVE_TREE_DEFAULT_INTERIOR_NODE_TRAVERSAL_COST: Float = 1.0;
pub const CURVE_TREE_DEFAULT_CURVE_INTERSECTION_COST: Float = 1.0;

const ACCELERATION_STRUCTURE: &str = "acceleration_structure";
const DEFAULT_ALGORITHM: &str = "bvh";
const DEFAULT_TIME: Float = 0.5;

/// Everything a curve tree is built from. The scene and assembly must not
/// change while a tree is being built.
#[derive(Clone, Copy)]
pub struct CurveTreeArguments<'a> {
    pub scene: &'a Scene,
    pub curve_tree_uid: UniqueId,
    pub bbox: Bounds3f,
    pub assembly: &'a Assembly,
}

impl<'a> CurveTreeArguments<'a> {
    pub fn new(
        scene: &'a Scene,
        curve_tree_uid: UniqueId,
        bbox: &Bounds3f,
        assembly: &'a Assembly,
    ) -> Self {
        CurveTreeArguments {
            scene,
            curve_tree_uid,
            bbox: *bbox,
            assembly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildStage {
    Collecting,
    Partitioning,
    Building,
    Reordering,
    Ready,
}

struct BuildParameters {
    time: Float,
}

impl BuildParameters {
    fn new(params: &ParamSet) -> Result<Self, CurveTreeError> {
        for key in params.get_keys() {
            if key != "algorithm" && key != "time" {
                warn!("ignoring unknown {} parameter \"{}\".", ACCELERATION_STRUCTURE, key);
            }
        }
        for name in params.children.keys() {
            warn!("ignoring unknown {} dictionary \"{}\".", ACCELERATION_STRUCTURE, name);
        }

        // Only bvh is implemented.
        let algorithm = match params.get_strings("algorithm").first() {
            Some(algorithm) => algorithm.clone(),
            None if params.contains_key("algorithm") => {
                return Err(CurveTreeError::not_implemented(
                    "curve tree partitioning algorithm given as a non-string value",
                ));
            }
            None => String::from(DEFAULT_ALGORITHM),
        };
        if algorithm != DEFAULT_ALGORITHM {
            let msg = format!("curve tree partitioning algorithm \"{}\"", algorithm);
            return Err(CurveTreeError::not_implemented(&msg));
        }

        let time = params.get_optional_float("time", DEFAULT_TIME)?;
        return Ok(BuildParameters { time });
    }
}

/// A bounding volume hierarchy over the curves of one assembly.
///
/// Built once on construction and read-only afterwards. Leaf item ranges
/// index into [`CurveTree::curves`] and [`CurveTree::curve_keys`], which
/// are stored in build order.
#[derive(Debug, Clone)]
pub struct CurveTree {
    uid: UniqueId,
    bbox: Bounds3f,
    time: Float,
    nodes: Vec<BvhNode>,
    curves: Vec<BezierCurve3>,
    curve_keys: Vec<CurveKey>,
    statistics: Statistics,
}

impl CurveTree {
    pub fn new(
        arguments: &CurveTreeArguments,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self, CurveTreeError> {
        let params = arguments
            .assembly
            .get_parameters()
            .child(ACCELERATION_STRUCTURE);
        let build_params = BuildParameters::new(&params)?;

        let mut tree = CurveTree {
            uid: arguments.curve_tree_uid,
            bbox: arguments.bbox,
            time: build_params.time,
            nodes: Vec::new(),
            curves: Vec::new(),
            curve_keys: Vec::new(),
            statistics: Statistics::new(),
        };

        tree.build_bvh(arguments, diagnostics);
        return Ok(tree);
    }

    fn enter(&self, stage: BuildStage) {
        trace!("curve tree #{}: {:?}", self.uid, stage);
    }

    fn build_bvh(&mut self, arguments: &CurveTreeArguments, diagnostics: &dyn Diagnostics) {
        let start = Instant::now();

        self.enter(BuildStage::Collecting);
        let mut curves = Vec::new();
        let mut curve_keys = Vec::new();
        collect_curves(arguments.assembly, &mut curves, &mut curve_keys);
        assert_eq!(curves.len(), curve_keys.len());
        let curve_count = curves.len();

        self.enter(BuildStage::Partitioning);
        let build_time = {
            let bboxes: Vec<Bounds3f> = curves.iter().map(|c| c.bounds()).collect();
            let mut partitioner = SahPartitioner::new(
                &bboxes,
                CURVE_TREE_DEFAULT_MAX_LEAF_SIZE,
                CURVE_TREE_DEFAULT_INTERIOR_NODE_TRAVERSAL_COST,
                CURVE_TREE_DEFAULT_CURVE_INTERSECTION_COST,
            );

            self.enter(BuildStage::Building);
            let builder = Builder::new();
            let build_time = builder.build(
                self,
                &mut partitioner,
                curve_count,
                CURVE_TREE_DEFAULT_MAX_LEAF_SIZE,
            );

            self.enter(BuildStage::Reordering);
            if curve_count > 0 {
                let order = partitioner.get_item_ordering();
                large_item_reorder(&mut curves, &mut Vec::new(), order);
                small_item_reorder(&mut curve_keys, &mut Vec::with_capacity(curve_count), order);
            }
            build_time
        };
        self.curves = curves;
        self.curve_keys = curve_keys;

        let mut statistics = Statistics::new();
        statistics.insert_count("curves", curve_count as u64);
        statistics.insert_float("time", self.time as f64);
        statistics.insert_size("nodes alignment", alignment(self.nodes.as_ptr()) as u64);
        TreeStatistics::new(&self.nodes).insert_into(&mut statistics);
        statistics.insert_time("build time", build_time);
        statistics.insert_time("total time", start.elapsed().as_secs_f64());
        diagnostics.report(&format!("curve tree #{} statistics", self.uid), &statistics);
        self.statistics = statistics;

        self.enter(BuildStage::Ready);
    }

    pub fn get_uid(&self) -> UniqueId {
        return self.uid;
    }

    /// Bounds the tree was requested for.
    pub fn get_bbox(&self) -> Bounds3f {
        return self.bbox;
    }

    /// Reserved for motion blur; recorded but not used by the build.
    pub fn get_time(&self) -> Float {
        return self.time;
    }

    pub fn nodes(&self) -> &[BvhNode] {
        return &self.nodes;
    }

    pub fn curves(&self) -> &[BezierCurve3] {
        return &self.curves;
    }

    pub fn curve_keys(&self) -> &[CurveKey] {
        return &self.curve_keys;
    }

    pub fn get_curve_count(&self) -> usize {
        return self.curves.len();
    }

    pub fn statistics(&self) -> &Statistics {
        return &self.statistics;
    }
}

impl BvhTree for CurveTree {
    fn nodes(&self) -> &[BvhNode] {
        return &self.nodes;
    }

    fn nodes_mut(&mut self) -> &mut Vec<BvhNode> {
        return &mut self.nodes;
    }
}
