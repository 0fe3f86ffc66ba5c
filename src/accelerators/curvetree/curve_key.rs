/// Where a curve stored in a [`super::CurveTree`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CurveKey {
    object_instance_index: usize,
    curve_index: usize,
    curve_material_index: u32,
}

impl CurveKey {
    pub fn new(object_instance_index: usize, curve_index: usize, curve_material_index: u32) -> Self {
        CurveKey {
            object_instance_index,
            curve_index,
            curve_material_index,
        }
    }

    /// Index of the object instance in its assembly.
    pub fn get_object_instance_index(&self) -> usize {
        return self.object_instance_index;
    }

    /// Index of the curve in its curve object.
    pub fn get_curve_index(&self) -> usize {
        return self.curve_index;
    }

    pub fn get_curve_material_index(&self) -> u32 {
        return self.curve_material_index;
    }
}
