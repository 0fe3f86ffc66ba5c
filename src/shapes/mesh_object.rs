use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::pbrt::*;

pub const MESH_OBJECT_MODEL: &str = "mesh_object";

/// An indexed triangle mesh in object space.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshObject {
    name: String,
    vertices: Vec<Point3f>,
    triangles: Vec<[usize; 3]>,
}

impl MeshObject {
    pub fn new(name: &str, vertices: Vec<Point3f>, triangles: Vec<[usize; 3]>) -> Self {
        MeshObject {
            name: String::from(name),
            vertices,
            triangles,
        }
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn get_triangle_count(&self) -> usize {
        return self.triangles.len();
    }

    pub fn get_vertex_count(&self) -> usize {
        return self.vertices.len();
    }

    pub fn bounds(&self) -> Bounds3f {
        return self
            .vertices
            .iter()
            .fold(Bounds3f::empty(), |b, p| b.union_p(p));
    }
}

pub fn create_mesh_object(name: &str, params: &ParamSet) -> Result<MeshObject, CurveTreeError> {
    let p = params.get_floats("P");
    if p.len() % 3 != 0 {
        let msg = format!("{} values is not a list of 3D points", p.len());
        return Err(CurveTreeError::invalid_parameter("P", &msg));
    }
    let vertices: Vec<Point3f> = p
        .chunks_exact(3)
        .map(|c| Point3f::new(c[0], c[1], c[2]))
        .collect();

    let indices = params.get_ints("indices");
    if indices.len() % 3 != 0 {
        let msg = format!("{} indices do not form triangles", indices.len());
        return Err(CurveTreeError::invalid_parameter("indices", &msg));
    }
    let mut triangles = Vec::with_capacity(indices.len() / 3);
    for tri in indices.chunks_exact(3) {
        let mut t = [0usize; 3];
        for j in 0..3 {
            if tri[j] < 0 || tri[j] as usize >= vertices.len() {
                let msg = format!("vertex index {} out of range", tri[j]);
                return Err(CurveTreeError::invalid_parameter("indices", &msg));
            }
            t[j] = tri[j] as usize;
        }
        triangles.push(t);
    }
    return Ok(MeshObject::new(name, vertices, triangles));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut params = ParamSet::new();
        params.add_floats("P", &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        params.add_ints("indices", &[0, 1, 2]);
        let mesh = create_mesh_object("tri", &params).unwrap();
        assert_eq!(mesh.get_triangle_count(), 1);
        assert_eq!(mesh.get_vertex_count(), 3);
        assert_eq!(mesh.bounds().max, Point3f::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_002() {
        let mut params = ParamSet::new();
        params.add_floats("P", &[0.0, 0.0, 0.0]);
        params.add_ints("indices", &[0, 1, 2]);
        assert!(create_mesh_object("bad", &params).is_err());
    }
}
