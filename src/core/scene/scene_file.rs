use super::assembly::*;
use super::scene::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::pbrt::*;
use crate::core::transform::*;
use crate::shapes::create_object;

use log::*;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SceneDesc {
    #[serde(default)]
    assemblies: Vec<AssemblyDesc>,
}

#[derive(Debug, Deserialize)]
struct AssemblyDesc {
    name: String,
    #[serde(default)]
    parameters: Map<String, Value>,
    #[serde(default)]
    objects: Vec<ObjectDesc>,
    #[serde(default)]
    object_instances: Vec<ObjectInstanceDesc>,
}

#[derive(Debug, Deserialize)]
struct ObjectDesc {
    name: String,
    model: String,
    #[serde(default)]
    parameters: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ObjectInstanceDesc {
    name: String,
    object: String,
    /// Row-major local-to-parent matrix.
    transform: Option<[Float; 16]>,
}

fn to_float(v: &Value) -> Option<Float> {
    return v.as_f64().map(|f| f as Float);
}

fn to_int(v: &Value) -> Option<i32> {
    return v.as_i64().and_then(|i| i32::try_from(i).ok());
}

fn add_json_value(params: &mut ParamSet, key: &str, value: &Value) -> Result<(), CurveTreeError> {
    match value {
        Value::Bool(b) => params.add_bool(key, *b),
        Value::String(s) => params.add_string(key, s),
        Value::Number(_) => {
            if let Some(i) = to_int(value) {
                params.add_int(key, i);
            } else if let Some(f) = to_float(value) {
                params.add_float(key, f);
            }
        }
        Value::Array(items) => {
            if let Some(ints) = items.iter().map(to_int).collect::<Option<Vec<i32>>>() {
                params.add_ints(key, &ints);
            } else if let Some(floats) = items.iter().map(to_float).collect::<Option<Vec<Float>>>() {
                params.add_floats(key, &floats);
            } else if let Some(strings) = items.iter().map(|v| v.as_str()).collect::<Option<Vec<&str>>>() {
                params.add_strings(key, &strings);
            } else {
                return Err(CurveTreeError::invalid_parameter(
                    key,
                    "arrays must hold only numbers or only strings",
                ));
            }
        }
        Value::Object(map) => params.add_child(key, param_set_from_json(map)?),
        Value::Null => {
            warn!("Ignoring null parameter \"{}\".", key);
        }
    }
    return Ok(());
}

/// Converts a JSON object into a (possibly nested) parameter dictionary.
pub fn param_set_from_json(map: &Map<String, Value>) -> Result<ParamSet, CurveTreeError> {
    let mut params = ParamSet::new();
    for (key, value) in map.iter() {
        add_json_value(&mut params, key, value)?;
    }
    return Ok(params);
}

fn build_assembly(desc: &AssemblyDesc) -> Result<Assembly, CurveTreeError> {
    let params = param_set_from_json(&desc.parameters)?;
    let mut assembly = Assembly::new(&desc.name, &params);
    for obj in desc.objects.iter() {
        let obj_params = param_set_from_json(&obj.parameters)?;
        assembly.add_object(create_object(&obj.model, &obj.name, &obj_params)?);
    }
    for inst in desc.object_instances.iter() {
        let transform = match inst.transform {
            Some(m) => Transform::from_matrix(&Matrix4x4::from(m)).ok_or_else(|| {
                let msg = format!("object instance \"{}\" has a singular transform", inst.name);
                CurveTreeError::invalid_parameter("transform", &msg)
            })?,
            None => Transform::identity(),
        };
        assembly.add_object_instance(&inst.name, &inst.object, &transform)?;
    }
    debug!(
        "Assembly \"{}\": {} objects, {} object instances.",
        desc.name,
        assembly.objects().len(),
        assembly.object_instances().len()
    );
    return Ok(assembly);
}

pub fn parse_scene(text: &str) -> Result<Scene, CurveTreeError> {
    let desc: SceneDesc = serde_json::from_str(text)?;
    let mut scene = Scene::new();
    for a in desc.assemblies.iter() {
        scene.add_assembly(build_assembly(a)?);
    }
    return Ok(scene);
}

pub fn load_scene(path: &Path) -> Result<Scene, CurveTreeError> {
    info!("Loading scene \"{}\".", path.display());
    let text = std::fs::read_to_string(path)?;
    return parse_scene(&text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let json = r#"{ "algorithm": "bvh", "time": 0.25, "depth": 3,
                        "ids": [1, 2], "weights": [0.5, 1],
                        "names": ["a", "b"], "inner": { "flag": true } }"#;
        let map: Map<String, Value> = serde_json::from_str(json).unwrap();
        let params = param_set_from_json(&map).unwrap();
        assert_eq!(params.find_one_string("algorithm", ""), "bvh");
        assert_eq!(params.find_one_float("time", 0.0), 0.25);
        assert_eq!(params.find_one_int("depth", 0), 3);
        assert_eq!(params.get_ints("ids"), vec![1, 2]);
        assert_eq!(params.get_floats("weights"), vec![0.5, 1.0]);
        assert_eq!(params.get_strings("names"), vec!["a", "b"]);
        assert!(params.child("inner").find_one_bool("flag", false));
    }

    #[test]
    fn test_002() {
        let json = r#"{ "mixed": [1, "a"] }"#;
        let map: Map<String, Value> = serde_json::from_str(json).unwrap();
        assert!(param_set_from_json(&map).is_err());
    }

    #[test]
    fn test_003() {
        let json = r#"{ "assemblies": [ {
            "name": "hair",
            "objects": [ { "name": "strand", "model": "curve_object",
                           "parameters": { "P": [0,0,0, 0,0,1, 0,0,2, 0,0,3], "radius": 0.1 } } ],
            "object_instances": [ { "name": "strand_inst", "object": "strand",
                                    "transform": [0,0,0,0, 0,0,0,0, 0,0,0,0, 0,0,0,0] } ] } ] }"#;
        assert!(parse_scene(json).is_err());
        assert!(parse_scene("{ not json").is_err());
    }
}
