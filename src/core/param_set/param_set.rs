use crate::core::error::*;
use crate::core::pbrt::types::*;

use std::collections::BTreeMap;
use std::collections::HashMap;

/// A hierarchical, string-keyed parameter dictionary.
///
/// Keys may carry a type prefix (`"float time"`); lookups accept both the
/// prefixed and the bare name. Nested dictionaries are reached with
/// [`ParamSet::child`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    pub bools: HashMap<String, Vec<bool>>,
    pub ints: HashMap<String, Vec<i32>>,
    pub floats: HashMap<String, Vec<Float>>,
    pub strings: HashMap<String, Vec<String>>,
    pub children: BTreeMap<String, ParamSet>,
    pub keys: Vec<String>,
}

fn get_key_name(key: &str) -> String {
    let ss: Vec<&str> = key.split_ascii_whitespace().collect();
    match ss.len() {
        2 => String::from(ss[1]),
        _ => String::from(key),
    }
}

fn add_values<T: Clone>(
    k: &mut Vec<String>,
    m: &mut HashMap<String, Vec<T>>,
    key: &str,
    v: &[T],
) {
    let keyname = get_key_name(key);
    if !k.contains(&keyname) {
        k.push(keyname.clone());
    }
    m.insert(keyname, v.to_vec());
}

fn get_values<'a, T>(m: &'a HashMap<String, Vec<T>>, key: &str) -> Option<&'a [T]> {
    return m
        .get(&get_key_name(key))
        .map(|v| v.as_slice())
        .filter(|v| !v.is_empty());
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    //--------------------

    pub fn add_bool(&mut self, key: &str, v: bool) {
        add_values(&mut self.keys, &mut self.bools, key, &[v]);
    }

    pub fn add_int(&mut self, key: &str, v: i32) {
        add_values(&mut self.keys, &mut self.ints, key, &[v]);
    }

    pub fn add_ints(&mut self, key: &str, v: &[i32]) {
        add_values(&mut self.keys, &mut self.ints, key, v);
    }

    pub fn add_float(&mut self, key: &str, v: Float) {
        add_values(&mut self.keys, &mut self.floats, key, &[v]);
    }

    pub fn add_floats(&mut self, key: &str, v: &[Float]) {
        add_values(&mut self.keys, &mut self.floats, key, v);
    }

    pub fn add_string(&mut self, key: &str, v: &str) {
        add_values(&mut self.keys, &mut self.strings, key, &[String::from(v)]);
    }

    pub fn add_strings(&mut self, key: &str, v: &[&str]) {
        let v: Vec<String> = v.iter().map(|s| s.to_string()).collect();
        add_values(&mut self.keys, &mut self.strings, key, &v);
    }

    /// Inserts (or replaces) a nested dictionary.
    pub fn add_child(&mut self, name: &str, child: ParamSet) {
        self.children.insert(String::from(name), child);
    }

    /// Mutable access to a nested dictionary, created on demand.
    pub fn child_mut(&mut self, name: &str) -> &mut ParamSet {
        return self.children.entry(String::from(name)).or_default();
    }

    /// The nested dictionary `name`, or an empty one when absent.
    pub fn child(&self, name: &str) -> ParamSet {
        return self.children.get(name).cloned().unwrap_or_default();
    }

    //--------------------

    pub fn get_ints(&self, key: &str) -> Vec<i32> {
        return get_values(&self.ints, key).map(|v| v.to_vec()).unwrap_or_default();
    }

    /// Float list under `key`; integer lists are widened.
    pub fn get_floats(&self, key: &str) -> Vec<Float> {
        if let Some(v) = get_values(&self.floats, key) {
            return v.to_vec();
        }
        return self.get_ints(key).iter().map(|&i| i as Float).collect();
    }

    pub fn get_strings(&self, key: &str) -> Vec<String> {
        return get_values(&self.strings, key)
            .map(|v| v.to_vec())
            .unwrap_or_default();
    }

    //--------------------

    pub fn find_one_bool(&self, key: &str, value: bool) -> bool {
        return get_values(&self.bools, key).map_or(value, |v| v[0]);
    }

    pub fn find_one_int(&self, key: &str, value: i32) -> i32 {
        return get_values(&self.ints, key).map_or(value, |v| v[0]);
    }

    pub fn find_one_float(&self, key: &str, value: Float) -> Float {
        if let Some(v) = get_values(&self.floats, key) {
            return v[0];
        }
        return get_values(&self.ints, key).map_or(value, |v| v[0] as Float);
    }

    pub fn find_one_string(&self, key: &str, value: &str) -> String {
        return get_values(&self.strings, key).map_or(String::from(value), |v| v[0].clone());
    }

    /// Like [`ParamSet::find_one_float`], but also accepts a textual value.
    /// Fails if the key is present with anything that is not a number.
    pub fn get_optional_float(&self, key: &str, value: Float) -> Result<Float, CurveTreeError> {
        if let Some(v) = get_values(&self.strings, key) {
            return v[0].trim().parse::<Float>().map_err(|_| {
                CurveTreeError::invalid_parameter(
                    &get_key_name(key),
                    &format!("expected a floating-point value, got \"{}\"", v[0]),
                )
            });
        }
        if let Some(v) = get_values(&self.floats, key) {
            return Ok(v[0]);
        }
        if let Some(v) = get_values(&self.ints, key) {
            return Ok(v[0] as Float);
        }
        if self.contains_key(key) {
            return Err(CurveTreeError::invalid_parameter(
                &get_key_name(key),
                "expected a floating-point value",
            ));
        }
        return Ok(value);
    }

    //--------------------

    pub fn contains_key(&self, key: &str) -> bool {
        return self.keys.contains(&get_key_name(key));
    }

    pub fn get_keys(&self) -> &[String] {
        return &self.keys;
    }

    pub fn is_empty(&self) -> bool {
        return self.keys.is_empty() && self.children.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut params = ParamSet::new();
        params.add_bool("bool is_a", true);
        assert_eq!(params.find_one_bool("is_a", false), true);
        assert_eq!(params.find_one_bool("bool is_a", false), true);
        assert_eq!(params.find_one_bool("fuga", false), false);
    }

    #[test]
    fn test_002() {
        let mut params = ParamSet::new();
        params.add_int("integer count", 1234);
        params.add_float("float time", 0.25);
        assert_eq!(params.find_one_int("count", 5678), 1234);
        assert_eq!(params.find_one_float("count", 0.0), 1234.0);
        assert_eq!(params.find_one_float("time", 0.5), 0.25);
        assert_eq!(params.find_one_float("fuga", 0.5), 0.5);
        assert_eq!(params.get_keys(), &["count".to_string(), "time".to_string()]);
    }

    #[test]
    fn test_003() {
        let mut params = ParamSet::new();
        params.add_string("string algorithm", "sbvh");
        params.add_string("algorithm", "bvh");
        assert_eq!(params.find_one_string("algorithm", "x"), "bvh");
        assert_eq!(params.get_keys().len(), 1);
    }

    #[test]
    fn test_004() {
        let mut params = ParamSet::new();
        params
            .child_mut("acceleration_structure")
            .add_string("algorithm", "bvh");
        let child = params.child("acceleration_structure");
        assert_eq!(child.find_one_string("algorithm", ""), "bvh");
        assert!(params.child("missing").is_empty());
    }

    #[test]
    fn test_005() {
        let mut params = ParamSet::new();
        params.add_string("time", "0.75");
        assert_eq!(params.get_optional_float("time", 0.5).unwrap(), 0.75);
        params.add_string("time", "soon");
        assert!(params.get_optional_float("time", 0.5).is_err());
        assert_eq!(params.get_optional_float("missing", 0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_006() {
        let mut params = ParamSet::new();
        params.add_int("time", 1);
        assert_eq!(params.get_optional_float("time", 0.5).unwrap(), 1.0);

        let mut params = ParamSet::new();
        params.add_bool("time", true);
        assert!(matches!(
            params.get_optional_float("time", 0.5),
            Err(CurveTreeError::InvalidParameter { .. })
        ));

        let mut params = ParamSet::new();
        params.add_floats("time", &[]);
        assert!(params.get_optional_float("time", 0.5).is_err());
    }
}
