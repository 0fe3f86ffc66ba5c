use super::assembly::*;
use crate::core::pbrt::*;

/// Top-level container of assemblies.
#[derive(Debug, Clone)]
pub struct Scene {
    uid: UniqueId,
    assemblies: Vec<Assembly>,
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            uid: new_uid(),
            assemblies: Vec::new(),
        }
    }

    pub fn get_uid(&self) -> UniqueId {
        return self.uid;
    }

    pub fn assemblies(&self) -> &[Assembly] {
        return &self.assemblies;
    }

    pub fn add_assembly(&mut self, assembly: Assembly) -> usize {
        self.assemblies.push(assembly);
        return self.assemblies.len() - 1;
    }

    pub fn find_assembly(&self, name: &str) -> Option<&Assembly> {
        return self.assemblies.iter().find(|a| a.get_name() == name);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
