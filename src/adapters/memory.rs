use crate::domain::model::VaccineCenter;
use crate::domain::ports::CenterStore;
use std::collections::HashMap;

/// Insertion-ordered center list with an id index on the side.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCenterStore {
    centers: Vec<VaccineCenter>,
    index: HashMap<String, usize>,
}

impl InMemoryCenterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CenterStore for InMemoryCenterStore {
    fn find(&self, id: &str) -> Option<&VaccineCenter> {
        self.index.get(id).map(|&position| &self.centers[position])
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut VaccineCenter> {
        match self.index.get(id) {
            Some(&position) => self.centers.get_mut(position),
            None => None,
        }
    }

    fn insert(&mut self, center: VaccineCenter) {
        // centers are never removed, so positions stay stable
        self.index.insert(center.id.clone(), self.centers.len());
        self.centers.push(center);
    }

    fn centers(&self) -> &[VaccineCenter] {
        &self.centers
    }
}
