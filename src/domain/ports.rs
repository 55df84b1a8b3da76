use crate::domain::model::VaccineCenter;

/// Owning storage for registered centers.
///
/// Implementations must keep centers in insertion order: `centers()` drives the
/// order of every search result.
pub trait CenterStore {
    fn find(&self, id: &str) -> Option<&VaccineCenter>;

    fn find_mut(&mut self, id: &str) -> Option<&mut VaccineCenter>;

    /// Appends a center. Callers check id uniqueness first.
    fn insert(&mut self, center: VaccineCenter);

    fn centers(&self) -> &[VaccineCenter];

    fn len(&self) -> usize {
        self.centers().len()
    }

    fn is_empty(&self) -> bool {
        self.centers().is_empty()
    }
}
